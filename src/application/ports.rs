//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::{Config, HostConfig};
use crate::domain::review::{Comment, PostSummary, ReviewComment};
use crate::domain::target::ReviewTarget;

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// URL 입력값을 도메인 대상 식별자로 변환하는 포트.
pub trait TargetResolver: Send + Sync {
    fn parse(&self, input: &str) -> Result<ReviewTarget>;
}

/// Host 토큰 해석 결과.
#[derive(Debug, Clone)]
pub struct HostTokenResolution {
    pub token: Option<String>,
    /// `inline`, `env:NAME`, `cmd:...` 등 출처 표기
    pub source: Option<String>,
}

/// 호스트 설정으로부터 VCS 토큰을 해석하는 포트.
pub trait HostTokenResolver: Send + Sync {
    fn resolve(&self, host: &str, host_cfg: Option<&HostConfig>) -> Result<HostTokenResolution>;
}

/// 게시할 코멘트를 읽어오는 포트.
pub trait CommentSource: Send + Sync {
    /// `input`이 없으면 표준 입력에서 읽는다.
    fn read(&self, input: Option<&Path>) -> Result<Vec<Comment>>;
}

/// 리뷰 서비스(PR 인라인 코멘트) 연동 추상화 포트.
#[async_trait]
pub trait VcsGateway: Send + Sync {
    async fn fetch_head_sha(&self) -> Result<String>;
    async fn list_review_comments(&self) -> Result<Vec<ReviewComment>>;
    async fn create_review_comment(
        &self,
        commit_id: &str,
        path: &str,
        line: u32,
        body: &str,
    ) -> Result<ReviewComment>;
}

/// 대상/호스트 설정에 맞는 VCS 게이트웨이를 생성하는 팩토리 포트.
pub trait VcsFactory: Send + Sync {
    fn build(
        &self,
        target: &ReviewTarget,
        host_cfg: Option<&HostConfig>,
        token: Option<String>,
    ) -> Box<dyn VcsGateway>;
}

/// dry-run 미리보기 렌더링 포트.
pub trait MarkdownRenderer: Send + Sync {
    fn render_preview(&self, comment: &Comment, body: &str) -> String;
    fn render_summary(&self, summary: &PostSummary) -> String;
}

/// 콘솔/로그 출력 추상화 포트.
pub trait Reporter: Send + Sync {
    fn section(&self, name: &str);
    fn kv(&self, key: &str, value: &str);
    fn status(&self, scope: &str, message: &str);
    fn raw(&self, line: &str);
}
