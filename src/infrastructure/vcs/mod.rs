//! 리뷰 서비스(VCS) 추상화 계층.

pub mod github;

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::HostConfig;
use crate::domain::review::ReviewComment;
use crate::domain::target::ReviewTarget;

#[async_trait]
pub trait VcsProvider: Send + Sync {
    /// PR의 현재 HEAD SHA 조회
    async fn fetch_head_sha(&self) -> Result<String>;
    /// 기존 인라인 리뷰 코멘트 조회(전체 페이지)
    async fn list_review_comments(&self) -> Result<Vec<ReviewComment>>;
    /// new file 라인에 인라인 리뷰 코멘트 생성
    async fn create_review_comment(
        &self,
        commit_id: &str,
        path: &str,
        line: u32,
        body: &str,
    ) -> Result<ReviewComment>;
}

pub fn build_vcs_client(
    target: &ReviewTarget,
    host_cfg: Option<&HostConfig>,
    token: Option<String>,
) -> Box<dyn VcsProvider> {
    let api_base = host_cfg.and_then(|h| h.api_base.clone());

    Box::new(github::GitHubClient::new(
        target.host.clone(),
        target.owner.clone(),
        target.repo.clone(),
        target.number,
        token,
        api_base,
    ))
}
