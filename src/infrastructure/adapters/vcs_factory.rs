//! VCS 게이트웨이 포트 구현 어댑터.

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::HostConfig;
use crate::application::ports::{VcsFactory, VcsGateway};
use crate::domain::review::ReviewComment;
use crate::domain::target::ReviewTarget;
use crate::infrastructure::vcs;

/// VCS 게이트웨이 팩토리 어댑터.
pub struct VcsFactoryAdapter;

impl VcsFactory for VcsFactoryAdapter {
    fn build(
        &self,
        target: &ReviewTarget,
        host_cfg: Option<&HostConfig>,
        token: Option<String>,
    ) -> Box<dyn VcsGateway> {
        Box::new(VcsGatewayAdapter {
            inner: vcs::build_vcs_client(target, host_cfg, token),
        })
    }
}

/// 인프라 VCS Provider를 애플리케이션 포트로 감싸는 래퍼.
struct VcsGatewayAdapter {
    inner: Box<dyn vcs::VcsProvider>,
}

#[async_trait]
impl VcsGateway for VcsGatewayAdapter {
    async fn fetch_head_sha(&self) -> Result<String> {
        self.inner.fetch_head_sha().await
    }

    async fn list_review_comments(&self) -> Result<Vec<ReviewComment>> {
        self.inner.list_review_comments().await
    }

    async fn create_review_comment(
        &self,
        commit_id: &str,
        path: &str,
        line: u32,
        body: &str,
    ) -> Result<ReviewComment> {
        self.inner
            .create_review_comment(commit_id, path, line, body)
            .await
    }
}
