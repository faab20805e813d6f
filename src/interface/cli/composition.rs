//! 애플리케이션 조립(composition root) 모듈.

use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::post_comments::PostCommentsUseCase;
use crate::infrastructure::adapters::{
    ConsoleReporter, HostTokenResolverAdapter, JsonConfigRepository, JsonLinesCommentSource,
    MarkdownRendererAdapter, UrlTargetResolver, VcsFactoryAdapter,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    host_token_resolver: HostTokenResolverAdapter,
    target_resolver: UrlTargetResolver,
    vcs_factory: VcsFactoryAdapter,
    comment_source: JsonLinesCommentSource,
    renderer: MarkdownRendererAdapter,
    reporter: ConsoleReporter,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self {
            config_repo: JsonConfigRepository,
            host_token_resolver: HostTokenResolverAdapter,
            target_resolver: UrlTargetResolver,
            vcs_factory: VcsFactoryAdapter,
            comment_source: JsonLinesCommentSource,
            renderer: MarkdownRendererAdapter,
            reporter: ConsoleReporter::new(),
        }
    }
}

impl AppComposition {
    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }

    /// 코멘트 게시 유스케이스를 생성한다.
    pub fn post_comments_usecase(&self) -> PostCommentsUseCase<'_> {
        PostCommentsUseCase {
            config_repo: &self.config_repo,
            host_token_resolver: &self.host_token_resolver,
            target_resolver: &self.target_resolver,
            vcs_factory: &self.vcs_factory,
            comment_source: &self.comment_source,
            renderer: &self.renderer,
            reporter: &self.reporter,
        }
    }
}
