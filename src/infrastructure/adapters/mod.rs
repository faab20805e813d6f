//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod comment_source;
mod config_repository;
mod host_token_resolver;
mod markdown_renderer;
mod reporter;
mod target_resolver;
mod vcs_factory;

pub use comment_source::JsonLinesCommentSource;
pub use config_repository::JsonConfigRepository;
pub use host_token_resolver::HostTokenResolverAdapter;
pub use markdown_renderer::MarkdownRendererAdapter;
pub use reporter::ConsoleReporter;
pub use target_resolver::UrlTargetResolver;
pub use vcs_factory::VcsFactoryAdapter;
