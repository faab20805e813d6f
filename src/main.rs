//! `dogpost` 바이너리 진입점.

use dogpost::interface::cli::{AppComposition, Cli, CliAction};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let action = match Cli::parse_action() {
        Ok(action) => action,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(2);
        }
    };

    let composition = AppComposition::default();

    match action {
        CliAction::InspectConfig => match composition.inspect_config_usecase().execute() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        },
        CliAction::Post(options) => {
            if let Err(err) = composition.post_comments_usecase().execute(options).await {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}
