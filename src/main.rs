use twlog::commands::Cli;
use twlog::libs::{error::exit_code, messages::macros::is_debug_mode};
use twlog::msg_error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("twlog=debug")))
            .with_target(false)
            .init();
    }

    if let Err(error) = Cli::menu().await {
        msg_error!(error);
        std::process::exit(exit_code(&error));
    }
}
