use pomolog::commands::Cli;
use pomolog::libs::error::TrackerError;
use pomolog::libs::messages::Message;
use pomolog::msg_error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(Message::CommandFailed(format!("{:#}", e)));
            let code = e
                .chain()
                .find_map(|cause| cause.downcast_ref::<TrackerError>())
                .map_or(1, |err| err.kind().exit_code());
            ExitCode::from(code as u8)
        }
    }
}

fn init_tracing() {
    let default_directive = if std::env::var("POMOLOG_DEBUG").is_ok() {
        "pomolog=debug"
    } else {
        "pomolog=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
