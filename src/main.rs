//! eh - one basic-auth request against a path-based API
//!
//! Response bodies go to stdout; errors and logs go to stderr.

use std::io;
use std::process::ExitCode;

use ehcli::constants::{APP_VERSION, DEFAULT_LOG_FILTER, ENV_LOG};
use ehcli::{app, Args, Config, EhError};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::from_env();

    if args.show_version {
        println!("{}", APP_VERSION);
        return ExitCode::SUCCESS;
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<EhError>() {
                Some(eh) => {
                    for line in eh.messages() {
                        eprintln!("{}", line);
                    }
                }
                None => eprintln!("{:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let _guard = init_logging()?;

    let config = Config::from_process_env(args)?;
    tracing::debug!(endpoint = %config.endpoint, user = %config.credentials.user, "Configuration resolved");

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    app::run(&config, stdin, &mut stdout).await?;
    Ok(())
}

/// Log to stderr through a non-blocking writer, filtered by `EH_LOG`
fn init_logging() -> anyhow::Result<WorkerGuard> {
    let filter = EnvFilter::try_from_env(ENV_LOG)
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(io::stderr());
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        .with_ansi(false)
        .try_init()
        .map_err(anyhow::Error::msg)?;
    Ok(guard)
}
