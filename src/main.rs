//! twerp - command-line control of a Twilio account.

use std::io::{IsTerminal, Stdout};
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tokio::io::BufReader;

use twerp::cli::{self, Options, Outcome, Prepared};
use twerp::client::RestClient;
use twerp::config::ConfigLoader;
use twerp::session::{EditorInput, InteractiveSession};

fn exit_code(status: i32) -> ExitCode {
    u8::try_from(status).map_or(ExitCode::FAILURE, ExitCode::from)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let options = match Options::try_parse() {
        Ok(options) => options,
        Err(e) => {
            let _ = e.print();
            if !matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                eprint!("\n{}", Options::help_text());
            }
            return exit_code(e.exit_code());
        }
    };

    // Single-threaded runtime: the thread default covers every task.
    let dispatch = cli::build_dispatch(&options);
    let _log_guard = tracing::dispatcher::set_default(&dispatch);

    exit_code(launch(&options).await)
}

async fn launch(options: &Options) -> i32 {
    let mut stdout = std::io::stdout();
    let action = match cli::prepare(options, &mut stdout) {
        Ok(Prepared::Exit(status)) => return status,
        Ok(Prepared::Remote(action)) => action,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            return 1;
        }
    };

    let loader = options
        .config
        .clone()
        .map_or_else(ConfigLoader::new, ConfigLoader::with_path);
    let config = match loader.load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            return 1;
        }
    };

    let client = match RestClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to create Twilio client");
            return 1;
        }
    };

    match cli::execute(action, &client, &mut stdout).await {
        Ok(Outcome::Exit(status)) => status,
        Ok(Outcome::Interactive(sid)) => interact(&client, sid, &mut stdout).await,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            1
        }
    }
}

async fn interact(client: &RestClient, sid: Option<String>, stdout: &mut Stdout) -> i32 {
    let mut session = InteractiveSession::new(client, sid).with_color(stdout.is_terminal());

    let result = if std::io::stdin().is_terminal() {
        // The editor owns the terminal and turns Ctrl-C into end of input.
        session.run_editor(EditorInput::spawn(), stdout).await
    } else {
        let input = BufReader::new(tokio::io::stdin());
        tokio::select! {
            result = session.run(input, stdout) => result,
            _ = tokio::signal::ctrl_c() => {
                // A pending stdin read would block runtime shutdown.
                tracing::debug!("Interrupted");
                std::process::exit(0);
            }
        }
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!(error = %e, "Interactive session ended abnormally");
            1
        }
    }
}
