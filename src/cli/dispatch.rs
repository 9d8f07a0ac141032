//! Execution of a resolved action against a telephony client.

use std::io::{self, Write};

use super::{resolve, Action, Options};
use crate::client::{TelephonyClient, TelephonyError};

/// Exit status for success.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit status when no action was selected or the command line was malformed.
pub const EXIT_USAGE: i32 = 2;

/// Version line printed by `--version`.
#[must_use]
pub fn version_line() -> String {
    format!("twerp version {}", env!("CARGO_PKG_VERSION"))
}

/// What the launcher should do once an action has run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Exit the process with this status.
    Exit(i32),
    /// Hand control to an interactive session, optionally on a known call.
    Interactive(Option<String>),
}

/// Errors that end a one-shot invocation.
#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
    #[error(transparent)]
    Remote(#[from] TelephonyError),

    #[error("Output error: {0}")]
    Io(#[from] io::Error),
}

/// Where [`prepare`] left an invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prepared {
    /// Finished locally; exit with this status.
    Exit(i32),
    /// Needs a telephony client to run.
    Remote(Action),
}

/// Resolve `options` and finish everything that needs no account: version,
/// help and dial validation.
///
/// # Errors
///
/// Returns an I/O error when help or version output cannot be written.
pub fn prepare<W: Write>(options: &Options, output: &mut W) -> io::Result<Prepared> {
    match resolve(options) {
        Ok(action) => Ok(match run_local(&action, output)? {
            Some(status) => Prepared::Exit(status),
            None => Prepared::Remote(action),
        }),
        Err(e) => {
            tracing::error!("You must specify a --url with TwiML or --say with text");
            tracing::error!(
                "e.g. This URL will say 'hello tworld': \
                 http://twimlets.com/message?Message%5B0%5D=Hello%20Tworld&"
            );
            tracing::debug!(error = %e, "Dial rejected");
            Ok(Prepared::Exit(e.exit_status()))
        }
    }
}

/// Resolve `options` and run the chosen action.
///
/// A local validation failure is logged and becomes its exit status without
/// touching the client.
///
/// # Errors
///
/// Returns [`DispatchError::Remote`] when the client call fails.
pub async fn run<C, W>(
    options: &Options,
    client: &C,
    output: &mut W,
) -> Result<Outcome, DispatchError>
where
    C: TelephonyClient + ?Sized,
    W: Write,
{
    match prepare(options, output)? {
        Prepared::Exit(status) => Ok(Outcome::Exit(status)),
        Prepared::Remote(action) => execute(action, client, output).await,
    }
}

fn run_local<W: Write>(action: &Action, output: &mut W) -> io::Result<Option<i32>> {
    match action {
        Action::ShowVersion => {
            writeln!(output, "{}", version_line())?;
            Ok(Some(EXIT_SUCCESS))
        }
        Action::ShowHelp => {
            write!(output, "{}", Options::help_text())?;
            Ok(Some(EXIT_USAGE))
        }
        _ => Ok(None),
    }
}

/// Run a single action.
///
/// # Errors
///
/// Returns [`DispatchError::Remote`] when the client call fails and
/// [`DispatchError::Io`] when help or version output cannot be written.
pub async fn execute<C, W>(
    action: Action,
    client: &C,
    output: &mut W,
) -> Result<Outcome, DispatchError>
where
    C: TelephonyClient + ?Sized,
    W: Write,
{
    if let Some(status) = run_local(&action, output)? {
        return Ok(Outcome::Exit(status));
    }
    match action {
        Action::ListNumbers { verbose } => client.list_numbers(verbose).await?,
        Action::Dial(request) => {
            let sid = client
                .call_numbers(
                    &request.numbers,
                    request.verbose,
                    request.callerid.as_deref(),
                    request.url.as_deref(),
                    request.say.as_deref(),
                )
                .await?;
            if request.interactive {
                return Ok(Outcome::Interactive(Some(sid)));
            }
        }
        Action::PurchaseNumber { number } => client.purchase_number(&number).await?,
        Action::SearchByAreaCodeAndContains {
            area_code,
            contains,
        } => client.numbers_contain_areacode(&area_code, &contains).await?,
        Action::SearchByContains { contains } => client.numbers_contain(&contains).await?,
        Action::SearchByAreaCode { area_code } => client.search_numbers(&area_code).await?,
        Action::ListApplications => client.list_applications().await?,
        Action::ListConferenceParticipants => client.list_conference_participants().await?,
        Action::ListConferences => client.list_conferences().await?,
        Action::ListSms => client.list_sms().await?,
        Action::GetSmsBySid { sid } => client.get_sms_sid(&sid).await?,
        Action::SendSms {
            numbers,
            message,
            verbose,
        } => client.send_sms(&numbers, message.as_deref(), verbose).await?,
        Action::ListNotifications { verbose } => client.notifications(verbose).await?,
        Action::EnterInteractive => return Ok(Outcome::Interactive(None)),
        // Handled by run_local.
        Action::ShowVersion | Action::ShowHelp => {}
    }
    Ok(Outcome::Exit(EXIT_SUCCESS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_version_is_local() {
        let options = Options {
            twerp_version: true,
            ..Default::default()
        };
        let mut out = Vec::new();
        assert_eq!(prepare(&options, &mut out).unwrap(), Prepared::Exit(EXIT_SUCCESS));
        assert!(String::from_utf8(out).unwrap().starts_with("twerp version "));
    }

    #[test]
    fn test_prepare_no_action_prints_help() {
        let mut out = Vec::new();
        assert_eq!(
            prepare(&Options::default(), &mut out).unwrap(),
            Prepared::Exit(EXIT_USAGE)
        );
        assert!(String::from_utf8(out).unwrap().contains("--dial"));
    }

    #[test]
    fn test_prepare_rejects_dial_without_twiml() {
        let options = Options {
            dial: Some("+12135551212".to_string()),
            ..Default::default()
        };
        let mut out = Vec::new();
        assert_eq!(prepare(&options, &mut out).unwrap(), Prepared::Exit(1));
        assert!(out.is_empty());
    }

    #[test]
    fn test_prepare_defers_remote_actions() {
        let options = Options {
            numbers: true,
            ..Default::default()
        };
        assert_eq!(
            prepare(&options, &mut Vec::new()).unwrap(),
            Prepared::Remote(Action::ListNumbers { verbose: false })
        );
    }

    #[test]
    fn test_version_line() {
        assert!(version_line().starts_with("twerp version "));
        assert!(version_line().ends_with(env!("CARGO_PKG_VERSION")));
    }
}
