//! The interactive call-control loop.

use std::io::{self, Write};

use owo_colors::OwoColorize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::command::{InteractiveCommand, COMMAND_HELP};
use super::completion::complete_url;
use crate::client::{forward_url, TelephonyClient, TelephonyError};

/// Prompt shown while no SID is selected.
pub const UNSET_PROMPT: &str = "twerp (...) >> ";

/// Printed once when the loop starts.
pub const INTRO: &str = "Type 'help' for twerp commands";

/// Number of SID characters shown in the prompt.
const PROMPT_SID_LEN: usize = 7;

/// Prompt for a selected SID.
#[must_use]
pub fn prompt_for(sid: &str) -> String {
    let short: String = sid.chars().take(PROMPT_SID_LEN).collect();
    format!("twerp ({short}) >> ")
}

/// What the loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Failures of a single interactive command. None of them end the session.
#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    /// Command needs a SID and none is selected.
    #[error("Need an SID")]
    MissingSid,

    /// Missing or malformed command argument.
    #[error("{0}")]
    Usage(String),

    /// The remote call failed.
    #[error(transparent)]
    Remote(#[from] TelephonyError),

    /// Writing to the terminal failed.
    #[error("Output error: {0}")]
    Io(#[from] io::Error),
}

/// Interactive session bound to one client and an optional current SID.
///
/// `hangup` and `nuke` reset the prompt but keep the stored SID, so `info`
/// after a hangup still targets the old call.
pub struct InteractiveSession<'a, C: TelephonyClient + ?Sized> {
    client: &'a C,
    sid: Option<String>,
    prompt: String,
    color: bool,
}

impl<'a, C: TelephonyClient + ?Sized> InteractiveSession<'a, C> {
    /// Start a session. An empty SID counts as none.
    pub fn new(client: &'a C, sid: Option<String>) -> Self {
        let sid = sid.filter(|s| !s.is_empty());
        let prompt = sid.as_deref().map_or_else(|| UNSET_PROMPT.to_string(), prompt_for);
        Self {
            client,
            sid,
            prompt,
            color: false,
        }
    }

    /// Allow ANSI styling of the prompt and help output. Off by default.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Whether the prompt is drawn in red: only while it shows a SID.
    #[must_use]
    pub fn prompt_is_colored(&self) -> bool {
        self.color && self.prompt != UNSET_PROMPT
    }

    fn current_sid(&self) -> Result<&str, SessionError> {
        self.sid.as_deref().ok_or(SessionError::MissingSid)
    }

    /// Run one command. `output` receives anything the command prints.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] for missing arguments, a missing SID, a
    /// failed remote call, or a failed write.
    pub async fn execute<W: Write>(
        &mut self,
        command: InteractiveCommand,
        output: &mut W,
    ) -> Result<Flow, SessionError> {
        tracing::debug!(?command, sid = ?self.sid, "Interactive command");
        match command {
            InteractiveCommand::Info(arg) => {
                let sid = match arg {
                    Some(sid) => sid,
                    None => self.current_sid()?.to_string(),
                };
                self.client.sid_call(&sid).await?;
            }
            InteractiveCommand::Hangup => {
                self.prompt = UNSET_PROMPT.to_string();
                let sid = self.current_sid()?;
                self.client.hangup(sid).await?;
            }
            InteractiveCommand::Nuke => {
                self.prompt = UNSET_PROMPT.to_string();
                self.client.hangup_all_calls().await?;
            }
            InteractiveCommand::List => self.client.list_calls().await?,
            InteractiveCommand::SetSid(Some(sid)) => {
                self.prompt = prompt_for(&sid);
                self.sid = Some(sid);
            }
            InteractiveCommand::SetSid(None) => {
                return Err(SessionError::Usage(
                    "You must specify the SID to use.".to_string(),
                ));
            }
            InteractiveCommand::Forward(Some(number)) => {
                let url = forward_url(&number);
                writeln!(output, "{url}")?;
                let sid = self.current_sid()?;
                self.client.call_url(sid, &url).await?;
            }
            // No number, nothing to do.
            InteractiveCommand::Forward(None) => {}
            InteractiveCommand::Url(Some(url)) => {
                let sid = self.current_sid()?;
                self.client.call_url(sid, &url).await?;
            }
            InteractiveCommand::Url(None) => {
                return Err(SessionError::Usage(
                    "You need to specify a valid TwiML URL e.g.\n\
                     http://twimlets.com/holdmusic?Bucket=com.twilio.music.ambient"
                        .to_string(),
                ));
            }
            InteractiveCommand::Quit => return Ok(Flow::Quit),
            InteractiveCommand::Help(topic) => write_help(output, topic.as_deref(), self.color)?,
            InteractiveCommand::Unknown(line) => writeln!(output, "*** Unknown syntax: {line}")?,
        }
        Ok(Flow::Continue)
    }

    /// Read and run commands until end of input or a quit command.
    ///
    /// Command failures are reported and the loop keeps going.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing the prompt fails.
    pub async fn run<R, W>(&mut self, input: R, output: &mut W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        writeln!(output, "{INTRO}")?;
        loop {
            if self.prompt_is_colored() {
                write!(output, "{}", self.prompt.red())?;
            } else {
                write!(output, "{}", self.prompt)?;
            }
            output.flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if self.handle_line(&line, output).await? == Flow::Quit {
                break;
            }
        }
        finish(output)
    }

    /// Parse and run one input line, reporting command failures.
    pub(super) async fn handle_line<W: Write>(
        &mut self,
        line: &str,
        output: &mut W,
    ) -> io::Result<Flow> {
        let Some(command) = InteractiveCommand::parse(line) else {
            return Ok(Flow::Continue);
        };
        match self.execute(command, output).await {
            Ok(flow) => Ok(flow),
            Err(SessionError::Io(e)) => Err(e),
            Err(e) => {
                report(&e);
                Ok(Flow::Continue)
            }
        }
    }
}

/// End the prompt line, then leave one blank line.
pub(super) fn finish<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output)?;
    output.flush()
}

fn report(err: &SessionError) {
    match err {
        SessionError::Usage(message) => eprintln!("{message}"),
        SessionError::Remote(e) => tracing::error!(error = %e, "Remote call failed"),
        other => tracing::error!("{other}"),
    }
}

fn write_help<W: Write>(output: &mut W, topic: Option<&str>, color: bool) -> io::Result<()> {
    match topic {
        None => {
            writeln!(output, "Commands:")?;
            for (name, description) in COMMAND_HELP {
                if color {
                    writeln!(output, "  {:<8} {description}", name.bold())?;
                } else {
                    writeln!(output, "  {name:<8} {description}")?;
                }
            }
        }
        Some(topic) => match COMMAND_HELP.iter().find(|(name, _)| *name == topic) {
            Some((_, description)) => {
                writeln!(output, "{description}")?;
                if topic == "url" {
                    writeln!(output, "Hold music:")?;
                    for url in complete_url("") {
                        writeln!(output, "  {url}")?;
                    }
                }
            }
            None => writeln!(output, "*** No help on {topic}")?,
        },
    }
    Ok(())
}
