//! Terminal line editing for the interactive loop.
//!
//! rustyline blocks, so the editor lives on its own thread. The session sends
//! it a prompt and awaits the line that comes back.

use std::borrow::Cow;
use std::io::{self, Write};
use std::sync::mpsc as std_mpsc;
use std::thread;

use owo_colors::OwoColorize;
use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tokio::sync::mpsc;

use super::completion::complete_line;
use super::interactive::{finish, Flow, InteractiveSession, INTRO};
use crate::client::TelephonyClient;

/// rustyline helper: completes `url` arguments and colors the prompt.
#[derive(Debug, Default)]
pub struct SessionHelper {
    colored: bool,
}

impl SessionHelper {
    #[must_use]
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }
}

impl Completer for SessionHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        let (start, candidates) = complete_line(line, pos);
        Ok((start, candidates.into_iter().map(String::from).collect()))
    }
}

impl Highlighter for SessionHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        if self.colored {
            Cow::Owned(prompt.red().to_string())
        } else {
            Cow::Borrowed(prompt)
        }
    }
}

impl Hinter for SessionHelper {
    type Hint = String;
}

impl Validator for SessionHelper {}

impl Helper for SessionHelper {}

#[derive(Debug)]
enum EditorEvent {
    Line(String),
    End,
    Failed(io::Error),
}

/// Line input from the terminal through a rustyline editor thread.
pub struct EditorInput {
    prompts: std_mpsc::Sender<(String, bool)>,
    lines: mpsc::UnboundedReceiver<EditorEvent>,
}

impl EditorInput {
    /// Start the editor thread.
    #[must_use]
    pub fn spawn() -> Self {
        let (prompt_tx, prompt_rx) = std_mpsc::channel::<(String, bool)>();
        let (line_tx, line_rx) = mpsc::unbounded_channel();

        thread::spawn(move || {
            let mut editor = match Editor::<SessionHelper, DefaultHistory>::new() {
                Ok(editor) => editor,
                Err(e) => {
                    let _ = line_tx.send(EditorEvent::Failed(io::Error::other(e)));
                    return;
                }
            };
            while let Ok((prompt, colored)) = prompt_rx.recv() {
                editor.set_helper(Some(SessionHelper::new(colored)));
                let event = match editor.readline(&prompt) {
                    Ok(line) => {
                        let _ = editor.add_history_entry(line.as_str());
                        EditorEvent::Line(line)
                    }
                    // Ctrl-C ends the session like Ctrl-D; the process then exits 0.
                    Err(ReadlineError::Eof | ReadlineError::Interrupted) => EditorEvent::End,
                    Err(e) => EditorEvent::Failed(io::Error::other(e)),
                };
                if line_tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self {
            prompts: prompt_tx,
            lines: line_rx,
        }
    }

    /// Show `prompt` and wait for a line. `None` on Ctrl-D, Ctrl-C, or when
    /// the editor thread has gone away.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be read.
    pub async fn read_line(&mut self, prompt: &str, colored: bool) -> io::Result<Option<String>> {
        if self.prompts.send((prompt.to_string(), colored)).is_err() {
            return Ok(None);
        }
        match self.lines.recv().await {
            Some(EditorEvent::Line(line)) => Ok(Some(line)),
            Some(EditorEvent::End) | None => Ok(None),
            Some(EditorEvent::Failed(e)) => Err(e),
        }
    }
}

impl<C: TelephonyClient + ?Sized> InteractiveSession<'_, C> {
    /// Like [`InteractiveSession::run`], reading from a line editor with
    /// history and `url` completion.
    ///
    /// # Errors
    ///
    /// Returns an error only if the terminal cannot be read or written.
    pub async fn run_editor<W: Write>(
        &mut self,
        mut input: EditorInput,
        output: &mut W,
    ) -> io::Result<()> {
        writeln!(output, "{INTRO}")?;
        output.flush()?;
        loop {
            let prompt = self.prompt().to_string();
            let Some(line) = input.read_line(&prompt, self.prompt_is_colored()).await? else {
                break;
            };
            if self.handle_line(&line, output).await? == Flow::Quit {
                break;
            }
        }
        finish(output)
    }
}
