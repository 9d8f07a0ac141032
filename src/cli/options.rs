//! Command-line option table.
//!
//! Flags are grouped under help headings for display only. Grouping has no
//! effect on which action runs; see [`crate::cli::resolve`] for that.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};

/// Every flag `twerp` understands.
///
/// String options stay `None` when absent. An option given an empty value is
/// treated the same as an absent one by the resolver.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "twerp",
    about = "Command-line control of a Twilio account",
    long_about = None,
    override_usage = "twerp [options]",
    disable_version_flag = true
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Options {
    /// Show twerp version and exit.
    #[arg(short = 'V', long = "version")]
    pub twerp_version: bool,

    /// Show more output stuff.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show debugging information.
    #[arg(long)]
    pub debug: bool,

    /// Show less output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Read account settings from this file instead of the default locations.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Phone number you are calling from or texting from.
    #[arg(short = 'c', long, value_name = "NUMBER", help_heading = "Common options")]
    pub callerid: Option<String>,

    /// Send SMS text message.
    #[arg(short = 'm', long = "message", value_name = "TXT MSG", help_heading = "SMS options")]
    pub sms_message: Option<String>,

    /// Send SMS text message to list of numbers.
    #[arg(
        short = 's',
        long = "sms",
        value_name = "+12135551212,+14155551212",
        help_heading = "SMS options"
    )]
    pub sms_recipients: Option<String>,

    /// Show incoming SMS messages.
    #[arg(short = 'l', long = "list-sms", help_heading = "SMS options")]
    pub listsms: bool,

    /// List of numbers to dial, comma-separated.
    #[arg(
        short = 'd',
        long,
        value_name = "+12135551212,+14155551212",
        help_heading = "Voice call options"
    )]
    pub dial: Option<String>,

    /// Go into interactive command-line mode after dialing.
    #[arg(short = 'i', long, help_heading = "Voice call options")]
    pub interactive: bool,

    /// Use with --dial to say something.
    #[arg(short = 'y', long, value_name = "TEXT", help_heading = "Voice call options")]
    pub say: Option<String>,

    /// URL of TwiML to pass the call with --dial.
    #[arg(short = 'u', long, value_name = "URL", help_heading = "Voice call options")]
    pub url: Option<String>,

    /// Show conferences in progress.
    #[arg(short = 'C', long, help_heading = "Voice call options")]
    pub conferences: bool,

    /// Buy a specific phone number listed with -x or -a.
    #[arg(
        short = 'b',
        long = "buy",
        value_name = "+12135551212",
        help_heading = "Voice call options"
    )]
    pub purchase: Option<String>,

    /// Search for a phone number to purchase by area code. Use -b to buy one.
    #[arg(
        short = 'a',
        long = "area-code",
        value_name = "AREA CODE",
        help_heading = "Voice call options"
    )]
    pub areacode: Option<String>,

    /// Search for a phone number to purchase by the digits or letters it contains.
    #[arg(short = 'x', long, value_name = "TEXT", help_heading = "Voice call options")]
    pub contains: Option<String>,

    /// Show participants for all conferences in progress.
    #[arg(short = 'P', long = "conference-participants", help_heading = "Voice call options")]
    pub participants: bool,

    /// Show notifications from the Twilio API (error messages and warnings).
    #[arg(short = 'F', long, help_heading = "Reporting options")]
    pub notifications: bool,

    /// Show all my Twilio phone numbers. Use -Nv for detailed info on each number.
    #[arg(short = 'N', long, help_heading = "Reporting options")]
    pub numbers: bool,

    /// Show log for given SID.
    #[arg(short = 'S', long = "SID", value_name = "SID", help_heading = "Reporting options")]
    pub sid: Option<String>,

    /// Show all my Twilio applications.
    #[arg(short = 'A', long, help_heading = "Applications")]
    pub applications: bool,
}

impl Options {
    /// Full help text, as printed when no action is selected.
    #[must_use]
    pub fn help_text() -> String {
        Self::command().render_help().to_string()
    }
}
