//! Colored terminal output for Twilio resources.
//!
//! Every listing the REST client produces goes through here so the one-shot
//! commands and the interactive session print records the same way.

use std::io::{self, Write};

use chrono::DateTime;
use owo_colors::OwoColorize;

use crate::client::{
    Application, AvailableNumber, Call, Conference, IncomingNumber, Message, Notification,
    Participant,
};

/// Maximum length for message bodies in list views.
const BODY_MAX_LEN: usize = 60;

/// Truncate a string to a maximum length, adding ellipsis if truncated.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{kept}...")
    }
}

/// Render an RFC 2822 API timestamp as `YYYY-MM-DD HH:MM`.
///
/// Unparseable input is returned unchanged.
#[must_use]
pub fn format_date(raw: &str) -> String {
    DateTime::parse_from_rfc2822(raw)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn optional(value: Option<&String>) -> &str {
    value.map_or("-", String::as_str)
}

fn flush() {
    let _ = io::stdout().flush();
}

/// Print a note when a listing came back empty.
pub fn print_empty(what: &str) {
    println!("{}", format!("No {what}.").dimmed());
    flush();
}

pub fn print_number(number: &IncomingNumber, verbose: bool) {
    println!(
        "{} {}",
        number.phone_number.green().bold(),
        number.friendly_name
    );
    if verbose {
        println!("    {} {}", "sid".dimmed(), number.sid);
        println!("    {} {}", "voice".dimmed(), optional(number.voice_url.as_ref()));
        println!("    {} {}", "sms".dimmed(), optional(number.sms_url.as_ref()));
        if let Some(created) = &number.date_created {
            println!("    {} {}", "created".dimmed(), format_date(created));
        }
    }
    flush();
}

pub fn print_available(number: &AvailableNumber) {
    let place = [number.locality.as_ref(), number.region.as_ref(), number.postal_code.as_ref()]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    println!(
        "{} {} {}",
        number.phone_number.green().bold(),
        number.friendly_name,
        place.dimmed()
    );
    flush();
}

pub fn print_purchased(number: &IncomingNumber) {
    println!(
        "{} {} ({})",
        "[PURCHASED]".green().bold(),
        number.phone_number,
        number.sid.dimmed()
    );
    flush();
}

pub fn print_call(call: &Call) {
    println!(
        "{} {} -> {} {} {}",
        call.sid.cyan(),
        call.from,
        call.to,
        call.status.yellow(),
        call.direction.dimmed()
    );
    flush();
}

/// Print the full record for one call.
pub fn print_call_detail(call: &Call) {
    println!("{} {}", "[CALL]".blue().bold(), call.sid.cyan());
    println!("    {} {}", "from".dimmed(), call.from);
    println!("    {} {}", "to".dimmed(), call.to);
    println!("    {} {}", "status".dimmed(), call.status.yellow());
    println!("    {} {}", "direction".dimmed(), call.direction);
    if let Some(start) = &call.start_time {
        println!("    {} {}", "started".dimmed(), format_date(start));
    }
    println!("    {} {}", "duration".dimmed(), optional(call.duration.as_ref()));
    println!("    {} {}", "price".dimmed(), optional(call.price.as_ref()));
    flush();
}

pub fn print_dialed(call: &Call, verbose: bool) {
    println!(
        "{} {} ({})",
        "[DIAL]".green().bold(),
        call.to,
        call.sid.cyan()
    );
    if verbose {
        println!("    {} {}", "from".dimmed(), call.from);
        println!("    {} {}", "status".dimmed(), call.status);
    }
    flush();
}

pub fn print_message(message: &Message) {
    let date = message.date_sent.as_deref().map(format_date).unwrap_or_default();
    println!(
        "{} {} {} -> {} {}",
        date.dimmed(),
        message.sid.cyan(),
        message.from,
        message.to,
        truncate(&message.body, BODY_MAX_LEN)
    );
    flush();
}

/// Print the full record for one message.
pub fn print_message_detail(message: &Message) {
    println!("{} {}", "[SMS]".blue().bold(), message.sid.cyan());
    println!("    {} {}", "from".dimmed(), message.from);
    println!("    {} {}", "to".dimmed(), message.to);
    println!("    {} {}", "status".dimmed(), message.status.yellow());
    println!("    {} {}", "direction".dimmed(), message.direction);
    if let Some(sent) = &message.date_sent {
        println!("    {} {}", "sent".dimmed(), format_date(sent));
    }
    println!("    {}", message.body);
    flush();
}

pub fn print_sent(message: &Message, verbose: bool) {
    println!(
        "{} {} ({})",
        "[SMS]".green().bold(),
        message.to,
        message.sid.cyan()
    );
    if verbose {
        println!("    {} {}", "status".dimmed(), message.status);
        println!("    {}", message.body.dimmed());
    }
    flush();
}

pub fn print_application(app: &Application) {
    println!("{} {}", app.sid.cyan(), app.friendly_name.bold());
    println!("    {} {}", "voice".dimmed(), optional(app.voice_url.as_ref()));
    println!("    {} {}", "sms".dimmed(), optional(app.sms_url.as_ref()));
    flush();
}

pub fn print_conference(conference: &Conference) {
    let created = conference
        .date_created
        .as_deref()
        .map(format_date)
        .unwrap_or_default();
    println!(
        "{} {} {} {}",
        conference.sid.cyan(),
        conference.friendly_name.bold(),
        conference.status.yellow(),
        created.dimmed()
    );
    flush();
}

pub fn print_participant(participant: &Participant) {
    let mut flags = Vec::new();
    if participant.muted {
        flags.push("muted");
    }
    if participant.hold {
        flags.push("on hold");
    }
    println!(
        "    {} {}",
        participant.call_sid.cyan(),
        flags.join(", ").dimmed()
    );
    flush();
}

pub fn print_notification(notification: &Notification, verbose: bool) {
    let label = if notification.is_error() {
        "[ERROR]".red().bold().to_string()
    } else {
        "[WARNING]".yellow().bold().to_string()
    };
    let date = notification
        .message_date
        .as_deref()
        .map(format_date)
        .unwrap_or_default();
    println!(
        "{} {} {} {}",
        date.dimmed(),
        label,
        optional(notification.error_code.as_ref()),
        optional(notification.more_info.as_ref())
    );
    if verbose {
        println!("    {} {}", "sid".dimmed(), notification.sid);
        println!(
            "    {} {}",
            "request".dimmed(),
            optional(notification.request_url.as_ref())
        );
        if let Some(text) = &notification.message_text {
            println!("    {}", text.dimmed());
        }
    }
    flush();
}

pub fn print_hangup(sid: &str) {
    println!("{} {}", "[HANGUP]".red().bold(), sid);
    flush();
}

pub fn print_redirect(sid: &str, url: &str) {
    println!("{} {} -> {}", "[REDIRECT]".magenta().bold(), sid, url.dimmed());
    flush();
}
