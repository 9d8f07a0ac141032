//! Interactive command parsing.

/// One line typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractiveCommand {
    /// `info [sid]`
    Info(Option<String>),
    Hangup,
    /// Hang up every call on the account.
    Nuke,
    List,
    /// `sid <value>`
    SetSid(Option<String>),
    /// `forward <number>`
    Forward(Option<String>),
    /// `url <url>`
    Url(Option<String>),
    /// `EOF`, `quit` or `exit`.
    Quit,
    /// `help [command]` or `?`.
    Help(Option<String>),
    /// Anything else, kept verbatim for the error message.
    Unknown(String),
}

impl InteractiveCommand {
    /// Parse a line. Blank lines yield `None`.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (name, rest) = match line.strip_prefix('?') {
            Some(rest) => ("help", rest.trim()),
            None => line
                .split_once(char::is_whitespace)
                .map_or((line, ""), |(name, rest)| (name, rest.trim())),
        };
        let arg = (!rest.is_empty()).then(|| rest.to_string());

        let command = match name {
            "info" => Self::Info(arg),
            "hangup" => Self::Hangup,
            "nuke" => Self::Nuke,
            "list" => Self::List,
            "sid" => Self::SetSid(arg),
            "forward" => Self::Forward(arg),
            "url" => Self::Url(arg),
            "EOF" | "quit" | "exit" => Self::Quit,
            "help" => Self::Help(arg),
            _ => Self::Unknown(line.to_string()),
        };
        Some(command)
    }
}

/// Name and one-line description of each command, for `help`.
pub const COMMAND_HELP: &[(&str, &str)] = &[
    ("info", "Display info for current SID, or for the SID given"),
    ("hangup", "Hang up the call associated with the SID shown in the prompt"),
    (
        "nuke",
        "Hang up ALL voice calls in progress for the entire account",
    ),
    ("list", "List all calls in progress for your account"),
    ("sid", "Change SID for the session. New SID shows in prompt"),
    ("forward", "Forward call to another phone number, e.g. forward +13235551212"),
    ("url", "Redirect call using TwiML at URL, e.g. url http://twimlets.com/some.twml"),
    ("EOF", "Exit twerp's interactive mode (also quit, exit, Ctrl-D)"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_is_none() {
        assert_eq!(InteractiveCommand::parse(""), None);
        assert_eq!(InteractiveCommand::parse("   \t"), None);
    }

    #[test]
    fn test_command_with_argument() {
        assert_eq!(
            InteractiveCommand::parse("sid CA1234567890"),
            Some(InteractiveCommand::SetSid(Some("CA1234567890".to_string())))
        );
        assert_eq!(
            InteractiveCommand::parse("forward   +13235551212  "),
            Some(InteractiveCommand::Forward(Some("+13235551212".to_string())))
        );
    }

    #[test]
    fn test_command_without_argument() {
        assert_eq!(
            InteractiveCommand::parse("info"),
            Some(InteractiveCommand::Info(None))
        );
        assert_eq!(
            InteractiveCommand::parse("url"),
            Some(InteractiveCommand::Url(None))
        );
    }

    #[test]
    fn test_argument_ignored_by_bare_commands() {
        assert_eq!(
            InteractiveCommand::parse("hangup now"),
            Some(InteractiveCommand::Hangup)
        );
    }

    #[test]
    fn test_quit_aliases() {
        for line in ["EOF", "quit", "exit"] {
            assert_eq!(
                InteractiveCommand::parse(line),
                Some(InteractiveCommand::Quit)
            );
        }
    }

    #[test]
    fn test_question_mark_is_help() {
        assert_eq!(
            InteractiveCommand::parse("?url"),
            Some(InteractiveCommand::Help(Some("url".to_string())))
        );
    }

    #[test]
    fn test_unknown_keeps_line() {
        assert_eq!(
            InteractiveCommand::parse("dance wildly"),
            Some(InteractiveCommand::Unknown("dance wildly".to_string()))
        );
    }

    #[test]
    fn test_every_command_has_help() {
        for (name, _) in COMMAND_HELP {
            let parsed = InteractiveCommand::parse(name).unwrap();
            assert!(!matches!(parsed, InteractiveCommand::Unknown(_)), "{name}");
        }
    }
}
