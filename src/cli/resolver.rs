//! Selection of the single action an invocation performs.

use super::Options;

/// A one-shot operation chosen from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ListNumbers { verbose: bool },
    Dial(DialRequest),
    PurchaseNumber { number: String },
    SearchByAreaCodeAndContains { area_code: String, contains: String },
    SearchByContains { contains: String },
    SearchByAreaCode { area_code: String },
    ListApplications,
    ListConferenceParticipants,
    ListConferences,
    ListSms,
    ShowVersion,
    GetSmsBySid { sid: String },
    SendSms {
        numbers: Vec<String>,
        message: Option<String>,
        verbose: bool,
    },
    ListNotifications { verbose: bool },
    EnterInteractive,
    ShowHelp,
}

/// Arguments for placing one or more outbound calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialRequest {
    pub numbers: Vec<String>,
    pub verbose: bool,
    pub callerid: Option<String>,
    pub url: Option<String>,
    pub say: Option<String>,
    /// Hand the new call's SID to an interactive session once dialed.
    pub interactive: bool,
}

/// Local validation failures raised before any remote call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("--{option} requires {required}")]
    MissingArgument {
        option: &'static str,
        required: &'static str,
    },
}

impl ResolveError {
    /// Process exit status for this failure.
    #[must_use]
    pub fn exit_status(&self) -> i32 {
        match self {
            Self::MissingArgument { .. } => 1,
        }
    }
}

/// One entry of the dispatch table: when `matches` holds, `build` decides.
struct Rule {
    name: &'static str,
    matches: fn(&Options) -> bool,
    build: fn(&Options) -> Result<Action, ResolveError>,
}

// Evaluated top to bottom, first match wins. Order is part of the CLI contract:
// `--numbers` shadows every other flag, `--dial` shadows `--interactive`, etc.
const RULES: &[Rule] = &[
    Rule {
        name: "numbers",
        matches: |o| o.numbers,
        build: |o| Ok(Action::ListNumbers { verbose: o.verbose }),
    },
    Rule {
        name: "dial",
        matches: |o| is_set(o.dial.as_ref()),
        build: build_dial,
    },
    Rule {
        name: "purchase",
        matches: |o| is_set(o.purchase.as_ref()),
        build: |o| {
            Ok(Action::PurchaseNumber {
                number: value(o.purchase.as_ref()),
            })
        },
    },
    Rule {
        name: "contains+areacode",
        matches: |o| is_set(o.contains.as_ref()) && is_set(o.areacode.as_ref()),
        build: |o| {
            Ok(Action::SearchByAreaCodeAndContains {
                area_code: value(o.areacode.as_ref()),
                contains: value(o.contains.as_ref()),
            })
        },
    },
    Rule {
        name: "contains",
        matches: |o| is_set(o.contains.as_ref()),
        build: |o| {
            Ok(Action::SearchByContains {
                contains: value(o.contains.as_ref()),
            })
        },
    },
    Rule {
        name: "areacode",
        matches: |o| is_set(o.areacode.as_ref()),
        build: |o| {
            Ok(Action::SearchByAreaCode {
                area_code: value(o.areacode.as_ref()),
            })
        },
    },
    Rule {
        name: "applications",
        matches: |o| o.applications,
        build: |_| Ok(Action::ListApplications),
    },
    Rule {
        name: "participants",
        matches: |o| o.participants,
        build: |_| Ok(Action::ListConferenceParticipants),
    },
    Rule {
        name: "conferences",
        matches: |o| o.conferences,
        build: |_| Ok(Action::ListConferences),
    },
    Rule {
        name: "listsms",
        matches: |o| o.listsms,
        build: |_| Ok(Action::ListSms),
    },
    Rule {
        name: "version",
        matches: |o| o.twerp_version,
        build: |_| Ok(Action::ShowVersion),
    },
    Rule {
        name: "sid",
        matches: |o| is_set(o.sid.as_ref()),
        build: |o| {
            Ok(Action::GetSmsBySid {
                sid: value(o.sid.as_ref()),
            })
        },
    },
    Rule {
        name: "sms",
        matches: |o| is_set(o.sms_recipients.as_ref()),
        build: |o| {
            Ok(Action::SendSms {
                numbers: split_numbers(&value(o.sms_recipients.as_ref())),
                message: o.sms_message.clone(),
                verbose: o.verbose,
            })
        },
    },
    Rule {
        name: "notifications",
        matches: |o| o.notifications,
        build: |o| Ok(Action::ListNotifications { verbose: o.verbose }),
    },
    Rule {
        name: "interactive",
        matches: |o| o.interactive,
        build: |_| Ok(Action::EnterInteractive),
    },
];

/// Pick the action for `options`.
///
/// Falls back to [`Action::ShowHelp`] when nothing actionable is set.
///
/// # Errors
///
/// Returns [`ResolveError::MissingArgument`] when `--dial` is given without
/// `--url` or `--say`.
pub fn resolve(options: &Options) -> Result<Action, ResolveError> {
    for rule in RULES {
        if (rule.matches)(options) {
            tracing::debug!(rule = rule.name, "Resolved command-line action");
            return (rule.build)(options);
        }
    }
    tracing::debug!("No action selected");
    Ok(Action::ShowHelp)
}

fn build_dial(options: &Options) -> Result<Action, ResolveError> {
    if !is_set(options.url.as_ref()) && !is_set(options.say.as_ref()) {
        return Err(ResolveError::MissingArgument {
            option: "dial",
            required: "--url or --say",
        });
    }
    Ok(Action::Dial(DialRequest {
        numbers: split_numbers(&value(options.dial.as_ref())),
        verbose: options.verbose,
        callerid: options.callerid.clone(),
        url: options.url.clone(),
        say: options.say.clone(),
        interactive: options.interactive,
    }))
}

fn is_set(value: Option<&String>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

fn value(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

/// Split a comma-separated list of phone numbers.
#[must_use]
pub fn split_numbers(list: &str) -> Vec<String> {
    list.split(',').map(|n| n.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_options_show_help() {
        assert_eq!(resolve(&Options::default()), Ok(Action::ShowHelp));
    }

    #[test]
    fn test_split_numbers_keeps_order() {
        assert_eq!(
            split_numbers("+12135551212, +14155551212"),
            vec!["+12135551212", "+14155551212"]
        );
    }

    #[test]
    fn test_split_single_number() {
        assert_eq!(split_numbers("+12135551212"), vec!["+12135551212"]);
    }

    #[test]
    fn test_empty_string_counts_as_unset() {
        let options = Options {
            purchase: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(resolve(&options), Ok(Action::ShowHelp));
    }

    #[test]
    fn test_rule_names_are_unique() {
        let mut names: Vec<_> = RULES.iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RULES.len());
    }

    #[test]
    fn test_missing_argument_exit_status() {
        let err = ResolveError::MissingArgument {
            option: "dial",
            required: "--url or --say",
        };
        assert_eq!(err.exit_status(), 1);
        assert_eq!(err.to_string(), "--dial requires --url or --say");
    }
}
