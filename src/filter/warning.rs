use super::pattern::{EventPattern, WILDCARD};
use crate::events::known_events;
use std::fmt;

/// Advisory diagnostics for patterns that are probably not what the user meant
///
/// Warnings never change matching: a flagged pattern still behaves exactly as
/// described in the module docs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternWarning {
    /// The pattern is an empty string
    Empty,
    /// A `*` appears somewhere other than a trailing `.*`
    MisplacedWildcard(String),
    /// The pattern selects none of the known host events
    NoKnownEvent(String),
}

impl fmt::Display for PatternWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternWarning::Empty => f.write_str("Empty event pattern never matches"),
            PatternWarning::MisplacedWildcard(p) => write!(
                f,
                "Pattern '{}' only matches literally. Wildcards are supported as '*' or a trailing '.*'",
                p
            ),
            PatternWarning::NoKnownEvent(p) => {
                write!(f, "Pattern '{}' does not match any known event", p)
            }
        }
    }
}

/// Collect warnings for a list of raw patterns, in input order
pub fn pattern_warnings<S: AsRef<str>>(patterns: &[S]) -> Vec<PatternWarning> {
    let mut warnings = Vec::new();

    for raw in patterns.iter().map(|p| p.as_ref()) {
        if raw.is_empty() {
            warnings.push(PatternWarning::Empty);
            continue;
        }

        let parsed = EventPattern::parse(raw);
        let stray_wildcard = match &parsed {
            EventPattern::Any => false,
            EventPattern::Namespace(prefix) => prefix.contains(WILDCARD),
            EventPattern::Exact(name) => name.contains(WILDCARD),
        };
        if stray_wildcard {
            warnings.push(PatternWarning::MisplacedWildcard(raw.to_string()));
            continue;
        }

        if !known_events().iter().any(|e| parsed.matches(e.name)) {
            warnings.push(PatternWarning::NoKnownEvent(raw.to_string()));
        }
    }

    warnings
}
