use std::fmt;

/// The catch-all pattern.
pub const WILDCARD: &str = "*";

/// Suffix that turns a pattern into a namespace prefix match.
pub const NAMESPACE_SUFFIX: &str = ".*";

/// A single parsed filter pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventPattern {
    /// `*`, selects every event
    Any,
    /// `<prefix>*` where the prefix ends with a dot (e.g. `tool.`)
    Namespace(String),
    /// Literal event name
    Exact(String),
}

impl EventPattern {
    /// Parse a pattern string. Never fails: input that is neither `*` nor a
    /// `.*` namespace pattern is kept as an exact name.
    pub fn parse(s: &str) -> Self {
        if s == WILDCARD {
            EventPattern::Any
        } else if s.ends_with(NAMESPACE_SUFFIX) {
            // Drop the `*`, keep the dot so "tool.*" cannot match "toolbox.run".
            EventPattern::Namespace(s[..s.len() - 1].to_string())
        } else {
            EventPattern::Exact(s.to_string())
        }
    }

    /// Check whether this pattern selects the given event name
    pub fn matches(&self, event_name: &str) -> bool {
        match self {
            EventPattern::Any => true,
            EventPattern::Namespace(prefix) => event_name.starts_with(prefix.as_str()),
            EventPattern::Exact(name) => event_name == name,
        }
    }
}

impl From<&str> for EventPattern {
    fn from(s: &str) -> Self {
        EventPattern::parse(s)
    }
}

impl fmt::Display for EventPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventPattern::Any => f.write_str(WILDCARD),
            EventPattern::Namespace(prefix) => write!(f, "{}*", prefix),
            EventPattern::Exact(name) => f.write_str(name),
        }
    }
}
