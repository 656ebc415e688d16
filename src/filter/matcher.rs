use super::pattern::EventPattern;
use tracing::debug;

/// Decide whether `event_name` is selected by any of `patterns`
///
/// This is the plain string form used when patterns come straight from the
/// command line or a config file. An empty pattern list selects nothing.
pub fn matches_any<S: AsRef<str>>(event_name: &str, patterns: &[S]) -> bool {
    patterns
        .iter()
        .any(|p| EventPattern::parse(p.as_ref()).matches(event_name))
}

/// A parsed, ordered set of event patterns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    patterns: Vec<EventPattern>,
}

impl EventFilter {
    /// Build a filter from raw pattern strings
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| EventPattern::parse(p.as_ref()))
                .collect(),
        }
    }

    /// A filter that selects every event
    pub fn all() -> Self {
        Self {
            patterns: vec![EventPattern::Any],
        }
    }

    pub fn patterns(&self) -> &[EventPattern] {
        &self.patterns
    }

    /// True when the filter has no patterns (and therefore selects nothing)
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn matches(&self, event_name: &str) -> bool {
        let selected = self.patterns.iter().any(|p| p.matches(event_name));
        debug!(event = event_name, selected, "evaluated event filter");
        selected
    }

    /// Keep the selected event names, in input order
    pub fn select<'a, I>(&self, event_names: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        event_names
            .into_iter()
            .filter(|name| self.matches(name))
            .collect()
    }
}

impl FromIterator<EventPattern> for EventFilter {
    fn from_iter<T: IntoIterator<Item = EventPattern>>(iter: T) -> Self {
        Self {
            patterns: iter.into_iter().collect(),
        }
    }
}
