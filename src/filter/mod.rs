//! Event pattern parsing and matching
//!
//! Host events carry dot-separated names such as `session.idle` or
//! `tool.execute.before`. A listener selects the events it cares about with a
//! list of patterns; an event is selected when any pattern matches.
//!
//! # Syntax
//!
//! ```text
//! *                    Every event
//! namespace.*          Every event whose name starts with "namespace."
//! exact.name           Only the event with exactly this name
//! ```
//!
//! The namespace prefix keeps its trailing dot, so `tool.*` selects
//! `tool.execute.before` but not `toolbox.run`, and not `tool` itself.
//! Anything else is compared literally: a malformed pattern such as `to*ol`
//! never fails, it just selects nothing unless an event carries that exact name.
//!
//! # Examples
//!
//! ```text
//! file.*                       file.edited, file.watcher.updated
//! session.idle                 session.idle only
//! file.* session.idle          both of the above
//! ```

pub mod matcher;
pub mod pattern;
pub mod warning;

pub use matcher::{EventFilter, matches_any};
pub use pattern::EventPattern;
pub use warning::{PatternWarning, pattern_warnings};
