//! Catalog of event names emitted by the OpenCode host
//!
//! Plugins receive these through their `event` hook, or through dedicated hooks
//! for the `tool.execute.*` pair. The list backs `opencode-kit events` and the
//! "matches no known event" pattern warning.

use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KnownEvent {
    pub name: &'static str,
    pub description: &'static str,
}

const fn event(name: &'static str, description: &'static str) -> KnownEvent {
    KnownEvent { name, description }
}

static KNOWN_EVENTS: &[KnownEvent] = &[
    event("command.executed", "A slash command finished running"),
    event("file.edited", "The agent edited a file"),
    event("file.watcher.updated", "A watched file changed on disk"),
    event("installation.updated", "The host was updated"),
    event("lsp.client.diagnostics", "A language server published diagnostics"),
    event("lsp.updated", "Language server state changed"),
    event("message.part.removed", "A message part was removed"),
    event("message.part.updated", "A message part was streamed or updated"),
    event("message.removed", "A message was removed"),
    event("message.updated", "A message was created or updated"),
    event("permission.replied", "The user answered a permission request"),
    event("permission.updated", "A permission request was raised"),
    event("server.connected", "A client connected to the host server"),
    event("session.compacted", "A session history was compacted"),
    event("session.created", "A new session was started"),
    event("session.deleted", "A session was deleted"),
    event("session.diff", "A session produced a file diff"),
    event("session.error", "A session hit an error"),
    event("session.idle", "The agent finished responding"),
    event("session.status", "Session status changed"),
    event("session.updated", "Session metadata changed"),
    event("todo.updated", "The agent todo list changed"),
    event("tool.execute.after", "A tool call returned"),
    event("tool.execute.before", "A tool call is about to run"),
    event("tui.command.execute", "The TUI executed a command"),
    event("tui.prompt.append", "Text was appended to the TUI prompt"),
    event("tui.toast.show", "The TUI displayed a toast"),
];

/// All known host events, sorted by name
pub fn known_events() -> &'static [KnownEvent] {
    KNOWN_EVENTS
}

pub fn is_known_event(name: &str) -> bool {
    KNOWN_EVENTS.iter().any(|e| e.name == name)
}

/// First segments of the known event names, sorted and deduplicated
pub fn event_namespaces() -> Vec<&'static str> {
    KNOWN_EVENTS
        .iter()
        .filter_map(|e| e.name.split('.').next())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
