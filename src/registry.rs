//! Key bindings for every input context.
//!
//! Handlers resolve key presses through this table and the help overlay is
//! built from it, so the two cannot drift apart.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyContext {
    Dashboard,
    Search,
    Form,
    Details,
    Compose,
    Help,
}

impl KeyContext {
    pub const ALL: &[KeyContext] = &[
        KeyContext::Dashboard,
        KeyContext::Search,
        KeyContext::Form,
        KeyContext::Details,
        KeyContext::Compose,
        KeyContext::Help,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            KeyContext::Dashboard => "[Dashboard]",
            KeyContext::Search => "[Search]",
            KeyContext::Form => "[Project Form]",
            KeyContext::Details => "[Project Details]",
            KeyContext::Compose => "[Comment]",
            KeyContext::Help => "[Help]",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyActionId {
    MoveDown,
    MoveUp,
    JumpToFirst,
    JumpToLast,
    OpenDetails,
    NewProject,
    EditProject,
    StartSearch,
    NextStatusFilter,
    PrevStatusFilter,
    NextPriorityFilter,
    PrevPriorityFilter,
    ClearFilters,
    ToggleHelp,
    Quit,
    ForceClose,
    ConfirmSearch,
    CancelSearch,
    NextField,
    PrevField,
    NextTab,
    PrevTab,
    SubmitForm,
    ClearForm,
    ScrollDown,
    ScrollUp,
    ComposeComment,
    SubmitComment,
    CancelComment,
    CloseHelp,
}

pub struct KeyAction {
    pub id: KeyActionId,
    pub keys: &'static [&'static str],
    pub context: KeyContext,
    pub description: &'static str,
}

pub static KEY_ACTIONS: &[KeyAction] = &[
    // Dashboard
    KeyAction {
        id: KeyActionId::MoveDown,
        keys: &["j", "down"],
        context: KeyContext::Dashboard,
        description: "Next project",
    },
    KeyAction {
        id: KeyActionId::MoveUp,
        keys: &["k", "up"],
        context: KeyContext::Dashboard,
        description: "Previous project",
    },
    KeyAction {
        id: KeyActionId::JumpToFirst,
        keys: &["g", "home"],
        context: KeyContext::Dashboard,
        description: "First project",
    },
    KeyAction {
        id: KeyActionId::JumpToLast,
        keys: &["G", "end"],
        context: KeyContext::Dashboard,
        description: "Last project",
    },
    KeyAction {
        id: KeyActionId::OpenDetails,
        keys: &["ret"],
        context: KeyContext::Dashboard,
        description: "View details and comments",
    },
    KeyAction {
        id: KeyActionId::NewProject,
        keys: &["n"],
        context: KeyContext::Dashboard,
        description: "New project",
    },
    KeyAction {
        id: KeyActionId::EditProject,
        keys: &["e"],
        context: KeyContext::Dashboard,
        description: "Edit selected project",
    },
    KeyAction {
        id: KeyActionId::StartSearch,
        keys: &["/"],
        context: KeyContext::Dashboard,
        description: "Search name or customer",
    },
    KeyAction {
        id: KeyActionId::NextStatusFilter,
        keys: &["s"],
        context: KeyContext::Dashboard,
        description: "Next status filter",
    },
    KeyAction {
        id: KeyActionId::PrevStatusFilter,
        keys: &["S"],
        context: KeyContext::Dashboard,
        description: "Previous status filter",
    },
    KeyAction {
        id: KeyActionId::NextPriorityFilter,
        keys: &["p"],
        context: KeyContext::Dashboard,
        description: "Next priority filter",
    },
    KeyAction {
        id: KeyActionId::PrevPriorityFilter,
        keys: &["P"],
        context: KeyContext::Dashboard,
        description: "Previous priority filter",
    },
    KeyAction {
        id: KeyActionId::ClearFilters,
        keys: &["x"],
        context: KeyContext::Dashboard,
        description: "Clear filters and search",
    },
    KeyAction {
        id: KeyActionId::ToggleHelp,
        keys: &["?"],
        context: KeyContext::Dashboard,
        description: "Show key bindings",
    },
    KeyAction {
        id: KeyActionId::Quit,
        keys: &["q"],
        context: KeyContext::Dashboard,
        description: "Quit",
    },
    KeyAction {
        id: KeyActionId::ForceClose,
        keys: &["esc"],
        context: KeyContext::Dashboard,
        description: "Close any overlay",
    },
    // Search
    KeyAction {
        id: KeyActionId::ConfirmSearch,
        keys: &["ret"],
        context: KeyContext::Search,
        description: "Keep search and return to list",
    },
    KeyAction {
        id: KeyActionId::CancelSearch,
        keys: &["esc"],
        context: KeyContext::Search,
        description: "Discard search",
    },
    // Form
    KeyAction {
        id: KeyActionId::NextField,
        keys: &["tab", "down", "ret"],
        context: KeyContext::Form,
        description: "Next field",
    },
    KeyAction {
        id: KeyActionId::PrevField,
        keys: &["backtab", "up"],
        context: KeyContext::Form,
        description: "Previous field",
    },
    KeyAction {
        id: KeyActionId::NextTab,
        keys: &["pagedown"],
        context: KeyContext::Form,
        description: "Next tab",
    },
    KeyAction {
        id: KeyActionId::PrevTab,
        keys: &["pageup"],
        context: KeyContext::Form,
        description: "Previous tab",
    },
    KeyAction {
        id: KeyActionId::SubmitForm,
        keys: &["C-s"],
        context: KeyContext::Form,
        description: "Save project",
    },
    KeyAction {
        id: KeyActionId::ClearForm,
        keys: &["C-l"],
        context: KeyContext::Form,
        description: "Clear every field",
    },
    KeyAction {
        id: KeyActionId::ForceClose,
        keys: &["esc"],
        context: KeyContext::Form,
        description: "Discard and close",
    },
    // Details
    KeyAction {
        id: KeyActionId::ScrollDown,
        keys: &["j", "down"],
        context: KeyContext::Details,
        description: "Scroll down",
    },
    KeyAction {
        id: KeyActionId::ScrollUp,
        keys: &["k", "up"],
        context: KeyContext::Details,
        description: "Scroll up",
    },
    KeyAction {
        id: KeyActionId::ComposeComment,
        keys: &["c"],
        context: KeyContext::Details,
        description: "Write a comment",
    },
    KeyAction {
        id: KeyActionId::EditProject,
        keys: &["e"],
        context: KeyContext::Details,
        description: "Edit this project",
    },
    KeyAction {
        id: KeyActionId::ForceClose,
        keys: &["esc", "q"],
        context: KeyContext::Details,
        description: "Close",
    },
    // Compose
    KeyAction {
        id: KeyActionId::SubmitComment,
        keys: &["ret"],
        context: KeyContext::Compose,
        description: "Post comment",
    },
    KeyAction {
        id: KeyActionId::CancelComment,
        keys: &["tab"],
        context: KeyContext::Compose,
        description: "Stop writing, keep details open",
    },
    KeyAction {
        id: KeyActionId::ForceClose,
        keys: &["esc"],
        context: KeyContext::Compose,
        description: "Close",
    },
    // Help
    KeyAction {
        id: KeyActionId::ScrollDown,
        keys: &["j", "down"],
        context: KeyContext::Help,
        description: "Scroll down",
    },
    KeyAction {
        id: KeyActionId::ScrollUp,
        keys: &["k", "up"],
        context: KeyContext::Help,
        description: "Scroll up",
    },
    KeyAction {
        id: KeyActionId::CloseHelp,
        keys: &["?", "q"],
        context: KeyContext::Help,
        description: "Close help",
    },
    KeyAction {
        id: KeyActionId::ForceClose,
        keys: &["esc"],
        context: KeyContext::Help,
        description: "Close",
    },
];

pub fn key_actions_for_context(context: KeyContext) -> impl Iterator<Item = &'static KeyAction> {
    KEY_ACTIONS.iter().filter(move |a| a.context == context)
}

/// Action bound to `key` (in key-string form, e.g. `"C-s"`) in `context`.
#[must_use]
pub fn get_default_action(context: KeyContext, key: &str) -> Option<KeyActionId> {
    key_actions_for_context(context)
        .find(|a| a.keys.contains(&key))
        .map(|a| a.id)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::dispatch::KeySpec;

    #[test]
    fn test_no_duplicate_keys_within_context() {
        for context in KeyContext::ALL {
            let mut seen = HashSet::new();
            for action in key_actions_for_context(*context) {
                for key in action.keys {
                    assert!(seen.insert(*key), "{key} bound twice in {context:?}");
                }
            }
        }
    }

    #[test]
    fn test_every_key_parses_to_itself() {
        for action in KEY_ACTIONS {
            for key in action.keys {
                let spec = KeySpec::parse(key).unwrap();
                assert_eq!(spec.to_key_string(), *key);
            }
        }
    }

    #[test]
    fn test_lookup_is_context_scoped() {
        assert_eq!(
            get_default_action(KeyContext::Dashboard, "j"),
            Some(KeyActionId::MoveDown)
        );
        assert_eq!(
            get_default_action(KeyContext::Details, "j"),
            Some(KeyActionId::ScrollDown)
        );
        assert_eq!(get_default_action(KeyContext::Form, "j"), None);
    }
}
