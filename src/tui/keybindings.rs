//! Keybinding definitions
//!
//! Lists the keyboard shortcuts for each focus context. The status bar
//! shows the hints for whatever currently has focus.

use crossterm::event::{KeyCode, KeyModifiers};

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere outside dialogs
    Global,
    /// Active while a text field is focused
    TextField,
    /// Active while the expense type selector is focused
    TypeSelector,
    /// Active while the expense list is focused
    List,
    /// Active in the confirmation dialog
    Dialog,
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    // Global
    Keybinding {
        key: KeyCode::Tab,
        modifiers: KeyModifiers::NONE,
        description: "Next field",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::BackTab,
        modifiers: KeyModifiers::SHIFT,
        description: "Previous field",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        description: "Quit",
        context: KeyContext::Global,
    },
    // Text fields
    Keybinding {
        key: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        description: "Submit",
        context: KeyContext::TextField,
    },
    Keybinding {
        key: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        description: "Go to list",
        context: KeyContext::TextField,
    },
    // Type selector
    Keybinding {
        key: KeyCode::Char(' '),
        modifiers: KeyModifiers::NONE,
        description: "Toggle split",
        context: KeyContext::TypeSelector,
    },
    Keybinding {
        key: KeyCode::Char('t'),
        modifiers: KeyModifiers::NONE,
        description: "Toggle split",
        context: KeyContext::TypeSelector,
    },
    Keybinding {
        key: KeyCode::Left,
        modifiers: KeyModifiers::NONE,
        description: "Toggle split",
        context: KeyContext::TypeSelector,
    },
    Keybinding {
        key: KeyCode::Right,
        modifiers: KeyModifiers::NONE,
        description: "Toggle split",
        context: KeyContext::TypeSelector,
    },
    Keybinding {
        key: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        description: "Add expense",
        context: KeyContext::TypeSelector,
    },
    Keybinding {
        key: KeyCode::Char('q'),
        modifiers: KeyModifiers::NONE,
        description: "Quit",
        context: KeyContext::TypeSelector,
    },
    Keybinding {
        key: KeyCode::Char('R'),
        modifiers: KeyModifiers::SHIFT,
        description: "Reset",
        context: KeyContext::TypeSelector,
    },
    Keybinding {
        key: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        description: "Go to list",
        context: KeyContext::TypeSelector,
    },
    // List
    Keybinding {
        key: KeyCode::Char('j'),
        modifiers: KeyModifiers::NONE,
        description: "Down",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::Down,
        modifiers: KeyModifiers::NONE,
        description: "Down",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::Char('k'),
        modifiers: KeyModifiers::NONE,
        description: "Up",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::Up,
        modifiers: KeyModifiers::NONE,
        description: "Up",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::Char('d'),
        modifiers: KeyModifiers::NONE,
        description: "Delete",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::Delete,
        modifiers: KeyModifiers::NONE,
        description: "Delete",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::Char('t'),
        modifiers: KeyModifiers::NONE,
        description: "Toggle split",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::Char(' '),
        modifiers: KeyModifiers::NONE,
        description: "Toggle split",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::Char('R'),
        modifiers: KeyModifiers::SHIFT,
        description: "Reset",
        context: KeyContext::List,
    },
    Keybinding {
        key: KeyCode::Char('q'),
        modifiers: KeyModifiers::NONE,
        description: "Quit",
        context: KeyContext::List,
    },
    // Dialog
    Keybinding {
        key: KeyCode::Char('y'),
        modifiers: KeyModifiers::NONE,
        description: "Confirm",
        context: KeyContext::Dialog,
    },
    Keybinding {
        key: KeyCode::Char('n'),
        modifiers: KeyModifiers::NONE,
        description: "Cancel",
        context: KeyContext::Dialog,
    },
    Keybinding {
        key: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        description: "Cancel",
        context: KeyContext::Dialog,
    },
];

/// Get keybindings for a specific context
///
/// Global bindings are included for every context except dialogs.
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| {
            kb.context == context
                || (kb.context == KeyContext::Global && context != KeyContext::Dialog)
        })
        .collect()
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut parts = Vec::new();

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if kb.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    // Shift is implied by an upper-case character
    if kb.modifiers.contains(KeyModifiers::SHIFT) && !matches!(kb.key, KeyCode::Char(_)) {
        parts.push("Shift".to_string());
    }

    let key_str = match kb.key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        _ => format!("{:?}", kb.key),
    };

    parts.push(key_str);
    parts.join("+")
}

/// One-line hint text for a context, e.g. `j/↓:Down  k/↑:Up`
///
/// Keys sharing a description are listed together, in table order.
pub fn hint_line(context: KeyContext) -> String {
    let mut groups: Vec<(&'static str, Vec<String>)> = Vec::new();

    for kb in get_keybindings(context) {
        let key = format_keybinding(kb);
        match groups.iter_mut().find(|(desc, _)| *desc == kb.description) {
            Some((_, keys)) => keys.push(key),
            None => groups.push((kb.description, vec![key])),
        }
    }

    groups
        .into_iter()
        .map(|(desc, keys)| format!("{}:{}", keys.join("/"), desc))
        .collect::<Vec<_>>()
        .join("  ")
}
