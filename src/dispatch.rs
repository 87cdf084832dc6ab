use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

use crate::registry::{KeyActionId, KeyContext, get_default_action};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeySpec {
    pub key: Key,
    pub modifiers: Modifiers,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("empty key")]
    Empty,
    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

impl KeySpec {
    pub fn parse(s: &str) -> Result<Self, KeyParseError> {
        if s.is_empty() {
            return Err(KeyParseError::Empty);
        }

        let mut modifiers = Modifiers::default();
        let mut remaining = s;

        loop {
            if let Some(rest) = remaining.strip_prefix("C-") {
                modifiers.ctrl = true;
                remaining = rest;
            } else if let Some(rest) = remaining.strip_prefix("A-") {
                modifiers.alt = true;
                remaining = rest;
            } else {
                break;
            }
        }

        let mut chars = remaining.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(KeySpec {
                key: Key::Char(c),
                modifiers,
            });
        }

        let key = match remaining.to_lowercase().as_str() {
            "ret" | "enter" => Key::Enter,
            "esc" | "escape" => Key::Esc,
            "tab" => Key::Tab,
            "backtab" | "btab" => Key::BackTab,
            "backspace" | "bs" => Key::Backspace,
            "del" | "delete" => Key::Delete,
            "up" => Key::Up,
            "down" => Key::Down,
            "left" => Key::Left,
            "right" => Key::Right,
            "home" => Key::Home,
            "end" => Key::End,
            "pageup" => Key::PageUp,
            "pagedown" => Key::PageDown,
            "space" => Key::Char(' '),
            _ => return Err(KeyParseError::UnknownKey(remaining.to_string())),
        };

        Ok(KeySpec { key, modifiers })
    }

    #[must_use]
    pub fn from_event(event: &KeyEvent) -> Self {
        let key = match event.code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Esc,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            _ => Key::Unknown,
        };

        // Shift is already folded into the character (G vs g), and crossterm
        // reports Shift+Tab as BackTab, so shift is never tracked.
        let modifiers = Modifiers {
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
        };

        KeySpec { key, modifiers }
    }

    #[must_use]
    pub fn to_key_string(&self) -> String {
        let mut s = String::new();

        if self.modifiers.ctrl {
            s.push_str("C-");
        }
        if self.modifiers.alt {
            s.push_str("A-");
        }

        match &self.key {
            Key::Char(c) => s.push(*c),
            Key::Enter => s.push_str("ret"),
            Key::Esc => s.push_str("esc"),
            Key::Tab => s.push_str("tab"),
            Key::BackTab => s.push_str("backtab"),
            Key::Backspace => s.push_str("backspace"),
            Key::Delete => s.push_str("del"),
            Key::Up => s.push_str("up"),
            Key::Down => s.push_str("down"),
            Key::Left => s.push_str("left"),
            Key::Right => s.push_str("right"),
            Key::Home => s.push_str("home"),
            Key::End => s.push_str("end"),
            Key::PageUp => s.push_str("pageup"),
            Key::PageDown => s.push_str("pagedown"),
            Key::Unknown => s.push_str("unknown"),
        }

        s
    }
}

/// Resolves a key press against the bindings of `context`.
#[must_use]
pub fn action_for_event(context: KeyContext, event: &KeyEvent) -> Option<KeyActionId> {
    let spec = KeySpec::from_event(event);
    get_default_action(context, &spec.to_key_string())
}

/// Human-readable form of a key string for the help overlay.
#[must_use]
pub fn format_key_for_display(key: &str) -> String {
    match key {
        "down" => "↓".to_string(),
        "up" => "↑".to_string(),
        "left" => "←".to_string(),
        "right" => "→".to_string(),
        "ret" => "Enter".to_string(),
        "esc" => "Esc".to_string(),
        "tab" => "Tab".to_string(),
        "backtab" => "Shift+Tab".to_string(),
        "pageup" => "PgUp".to_string(),
        "pagedown" => "PgDn".to_string(),
        "home" => "Home".to_string(),
        "end" => "End".to_string(),
        _ if key.starts_with("C-") => format!("Ctrl+{}", &key[2..]),
        _ => key.to_string(),
    }
}
