//! Keyboard and pointer-control mapping.
//!
//! Keys are matched by their DOM-style name (`"7"`, `"Enter"`,
//! `"Backspace"`); pointer controls by the action name carried on the
//! widget's buttons. Digit and operator controls deliver their value
//! directly and do not need a table.

use super::event::{InputEvent, Operator};

/// Map a keyboard key name to an input event.
///
/// Digits `0`-`9` and `.` type into the operand, `+ - * /` push an
/// operator, `Enter`/`=` evaluate, `Backspace` deletes, `Escape`
/// clears, and `%` applies percent. Anything else maps to nothing.
pub fn event_for_key(key: &str) -> Option<InputEvent> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_digit() || c == '.' {
            return Some(InputEvent::Digit(c));
        }
        if let Some(op) = Operator::from_symbol(c) {
            return Some(InputEvent::Operator(op));
        }
        if c == '=' {
            return Some(InputEvent::Equals);
        }
        if c == '%' {
            return Some(InputEvent::Percent);
        }
        return None;
    }
    match key {
        "Enter" => Some(InputEvent::Equals),
        "Backspace" => Some(InputEvent::Backspace),
        "Escape" => Some(InputEvent::Clear),
        _ => None,
    }
}

/// Map a widget control's action name to an input event.
pub fn event_for_action(action: &str) -> Option<InputEvent> {
    match action {
        "equals" => Some(InputEvent::Equals),
        "back" => Some(InputEvent::Backspace),
        "percent" => Some(InputEvent::Percent),
        "toggle-sign" => Some(InputEvent::ToggleSign),
        "clear" => Some(InputEvent::Clear),
        _ => None,
    }
}
