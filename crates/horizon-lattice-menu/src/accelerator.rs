//! Keystroke to display-accelerator conversion.
//!
//! Keymaps describe keystrokes as lowercase dash-separated chords such as
//! `ctrl-shift-a` or `cmd-+`. Native menus want `Ctrl+Shift+A` and
//! `Command+Plus`. This module converts between the two and has no knowledge
//! of menu trees.

use std::sync::OnceLock;

use regex::{Captures, Regex};

fn modifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("(?i)shift|cmd|ctrl|alt").expect("modifier pattern is valid"))
}

/// Convert a keystroke into the accelerator shown in native menus.
///
/// Returns `None` for an absent or empty keystroke.
///
/// - `"ctrl-shift-a"` -> `"Ctrl+Shift+A"`
/// - `"cmd-+"` -> `"Command+Plus"`
/// - `"ctrl--"` -> `"Ctrl+-"`
/// - `"hyper-x"` -> `"hyper+X"` (unknown modifiers are kept as written)
pub fn format_accelerator(keystroke: Option<&str>) -> Option<String> {
    let keystroke = keystroke.filter(|k| !k.is_empty())?;

    let mut tokens = split_keystroke(keystroke);
    let key = tokens.pop().unwrap_or_default().to_uppercase().replacen('+', "Plus", 1);

    let mut parts: Vec<String> = tokens.into_iter().map(format_modifier).collect();
    parts.push(key);
    Some(parts.join("+"))
}

/// Convenience form of [`format_accelerator`] for a keystroke that is known to be present.
pub fn accelerator_for_keystroke(keystroke: &str) -> Option<String> {
    format_accelerator(Some(keystroke))
}

/// Split on every `-` that is followed by another character, so a trailing
/// `-` stays part of the key.
fn split_keystroke(keystroke: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    for (i, ch) in keystroke.char_indices() {
        if ch == '-' && i + 1 < keystroke.len() {
            tokens.push(&keystroke[start..i]);
            start = i + 1;
        }
    }
    tokens.push(&keystroke[start..]);
    tokens
}

fn format_modifier(modifier: &str) -> String {
    modifier_pattern()
        .replace_all(modifier, |caps: &Captures<'_>| {
            match caps[0].to_ascii_lowercase().as_str() {
                "shift" => "Shift",
                "cmd" => "Command",
                "ctrl" => "Ctrl",
                _ => "Alt",
            }
        })
        .into_owned()
}
