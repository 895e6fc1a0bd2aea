//! Terminal rendition of the launcher window actions.

use std::io::{self, Write};

use launcher_contract::ThemeColors;
use launcher_shell::services::UiActions;

/// Parses a `#rrggbb` color into its components.
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Builds the truecolor SGR sequence that paints `colors` as the terminal defaults.
pub fn theme_escape(colors: &ThemeColors) -> Result<String, String> {
    let (br, bg, bb) = parse_hex_color(&colors.background_color)
        .ok_or_else(|| format!("invalid background color '{}'", colors.background_color))?;
    let (fr, fg, fb) = parse_hex_color(&colors.foreground_color)
        .ok_or_else(|| format!("invalid foreground color '{}'", colors.foreground_color))?;
    Ok(format!("\x1b[48;2;{br};{bg};{bb}m\x1b[38;2;{fr};{fg};{fb}m"))
}

/// Applies themes with ANSI escapes. Window hotkeys have no terminal equivalent.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalUi;

impl UiActions for TerminalUi {
    fn apply_theme(&self, name: &str, colors: &ThemeColors) -> Result<(), String> {
        let escape = theme_escape(colors)?;
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(escape.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|err| format!("failed to apply theme '{name}': {err}"))
    }

    fn toggle_size(&self) {
        tracing::debug!("toggle size ignored in terminal");
    }

    fn toggle_visibility(&self) {
        tracing::debug!("toggle visibility ignored in terminal");
    }

    fn focus_input(&self) {
        tracing::debug!("focus input ignored in terminal");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn colors(bg: &str, fg: &str) -> ThemeColors {
        ThemeColors {
            background_color: bg.to_string(),
            foreground_color: fg.to_string(),
        }
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_hex_color("#1e1e1e"), Some((30, 30, 30)));
        assert_eq!(parse_hex_color(" #FFa500 "), Some((255, 165, 0)));
        assert_eq!(parse_hex_color("1e1e1e"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#zz0000"), None);
    }

    #[test]
    fn theme_escape_sets_background_then_foreground() {
        assert_eq!(
            theme_escape(&colors("#000000", "#ffffff")),
            Ok("\x1b[48;2;0;0;0m\x1b[38;2;255;255;255m".to_string())
        );
    }

    #[test]
    fn theme_escape_rejects_named_colors() {
        assert_eq!(
            theme_escape(&colors("black", "#ffffff")),
            Err("invalid background color 'black'".to_string())
        );
    }
}
