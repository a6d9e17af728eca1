use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// A segment color: either a `#rrggbb` hex value or the transparent
/// sentinel meaning "no color / background passthrough".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Color {
    Transparent,
    Hex(String),
}

impl Default for Color {
    fn default() -> Self {
        Color::Transparent
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        if value.is_empty() || value.eq_ignore_ascii_case("transparent") {
            Color::Transparent
        } else {
            Color::Hex(value)
        }
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Color::from(value.to_string())
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        match color {
            Color::Transparent => "transparent".to_string(),
            Color::Hex(value) => value,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Transparent => write!(f, "transparent"),
            Color::Hex(value) => write!(f, "{}", value),
        }
    }
}

/// Output sink contract consumed by the rendering engine. The engine only
/// ever hands fragments and cursor instructions to this trait; the ANSI
/// details live in [`AnsiWriter`], and tests substitute a recorder.
pub trait PromptWriter {
    /// Append one colored text fragment to the current block.
    fn write(&mut self, background: &Color, foreground: &Color, text: &str);

    /// Snapshot of everything written since the last reset.
    fn as_string(&self) -> String;

    /// Clear the accumulated block content.
    fn reset(&mut self);

    fn line_break(&self) -> String;

    fn change_line(&self, offset: i32) -> String;

    fn carriage_return(&self) -> String;

    /// Cursor movement needed to right-justify `text` on the current line.
    fn cursor_for_right_align(&self, text: &str, offset: i32) -> String;
}

/// ANSI escape implementation of [`PromptWriter`]. Emits 24-bit color when
/// the terminal advertises truecolor support, 8-bit otherwise, and nothing
/// at all when colors are disabled.
pub struct AnsiWriter {
    buffer: String,
    term_width: usize,
    colors_enabled: bool,
    rgb_support: bool,
}

impl AnsiWriter {
    pub fn new(term_width: usize, colors_enabled: bool, rgb_support: bool) -> Self {
        Self {
            buffer: String::new(),
            term_width,
            colors_enabled,
            rgb_support,
        }
    }

    /// Construct a writer from the ambient terminal environment.
    pub fn detect(term_width: usize) -> Self {
        Self::new(term_width, should_use_colors(), supports_rgb_colors())
    }

    fn color_code(&self, color: &Color, background: bool) -> Option<String> {
        let Color::Hex(value) = color else {
            return None;
        };
        let (r, g, b) = parse_color(value);
        let layer = if background { 48 } else { 38 };
        if self.rgb_support {
            Some(format!("\x1b[{};2;{};{};{}m", layer, r, g, b))
        } else {
            Some(format!("\x1b[{};5;{}m", layer, rgb_to_8bit((r, g, b))))
        }
    }
}

impl PromptWriter for AnsiWriter {
    fn write(&mut self, background: &Color, foreground: &Color, text: &str) {
        if text.is_empty() {
            return;
        }
        if !self.colors_enabled {
            self.buffer.push_str(text);
            return;
        }
        let mut codes = String::new();
        if let Some(code) = self.color_code(background, true) {
            codes.push_str(&code);
        }
        if let Some(code) = self.color_code(foreground, false) {
            codes.push_str(&code);
        }
        if codes.is_empty() {
            self.buffer.push_str(text);
        } else {
            self.buffer.push_str(&codes);
            self.buffer.push_str(text);
            self.buffer.push_str("\x1b[0m");
        }
    }

    fn as_string(&self) -> String {
        self.buffer.clone()
    }

    fn reset(&mut self) {
        self.buffer.clear();
    }

    fn line_break(&self) -> String {
        "\n".to_string()
    }

    fn change_line(&self, offset: i32) -> String {
        if offset == 0 {
            return String::new();
        }
        if offset > 0 {
            format!("\x1b[{}B", offset)
        } else {
            format!("\x1b[{}A", -offset)
        }
    }

    fn carriage_return(&self) -> String {
        "\r".to_string()
    }

    fn cursor_for_right_align(&self, text: &str, _offset: i32) -> String {
        let width = visible_width(text);
        if width == 0 || width >= self.term_width {
            return String::new();
        }
        format!("\x1b[{}C", self.term_width - width)
    }
}

/// Number of visible terminal cells in `text`, with ANSI escape sequences
/// stripped. Wide glyphs (CJK, emoji) count as two cells.
pub fn visible_width(text: &str) -> usize {
    use unicode_width::UnicodeWidthChar;

    let mut width = 0;
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\x1b' {
            width += UnicodeWidthChar::width(c).unwrap_or(1);
            continue;
        }
        // CSI sequence: parameters run until a final byte in 0x40..=0x7e
        if let Some('[') = chars.next() {
            for follow in chars.by_ref() {
                if ('\x40'..='\x7e').contains(&follow) {
                    break;
                }
            }
        }
    }
    width
}

pub fn should_use_colors() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }
    if env::var("CLICOLOR_FORCE").map_or(false, |v| v != "0") {
        return true;
    }
    if env::var("TERM").map_or(false, |term| term == "dumb") {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

pub fn supports_rgb_colors() -> bool {
    env::var("COLORTERM").map_or(false, |ct| ct.contains("truecolor") || ct.contains("24bit"))
        || env::var("TERM").map_or(false, |term| {
            term.contains("256") || term == "xterm-kitty" || term == "alacritty"
        })
}

/// Terminal width from `COLUMNS`, defaulting to 80.
pub fn terminal_width() -> usize {
    env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.parse().ok())
        .filter(|cols| *cols > 0)
        .unwrap_or(80)
}

pub fn parse_color(color: &str) -> (u8, u8, u8) {
    // length check alone is not enough: a multi-byte char would make the
    // byte slices below straddle a char boundary
    if color.starts_with('#') && color.len() == 7 && color.is_ascii() {
        let r = u8::from_str_radix(&color[1..3], 16).unwrap_or(255);
        let g = u8::from_str_radix(&color[3..5], 16).unwrap_or(255);
        let b = u8::from_str_radix(&color[5..7], 16).unwrap_or(255);
        (r, g, b)
    } else {
        (255, 255, 255)
    }
}

/// Closest 8-bit color (216 color cube + grayscale ramp).
pub fn rgb_to_8bit((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else {
            (((r as u16 - 8) / 10) + 232).min(255) as u8
        }
    } else {
        let r6 = (r as u16 * 5 / 255) as u8;
        let g6 = (g as u16 * 5 / 255) as u8;
        let b6 = (b as u16 * 5 / 255) as u8;
        16 + 36 * r6 + 6 * g6 + b6
    }
}
