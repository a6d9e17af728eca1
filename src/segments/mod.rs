pub mod exit;
pub mod git;
pub mod path;
pub mod shell;
pub mod text;
pub mod time;

pub use exit::*;
pub use git::*;
pub use path::*;
pub use shell::*;
pub use text::*;
pub use time::*;

use crate::environment::Environment;
use crate::render::Color;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

pub const DEFAULT_POWERLINE_SYMBOL: &str = "\u{e0b0}";
pub const DEFAULT_LEADING_DIAMOND: &str = "\u{e0b6}";
pub const DEFAULT_TRAILING_DIAMOND: &str = "\u{e0b4}";

/// Free-form per-segment options from the settings file.
pub type Properties = HashMap<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentStyle {
    Plain,
    Diamond,
    Powerline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentType {
    Path,
    Git,
    Time,
    Exit,
    Text,
    Shell,
}

/// One configured prompt segment, straight out of the settings file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    #[serde(rename = "type")]
    pub segment_type: SegmentType,
    #[serde(default = "default_style")]
    pub style: SegmentStyle,
    #[serde(default)]
    pub background: Color,
    #[serde(default)]
    pub foreground: Color,
    #[serde(default = "default_powerline_symbol")]
    pub powerline_symbol: String,
    #[serde(default)]
    pub invert_powerline_symbol_color: bool,
    #[serde(default = "default_leading_diamond")]
    pub leading_diamond: String,
    #[serde(default = "default_trailing_diamond")]
    pub trailing_diamond: String,
    #[serde(default)]
    pub properties: Properties,
}

fn default_style() -> SegmentStyle {
    SegmentStyle::Powerline
}

fn default_powerline_symbol() -> String {
    DEFAULT_POWERLINE_SYMBOL.to_string()
}

fn default_leading_diamond() -> String {
    DEFAULT_LEADING_DIAMOND.to_string()
}

fn default_trailing_diamond() -> String {
    DEFAULT_TRAILING_DIAMOND.to_string()
}

#[derive(Debug, Error)]
pub enum SegmentError {
    #[error("failed to read repository state: {0}")]
    Git(String),
}

/// A segment that evaluated successfully and reported itself enabled.
/// This is the only view of a segment the rendering engine ever sees.
#[derive(Debug, Clone)]
pub struct EvaluatedSegment {
    pub style: SegmentStyle,
    pub background: Color,
    pub foreground: Color,
    pub powerline_symbol: String,
    pub invert_powerline_symbol_color: bool,
    pub leading_diamond: String,
    pub trailing_diamond: String,
    pub prefix: String,
    pub postfix: String,
    pub text: String,
}

/// Per-type provider of live segment content. `enabled` runs first and may
/// fail or gather state; `text` is pure afterwards.
pub trait SegmentSource {
    fn enabled(&mut self, env: &dyn Environment) -> Result<bool, SegmentError>;

    fn text(&self, env: &dyn Environment) -> String;
}

impl SegmentType {
    fn source(&self, properties: &Properties) -> Box<dyn SegmentSource> {
        match self {
            SegmentType::Path => Box::new(PathSource::new(properties)),
            SegmentType::Git => Box::new(GitSource::new(properties)),
            SegmentType::Time => Box::new(TimeSource::new(properties)),
            SegmentType::Exit => Box::new(ExitCodeSource::new(properties)),
            SegmentType::Text => Box::new(TextSource::new(properties)),
            SegmentType::Shell => Box::new(ShellSource),
        }
    }
}

impl Segment {
    /// Evaluate this segment against live shell state. `Ok(None)` means the
    /// segment is disabled; both that and `Err` drop the segment from the
    /// rendered prompt without affecting its neighbours.
    pub fn evaluate(&self, env: &dyn Environment) -> Result<Option<EvaluatedSegment>, SegmentError> {
        let mut source = self.segment_type.source(&self.properties);
        if !source.enabled(env)? {
            return Ok(None);
        }
        Ok(Some(EvaluatedSegment {
            style: self.style,
            background: self.background.clone(),
            foreground: self.foreground.clone(),
            powerline_symbol: self.powerline_symbol.clone(),
            invert_powerline_symbol_color: self.invert_powerline_symbol_color,
            leading_diamond: self.leading_diamond.clone(),
            trailing_diamond: self.trailing_diamond.clone(),
            prefix: string_property(&self.properties, "prefix", " "),
            postfix: string_property(&self.properties, "postfix", " "),
            text: source.text(env),
        }))
    }
}

/// String property lookup. A present-but-empty value is honoured as an
/// explicit override; only an absent or non-string value yields the default.
pub fn string_property(properties: &Properties, key: &str, default: &str) -> String {
    match properties.get(key) {
        Some(value) => value
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| default.to_string()),
        None => default.to_string(),
    }
}

pub fn bool_property(properties: &Properties, key: &str, default: bool) -> bool {
    properties
        .get(key)
        .and_then(Value::as_bool)
        .unwrap_or(default)
}
