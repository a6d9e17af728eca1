use crate::config::{Alignment, Block, BlockType, Settings};
use crate::segments::{
    Segment, SegmentStyle, SegmentType, DEFAULT_LEADING_DIAMOND, DEFAULT_POWERLINE_SYMBOL,
    DEFAULT_TRAILING_DIAMOND,
};
use serde_json::json;

impl Default for Settings {
    /// Built-in prompt used when no settings file is found: a powerline
    /// chain of path and git on the left, the clock on the right.
    fn default() -> Self {
        Settings {
            final_space: true,
            blocks: vec![
                Block {
                    block_type: BlockType::Prompt,
                    alignment: Alignment::Left,
                    vertical_offset: 0,
                    segments: vec![
                        segment(SegmentType::Path, SegmentStyle::Powerline, "#61afef", "#282c34"),
                        segment(SegmentType::Git, SegmentStyle::Powerline, "#98c379", "#282c34"),
                        segment(SegmentType::Exit, SegmentStyle::Powerline, "#e06c75", "#282c34"),
                    ],
                },
                Block {
                    block_type: BlockType::Prompt,
                    alignment: Alignment::Right,
                    vertical_offset: 0,
                    segments: vec![segment(
                        SegmentType::Time,
                        SegmentStyle::Plain,
                        "transparent",
                        "#5c6370",
                    )],
                },
            ],
        }
    }
}

fn segment(
    segment_type: SegmentType,
    style: SegmentStyle,
    background: &str,
    foreground: &str,
) -> Segment {
    Segment {
        segment_type,
        style,
        background: background.into(),
        foreground: foreground.into(),
        powerline_symbol: DEFAULT_POWERLINE_SYMBOL.to_string(),
        invert_powerline_symbol_color: false,
        leading_diamond: DEFAULT_LEADING_DIAMOND.to_string(),
        trailing_diamond: DEFAULT_TRAILING_DIAMOND.to_string(),
        properties: Default::default(),
    }
}

impl Segment {
    /// Convenience constructor used by the default settings and tests.
    pub fn with_properties(mut self, properties: serde_json::Value) -> Self {
        if let serde_json::Value::Object(map) = properties {
            self.properties = map.into_iter().collect();
        }
        self
    }
}

/// Default settings serialized back to JSON, for `--print-config`.
pub fn default_settings_json() -> String {
    serde_json::to_string_pretty(&Settings::default()).unwrap_or_else(|_| json!({}).to_string())
}
