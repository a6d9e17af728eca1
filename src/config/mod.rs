pub mod defaults;
pub mod loader;

pub use defaults::*;
pub use loader::*;

use crate::segments::Segment;
use serde::{Deserialize, Serialize};

/// Top-level prompt settings: ordered blocks plus the trailing-space flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub final_space: bool,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// A horizontally laid-out group of segments sharing alignment and
/// vertical offset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(rename = "type", default)]
    pub block_type: BlockType,
    #[serde(default)]
    pub alignment: Alignment,
    #[serde(default)]
    pub vertical_offset: i32,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    #[default]
    Prompt,
    LineBreak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Right,
}
