use promptline::*;
use tempfile::TempDir;
use tokio::fs;

const SAMPLE: &str = r##"{
  "finalSpace": true,
  "blocks": [
    {
      "type": "prompt",
      "alignment": "left",
      "segments": [
        {
          "type": "path",
          "style": "powerline",
          "background": "#61afef",
          "foreground": "#282c34",
          "properties": { "style": "folder" }
        },
        {
          "type": "git",
          "style": "diamond",
          "background": "#98c379",
          "leadingDiamond": "<",
          "trailingDiamond": ">"
        }
      ]
    },
    { "type": "linebreak" },
    {
      "type": "prompt",
      "alignment": "right",
      "verticalOffset": -1,
      "segments": [
        { "type": "time", "style": "plain", "foreground": "#5c6370" }
      ]
    }
  ]
}"##;

#[test]
fn sample_settings_parse_with_defaults() {
    let settings: Settings = serde_json::from_str(SAMPLE).unwrap();

    assert!(settings.final_space);
    assert_eq!(settings.blocks.len(), 3);

    let first = &settings.blocks[0];
    assert_eq!(first.block_type, BlockType::Prompt);
    assert_eq!(first.alignment, Alignment::Left);
    assert_eq!(first.segments.len(), 2);

    let path = &first.segments[0];
    assert_eq!(path.segment_type, SegmentType::Path);
    assert_eq!(path.style, SegmentStyle::Powerline);
    assert_eq!(path.background, Color::Hex("#61afef".to_string()));
    // unspecified fields fall back to the powerline defaults
    assert_eq!(path.powerline_symbol, DEFAULT_POWERLINE_SYMBOL);
    assert!(!path.invert_powerline_symbol_color);

    let git = &first.segments[1];
    assert_eq!(git.style, SegmentStyle::Diamond);
    assert_eq!(git.leading_diamond, "<");
    assert_eq!(git.trailing_diamond, ">");
    // foreground left unset stays transparent
    assert_eq!(git.foreground, Color::Transparent);

    assert_eq!(settings.blocks[1].block_type, BlockType::LineBreak);

    let right = &settings.blocks[2];
    assert_eq!(right.alignment, Alignment::Right);
    assert_eq!(right.vertical_offset, -1);
}

#[test]
fn missing_style_defaults_to_powerline() {
    let segment: Segment =
        serde_json::from_str(r##"{ "type": "text", "background": "#111111" }"##).unwrap();
    assert_eq!(segment.style, SegmentStyle::Powerline);
    assert!(segment.properties.is_empty());
}

#[test]
fn default_settings_produce_a_usable_prompt() {
    let settings = Settings::default();
    assert!(settings.final_space);
    assert!(!settings.blocks.is_empty());
    assert!(settings.blocks.iter().any(|b| !b.segments.is_empty()));

    // the built-in settings must round-trip through serde
    let json = default_settings_json();
    let parsed: Settings = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.blocks.len(), settings.blocks.len());
}

#[tokio::test]
async fn loader_reads_explicit_settings_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, SAMPLE).await.unwrap();

    let settings = load_settings(Some(path)).await.unwrap();
    assert_eq!(settings.blocks.len(), 3);
}

#[tokio::test]
async fn loader_rejects_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").await.unwrap();

    assert!(load_settings(Some(path)).await.is_err());
}

#[tokio::test]
async fn loader_fails_on_missing_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.json");

    assert!(load_settings(Some(path)).await.is_err());
}
