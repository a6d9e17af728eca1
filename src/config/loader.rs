use crate::config::Settings;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use tokio::fs;

/// Load settings with priority: CLI flag > env var > settings files > built-in defaults.
pub async fn load_settings(config_path: Option<PathBuf>) -> Result<Settings> {
    if let Some(path) = config_path {
        return load_settings_file(&path).await;
    }
    if let Ok(path) = env::var("PROMPTLINE_CONFIG") {
        return load_settings_file(&PathBuf::from(path)).await;
    }
    load_settings_from_default_locations().await
}

async fn load_settings_from_default_locations() -> Result<Settings> {
    for path in settings_search_paths() {
        if !path.exists() {
            continue;
        }
        match load_settings_file(&path).await {
            Ok(settings) => return Ok(settings),
            Err(e) => {
                eprintln!("Warning: Failed to load settings from {}: {}", path.display(), e);
            }
        }
    }

    Ok(Settings::default())
}

fn settings_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from(".promptline.json"));

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".config").join("promptline").join("config.json"));
        paths.push(home.join(".promptline.json"));
    }

    paths
}

async fn load_settings_file(path: &PathBuf) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

    let settings: Settings = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;

    Ok(settings)
}
