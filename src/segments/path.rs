use crate::environment::Environment;
use crate::segments::{string_property, Properties, SegmentError, SegmentSource};
use std::path::{Path, PathBuf};

/// Working directory segment. Folds the home prefix to `~`; the `style`
/// property switches between the full path and the last folder only.
pub struct PathSource {
    style: String,
    resolved: Option<PathBuf>,
}

impl PathSource {
    pub fn new(properties: &Properties) -> Self {
        Self {
            style: string_property(properties, "style", "full"),
            resolved: None,
        }
    }

    fn format(&self, dir: &Path, home: Option<&Path>) -> String {
        if self.style == "folder" {
            return dir
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| dir.to_string_lossy().to_string());
        }
        if let Some(home) = home {
            if dir == home {
                return "~".to_string();
            }
            if let Ok(rest) = dir.strip_prefix(home) {
                return format!("~/{}", rest.display());
            }
        }
        dir.to_string_lossy().to_string()
    }
}

impl SegmentSource for PathSource {
    fn enabled(&mut self, env: &dyn Environment) -> Result<bool, SegmentError> {
        self.resolved = env.working_dir();
        Ok(self.resolved.is_some())
    }

    fn text(&self, env: &dyn Environment) -> String {
        match &self.resolved {
            Some(dir) => self.format(dir, env.home_dir().as_deref()),
            None => String::new(),
        }
    }
}
