use crate::environment::Environment;
use crate::segments::{bool_property, string_property, Properties, SegmentError, SegmentSource};

/// Exit status of the last command. Hidden on success unless
/// `always_enabled` is set.
pub struct ExitCodeSource {
    always_enabled: bool,
    success_icon: String,
    error_icon: String,
    code: i32,
}

impl ExitCodeSource {
    pub fn new(properties: &Properties) -> Self {
        Self {
            always_enabled: bool_property(properties, "always_enabled", false),
            success_icon: string_property(properties, "success_icon", "\u{2714}"),
            error_icon: string_property(properties, "error_icon", "\u{2718} "),
            code: 0,
        }
    }
}

impl SegmentSource for ExitCodeSource {
    fn enabled(&mut self, env: &dyn Environment) -> Result<bool, SegmentError> {
        self.code = env.last_exit_code();
        Ok(self.always_enabled || self.code != 0)
    }

    fn text(&self, _env: &dyn Environment) -> String {
        if self.code == 0 {
            self.success_icon.clone()
        } else {
            format!("{}{}", self.error_icon, self.code)
        }
    }
}
