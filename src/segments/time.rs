use crate::environment::Environment;
use crate::segments::{string_property, Properties, SegmentError, SegmentSource};

/// Wall-clock segment with a strftime `time_format` property.
pub struct TimeSource {
    format: String,
}

impl TimeSource {
    pub fn new(properties: &Properties) -> Self {
        Self {
            format: string_property(properties, "time_format", "%H:%M:%S"),
        }
    }
}

impl SegmentSource for TimeSource {
    fn enabled(&mut self, _env: &dyn Environment) -> Result<bool, SegmentError> {
        Ok(true)
    }

    fn text(&self, env: &dyn Environment) -> String {
        env.now().format(&self.format).to_string()
    }
}
