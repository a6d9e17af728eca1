use crate::environment::Environment;
use crate::segments::{string_property, Properties, SegmentError, SegmentSource};

/// Static text from the `text` property. Disabled when empty.
pub struct TextSource {
    text: String,
}

impl TextSource {
    pub fn new(properties: &Properties) -> Self {
        Self {
            text: string_property(properties, "text", ""),
        }
    }
}

impl SegmentSource for TextSource {
    fn enabled(&mut self, _env: &dyn Environment) -> Result<bool, SegmentError> {
        Ok(!self.text.is_empty())
    }

    fn text(&self, _env: &dyn Environment) -> String {
        self.text.clone()
    }
}
