use crate::environment::Environment;
use crate::segments::{SegmentError, SegmentSource};

/// Name of the invoking shell.
pub struct ShellSource;

impl SegmentSource for ShellSource {
    fn enabled(&mut self, _env: &dyn Environment) -> Result<bool, SegmentError> {
        Ok(true)
    }

    fn text(&self, env: &dyn Environment) -> String {
        env.shell()
    }
}
