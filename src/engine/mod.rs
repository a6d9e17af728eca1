use crate::config::{Alignment, Block, BlockType, Settings};
use crate::environment::Environment;
use crate::render::{Color, PromptWriter};
use crate::segments::{EvaluatedSegment, SegmentStyle};
use crate::utils::debug_with_context;

/// The prompt rendering engine. Walks the configured blocks and segments,
/// deciding per segment which glyphs and color transitions to emit based on
/// its style and the previously rendered segment.
///
/// The engine never fails: a segment that errors or reports itself disabled
/// simply drops out of the prompt. All transient state lives in the block
/// loop, so repeated renders of the same settings are byte-identical.
pub struct Engine<'a, W: PromptWriter> {
    settings: &'a Settings,
    env: &'a dyn Environment,
    writer: W,
}

impl<'a, W: PromptWriter> Engine<'a, W> {
    pub fn new(settings: &'a Settings, env: &'a dyn Environment, writer: W) -> Self {
        Self {
            settings,
            env,
            writer,
        }
    }

    /// Resolve the separator's far-side color: the color on the side of the
    /// glyph that is not the active segment's background.
    fn powerline_color(
        previous: Option<&EvaluatedSegment>,
        active: &EvaluatedSegment,
        foreground: bool,
    ) -> Color {
        let Some(previous) = previous else {
            return Color::Transparent;
        };
        // a non-powerline segment never inherits a bleed color
        if !foreground && active.style != SegmentStyle::Powerline {
            return Color::Transparent;
        }
        // cannot chain into a separator color that was never painted
        if foreground && previous.style != SegmentStyle::Powerline {
            return Color::Transparent;
        }
        previous.background.clone()
    }

    fn write_powerline_separator(
        &mut self,
        background: &Color,
        foreground: &Color,
        active: &EvaluatedSegment,
        previous: Option<&EvaluatedSegment>,
        end: bool,
    ) {
        // the closing glyph belongs to the run being closed
        let symbol = match (end, previous) {
            (true, Some(previous)) => &previous.powerline_symbol,
            _ => &active.powerline_symbol,
        };
        if active.invert_powerline_symbol_color {
            self.writer.write(foreground, background, symbol);
        } else {
            self.writer.write(background, foreground, symbol);
        }
    }

    /// Terminate an open powerline run when control passes to a
    /// non-powerline segment.
    fn end_powerline(&mut self, previous: Option<&EvaluatedSegment>, active: &EvaluatedSegment) {
        let Some(prev) = previous else {
            return;
        };
        if active.style != SegmentStyle::Powerline && prev.style == SegmentStyle::Powerline {
            let background = Self::powerline_color(previous, active, false);
            let foreground = prev.background.clone();
            self.write_powerline_separator(&background, &foreground, active, previous, true);
        }
    }

    fn render_text(&mut self, active: &EvaluatedSegment) {
        let body = format!("{}{}{}", active.prefix, active.text, active.postfix);
        self.writer
            .write(&active.background, &active.foreground, &body);
    }

    fn render_segment_text(
        &mut self,
        previous: Option<&EvaluatedSegment>,
        active: &EvaluatedSegment,
    ) {
        match active.style {
            SegmentStyle::Plain => self.render_text(active),
            SegmentStyle::Diamond => {
                self.writer
                    .write(&Color::Transparent, &active.background, &active.leading_diamond);
                self.render_text(active);
                self.writer
                    .write(&Color::Transparent, &active.background, &active.trailing_diamond);
            }
            SegmentStyle::Powerline => {
                let foreground = Self::powerline_color(previous, active, true);
                self.write_powerline_separator(&active.background, &foreground, active, previous, false);
                self.render_text(active);
            }
        }
    }

    /// Render one block's segments and return the accumulated text. The
    /// previously rendered segment is threaded through the loop explicitly
    /// and never survives past this call.
    pub fn render_block_segments(&mut self, block: &Block) -> String {
        let mut previous: Option<EvaluatedSegment> = None;
        for segment in &block.segments {
            let active = match segment.evaluate(self.env) {
                Ok(Some(active)) => active,
                Ok(None) => continue,
                Err(err) => {
                    debug_with_context("engine", &format!("segment skipped: {}", err));
                    continue;
                }
            };
            self.end_powerline(previous.as_ref(), &active);
            self.render_segment_text(previous.as_ref(), &active);
            previous = Some(active);
        }
        if let Some(prev) = previous.as_ref() {
            if prev.style == SegmentStyle::Powerline {
                let foreground = prev.background.clone();
                self.write_powerline_separator(&Color::Transparent, &foreground, prev, Some(prev), true);
            }
        }
        let rendered = self.writer.as_string();
        self.writer.reset();
        rendered
    }

    /// Render the whole prompt as an ordered sequence of output fragments.
    /// The caller performs the actual terminal writes.
    pub fn render(&mut self) -> Vec<String> {
        let settings = self.settings;
        let mut output = Vec::new();
        for block in &settings.blocks {
            if block.block_type == BlockType::LineBreak {
                output.push(self.writer.line_break());
                continue;
            }
            if block.vertical_offset != 0 {
                output.push(self.writer.change_line(block.vertical_offset));
            }
            match block.alignment {
                Alignment::Right => {
                    output.push(self.writer.carriage_return());
                    let text = self.render_block_segments(block);
                    output.push(self.writer.cursor_for_right_align(&text, block.vertical_offset));
                    output.push(text);
                }
                Alignment::Left => output.push(self.render_block_segments(block)),
            }
        }
        if settings.final_space {
            output.push(" ".to_string());
        }
        output
    }
}
