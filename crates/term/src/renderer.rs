//! ConsoleRenderer: flushes styled lines to a writer.
//!
//! Lines are encoded into an internal buffer as crossterm commands and then
//! written in one go. With color disabled the output is plain text.

use std::io::Write;

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::text::{Line, Rgb, SpanStyle};

pub struct ConsoleRenderer<W: Write> {
    out: W,
    buf: Vec<u8>,
    color: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4 * 1024),
            color,
        }
    }

    /// Write each line followed by a newline.
    pub fn draw(&mut self, lines: &[Line]) -> Result<()> {
        self.buf.clear();
        for line in lines {
            encode_line_into(line, self.color, &mut self.buf)?;
            self.buf.push(b'\n');
        }
        self.flush_buf()
    }

    /// Write a single line with no terminator (for prompts).
    pub fn draw_inline(&mut self, line: &Line) -> Result<()> {
        self.buf.clear();
        encode_line_into(line, self.color, &mut self.buf)?;
        self.flush_buf()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode one line into `out` without writing anywhere else.
pub fn encode_line_into(line: &Line, color: bool, out: &mut Vec<u8>) -> Result<()> {
    for span in &line.spans {
        let styled = color && span.style != SpanStyle::default();
        if styled {
            apply_style_into(out, span.style)?;
        }
        out.queue(Print(&span.text))?;
        if styled {
            out.queue(SetAttribute(Attribute::Reset))?;
            out.queue(ResetColor)?;
        }
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: SpanStyle) -> Result<()> {
    if let Some(fg) = style.fg {
        out.queue(SetForegroundColor(rgb_to_color(fg)))?;
    }
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Span;

    fn styled_line() -> Line {
        Line::plain("a ").with(Span::colored("T", Rgb::new(200, 120, 220), true))
    }

    #[test]
    fn plain_output_has_no_escapes() {
        let mut r = ConsoleRenderer::new(Vec::new(), false);
        r.draw(&[styled_line(), Line::blank()]).unwrap();
        r.draw_inline(&Line::plain("> ")).unwrap();
        assert_eq!(String::from_utf8(r.into_inner()).unwrap(), "a T\n\n> ");
    }

    #[test]
    fn colored_output_wraps_styled_spans() {
        let mut buf = Vec::new();
        encode_line_into(&styled_line(), true, &mut buf).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert!(s.starts_with("a "));
        assert!(s.contains('\x1b'));
        assert!(s.contains('T'));
    }
}
