//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame, and any frame after a resize or
//! [`TerminalRenderer::invalidate`], is a full redraw. After that only the
//! runs that changed are written.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Glyph, Rgb, Style};

/// Raw mode, alternate screen, hidden cursor.
pub fn enter_terminal() -> Result<()> {
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    let mut buf = Vec::new();
    buf.queue(terminal::EnterAlternateScreen)?;
    buf.queue(cursor::Hide)?;
    buf.queue(terminal::DisableLineWrap)?;
    flush_stdout(&buf)
}

/// Undo [`enter_terminal`]. Safe to call after a partial enter.
pub fn leave_terminal() -> Result<()> {
    let mut buf = Vec::new();
    buf.queue(ResetColor)?;
    buf.queue(SetAttribute(Attribute::Reset))?;
    buf.queue(terminal::EnableLineWrap)?;
    buf.queue(cursor::Show)?;
    buf.queue(terminal::LeaveAlternateScreen)?;
    let flushed = flush_stdout(&buf);
    terminal::disable_raw_mode().context("failed to disable raw mode")?;
    flushed
}

fn flush_stdout(buf: &[u8]) -> Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(buf)?;
    stdout.flush()?;
    Ok(())
}

pub struct TerminalRenderer {
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// After the call `fb` holds the previous frame, so callers keep one
    /// buffer and redraw into it each frame without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let prev = self.last.take();
        encode_frame_into(prev.as_ref(), fb, &mut self.buf)?;
        flush_stdout(&self.buf)?;

        let mut prev = prev.unwrap_or_else(|| FrameBuffer::new(0, 0));
        prev.resize(fb.width(), fb.height());
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }
}

/// Encode `next` into `out` as cursor moves and styled runs.
///
/// Without a previous frame of the same size the screen is cleared and every
/// row is written; otherwise only glyphs that differ from `prev` are.
pub fn encode_frame_into(
    prev: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<()> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut pen = Pen::default();
    for y in 0..next.height() {
        let mut from = 0;
        while let Some((x, len)) = next_changed_run(prev, next, from, y) {
            out.queue(cursor::MoveTo(x, y))?;
            for cx in x..x + len {
                pen.print(out, next.get(cx, y).unwrap_or_default())?;
            }
            from = x + len;
        }
    }
    pen.finish(out)
}

/// First run of differing glyphs in row `y` at or after column `from`.
fn next_changed_run(
    prev: Option<&FrameBuffer>,
    next: &FrameBuffer,
    from: u16,
    y: u16,
) -> Option<(u16, u16)> {
    let w = next.width();
    let differs = |x: u16| prev.map_or(true, |p| p.get(x, y) != next.get(x, y));
    let start = (from..w).find(|&x| differs(x))?;
    let end = (start..w).find(|&x| !differs(x)).unwrap_or(w);
    Some((start, end - start))
}

/// Remembers the last style sent so consecutive glyphs share attributes.
#[derive(Default)]
struct Pen {
    style: Option<Style>,
}

impl Pen {
    fn print(&mut self, out: &mut Vec<u8>, glyph: Glyph) -> Result<()> {
        if self.style != Some(glyph.style) {
            let style = glyph.style;
            // SGR reset clears colors too, so it goes first.
            out.queue(SetAttribute(Attribute::Reset))?;
            if style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            out.queue(SetForegroundColor(style.fg.into()))?;
            out.queue(SetBackgroundColor(style.bg.into()))?;
            self.style = Some(style);
        }
        out.queue(Print(glyph.ch))?;
        Ok(())
    }

    fn finish(self, out: &mut Vec<u8>) -> Result<()> {
        if self.style.is_some() {
            out.queue(ResetColor)?;
            out.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}
