//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every frame is a full redraw from the home position. Nothing is cleared
//! after startup; overwriting every cell is enough to erase the last frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, execute, style::Print, terminal, QueueableCommand};

use donut_core::FrameBuffer;
use donut_engine::Display;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Switch to raw mode and the alternate screen, then clear it once.
    pub fn enter(&mut self) -> Result<()> {
        // First command through crossterm; on Windows this also turns on
        // virtual terminal processing for the escape codes queued later.
        execute!(self.stdout, terminal::EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a framebuffer.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(fb, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for TerminalRenderer {
    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.draw(fb)
    }
}

/// Encode a full frame into `out`: cursor home, then the rows.
///
/// Rows are separated by `\r\n` because raw mode doesn't translate `\n`.
/// The last row gets no break so the screen never scrolls.
pub fn encode_frame_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;

    let mut utf8 = [0u8; 4];
    let rows = fb.height() as usize;
    for (y, row) in fb.rows().enumerate() {
        for cell in row {
            out.extend_from_slice(cell.glyph.encode_utf8(&mut utf8).as_bytes());
        }
        if y + 1 < rows {
            out.queue(Print("\r\n"))?;
        }
    }
    Ok(())
}
