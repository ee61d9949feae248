//! Plain-text rendering: one line per tick, one glyph per cell.

use std::io::Write;

use strata_core::{Field, FieldSink, SinkError};

/// Glyphs for symbols 0, 1 and 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs(pub [char; 3]);

impl Glyphs {
    /// The symbol values themselves: `0`, `1`, `2`.
    pub const DIGITS: Self = Self(['0', '1', '2']);
    /// Shaded blocks, lightest for 0.
    pub const BLOCKS: Self = Self([' ', '▒', '█']);

    /// Glyph for `symbol`. Symbols past the table use the last glyph.
    pub fn glyph(&self, symbol: u8) -> char {
        self.0[usize::from(symbol).min(2)]
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self::DIGITS
    }
}

/// Render `field` as text, one newline-terminated line per tick.
pub fn render_text(field: &Field, glyphs: Glyphs) -> String {
    let mut out = String::with_capacity((field.width() + 1) * field.height());
    for row in field.rows() {
        out.extend(row.iter().map(|&s| glyphs.glyph(s)));
        out.push('\n');
    }
    out
}

/// A [`FieldSink`] writing text to any writer.
pub struct TextSink<W: Write> {
    out: W,
    glyphs: Glyphs,
}

impl<W: Write> TextSink<W> {
    /// Sink writing to `out` with `glyphs`.
    pub fn new(out: W, glyphs: Glyphs) -> Self {
        Self { out, glyphs }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FieldSink for TextSink<W> {
    fn consume(&mut self, field: &Field) -> Result<(), SinkError> {
        let io = |e: std::io::Error| SinkError::Io {
            reason: e.to_string(),
        };
        self.out
            .write_all(render_text(field, self.glyphs).as_bytes())
            .map_err(io)?;
        self.out.flush().map_err(io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::{Alphabet, State};

    fn field() -> Field {
        let mut f = Field::new(Alphabet::Ternary, State::from(vec![0, 1, 2])).unwrap();
        f.push(State::from(vec![2, 2, 0])).unwrap();
        f
    }

    #[test]
    fn digits() {
        assert_eq!(render_text(&field(), Glyphs::DIGITS), "012\n220\n");
    }

    #[test]
    fn blocks() {
        assert_eq!(render_text(&field(), Glyphs::BLOCKS), " ▒█\n██ \n");
    }

    #[test]
    fn sink_writes_to_buffer() {
        let mut sink = TextSink::new(Vec::new(), Glyphs::default());
        sink.consume(&field()).unwrap();
        assert_eq!(sink.into_inner(), b"012\n220\n");
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("pipe closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_io_error() {
        let err = TextSink::new(Broken, Glyphs::default())
            .consume(&field())
            .unwrap_err();
        assert_eq!(
            err,
            SinkError::Io {
                reason: "pipe closed".into()
            }
        );
    }
}
