//! Output sinks for the formatter.

use std::io::Write;

use crate::FormatError;

/// Indentation unit: two spaces per rendered level.
pub const INDENT_UNIT: &str = "  ";

/// Sink the formatter writes formatted text into.
pub trait Emitter {
    fn emit(&mut self, text: &str);

    fn emit_newline(&mut self) {
        self.emit("\n");
    }

    fn emit_space(&mut self) {
        self.emit(" ");
    }

    fn emit_indent(&mut self, levels: usize) {
        for _ in 0..levels {
            self.emit(INDENT_UNIT);
        }
    }
}

/// Emitter that accumulates into an owned `String`.
#[derive(Debug, Default)]
pub struct StringEmitter {
    output: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        StringEmitter::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        StringEmitter {
            output: String::with_capacity(capacity),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.output.push_str(text);
    }
}

/// Emitter backed by any [`Write`] sink.
///
/// Output is buffered in memory and handed to the sink in a single
/// `write_all` when [`WriteEmitter::finish`] is called, so a formatting
/// panic leaves the sink untouched.
pub struct WriteEmitter<W: Write> {
    buffer: String,
    sink: W,
}

impl<W: Write> WriteEmitter<W> {
    pub fn new(sink: W) -> Self {
        WriteEmitter {
            buffer: String::new(),
            sink,
        }
    }

    /// Flush the buffered output into the sink.
    pub fn finish(mut self) -> Result<(), FormatError> {
        self.sink.write_all(self.buffer.as_bytes())?;
        self.sink.flush()?;
        Ok(())
    }
}

impl<W: Write> Emitter for WriteEmitter<W> {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests can panic")]
mod tests {
    use super::*;

    #[test]
    fn string_emitter_accumulates() {
        let mut emitter = StringEmitter::new();
        emitter.emit("model");
        emitter.emit_space();
        emitter.emit("M");
        emitter.emit_newline();
        emitter.emit_indent(2);
        emitter.emit("Real x;");
        assert_eq!(emitter.as_str(), "model M\n    Real x;");
    }

    #[test]
    fn write_emitter_flushes_once_on_finish() {
        let mut sink = Vec::new();
        {
            let mut emitter = WriteEmitter::new(&mut sink);
            emitter.emit("end M;");
            emitter.emit_newline();
            emitter.finish().unwrap();
        }
        assert_eq!(sink, b"end M;\n");
    }
}
