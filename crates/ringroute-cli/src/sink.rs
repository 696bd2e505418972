//! Destination for rendered results.
//!
//! Every block of output goes to the console and is appended to the result
//! file, so the file ends up holding exactly what was printed.

use std::fs::{File, OpenOptions};
use std::io::{self, Stdout, Write};
use std::path::Path;

/// Writes each result block to a console stream and a persisted copy.
#[derive(Debug)]
pub struct ResultSink<C: Write, F: Write> {
    console: C,
    file: F,
}

impl ResultSink<Stdout, File> {
    /// Truncate the result file at `path` and open it for appending.
    pub fn create(path: &Path) -> io::Result<Self> {
        File::create(path)?;
        let file = OpenOptions::new().append(true).open(path)?;
        Ok(Self::new(io::stdout(), file))
    }
}

impl<C: Write, F: Write> ResultSink<C, F> {
    pub fn new(console: C, file: F) -> Self {
        Self { console, file }
    }

    /// Write `text` to both destinations.
    pub fn emit(&mut self, text: &str) -> io::Result<()> {
        self.console.write_all(text.as_bytes())?;
        self.console.flush()?;
        self.file.write_all(text.as_bytes())?;
        self.file.flush()
    }

    /// Write `text` to the console only.
    pub fn emit_console(&mut self, text: &str) -> io::Result<()> {
        self.console.write_all(text.as_bytes())?;
        self.console.flush()
    }

    /// Consume the sink, returning both destinations.
    pub fn into_parts(self) -> (C, F) {
        (self.console, self.file)
    }
}
