//! Shared program output
//!
//! Coordinators and workers print through a [`Console`] instead of calling
//! `println!` directly. A console is a cheap clone around one locked writer,
//! so every `line` call lands in the output whole, even when several worker
//! threads announce themselves at once. Tests swap stdout for a [`Capture`]
//! buffer and assert on the exact text.
//!
//! # Example
//!
//! ```
//! use ensemble::util::console::Console;
//!
//! let (console, capture) = Console::capture();
//! console.line("Main Thread: 0 prime numbers found.");
//! assert_eq!(capture.contents(), "Main Thread: 0 prime numbers found.\n");
//! ```

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Thread-safe, line-oriented output handle
#[derive(Clone)]
pub struct Console {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Console {
    /// Console writing to the process stdout
    pub fn stdout() -> Self {
        Self::from_writer(io::stdout())
    }

    /// Console over an arbitrary writer
    pub fn from_writer<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Console writing into an in-memory buffer, plus a handle to read it back
    pub fn capture() -> (Self, Capture) {
        let capture = Capture::default();
        (Self::from_writer(capture.clone()), capture)
    }

    /// Write `text` followed by a newline, atomically with respect to other lines
    ///
    /// Write errors (closed pipe, full disk) are logged, not returned.
    pub fn line(&self, text: impl AsRef<str>) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let result = writeln!(writer, "{}", text.as_ref()).and_then(|()| writer.flush());
        if let Err(err) = result {
            tracing::warn!(error = %err, "failed to write program output");
        }
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

/// In-memory writer backing [`Console::capture`]
#[derive(Debug, Clone, Default)]
pub struct Capture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Capture {
    /// Everything written so far, as UTF-8 (lossy)
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Captured output split into lines
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
