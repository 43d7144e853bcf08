// this_file: src/diag.rs

//! Diagnostic sink redirector.
//!
//! The native library writes diagnostics to one global stream ([`err`]).
//! By default those bytes reach stderr; after [`redirect`] is installed they
//! are accumulated in a fixed 512-byte line buffer and every completed line
//! is handed to the handler registered with [`set_message_handler`]. The
//! buffer is created exactly once per process and lives until teardown.

use log::warn;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::OnceLock;

/// Capacity of the diagnostic line buffer. Big enough for any one message.
pub const MESSAGE_BUFFER_SIZE: usize = 512;

type MessageHandler = Box<dyn FnMut(&str) + Send>;

struct Sink {
    buffer: Box<[u8; MESSAGE_BUFFER_SIZE]>,
    len: usize,
    handler: Option<MessageHandler>,
    installed: bool,
}

impl Sink {
    /// Append bytes, completing a line on every terminator. A full buffer
    /// forces a flush before the write continues, so nothing is dropped.
    fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            if self.len == MESSAGE_BUFFER_SIZE {
                self.flush();
            }
            self.buffer[self.len] = byte;
            self.len += 1;
            if byte == b'\n' {
                self.flush();
            }
        }
    }

    /// Deliver the buffered bytes as one message, stripping a trailing
    /// terminator when present. No-op on an empty buffer.
    fn flush(&mut self) {
        if self.len == 0 {
            return;
        }
        let mut end = self.len;
        if self.buffer[end - 1] == b'\n' {
            end -= 1;
        }
        let line = String::from_utf8_lossy(&self.buffer[..end]);
        match self.handler.as_mut() {
            Some(handler) => handler(line.as_ref()),
            None => warn!(target: "hostbridge::diag", "{}", line),
        }
        self.len = 0;
    }
}

fn sink() -> &'static Mutex<Sink> {
    static SINK: OnceLock<Mutex<Sink>> = OnceLock::new();
    SINK.get_or_init(|| {
        Mutex::new(Sink {
            buffer: Box::new([0; MESSAGE_BUFFER_SIZE]),
            len: 0,
            handler: None,
            installed: false,
        })
    })
}

/// Rebind the global diagnostic stream to the line-buffered sink.
///
/// Safe to call any number of times; the underlying buffer is created only
/// once, on first use of the sink.
pub fn redirect() {
    sink().lock().installed = true;
}

/// Register the single "new diagnostic message" handler.
///
/// Replaces any previously registered handler. Lines flushed while no
/// handler is registered are logged at warn level instead.
pub fn set_message_handler(handler: impl FnMut(&str) + Send + 'static) {
    sink().lock().handler = Some(Box::new(handler));
}

/// Teardown path: force a final flush of any buffered partial line.
///
/// Never fails; this mirrors the end-of-stream sentinel write on the
/// original stream interface.
pub fn shutdown() {
    sink().lock().flush();
}

/// Writer for the native library's global diagnostic stream.
///
/// Obtained from [`err`]. Before [`redirect`] is installed, bytes pass
/// through to stderr.
pub struct DiagWriter;

/// The global diagnostic stream.
pub fn err() -> DiagWriter {
    DiagWriter
}

impl Write for DiagWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut sink = sink().lock();
        if sink.installed {
            sink.write_bytes(buf);
        } else {
            io::stderr().write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut sink = sink().lock();
        if sink.installed {
            sink.flush();
        } else {
            io::stderr().flush()?;
        }
        Ok(())
    }
}
