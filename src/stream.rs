// this_file: src/stream.rs

//! Input-stream trampoline: the native asset loader pulls bytes from a
//! host-side data source instead of a filesystem path.
//!
//! All positions and sizes are signed 64-bit and −1 is the universal
//! failure sentinel, matching the native stream interface's convention.
//! These calls arrive from loader/decoder threads, so failures are logged
//! and swallowed like the audio path's.

use crate::error::BridgeError;
use crate::host::{Args, Handle, HostRuntime};
use crate::value::Value;
use log::error;
use std::sync::Arc;

/// Native seekable byte source.
pub trait InputStream {
    /// Total size of the stream, or −1 if unavailable.
    fn size(&mut self) -> i64;

    /// Read up to `buffer.len()` bytes into `buffer`; returns the count
    /// actually copied, or −1 on failure.
    fn read(&mut self, buffer: &mut [u8]) -> i64;

    /// Seek to an absolute position; returns the new position, or −1.
    fn seek(&mut self, position: i64) -> i64;

    /// Current absolute position, or −1.
    fn tell(&mut self) -> i64;
}

/// Forwards the loader's size/read/seek/tell calls to a host object's
/// `get_size`, `read`, `seek` and `tell` methods.
pub struct InputStreamBridge {
    runtime: Arc<HostRuntime>,
    handle: Handle,
}

impl InputStreamBridge {
    pub fn new(runtime: Arc<HostRuntime>, handle: Handle) -> Self {
        Self { runtime, handle }
    }

    fn report(&self, method: &str) {
        if let Some(err) = self.runtime.take_last_error() {
            error!(target: "hostbridge::stream", "{}: {}", method, err);
        }
    }

    /// Call a host method whose return must be an integer; −1 on anything
    /// else.
    fn call_int(&self, method: &str, args: Args<'_>) -> i64 {
        match self.runtime.call(self.handle, method, args) {
            Ok(Value::Int(value)) => value,
            Ok(other) => {
                self.runtime
                    .set_last_error(BridgeError::mismatch(method, "an integer", other.kind()));
                self.report(method);
                -1
            }
            Err(_) => {
                self.report(method);
                -1
            }
        }
    }
}

impl InputStream for InputStreamBridge {
    fn size(&mut self) -> i64 {
        self.call_int("get_size", Args::Empty)
    }

    fn read(&mut self, buffer: &mut [u8]) -> i64 {
        let requested = match i64::try_from(buffer.len()) {
            Ok(requested) => requested,
            Err(_) => {
                self.runtime.set_last_error(BridgeError::OutOfRange {
                    method: "read".to_owned(),
                    value: i64::MAX,
                });
                self.report("read");
                return -1;
            }
        };
        match self.runtime.call(self.handle, "read", Args::Int(requested)) {
            Ok(Value::Bytes(data)) => {
                // Copy at most the requested length even if the host
                // returned more.
                let copied = data.len().min(buffer.len());
                buffer[..copied].copy_from_slice(&data[..copied]);
                copied as i64
            }
            Ok(other) => {
                self.runtime
                    .set_last_error(BridgeError::mismatch("read", "bytes", other.kind()));
                self.report("read");
                -1
            }
            Err(_) => {
                self.report("read");
                -1
            }
        }
    }

    fn seek(&mut self, position: i64) -> i64 {
        self.call_int("seek", Args::Int(position))
    }

    fn tell(&mut self) -> i64 {
        self.call_int("tell", Args::Empty)
    }
}
