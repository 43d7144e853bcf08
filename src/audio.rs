// this_file: src/audio.rs

//! Sound-stream trampoline.
//!
//! The audio engine drives these calls from its own streaming thread, not
//! the thread that owns the host runtime. The execution lock inside
//! [`HostRuntime::call`] covers the cross-thread discipline; this module's
//! job is the log-and-swallow error policy, since the engine's callbacks
//! have no error channel to propagate through.

use crate::error::BridgeError;
use crate::host::{Args, Handle, HostRuntime};
use crate::types::{SoundChunk, Time};
use crate::value::Value;
use log::error;
use std::sync::Arc;

/// Native streamed audio source: supply PCM chunks on demand, honor seeks.
pub trait SoundSource {
    /// Fill `chunk` with the next samples. Returning `false` ends the stream.
    fn on_get_data(&mut self, chunk: &mut SoundChunk) -> bool;

    /// Reposition the stream to `offset`.
    fn on_seek(&mut self, offset: Time);
}

/// Forwards the audio engine's buffer-fill and seek requests to a host
/// object's `on_get_data` and `on_seek` methods.
///
/// The engine calls these repeatedly for the bridge's whole lifetime; the
/// host object must stay registered and callable for that duration.
pub struct SoundStreamBridge {
    runtime: Arc<HostRuntime>,
    handle: Handle,
    channel_count: u32,
    sample_rate: u32,
}

impl SoundStreamBridge {
    pub fn new(runtime: Arc<HostRuntime>, handle: Handle) -> Self {
        Self {
            runtime,
            handle,
            channel_count: 0,
            sample_rate: 0,
        }
    }

    /// Establish the stream format. Must be called before playback starts.
    pub fn initialize(&mut self, channel_count: u32, sample_rate: u32) {
        self.channel_count = channel_count;
        self.sample_rate = sample_rate;
    }

    pub fn channel_count(&self) -> u32 {
        self.channel_count
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Log and clear the pending failure. The streaming thread's caller
    /// never polls the last-error slot, so nothing may be left in it here.
    fn report(&self, method: &str) {
        if let Some(err) = self.runtime.take_last_error() {
            error!(target: "hostbridge::audio", "{}: {}", method, err);
        }
    }
}

impl SoundSource for SoundStreamBridge {
    fn on_get_data(&mut self, chunk: &mut SoundChunk) -> bool {
        match self.runtime.call(self.handle, "on_get_data", Args::Chunk(chunk)) {
            Ok(Value::Bool(more)) => more,
            Ok(other) => {
                self.runtime.set_last_error(BridgeError::mismatch(
                    "on_get_data",
                    "a boolean",
                    other.kind(),
                ));
                self.report("on_get_data");
                false
            }
            Err(_) => {
                self.report("on_get_data");
                false
            }
        }
    }

    fn on_seek(&mut self, offset: Time) {
        match self.runtime.call(self.handle, "on_seek", Args::Time(offset)) {
            Ok(_) => {}
            Err(_) => self.report("on_seek"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostObject;
    use crate::Result;
    use parking_lot::Mutex;

    /// Chunked PCM source: hands out fixed-size chunks of a sample buffer
    /// and returns false on the final one.
    struct PcmSource {
        state: Mutex<PcmState>,
    }

    struct PcmState {
        samples: Vec<i16>,
        cursor: usize,
        chunk_size: usize,
        last_seek: Option<Time>,
    }

    impl PcmSource {
        fn new(samples: Vec<i16>, chunk_size: usize) -> Self {
            Self {
                state: Mutex::new(PcmState {
                    samples,
                    cursor: 0,
                    chunk_size,
                    last_seek: None,
                }),
            }
        }
    }

    impl HostObject for PcmSource {
        fn call(&self, method: &str, args: Args<'_>) -> Result<Value> {
            let mut state = self.state.lock();
            match (method, args) {
                ("on_get_data", Args::Chunk(chunk)) => {
                    let end = (state.cursor + state.chunk_size).min(state.samples.len());
                    chunk.samples = state.samples[state.cursor..end].to_vec();
                    state.cursor = end;
                    Ok(Value::Bool(end < state.samples.len()))
                }
                ("on_seek", Args::Time(offset)) => {
                    state.last_seek = Some(offset);
                    state.cursor = 0;
                    Ok(Value::None)
                }
                _ => Err(BridgeError::missing(method)),
            }
        }
    }

    fn bridge_for(object: impl HostObject + 'static) -> (Arc<HostRuntime>, SoundStreamBridge) {
        let runtime = Arc::new(HostRuntime::new());
        let handle = runtime.register(Arc::new(object));
        let bridge = SoundStreamBridge::new(Arc::clone(&runtime), handle);
        (runtime, bridge)
    }

    #[test]
    fn test_initialize_stores_format() {
        let (_runtime, mut bridge) = bridge_for(PcmSource::new(vec![0; 8], 4));
        bridge.initialize(2, 44_100);
        assert_eq!(bridge.channel_count(), 2);
        assert_eq!(bridge.sample_rate(), 44_100);
    }

    #[test]
    fn test_on_get_data_streams_until_exhausted() {
        let samples: Vec<i16> = (0..10).collect();
        let (runtime, mut bridge) = bridge_for(PcmSource::new(samples.clone(), 4));

        let mut received = Vec::new();
        let mut chunk = SoundChunk::new();
        while {
            let more = bridge.on_get_data(&mut chunk);
            received.extend_from_slice(&chunk.samples);
            more
        } {}

        assert_eq!(received, samples);
        assert!(!runtime.error_pending());
    }

    #[test]
    fn test_on_get_data_wrong_return_type_stops_stream() {
        struct BadSource;
        impl HostObject for BadSource {
            fn call(&self, method: &str, _args: Args<'_>) -> Result<Value> {
                match method {
                    "on_get_data" => Ok(Value::Int(1)),
                    _ => Err(BridgeError::missing(method)),
                }
            }
        }
        let (runtime, mut bridge) = bridge_for(BadSource);
        let mut chunk = SoundChunk::new();
        assert!(!bridge.on_get_data(&mut chunk));
        // Logged and swallowed; nothing left pending for a caller that
        // never polls.
        assert!(!runtime.error_pending());
    }

    #[test]
    fn test_on_get_data_host_failure_stops_stream() {
        struct Failing;
        impl HostObject for Failing {
            fn call(&self, method: &str, _args: Args<'_>) -> Result<Value> {
                Err(BridgeError::raised(method, "decoder exploded"))
            }
        }
        let (runtime, mut bridge) = bridge_for(Failing);
        let mut chunk = SoundChunk::new();
        assert!(!bridge.on_get_data(&mut chunk));
        assert!(!runtime.error_pending());
    }

    #[test]
    fn test_on_seek_forwards_offset_and_swallows_failures() {
        let source = Arc::new(PcmSource::new((0..10).collect(), 4));
        let runtime = Arc::new(HostRuntime::new());
        let handle = runtime.register(source.clone() as Arc<dyn HostObject>);
        let mut bridge = SoundStreamBridge::new(Arc::clone(&runtime), handle);

        bridge.on_seek(Time::from_seconds(1.5));
        assert_eq!(
            source.state.lock().last_seek,
            Some(Time::from_microseconds(1_500_000))
        );

        // A stale handle fails silently on the seek path too.
        runtime.unregister(handle);
        bridge.on_seek(Time::ZERO);
        assert!(!runtime.error_pending());
    }
}
