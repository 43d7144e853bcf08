// this_file: src/host.rs

//! Host runtime: object registry, typed handles, and the execution lock.
//!
//! The scripting runtime is single-threaded by contract: every call into a
//! host object must hold the runtime's one execution lock, no matter which
//! native thread the call originates from. [`HostRuntime::call`] is the only
//! entry point and acquires the lock with a scoped guard, so it is released
//! on every exit path.

use crate::error::BridgeError;
use crate::types::{RenderStates, RenderTarget, SoundChunk, Time};
use crate::value::Value;
use crate::Result;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::num::NonZeroU64;
use std::sync::Arc;

/// Positional argument pack for a host-runtime method call.
///
/// Each bridge uses exactly one fixed shape per method; the shapes carry
/// native values (or mutable borrows of native objects, for out-parameters)
/// already wrapped for the host side.
pub enum Args<'a> {
    /// No arguments
    Empty,
    /// A single unsigned index
    Index(u64),
    /// A single signed 64-bit integer
    Int(i64),
    /// A single time offset, passed by owned copy
    Time(Time),
    /// A render target borrow plus an owned copy of the render states
    Draw {
        target: &'a mut RenderTarget,
        states: RenderStates,
    },
    /// The audio chunk descriptor, filled by the host method
    Chunk(&'a mut SoundChunk),
}

/// An object living in the host runtime, callable by method name.
///
/// This is the duck-typed boundary: method names and argument shapes are the
/// contract, not a trait per capability. An object that does not implement a
/// requested method returns [`BridgeError::MissingMethod`]; one whose method
/// fails returns [`BridgeError::Raised`].
pub trait HostObject: Send + Sync {
    fn call(&self, method: &str, args: Args<'_>) -> Result<Value>;
}

/// Opaque reference to a registered host object.
///
/// A handle does not keep the object registered; the embedding layer must
/// keep the registration alive for as long as any bridge holds the handle.
/// Calls through an unregistered handle fail with [`BridgeError::StaleHandle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(NonZeroU64);

struct RuntimeState {
    objects: HashMap<u64, Arc<dyn HostObject>>,
    next_id: u64,
    last_error: Option<BridgeError>,
}

/// The embedded scripting runtime, as seen from the native side.
///
/// One instance per embedding. The single mutex is the runtime's global
/// execution lock: it serializes every host call and also guards the
/// registry and the last-error slot, so the whole mutual-exclusion domain
/// is one named lock. Host objects must not call back into the runtime from
/// within [`HostObject::call`]; the lock is not reentrant.
pub struct HostRuntime {
    state: Mutex<RuntimeState>,
}

impl HostRuntime {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RuntimeState {
                objects: HashMap::new(),
                next_id: 1,
                last_error: None,
            }),
        }
    }

    /// Register an object and return its handle.
    pub fn register(&self, object: Arc<dyn HostObject>) -> Handle {
        let mut state = self.state.lock();
        let id = state.next_id;
        state.next_id += 1;
        state.objects.insert(id, object);
        // next_id starts at 1 and only grows
        Handle(NonZeroU64::new(id).unwrap())
    }

    /// Drop an object's registration. Outstanding handles become stale.
    pub fn unregister(&self, handle: Handle) {
        self.state.lock().objects.remove(&handle.0.get());
    }

    /// Number of currently registered objects.
    pub fn object_count(&self) -> usize {
        self.state.lock().objects.len()
    }

    /// Call a method on a registered object.
    ///
    /// Holds the execution lock for the full duration of the host call. Any
    /// failure is recorded in the last-error slot before being returned, so
    /// native callers without a return channel can poll it afterwards.
    pub fn call(&self, handle: Handle, method: &str, args: Args<'_>) -> Result<Value> {
        let mut state = self.state.lock();
        let object = match state.objects.get(&handle.0.get()) {
            Some(object) => Arc::clone(object),
            None => {
                state.last_error = Some(BridgeError::StaleHandle);
                return Err(BridgeError::StaleHandle);
            }
        };
        match object.call(method, args) {
            Ok(value) => Ok(value),
            Err(err) => {
                state.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Record a failure in the last-error slot without making a call.
    ///
    /// Bridges use this when the host call itself succeeded but returned a
    /// value of the wrong shape.
    pub fn set_last_error(&self, err: BridgeError) {
        self.state.lock().last_error = Some(err);
    }

    /// Take and clear the pending error, if any.
    pub fn take_last_error(&self) -> Option<BridgeError> {
        self.state.lock().last_error.take()
    }

    /// Whether a failure is pending. Does not clear it.
    pub fn error_pending(&self) -> bool {
        self.state.lock().last_error.is_some()
    }
}

impl Default for HostRuntime {
    fn default() -> Self {
        Self::new()
    }
}
