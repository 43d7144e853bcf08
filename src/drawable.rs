// this_file: src/drawable.rs

//! Drawable trampoline.

use crate::host::{Args, Handle, HostRuntime};
use crate::types::{RenderStates, RenderTarget};
use std::sync::Arc;

/// Native drawable capability: render yourself into a target.
///
/// The signature has no error channel; implementations that can fail leave
/// the failure where the caller can poll it.
pub trait Drawable {
    fn draw(&self, target: &mut RenderTarget, states: &RenderStates);
}

/// Forwards the native pipeline's draw calls to a host object's `draw`
/// method, passing the wrapped target and an owned copy of the states.
pub struct DrawableBridge {
    runtime: Arc<HostRuntime>,
    handle: Handle,
}

impl DrawableBridge {
    pub fn new(runtime: Arc<HostRuntime>, handle: Handle) -> Self {
        Self { runtime, handle }
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }
}

impl Drawable for DrawableBridge {
    fn draw(&self, target: &mut RenderTarget, states: &RenderStates) {
        // The return value is discarded. A failing call stays in the
        // runtime's last-error slot; the pipeline polls it after the call.
        let _ = self.runtime.call(
            self.handle,
            "draw",
            Args::Draw {
                target,
                states: *states,
            },
        );
    }
}
