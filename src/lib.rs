// this_file: src/lib.rs

//! Trampoline layer bridging a native multimedia library's virtual-dispatch
//! interfaces to an embedded scripting runtime.
//!
//! Each bridge type satisfies one native capability trait ([`Drawable`],
//! [`SoundSource`], [`InputStream`], or the shape point-source surface of
//! [`ShapeBridge`]) and forwards every call, by method name with a fixed
//! positional argument shape, to a [`HostObject`] registered with a
//! [`HostRuntime`]. Return values come back as dynamic [`Value`]s and are
//! validated by the bridge; failures land in the runtime's last-error slot,
//! in the log, or in a sentinel return value, depending on whether the
//! native caller has an error channel to poll.
//!
//! The [`diag`] module additionally captures the native library's global
//! diagnostic stream and forwards complete lines to a registered handler.

pub mod audio;
pub mod diag;
pub mod drawable;
pub mod error;
pub mod host;
pub mod shape;
pub mod stream;
pub mod types;
pub mod value;

pub use audio::{SoundSource, SoundStreamBridge};
pub use diag::{err, redirect, set_message_handler, shutdown, MESSAGE_BUFFER_SIZE};
pub use drawable::{Drawable, DrawableBridge};
pub use error::BridgeError;
pub use host::{Args, Handle, HostObject, HostRuntime};
pub use shape::ShapeBridge;
pub use stream::{InputStream, InputStreamBridge};
pub use types::{BlendMode, Rect, RenderStates, RenderTarget, SoundChunk, Time, Vector2f};
pub use value::{to_vector2f, Value};

/// Result type for hostbridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;
