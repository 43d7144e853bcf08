// this_file: src/types.rs

//! Native-side value types shared by the bridges.
//!
//! These mirror the small slice of the native library's surface the bridges
//! actually touch: vectors, time offsets, render state bundles, a render
//! target, and the audio chunk descriptor.

/// 2D float vector
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2f {
    pub x: f32,
    pub y: f32,
}

impl Vector2f {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned float rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> Vector2f {
        Vector2f::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Time offset, microsecond resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Time {
    microseconds: i64,
}

impl Time {
    pub const ZERO: Time = Time { microseconds: 0 };

    pub const fn from_microseconds(microseconds: i64) -> Self {
        Self { microseconds }
    }

    pub fn from_seconds(seconds: f32) -> Self {
        Self {
            microseconds: (seconds as f64 * 1_000_000.0) as i64,
        }
    }

    pub const fn as_microseconds(&self) -> i64 {
        self.microseconds
    }

    pub fn as_seconds(&self) -> f32 {
        (self.microseconds as f64 / 1_000_000.0) as f32
    }
}

/// Blend mode applied when drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    #[default]
    Alpha,
    Add,
    Multiply,
    None,
}

/// Render state bundle passed alongside every draw call.
///
/// The native pipeline hands this in as a transient stack value; bridges
/// pass an owned copy across the boundary so the host side can hold it for
/// the duration of its call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderStates {
    /// Translation applied to every vertex
    pub transform: Vector2f,
    pub blend: BlendMode,
}

/// Render target the native pipeline draws into.
///
/// Records vertex batches rather than rasterizing; the bridges only need a
/// destination for forwarded draw calls, not a framebuffer.
#[derive(Debug, Default)]
pub struct RenderTarget {
    draw_calls: usize,
    vertex_count: usize,
}

impl RenderTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit one batch of vertices under the given states.
    pub fn draw_vertices(&mut self, vertices: &[Vector2f], _states: &RenderStates) {
        self.draw_calls += 1;
        self.vertex_count += vertices.len();
    }

    /// Number of batches submitted so far.
    pub fn draw_calls(&self) -> usize {
        self.draw_calls
    }

    /// Total vertices submitted so far.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn clear(&mut self) {
        self.draw_calls = 0;
        self.vertex_count = 0;
    }
}

/// Chunk descriptor the audio engine passes to a streamed source.
///
/// The source fills `samples` with interleaved 16-bit PCM; an empty chunk
/// after `on_get_data` means the source produced nothing for this cycle.
#[derive(Debug, Default)]
pub struct SoundChunk {
    pub samples: Vec<i16>,
}

impl SoundChunk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}
