// this_file: src/shape.rs

//! Shape trampoline: point enumeration sourced from a host object, derived
//! geometry computed natively.

use crate::drawable::Drawable;
use crate::error::BridgeError;
use crate::host::{Args, Handle, HostRuntime};
use crate::types::{Rect, RenderStates, RenderTarget, Vector2f};
use crate::value::{to_vector2f, Value};
use std::sync::Arc;

/// A shape whose points come from a host object's `get_point_count` and
/// `get_point` methods.
///
/// The derived fill geometry (a triangle fan around the bounds center, as
/// the native base class computes it) is cached and recomputed only by
/// [`update`](ShapeBridge::update), which the host side calls explicitly
/// after mutating its point data. The point queries tolerate being made
/// before any points are configured.
pub struct ShapeBridge {
    runtime: Arc<HostRuntime>,
    handle: Handle,
    vertices: Vec<Vector2f>,
    bounds: Rect,
}

impl ShapeBridge {
    pub fn new(runtime: Arc<HostRuntime>, handle: Handle) -> Self {
        Self {
            runtime,
            handle,
            vertices: Vec::new(),
            bounds: Rect::default(),
        }
    }

    /// Number of points defining the shape.
    ///
    /// A non-integer or out-of-range host return records the failure and
    /// yields 0.
    pub fn point_count(&self) -> u32 {
        match self.runtime.call(self.handle, "get_point_count", Args::Empty) {
            Ok(Value::Int(count)) => match u32::try_from(count) {
                Ok(count) => count,
                Err(_) => {
                    self.runtime.set_last_error(BridgeError::OutOfRange {
                        method: "get_point_count".to_owned(),
                        value: count,
                    });
                    0
                }
            },
            Ok(other) => {
                self.runtime.set_last_error(BridgeError::mismatch(
                    "get_point_count",
                    "an integer",
                    other.kind(),
                ));
                0
            }
            Err(_) => 0,
        }
    }

    /// The point at `index`, or the zero vector when the host call fails or
    /// returns something that is not a 2D point.
    pub fn point(&self, index: u32) -> Vector2f {
        match self
            .runtime
            .call(self.handle, "get_point", Args::Index(u64::from(index)))
        {
            Ok(value) => match to_vector2f(&value) {
                Some(point) => point,
                None => {
                    self.runtime.set_last_error(BridgeError::mismatch(
                        "get_point",
                        "a 2D point",
                        value.kind(),
                    ));
                    Vector2f::default()
                }
            },
            Err(_) => Vector2f::default(),
        }
    }

    /// Recompute the derived geometry from the current host point data.
    ///
    /// Public re-exposure of the native base class's protected update, so
    /// the host side can trigger it after changing points. Fewer than three
    /// points produce empty geometry.
    pub fn update(&mut self) {
        let count = self.point_count() as usize;
        if count < 3 {
            self.vertices.clear();
            self.bounds = Rect::default();
            return;
        }

        let points: Vec<Vector2f> = (0..count).map(|i| self.point(i as u32)).collect();
        self.bounds = bounds_of(&points);

        // Triangle fan: bounds center, then the ring, closed on the first point.
        self.vertices.clear();
        self.vertices.reserve(count + 2);
        self.vertices.push(self.bounds.center());
        self.vertices.extend_from_slice(&points);
        self.vertices.push(points[0]);
    }

    /// The cached fan vertices from the last [`update`](ShapeBridge::update).
    pub fn vertices(&self) -> &[Vector2f] {
        &self.vertices
    }

    /// Bounding rectangle of the point ring from the last update.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl Drawable for ShapeBridge {
    fn draw(&self, target: &mut RenderTarget, states: &RenderStates) {
        if !self.vertices.is_empty() {
            target.draw_vertices(&self.vertices, states);
        }
    }
}

fn bounds_of(points: &[Vector2f]) -> Rect {
    let mut min = points[0];
    let mut max = points[0];
    for point in &points[1..] {
        min.x = min.x.min(point.x);
        min.y = min.y.min(point.y);
        max.x = max.x.max(point.x);
        max.y = max.y.max(point.y);
    }
    Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
}
