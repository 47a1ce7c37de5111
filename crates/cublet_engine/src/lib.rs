//! Move-execution engine for an animated 3x3x3 cube.
//!
//! [`CubeEngine`] owns the state of the 26 cublets and animates moves one at
//! a time. Call [`CubeEngine::frame()`] once per rendered frame; rotation and
//! queue advancement happen only there.
//!
//! ```
//! use cublet_engine::CubeEngine;
//! use web_time::Duration;
//!
//! let mut engine = CubeEngine::default();
//! engine.enqueue(["R", "U", "R'", "U'"]);
//! let mut now = Duration::ZERO;
//! while engine.is_running() {
//!     engine.frame(now);
//!     now += Duration::from_millis(16);
//! }
//! assert_eq!(engine.history().len(), 4);
//! ```

pub mod animations;
mod cublet;
mod engine;
pub mod queue;
pub mod rotation;
pub mod scramble;
mod select;
mod sink;
mod state;

pub use cublet::{Cublet, CubletId, GridPos, Orientation, Pose};
pub use engine::CubeEngine;
pub use select::{FaceGrip, LAYER_THRESHOLD, is_in_layer, select};
pub use sink::RenderSink;
pub use state::{CUBLET_COUNT, CubeState};

#[cfg(test)]
mod tests;
