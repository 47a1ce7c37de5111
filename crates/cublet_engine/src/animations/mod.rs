//! Frame-driven animation.

mod scheduler;
mod twist;

pub use scheduler::{AnimationScheduler, FrameOutcome};
pub use twist::{Stage, TwistAnimation};

/// Animation that can be driven by an [`AnimationScheduler`].
///
/// `T` is whatever the animation modifies each frame.
pub trait Animation<T: ?Sized> {
    /// Advances the animation by `delta`, a fraction of its total length.
    ///
    /// Over the whole animation, the deltas passed to this method sum to 1.
    fn on_tick(&mut self, target: &mut T, delta: f32);

    /// Finishes the animation. This is called exactly once, immediately after
    /// the last call to [`Animation::on_tick()`].
    fn on_complete(self, target: &mut T);
}
