use cublet_prefs::InterpolateFn;
use web_time::Duration;

use super::Animation;

/// What happened during one frame of an [`AnimationScheduler`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Nothing is animating.
    Idle,
    /// The animation advanced and is still running.
    Ticked,
    /// The animation advanced to its end and completed. The scheduler is now
    /// idle.
    Completed,
}

/// Drives one animation at a time across frames.
///
/// The scheduler is either idle or animating. [`AnimationScheduler::start()`]
/// is refused while animating, and there is no way to cancel an animation
/// once it has started.
#[derive(Debug, Clone)]
pub struct AnimationScheduler<A> {
    state: SchedulerState<A>,
    /// Easing applied to the ratio of elapsed time to duration.
    interpolation: InterpolateFn,
}

#[derive(Debug, Clone)]
enum SchedulerState<A> {
    Idle,
    Animating(ActiveAnimation<A>),
}

#[derive(Debug, Clone)]
struct ActiveAnimation<A> {
    animation: A,
    duration: Duration,
    /// Timestamp of the first frame, or `None` if there hasn't been a frame
    /// since the animation started.
    start: Option<Duration>,
    /// Fraction of the duration elapsed as of the last frame, from 0.0 to
    /// 1.0. This never decreases.
    t: f32,
    /// Total of all deltas passed to the animation so far.
    progress: f32,
}

impl<A> Default for AnimationScheduler<A> {
    fn default() -> Self {
        Self::new(InterpolateFn::default())
    }
}

impl<A> AnimationScheduler<A> {
    /// Constructs an idle scheduler.
    pub fn new(interpolation: InterpolateFn) -> Self {
        Self {
            state: SchedulerState::Idle,
            interpolation,
        }
    }

    /// Sets the easing function for subsequent frames.
    pub fn set_interpolation(&mut self, interpolation: InterpolateFn) {
        self.interpolation = interpolation;
    }

    /// Returns whether an animation is in progress.
    pub fn is_animating(&self) -> bool {
        matches!(self.state, SchedulerState::Animating(_))
    }

    /// Returns the animation in progress, if any.
    pub fn current(&self) -> Option<&A> {
        match &self.state {
            SchedulerState::Idle => None,
            SchedulerState::Animating(active) => Some(&active.animation),
        }
    }

    /// Starts an animation lasting `duration`. Its start time is the timestamp
    /// of the next frame.
    ///
    /// Returns `false` and drops `animation` if another animation is already
    /// in progress.
    pub fn start(&mut self, duration: Duration, animation: A) -> bool {
        if self.is_animating() {
            return false;
        }
        self.state = SchedulerState::Animating(ActiveAnimation {
            animation,
            duration,
            start: None,
            t: 0.0,
            progress: 0.0,
        });
        true
    }

    /// Handles one frame at `timestamp`, which is measured from any fixed
    /// point in time.
    ///
    /// Ticks the current animation (if any) and completes it once its
    /// duration has elapsed.
    pub fn frame<T: ?Sized>(&mut self, timestamp: Duration, target: &mut T) -> FrameOutcome
    where
        A: Animation<T>,
    {
        let SchedulerState::Animating(active) = &mut self.state else {
            return FrameOutcome::Idle;
        };

        let start = *active.start.get_or_insert(timestamp);
        let elapsed = timestamp.saturating_sub(start);
        let is_finished = elapsed >= active.duration;

        let new_progress = if is_finished {
            active.t = 1.0;
            1.0
        } else {
            let t = elapsed.as_secs_f32() / active.duration.as_secs_f32();
            active.t = t.clamp(active.t, 1.0);
            self.interpolation
                .interpolate(active.t)
                .clamp(active.progress, 1.0)
        };
        let delta = new_progress - active.progress;
        active.progress = new_progress;
        active.animation.on_tick(target, delta);

        if !is_finished {
            return FrameOutcome::Ticked;
        }
        if let SchedulerState::Animating(active) =
            std::mem::replace(&mut self.state, SchedulerState::Idle)
        {
            active.animation.on_complete(target);
        }
        FrameOutcome::Completed
    }
}
