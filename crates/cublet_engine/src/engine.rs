use cublet_notation::{Move, parse_move};
use cublet_prefs::AnimationPreferences;
use web_time::Duration;

use crate::animations::{AnimationScheduler, FrameOutcome, Stage, TwistAnimation};
use crate::queue::{MoveQueue, QueuedMove};
use crate::scramble::ScrambleParams;
use crate::{CubeState, Cublet, RenderSink};

/// Cube simulation, which owns the cube state, the queue of moves waiting to
/// be animated, the animation in progress, and the move history.
///
/// Nothing happens between calls to [`CubeEngine::frame()`]. Moves are
/// animated one at a time in the order they were requested.
#[derive(Debug)]
pub struct CubeEngine<S = ()> {
    state: CubeState,
    queue: MoveQueue,
    scheduler: AnimationScheduler<TwistAnimation>,
    /// Duration of each move.
    twist_duration: Duration,
    /// Moves executed since the last reset, not including undos.
    history: Vec<Move>,
    sink: S,
}

impl Default for CubeEngine {
    fn default() -> Self {
        Self::new(())
    }
}

impl<S: RenderSink> CubeEngine<S> {
    /// Constructs a simulation of a solved cube with default animation
    /// preferences.
    pub fn new(sink: S) -> Self {
        Self::with_prefs(sink, &AnimationPreferences::default())
    }
    /// Constructs a simulation of a solved cube.
    pub fn with_prefs(sink: S, prefs: &AnimationPreferences) -> Self {
        Self {
            state: CubeState::new(),
            queue: MoveQueue::new(),
            scheduler: AnimationScheduler::new(prefs.twist_interpolation),
            twist_duration: prefs.twist_duration(),
            history: vec![],
            sink,
        }
    }

    /// Updates the animation preferences. Takes effect at the next frame for
    /// easing and at the next move for duration.
    pub fn set_animation_prefs(&mut self, prefs: &AnimationPreferences) {
        self.scheduler.set_interpolation(prefs.twist_interpolation);
        self.twist_duration = prefs.twist_duration();
    }

    /// Returns the latest cube state, including partial rotation from the
    /// move in progress.
    pub fn state(&self) -> &CubeState {
        &self.state
    }
    /// Returns all cublets.
    pub fn cublets(&self) -> &[Cublet] {
        self.state.cublets()
    }
    /// Returns the moves executed since the last reset. Undone moves are
    /// removed from the end.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
    /// Returns the move being animated, if any.
    pub fn current_move(&self) -> Option<Move> {
        self.scheduler.current().map(TwistAnimation::mv)
    }
    /// Returns the moves waiting behind the current one.
    pub fn pending_moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.queue.pending().map(QueuedMove::mv)
    }

    /// Returns the render sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }
    /// Returns the render sink mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
    /// Consumes the simulation and returns the render sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Returns whether a move is animating or waiting to be animated.
    pub fn is_running(&self) -> bool {
        self.queue.is_running() || self.scheduler.is_animating()
    }

    /// Parses notation tokens and queues them. Malformed tokens are skipped.
    ///
    /// If no moves are running, the first one starts immediately. Otherwise
    /// the new moves run after the ones already queued.
    pub fn enqueue<I>(&mut self, tokens: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let moves = tokens.into_iter().filter_map(|token| {
            let token = token.as_ref();
            let mv = parse_move(token);
            if mv.is_none() {
                log::debug!("skipping malformed move {token:?}");
            }
            mv
        });
        self.enqueue_moves(moves);
    }
    /// Queues moves. If no moves are running, the first one starts
    /// immediately.
    pub fn enqueue_moves(&mut self, moves: impl IntoIterator<Item = Move>) {
        self.queue.extend(moves);
        self.run_if_idle();
    }
    /// Queues a single move from notation, such as a key press. Malformed
    /// tokens are ignored.
    pub fn operate(&mut self, token: &str) {
        if self.queue.append(token) {
            self.run_if_idle();
        }
    }

    /// Queues the inverse of the last move in the history and removes it from
    /// the history.
    ///
    /// Returns `false` if moves are running or there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.is_running() {
            log::debug!("ignoring undo while moves are running");
            return false;
        }
        let Some(mv) = self.history.pop() else {
            return false;
        };
        self.queue.push(QueuedMove::Undo(mv.inv()));
        self.run_if_idle();
        true
    }

    /// Returns the cube to the solved state and clears the history.
    ///
    /// Returns `false` if moves are running.
    pub fn reset(&mut self) -> bool {
        if self.is_running() {
            log::debug!("ignoring reset while moves are running");
            return false;
        }
        self.queue.clear();
        self.history.clear();
        self.state.reset();
        self.sink.on_state_changed(self.state.cublets());
        true
    }

    /// Generates a scramble and queues it. Returns the scramble, or `None` if
    /// moves are running.
    pub fn scramble(&mut self, params: &ScrambleParams) -> Option<Vec<Move>> {
        if self.is_running() {
            log::debug!("ignoring scramble while moves are running");
            return None;
        }
        let moves = params.generate();
        self.enqueue_moves(moves.iter().copied());
        Some(moves)
    }

    /// Advances the animation to `timestamp`, which is measured from any fixed
    /// point in time. Call this once per frame.
    ///
    /// Returns whether the cube changed.
    pub fn frame(&mut self, timestamp: Duration) -> bool {
        let mut stage = Stage {
            state: &mut self.state,
            sink: &mut self.sink,
        };
        match self.scheduler.frame(timestamp, &mut stage) {
            FrameOutcome::Idle => false,
            FrameOutcome::Ticked => true,
            FrameOutcome::Completed => {
                self.run_next();
                true
            }
        }
    }

    fn run_if_idle(&mut self) {
        if !self.scheduler.is_animating() {
            self.run_next();
        }
    }

    /// Starts the next move in the queue, or marks the queue as idle if it is
    /// empty.
    fn run_next(&mut self) {
        let Some(queued) = self.queue.pop_front() else {
            self.queue.set_running(false);
            return;
        };
        self.queue.set_running(true);

        let mv = queued.mv();
        if let QueuedMove::Do(mv) = queued {
            self.history.push(mv);
        }
        log::trace!(
            "starting move {mv} ({} quarter turns about {})",
            mv.axis_quarter_turns(),
            mv.face().axis(),
        );
        let animation = TwistAnimation::new(&self.state, mv);
        if !self.scheduler.start(self.twist_duration, animation) {
            // Unreachable as long as this is only called while idle.
            log::warn!("move {mv} dropped because another move is animating");
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::GridPos;

    #[test]
    fn test_enqueue_starts_immediately() {
        let mut engine = CubeEngine::default();
        assert!(!engine.is_running());
        engine.enqueue(["R", "U"]);
        assert!(engine.is_running());
        assert_eq!(engine.current_move().map(|m| m.to_string()), Some("R".into()));
        assert_eq!(engine.pending_moves().count(), 1);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_sink_notified() {
        let mut calls = 0;
        let mut engine = CubeEngine::new(|_: &[Cublet]| calls += 1);
        engine.operate("F");
        let ms = Duration::from_millis;
        engine.frame(ms(0));
        engine.frame(ms(250));
        engine.frame(ms(500));
        assert!(!engine.is_running());
        assert!(!engine.frame(ms(600)));
        drop(engine);
        // Three ticks plus completion.
        assert_eq!(calls, 4);
    }

    #[derive(Debug, Default)]
    struct Recorder {
        frames: Vec<Vec<GridPos>>,
    }
    impl RenderSink for Recorder {
        fn on_state_changed(&mut self, cublets: &[Cublet]) {
            self.frames.push(cublets.iter().map(Cublet::grid).collect());
        }
    }

    #[test]
    fn test_sink_accessors() {
        let mut engine = CubeEngine::new(Recorder::default());
        engine.operate("U");
        engine.frame(Duration::ZERO);
        assert_eq!(engine.sink().frames.len(), 1);
        engine.sink_mut().frames.clear();

        engine.frame(Duration::from_secs(1));
        assert!(engine.reset());
        let recorder = engine.into_sink();
        // Last tick, completion, then reset.
        assert_eq!(recorder.frames.len(), 3);
        assert_ne!(recorder.frames[1], recorder.frames[2]);
        assert_eq!(recorder.frames[0], recorder.frames[2]);
    }

    #[test]
    fn test_set_animation_prefs() {
        let mut engine = CubeEngine::default();
        engine.set_animation_prefs(&AnimationPreferences {
            twist_duration: 0.1,
            ..Default::default()
        });
        engine.operate("R");
        engine.frame(Duration::ZERO);
        assert!(engine.frame(Duration::from_millis(100)));
        assert!(!engine.is_running());
    }
}
