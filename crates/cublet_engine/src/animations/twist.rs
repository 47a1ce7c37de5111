use cgmath::Rad;
use cublet_notation::{Axis, Move};

use super::Animation;
use crate::select::{self, FaceGrip};
use crate::{CubeState, CubletId, RenderSink, rotation};

/// Animation of a single move.
///
/// The gripped cublets are chosen when the animation is constructed and do
/// not change while it runs.
#[derive(Debug, Clone)]
pub struct TwistAnimation {
    mv: Move,
    grip: FaceGrip,
    axis: Axis,
    quarter_turns: i8,
    angle: Rad<f32>,
}

impl TwistAnimation {
    /// Constructs an animation of `mv`, gripping the cublets currently in its
    /// face layer.
    pub fn new(state: &CubeState, mv: Move) -> Self {
        Self {
            mv,
            grip: select::select(state, mv.face()),
            axis: mv.face().axis(),
            quarter_turns: mv.axis_quarter_turns(),
            angle: rotation::move_angle(mv),
        }
    }

    /// Returns the move being animated.
    pub fn mv(&self) -> Move {
        self.mv
    }
    /// Returns the cublets being turned.
    pub fn grip(&self) -> &[CubletId] {
        &self.grip
    }
}

impl Animation<CubeState> for TwistAnimation {
    fn on_tick(&mut self, state: &mut CubeState, delta: f32) {
        if delta == 0.0 {
            return;
        }
        for &id in &self.grip {
            if let Some(cublet) = state.cublet_mut(id) {
                rotation::apply(cublet, self.axis, self.angle * delta);
            }
        }
    }

    fn on_complete(self, state: &mut CubeState) {
        for &id in &self.grip {
            if let Some(cublet) = state.cublet_mut(id) {
                rotation::snap(cublet, self.axis, self.quarter_turns);
            }
        }
    }
}

/// Cube state paired with the sink that is notified whenever it changes.
#[derive(Debug)]
pub struct Stage<'a, S> {
    /// Cube being animated.
    pub state: &'a mut CubeState,
    /// Sink notified after every tick and after completion.
    pub sink: &'a mut S,
}

impl<S: RenderSink> Animation<Stage<'_, S>> for TwistAnimation {
    fn on_tick(&mut self, stage: &mut Stage<'_, S>, delta: f32) {
        Animation::<CubeState>::on_tick(self, stage.state, delta);
        stage.sink.on_state_changed(stage.state.cublets());
    }

    fn on_complete(self, stage: &mut Stage<'_, S>) {
        Animation::<CubeState>::on_complete(self, stage.state);
        stage.sink.on_state_changed(stage.state.cublets());
    }
}
