//! Selection of the cublets in one face layer.

use cgmath::Vector3;
use cublet_notation::{Face, Sign};
use smallvec::SmallVec;

use crate::{CubeState, Cublet, CubletId};

/// Distance from the center plane beyond which a cublet belongs to an outer
/// layer.
///
/// Layers are spaced 1 apart, so halfway between them leaves plenty of room
/// for floating-point error in a cublet's pose.
pub const LAYER_THRESHOLD: f32 = 0.5;

/// Snapshot of the cublets gripped by a move.
pub type FaceGrip = SmallVec<[CubletId; 9]>;

/// Returns the cublets currently in the layer of `face`.
///
/// The result is a snapshot; it does not change if the cube changes later.
pub fn select(state: &CubeState, face: Face) -> FaceGrip {
    state
        .cublets()
        .iter()
        .filter(|c| is_in_layer(c.pose().position, face))
        .map(Cublet::id)
        .collect()
}

/// Returns whether a point is in the layer of `face`.
pub fn is_in_layer(position: Vector3<f32>, face: Face) -> bool {
    let coord = position[face.axis().index()];
    match face.sign() {
        Sign::Pos => coord > LAYER_THRESHOLD,
        Sign::Neg => coord < -LAYER_THRESHOLD,
    }
}
