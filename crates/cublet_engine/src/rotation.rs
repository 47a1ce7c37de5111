//! Incremental and exact rotation of cublets.
//!
//! While a move animates, [`apply()`] is called every frame with a small
//! angle. Once the move is complete, [`snap()`] replaces the accumulated
//! result with the exact one so that floating-point error never builds up
//! across moves.

use std::f32::consts::FRAC_PI_2;

use cgmath::{Quaternion, Rad, Rotation3, Vector3};
use cublet_notation::{Axis, Move};

use crate::{Cublet, Orientation};

/// Returns the unit vector along `axis`.
pub fn axis_vector(axis: Axis) -> Vector3<f32> {
    match axis {
        Axis::X => Vector3::unit_x(),
        Axis::Y => Vector3::unit_y(),
        Axis::Z => Vector3::unit_z(),
    }
}

/// Returns the total signed angle of a move about the positive direction of
/// its face's axis.
pub fn move_angle(mv: Move) -> Rad<f32> {
    Rad(FRAC_PI_2 * f32::from(mv.axis_quarter_turns()))
}

/// Rotates the pose of a cublet by `angle` about `axis`, in world space.
///
/// The exact grid position and orientation are not modified.
pub fn apply(cublet: &mut Cublet, axis: Axis, angle: Rad<f32>) {
    let pose = cublet.pose_mut();

    // Premultiply so that the rotation happens in world space rather than
    // in the cublet's local space.
    pose.rotation = Quaternion::from_axis_angle(axis_vector(axis), angle) * pose.rotation;

    let (a, b) = axis.plane();
    let (a, b) = (a.index(), b.index());
    let (sin, cos) = angle.0.sin_cos();
    let (pa, pb) = (pose.position[a], pose.position[b]);
    pose.position[a] = cos * pa - sin * pb;
    pose.position[b] = cos * pb + sin * pa;
}

/// Sets a cublet to the exact result of rotating its grid position and
/// orientation by `quarter_turns` positive quarter turns about `axis`,
/// discarding any accumulated pose.
pub fn snap(cublet: &mut Cublet, axis: Axis, quarter_turns: i8) {
    let grid = cublet.grid().rotated(axis, quarter_turns);
    let orientation = Orientation::quarter_turns(axis, quarter_turns) * cublet.orientation();
    cublet.set_exact(grid, orientation);
}
