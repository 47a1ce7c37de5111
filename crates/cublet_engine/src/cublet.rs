//! Cublet identity, exact grid state, and render pose.

use std::fmt;
use std::ops::Mul;

use cgmath::{Matrix3, Quaternion, Vector3};
use cublet_notation::Axis;

/// Stable identity of a cublet, which is also its index in
/// [`crate::CubeState::cublets()`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CubletId(pub(crate) u8);

impl fmt::Display for CubletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl CubletId {
    /// Returns the index of the cublet in [`crate::CubeState::cublets()`].
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Exact position of a cublet on the 3x3x3 grid. Each coordinate is `-1`,
/// `0`, or `1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPos(pub [i8; 3]);

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "({x:2},{y:2},{z:2})")
    }
}

impl GridPos {
    /// Center of the cube, which has no cublet.
    pub const ORIGIN: Self = Self([0, 0, 0]);

    /// Returns all 26 grid positions that hold a cublet, in lexicographic
    /// order.
    pub fn all() -> impl Iterator<Item = Self> {
        (-1..=1)
            .flat_map(|x| (-1..=1).flat_map(move |y| (-1..=1).map(move |z| Self([x, y, z]))))
            .filter(|&pos| pos != Self::ORIGIN)
    }

    /// Returns the coordinate along `axis`.
    pub fn coord(self, axis: Axis) -> i8 {
        self.0[axis.index()]
    }

    /// Returns the position as a floating-point vector.
    pub fn to_vector(self) -> Vector3<f32> {
        let [x, y, z] = self.0;
        Vector3::new(x as f32, y as f32, z as f32)
    }

    /// Returns the position after `quarter_turns` positive quarter turns about
    /// `axis`.
    #[must_use]
    pub fn rotated(self, axis: Axis, quarter_turns: i8) -> Self {
        let (cos, sin) = quarter_turn_cos_sin(quarter_turns);
        let (a, b) = axis.plane();
        let (pa, pb) = (self.coord(a), self.coord(b));
        let mut ret = self;
        ret.0[a.index()] = cos * pa - sin * pb;
        ret.0[b.index()] = cos * pb + sin * pa;
        ret
    }
}

/// Returns the cosine and sine of `quarter_turns` × 90°.
fn quarter_turn_cos_sin(quarter_turns: i8) -> (i8, i8) {
    match quarter_turns.rem_euclid(4) {
        0 => (1, 0),
        1 => (0, 1),
        2 => (-1, 0),
        _ => (0, -1),
    }
}

/// Exact orientation of a cublet: a rotation matrix whose entries are all
/// `-1`, `0`, or `1`.
///
/// Column `i` is the image of basis vector `i`, so a cublet's local direction
/// `v` points in world direction `orientation * v`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Orientation([[i8; 3]; 3]);

impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Orientation {
    type Output = Orientation;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut ret = [[0; 3]; 3];
        for (i, row) in ret.iter_mut().enumerate() {
            for (j, entry) in row.iter_mut().enumerate() {
                *entry = (0..3).map(|k| self.0[i][k] * rhs.0[k][j]).sum();
            }
        }
        Orientation(ret)
    }
}

impl Mul<GridPos> for Orientation {
    type Output = GridPos;

    fn mul(self, rhs: GridPos) -> Self::Output {
        GridPos(std::array::from_fn(|i| {
            (0..3).map(|k| self.0[i][k] * rhs.0[k]).sum()
        }))
    }
}

impl Orientation {
    /// Solved orientation.
    pub const IDENTITY: Self = Self([[1, 0, 0], [0, 1, 0], [0, 0, 1]]);

    /// Returns the rotation of `quarter_turns` positive quarter turns about
    /// `axis`.
    pub fn quarter_turns(axis: Axis, quarter_turns: i8) -> Self {
        let images: [GridPos; 3] = std::array::from_fn(|j| {
            let mut basis = GridPos::ORIGIN;
            basis.0[j] = 1;
            basis.rotated(axis, quarter_turns)
        });
        Self(std::array::from_fn(|i| std::array::from_fn(|j| images[j].0[i])))
    }

    /// Returns the rows of the matrix.
    pub fn rows(self) -> [[i8; 3]; 3] {
        self.0
    }

    /// Returns the rotation as a floating-point matrix.
    pub fn to_matrix(self) -> Matrix3<f32> {
        let m = self.0.map(|row| row.map(f32::from));
        Matrix3::from_cols(
            Vector3::new(m[0][0], m[1][0], m[2][0]),
            Vector3::new(m[0][1], m[1][1], m[2][1]),
            Vector3::new(m[0][2], m[1][2], m[2][2]),
        )
    }

    /// Returns the rotation as a unit quaternion.
    pub fn to_quaternion(self) -> Quaternion<f32> {
        Quaternion::from(self.to_matrix())
    }
}

/// Floating-point transform used for drawing a cublet.
///
/// While a move is animating, the pose of each affected cublet is rotated a
/// little every frame. Otherwise it exactly matches the cublet's grid position
/// and orientation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pose {
    /// Center of the cublet.
    pub position: Vector3<f32>,
    /// Rotation of the cublet relative to its solved orientation.
    pub rotation: Quaternion<f32>,
}

impl Pose {
    /// Returns the pose exactly matching a grid position and orientation.
    pub fn exact(grid: GridPos, orientation: Orientation) -> Self {
        Self {
            position: grid.to_vector(),
            rotation: orientation.to_quaternion(),
        }
    }
}

/// One of the 26 movable sub-cubes.
#[derive(Debug, Clone, PartialEq)]
pub struct Cublet {
    id: CubletId,
    home: GridPos,
    grid: GridPos,
    orientation: Orientation,
    pose: Pose,
}

impl Cublet {
    pub(crate) fn new(id: CubletId, home: GridPos) -> Self {
        Self {
            id,
            home,
            grid: home,
            orientation: Orientation::IDENTITY,
            pose: Pose::exact(home, Orientation::IDENTITY),
        }
    }

    /// Returns the cublet's stable identity.
    pub fn id(&self) -> CubletId {
        self.id
    }
    /// Returns the grid position of the cublet when the cube is solved.
    pub fn home(&self) -> GridPos {
        self.home
    }
    /// Returns the exact grid position of the cublet as of the last completed
    /// move.
    pub fn grid(&self) -> GridPos {
        self.grid
    }
    /// Returns the exact orientation of the cublet as of the last completed
    /// move.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
    /// Returns the pose to draw the cublet with.
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub(crate) fn pose_mut(&mut self) -> &mut Pose {
        &mut self.pose
    }
    /// Sets the exact state and overwrites the pose to match it.
    pub(crate) fn set_exact(&mut self, grid: GridPos, orientation: Orientation) {
        self.grid = grid;
        self.orientation = orientation;
        self.pose = Pose::exact(grid, orientation);
    }
}
