use std::fmt;

use strum::VariantArray;

/// Coordinate axis in 3D space.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, VariantArray)]
pub enum Axis {
    /// Points from the left face toward the right face.
    X,
    /// Points from the down face toward the up face.
    Y,
    /// Points from the back face toward the front face.
    Z,
}

impl Axis {
    /// Returns the index of the axis in a 3-component vector.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Returns the two axes spanning the plane orthogonal to this one.
    ///
    /// They are ordered so that a positive (right-handed) rotation about
    /// `self` turns the first axis toward the second.
    pub fn plane(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::Z, Axis::X),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
            Axis::Z => write!(f, "Z"),
        }
    }
}

/// Side of the cube along an axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Positive side.
    Pos,
    /// Negative side.
    Neg,
}

impl Sign {
    /// Returns `1` or `-1`.
    pub fn to_i8(self) -> i8 {
        match self {
            Sign::Pos => 1,
            Sign::Neg => -1,
        }
    }
}

/// One of the six outer layers of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, VariantArray)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Face {
    /// Left
    L,
    /// Right
    R,
    /// Up
    U,
    /// Down
    D,
    /// Front
    F,
    /// Back
    B,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Face {
    /// Returns the face named by a character of notation.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'L' => Some(Face::L),
            'R' => Some(Face::R),
            'U' => Some(Face::U),
            'D' => Some(Face::D),
            'F' => Some(Face::F),
            'B' => Some(Face::B),
            _ => None,
        }
    }

    /// Returns the character used to write the face in notation.
    pub fn to_char(self) -> char {
        match self {
            Face::L => 'L',
            Face::R => 'R',
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
        }
    }

    /// Returns the axis orthogonal to the face.
    pub fn axis(self) -> Axis {
        match self {
            Face::L | Face::R => Axis::X,
            Face::U | Face::D => Axis::Y,
            Face::F | Face::B => Axis::Z,
        }
    }

    /// Returns which side of the cube the face is on along its axis.
    pub fn sign(self) -> Sign {
        match self {
            Face::R | Face::U | Face::F => Sign::Pos,
            Face::L | Face::D | Face::B => Sign::Neg,
        }
    }

    /// Returns the face on the other side of the cube.
    pub fn opposite(self) -> Self {
        match self {
            Face::L => Face::R,
            Face::R => Face::L,
            Face::U => Face::D,
            Face::D => Face::U,
            Face::F => Face::B,
            Face::B => Face::F,
        }
    }
}
