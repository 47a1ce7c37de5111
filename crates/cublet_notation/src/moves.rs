use std::fmt;

use crate::{Face, MoveError, Sign};

/// Rotation of one face of the cube.
///
/// Once constructed, a move cannot be modified. Use [`Move::inv()`] to get the
/// move that undoes it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    face: Face,
    clockwise: bool,
    quarter_turns: u8,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.face)?;
        if !self.clockwise {
            write!(f, "'")?;
        }
        if self.quarter_turns == 2 {
            write!(f, "2")?;
        }
        Ok(())
    }
}

impl Move {
    /// Constructs a move, returning an error if `quarter_turns` is not `1` or
    /// `2`.
    pub fn new(face: Face, clockwise: bool, quarter_turns: u8) -> Result<Self, MoveError> {
        match quarter_turns {
            1 | 2 => Ok(Self {
                face,
                clockwise,
                quarter_turns,
            }),
            n => Err(MoveError::BadQuarterTurns(n)),
        }
    }
    /// Constructs a quarter turn of a face.
    pub const fn quarter(face: Face, clockwise: bool) -> Self {
        Self {
            face,
            clockwise,
            quarter_turns: 1,
        }
    }
    /// Constructs a half turn of a face.
    pub const fn half(face: Face, clockwise: bool) -> Self {
        Self {
            face,
            clockwise,
            quarter_turns: 2,
        }
    }

    /// Returns the face turned by the move.
    pub fn face(self) -> Face {
        self.face
    }
    /// Returns whether the face turns clockwise, as seen looking directly at
    /// it.
    pub fn is_clockwise(self) -> bool {
        self.clockwise
    }
    /// Returns the number of quarter turns: `1` or `2`.
    pub fn quarter_turns(self) -> u8 {
        self.quarter_turns
    }

    /// Returns the number of positive (right-handed) quarter turns about the
    /// positive direction of [`Face::axis()`].
    ///
    /// Clockwise turns of `R`, `U`, and `F` are negative; clockwise turns of
    /// `L`, `D`, and `B` are positive.
    pub fn axis_quarter_turns(self) -> i8 {
        let n = self.quarter_turns as i8;
        let n = if self.clockwise { -n } else { n };
        match self.face.sign() {
            Sign::Pos => n,
            Sign::Neg => -n,
        }
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn inv(self) -> Self {
        Self {
            clockwise: !self.clockwise,
            ..self
        }
    }
}

/// Returns the sequence that undoes `moves`: each move inverted, in reverse
/// order.
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|m| m.inv()).collect()
}

/// Formats a sequence of moves separated by spaces.
pub fn format_moves(moves: impl IntoIterator<Item = Move>) -> String {
    let mut ret = String::new();
    for (i, m) in moves.into_iter().enumerate() {
        if i > 0 {
            ret.push(' ');
        }
        ret += &m.to_string();
    }
    ret
}
