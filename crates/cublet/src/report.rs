use std::fmt;

use cublet_engine::{CubeState, Cublet, Orientation};
use itertools::Itertools;
use serde::Serialize;

/// Result of playing a sequence of moves.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub(crate) struct PlayReport {
    /// Number of frames rendered.
    pub frames: usize,
    /// Moves executed, in notation.
    pub moves: Vec<String>,
    /// Whether the cube ended up solved.
    pub solved: bool,
    pub cublets: Vec<CubletReport>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub(crate) struct CubletReport {
    pub id: usize,
    pub home: [i8; 3],
    pub position: [i8; 3],
    pub orientation: [[i8; 3]; 3],
}

impl From<&Cublet> for CubletReport {
    fn from(c: &Cublet) -> Self {
        Self {
            id: c.id().index(),
            home: c.home().0,
            position: c.grid().0,
            orientation: c.orientation().rows(),
        }
    }
}

impl PlayReport {
    pub fn new(frames: usize, moves: &[cublet_notation::Move], state: &CubeState) -> Self {
        Self {
            frames,
            moves: moves.iter().map(|m| m.to_string()).collect(),
            solved: *state == CubeState::new(),
            cublets: state.cublets().iter().map(CubletReport::from).collect(),
        }
    }
}

impl fmt::Display for PlayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "moves:  {}", self.moves.iter().join(" "))?;
        writeln!(f, "frames: {}", self.frames)?;
        writeln!(f, "solved: {}", self.solved)?;
        writeln!(f)?;
        writeln!(f, "{:>3}  {:<12}  {:<12}  orientation", "id", "home", "position")?;
        for c in &self.cublets {
            let marker = if c.position == c.home && c.orientation == Orientation::IDENTITY.rows() {
                ""
            } else {
                "*"
            };
            writeln!(
                f,
                "{:>3}  {:<12}  {:<12}  {}{marker}",
                c.id,
                fmt_triple(c.home),
                fmt_triple(c.position),
                c.orientation.iter().map(|&row| fmt_triple(row)).join(" "),
            )?;
        }
        Ok(())
    }
}

fn fmt_triple([x, y, z]: [i8; 3]) -> String {
    format!("({x:>2},{y:>2},{z:>2})")
}

#[cfg(test)]
mod tests {
    use cublet_engine::CUBLET_COUNT;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_solved_report() {
        let report = PlayReport::new(0, &[], &CubeState::new());
        assert!(report.solved);
        assert_eq!(report.cublets.len(), CUBLET_COUNT);
        assert_eq!(
            report.cublets[0],
            CubletReport {
                id: 0,
                home: [-1, -1, -1],
                position: [-1, -1, -1],
                orientation: [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
            },
        );

        let text = report.to_string();
        assert!(text.contains("solved: true"));
        assert!(!text.contains('*'));
    }

    #[test]
    fn test_json_shape() {
        let report = PlayReport::new(3, &[], &CubeState::new());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["frames"], 3);
        assert_eq!(json["cublets"][25]["position"], serde_json::json!([1, 1, 1]));
    }
}
