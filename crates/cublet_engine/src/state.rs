use crate::{Cublet, CubletId, GridPos};

/// Number of cublets in a 3x3x3 cube (every grid position except the center).
pub const CUBLET_COUNT: usize = 26;

/// State of all 26 cublets, stored in a flat list indexed by [`CubletId`].
#[derive(Debug, Clone, PartialEq)]
pub struct CubeState {
    cublets: Vec<Cublet>,
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeState {
    /// Constructs a solved cube.
    pub fn new() -> Self {
        let cublets = GridPos::all()
            .enumerate()
            .map(|(i, pos)| Cublet::new(CubletId(i as u8), pos))
            .collect();
        Self { cublets }
    }

    /// Rebuilds every cublet at its solved position and orientation.
    ///
    /// This does not check whether a move is in progress. Use
    /// [`crate::CubeEngine::reset()`] for that.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns all cublets, indexed by [`CubletId::index()`].
    pub fn cublets(&self) -> &[Cublet] {
        &self.cublets
    }

    /// Returns a cublet by ID.
    pub fn cublet(&self, id: CubletId) -> Option<&Cublet> {
        self.cublets.get(id.index())
    }
    pub(crate) fn cublet_mut(&mut self, id: CubletId) -> Option<&mut Cublet> {
        self.cublets.get_mut(id.index())
    }

    /// Returns the cublet whose exact grid position is `pos`.
    pub fn cublet_at(&self, pos: GridPos) -> Option<&Cublet> {
        self.cublets.iter().find(|c| c.grid() == pos)
    }
}
