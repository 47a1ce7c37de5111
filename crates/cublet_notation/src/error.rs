/// Error produced when constructing an invalid [`crate::Move`].
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// A move turns its face by one or two quarter turns; nothing else is
    /// expressible in notation.
    #[error("a move must be one or two quarter turns, not {0}")]
    BadQuarterTurns(u8),
}
