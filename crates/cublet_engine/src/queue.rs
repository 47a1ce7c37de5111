//! FIFO of moves waiting to be animated.

use std::collections::VecDeque;

use cublet_notation::{Move, parse_move};

/// Move waiting in a [`MoveQueue`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QueuedMove {
    /// Move requested by the user or a program. It is recorded in the
    /// history once it starts.
    Do(Move),
    /// Inverse of a previous move. It is not recorded in the history.
    Undo(Move),
}

impl QueuedMove {
    /// Returns the move to execute.
    pub fn mv(self) -> Move {
        match self {
            QueuedMove::Do(mv) | QueuedMove::Undo(mv) => mv,
        }
    }
}

/// FIFO of moves plus a flag recording whether a program is executing.
///
/// The queue does not animate anything by itself. Whoever owns it pops the
/// next move each time the previous one completes and clears the running
/// flag once the queue runs dry.
#[derive(Debug, Default, Clone)]
pub struct MoveQueue {
    pending: VecDeque<QueuedMove>,
    running: bool,
}

impl MoveQueue {
    /// Constructs an empty, idle queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a program is executing. This stays `true` between
    /// consecutive moves.
    pub fn is_running(&self) -> bool {
        self.running
    }
    pub(crate) fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Returns the number of moves waiting.
    pub fn len(&self) -> usize {
        self.pending.len()
    }
    /// Returns whether no moves are waiting.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
    /// Iterates over the moves waiting, front first.
    pub fn pending(&self) -> impl Iterator<Item = QueuedMove> + '_ {
        self.pending.iter().copied()
    }

    /// Appends a move to the back of the queue.
    pub fn push(&mut self, queued: QueuedMove) {
        self.pending.push_back(queued);
    }
    /// Appends moves to the back of the queue.
    pub fn extend(&mut self, moves: impl IntoIterator<Item = Move>) {
        self.pending.extend(moves.into_iter().map(QueuedMove::Do));
    }
    /// Parses one notation token and appends it. Returns `false` and leaves
    /// the queue unchanged if the token is malformed.
    pub fn append(&mut self, token: &str) -> bool {
        match parse_move(token) {
            Some(mv) => {
                self.push(QueuedMove::Do(mv));
                true
            }
            None => {
                log::debug!("ignoring malformed move {token:?}");
                false
            }
        }
    }
    /// Removes and returns the move at the front of the queue.
    pub fn pop_front(&mut self) -> Option<QueuedMove> {
        self.pending.pop_front()
    }

    /// Discards all waiting moves. Refused while running.
    pub fn clear(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.pending.clear();
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_fifo() {
        let mut q = MoveQueue::new();
        assert!(q.append("R"));
        assert!(!q.append("X"));
        assert!(!q.append("R2'"));
        q.extend(cublet_notation::parse_moves("U F'").unwrap());
        q.push(QueuedMove::Undo(parse_move("L").unwrap()));

        let popped: Vec<String> = std::iter::from_fn(|| q.pop_front())
            .map(|m| m.mv().to_string())
            .collect();
        assert_eq!(popped, ["R", "U", "F'", "L"]);
        assert!(q.is_empty());
    }

    #[test]
    fn test_clear_refused_while_running() {
        let mut q = MoveQueue::new();
        q.append("R");
        q.set_running(true);
        assert!(!q.clear());
        assert_eq!(q.len(), 1);
        q.set_running(false);
        assert!(q.clear());
        assert!(q.is_empty());
    }
}
