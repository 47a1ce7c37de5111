//! Random move sequences.

use cublet_notation::{Face, Move};
use rand::{Rng, SeedableRng};
use strum::VariantArray;

/// Number of rejected candidates after which scramble generation gives up.
const MAX_ATTEMPTS_PER_MOVE: usize = 1000;

/// Parameters to generate a scramble.
///
/// The same parameters with the same seed always generate the same scramble.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScrambleParams {
    /// Number of moves.
    pub len: usize,
    /// Random seed, or `None` to use OS entropy.
    pub seed: Option<u64>,
}

impl ScrambleParams {
    /// Constructs parameters for a scramble of `len` moves with an unspecified
    /// seed.
    pub fn new(len: usize) -> Self {
        Self { len, seed: None }
    }

    /// Returns a copy of the parameters with a seed filled in, so that the
    /// scramble can be reproduced later.
    pub fn with_resolved_seed(self) -> Self {
        Self {
            seed: Some(self.seed.unwrap_or_else(|| rand::rng().random())),
            ..self
        }
    }

    /// Returns the random number generator for these parameters.
    pub fn rng(&self) -> rand_chacha::ChaCha12Rng {
        match self.seed {
            Some(seed) => rand_chacha::ChaCha12Rng::seed_from_u64(seed),
            None => rand_chacha::ChaCha12Rng::from_rng(&mut rand::rng()),
        }
    }

    /// Generates a scramble using [`NoRedundantMoves`].
    pub fn generate(&self) -> Vec<Move> {
        generate_scramble(self.len, &mut self.rng(), &NoRedundantMoves)
    }
}

/// Rule for which moves may follow which in a scramble.
pub trait ScramblePolicy {
    /// Returns whether `next` may follow the moves already generated.
    fn allows(&self, previous: &[Move], next: Move) -> bool;
}

/// Policy that accepts every move.
#[derive(Debug, Default, Copy, Clone)]
pub struct AnyMoves;

impl ScramblePolicy for AnyMoves {
    fn allows(&self, _previous: &[Move], _next: Move) -> bool {
        true
    }
}

/// Policy that rejects moves that could be merged with or commuted past the
/// previous ones.
///
/// A face may not be turned twice in a row, and at most two consecutive moves
/// may share an axis.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoRedundantMoves;

impl ScramblePolicy for NoRedundantMoves {
    fn allows(&self, previous: &[Move], next: Move) -> bool {
        match previous {
            [.., last] if last.face() == next.face() => false,
            [.., a, b] => {
                let axis = next.face().axis();
                a.face().axis() != axis || b.face().axis() != axis
            }
            _ => true,
        }
    }
}

/// Generates `len` random moves allowed by `policy`.
///
/// Each candidate has a uniformly random face, direction, and turn count.
/// Candidates rejected by the policy are redrawn. If the policy rejects too
/// many candidates in a row, the scramble is cut short.
pub fn generate_scramble(len: usize, rng: &mut impl Rng, policy: &impl ScramblePolicy) -> Vec<Move> {
    let mut moves = Vec::with_capacity(len);
    while moves.len() < len {
        let next = (0..MAX_ATTEMPTS_PER_MOVE)
            .map(|_| random_move(rng))
            .find(|&mv| policy.allows(&moves, mv));
        match next {
            Some(mv) => moves.push(mv),
            None => {
                log::warn!(
                    "scramble policy rejected {MAX_ATTEMPTS_PER_MOVE} moves in a row; \
                     stopping after {} of {len} moves",
                    moves.len(),
                );
                break;
            }
        }
    }
    moves
}

fn random_move(rng: &mut impl Rng) -> Move {
    let face = Face::VARIANTS[rng.random_range(0..Face::VARIANTS.len())];
    let clockwise = rng.random_bool(0.5);
    if rng.random_bool(1.0 / 3.0) {
        Move::half(face, clockwise)
    } else {
        Move::quarter(face, clockwise)
    }
}
