use crate::game::{Board, Position, Tile};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Trait that all bots must implement
pub trait Bot: Send {
    /// Get the name of the bot
    fn name(&self) -> &str;

    /// Pick the next move for `tile` on `board`.
    ///
    /// Returns `None` only when `tile` has no legal moves, which means the
    /// turn is skipped; it is never an error.
    fn choose_move(&mut self, board: &Board, tile: Tile) -> Option<Position>;
}

/// A bot that plays a uniformly random legal move
pub struct RandomBot {
    name: String,
    rng: StdRng,
}

impl RandomBot {
    pub fn new(name: String) -> Self {
        RandomBot {
            name,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for reproducible runs.
    pub fn with_seed(name: String, seed: u64) -> Self {
        RandomBot {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Bot for RandomBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, board: &Board, tile: Tile) -> Option<Position> {
        let moves = board.legal_moves(tile);
        if moves.is_empty() {
            None
        } else {
            Some(moves[self.rng.random_range(0..moves.len())])
        }
    }
}

/// A greedy one-ply bot with a corner override.
///
/// Candidates are shuffled first so repeated simulations do not inherit the
/// positional bias of the scan order. A corner candidate is taken
/// unconditionally; otherwise each candidate is tried on a board copy and
/// the one with the highest resulting own tile count wins, first seen
/// keeping ties. No lookahead into the opponent's reply.
pub struct GreedyCornerBot {
    name: String,
    rng: StdRng,
}

impl GreedyCornerBot {
    pub fn new(name: String) -> Self {
        GreedyCornerBot {
            name,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for reproducible runs.
    pub fn with_seed(name: String, seed: u64) -> Self {
        GreedyCornerBot {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Bot for GreedyCornerBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, board: &Board, tile: Tile) -> Option<Position> {
        let mut moves = board.legal_moves(tile);
        if moves.is_empty() {
            return None;
        }

        moves.shuffle(&mut self.rng);

        // Corners cannot be recaptured, so they beat any scoring move.
        if let Some(corner) = moves.iter().find(|pos| pos.is_corner()) {
            return Some(*corner);
        }

        let mut best_move = moves[0];
        let mut best_score = -1i32;

        for &pos in &moves {
            let mut trial = board.clone();
            if trial.apply_move(tile, pos).is_ok() {
                let score = trial.score().count(tile) as i32;
                if score > best_score {
                    best_score = score;
                    best_move = pos;
                }
            }
        }

        Some(best_move)
    }
}
