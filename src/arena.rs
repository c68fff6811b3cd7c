use crate::bot::Bot;
use crate::game::{Board, GameResult, Outcome, Tile};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy)]
pub struct SeriesConfig {
    pub num_games: usize,
    /// Print every ply and board state, not just the per-game score lines.
    pub verbose: bool,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        SeriesConfig {
            num_games: 100,
            verbose: false,
        }
    }
}

/// One full game between two bots on a single owned board.
pub struct Match<'a> {
    board: Board,
    black_bot: &'a mut dyn Bot,
    white_bot: &'a mut dyn Bot,
    plies: usize,
    verbose: bool,
}

impl<'a> Match<'a> {
    pub fn new(black_bot: &'a mut dyn Bot, white_bot: &'a mut dyn Bot, verbose: bool) -> Self {
        Match {
            board: Board::standard_start(),
            black_bot,
            white_bot,
            plies: 0,
            verbose,
        }
    }

    pub fn ply_count(&self) -> usize {
        self.plies
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play the game out with `first_to_move` opening.
    ///
    /// After each ply the opponent's mobility is checked and the loop
    /// breaks as soon as the side about to move has no legal move; there
    /// is no double-pass continuation back to the side that just played.
    /// Every ply fills at least one empty cell, so the loop runs at most
    /// 60 times from the standard start.
    pub fn play(&mut self, first_to_move: Tile) -> GameResult {
        if self.verbose {
            println!("Match starting:");
            println!("  Black: {}", self.black_bot.name());
            println!("  White: {}", self.white_bot.name());
            println!("  {} moves first\n", first_to_move);
            println!("{}", self.board.display_board());
        }

        let mut turn = first_to_move;

        loop {
            let bot: &mut dyn Bot = match turn {
                Tile::Black => &mut *self.black_bot,
                Tile::White => &mut *self.white_bot,
            };

            let Some(pos) = bot.choose_move(&self.board, turn) else {
                break;
            };

            let bot_name = bot.name().to_string();

            if let Err(err) = self.board.apply_move(turn, pos) {
                // Bots draw from legal_moves, so a rejected ply means a
                // misbehaving bot; the ply is discarded and the game ends.
                if self.verbose {
                    println!("{}: {}", bot_name, err);
                }
                break;
            }

            self.plies += 1;

            if self.verbose {
                println!("Move {}: {} plays {}", self.plies, bot_name, pos);
                println!("{}", self.board.display_board());
            }

            let opponent = turn.opponent();
            if self.board.legal_moves(opponent).is_empty() {
                break;
            }
            turn = opponent;
        }

        GameResult::from_score(self.board.score())
    }
}

/// Aggregate win/loss/tie counters over a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesStats {
    pub black_wins: usize,
    pub white_wins: usize,
    pub ties: usize,
    pub games: usize,
}

impl SeriesStats {
    pub fn new() -> Self {
        SeriesStats::default()
    }

    pub fn record(&mut self, result: &GameResult) {
        match result.outcome {
            Outcome::BlackWins => self.black_wins += 1,
            Outcome::WhiteWins => self.white_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
        self.games += 1;
    }

    pub fn black_percent(&self) -> f64 {
        Self::percent(self.black_wins, self.games)
    }

    pub fn white_percent(&self) -> f64 {
        Self::percent(self.white_wins, self.games)
    }

    pub fn tie_percent(&self) -> f64 {
        Self::percent(self.ties, self.games)
    }

    // Rounded to two decimal places.
    fn percent(count: usize, games: usize) -> f64 {
        if games == 0 {
            return 0.0;
        }
        (count as f64 / games as f64 * 100.0 * 100.0).round() / 100.0
    }

    pub fn summary(&self) -> String {
        format!(
            "Black wins {} games ({}%), White wins {} games ({}%), ties for {} games ({}%) of {} games total.",
            self.black_wins,
            self.black_percent(),
            self.white_wins,
            self.white_percent(),
            self.ties,
            self.tie_percent(),
            self.games
        )
    }
}

/// Plays repeated games between two bots and accumulates statistics.
///
/// Which side opens each game is decided by a fair coin flip; the flip rng
/// is seedable so whole runs can be reproduced.
pub struct Series {
    config: SeriesConfig,
    black_bot: Box<dyn Bot>,
    white_bot: Box<dyn Bot>,
    rng: StdRng,
}

impl Series {
    pub fn new(black_bot: Box<dyn Bot>, white_bot: Box<dyn Bot>, config: SeriesConfig) -> Self {
        Series {
            config,
            black_bot,
            white_bot,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(
        black_bot: Box<dyn Bot>,
        white_bot: Box<dyn Bot>,
        config: SeriesConfig,
        seed: u64,
    ) -> Self {
        Series {
            config,
            black_bot,
            white_bot,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn run(&mut self) -> SeriesStats {
        let mut stats = SeriesStats::new();

        for game in 0..self.config.num_games {
            let first_to_move = if self.rng.random_bool(0.5) {
                Tile::Black
            } else {
                Tile::White
            };

            let mut game_match = Match::new(
                self.black_bot.as_mut(),
                self.white_bot.as_mut(),
                self.config.verbose,
            );
            let result = game_match.play(first_to_move);

            println!("{}", game_report(game, &result));

            stats.record(&result);
        }

        stats
    }
}

/// The per-game score line printed after every game of a series.
fn game_report(game: usize, result: &GameResult) -> String {
    format!(
        "Game #{}: Black scored {} points, White scored {} points.",
        game, result.score.black, result.score.white
    )
}
