use reversi_arena::*;
use std::env;
use std::process;

fn main() {
    println!("Reversi Arena - Automated Game Simulator");
    println!("========================================\n");

    let args: Vec<String> = env::args().collect();

    let num_games = match args.get(1) {
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                eprintln!("Number of games must be a positive integer, got '{}'", raw);
                process::exit(1);
            }
        },
        None => SeriesConfig::default().num_games,
    };

    let seed = match args.get(2) {
        Some(raw) => match raw.parse::<u64>() {
            Ok(s) => Some(s),
            Err(_) => {
                eprintln!("Seed must be an unsigned integer, got '{}'", raw);
                process::exit(1);
            }
        },
        None => None,
    };

    let config = SeriesConfig {
        num_games,
        verbose: false,
    };

    let mut series = match seed {
        Some(seed) => {
            let black = Box::new(GreedyCornerBot::with_seed(
                "GreedyBlack".to_string(),
                seed.wrapping_add(1),
            ));
            let white = Box::new(GreedyCornerBot::with_seed(
                "GreedyWhite".to_string(),
                seed.wrapping_add(2),
            ));
            Series::with_seed(black, white, config, seed)
        }
        None => {
            let black = Box::new(GreedyCornerBot::new("GreedyBlack".to_string()));
            let white = Box::new(GreedyCornerBot::new("GreedyWhite".to_string()));
            Series::new(black, white, config)
        }
    };

    let stats = series.run();

    println!("{}", stats.summary());
}
