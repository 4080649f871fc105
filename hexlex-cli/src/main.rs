//! HEXLEX CLI - Command-line front end for the rules engine
//!
//! Commands:
//! - check: look words up in a lexicon
//! - play: drive a session interactively over stdin

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use hexlex_core::{
    Cell, Dictionary, Placement, Session, Verdict, BOARD_WIDTH, RACK_SIZE,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "hexlex")]
#[command(about = "Hexagonal word game engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up words in a lexicon
    Check {
        /// Word list sorted by length, then alphabetically
        #[arg(long)]
        lexicon: PathBuf,
        /// Words to test
        words: Vec<String>,
        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Play a session interactively
    Play {
        #[arg(long)]
        lexicon: PathBuf,
        #[arg(long, default_value = "1")]
        players: usize,
        /// Seed for reproducible tile draws
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Check { lexicon, words, json } => check(&lexicon, &words, json),
        Commands::Play { lexicon, players, seed } => play(&lexicon, players, seed),
    }
}

fn check(lexicon: &PathBuf, words: &[String], json: bool) -> anyhow::Result<()> {
    let dictionary = Dictionary::load(lexicon)
        .with_context(|| format!("loading lexicon {}", lexicon.display()))?;
    tracing::info!(words = dictionary.len(), "lexicon loaded");

    if json {
        let results: Vec<_> = words
            .iter()
            .map(|word| serde_json::json!({ "word": word, "valid": dictionary.contains(word) }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for word in words {
            let mark = if dictionary.contains(word) { "ok" } else { "NOT A WORD" };
            println!("{word}: {mark}");
        }
    }
    Ok(())
}

fn play(lexicon: &PathBuf, players: usize, seed: Option<u64>) -> anyhow::Result<()> {
    let dictionary = Arc::new(
        Dictionary::load(lexicon)
            .with_context(|| format!("loading lexicon {}", lexicon.display()))?,
    );
    let mut session = match seed {
        Some(seed) => Session::with_seed(dictionary, players, seed)?,
        None => Session::new(dictionary, players)?,
    };
    tracing::info!(players, "session started");

    println!("Commands: board | rack | play L@COL,ROW ... | undo | quit");
    println!("Prefix a blank with '?', e.g. ?E@6,7 plays the blank as E.");

    let stdin = io::stdin();
    let mut player = 0;
    loop {
        print!("player {player}> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            continue;
        };

        match command {
            "board" => print_board(&session),
            "rack" => print_rack(&session, player)?,
            "undo" => {
                if session.undo() {
                    println!("rewound one move");
                } else {
                    println!("nothing to undo");
                }
            }
            "play" => {
                let placements: anyhow::Result<Vec<Placement>> =
                    tokens.map(parse_placement).collect();
                match placements {
                    Err(err) => println!("bad move syntax: {err}"),
                    Ok(placements) => match session.propose_move(player, &placements) {
                        Err(err) => println!("rejected: {err}"),
                        Ok(Verdict::Rejected(reason)) => println!("rejected: {reason}"),
                        Ok(Verdict::Accepted(accepted)) => {
                            println!(
                                "accepted: {} for {} points (total {})",
                                accepted.words.join(", "),
                                accepted.score,
                                session.score(player)?
                            );
                            player = (player + 1) % session.num_players();
                        }
                    },
                }
            }
            "quit" => break,
            other => println!("unknown command: {other}"),
        }
    }
    Ok(())
}

/// Parse one tile token: `H@5,7` or `?E@6,7` for a blank played as E
fn parse_placement(token: &str) -> anyhow::Result<Placement> {
    let (blank, rest) = match token.strip_prefix('?') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    let (letter, coords) = rest
        .split_once('@')
        .with_context(|| format!("expected LETTER@COL,ROW, got '{token}'"))?;
    let (col, row) = coords
        .split_once(',')
        .with_context(|| format!("expected COL,ROW after '@' in '{token}'"))?;

    let mut chars = letter.chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
        _ => bail!("'{letter}' is not a single letter"),
    };

    let col: i32 = col.parse().with_context(|| format!("bad column in '{token}'"))?;
    let row: i32 = row.parse().with_context(|| format!("bad row in '{token}'"))?;

    Ok(if blank {
        Placement::blank_as(letter, col, row)
    } else {
        Placement::new(letter, col, row)
    })
}

fn print_board(session: &Session) {
    print!("   ");
    for col in 0..BOARD_WIDTH {
        print!("{:>2}", col % 10);
    }
    println!();

    for row in 0..BOARD_WIDTH {
        print!("{row:>2} ");
        for col in 0..BOARD_WIDTH {
            match session.board().cell_at(col, row) {
                Cell::Void => print!("  "),
                Cell::Empty => print!(" ."),
                Cell::Tile(tile) => print!(" {}", tile.letter),
            }
        }
        println!();
    }
}

fn print_rack(session: &Session, player: usize) -> anyhow::Result<()> {
    let rack = session.rack(player)?;
    let slots: Vec<String> = rack
        .slots()
        .iter()
        .map(|slot| slot.map_or("_".to_string(), |c| c.to_string()))
        .collect();
    println!(
        "rack ({}/{}): {}  |  {} tiles in bag",
        rack.len(),
        RACK_SIZE,
        slots.join(" "),
        session.tiles_remaining()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_placement() {
        assert_eq!(parse_placement("H@5,7").unwrap(), Placement::new('H', 5, 7));
        assert_eq!(parse_placement("x@7,7").unwrap(), Placement::new('X', 7, 7));
        assert_eq!(
            parse_placement("?E@6,7").unwrap(),
            Placement::blank_as('E', 6, 7)
        );

        assert!(parse_placement("HEX@5,7").is_err());
        assert!(parse_placement("H5,7").is_err());
        assert!(parse_placement("H@5").is_err());
        assert!(parse_placement("H@a,b").is_err());
    }
}
