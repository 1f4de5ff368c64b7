//! Listing and replaying saved games

use anyhow::{Context, Result};
use checkers_core::capture_indices;
use checkers_session::{GameRecord, GameStore};
use std::io::Write;

pub fn list_games<S: GameStore, W: Write>(store: &S, out: &mut W) -> Result<()> {
    let records = store.list().context("failed to list saved games")?;
    if records.is_empty() {
        writeln!(out, "No saved games.")?;
        return Ok(());
    }
    for record in &records {
        writeln!(out, "{}", record.summary())?;
    }
    Ok(())
}

/// Prints every position of a saved game, marking captures.
pub fn show_replay<W: Write>(record: &GameRecord, out: &mut W) -> Result<()> {
    let frames = record
        .replay()
        .with_context(|| format!("could not replay game {}", record.id))?;
    let captures = capture_indices(&record.moves);

    writeln!(
        out,
        "Game {} played {}",
        record.id,
        record.timestamp.format("%Y-%m-%d %H:%M UTC")
    )?;
    writeln!(out, "{}", frames[0])?;
    for (i, (mv, board)) in record.moves.iter().zip(&frames[1..]).enumerate() {
        let mark = if captures.contains(&i) { "  (capture)" } else { "" };
        writeln!(out, "{}. {} {mv}{mark}", i + 1, mv.mover)?;
        writeln!(out, "{board}")?;
    }
    writeln!(
        out,
        "Result: {} after {} moves",
        record.result.status,
        record.moves.len()
    )?;
    Ok(())
}
