//! Interactive game loop

use anyhow::Result;
use checkers_core::Engine;
use checkers_session::{
    Coach, EndReason, GameRecord, GameStore, JsonFileStore, Origin, Outcome, Selection, Session,
    SessionConfig, SuggestionSource, TurnState, AUTOMATED_SIDE, HUMAN_SIDE,
};
use random_engine::RandomEngine;
use std::io::Write;
use tokio::io::{AsyncBufRead, Lines};
use tracing::{info, warn};

use crate::commands::{parse_command, Command, HELP};

/// Everything needed to run games: the coach, the automated player and
/// where finished games go.
pub struct Table {
    coach: Coach<Box<dyn SuggestionSource>>,
    engine: RandomEngine,
    store: Option<JsonFileStore>,
    hints: bool,
    remote_ai: bool,
}

impl Table {
    pub fn from_config(config: &SessionConfig) -> Self {
        let store = config
            .store
            .save_games
            .then(|| JsonFileStore::new(config.store.dir.clone()));
        Self {
            coach: Coach::from_config(&config.coach, config.ai.seed),
            engine: RandomEngine::from_seed(config.ai.seed),
            store,
            hints: config.coach.enabled,
            remote_ai: config.ai.use_remote,
        }
    }

    /// Plays one game reading commands from `input`. Returns the final
    /// session, which is unfinished if the player quit or input ran out.
    pub async fn play<R, W>(&mut self, input: &mut Lines<R>, out: &mut W) -> Result<Session>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut session = Session::new();
        self.engine.new_game();
        info!(
            engine = self.engine.name(),
            hints = self.hints,
            remote_ai = self.remote_ai,
            "new game"
        );
        writeln!(out, "You are {HUMAN_SIDE}; {HUMAN_SIDE} moves first. Type 'help' for commands.")?;
        writeln!(out, "{}", session.board())?;

        let mut hinted_at = None;
        loop {
            match session.turn() {
                TurnState::GameOver(outcome) => {
                    self.finish(&session, outcome, out)?;
                    return Ok(session);
                }
                TurnState::BlackToMove => {
                    session = self.automated_move(&session).await?;
                    if let Some(mv) = session.history().last() {
                        writeln!(out, "{AUTOMATED_SIDE} plays {mv}")?;
                        writeln!(out, "{}", session.board())?;
                    }
                }
                TurnState::RedToMove => {
                    let ply = session.history().len();
                    if self.hints && hinted_at != Some(ply) {
                        hinted_at = Some(ply);
                        self.hint(&session, out).await?;
                    }

                    write!(out, "{HUMAN_SIDE}> ")?;
                    out.flush()?;
                    let Some(line) = input.next_line().await? else {
                        writeln!(out)?;
                        return Ok(session);
                    };

                    let cmd = match parse_command(&line) {
                        Ok(cmd) => cmd,
                        Err(e) => {
                            writeln!(out, "{e}")?;
                            continue;
                        }
                    };
                    match cmd {
                        Command::Empty => {}
                        Command::Quit => return Ok(session),
                        Command::Help => writeln!(out, "{HELP}")?,
                        Command::Board => writeln!(out, "{}", session.board())?,
                        Command::Hint => self.hint(&session, out).await?,
                        Command::History => {
                            for (i, mv) in session.history().iter().enumerate() {
                                writeln!(out, "{:>3}. {:<5} {mv}", i + 1, mv.mover)?;
                            }
                        }
                        Command::Moves(pos) => match session.select_piece(pos) {
                            Ok(Selection::Moves { from, destinations }) => {
                                let list: Vec<String> =
                                    destinations.iter().map(|d| d.to_string()).collect();
                                writeln!(out, "{from} can move to {}", list.join(", "))?;
                            }
                            Ok(Selection::NoMoves { from }) => {
                                writeln!(out, "No valid moves for {from}, pick another piece.")?
                            }
                            Err(e) => writeln!(out, "{e}")?,
                        },
                        Command::Move(step) => match session.play(step.from, step.to) {
                            Ok(next) => {
                                session = next;
                                writeln!(out, "{}", session.board())?;
                            }
                            Err(e) => writeln!(out, "{e}")?,
                        },
                    }
                }
            }
        }
    }

    async fn automated_move(&mut self, session: &Session) -> Result<Session> {
        let next = if self.remote_ai {
            let suggestion = self.coach.suggest(session.board(), AUTOMATED_SIDE).await;
            session.play_automated(suggestion.step)?
        } else {
            session.automated_turn(&mut self.engine)?
        };
        Ok(next)
    }

    async fn hint<W: Write>(&mut self, session: &Session, out: &mut W) -> Result<()> {
        let suggestion = self.coach.suggest(session.board(), HUMAN_SIDE).await;
        let source = match &suggestion.origin {
            Origin::Remote => "coach",
            Origin::Fallback { .. } => "local",
        };
        match suggestion.step {
            Some(step) => writeln!(out, "Hint ({source}): {} {}", step.from, step.to)?,
            None => writeln!(out, "Hint: {HUMAN_SIDE} has no legal moves.")?,
        }
        Ok(())
    }

    fn finish<W: Write>(&self, session: &Session, outcome: Outcome, out: &mut W) -> Result<()> {
        let why = match outcome.reason {
            EndReason::AllPiecesCaptured => "all pieces captured",
            EndReason::NoMovesAvailable => "no moves left",
        };
        let headline = if outcome.winner == HUMAN_SIDE {
            "You win"
        } else {
            "You lose"
        };
        writeln!(out, "{headline}! {} ({why}).", outcome.status())?;

        let Some(store) = &self.store else {
            return Ok(());
        };
        // A failed save is reported but never ends the program.
        match GameRecord::from_session(session).and_then(|record| store.save(&record)) {
            Ok(id) => writeln!(out, "Game saved as {id}")?,
            Err(err) => {
                warn!(error = %err, dir = %store.dir().display(), "could not save game");
                writeln!(out, "Game was not saved.")?;
            }
        }
        Ok(())
    }
}
