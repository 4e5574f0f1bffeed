//! Game session - the Playing/Won/Lost state machine around a grid
//!
//! [`GridEngine`] answers terminal-state queries but never refuses a move.
//! [`Game`] re-evaluates the status after every applied move and rejects
//! further moves once the session is won or lost, until [`Game::restart`].

use log::{debug, info};
use rand::Rng;

use crate::error::GridError;
use crate::grid::{GridConfig, GridEngine, MoveOutcome};
use crate::rng::SimpleRng;
use crate::snapshot::GridSnapshot;
use crate::types::{Direction, GameAction, GameStatus};

/// One game session.
#[derive(Debug, Clone)]
pub struct Game<R = SimpleRng> {
    grid: GridEngine<R>,
    status: GameStatus,
    /// Moves that changed the grid since the last (re)start.
    moves: u32,
}

impl Game<SimpleRng> {
    /// Start a session with the default seedable generator.
    pub fn new(config: GridConfig, seed: u32) -> Result<Self, GridError> {
        Ok(Self::from_grid(GridEngine::with_seed(config, seed)?))
    }
}

impl<R: Rng> Game<R> {
    pub fn from_grid(grid: GridEngine<R>) -> Self {
        let status = grid.status();
        Self {
            grid,
            status,
            moves: 0,
        }
    }

    pub fn grid(&self) -> &GridEngine<R> {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u64 {
        self.grid.score()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Apply one move.
    ///
    /// Returns `Ok(None)` without touching the grid once the session is over.
    pub fn apply(&mut self, direction: Direction) -> Result<Option<MoveOutcome>, GridError> {
        if self.status.is_terminal() {
            debug!(
                "move {} ignored: game is {}",
                direction.as_str(),
                self.status.as_str()
            );
            return Ok(None);
        }

        let outcome = self.grid.move_cells(direction)?;
        if outcome.moved {
            self.moves += 1;
            self.status = self.grid.status();
            if let Some(message) = self.status.message(self.grid.score()) {
                info!("{} after {} moves", message, self.moves);
            }
        }
        Ok(Some(outcome))
    }

    /// Dispatch a driver action. Only moves produce an outcome.
    pub fn apply_action(&mut self, action: GameAction) -> Result<Option<MoveOutcome>, GridError> {
        match action {
            GameAction::Move(direction) => self.apply(direction),
            GameAction::Restart => {
                self.restart()?;
                Ok(None)
            }
        }
    }

    /// Reset the grid and return to `Playing`.
    pub fn restart(&mut self) -> Result<(), GridError> {
        self.grid.reset()?;
        self.status = self.grid.status();
        self.moves = 0;
        info!("game restarted");
        Ok(())
    }

    pub fn snapshot(&self) -> GridSnapshot {
        let mut snap = GridSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    pub fn snapshot_into(&self, out: &mut GridSnapshot) {
        self.grid.snapshot_into(out);
        out.status = self.status;
    }
}
