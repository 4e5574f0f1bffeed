//! Grid module - the 2048 engine
//!
//! Owns the square array of [`Cell`]s and implements spawning, the directional
//! slide/merge pass, score computation and terminal-state queries.
//!
//! Storage is a flat row-major array (`y * size + x`). Every public mutating
//! operation starts a fresh change-set; callers read it with
//! [`GridEngine::changes`] to refresh their own display state.

use log::{debug, trace, warn};
use rand::Rng;

use crate::cell::{Cell, CellEvent};
use crate::error::GridError;
use crate::rng::SimpleRng;
use crate::snapshot::GridSnapshot;
use crate::traversal::Traversal;
use crate::types::{
    Direction, GameStatus, DEFAULT_GRID_SIZE, DEFAULT_INITIAL_CELLS, LEVEL_CAP, MAX_LEVEL,
    SPAWN_HIGH_LEVEL, SPAWN_HIGH_LEVEL_ODDS, SPAWN_LOW_LEVEL,
};

/// Grid dimensions and initial fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub size: usize,
    pub initial_cells: usize,
}

impl GridConfig {
    pub fn new(size: usize, initial_cells: usize) -> Self {
        Self {
            size,
            initial_cells,
        }
    }

    pub fn capacity(&self) -> usize {
        self.size * self.size
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if self.size == 0 {
            return Err(GridError::ZeroSize);
        }
        if self.initial_cells > self.capacity() {
            return Err(GridError::TooManyInitialCells {
                requested: self.initial_cells,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE, DEFAULT_INITIAL_CELLS)
    }
}

/// A cell notification tagged with the slot it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellChange {
    pub x: usize,
    pub y: usize,
    pub event: CellEvent,
}

/// A newly spawned cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spawn {
    pub x: usize,
    pub y: usize,
    pub level: u8,
}

/// Result of one move pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Any cell slid or merged
    pub moved: bool,
    /// Number of pairwise merges
    pub merges: u32,
    /// Cell spawned after a successful move
    pub spawned: Option<Spawn>,
}

/// The grid engine.
#[derive(Debug, Clone)]
pub struct GridEngine<R = SimpleRng> {
    size: usize,
    initial_cells: usize,
    cells: Vec<Cell>,
    score: u64,
    rng: R,
    /// Notifications raised by the last public mutating call.
    changes: Vec<CellChange>,
}

impl GridEngine<SimpleRng> {
    /// Create a grid driven by the default seedable generator.
    pub fn with_seed(config: GridConfig, seed: u32) -> Result<Self, GridError> {
        Self::new(config, SimpleRng::new(seed))
    }
}

impl<R: Rng> GridEngine<R> {
    /// Allocate an `size`×`size` grid and spawn `initial_cells` cells.
    ///
    /// Fails without building anything if the configuration cannot fit.
    pub fn new(config: GridConfig, rng: R) -> Result<Self, GridError> {
        config.validate()?;

        let mut grid = Self::empty(config, rng);
        grid.populate()?;
        grid.recompute_score();
        debug!(
            "grid initialised: size={} initial_cells={} score={}",
            grid.size, grid.initial_cells, grid.score
        );
        Ok(grid)
    }

    /// Build a grid from explicit rows of levels (`rows[y][x]`), without spawning.
    ///
    /// Levels above [`LEVEL_CAP`] are clamped to it.
    ///
    /// [`reset`](Self::reset) on the result refills with the default initial
    /// cell count, capped to the grid capacity.
    pub fn from_levels<T: AsRef<[u8]>>(rows: &[T], rng: R) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        for (row, levels) in rows.iter().enumerate() {
            let len = levels.as_ref().len();
            if len != size {
                return Err(GridError::NotSquare {
                    row,
                    len,
                    expected: size,
                });
            }
        }

        let config = GridConfig::new(size, DEFAULT_INITIAL_CELLS.min(size * size));
        let mut grid = Self::empty(config, rng);
        for (y, levels) in rows.iter().enumerate() {
            for (x, &level) in levels.as_ref().iter().enumerate() {
                grid.assign(x, y, level.min(LEVEL_CAP));
            }
        }
        grid.changes.clear();
        grid.recompute_score();
        Ok(grid)
    }

    fn empty(config: GridConfig, rng: R) -> Self {
        let size = config.size;
        let cells = (0..config.capacity())
            .map(|i| Cell::new(i % size, i / size))
            .collect();
        Self {
            size,
            initial_cells: config.initial_cells,
            cells,
            score: 0,
            rng,
            changes: Vec::new(),
        }
    }

    /// Clear every cell and spawn the initial cells again.
    pub fn reset(&mut self) -> Result<(), GridError> {
        self.changes.clear();
        for y in 0..self.size {
            for x in 0..self.size {
                self.assign(x, y, 0);
            }
        }
        self.populate()?;
        self.recompute_score();
        debug!("grid reset: score={}", self.score);
        Ok(())
    }

    fn populate(&mut self) -> Result<(), GridError> {
        for _ in 0..self.initial_cells {
            self.spawn()?;
        }
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn config(&self) -> GridConfig {
        GridConfig::new(self.size, self.initial_cells)
    }

    /// Sum of points over all cells, as of the last mutating call.
    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// Get the cell at `(x, y)`, or `None` if out of bounds.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(&self.cells[self.index(x, y)])
    }

    /// Level at `(x, y)`, or `None` if out of bounds.
    pub fn level(&self, x: usize, y: usize) -> Option<u8> {
        self.cell(x, y).map(Cell::level)
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Notifications raised by the last mutating call.
    pub fn changes(&self) -> &[CellChange] {
        &self.changes
    }

    /// Overwrite one cell and recompute the score.
    ///
    /// Returns false if `(x, y)` is out of bounds. Levels above [`LEVEL_CAP`]
    /// are clamped to it.
    pub fn set_level(&mut self, x: usize, y: usize, level: u8) -> bool {
        if x >= self.size || y >= self.size {
            return false;
        }
        self.changes.clear();
        self.assign(x, y, level.min(LEVEL_CAP));
        self.recompute_score();
        true
    }

    fn assign(&mut self, x: usize, y: usize, level: u8) {
        let idx = self.index(x, y);
        for event in self.cells[idx].set_value(x, y, level) {
            self.changes.push(CellChange { x, y, event });
        }
    }

    /// Spawn one cell in a random empty slot and recompute the score.
    ///
    /// Moves already spawn on their own; this is for drivers that need an
    /// extra cell.
    pub fn spawn_random_cell(&mut self) -> Result<Spawn, GridError> {
        self.changes.clear();
        let spawned = self.spawn()?;
        self.recompute_score();
        Ok(spawned)
    }

    fn spawn(&mut self) -> Result<Spawn, GridError> {
        let empty: Vec<usize> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
            .collect();

        if empty.is_empty() {
            warn!("spawn requested on a full grid");
            return Err(GridError::OutOfSpace);
        }

        let (numerator, denominator) = SPAWN_HIGH_LEVEL_ODDS;
        let level = if self.rng.random_ratio(numerator, denominator) {
            SPAWN_HIGH_LEVEL
        } else {
            SPAWN_LOW_LEVEL
        };
        let idx = empty[self.rng.random_range(0..empty.len())];
        let (x, y) = (idx % self.size, idx / self.size);
        self.assign(x, y, level);

        debug!("spawned level {} at ({}, {})", level, x, y);
        Ok(Spawn { x, y, level })
    }

    /// Slide and merge every cell toward `direction`.
    ///
    /// If anything moved, one random cell is spawned and the score is
    /// recomputed. Otherwise the grid, the score and the RNG are untouched.
    ///
    /// ```
    /// use tui_2048_core::{GridEngine, SimpleRng};
    /// use tui_2048_types::Direction;
    ///
    /// let rows: [[u8; 4]; 4] = [[1, 0, 1, 0], [0; 4], [0; 4], [0; 4]];
    /// let mut grid = GridEngine::from_levels(&rows, SimpleRng::new(7)).unwrap();
    /// let outcome = grid.move_cells(Direction::Left).unwrap();
    /// assert!(outcome.moved);
    /// assert_eq!(outcome.merges, 1);
    /// assert_eq!(grid.level(0, 0), Some(2));
    /// ```
    pub fn move_cells(&mut self, direction: Direction) -> Result<MoveOutcome, GridError> {
        self.changes.clear();

        let traversal = Traversal::new(direction, self.size);
        // Merge targets of this pass; a result never merges twice.
        let mut merged = vec![false; self.cells.len()];
        let mut moved = false;
        let mut merges = 0u32;

        for (x, y) in traversal.order() {
            let level = self.cells[self.index(x, y)].level();
            if level == 0 {
                continue;
            }

            let (mut tx, mut ty) = (x, y);
            let mut merge_into = None;
            while let Some((nx, ny)) = traversal.step_from(tx, ty) {
                let ni = self.index(nx, ny);
                let next = self.cells[ni];
                if next.is_empty() {
                    tx = nx;
                    ty = ny;
                } else {
                    if next.level() == level && !merged[ni] {
                        merge_into = Some((nx, ny));
                    }
                    break;
                }
            }

            if let Some((mx, my)) = merge_into {
                let merged_level = (level + 1).min(LEVEL_CAP);
                self.assign(mx, my, merged_level);
                self.assign(x, y, 0);
                merged[self.index(mx, my)] = true;
                merges += 1;
                moved = true;
                trace!("merge ({}, {}) -> ({}, {}) level {}", x, y, mx, my, merged_level);
            } else if (tx, ty) != (x, y) {
                self.assign(tx, ty, level);
                self.assign(x, y, 0);
                moved = true;
                trace!("slide ({}, {}) -> ({}, {})", x, y, tx, ty);
            }
        }

        if !moved {
            debug!("move {}: nothing to do", direction.as_str());
            return Ok(MoveOutcome::default());
        }

        let spawned = self.spawn()?;
        self.recompute_score();
        debug!(
            "move {}: merges={} score={}",
            direction.as_str(),
            merges,
            self.score
        );

        Ok(MoveOutcome {
            moved,
            merges,
            spawned: Some(spawned),
        })
    }

    fn recompute_score(&mut self) {
        self.score = self
            .cells
            .iter()
            .fold(0u64, |sum, c| sum.saturating_add(c.points()));
    }

    /// True if any cell has reached [`MAX_LEVEL`].
    pub fn check_win(&self) -> bool {
        self.cells.iter().any(|c| c.level() >= MAX_LEVEL)
    }

    /// True if the grid is full and no horizontally or vertically adjacent
    /// pair shares a level.
    pub fn check_lose(&self) -> bool {
        for y in 0..self.size {
            for x in 0..self.size {
                let level = self.cells[self.index(x, y)].level();
                if level == 0 {
                    return false;
                }
                if x + 1 < self.size && self.cells[self.index(x + 1, y)].level() == level {
                    return false;
                }
                if y + 1 < self.size && self.cells[self.index(x, y + 1)].level() == level {
                    return false;
                }
            }
        }
        true
    }

    /// Terminal state of the grid; a win takes precedence over a loss.
    pub fn status(&self) -> GameStatus {
        if self.check_win() {
            GameStatus::Won
        } else if self.check_lose() {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }

    /// Status line for the current grid, e.g. "You Win! Your score: 2048".
    pub fn status_message(&self) -> Option<String> {
        self.status().message(self.score)
    }

    pub fn snapshot(&self) -> GridSnapshot {
        let mut snap = GridSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Copy the grid into an existing snapshot, reusing its allocation.
    pub fn snapshot_into(&self, out: &mut GridSnapshot) {
        out.size = self.size;
        out.levels.clear();
        out.levels.extend(self.cells.iter().map(Cell::level));
        out.score = self.score;
        out.status = self.status();
    }
}
