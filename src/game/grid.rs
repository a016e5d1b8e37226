//! file: grid.rs
//! author: Jacob Xie
//! date: 2025/12/16 21:18:31 Tuesday
//! brief: mine field storage, placement and reveal rules

use rand::Rng;

use super::{Cell, GameConfig, GameError, Result, Visibility};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, RevealOutcome::NoChange)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        }
    }

    pub fn random<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self> {
        if config.mines >= config.total_cells() {
            return Err(GameError::TooManyMines {
                mines: config.mines,
                cells: config.total_cells(),
            });
        }
        let mut grid = Self::new(config.width, config.height);
        grid.place_mines(config.mines, rng)?;
        Ok(grid)
    }

    pub fn with_mines(config: &GameConfig, mines: &[(usize, usize)]) -> Result<Self> {
        let mut grid = Self::new(config.width, config.height);
        for &(x, y) in mines {
            let idx = grid.index(x, y).ok_or(GameError::InvalidCoords(x, y))?;
            grid.cells[idx].has_mine = true;
        }
        let placed = grid.mine_count();
        if placed >= grid.cells.len() {
            return Err(GameError::TooManyMines {
                mines: placed,
                cells: grid.cells.len(),
            });
        }
        Ok(grid)
    }

    /// Rejection sampling: draw coordinates until `count` distinct cells hold a mine.
    pub fn place_mines<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Result<()> {
        let free = self.cells.iter().filter(|cell| !cell.has_mine).count();
        // at least one safe cell must remain or the round is unwinnable
        if count >= free {
            return Err(GameError::TooManyMines {
                mines: count,
                cells: self.cells.len(),
            });
        }

        let mut remaining = count;
        while remaining > 0 {
            let x = rng.gen_range(0..self.width);
            let y = rng.gen_range(0..self.height);
            let idx = y * self.width + x;
            if !self.cells[idx].has_mine {
                self.cells[idx].has_mine = true;
                remaining -= 1;
            }
        }
        Ok(())
    }

    pub fn reset(&mut self) {
        self.cells.fill(Cell::default());
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| ((idx % self.width, idx / self.width), *cell))
    }

    pub fn mine_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.has_mine).count()
    }

    /// Opens a hidden cell. Mine flags are never touched here.
    pub fn reveal(&mut self, x: usize, y: usize) -> RevealOutcome {
        let Some(idx) = self.index(x, y) else {
            return RevealOutcome::NoChange;
        };
        let cell = &mut self.cells[idx];
        if !cell.is_hidden() {
            return RevealOutcome::NoChange;
        }
        if cell.has_mine {
            RevealOutcome::HitMine
        } else {
            cell.visibility = Visibility::Revealed;
            RevealOutcome::Revealed
        }
    }

    pub fn all_safe_revealed(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_pending())
    }

    pub fn show_mines(&mut self) {
        self.set_mine_visibility(Visibility::ShownAsMine);
    }

    pub fn hide_mines(&mut self) {
        self.set_mine_visibility(Visibility::Hidden);
    }

    fn set_mine_visibility(&mut self, visibility: Visibility) {
        self.cells
            .iter_mut()
            .filter(|cell| cell.has_mine)
            .for_each(|cell| cell.visibility = visibility);
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}
