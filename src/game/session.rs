//! file: session.rs
//! author: Jacob Xie
//! date: 2025/12/16 22:04:55 Tuesday
//! brief: round lifecycle, every transition goes through `dispatch`

use rand::{SeedableRng, rngs::StdRng};

use super::{GameConfig, GameStatus, Grid, Result, RevealOutcome};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GameEvent {
    /// Mine preview is over, hide the mines and start playing.
    PreviewElapsed,
    /// Pointer released at window pixel coordinates.
    Release { x: f32, y: f32 },
    Restart,
}

pub struct Session {
    config: GameConfig,
    grid: Grid,
    status: GameStatus,
    rng: StdRng,
}

impl Session {
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: GameConfig, mut rng: StdRng) -> Result<Self> {
        let grid = Grid::random(&config, &mut rng)?;
        let mut session = Self {
            config,
            grid,
            status: GameStatus::PreGame,
            rng,
        };
        session.begin_preview();
        Ok(session)
    }

    /// Starts straight in `Playing` with a known layout.
    pub fn from_grid(config: GameConfig, grid: Grid, rng: StdRng) -> Self {
        Self {
            config,
            grid,
            status: GameStatus::Playing,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Applies one event. Returns true when the grid or status changed.
    pub fn dispatch(&mut self, event: GameEvent) -> Result<bool> {
        let changed = match (self.status, event) {
            (GameStatus::PreGame, GameEvent::PreviewElapsed) => {
                self.grid.hide_mines();
                self.status = GameStatus::Playing;
                log::info!("Preview over, round started");
                true
            }
            (GameStatus::Playing, GameEvent::Release { x, y }) => match self.config.cell_at(x, y) {
                Some((cx, cy)) => self.reveal(cx, cy).has_update(),
                None => {
                    log::trace!("release at ({x}, {y}) outside the grid");
                    false
                }
            },
            (status, GameEvent::Restart) if status.is_finished() => {
                self.restart()?;
                true
            }
            (status, event) => {
                log::trace!("{event:?} ignored while {status:?}");
                false
            }
        };
        Ok(changed)
    }

    /// Reveal by grid coordinate, followed by the win check.
    pub fn reveal(&mut self, x: usize, y: usize) -> RevealOutcome {
        if self.status != GameStatus::Playing {
            return RevealOutcome::NoChange;
        }
        let outcome = match self.grid.reveal(x, y) {
            RevealOutcome::HitMine => {
                self.status = GameStatus::Lost;
                self.grid.show_mines();
                log::info!("You lost!");
                return RevealOutcome::HitMine;
            }
            RevealOutcome::Revealed => {
                log::debug!("Opened! ({x}, {y})");
                RevealOutcome::Revealed
            }
            other => other,
        };

        if self.grid.all_safe_revealed() {
            self.status = GameStatus::Won;
            log::info!("You win!");
            return RevealOutcome::Won;
        }
        outcome
    }

    fn restart(&mut self) -> Result<()> {
        self.grid.reset();
        self.grid.place_mines(self.config.mines, &mut self.rng)?;
        self.begin_preview();
        Ok(())
    }

    fn begin_preview(&mut self) {
        self.grid.show_mines();
        self.status = GameStatus::PreGame;
        log::info!(
            "New {}x{} round with {} mines",
            self.grid.width(),
            self.grid.height(),
            self.grid.mine_count()
        );
    }
}
