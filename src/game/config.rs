//! file: config.rs
//! author: Jacob Xie
//! date: 2025/12/16 21:10:42 Tuesday
//! brief: board geometry and mine count derived from one complexity value

use std::time::Duration;

pub const COMPLEXITY: u32 = 160;
pub const CELL_SIZE: u32 = 40;
pub const PREVIEW_SECS: u64 = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub cell_size: u32,
    pub mines: usize,
    pub preview: Duration,
    pub text_size: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_complexity(COMPLEXITY)
    }
}

impl GameConfig {
    /// Square window of `complexity` pixels, 40px tiles, one mine per 40px of side.
    pub fn from_complexity(complexity: u32) -> Self {
        let side = (complexity / CELL_SIZE) as usize;
        Self {
            width: side,
            height: side,
            cell_size: CELL_SIZE,
            mines: (complexity / CELL_SIZE) as usize,
            preview: Duration::from_secs(PREVIEW_SECS),
            text_size: (complexity / CELL_SIZE * 3) as f32,
        }
    }

    pub fn total_cells(&self) -> usize {
        self.width * self.height
    }

    pub fn window_width(&self) -> f32 {
        (self.width as u32 * self.cell_size) as f32
    }

    pub fn window_height(&self) -> f32 {
        (self.height as u32 * self.cell_size) as f32
    }

    pub fn cell_at(&self, px: f32, py: f32) -> Option<(usize, usize)> {
        if !px.is_finite() || !py.is_finite() || px < 0.0 || py < 0.0 {
            return None;
        }
        let x = px as usize / self.cell_size as usize;
        let y = py as usize / self.cell_size as usize;
        (x < self.width && y < self.height).then_some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_four_by_four() {
        let config = GameConfig::default();
        assert_eq!((config.width, config.height), (4, 4));
        assert_eq!(config.mines, 4);
        assert_eq!(config.total_cells(), 16);
        assert_eq!(config.window_width(), 160.0);
        assert_eq!(config.preview, Duration::from_secs(5));
        assert_eq!(config.text_size, 12.0);
    }

    #[test]
    fn complexity_scales_grid_and_mines() {
        let config = GameConfig::from_complexity(400);
        assert_eq!((config.width, config.height, config.mines), (10, 10, 10));
        assert_eq!(config.window_height(), 400.0);
    }

    #[test]
    fn pixels_map_by_integer_division() {
        let config = GameConfig::default();
        assert_eq!(config.cell_at(0.0, 0.0), Some((0, 0)));
        assert_eq!(config.cell_at(39.9, 40.0), Some((0, 1)));
        assert_eq!(config.cell_at(159.0, 121.5), Some((3, 3)));
    }

    #[test]
    fn pixels_outside_grid_are_ignored() {
        let config = GameConfig::default();
        assert_eq!(config.cell_at(160.0, 10.0), None);
        assert_eq!(config.cell_at(10.0, 200.0), None);
        assert_eq!(config.cell_at(-1.0, 10.0), None);
        assert_eq!(config.cell_at(f32::NAN, 10.0), None);
    }
}
