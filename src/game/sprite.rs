//! file: sprite.rs
//! author: Jacob Xie
//! date: 2025/12/17 20:51:26 Wednesday
//! brief: which tile image a cell shows in each phase

use super::{Cell, GameStatus, Visibility};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sprite {
    Hidden,
    Revealed,
    Mine,
    ExplodedMine,
}

/// Board layer. `None` leaves the tile as bare background.
pub fn board_sprite(status: GameStatus, cell: Cell) -> Option<Sprite> {
    match (status, cell.visibility) {
        (_, Visibility::ShownAsMine) => Some(Sprite::Mine),
        // the preview shows mines only
        (GameStatus::PreGame, _) => None,
        (_, Visibility::Hidden) => Some(Sprite::Hidden),
        (_, Visibility::Revealed) => Some(Sprite::Revealed),
    }
}

/// Layer drawn above the end-of-round overlay.
pub fn overlay_sprite(status: GameStatus, cell: Cell) -> Option<Sprite> {
    if !cell.has_mine {
        return None;
    }
    match status {
        GameStatus::Lost => Some(Sprite::ExplodedMine),
        GameStatus::Won => Some(Sprite::Mine),
        GameStatus::PreGame | GameStatus::Playing => None,
    }
}
