//! file: error.rs
//! author: Jacob Xie
//! date: 2025/12/16 21:32:08 Tuesday
//! brief:

use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Too many mines: {mines} requested for {cells} cells")]
    TooManyMines { mines: usize, cells: usize },
    #[error("Invalid coordinates ({0}, {1})")]
    InvalidCoords(usize, usize),
}

pub type Result<T> = core::result::Result<T, GameError>;
