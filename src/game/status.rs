//! file: status.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:44:54 Sunday
//! brief:

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    PreGame,
    Playing,
    Lost,
    Won,
}

impl GameStatus {
    pub fn is_finished(self) -> bool {
        matches!(self, GameStatus::Lost | GameStatus::Won)
    }

    pub fn message(self) -> Option<&'static str> {
        match self {
            GameStatus::Lost => Some("YOU LOST!"),
            GameStatus::Won => Some("YOU WIN!"),
            GameStatus::PreGame | GameStatus::Playing => None,
        }
    }
}
