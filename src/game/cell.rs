//! file: cell.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:45:17 Sunday
//! brief:

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Revealed,
    /// Only used while mines are previewed and after a loss.
    ShownAsMine,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub has_mine: bool,
    pub visibility: Visibility,
}

impl Cell {
    pub fn is_hidden(self) -> bool {
        self.visibility == Visibility::Hidden
    }

    pub fn is_revealed(self) -> bool {
        self.visibility == Visibility::Revealed
    }

    /// Safe cells still waiting to be revealed.
    pub fn is_pending(self) -> bool {
        !self.has_mine && !self.is_revealed()
    }
}
