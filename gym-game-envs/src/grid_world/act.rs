use gym_game_core::Act;

/// Action of [`GridWorld`](super::GridWorld): the index of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridAct(pub usize);

impl GridAct {
    /// Moves one row up.
    pub const UP: GridAct = GridAct(0);

    /// Moves one column right.
    pub const RIGHT: GridAct = GridAct(1);

    /// Moves one row down.
    pub const DOWN: GridAct = GridAct(2);

    /// Moves one column left.
    pub const LEFT: GridAct = GridAct(3);
}

impl Act for GridAct {}

impl From<usize> for GridAct {
    fn from(a: usize) -> Self {
        Self(a)
    }
}
