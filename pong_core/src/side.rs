use std::ops::{Index, IndexMut};

/// The two parties of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Player, Side::Computer];

    pub fn opposite(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Computer => 1,
        }
    }
}

/// One value per side, indexed by `Side`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PerSide<T>([T; 2]);

impl<T> PerSide<T> {
    pub fn new(player: T, computer: T) -> Self {
        Self([player, computer])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T> Index<Side> for PerSide<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        &self.0[side.index()]
    }
}

impl<T> IndexMut<Side> for PerSide<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        &mut self.0[side.index()]
    }
}
