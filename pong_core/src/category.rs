use std::ops::{BitOr, BitOrAssign};

/// Collision category mask carried by every physics body.
///
/// Each named flag is a distinct power of two; a body may carry several at once
/// (the scoring edges are tagged with both their own flag and `EDGE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Category(pub u32);

impl Category {
    pub const NONE: Category = Category(0);
    pub const BALL: Category = Category(0b0000_0001);
    pub const PADDLE: Category = Category(0b0000_0010);
    pub const WALL: Category = Category(0b0001_0000);
    pub const PLAYER_EDGE: Category = Category(0b0010_0000);
    pub const COMPUTER_EDGE: Category = Category(0b0100_0000);
    pub const EDGE: Category = Category(0b1000_0000);

    /// Bitwise-OR of all given flags
    pub fn compose(flags: &[Category]) -> Category {
        flags.iter().fold(Category::NONE, |acc, flag| acc | *flag)
    }

    /// True when every bit of `target` is set in `self`
    pub fn contains(self, target: Category) -> bool {
        self.0 & target.0 == target.0
    }

    /// True when the two masks share at least one flag
    pub fn intersects(self, other: Category) -> bool {
        self.0 & other.0 != 0
    }

    pub fn bits(self) -> u32 {
        self.0
    }
}

impl BitOr for Category {
    type Output = Category;

    fn bitor(self, rhs: Category) -> Category {
        Category(self.0 | rhs.0)
    }
}

impl BitOrAssign for Category {
    fn bitor_assign(&mut self, rhs: Category) {
        self.0 |= rhs.0;
    }
}

impl From<u32> for Category {
    fn from(bits: u32) -> Self {
        Category(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Category; 6] = [
        Category::BALL,
        Category::PADDLE,
        Category::WALL,
        Category::PLAYER_EDGE,
        Category::COMPUTER_EDGE,
        Category::EDGE,
    ];

    #[test]
    fn test_flags_are_distinct_powers_of_two() {
        for (i, a) in ALL.iter().enumerate() {
            assert!(a.bits().is_power_of_two(), "{:?} is not a single bit", a);
            for b in ALL.iter().skip(i + 1) {
                assert_eq!(a.bits() & b.bits(), 0, "{:?} overlaps {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_compose_is_bitwise_or() {
        let mask = Category::compose(&[Category::EDGE, Category::PLAYER_EDGE]);
        assert_eq!(mask.bits(), 0b1010_0000);
        assert_eq!(Category::compose(&[]), Category::NONE);
    }

    #[test]
    fn test_contains_every_subset() {
        let mask = Category::compose(&ALL);
        // Walk every subset of the six flags
        for bits in 0u32..(1 << ALL.len()) {
            let subset: Vec<Category> = ALL
                .iter()
                .enumerate()
                .filter(|(i, _)| bits & (1 << i) != 0)
                .map(|(_, c)| *c)
                .collect();
            assert!(mask.contains(Category::compose(&subset)));
        }
    }

    #[test]
    fn test_intersects_any_shared_flag() {
        let ball_test = Category::EDGE | Category::WALL | Category::PADDLE;
        assert!(ball_test.intersects(Category::EDGE | Category::PLAYER_EDGE));
        assert!(ball_test.intersects(Category::WALL));
        assert!(!ball_test.intersects(Category::BALL));
        assert!(!ball_test.intersects(Category::NONE));
    }

    #[test]
    fn test_contains_rejects_missing_flag() {
        let mask = Category::BALL | Category::WALL;
        assert!(!mask.contains(Category::PADDLE));
        assert!(!mask.contains(Category::BALL | Category::PADDLE));
        assert!(mask.contains(Category::BALL));
        assert!(mask.contains(Category::NONE));
    }
}
