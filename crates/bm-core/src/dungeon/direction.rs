//! Movement directions between systems

use strum::{Display, EnumIter};

/// The four slots a system can be connected through
///
/// The map is not a grid: going RIGHT then LEFT returns to the same system,
/// but RIGHT, UP, LEFT, DOWN generally does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Direction {
    #[strum(to_string = "up")]
    Up,
    #[strum(to_string = "down")]
    Down,
    #[strum(to_string = "left")]
    Left,
    #[strum(to_string = "right")]
    Right,
}

impl Direction {
    /// All directions in slot order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction leading back
    pub const fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Index into a system's adjacency slots
    pub const fn index(&self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// Menu key used to travel this way
    pub const fn key(&self) -> char {
        match self {
            Direction::Up => 'u',
            Direction::Down => 'd',
            Direction::Left => 'l',
            Direction::Right => 'r',
        }
    }

    /// Menu label for a neighbour in this direction, without scan annotation
    pub fn describe(&self, neighbour: &str) -> String {
        match self {
            Direction::Up => format!("[{neighbour}] is (U)P above"),
            Direction::Down => format!("[{neighbour}] is (D)OWN below"),
            Direction::Left => format!("[{neighbour}] is to the (L)EFT"),
            Direction::Right => format!("[{neighbour}] is to the (R)IGHT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn test_indices_are_distinct() {
        let mut seen = [false; 4];
        for dir in Direction::ALL {
            assert!(!seen[dir.index()]);
            seen[dir.index()] = true;
        }
    }

    #[test]
    fn test_describe() {
        assert_eq!(Direction::Up.describe("PIMG"), "[PIMG] is (U)P above");
        assert_eq!(Direction::Right.describe("PIMG"), "[PIMG] is to the (R)IGHT");
    }
}
