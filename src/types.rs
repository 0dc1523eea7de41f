use serde::{Deserialize, Serialize};

/// Grid cell states. The generator emits `u8` grids using these values
/// so mazes serialize as plain 0/1 matrices.
pub const WALL: u8 = 0;
pub const PATH: u8 = 1;

/// `(row, col)` coordinate pair. Serializes as a two-element array.
pub type Position = (usize, usize);

/// One step of a candidate path. The wire encoding is the integer code
/// 0=Up, 1=Right, 2=Down, 3=Left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Move {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Up, Move::Right, Move::Down, Move::Left];

    /// Row/col displacement of this move.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Right => (0, 1),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<Move> for u8 {
    fn from(m: Move) -> u8 {
        m as u8
    }
}

impl TryFrom<u8> for Move {
    type Error = String;

    fn try_from(code: u8) -> std::result::Result<Self, Self::Error> {
        match code {
            0 => Ok(Move::Up),
            1 => Ok(Move::Right),
            2 => Ok(Move::Down),
            3 => Ok(Move::Left),
            other => Err(format!("invalid move code: {}", other)),
        }
    }
}

/// Manhattan distance between two grid positions.
pub fn manhattan(a: Position, b: Position) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_codes_round_trip() {
        for m in Move::ALL {
            assert_eq!(Move::try_from(m.code()).unwrap(), m);
        }
        assert!(Move::try_from(4u8).is_err());
    }

    #[test]
    fn test_deltas_match_codes() {
        assert_eq!(Move::Up.delta(), (-1, 0));
        assert_eq!(Move::Right.delta(), (0, 1));
        assert_eq!(Move::Down.delta(), (1, 0));
        assert_eq!(Move::Left.delta(), (0, -1));
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(manhattan((1, 1), (1, 1)), 0);
        assert_eq!(manhattan((1, 1), (4, 5)), 7);
        assert_eq!(manhattan((4, 5), (1, 1)), 7);
    }
}
