use std::fmt::Write;

use smallvec::SmallVec;

use crate::geometry::Direction;

/// A single recorded slide. Only slides that changed the robot's cell are ever
/// recorded.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub robot: u8,
    pub direction: Direction,
}

impl Move {
    #[inline(always)]
    pub const fn new(robot: usize, direction: Direction) -> Self {
        Move {
            robot: robot as u8,
            direction,
        }
    }
}

/// Ordered move sequence from the initial puzzle state.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct Path {
    moves: SmallVec<[Move; 16]>,
}

impl Path {
    pub fn new() -> Self {
        Path::default()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    #[inline(always)]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[inline(always)]
    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    /// True when the last recorded move slid `robot` the opposite way, so
    /// sliding it in `direction` now would only walk the previous move back.
    #[inline(always)]
    pub fn is_reversal(&self, robot: usize, direction: Direction) -> bool {
        match self.moves.last() {
            Some(last) => last.robot as usize == robot && last.direction == direction.opposite(),
            None => false,
        }
    }

    /// Deterministic dedup key: robot index followed by direction word, per move.
    pub fn key(&self) -> String {
        let mut key = String::with_capacity(self.moves.len() * 6);
        for mv in &self.moves {
            let _ = write!(key, "{}{}", mv.robot, mv.direction.word());
        }
        key
    }
}

impl FromIterator<Move> for Path {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Path {
            moves: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    #[test]
    fn key_concatenates_index_and_direction() {
        let path: Path = [Move::new(0, North), Move::new(12, West)].into_iter().collect();
        assert_eq!(path.key(), "0north12west");
        assert_eq!(Path::new().key(), "");
    }

    #[test]
    fn reversal_only_applies_to_same_robot() {
        let mut path = Path::new();
        assert!(!path.is_reversal(0, South));

        path.push(Move::new(0, North));
        assert!(path.is_reversal(0, South));
        assert!(!path.is_reversal(0, North));
        assert!(!path.is_reversal(1, South));

        path.push(Move::new(1, East));
        assert!(!path.is_reversal(0, South));
        assert!(path.is_reversal(1, West));
    }
}
