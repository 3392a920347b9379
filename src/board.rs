use crate::union_find::{DisjointSet, DisjointSetError};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    fmt::{self, Display},
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("{0} is outside the board")]
    OutOfBoard(Coordinate),
    #[error("There is no ring at {0}")]
    NoRing(Coordinate),
    #[error("The ring at {0} already holds a marble")]
    Occupied(Coordinate),
    #[error("The ring at {0} holds no marble")]
    NotOccupied(Coordinate),
    #[error("Invalid board size was given. Only [37, 61] are possible. got = {0}")]
    InvalidBoardSize(usize),
}

#[derive(Error, Debug)]
pub enum FromJsonError {
    #[error("From Json Error: {0}")]
    SyntaxError(#[from] serde_json::error::Error),
    #[error("Invalid board: {0}")]
    InvalidBoard(#[from] BoardError),
    #[error("Ring {0} is listed twice")]
    DuplicateRing(Coordinate),
}

/// Axial position on the grid. Row `y + 1` sits half a cell to the left of row `y`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}
impl Coordinate {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}
impl Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Regular hexagonal layouts, named by their ring count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardKind {
    #[default]
    Rings37,
    Rings61,
}
impl BoardKind {
    /// Rings along one edge of the hexagon.
    pub fn side(self) -> usize {
        match self {
            Self::Rings37 => 4,
            Self::Rings61 => 5,
        }
    }
    /// Side of the square grid the board is drawn on.
    pub fn grid(self) -> usize {
        2 * self.side() - 1
    }
    pub fn rings(self) -> usize {
        let side = self.side();
        3 * side * (side - 1) + 1
    }
}
impl TryFrom<usize> for BoardKind {
    type Error = BoardError;
    fn try_from(rings: usize) -> Result<Self, Self::Error> {
        match rings {
            37 => Ok(Self::Rings37),
            61 => Ok(Self::Rings61),
            rings => Err(BoardError::InvalidBoardSize(rings)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marble {
    White,
    Gray,
    Black,
}
impl Marble {
    fn symbol(self) -> char {
        match self {
            Self::White => 'W',
            Self::Gray => 'G',
            Self::Black => 'B',
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Ring {
    /// No ring: never placed, or removed.
    Empty,
    #[default]
    Vacant,
    Occupied(Marble),
}
impl Ring {
    fn symbol(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Vacant => 'O',
            Self::Occupied(marble) => marble.symbol(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    kind: BoardKind,
    data: Vec<Ring>,
}
impl Board {
    /// The standard 37-ring board.
    pub fn new() -> Self {
        Self::with_kind(BoardKind::Rings37)
    }
    /// A full board of the given layout, every ring vacant.
    pub fn with_kind(kind: BoardKind) -> Self {
        let mut board = Self::empty(kind);
        let reach = kind.side() - 1;
        for y in 0..kind.grid() {
            for x in 0..kind.grid() {
                if y <= x + reach && x <= y + reach {
                    let offset = board.offset(Coordinate::new(x, y));
                    board.data[offset] = Ring::Vacant;
                }
            }
        }
        board
    }
    fn empty(kind: BoardKind) -> Self {
        Self {
            kind,
            data: vec![Ring::Empty; kind.grid() * kind.grid()],
        }
    }
    pub fn kind(&self) -> BoardKind {
        self.kind
    }
    fn contains(&self, coord: Coordinate) -> bool {
        coord.x < self.kind.grid() && coord.y < self.kind.grid()
    }
    fn offset(&self, coord: Coordinate) -> usize {
        coord.x + self.kind.grid() * coord.y
    }
    /// `None` outside the grid.
    pub fn get(&self, coord: Coordinate) -> Option<Ring> {
        if !self.contains(coord) {
            return None;
        }
        Some(self.data[self.offset(coord)])
    }
    fn get_mut(&mut self, coord: Coordinate) -> Result<&mut Ring, BoardError> {
        if !self.contains(coord) {
            return Err(BoardError::OutOfBoard(coord));
        }
        let offset = self.offset(coord);
        Ok(&mut self.data[offset])
    }
    /// Puts `marble` on the vacant ring at `coord`.
    pub fn place(&mut self, coord: Coordinate, marble: Marble) -> Result<(), BoardError> {
        let ring = self.get_mut(coord)?;
        match *ring {
            Ring::Empty => Err(BoardError::NoRing(coord)),
            Ring::Occupied(_) => Err(BoardError::Occupied(coord)),
            Ring::Vacant => {
                *ring = Ring::Occupied(marble);
                Ok(())
            }
        }
    }
    /// Lifts the marble off the ring at `coord`.
    pub fn take(&mut self, coord: Coordinate) -> Result<Marble, BoardError> {
        let ring = self.get_mut(coord)?;
        match *ring {
            Ring::Empty => Err(BoardError::NoRing(coord)),
            Ring::Vacant => Err(BoardError::NotOccupied(coord)),
            Ring::Occupied(marble) => {
                *ring = Ring::Vacant;
                Ok(marble)
            }
        }
    }
    /// Removes the vacant ring at `coord` from the board.
    pub fn remove_ring(&mut self, coord: Coordinate) -> Result<(), BoardError> {
        let ring = self.get_mut(coord)?;
        match *ring {
            Ring::Empty => Err(BoardError::NoRing(coord)),
            Ring::Occupied(_) => Err(BoardError::Occupied(coord)),
            Ring::Vacant => {
                *ring = Ring::Empty;
                Ok(())
            }
        }
    }
    fn cells(&self) -> impl Iterator<Item = (Coordinate, Ring)> + '_ {
        let grid = self.kind.grid();
        self.data
            .iter()
            .enumerate()
            .map(move |(i, ring)| (Coordinate::new(i % grid, i / grid), *ring))
    }
    /// Coordinates holding a ring, row by row.
    pub fn rings(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells()
            .filter(|(_, ring)| *ring != Ring::Empty)
            .map(|(coord, _)| coord)
    }
    pub fn ring_count(&self) -> usize {
        self.rings().count()
    }
    pub fn marbles(&self) -> impl Iterator<Item = (Coordinate, Marble)> + '_ {
        self.cells().filter_map(|(coord, ring)| match ring {
            Ring::Occupied(marble) => Some((coord, marble)),
            _ => None,
        })
    }
    /// A disjoint set with every ring as its own group.
    pub fn ring_set(&self) -> Result<DisjointSet<Coordinate>, DisjointSetError> {
        DisjointSet::new(self.rings())
    }
    pub fn to_json(&self) -> String {
        BoardJson::from(self).to_json()
    }
    pub fn from_json(json: &str) -> Result<Self, FromJsonError> {
        Self::try_from(BoardJson::from_json(json)?)
    }
}
impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = self.kind.grid();
        for y in (0..grid).rev() {
            let mut line = " ".repeat(grid - 1 - y);
            for x in 0..grid {
                line.push(self.data[self.offset(Coordinate::new(x, y))].symbol());
                line.push(' ');
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingJson {
    pub x: usize,
    pub y: usize,
    #[serde(default)]
    pub marble: Option<Marble>,
}

/// Rings still on the board. Unlisted cells have no ring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardJson {
    #[serde(default)]
    pub kind: BoardKind,
    pub rings: Vec<RingJson>,
}
impl BoardJson {
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap()
    }
    pub fn from_json(json: &str) -> Result<Self, FromJsonError> {
        serde_json::from_str(json).map_err(FromJsonError::SyntaxError)
    }
}
impl From<&Board> for BoardJson {
    fn from(board: &Board) -> Self {
        let rings = board
            .cells()
            .filter_map(|(coord, ring)| {
                let marble = match ring {
                    Ring::Empty => return None,
                    Ring::Vacant => None,
                    Ring::Occupied(marble) => Some(marble),
                };
                Some(RingJson {
                    x: coord.x,
                    y: coord.y,
                    marble,
                })
            })
            .collect();
        Self {
            kind: board.kind,
            rings,
        }
    }
}
impl TryFrom<BoardJson> for Board {
    type Error = FromJsonError;
    fn try_from(json: BoardJson) -> Result<Self, Self::Error> {
        let mut board = Self::empty(json.kind);
        let mut seen = HashSet::new();
        for ring in json.rings {
            let coord = Coordinate::new(ring.x, ring.y);
            if !seen.insert(coord) {
                return Err(FromJsonError::DuplicateRing(coord));
            }
            *board.get_mut(coord)? = match ring.marble {
                Some(marble) => Ring::Occupied(marble),
                None => Ring::Vacant,
            };
        }
        Ok(board)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const STANDARD: &str = "      O O O O
     O O O O O
    O O O O O O
   O O O O O O O
    O O O O O O
     O O O O O
      O O O O
";

    #[test]
    fn standard_board_test() {
        let board = Board::new();
        assert_eq!(board.ring_count(), 37);
        assert_eq!(board.get(Coordinate::new(0, 0)), Some(Ring::Vacant));
        assert_eq!(board.get(Coordinate::new(4, 0)), Some(Ring::Empty));
        assert_eq!(board.get(Coordinate::new(0, 4)), Some(Ring::Empty));
        assert_eq!(board.get(Coordinate::new(6, 6)), Some(Ring::Vacant));
        assert_eq!(board.get(Coordinate::new(7, 0)), None);
        assert_eq!(board.to_string(), STANDARD);
        assert_eq!(
            board.rings().take(5).collect::<Vec<_>>(),
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(1, 0),
                Coordinate::new(2, 0),
                Coordinate::new(3, 0),
                Coordinate::new(0, 1),
            ]
        );
    }

    #[test]
    fn large_board_test() {
        let mut board = Board::with_kind(BoardKind::try_from(61).unwrap());
        assert_eq!(board.kind(), BoardKind::Rings61);
        assert_eq!(board.ring_count(), 61);
        assert_eq!(board.ring_count(), BoardKind::Rings61.rings());
        assert_eq!(board.get(Coordinate::new(8, 8)), Some(Ring::Vacant));
        assert_eq!(board.get(Coordinate::new(5, 0)), Some(Ring::Empty));
        assert_eq!(board.get(Coordinate::new(9, 0)), None);
        board.place(Coordinate::new(7, 0), Marble::White).unwrap_err();
        board.place(Coordinate::new(8, 4), Marble::White).unwrap();
        let text = board.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "        O O O O O");
        assert_eq!(lines[4], "    O O O O O O O O W");
        assert_eq!(lines[8], "        O O O O O");
        assert_eq!(board.ring_set().unwrap().len(), 61);
    }

    #[test]
    fn board_kind_test() {
        assert_eq!(BoardKind::try_from(37), Ok(BoardKind::Rings37));
        assert_eq!(BoardKind::Rings37.rings(), 37);
        assert_eq!(BoardKind::Rings37.grid(), 7);
        assert_eq!(
            BoardKind::try_from(40),
            Err(BoardError::InvalidBoardSize(40))
        );
        assert_eq!(Board::default().kind(), BoardKind::Rings37);
    }

    #[test]
    fn marble_test() {
        let mut board = Board::new();
        let at = Coordinate::new(3, 3);
        board.place(at, Marble::Gray).unwrap();
        assert_eq!(board.get(at), Some(Ring::Occupied(Marble::Gray)));
        assert_eq!(board.place(at, Marble::White), Err(BoardError::Occupied(at)));
        assert_eq!(board.remove_ring(at), Err(BoardError::Occupied(at)));
        assert_eq!(board.marbles().collect::<Vec<_>>(), vec![(at, Marble::Gray)]);
        assert_eq!(board.take(at), Ok(Marble::Gray));
        assert_eq!(board.take(at), Err(BoardError::NotOccupied(at)));
        assert_eq!(board.marbles().count(), 0);
    }

    #[test]
    fn remove_ring_test() {
        let mut board = Board::new();
        let at = Coordinate::new(0, 0);
        board.remove_ring(at).unwrap();
        assert_eq!(board.ring_count(), 36);
        assert_eq!(board.remove_ring(at), Err(BoardError::NoRing(at)));
        assert_eq!(board.place(at, Marble::Black), Err(BoardError::NoRing(at)));
        let outside = Coordinate::new(0, 9);
        assert_eq!(
            board.place(outside, Marble::Black),
            Err(BoardError::OutOfBoard(outside))
        );
        assert_eq!(
            board.to_string().lines().last(),
            Some("        O O O")
        );
    }

    #[test]
    fn text_test() {
        let mut board = Board::new();
        board.place(Coordinate::new(3, 6), Marble::White).unwrap();
        board.place(Coordinate::new(6, 3), Marble::Black).unwrap();
        board.place(Coordinate::new(0, 0), Marble::Gray).unwrap();
        let text = board.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "      W O O O");
        assert_eq!(lines[3], "   O O O O O O B");
        assert_eq!(lines[6], "      G O O O");
    }

    #[test]
    fn ring_set_test() {
        let mut board = Board::new();
        board.remove_ring(Coordinate::new(3, 3)).unwrap();
        let mut set = board.ring_set().unwrap();
        assert_eq!(set.len(), 36);
        assert_eq!(set.find(&Coordinate::new(3, 3)), None);
        assert!(set.union(&Coordinate::new(0, 0), &Coordinate::new(1, 0)));
        assert!(set.same(&Coordinate::new(1, 0), &Coordinate::new(0, 0)));
        assert_eq!(set.group_count(), 35);
    }

    #[test]
    fn json_test() {
        let mut board = Board::new();
        board.place(Coordinate::new(2, 1), Marble::White).unwrap();
        board.remove_ring(Coordinate::new(6, 6)).unwrap();
        let json = board.to_json();
        assert_eq!(Board::from_json(&json).unwrap(), board);

        let mut large = Board::with_kind(BoardKind::Rings61);
        large.remove_ring(Coordinate::new(8, 8)).unwrap();
        assert_eq!(Board::from_json(&large.to_json()).unwrap(), large);

        let small = Board::from_json(r#"{"rings": [{"x": 1, "y": 2, "marble": "black"}, {"x": 2, "y": 2}]}"#)
            .unwrap();
        assert_eq!(small.kind(), BoardKind::Rings37);
        assert_eq!(small.ring_count(), 2);
        assert_eq!(
            small.get(Coordinate::new(1, 2)),
            Some(Ring::Occupied(Marble::Black))
        );
        assert_eq!(small.get(Coordinate::new(2, 2)), Some(Ring::Vacant));
    }

    #[test]
    fn demo_board_test() {
        let board = Board::from_json(include_str!("../demos/endgame.json")).unwrap();
        assert_eq!(board.ring_count(), 7);
        assert_eq!(board.marbles().count(), 4);
        let mut set = board.ring_set().unwrap();
        assert_eq!(set.group_count(), 7);
        assert!(set.union(&Coordinate::new(3, 3), &Coordinate::new(4, 4)));
        assert!(!set.union(&Coordinate::new(3, 3), &Coordinate::new(5, 5)));
    }

    #[test]
    fn invalid_json_test() {
        assert!(matches!(
            Board::from_json(r#"{"rings": [{"x": 8, "y": 0}]}"#),
            Err(FromJsonError::InvalidBoard(BoardError::OutOfBoard(_)))
        ));
        assert!(Board::from_json(r#"{"kind": "Rings61", "rings": [{"x": 8, "y": 0}]}"#).is_ok());
        assert!(matches!(
            Board::from_json(r#"{"rings": [{"x": 1, "y": 1}, {"x": 1, "y": 1}]}"#),
            Err(FromJsonError::DuplicateRing(_))
        ));
        assert!(matches!(
            Board::from_json(r#"{"rings": [{"x": 1, "y": 1, "marble": "red"}]}"#),
            Err(FromJsonError::SyntaxError(_))
        ));
    }
}
