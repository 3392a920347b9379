pub mod board;
pub mod escape;
pub mod numberer;
pub mod partition;
pub mod union_find;
pub mod wasm;

pub use board::{Board, BoardKind, Coordinate, Marble, Ring};
pub use partition::{Partition, UnionOutcome, UnionScript};
pub use union_find::{DisjointSet, DisjointSetError, GroupId};
