pub mod board;
pub mod groups;
pub mod same;
