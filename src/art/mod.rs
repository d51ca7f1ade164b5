pub mod board;
pub mod render;
pub mod tiles;

pub use board::{Board, Position};
pub use render::armor;
pub use tiles::{TileSet, BUNDLED, GALAXY_TILES, SSH_TILES};
