//! Drunken-bishop "randomart" fingerprints, as popularized by OpenSSH.
//!
//! A [`Board`] walks a byte sequence into a grid of visit counters, and a
//! [`TileSet`] maps those counters to glyphs when the board is rendered.

pub mod art;
pub mod config;
pub mod error;
pub mod input;

pub use art::{armor, Board, Position, TileSet, BUNDLED, GALAXY_TILES, SSH_TILES};
pub use error::{Error, Result};
