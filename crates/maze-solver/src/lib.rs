//! Maze analysis for grid mazes.
//!
//! This crate floods a maze from all of its goals at once and answers, for
//! every open cell, how far the nearest goal is and which way to step to get
//! there:
//!
//! - **Flood fill** ([`analyze`], [`FloodFill`]): distances and direction
//!   labels ([`Arrow`]) for the whole maze
//! - **Paths** ([`reconstruct_path`], [`Analysis::path`]): follow the labels
//!   from any cell to its goal
//! - **Line masks** ([`encode_paths`], [`LineEncoder`]): merge many paths into
//!   one drawable network of [`Segments`]
//! - **Reachability** ([`is_reachable`]): whether every open cell reaches a
//!   goal
//!
//! Every operation is a synchronous computation over grids owned by the
//! caller; nothing is shared between calls.

mod arrow;
mod error;
mod flood;
mod liner;
mod neighbors;
mod path;
mod reach;
#[cfg(test)]
mod testutil;

pub use arrow::{Arrow, Heading};
pub use error::MazeError;
pub use flood::{Analysis, FloodFill, UNKNOWN, analyze};
pub use liner::{LineEncoder, Segments, encode_paths, encode_paths_into};
pub use path::reconstruct_path;
pub use reach::is_reachable;
