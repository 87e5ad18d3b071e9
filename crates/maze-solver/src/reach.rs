use maze_core::Grid;

use crate::arrow::Arrow;

/// Whether no open cell of a flooded maze was left [`Arrow::Unreached`].
///
/// A maze without open cells is trivially reachable.
pub fn is_reachable(arrows: &Grid<Arrow>) -> bool {
    !arrows.as_slice().contains(&Arrow::Unreached)
}
