//! Board geometry.

/// Returns true if a step from `from` to `to` stays on the board.
///
/// `to` must lie in 0-63. A step that changes file is accepted only when the
/// file delta is at most two: single steps of kings and sliders move one file
/// and knights move at most two, so any larger delta can only come from
/// wrapping around a rank edge.
#[inline]
pub const fn stays_on_board(from: i32, to: i32) -> bool {
    if to < 0 || to > 63 {
        return false;
    }
    let from_file = from % 8;
    let to_file = to % 8;
    (from_file - to_file).abs() <= 2
}
