//! Shape table - tetromino masks and rotation
//!
//! Each of the 7 kinds has a hard-coded 4x4 occupancy mask in its base
//! orientation. Rotation is a naive full-grid clockwise transform applied
//! uniformly to every kind; there is no wall-kick or SRS offset system, so
//! the 4x4 bounding box is always preserved.

use crate::types::PieceKind;

/// 4x4 occupancy mask, indexed as `mask[row][col]`
pub type ShapeMask = [[bool; 4]; 4];

const O: bool = false;
const X: bool = true;

const I_MASK: ShapeMask = [
    [O, O, O, O],
    [X, X, X, X],
    [O, O, O, O],
    [O, O, O, O],
];

const O_MASK: ShapeMask = [
    [O, X, X, O],
    [O, X, X, O],
    [O, O, O, O],
    [O, O, O, O],
];

const T_MASK: ShapeMask = [
    [O, X, O, O],
    [X, X, X, O],
    [O, O, O, O],
    [O, O, O, O],
];

const S_MASK: ShapeMask = [
    [O, X, X, O],
    [X, X, O, O],
    [O, O, O, O],
    [O, O, O, O],
];

const Z_MASK: ShapeMask = [
    [X, X, O, O],
    [O, X, X, O],
    [O, O, O, O],
    [O, O, O, O],
];

const J_MASK: ShapeMask = [
    [X, O, O, O],
    [X, X, X, O],
    [O, O, O, O],
    [O, O, O, O],
];

const L_MASK: ShapeMask = [
    [O, O, X, O],
    [X, X, X, O],
    [O, O, O, O],
    [O, O, O, O],
];

/// Get the base-orientation mask for a piece kind
pub fn base_mask(kind: PieceKind) -> ShapeMask {
    match kind {
        PieceKind::I => I_MASK,
        PieceKind::O => O_MASK,
        PieceKind::T => T_MASK,
        PieceKind::S => S_MASK,
        PieceKind::Z => Z_MASK,
        PieceKind::J => J_MASK,
        PieceKind::L => L_MASK,
    }
}

/// Rotate a mask 90 degrees clockwise.
///
/// Output row `r` is read off the input's column `r`, bottom row first:
/// `rotated[r][c] = mask[3 - c][r]`.
pub fn rotate_cw(mask: &ShapeMask) -> ShapeMask {
    let mut out = [[false; 4]; 4];
    for (r, row) in out.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = mask[3 - c][r];
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell_count(mask: &ShapeMask) -> usize {
        mask.iter().flatten().filter(|&&b| b).count()
    }

    #[test]
    fn test_every_mask_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(cell_count(&base_mask(kind)), 4, "kind {:?}", kind);
        }
    }

    #[test]
    fn test_rotate_four_times_is_identity() {
        for kind in PieceKind::ALL {
            let original = base_mask(kind);
            let mut mask = original;
            for _ in 0..4 {
                mask = rotate_cw(&mask);
            }
            assert_eq!(mask, original, "kind {:?}", kind);
        }
    }

    #[test]
    fn test_rotate_preserves_cell_count() {
        for kind in PieceKind::ALL {
            let rotated = rotate_cw(&base_mask(kind));
            assert_eq!(cell_count(&rotated), 4, "kind {:?}", kind);
        }
    }

    #[test]
    fn test_rotate_i_mask() {
        // Horizontal bar on row 1 becomes a vertical bar on column 2.
        let rotated = rotate_cw(&base_mask(PieceKind::I));
        for r in 0..4 {
            for c in 0..4 {
                assert_eq!(rotated[r][c], c == 2, "({}, {})", r, c);
            }
        }
    }

    #[test]
    fn test_o_mask_rotation_invariant() {
        let mask = base_mask(PieceKind::O);
        assert_eq!(rotate_cw(&mask), mask);
    }
}
