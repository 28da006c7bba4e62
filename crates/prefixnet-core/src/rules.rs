//! Han-Carlson cell rules
//!
//! Interior stages only combine odd bits, Kogge-Stone style, with a stride of
//! `2^j`. The last stage folds every even bit into its odd neighbour with one
//! grey cell. The four rules are checked independently, so a slot may match
//! more than one; they are emitted in the order Black, Grey, GreyBottom, Pass.

use crate::cell::CellAnnotation;
use crate::width::OperandWidth;

/// Stride of stage `j`, saturating for stages past the word size
pub fn stride(stage: usize) -> usize {
    u32::try_from(stage)
        .ok()
        .and_then(|s| 1usize.checked_shl(s))
        .unwrap_or(usize::MAX)
}

/// Every annotation that applies to bit `position` at `stage`.
///
/// Depends only on `(width, stage, position)`.
pub fn classify_cell(width: OperandWidth, stage: usize, position: usize) -> Vec<CellAnnotation> {
    let halfpow = stride(stage);
    let bottom = stage == width.bottom_stage();
    let odd = position % 2 == 1;
    // Odd bits seen so far, counting this one
    let group = (position + 1) / 2;

    let mut annotations = Vec::with_capacity(2);

    if odd && group > halfpow {
        annotations.push(CellAnnotation::black(stage, position - halfpow));
    }

    if odd && group <= halfpow && position >= halfpow {
        annotations.push(CellAnnotation::grey(stage, position - halfpow));
    }

    if bottom && !odd && position > 0 {
        annotations.push(CellAnnotation::grey_bottom(stage, position - 1));
    }

    let interior_pass = !bottom && (position < halfpow || !odd);
    let bottom_pass = bottom && (odd || position == 0);
    if interior_pass || bottom_pass {
        annotations.push(CellAnnotation::pass(stage));
    }

    annotations
}
