//! Cell annotations
//!
//! A cell annotation records which operator sits at a (stage, bit) slot of
//! the network and which slot of the previous stage it reads from.

use serde::{Deserialize, Serialize};

/// Prefix operator kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellKind {
    /// Full combine, produces generate and propagate
    Black,
    /// Generate-only combine on an odd bit
    Grey,
    /// Generate-only combine folding an even bit into its odd neighbour on the last stage
    GreyBottom,
    /// Forwards the previous stage value unchanged
    Pass,
}

impl CellKind {
    /// Short name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Grey => "grey",
            Self::GreyBottom => "grey_bottom",
            Self::Pass => "pass",
        }
    }

    /// Whether this kind combines two inputs
    pub fn is_combine(&self) -> bool {
        !matches!(self, Self::Pass)
    }
}

/// One classification result for a (stage, position) slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CellAnnotation {
    kind: CellKind,
    /// Bit read from the previous stage, `None` for pass cells
    target: Option<usize>,
    /// Previous stage index, `-1` on the first stage
    source_stage: isize,
}

impl CellAnnotation {
    /// Black cell at `stage` reading `target` from the previous stage
    pub fn black(stage: usize, target: usize) -> Self {
        Self::combine(CellKind::Black, stage, target)
    }

    /// Interior grey cell
    pub fn grey(stage: usize, target: usize) -> Self {
        Self::combine(CellKind::Grey, stage, target)
    }

    /// Last-stage grey cell for an even bit
    pub fn grey_bottom(stage: usize, target: usize) -> Self {
        Self::combine(CellKind::GreyBottom, stage, target)
    }

    /// Pass cell; carries no target
    pub fn pass(stage: usize) -> Self {
        Self {
            kind: CellKind::Pass,
            target: None,
            source_stage: source_of(stage),
        }
    }

    fn combine(kind: CellKind, stage: usize, target: usize) -> Self {
        Self {
            kind,
            target: Some(target),
            source_stage: source_of(stage),
        }
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn target(&self) -> Option<usize> {
        self.target
    }

    pub fn source_stage(&self) -> isize {
        self.source_stage
    }
}

fn source_of(stage: usize) -> isize {
    stage as isize - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_has_no_target() {
        let pass = CellAnnotation::pass(3);
        assert_eq!(pass.kind(), CellKind::Pass);
        assert_eq!(pass.target(), None);
        assert_eq!(pass.source_stage(), 2);
    }

    #[test]
    fn test_first_stage_reads_stage_minus_one() {
        let black = CellAnnotation::black(0, 6);
        assert_eq!(black.source_stage(), -1);
        assert_eq!(black.target(), Some(6));
        assert!(black.kind().is_combine());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(CellKind::GreyBottom.name(), "grey_bottom");
        assert!(!CellKind::Pass.is_combine());
    }
}
