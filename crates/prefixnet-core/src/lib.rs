//! Han-Carlson parallel-prefix network classification
//!
//! Given an operand width N, this crate works out the cell at every
//! (stage, bit) slot of a Han-Carlson carry network:
//!
//! | Cell | Operator | Where |
//! |------|----------|-------|
//! | Black | generate + propagate | odd bits far from the group start |
//! | Grey | generate only | odd bits within one stride of the start |
//! | GreyBottom | generate only | even bits on the last stage |
//! | Pass | wire | everything else |
//!
//! The network has `floor(log2(N)) + 1` stages. Interior stages touch only
//! odd bits; the last stage fixes up the even ones.
//!
//! ```
//! use prefixnet_core::{classify, CellKind};
//!
//! let network = classify(8).unwrap();
//! assert_eq!(network.stage_count(), 4);
//! let top = network.stage(0).unwrap().cell(7).unwrap();
//! assert_eq!(top.annotations[0].kind(), CellKind::Black);
//! assert_eq!(top.annotations[0].target(), Some(6));
//! ```
//!
//! # References
//!
//! - Han, T., & Carlson, D. A. (1987). Fast area-efficient VLSI adders.

pub mod cell;
pub mod config;
pub mod error;
pub mod network;
pub mod rules;
pub mod stats;
pub mod width;

pub use cell::{CellAnnotation, CellKind};
pub use config::{ClassifyConfig, OverlapPolicy};
pub use error::{PrefixError, Result};
pub use network::{classify, classify_with, Cell, PrefixNetwork, Stage};
pub use rules::classify_cell;
pub use stats::NetworkStats;
pub use width::OperandWidth;
