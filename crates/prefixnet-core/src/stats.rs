//! Cell counts for a classified network

use crate::cell::CellKind;
use crate::network::PrefixNetwork;
use serde::Serialize;

/// Statistics for a classified network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NetworkStats {
    /// Operand width in bits
    pub width: usize,
    /// Number of stages
    pub stages: usize,
    /// Black cells
    pub black: usize,
    /// Interior grey cells
    pub grey: usize,
    /// Bottom-stage grey cells
    pub grey_bottom: usize,
    /// Pass cells
    pub pass: usize,
}

impl NetworkStats {
    pub fn collect(network: &PrefixNetwork) -> Self {
        let mut stats = Self {
            width: network.width.bits(),
            stages: network.stage_count(),
            ..Default::default()
        };
        for (_, _, annotation) in network.annotations() {
            stats.record(annotation.kind());
        }
        stats
    }

    fn record(&mut self, kind: CellKind) {
        match kind {
            CellKind::Black => self.black += 1,
            CellKind::Grey => self.grey += 1,
            CellKind::GreyBottom => self.grey_bottom += 1,
            CellKind::Pass => self.pass += 1,
        }
    }

    /// Black and grey cells together
    pub fn combine_cells(&self) -> usize {
        self.black + self.grey + self.grey_bottom
    }

    /// Get summary string
    pub fn summary(&self) -> String {
        format!(
            "{} black, {} grey, {} pass ({} combine cells)",
            self.black,
            self.grey + self.grey_bottom,
            self.pass,
            self.combine_cells()
        )
    }
}
