//! Stage-by-stage network construction

use crate::cell::{CellAnnotation, CellKind};
use crate::config::{ClassifyConfig, OverlapPolicy};
use crate::error::Result;
use crate::rules::classify_cell;
use crate::stats::NetworkStats;
use crate::width::OperandWidth;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, trace};

/// Annotations for one bit of one stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub position: usize,
    pub annotations: Vec<CellAnnotation>,
}

impl Cell {
    /// Whether any annotation of the given kind is present
    pub fn has(&self, kind: CellKind) -> bool {
        self.annotations.iter().any(|a| a.kind() == kind)
    }
}

/// One layer of the network, cells ordered from the top bit down to bit 0
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stage {
    pub index: usize,
    pub cells: Vec<Cell>,
}

impl Stage {
    /// Look up the cell for bit `position`
    pub fn cell(&self, position: usize) -> Option<&Cell> {
        // cells run N-1..=0
        let offset = self.cells.len().checked_sub(position + 1)?;
        self.cells.get(offset)
    }
}

/// A classified Han-Carlson network
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrefixNetwork {
    pub width: OperandWidth,
    pub policy: OverlapPolicy,
    pub stages: Vec<Stage>,
}

impl PrefixNetwork {
    pub fn stage(&self, index: usize) -> Option<&Stage> {
        self.stages.get(index)
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Every (stage, position, annotation) triple in presentation order
    pub fn annotations(&self) -> impl Iterator<Item = (usize, usize, &CellAnnotation)> + '_ {
        self.stages.iter().flat_map(|stage| {
            stage.cells.iter().flat_map(move |cell| {
                cell.annotations
                    .iter()
                    .map(move |a| (stage.index, cell.position, a))
            })
        })
    }

    pub fn stats(&self) -> NetworkStats {
        NetworkStats::collect(self)
    }
}

/// Classify a `bits`-wide network with the default configuration
pub fn classify(bits: usize) -> Result<PrefixNetwork> {
    let width = OperandWidth::new(bits)?;
    Ok(classify_with(width, &ClassifyConfig::default()))
}

/// Classify every stage of `width`
pub fn classify_with(width: OperandWidth, config: &ClassifyConfig) -> PrefixNetwork {
    let stage_count = width.stage_count();
    debug!(
        "Classifying {}-bit network: {} stages, policy {}",
        width, stage_count, config.policy
    );

    let stages: Vec<Stage> = if config.parallel {
        (0..stage_count)
            .into_par_iter()
            .map(|index| classify_stage(width, index, config.policy))
            .collect()
    } else {
        (0..stage_count)
            .map(|index| classify_stage(width, index, config.policy))
            .collect()
    };

    PrefixNetwork {
        width,
        policy: config.policy,
        stages,
    }
}

fn classify_stage(width: OperandWidth, index: usize, policy: OverlapPolicy) -> Stage {
    let cells: Vec<Cell> = (0..width.bits())
        .rev()
        .map(|position| Cell {
            position,
            annotations: policy.apply(classify_cell(width, index, position)),
        })
        .collect();

    trace!(
        "Stage {}: {} combine cells",
        index,
        cells
            .iter()
            .flat_map(|c| &c.annotations)
            .filter(|a| a.kind().is_combine())
            .count()
    );

    Stage { index, cells }
}
