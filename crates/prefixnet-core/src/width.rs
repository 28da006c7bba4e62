//! Operand width and stage arithmetic

use crate::error::{PrefixError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Number of bits in the operands being added. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct OperandWidth(usize);

impl OperandWidth {
    /// Width used when none is given
    pub const DEFAULT: OperandWidth = OperandWidth(8);

    pub fn new(bits: usize) -> Result<Self> {
        if bits == 0 {
            return Err(PrefixError::InvalidInput(bits.to_string()));
        }
        Ok(Self(bits))
    }

    pub fn bits(&self) -> usize {
        self.0
    }

    /// floor(log2(N)) + 1
    pub fn stage_count(&self) -> usize {
        self.0.ilog2() as usize + 1
    }

    /// Index of the fix-up stage
    pub fn bottom_stage(&self) -> usize {
        self.stage_count() - 1
    }
}

impl Default for OperandWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for OperandWidth {
    type Err = PrefixError;

    fn from_str(s: &str) -> Result<Self> {
        let bits = s
            .trim()
            .parse::<usize>()
            .map_err(|_| PrefixError::InvalidInput(s.to_string()))?;
        Self::new(bits)
    }
}

impl fmt::Display for OperandWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
