//! Classifier configuration

use crate::cell::CellAnnotation;
use crate::error::PrefixError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What to do when a slot matches more than one rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapPolicy {
    /// Keep every matching annotation
    #[default]
    All,
    /// Keep only the first match, Black > Grey > GreyBottom > Pass
    Priority,
}

impl OverlapPolicy {
    /// Filter annotations produced in rule order
    pub fn apply(&self, mut annotations: Vec<CellAnnotation>) -> Vec<CellAnnotation> {
        if *self == Self::Priority {
            annotations.truncate(1);
        }
        annotations
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Priority => "priority",
        }
    }
}

impl FromStr for OverlapPolicy {
    type Err = PrefixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "priority" => Ok(Self::Priority),
            _ => Err(PrefixError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for OverlapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for network classification
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifyConfig {
    /// Overlap resolution
    pub policy: OverlapPolicy,
    /// Classify stages on the rayon pool
    pub parallel: bool,
}

impl ClassifyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set overlap policy
    pub fn with_policy(mut self, policy: OverlapPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enable parallel stage classification
    pub fn with_parallel(mut self) -> Self {
        self.parallel = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_keeps_first() {
        let annotations = vec![CellAnnotation::grey(3, 3), CellAnnotation::pass(3)];
        assert_eq!(
            OverlapPolicy::Priority.apply(annotations.clone()),
            vec![CellAnnotation::grey(3, 3)]
        );
        assert_eq!(OverlapPolicy::All.apply(annotations.clone()), annotations);
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("all".parse::<OverlapPolicy>().unwrap(), OverlapPolicy::All);
        assert_eq!(
            "Priority".parse::<OverlapPolicy>().unwrap(),
            OverlapPolicy::Priority
        );
        assert_eq!(
            "first".parse::<OverlapPolicy>(),
            Err(PrefixError::UnknownPolicy("first".to_string()))
        );
    }

    #[test]
    fn test_config_builder() {
        let config = ClassifyConfig::new()
            .with_policy(OverlapPolicy::Priority)
            .with_parallel();
        assert_eq!(config.policy, OverlapPolicy::Priority);
        assert!(config.parallel);
        assert_eq!(ClassifyConfig::default().policy, OverlapPolicy::All);
    }
}
