use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub type Score = f64;

/// Measured values keyed by dimension, then by criterion key.
pub type Dataset = BTreeMap<Dimension, BTreeMap<String, f64>>;

/// Upper bound (inclusive) of the low risk band.
pub const LOW_RISK_MAX: Score = 1.5;
/// Upper bound (inclusive) of the medium risk band.
pub const MEDIUM_RISK_MAX: Score = 2.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Defects,
    Performance,
    Security,
    Experience,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Defects,
        Dimension::Performance,
        Dimension::Security,
        Dimension::Experience,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Dimension::Defects => "defects",
            Dimension::Performance => "performance",
            Dimension::Security => "security",
            Dimension::Experience => "experience",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::Defects => "Defects",
            Dimension::Performance => "Performance",
            Dimension::Security => "Security",
            Dimension::Experience => "Experience",
        }
    }

    /// Accepts either the key or the label, ignoring case and surrounding space.
    pub fn parse(name: &str) -> Option<Dimension> {
        let needle = name.trim();
        Self::ALL.into_iter().find(|dimension| {
            dimension.key().eq_ignore_ascii_case(needle)
                || dimension.label().eq_ignore_ascii_case(needle)
        })
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Risk tier of a single criterion. Lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Tier {
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn value(self) -> Score {
        Score::from(self.rank())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "low risk")]
    Low,
    #[serde(rename = "medium risk")]
    Medium,
    #[serde(rename = "high risk")]
    High,
}

impl RiskLevel {
    pub fn from_total(total: Score) -> Self {
        if total <= LOW_RISK_MAX {
            RiskLevel::Low
        } else if total <= MEDIUM_RISK_MAX {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low risk",
            RiskLevel::Medium => "medium risk",
            RiskLevel::High => "high risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskScore {
    pub total: Score,
    pub level: RiskLevel,
    pub dimensions: BTreeMap<Dimension, Score>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_bands_are_inclusive_at_upper_bound() {
        assert_eq!(RiskLevel::from_total(1.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_total(1.5), RiskLevel::Low);
        assert_eq!(RiskLevel::from_total(1.500_001), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_total(2.2), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_total(2.200_001), RiskLevel::High);
        assert_eq!(RiskLevel::from_total(0.0), RiskLevel::Low);
    }

    #[test]
    fn dimension_parse_accepts_keys_and_labels() {
        assert_eq!(Dimension::parse("security"), Some(Dimension::Security));
        assert_eq!(Dimension::parse(" Experience "), Some(Dimension::Experience));
        assert_eq!(Dimension::parse("DEFECTS"), Some(Dimension::Defects));
        assert_eq!(Dimension::parse("bugs"), None);
    }

    #[test]
    fn risk_level_serializes_as_label() {
        let rendered = serde_json::to_string(&RiskLevel::Medium).expect("level should serialize");
        assert_eq!(rendered, "\"medium risk\"");
    }

    #[test]
    fn tier_values_follow_rank() {
        assert_eq!(Tier::Low.rank(), 1);
        assert_eq!(Tier::High.value(), 3.0);
    }
}
