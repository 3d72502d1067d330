use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::InputError;

/// The two mutually exclusive schemes an individual can file under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    /// Section 115BAC: lower slabs, standard deduction only.
    #[default]
    New,
    /// Legacy slabs with Chapter VI-A deductions.
    Old,
}

impl Regime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Old => "old",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::New => "New Regime",
            Self::Old => "Old Regime",
        }
    }

    /// The regime a taxpayer would switch to.
    pub fn alternate(&self) -> Self {
        match self {
            Self::New => Self::Old,
            Self::Old => Self::New,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" => Some(Self::New),
            "old" => Some(Self::Old),
            _ => None,
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Regime {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| InputError::UnknownRegime(s.to_string()))
    }
}
