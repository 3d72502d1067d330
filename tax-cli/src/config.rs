//! Settings file.
//!
//! ```toml
//! [profile]
//! age = 30
//! regime = "old"
//!
//! [logging]
//! level = "warn"
//! file = "tax-estimator.log"
//!
//! [categories]
//! section_80c = "80c|lic|ppf"
//! section_80d = "health|medic"
//! ```
//!
//! Every section and key is optional. Command-line flags override these
//! values.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tax_core::{DEFAULT_AGE, Regime};
use tax_data::CategoryRules;
use tax_data::categorize::{DEFAULT_80C_PATTERN, DEFAULT_80D_PATTERN};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "tax-estimator.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub profile: ProfileSection,
    pub logging: LoggingSection,
    pub categories: CategorySection,
}

/// Taxpayer defaults used when a command does not specify them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSection {
    pub age: u32,
    pub regime: Regime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Bare level or full `EnvFilter` directive. `RUST_LOG` wins when set.
    pub level: String,
    /// Log file, appended to. No file logging when absent.
    pub file: Option<PathBuf>,
}

/// Statement categorisation patterns, case-insensitive regular expressions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategorySection {
    pub section_80c: String,
    pub section_80d: String,
}

impl Default for ProfileSection {
    fn default() -> Self {
        Self {
            age: DEFAULT_AGE,
            regime: Regime::New,
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

impl Default for CategorySection {
    fn default() -> Self {
        Self {
            section_80c: DEFAULT_80C_PATTERN.to_string(),
            section_80d: DEFAULT_80D_PATTERN.to_string(),
        }
    }
}

impl Settings {
    pub fn from_toml(s: &str) -> Result<Self> {
        toml::from_str(s).context("parse settings")
    }

    /// Reads `path`, which must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Self::from_toml(&s).with_context(|| format!("in {}", path.display()))
    }

    /// Reads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn category_rules(&self) -> Result<CategoryRules> {
        CategoryRules::new(&self.categories.section_80c, &self.categories.section_80d)
            .context("compile category patterns")
    }
}
