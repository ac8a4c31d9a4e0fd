use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Toggles controlling which differences a comparison treats as cosmetic.
///
/// Every toggle is independent. The policy is passed by value into each
/// comparison and never changes while one is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationPolicy {
    /// Elide lines that consist entirely of a comment.
    pub ignore_comments: bool,
    /// Fold every identifier outside the preserved word list.
    pub ignore_variable_names: bool,
    /// Fold identifiers used as call or definition names (`name(`).
    pub ignore_function_names: bool,
    /// Fold identifiers introduced by `struct`, `enum`, `union` or `typedef`.
    pub ignore_type_names: bool,
    pub ignore_string_literals: bool,
    pub ignore_numeric_literals: bool,
    /// Elide preprocessor directive lines (`#include`, `#define`, ...).
    pub ignore_preprocessor: bool,
    /// Order-independent function comparison. Accepted so callers can carry
    /// it around, but line normalization never reorders anything.
    pub function_sorting: bool,
}

impl NormalizationPolicy {
    pub fn strict() -> Self {
        Self::default()
    }

    pub fn balanced() -> Self {
        Self {
            ignore_comments: true,
            ignore_preprocessor: true,
            ..Self::default()
        }
    }

    pub fn smart() -> Self {
        Self {
            ignore_variable_names: true,
            ..Self::balanced()
        }
    }

    /// Whether any toggle requires a token-level pass over the line.
    pub fn folds_tokens(&self) -> bool {
        self.ignore_variable_names
            || self.ignore_function_names
            || self.ignore_type_names
            || self.ignore_string_literals
            || self.ignore_numeric_literals
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        toml::from_str(content).context("invalid normalization policy")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read policy file {}", path.display()))?;
        let policy = Self::from_toml_str(&content)
            .with_context(|| format!("failed to parse policy file {}", path.display()))?;

        log::info!("loaded normalization policy from {}", path.display());
        Ok(policy)
    }
}

/// Named presets mirroring the grading sensitivity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SensitivityMode {
    /// Comments, preprocessor lines and identifier names are ignored.
    #[default]
    Smart,
    /// Comments and preprocessor lines are ignored, names are significant.
    Balanced,
    /// Every character is significant.
    Strict,
    /// Start from nothing; only explicitly requested toggles apply.
    Custom,
}

impl SensitivityMode {
    pub fn policy(&self) -> NormalizationPolicy {
        match self {
            SensitivityMode::Smart => NormalizationPolicy::smart(),
            SensitivityMode::Balanced => NormalizationPolicy::balanced(),
            SensitivityMode::Strict | SensitivityMode::Custom => NormalizationPolicy::strict(),
        }
    }
}
