use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::core::{ChainRangeSpec, DesignedChains, FixPosError, FixedPositionResolver, Mode};

/// Run parameters.
///
/// Could be loaded from a TOML file like
/// ```toml
/// ranges = "A:1-350,360-370;B:*"
/// designed_chains = "A B"
/// mode = "designable"
/// ```
/// All fields are optional, explicit values given later take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixPosParams {
    pub ranges: Option<String>,
    pub designed_chains: Option<String>,
    pub mode: Option<Mode>,
}

impl FixPosParams {
    pub fn from_toml(s: &str) -> Result<Self, FixPosError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FixPosError> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| FixPosError::Io(path.to_owned(), e))?;
        info!("Parameters loaded from '{}'", path.display());
        Self::from_toml(&s)
    }

    /// Values set in `other` replace ours
    pub fn merge(self, other: FixPosParams) -> Self {
        Self {
            ranges: other.ranges.or(self.ranges),
            designed_chains: other.designed_chains.or(self.designed_chains),
            mode: other.mode.or(self.mode),
        }
    }

    /// Validates parameters and builds the resolver
    pub fn into_resolver(self) -> Result<FixedPositionResolver, FixPosError> {
        let designed = DesignedChains::parse(self.designed_chains.as_deref().unwrap_or_default())?;
        let spec = ChainRangeSpec::parse(self.ranges.as_deref().unwrap_or_default())?;
        let mode = self.mode.unwrap_or_default();
        info!("Mode: {mode}, {} designed chain(s), ranges for {} chain(s)", designed.len(), spec.len());
        FixedPositionResolver::new(spec, designed, mode)
    }
}
