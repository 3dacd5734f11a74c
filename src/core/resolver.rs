use std::{collections::HashSet, fmt, str::FromStr};

use log::{debug, info};
use serde::Deserialize;

use super::{ChainRangeSpec, FixPosError, FixedPositionMap, ParsedRange, TargetFixedPositions, TargetRecord};

/// Maximal number of out-of-bounds positions reported in the error
const MAX_REPORTED_BAD: usize = 10;

/// How the parsed ranges of designed chains are interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Ranges are the fixed positions
    #[default]
    KeepFixed,
    /// Ranges are designable, everything else in the chain is fixed
    Designable,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keep_fixed" => Ok(Self::KeepFixed),
            "designable" => Ok(Self::Designable),
            _ => Err(format!("invalid mode '{s}', 'keep_fixed' or 'designable' allowed")),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::KeepFixed => write!(f, "keep_fixed"),
            Self::Designable => write!(f, "designable"),
        }
    }
}

/// Set of chain ids which are going to be designed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignedChains(HashSet<String>);

impl DesignedChains {
    /// Parses a whitespace-separated list like `"A B"`
    pub fn parse(s: &str) -> Result<Self, FixPosError> {
        let set: HashSet<_> = s.split_whitespace().map(str::to_owned).collect();
        if set.is_empty() {
            return Err(FixPosError::EmptyDesignatedChains);
        }
        Ok(Self(set))
    }

    pub fn contains(&self, chain: &str) -> bool {
        self.0.contains(chain)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for DesignedChains {
    type Err = FixPosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Turns target records into fixed positions.
///
/// The chain ranges, the designed chains and the mode are fixed for the
/// whole run, each record is resolved independently.
#[derive(Debug, Clone)]
pub struct FixedPositionResolver {
    spec: ChainRangeSpec,
    designed: DesignedChains,
    mode: Mode,
}

impl FixedPositionResolver {
    /// Creates a resolver. An empty range specification is an error.
    pub fn new(spec: ChainRangeSpec, designed: DesignedChains, mode: Mode) -> Result<Self, FixPosError> {
        if designed.is_empty() {
            return Err(FixPosError::EmptyDesignatedChains);
        }
        if spec.is_empty() {
            return Err(FixPosError::EmptyParsedSpec);
        }
        for (ch, rr) in spec.iter() {
            debug!("Chain {ch}: '{rr}'");
        }
        Ok(Self { spec, designed, mode })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Fixed positions of a single chain
    fn resolve_chain(&self, target: &str, chain: &str, seq: &str) -> Result<Vec<usize>, FixPosError> {
        let len = seq.chars().count();
        if len == 0 {
            return Err(FixPosError::EmptySequence {
                target: target.to_owned(),
                chain: chain.to_owned(),
            });
        }

        // Non-designed chains are left empty, they are fixed entirely downstream
        if !self.designed.contains(chain) {
            return Ok(vec![]);
        }

        let rr = self
            .spec
            .get(chain)
            .ok_or_else(|| FixPosError::MissingRangeForDesignedChain {
                target: target.to_owned(),
                chain: chain.to_owned(),
            })?;

        let chosen = match ParsedRange::parse(rr)? {
            // Whole chain is designed in both modes
            ParsedRange::Wildcard => return Ok(vec![]),
            ParsedRange::Positions(spans) => spans,
        };

        // Spans are checked before expanding, they could be arbitrarily long
        let bad: Vec<usize> = chosen
            .iter_out_of_bounds(len)
            .take(MAX_REPORTED_BAD)
            .collect();
        if !bad.is_empty() {
            return Err(FixPosError::PositionOutOfBounds {
                target: target.to_owned(),
                chain: chain.to_owned(),
                len,
                bad,
            });
        }

        Ok(match self.mode {
            Mode::KeepFixed => chosen.iter().collect(),
            Mode::Designable => chosen.complement(len),
        })
    }

    /// Fixed positions of all chains of one target
    pub fn resolve_target(&self, rec: &TargetRecord) -> Result<TargetFixedPositions, FixPosError> {
        let mut fixed = TargetFixedPositions::new();
        for (chain, seq) in rec.iter_chains() {
            fixed.push(chain, self.resolve_chain(rec.name(), chain, seq)?);
        }
        Ok(fixed)
    }

    /// Resolves all records. The first error aborts the whole batch.
    pub fn resolve_all<I>(&self, records: I) -> Result<FixedPositionMap, FixPosError>
    where
        I: IntoIterator<Item = Result<TargetRecord, FixPosError>>,
    {
        let mut map = FixedPositionMap::new();
        for rec in records {
            let rec = rec?;
            let fixed = self.resolve_target(&rec)?;
            let n_fixed: usize = fixed.iter().map(|(_, v)| v.len()).sum();
            info!(
                "{}: {} chain(s), {} fixed position(s)",
                rec.name(),
                fixed.len(),
                n_fixed
            );
            map.insert(rec.name(), fixed);
        }
        Ok(map)
    }
}

//##############################
//#  Tests
//##############################
