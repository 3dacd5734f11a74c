use std::{collections::HashMap, str::FromStr, sync::LazyLock};

use log::{debug, warn};
use regex::Regex;

use super::FixPosError;

static CHAIN_DELIM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[;|]+").unwrap());
static CHAIN_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]$").unwrap());

/// Raw range strings for each chain.
///
/// Built once from a string like `"A:1-10,20-30;B:5-8"` or `"A:1-10 20-30 | B:*"`
/// and never changed afterwards. Range bodies are kept unparsed, they are
/// parsed by [ParsedRange](super::ParsedRange) only for the chains that are designed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChainRangeSpec {
    ranges: HashMap<String, String>,
}

impl ChainRangeSpec {
    pub fn parse(s: &str) -> Result<Self, FixPosError> {
        let s = s.trim();
        let mut ranges = HashMap::new();
        if s.is_empty() {
            return Ok(Self { ranges });
        }

        for item in CHAIN_DELIM.split(s) {
            let item = item.trim();
            if item.is_empty() {
                continue;
            }

            let (ch, rr) = item
                .split_once(':')
                .ok_or_else(|| FixPosError::MalformedRangeItem(item.to_owned()))?;
            let ch = ch.trim();
            if !CHAIN_ID.is_match(ch) {
                return Err(FixPosError::InvalidChainId(ch.to_owned()));
            }

            // Later items for the same chain win
            if let Some(prev) = ranges.insert(ch.to_owned(), rr.trim().to_owned()) {
                warn!("Chain {ch} is given more than once, range '{prev}' is overridden");
            }
        }

        debug!("Parsed ranges for {} chain(s)", ranges.len());
        Ok(Self { ranges })
    }

    /// Raw range body for the chain, if any.
    pub fn get(&self, chain: &str) -> Option<&str> {
        self.ranges.get(chain).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.ranges.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromStr for ChainRangeSpec {
    type Err = FixPosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

//##############################
//#  Tests
//##############################
