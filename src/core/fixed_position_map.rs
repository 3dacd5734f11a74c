use std::collections::HashMap;

use log::warn;
use serde::{Serialize, Serializer};

/// Fixed positions of all chains of one target, in record order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetFixedPositions {
    chains: Vec<(String, Vec<usize>)>,
}

impl TargetFixedPositions {
    pub fn new() -> Self {
        Default::default()
    }

    pub(crate) fn push(&mut self, chain: impl Into<String>, positions: Vec<usize>) {
        self.chains.push((chain.into(), positions));
    }

    /// Fixed positions of the chain, `None` if the chain is absent
    pub fn get(&self, chain: &str) -> Option<&[usize]> {
        self.chains
            .iter()
            .find(|(c, _)| c == chain)
            .map(|(_, v)| v.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[usize])> {
        self.chains.iter().map(|(c, v)| (c.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

impl Serialize for TargetFixedPositions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Target name -> chain -> fixed positions.
///
/// Targets are kept in the order they were first seen. Inserting an already
/// known target replaces its entry in place.
#[derive(Debug, Clone, Default)]
pub struct FixedPositionMap {
    targets: Vec<(String, TargetFixedPositions)>,
    index: HashMap<String, usize>,
}

impl FixedPositionMap {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, fixed: TargetFixedPositions) {
        let name = name.into();
        if let Some(&i) = self.index.get(&name) {
            warn!("Target '{name}' is given more than once, the last one is used");
            self.targets[i].1 = fixed;
        } else {
            self.index.insert(name.clone(), self.targets.len());
            self.targets.push((name, fixed));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TargetFixedPositions)> {
        self.targets.iter().map(|(n, t)| (n.as_str(), t))
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl PartialEq for FixedPositionMap {
    fn eq(&self, other: &Self) -> bool {
        self.targets == other.targets
    }
}

impl Serialize for FixedPositionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
