use super::FixPosError;

/// One target: its name and the sequences of its chains in record order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRecord {
    name: String,
    chains: Vec<(String, String)>,
}

impl TargetRecord {
    /// Creates a record from chain id/sequence pairs.
    ///
    /// Fails if the name is empty or if there are no chains at all.
    pub fn new(
        name: impl Into<String>,
        chains: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, FixPosError> {
        let name = name.into();
        if name.is_empty() {
            return Err(FixPosError::MissingName);
        }
        let chains: Vec<_> = chains.into_iter().collect();
        if chains.is_empty() {
            return Err(FixPosError::NoChainsFound(name));
        }
        Ok(Self { name, chains })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Chain ids with their sequences
    pub fn iter_chains(&self) -> impl Iterator<Item = (&str, &str)> {
        self.chains.iter().map(|(c, s)| (c.as_str(), s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_order_kept() -> anyhow::Result<()> {
        let rec = TargetRecord::new(
            "T1",
            [("B".to_owned(), "MK".to_owned()), ("A".to_owned(), "MKT".to_owned())],
        )?;
        let ids: Vec<_> = rec.iter_chains().map(|(c, _)| c).collect();
        assert_eq!(ids, vec!["B", "A"]);
        Ok(())
    }

    #[test]
    fn test_empty_name() {
        let err = TargetRecord::new("", [("A".to_owned(), "MK".to_owned())]).unwrap_err();
        assert!(matches!(err, FixPosError::MissingName));
    }

    #[test]
    fn test_no_chains() {
        let err = TargetRecord::new("T1", []).unwrap_err();
        assert!(matches!(err, FixPosError::NoChainsFound(ref n) if n == "T1"));
    }
}
