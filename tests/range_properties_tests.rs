//! Property-based tests for range parsing and fixed position resolution

use molar_fixpos::prelude::*;
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use std::collections::BTreeSet;

/// Longest chain used in the tests, all generated positions fit into it
const MAX_LEN: usize = 200;

/// Generate a single token `N` or `N-M` (possibly reversed)
fn range_token() -> impl Strategy<Value = (usize, usize)> {
    prop_oneof![
        (1..MAX_LEN).prop_map(|n| (n, n)),
        (1..MAX_LEN, 1..MAX_LEN),
    ]
}

fn token_str((a, b): (usize, usize)) -> String {
    if a == b {
        a.to_string()
    } else {
        format!("{a}-{b}")
    }
}

/// Generate a delimiter between tokens
fn delimiter() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(","), Just(" "), Just(", "), Just("\t"), Just(",,"), Just(" , ")]
}

/// Generate a range body together with its tokens
fn range_body() -> impl Strategy<Value = (String, Vec<(usize, usize)>)> {
    (prop::collection::vec(range_token(), 0..8), delimiter()).prop_map(|(tokens, delim)| {
        let body = tokens
            .iter()
            .map(|&t| token_str(t))
            .collect::<Vec<_>>()
            .join(delim);
        (body, tokens)
    })
}

fn expand(tokens: &[(usize, usize)]) -> BTreeSet<usize> {
    tokens
        .iter()
        .flat_map(|&(a, b)| a.min(b)..=a.max(b))
        .collect()
}

fn resolve(body: &str, len: usize, mode: Mode) -> Result<Vec<usize>, FixPosError> {
    let resolver = FixPosParams {
        ranges: Some(format!("A:{body}")),
        designed_chains: Some("A".into()),
        mode: Some(mode),
    }
    .into_resolver()?;
    let rec = TargetRecord::new("T", [("A".to_owned(), "G".repeat(len))])?;
    let fixed = resolver.resolve_target(&rec)?;
    Ok(fixed.get("A").unwrap_or_default().to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Canonical form parses back to the same range
    #[test]
    fn test_canonical_form_reparses((body, _) in range_body()) {
        let parsed = ParsedRange::parse(&body).unwrap();
        let reparsed = ParsedRange::parse(&parsed.to_string()).unwrap();
        prop_assert_eq!(parsed, reparsed, "body '{}'", body);
    }

    /// Parsed positions are the union of all tokens
    #[test]
    fn test_positions_are_union((body, tokens) in range_body()) {
        match ParsedRange::parse(&body).unwrap() {
            ParsedRange::Wildcard => prop_assert!(tokens.is_empty()),
            ParsedRange::Positions(p) => {
                let got: Vec<usize> = p.iter().collect();
                let expected: Vec<usize> = expand(&tokens).into_iter().collect();
                prop_assert_eq!(got, expected);
            }
        }
    }

    /// Fixed positions of both modes split the chain into two disjoint parts
    #[test]
    fn test_modes_are_complementary((body, tokens) in range_body()) {
        prop_assume!(!tokens.is_empty());
        let keep = resolve(&body, MAX_LEN, Mode::KeepFixed).unwrap();
        let desig = resolve(&body, MAX_LEN, Mode::Designable).unwrap();

        let keep_set: BTreeSet<usize> = keep.iter().copied().collect();
        prop_assert_eq!(keep_set.len(), keep.len());
        prop_assert!(keep.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(desig.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(desig.iter().all(|p| !keep_set.contains(p)));
        prop_assert_eq!(keep.len() + desig.len(), MAX_LEN);
    }

    /// Out of bounds is reported exactly when some position exceeds the chain
    #[test]
    fn test_bounds((body, tokens) in range_body(), len in 1..MAX_LEN) {
        let too_far: Vec<usize> = expand(&tokens).into_iter().filter(|&p| p > len).collect();
        match resolve(&body, len, Mode::KeepFixed) {
            Ok(fixed) => {
                prop_assert!(too_far.is_empty());
                prop_assert!(fixed.iter().all(|&p| (1..=len).contains(&p)));
            }
            Err(FixPosError::PositionOutOfBounds { bad, len: l, .. }) => {
                prop_assert_eq!(l, len);
                let expected: Vec<usize> = too_far.into_iter().take(10).collect();
                prop_assert_eq!(bad, expected);
            }
            Err(e) => prop_assert!(false, "unexpected error {}", e),
        }
    }
}
