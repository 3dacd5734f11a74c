use std::{fmt, sync::LazyLock};

use regex::Regex;
use sorted_vec::SortedVec;

use super::FixPosError;

mod grammar;

static TOKEN_DELIM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,\s]+").unwrap());

/// Single token of a range body: `N` or `N-M`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RangeToken {
    Single(usize),
    Span(usize, usize),
}

impl RangeToken {
    fn parse(tok: &str) -> Result<Self, FixPosError> {
        grammar::range_parser::token(tok).map_err(|_| FixPosError::BadRangeToken(tok.to_owned()))
    }

    /// Inclusive bounds, reversed spans are swapped
    fn bounds(self) -> (usize, usize) {
        match self {
            Self::Single(n) => (n, n),
            Self::Span(a, b) if a > b => (b, a),
            Self::Span(a, b) => (a, b),
        }
    }
}

/// Explicit positions of a chain as merged inclusive spans.
///
/// Spans are ascending, disjoint and never adjacent, so equal position sets
/// always have equal spans. Positions are only expanded on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionSpans(Vec<(usize, usize)>);

impl PositionSpans {
    fn from_spans(spans: Vec<(usize, usize)>) -> Self {
        let sorted = SortedVec::from_unsorted(spans);
        let mut merged: Vec<(usize, usize)> = Vec::with_capacity(sorted.len());
        for &(a, b) in sorted.iter() {
            if let Some(last) = merged.last_mut() {
                if a <= last.1.saturating_add(1) {
                    last.1 = last.1.max(b);
                    continue;
                }
            }
            merged.push((a, b));
        }
        Self(merged)
    }

    pub fn spans(&self) -> &[(usize, usize)] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All positions in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().flat_map(|&(a, b)| a..=b)
    }

    /// Positions outside of `1..=len` in ascending order
    pub fn iter_out_of_bounds(&self, len: usize) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().flat_map(move |&(a, b)| {
            let low = if a == 0 { 0..=0 } else { 1..=0 };
            let high = a.max(len.saturating_add(1))..=b;
            low.chain(high)
        })
    }

    /// Positions of `1..=len` which are not in the spans.
    /// All spans have to be within `1..=len`.
    pub fn complement(&self, len: usize) -> Vec<usize> {
        let mut ret = vec![];
        let mut next = 1;
        for &(a, b) in self.0.iter() {
            if a > next {
                ret.extend(next..a);
            }
            next = next.max(b + 1);
        }
        ret.extend(next..=len);
        ret
    }
}

/// Parsed range body of one chain.
///
/// Positions are 1-based and are not checked against the chain length here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedRange {
    /// `*` or an empty body: the whole chain, no explicit positions
    Wildcard,
    Positions(PositionSpans),
}

impl ParsedRange {
    /// Parses strings like `"1-3,7,10-12"`, `"1-3 7 10-12"` or `"*"`
    pub fn parse(s: &str) -> Result<Self, FixPosError> {
        let s = s.trim();
        if s.is_empty() || s == "*" {
            return Ok(Self::Wildcard);
        }

        let mut spans = vec![];
        for tok in TOKEN_DELIM.split(s) {
            let tok = tok.trim();
            if tok.is_empty() {
                continue;
            }
            spans.push(RangeToken::parse(tok)?.bounds());
        }

        Ok(Self::Positions(PositionSpans::from_spans(spans)))
    }
}

/// Canonical form: consecutive positions are collapsed into `N-M` spans.
/// An explicit empty set is written as `,` to keep it apart from the wildcard.
impl fmt::Display for ParsedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spans = match self {
            Self::Wildcard => return write!(f, "*"),
            Self::Positions(p) if p.is_empty() => return write!(f, ","),
            Self::Positions(p) => p.spans(),
        };

        for (i, &(a, b)) in spans.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            if a == b {
                write!(f, "{a}")?;
            } else {
                write!(f, "{a}-{b}")?;
            }
        }
        Ok(())
    }
}

//##############################
//#  Tests
//##############################
