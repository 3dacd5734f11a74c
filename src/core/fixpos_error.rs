use std::path::PathBuf;
use thiserror::Error;

//############################################################
//#  Error enums
//############################################################

/// Error raised while parsing range specifications or resolving fixed positions.
///
/// Every variant is fatal for the whole run.
#[derive(Error, Debug)]
pub enum FixPosError {
    #[error("range item '{0}' missing ':' (expect like A:1-10,20-30)")]
    MalformedRangeItem(String),

    #[error("invalid chain id '{0}' (expect single character like A/B)")]
    InvalidChainId(String),

    #[error("bad range token '{0}' (expect 'N' or 'N-M')")]
    BadRangeToken(String),

    #[error("{target} chain {chain}: empty sequence length")]
    EmptySequence { target: String, chain: String },

    #[error("{target}: chain {chain} is designed but not provided in --ranges")]
    MissingRangeForDesignedChain { target: String, chain: String },

    #[error("{target} chain {chain}: positions out of [1,{len}], e.g. {bad:?}")]
    PositionOutOfBounds {
        target: String,
        chain: String,
        len: usize,
        bad: Vec<usize>,
    },

    #[error("parsed.jsonl missing 'name' field")]
    MissingName,

    #[error("{0}: no seq_chain_* fields found")]
    NoChainsFound(String),

    #[error("--designed_chains is empty")]
    EmptyDesignatedChains,

    #[error("--ranges parsed empty")]
    EmptyParsedSpec,

    #[error("line {line}: not a valid record ({msg})")]
    MalformedRecord { line: usize, msg: String },

    #[error("invalid parameters file: {0}")]
    Params(#[from] toml::de::Error),

    #[error("i/o error on '{}'", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl FixPosError {
    /// True for errors caused by bad user input rather than by the environment.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::Io(..) | Self::Json(_))
    }
}
