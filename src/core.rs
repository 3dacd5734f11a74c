mod chain_spec;
mod fixed_position_map;
mod fixpos_error;
mod range_parser;
mod resolver;
mod target;

pub use {
    chain_spec::ChainRangeSpec,
    fixed_position_map::{FixedPositionMap, TargetFixedPositions},
    fixpos_error::FixPosError,
    range_parser::{ParsedRange, PositionSpans},
    resolver::{DesignedChains, FixedPositionResolver, Mode},
    target::TargetRecord,
};
