//! Fixed residue positions for ProteinMPNN.
//!
//! Converts compact per-chain range specifications like `"A:1-10,20-30;B:*"`
//! into the `fixed_positions_jsonl` map for the targets listed in a
//! `parsed.jsonl` file.

pub mod core;
pub mod io;
pub mod params;

pub mod prelude {
    pub use crate::core::*;
    pub use crate::io::*;
    pub use crate::params::*;
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prints the tool banner together with the effective run parameters
pub fn greeting(tool: &str, params: &params::FixPosParams) {
    use comfy_table::modifiers::UTF8_ROUND_CORNERS;
    use comfy_table::presets::UTF8_FULL;
    use comfy_table::{Attribute, Cell, ContentArrangement, Table};

    let unset = || "<not set>".to_owned();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new(format!("{tool} (molar_fixpos {VERSION})")).add_attribute(Attribute::Bold),
            Cell::new(env!("CARGO_PKG_HOMEPAGE")),
        ])
        .add_row(vec!["ranges".to_owned(), params.ranges.clone().unwrap_or_else(unset)])
        .add_row(vec![
            "designed chains".to_owned(),
            params.designed_chains.clone().unwrap_or_else(unset),
        ])
        .add_row(vec![
            "mode".to_owned(),
            params.mode.unwrap_or_default().to_string(),
        ]);
    println!("{table}");
}
