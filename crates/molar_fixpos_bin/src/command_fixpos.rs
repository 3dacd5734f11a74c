use anyhow::Result;
use log::info;
use molar_fixpos::prelude::*;

pub(super) fn command_fixpos(params: FixPosParams, infile: &str, outfile: &str) -> Result<()> {
    let resolver = params.into_resolver()?;

    // Nothing is written unless all records are resolved
    let map = resolver.resolve_all(RecordReader::open(infile)?)?;
    info!("Resolved {} target(s) from '{infile}'", map.len());

    write_fixed_positions(outfile, &map)?;
    Ok(())
}
