use anyhow::Result;
use clap::Parser;
use molar_fixpos::prelude::*;
use std::process::ExitCode;

mod command_fixpos;

use command_fixpos::command_fixpos;

/// Marker printed before input errors
const INPUT_ERROR_MARKER: &str = "wrong input type:";

/// Create ProteinMPNN fixed_positions_jsonl from parsed.jsonl using range specs
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cmd {
    /// Output of parse_multiple_chains.py
    #[arg(long, alias = "parsed_jsonl", required = true)]
    parsed_jsonl: String,

    /// fixed_positions_jsonl to write
    #[arg(long, alias = "out_jsonl", required = true)]
    out_jsonl: String,

    /// Designed chains, e.g. "A" or "A B"
    #[arg(long, alias = "designed_chains")]
    designed_chains: Option<String>,

    /// keep_fixed: ranges are fixed; designable: ranges are designable (fixed = complement)
    #[arg(long)]
    mode: Option<Mode>,

    /// Ranges, e.g. "A:1-350,360-370,380-388" or "A:*" or "A:1-10;B:5-8"
    #[arg(long)]
    ranges: Option<String>,

    /// TOML file with ranges, designed_chains and mode. Command line values take precedence
    #[arg(short, long, alias = "params_file")]
    params_file: Option<String>,

    /// Don't print the greeting
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::builder()
        .format_timestamp(None)
        .format_indent(Some(8))
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cmd = Cmd::parse();

    match run(&cmd) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<FixPosError>() {
            Some(err) if err.is_input_error() => {
                eprintln!("{INPUT_ERROR_MARKER} {err}");
                ExitCode::from(2)
            }
            _ => {
                eprintln!("Error: {e:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(cmd: &Cmd) -> Result<()> {
    let file_params = match &cmd.params_file {
        Some(f) => FixPosParams::from_file(f)?,
        None => FixPosParams::default(),
    };

    let params = file_params.merge(FixPosParams {
        ranges: cmd.ranges.clone(),
        designed_chains: cmd.designed_chains.clone(),
        mode: cmd.mode,
    });

    if !cmd.quiet {
        molar_fixpos::greeting("fixpos", &params);
    }

    command_fixpos(params, &cmd.parsed_jsonl, &cmd.out_jsonl)?;
    println!("Wrote {}", cmd.out_jsonl);
    Ok(())
}
