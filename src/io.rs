use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use log::info;
use serde_json::{Map, Value};

use crate::core::{FixPosError, FixedPositionMap, TargetRecord};

/// Prefix of the record fields holding chain sequences
pub const SEQ_CHAIN_PREFIX: &str = "seq_chain_";

impl TargetRecord {
    /// Builds a record from a parsed JSON object.
    ///
    /// Only `name` and `seq_chain_*` fields are used, everything else is ignored.
    /// Non-string sequences are taken as empty.
    pub fn from_json(obj: &Map<String, Value>) -> Result<Self, FixPosError> {
        let name = obj.get("name").and_then(Value::as_str).unwrap_or_default();
        if name.is_empty() {
            return Err(FixPosError::MissingName);
        }
        let chains = obj.iter().filter_map(|(k, v)| {
            k.strip_prefix(SEQ_CHAIN_PREFIX)
                .map(|ch| (ch.to_owned(), v.as_str().unwrap_or_default().to_owned()))
        });
        TargetRecord::new(name, chains)
    }

    /// Parses one line of a parsed.jsonl file
    pub fn from_json_line(line: &str, line_no: usize) -> Result<Self, FixPosError> {
        let obj: Map<String, Value> =
            serde_json::from_str(line).map_err(|e| FixPosError::MalformedRecord {
                line: line_no,
                msg: e.to_string(),
            })?;
        Self::from_json(&obj)
    }
}

/// Iterator over the records of a line-delimited JSON stream.
///
/// Blank lines are skipped. Line numbers in errors are 1-based.
pub struct RecordReader<R: BufRead> {
    lines: std::io::Lines<R>,
    line_no: usize,
    path: std::path::PathBuf,
}

impl RecordReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FixPosError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| FixPosError::Io(path.to_owned(), e))?;
        info!("Reading records from '{}'", path.display());
        Ok(Self::new(BufReader::new(file), path))
    }
}

impl<R: BufRead> RecordReader<R> {
    /// Wraps an arbitrary reader, `path` is only used in error messages
    pub fn new(reader: R, path: impl AsRef<Path>) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            path: path.as_ref().to_owned(),
        }
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<TargetRecord, FixPosError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(l) => l,
                Err(e) => return Some(Err(FixPosError::Io(self.path.clone(), e))),
            };
            self.line_no += 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            return Some(TargetRecord::from_json_line(line, self.line_no));
        }
    }
}

/// Reads all records of a parsed.jsonl file
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<TargetRecord>, FixPosError> {
    RecordReader::open(path)?.collect()
}

/// Writes the map as a single JSON line followed by a newline
pub fn write_fixed_positions(
    path: impl AsRef<Path>,
    map: &FixedPositionMap,
) -> Result<(), FixPosError> {
    let path = path.as_ref();
    let io_err = |e: std::io::Error| FixPosError::Io(path.to_owned(), e);

    let mut out = BufWriter::new(File::create(path).map_err(io_err)?);
    serde_json::to_writer(&mut out, map)?;
    writeln!(out).map_err(io_err)?;
    out.flush().map_err(io_err)?;

    info!("{} target(s) written to '{}'", map.len(), path.display());
    Ok(())
}
