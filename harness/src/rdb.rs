//! Legacy flat-record result writer.
//!
//! The line-oriented format the original tooling consumes:
//!
//! ```text
//! #start data file format 3
//! #pair  "key"  "value"
//! #altcols  "table"  "col1"  "col2" ...
//! #altrow   "table"  v1      v2 ...
//! #end data file format 3
//! ```
//!
//! Scalar facts become `#pair` lines; the incumbent history becomes an
//! "incumbent" table. Writers are pure: they take a [`RunRecord`] and
//! produce text, and file placement stays the caller's business.

use std::io::{self, Write};

use crate::report::RunRecord;

const FORMAT_VERSION: u32 = 3;

const INCUMBENT_COLUMNS: [&str; 4] = [
    "incumbent num",
    "incumbent cost",
    "incumbent wall time",
    "incumbent nodes expanded",
];

/// Write a record in the flat format.
///
/// # Errors
///
/// Propagates I/O errors from `out`.
pub fn write_rdb<W: Write>(record: &RunRecord, out: &mut W) -> io::Result<()> {
    writeln!(out, "#start data file format {FORMAT_VERSION}")?;

    pair(out, "domain", &record.domain)?;
    pair(out, "algorithm", &record.algorithm)?;
    pair(out, "weight", &record.weight.to_string())?;
    pair(out, "instance digest", &record.instance_digest)?;
    pair(
        out,
        "found solution",
        if record.found { "yes" } else { "no" },
    )?;
    if let Some(cost) = record.cost {
        pair(out, "final sol cost", &cost.to_string())?;
    }
    if let Some(length) = record.solution_length {
        pair(out, "final sol length", &length.to_string())?;
    }
    pair(out, "total nodes expanded", &record.expansions.to_string())?;
    pair(out, "total nodes generated", &record.generations.to_string())?;
    pair(out, "total duplicates", &record.duplicates.to_string())?;
    pair(out, "total nodes reopened", &record.reopenings.to_string())?;
    pair(
        out,
        "heuristic inconsistencies",
        &record.inconsistencies.to_string(),
    )?;
    pair(out, "total wall time", &record.elapsed_seconds.to_string())?;
    pair(out, "termination", &record.termination)?;

    if !record.incumbents.is_empty() {
        write!(out, "#altcols  \"incumbent\"")?;
        for column in INCUMBENT_COLUMNS {
            write!(out, "  \"{column}\"")?;
        }
        writeln!(out)?;
        for row in &record.incumbents {
            writeln!(
                out,
                "#altrow  \"incumbent\"  {}  {}  {}  {}",
                row.number, row.cost, row.elapsed_seconds, row.expansions
            )?;
        }
    }

    writeln!(out, "#end data file format {FORMAT_VERSION}")
}

/// Render a record to a flat-format string.
#[must_use]
pub fn rdb_string(record: &RunRecord) -> String {
    let mut buffer = Vec::new();
    write_rdb(record, &mut buffer).expect("writing to a Vec cannot fail");
    String::from_utf8(buffer).expect("flat records are ASCII")
}

fn pair<W: Write>(out: &mut W, key: &str, value: &str) -> io::Result<()> {
    writeln!(out, "#pair  \"{key}\"  \"{value}\"")
}
