//! Fields command: extract every line's fields and write them back out
//!
//! One [`FieldCursor`] is reused for the whole file through `set_text`.
//! Rows that fail to parse are skipped and counted rather than aborting
//! the run.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::shared::report_stats;
use crate::app::services::field_cursor::{FieldCursor, ParseStats, RowLayout};
use crate::app::services::line_io::{LineFile, LineSink, LineSource, LineWriter};
use crate::cli::args::{FieldsArgs, GlobalArgs};
use crate::config::Config;
use crate::{Error, Result};

pub fn run_fields(args: &FieldsArgs, config: &Config, global: &GlobalArgs) -> Result<ParseStats> {
    info!("Extracting fields from {}", args.input.display());

    let skip_header = args.skip_header || config.parser.skip_header;
    let progress = global.show_progress().then(|| {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(format!("Reading {}", args.input.display()));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let result = write_fields(args, skip_header, config);

    // Clear the spinner before any error reaches the terminal
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }
    let stats = result?;

    if global.show_progress() {
        report_stats(&stats);
    }

    Ok(stats)
}

fn write_fields(args: &FieldsArgs, skip_header: bool, config: &Config) -> Result<ParseStats> {
    let mut source = LineFile::new(&args.input);
    match &args.output {
        Some(path) => {
            let mut sink = LineFile::new(path);
            let stats = extract_fields(
                &mut source,
                &mut sink,
                args.types.as_ref(),
                skip_header,
                config,
            )?;
            sink.close()?;
            Ok(stats)
        }
        None => {
            let mut sink = LineWriter::new(std::io::stdout().lock());
            extract_fields(
                &mut source,
                &mut sink,
                args.types.as_ref(),
                skip_header,
                config,
            )
        }
    }
}

/// Read every line from `source` and write its fields, rejoined with commas,
/// to `sink`
///
/// Without a layout each line is drained with `next_string` until the
/// cursor is exhausted. With a layout exactly one value per column is read;
/// anything left on the line is ignored. A line that yields no field, or
/// whose typed read fails, is skipped and recorded in the statistics.
pub fn extract_fields<S: LineSource, K: LineSink>(
    source: &mut S,
    sink: &mut K,
    layout: Option<&RowLayout>,
    skip_header: bool,
    config: &Config,
) -> Result<ParseStats> {
    let mut stats = ParseStats::new();
    let mut cursor = FieldCursor::default().with_cursor_check(config.parser.cursor_check);
    let mut line_number = 0;

    if skip_header && source.has_line()? {
        line_number += 1;
        let header = source.read_line()?;
        debug!("Copying header row: {}", header);
        sink.write_line(&header)?;
    }

    while source.has_line()? {
        line_number += 1;
        cursor.set_text(source.read_line()?);

        match read_line_fields(&mut cursor, layout) {
            Ok(fields) => {
                sink.write_line(&fields.join(","))?;
                stats.record_success();
            }
            Err(e) => {
                warn!("Skipping line {}: {}", line_number, e);
                stats.record_failure(line_number, &e);
            }
        }
    }

    info!(
        "Extracted {} rows, skipped {}",
        stats.records_parsed, stats.records_skipped
    );
    Ok(stats)
}

fn read_line_fields(cursor: &mut FieldCursor, layout: Option<&RowLayout>) -> Result<Vec<String>> {
    if let Some(layout) = layout {
        let values = cursor.read_row(layout)?;
        if !cursor.remaining().is_empty() {
            debug!("Ignoring trailing text: {:?}", cursor.remaining());
        }
        return Ok(values.iter().map(ToString::to_string).collect());
    }

    let mut fields = Vec::new();
    loop {
        match cursor.next_string() {
            Ok(field) => fields.push(field),
            Err(e) if e.is_out_of_range() => break,
            Err(e) => return Err(e),
        }
    }

    if fields.is_empty() {
        return Err(Error::out_of_range(cursor.cursor(), cursor.len()));
    }
    Ok(fields)
}
