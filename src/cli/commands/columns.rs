//! Columns command: report how many columns a file's rows have

use tracing::info;

use crate::app::services::field_cursor::FieldCursor;
use crate::app::services::line_io::{LineFile, LineSink, LineSource, LineWriter};
use crate::cli::args::ColumnsArgs;
use crate::config::Config;
use crate::Result;

pub fn run_columns(args: &ColumnsArgs, config: &Config) -> Result<()> {
    info!("Counting columns in {}", args.input.display());

    let mut source = LineFile::new(&args.input);
    let mut sink = LineWriter::new(std::io::stdout().lock());
    count_columns(&mut source, &mut sink, args.all_lines, config)
}

/// Write the column count of the first line, or of every line
///
/// With `all_lines`, each output line reads `<line number>: <columns>`.
pub fn count_columns<S: LineSource, K: LineSink>(
    source: &mut S,
    sink: &mut K,
    all_lines: bool,
    config: &Config,
) -> Result<()> {
    let mut cursor = FieldCursor::default().with_cursor_check(config.parser.cursor_check);

    if !all_lines {
        let first = if source.has_line()? {
            source.read_line()?
        } else {
            String::new()
        };
        cursor.set_text(first);
        return sink.write_line(&cursor.total_columns().to_string());
    }

    let mut line_number = 0;
    while source.has_line()? {
        line_number += 1;
        cursor.set_text(source.read_line()?);
        sink.write_line(&format!("{}: {}", line_number, cursor.total_columns()))?;
    }
    Ok(())
}
