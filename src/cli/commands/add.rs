//! Add command: prompt for a new row and append it to a CSV file
//!
//! The file's first line supplies the column names and, through
//! `total_columns`, the number of values to ask for.

use std::io::{BufRead, Write};
use tracing::info;

use crate::app::services::field_cursor::{FieldCursor, FieldType, RowLayout};
use crate::app::services::line_io::{LineFile, LineSource};
use crate::app::services::prompt::{PromptOptions, PromptService};
use crate::cli::args::AddArgs;
use crate::config::Config;
use crate::{Error, Result};

pub fn run_add(args: &AddArgs, config: &Config) -> Result<()> {
    let stdin = std::io::stdin();
    let mut prompts = PromptService::new(stdin.lock(), std::io::stdout().lock());
    let mut file = LineFile::new(&args.input);

    let row = append_row(&mut file, args.types.as_ref(), &mut prompts, config)?;
    info!("Appended row to {}: {}", args.input.display(), row);
    prompts.println(&format!("Added: {}", row))?;
    Ok(())
}

/// Ask for one value per header column and append the new row to `file`
///
/// Columns are labelled from the header cell at the same position, or
/// `column N` when that cell is blank. Values containing a comma or newline,
/// and empty string values, are refused because the field cursor would split
/// or drop them on read-back. Existing rows are never rewritten, so their
/// line endings survive.
pub fn append_row<R: BufRead, W: Write>(
    file: &mut LineFile,
    layout: Option<&RowLayout>,
    prompts: &mut PromptService<R, W>,
    config: &Config,
) -> Result<String> {
    if !file.has_line()? {
        return Err(Error::invalid_layout(format!(
            "{} has no header row to describe the columns",
            file.path().display()
        )));
    }
    let header = file.read_line()?;
    file.close()?;

    let cursor = FieldCursor::new(header.as_str()).with_cursor_check(config.parser.cursor_check);
    let width = cursor.total_columns();
    let layout = match layout {
        Some(layout) => layout.clone(),
        None => RowLayout::all_strings(width),
    };
    layout.check_width(width)?;

    let mut values = Vec::with_capacity(width);
    for (index, &field_type) in layout.columns().iter().enumerate() {
        let options = PromptOptions {
            prompt: format!("{} ({}): ", column_name(&header, index), field_type),
            on_invalid: config.prompt.invalid_message.clone(),
        };
        values.push(ask_value(prompts, field_type, &options)?);
    }

    let row = values.join(",");
    file.append_line(&row)?;
    Ok(row)
}

/// Header cell `index`, split the same way `total_columns` counts
fn column_name(header: &str, index: usize) -> String {
    header
        .split(',')
        .nth(index)
        .map(|cell| cell.trim_matches(' '))
        .filter(|cell| !cell.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| format!("column {}", index + 1))
}

fn ask_value<R: BufRead, W: Write>(
    prompts: &mut PromptService<R, W>,
    field_type: FieldType,
    options: &PromptOptions,
) -> Result<String> {
    loop {
        let value = prompts.get_typed(field_type, options)?.to_string();

        if value.contains([',', '\n']) {
            prompts.println("Values cannot contain commas.")?;
        } else if value.trim_matches(' ').is_empty() {
            prompts.println("Blank values are dropped when the file is read; enter a value.")?;
        } else {
            return Ok(value);
        }
    }
}
