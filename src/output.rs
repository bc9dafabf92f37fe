//! Terminal rendering of records.
//!
//! One record per block: a separator banner, the formatted
//! identifier, then either the status line (concepts and purgatory records)
//! or the location/quantity/properties blocks.

use crate::ident::format_id;
use crate::store::{Record, RecordBody};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print one record to stdout.
pub fn print_record(record: &Record, color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    writeln!(stdout, "#### #### #### ####")?;
    stdout.reset()?;

    heading(&mut stdout, "ID Number:")?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    writeln!(stdout, "\t{}", format_id(record.id))?;
    stdout.reset()?;

    match &record.body {
        RecordBody::Concept => {
            heading(&mut stdout, "STATUS:")?;
            status_line(&mut stdout, "Merely a concept...")?;
        }
        RecordBody::Purgatory => {
            heading(&mut stdout, "STATUS:")?;
            status_line(&mut stdout, "Sent to purgatory...")?;
        }
        RecordBody::Item { location, quantity, properties } => {
            heading(&mut stdout, "Location:")?;
            writeln!(stdout, "\t{location}")?;
            heading(&mut stdout, "Quantity:")?;
            writeln!(stdout, "\t{quantity}")?;
            heading(&mut stdout, "Properties:")?;
            for property in properties {
                writeln!(stdout, "\t{property}")?;
            }
        }
    }

    Ok(())
}

fn heading(stdout: &mut StandardStream, text: &str) -> io::Result<()> {
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
    writeln!(stdout, "{text}")?;
    stdout.reset()
}

fn status_line(stdout: &mut StandardStream, text: &str) -> io::Result<()> {
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
    writeln!(stdout, "\t{text}")?;
    stdout.reset()
}
