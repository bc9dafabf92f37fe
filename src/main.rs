use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tally::app_data::{self, AppConfig};
use tally::ident::{format_id, parse_id};
use tally::output::print_record;
use tally::sheet::{self, SheetSpec};
use tally::store::{RecordBody, Store};

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Terminal-first personal inventory tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Answer yes to every confirmation prompt
    #[arg(short = 'y', long, global = true)]
    yes: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Use FILE as the record store instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    store: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the record behind an identifier
    Show {
        /// Identifier, hyphenated (1a-00-ff-03) or bare hex
        id: String,
    },
    /// Search records by exact keyword match, best matches first
    Search {
        /// Keywords; repeat a keyword to weight it
        #[arg(required = true)]
        keywords: Vec<String>,

        /// Print every result instead of paging three at a time
        #[arg(short, long)]
        all: bool,
    },
    /// Replace a record's location, quantity and properties
    Update {
        id: String,

        /// New location
        #[arg(short, long)]
        location: String,

        /// New quantity
        #[arg(short, long)]
        quantity: String,

        /// New properties, in display order
        properties: Vec<String>,
    },
    /// Retire an identifier to purgatory for later reuse
    Retire {
        id: String,
    },
    /// Issue fresh identifiers
    Allocate {
        /// How many identifiers to issue
        #[arg(short, long, default_value_t = 1)]
        count: u32,
    },
    /// Generate a printable label sheet, one fresh identifier per label
    Sheet {
        /// Paper width in inches
        #[arg(long, default_value_t = 8.5)]
        width: f64,

        /// Paper height in inches
        #[arg(long, default_value_t = 11.0)]
        height: f64,

        /// Left/right margin in inches
        #[arg(long, default_value_t = 0.25)]
        margin_x: f64,

        /// Top/bottom margin in inches
        #[arg(long, default_value_t = 0.5)]
        margin_y: f64,

        /// Horizontal label count
        #[arg(short, long, default_value_t = 3)]
        columns: u32,

        /// Vertical label count
        #[arg(short, long, default_value_t = 8)]
        rows: u32,

        /// Where to save the sheet
        #[arg(short, long, default_value = "labels.svg")]
        output: PathBuf,
    },
    /// Dump every record in the store
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let color = !cli.no_color;

    let store_file = match &cli.store {
        Some(path) => path.clone(),
        None => app_data::store_path()?,
    };
    let mut store = Store::open(&store_file)
        .with_context(|| format!("failed to open the record store at {}", store_file.display()))?;

    match cli.command {
        Commands::Show { id } => {
            let id = parse_id(&id)?;
            match store.select(id) {
                Some(record) => print_record(record, color)?,
                None => bail!("no record with identifier {}", format_id(id)),
            }
        }

        Commands::Search { keywords, all } => {
            let hits = store.search(&keywords);
            if hits.is_empty() {
                println!("No matches.");
                return Ok(());
            }
            for (i, hit) in hits.iter().enumerate() {
                print_record(hit.record, color)?;
                let page_full = (i + 1) % 3 == 0 && i + 1 < hits.len();
                if page_full && !all && !confirm("Show more (y/n)? ", cli.yes)? {
                    return Ok(());
                }
            }
        }

        Commands::Update { id, location, quantity, properties } => {
            let id = parse_id(&id)?;
            match store.select(id) {
                Some(record) => print_record(record, color)?,
                None => bail!("no record with identifier {}", format_id(id)),
            }

            store.update(id, RecordBody::Item { location, quantity, properties })?;
            println!();
            if let Some(record) = store.select(id) {
                print_record(record, color)?;
            }

            if !confirm("Commit (y/n)? ", cli.yes)? {
                println!("Not committing.");
                return Ok(());
            }
            store.publish()?;
        }

        Commands::Retire { id } => {
            let id = parse_id(&id)?;
            match store.select(id) {
                Some(record) => print_record(record, color)?,
                None => bail!("no record with identifier {}", format_id(id)),
            }

            if !confirm("Send this entry to purgatory (y/n)? ", cli.yes)? {
                println!("Not retiring.");
                return Ok(());
            }
            store.retire(id)?;
            store.publish()?;
            println!("Retired {}.", format_id(id));
        }

        Commands::Allocate { count } => {
            for _ in 0..count {
                let id = store.allocate()?;
                println!("{}", format_id(id));
            }
            store.publish()?;
        }

        Commands::Sheet { width, height, margin_x, margin_y, columns, rows, output } => {
            if output.exists() && !confirm("File exists! Overwrite (y/n)? ", cli.yes)? {
                println!("Giving up.");
                return Ok(());
            }

            let config = AppConfig::load()?;
            let spec = SheetSpec {
                paper_width_in: width,
                paper_height_in: height,
                margin_x_in: margin_x,
                margin_y_in: margin_y,
                count_x: columns,
                count_y: rows,
                dpi: config.sheet_dpi,
                code_inches: config.label_code_inches,
            };

            println!("Generating label sheet...");
            let svg = sheet::generate(&mut store, &spec)?;
            fs::write(&output, svg)
                .with_context(|| format!("failed to write {}", output.display()))?;
            // The sheet consumed one allocation per label; persist them so
            // printed labels are never reissued.
            store.publish()?;
            println!("Saved {} labels to {}", columns * rows, output.display());
        }

        Commands::List => {
            for record in store.records() {
                print_record(record, color)?;
            }
            println!("\n{} record(s).", store.len());
        }
    }

    Ok(())
}

/// Plain y/n prompt on stdin; anything but "y" declines.
fn confirm(prompt: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}
