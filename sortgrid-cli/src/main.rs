//! sortgrid CLI: render a table definition and replay header clicks.

mod definition;
mod error;
mod paths;
mod render;

use std::fs::{self, File};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use sortgrid::model::Record;
use sortgrid::{Renderer, Table, TableEvent};

use definition::TableDefinition;
use error::CliError;
use render::TextRenderer;

const QUIT: &str = ":q";
const RESET: &str = ":reset";

#[derive(Parser)]
#[command(name = "sortgrid")]
#[command(about = "Render a table and sort it by clicking headers", long_about = None)]
struct Cli {
    /// Log to stderr instead of the log file
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a table, then replay header clicks and render after each
    Show {
        /// Path to a table definition JSON file (built-in sample if omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Header to click, by field name or label; `:reset` clears the sort
        #[arg(short, long = "click")]
        clicks: Vec<String>,
    },

    /// Check a table definition without rendering it
    Validate {
        /// Path to the table definition JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Read header clicks from stdin, one per line, rendering after each
    Interactive {
        /// Path to a table definition JSON file (built-in sample if omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    if verbose {
        let _ = TermLogger::init(
            LevelFilter::Debug,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        );
        return;
    }

    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        return;
    };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match File::create(&path) {
        Ok(file) => {
            let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
        }
        Err(e) => eprintln!("warning: cannot open log file {}: {}", path.display(), e),
    }
}

fn load(file: Option<&PathBuf>) -> Result<TableDefinition, CliError> {
    match file {
        Some(path) => TableDefinition::load(path),
        None => Ok(TableDefinition::sample()),
    }
}

fn build_table(definition: &TableDefinition) -> Result<Table<Record>, CliError> {
    let registry = definition.registry();
    let records = definition.records.clone();
    let table = match &definition.fields {
        Some(fields) => Table::with_fields(&registry, fields.iter().cloned(), records)?,
        None => Table::new(&registry, records)?,
    };
    Ok(table)
}

fn parse_event(definition: &TableDefinition, input: &str) -> TableEvent {
    match input {
        RESET => TableEvent::Reset,
        other => TableEvent::HeaderActivated(definition.resolve_header(other).to_string()),
    }
}

fn run_show<W: Write>(
    definition: &TableDefinition,
    clicks: &[String],
    out: W,
) -> Result<(), CliError> {
    let mut table = build_table(definition)?;
    let mut renderer = TextRenderer::new(out);

    table.render(&mut renderer)?;
    for click in clicks {
        let projection = table.handle(&parse_event(definition, click))?;
        renderer.paint(&projection)?;
    }

    log::info!("Rendered {} frames", renderer.frames());
    Ok(())
}

fn run_interactive<R: BufRead, W: Write>(
    definition: &TableDefinition,
    input: R,
    out: W,
    mut err: impl Write,
) -> Result<(), CliError> {
    let mut table = build_table(definition)?;
    let mut renderer = TextRenderer::new(out);
    table.render(&mut renderer)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == QUIT {
            break;
        }

        // Unknown headers are reported and the session continues
        match table.handle(&parse_event(definition, line)) {
            Ok(projection) => renderer.paint(&projection)?,
            Err(e) => {
                log::warn!("Rejected click '{}': {}", line, e);
                writeln!(err, "{}", e)?;
            }
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Show { file, clicks } => {
            let definition = load(file.as_ref())?;
            run_show(&definition, &clicks, io::stdout().lock())
        }
        Commands::Validate { file } => {
            let definition = TableDefinition::load(&file)?;
            let table = build_table(&definition)?;
            println!(
                "{}: ok ({} columns, {} records)",
                file.display(),
                table.columns().len(),
                table.len()
            );
            Ok(())
        }
        Commands::Interactive { file } => {
            let definition = load(file.as_ref())?;
            run_interactive(
                &definition,
                io::stdin().lock(),
                io::stdout().lock(),
                io::stderr(),
            )
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<(), CliError>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_show_replays_clicks() {
        let definition = TableDefinition::sample();
        let clicks = vec!["年齢".to_string(), "age".to_string()];
        let text = output(|out| run_show(&definition, &clicks, out));

        let frames: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(frames.len(), 3);
        assert!(frames[0].starts_with("名前 | 年齢\n"));
        assert!(frames[1].ends_with("hoge | 12歳\nfuga | 23歳"));
        assert!(frames[2].contains("年齢 ▼"));
        assert!(frames[2].ends_with("fuga | 23歳\nhoge | 12歳\n"));
    }

    #[test]
    fn test_show_unknown_click_fails() {
        let definition = TableDefinition::sample();
        let clicks = vec!["email".to_string()];
        let err = run_show(&definition, &clicks, Vec::new()).unwrap_err();
        assert!(matches!(err, CliError::Table(sortgrid::Error::Sort(_))));
    }

    #[test]
    fn test_interactive_session() {
        let definition = TableDefinition::sample();
        let input = "name\n\nemail\n:reset\n:q\nage\n".as_bytes();
        let mut err = Vec::new();
        let text = output(|out| run_interactive(&definition, input, out, &mut err));

        // initial, name, reset; the line after :q is never read
        assert_eq!(text.split("\n\n").count(), 3);
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Field 'email' is not a column of this table\n"
        );
    }

    #[test]
    fn test_explicit_fields_allow_empty_records() {
        let json = r#"{
            "columns": [{ "field": "name", "label": "名前" }],
            "fields": ["name"]
        }"#;
        let definition: TableDefinition = serde_json::from_str(json).unwrap();
        let text = output(|out| run_show(&definition, &[], out));
        assert_eq!(text, "名前\n----\n");
    }

    #[test]
    fn test_empty_records_without_fields_fail() {
        let json = r#"{ "columns": [{ "field": "name", "label": "名前" }] }"#;
        let definition: TableDefinition = serde_json::from_str(json).unwrap();
        let err = build_table(&definition).unwrap_err();
        assert!(matches!(
            err,
            CliError::Table(sortgrid::Error::Config(
                sortgrid::error::ConfigError::EmptyDataset
            ))
        ));
        assert_eq!(err.to_string(), "Dataset is empty; supply records or an explicit field list");
    }

    #[test]
    fn test_bundled_definition() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/people.json");
        let definition = TableDefinition::load(&path).unwrap();
        let mut table = build_table(&definition).unwrap();
        assert_eq!(table.columns().len(), 4);

        let err = table.activate_header("スコア").unwrap_err();
        assert_eq!(err, sortgrid::error::SortError::unknown_field("スコア"));

        let projection = table
            .activate_header(definition.resolve_header("スコア"))
            .unwrap();
        let names: Vec<&str> = projection.rows.iter().map(|r| r[0].as_str()).collect();
        assert_eq!(names, vec!["Piyo", "hoge", "fuga"]);
        assert_eq!(projection.rows[2][3], "88.0");
    }
}
