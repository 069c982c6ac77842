//! # snipmd
//!
//! A three-pane terminal browser for a folder of markdown snippet files.
//!
//! ## Usage
//!
//! Launch the interactive TUI:
//! ```sh
//! snipmd
//! ```
//!
//! List the headings of one file:
//! ```sh
//! snipmd -l --file git.md
//! ```
//!
//! Print a block of a section:
//! ```sh
//! snipmd -s "Undo last commit" --block 0
//! ```

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, OutputFormat};
use color_eyre::Result;
use crossterm::ExecutableCommand;
use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use serde::Serialize;
use snipmd::{
    App, Config, Document, FileCatalog, Heading, Settings, extract_block, filter_content,
    filter_headings, indent_for,
};
use std::fs::{self, OpenOptions};
use std::io::stdout;
use std::path::Path;
use std::process;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();
    init_logging();

    let config = Config::load();

    if args.write_config {
        match config.save() {
            Ok(path) => {
                println!("Wrote config to {}", path.display());
                return Ok(());
            }
            Err(e) => {
                eprintln!("Error writing config: {}", e);
                process::exit(1);
            }
        }
    }

    let snippets_dir = config.snippets_dir(args.dir.as_deref());
    let catalog = load_catalog(&snippets_dir);

    if !args.is_interactive() {
        handle_cli_mode(&args, &catalog);
        return Ok(());
    }

    let settings_path = config.settings_file();
    let settings = Settings::load(&settings_path);
    let focus_events = config.behavior.exit_on_focus_loss;

    enable_raw_mode().inspect_err(|e| {
        eprintln!("Failed to enable raw mode: {}", e);
    })?;

    stdout().execute(EnterAlternateScreen).inspect_err(|_| {
        disable_raw_mode().ok();
    })?;
    stdout()
        .execute(EnableMouseCapture)
        .inspect_err(|_| restore_terminal(false))?;
    if focus_events {
        stdout()
            .execute(EnableFocusChange)
            .inspect_err(|_| restore_terminal(false))?;
    }

    let backend = ratatui::backend::CrosstermBackend::new(stdout());
    let mut terminal = ratatui::Terminal::new(backend)
        .inspect_err(|_| restore_terminal(focus_events))?;

    let mut app = App::new(catalog, config, settings, settings_path);
    let result = snipmd::tui::run(&mut terminal, &mut app);

    restore_terminal(focus_events);
    app.save_settings();

    result
}

/// Undo the terminal setup, ignoring errors; mouse capture is always released
fn restore_terminal(focus_events: bool) {
    if focus_events {
        stdout().execute(DisableFocusChange).ok();
    }
    stdout().execute(DisableMouseCapture).ok();
    stdout().execute(LeaveAlternateScreen).ok();
    disable_raw_mode().ok();
}

/// Send log output to `snipmd.log` in the cache directory.
///
/// The TUI owns the terminal, so nothing is logged to stderr. Logging stays
/// off if the file cannot be opened.
fn init_logging() {
    let Some(dir) = dirs::cache_dir().map(|d| d.join("snipmd")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("snipmd.log"))
    else {
        return;
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}

/// Load the snippets folder; an unreadable folder gives an empty catalog
fn load_catalog(dir: &Path) -> FileCatalog {
    FileCatalog::load(dir).unwrap_or_else(|e| {
        log::warn!("Could not load snippets from {}: {}", dir.display(), e);
        FileCatalog::from_documents(dir.to_path_buf(), Vec::new())
    })
}

#[derive(Serialize)]
struct FileEntry<'a> {
    name: &'a str,
    path: &'a Path,
    headings: usize,
}

#[derive(Serialize)]
struct FileHeadings<'a> {
    file: &'a str,
    headings: Vec<&'a Heading>,
}

#[derive(Serialize)]
struct SectionOutput<'a> {
    file: &'a str,
    title: &'a str,
    level: usize,
    line_number: usize,
    content: String,
}

fn handle_cli_mode(args: &Cli, catalog: &FileCatalog) {
    if args.files {
        print_files(catalog, args.output);
    } else if let Some(ref title) = args.section {
        print_section(args, catalog, title);
    } else if args.list {
        print_headings(args, catalog);
    }
}

/// Documents selected by `--file`, or all of them
fn target_documents<'a>(args: &Cli, catalog: &'a FileCatalog) -> Vec<&'a Document> {
    match args.file {
        Some(ref name) => match catalog.position_by_name(name).and_then(|i| catalog.get(i)) {
            Some(doc) => vec![doc],
            None => {
                eprintln!("File '{}' not found in {}", name, catalog.directory().display());
                process::exit(1);
            }
        },
        None => catalog.documents().iter().collect(),
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}

fn print_files(catalog: &FileCatalog, format: OutputFormat) {
    match format {
        OutputFormat::Plain => {
            for doc in catalog.documents() {
                println!("{} ({} headings)", doc.name, doc.headings.len());
            }
        }
        OutputFormat::Json => {
            let entries: Vec<FileEntry> = catalog
                .documents()
                .iter()
                .map(|doc| FileEntry {
                    name: &doc.name,
                    path: doc.path(),
                    headings: doc.headings.len(),
                })
                .collect();
            print_json(&entries);
        }
    }
}

fn print_headings(args: &Cli, catalog: &FileCatalog) {
    let term = args.filter.as_deref().unwrap_or("");
    let documents = target_documents(args, catalog);

    match args.output {
        OutputFormat::Plain => {
            let show_names = documents.len() > 1;
            for doc in documents {
                let headings = filter_headings(&doc.headings, term);
                if show_names {
                    if headings.is_empty() {
                        continue;
                    }
                    println!("{}", doc.name);
                }
                for heading in headings {
                    println!("{}{}", indent_for(heading.level), heading.title);
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<FileHeadings> = documents
                .into_iter()
                .map(|doc| FileHeadings {
                    file: &doc.name,
                    headings: filter_headings(&doc.headings, term),
                })
                .collect();
            print_json(&output);
        }
    }
}

fn print_section(args: &Cli, catalog: &FileCatalog, title: &str) {
    let found = target_documents(args, catalog)
        .into_iter()
        .find_map(|doc| doc.find_heading(title).map(|heading| (doc, heading)));

    let Some((doc, heading)) = found else {
        eprintln!("Section '{}' not found", title);
        process::exit(1);
    };

    let content = filter_content(&heading.content, args.grep.as_deref().unwrap_or(""));
    let content = match args.block {
        Some(line) => extract_block(&content, line),
        None => content,
    };

    match args.output {
        OutputFormat::Plain => {
            if !content.is_empty() {
                println!("{}", content);
            }
        }
        OutputFormat::Json => print_json(&SectionOutput {
            file: &doc.name,
            title: &heading.title,
            level: heading.level,
            line_number: heading.line_number,
            content,
        }),
    }
}
