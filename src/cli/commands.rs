use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "snipmd")]
#[command(version)]
#[command(about = "Browse a folder of markdown snippets by heading")]
#[command(
    long_about = "snipmd - A three-pane browser for personal markdown snippet files.\n\n\
    Launch without flags for the interactive mode: pick a file, filter its headings,\n\
    filter the lines of a section and copy a block to the clipboard. Use flags for CLI\n\
    mode to list and extract snippets from scripts.\n\n\
    Examples:\n  \
    snipmd                              # Interactive TUI mode\n  \
    snipmd --files                      # List snippet files\n  \
    snipmd -l --file git.md             # List headings of one file\n  \
    snipmd -s Stash --grep pop          # Lines of a section containing 'pop'\n  \
    snipmd -s 'Undo last commit' -b 0   # Block starting at the first line"
)]
pub struct Cli {
    /// Snippets directory
    ///
    /// Defaults to the config file's `snippets_dir`, then to a `snippets`
    /// folder next to the executable. Created if it does not exist.
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// List loaded snippet files (non-interactive)
    #[arg(long = "files")]
    pub files: bool,

    /// List headings (non-interactive)
    ///
    /// Headings are indented by level. Combine with --file to limit the
    /// output to one file and --filter to narrow it.
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Limit --list or --section to one file, by file name (e.g. git.md)
    #[arg(short = 'F', long = "file", value_name = "NAME")]
    pub file: Option<String>,

    /// With --list: only headings whose title contains this text (case-insensitive)
    #[arg(long = "filter", value_name = "PATTERN", requires = "list")]
    pub filter: Option<String>,

    /// Print the content under the heading with this exact title (non-interactive)
    #[arg(short = 's', long = "section", value_name = "TITLE")]
    pub section: Option<String>,

    /// With --section: only lines containing this text (case-insensitive)
    #[arg(short = 'g', long = "grep", value_name = "PATTERN", requires = "section")]
    pub grep: Option<String>,

    /// With --section: print only the block starting at this 0-based line
    #[arg(short = 'b', long = "block", value_name = "LINE", requires = "section")]
    pub block: Option<usize>,

    /// Output format for CLI mode
    #[arg(short = 'o', long = "output", value_name = "FORMAT", default_value = "plain")]
    pub output: OutputFormat,

    /// Write the default config file and exit
    #[arg(long = "write-config")]
    pub write_config: bool,
}

impl Cli {
    /// True when no CLI-mode flag was given
    pub fn is_interactive(&self) -> bool {
        !self.files && !self.list && self.section.is_none() && !self.write_config
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Plain,
    /// JSON output
    Json,
}
