use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the php2js binary.
#[derive(Parser, Debug)]
#[command(
    name = "php2js",
    version,
    about = "Translate a subset of PHP into JavaScript"
)]
pub struct CliArgs {
    /// Write `<stem>.js` for each input into this directory instead of
    /// printing to stdout.
    #[arg(short = 'o', long = "out-dir", alias = "outDir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Treat inputs as nikic/php-parser JSON AST dumps (`php-parse --json-dump`).
    #[arg(long = "ast-json")]
    pub ast_json: bool,

    /// Print the parsed syntax tree as JSON instead of translating.
    #[arg(long = "dump-ast", conflicts_with = "ast_json")]
    pub dump_ast: bool,

    /// Color error output. Defaults to on when stderr is a terminal.
    #[arg(
        long = "pretty-errors",
        alias = "pretty",
        num_args = 0..=1,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub pretty_errors: Option<bool>,

    /// Input files, or directories to search for them.
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,
}

impl CliArgs {
    /// File extension searched for when an input is a directory.
    pub fn input_extension(&self) -> &'static str {
        if self.ast_json { "json" } else { "php" }
    }
}
