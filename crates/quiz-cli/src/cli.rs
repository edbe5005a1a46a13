//! CLI argument definitions for the bulk uploader.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "quiz-bulk",
    version,
    about = "Quiz bulk uploader - validate and import question CSV files",
    long_about = "Validate and import bulk question CSV files.\n\n\
                  Accepts flexible column names (question/questiontext/q, \
                  subject/category/topic, ...) and choice lists delimited by \
                  ';', '|', or ','. Rows are validated independently; one bad \
                  row never blocks the rest of the file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Upload questions from a CSV file and print the batch report.
    Upload(UploadArgs),

    /// Write the example CSV template with worked examples.
    Template(TemplateArgs),

    /// Register an author in the flat-file store.
    AddAuthor(AddAuthorArgs),
}

#[derive(Parser)]
pub struct UploadArgs {
    /// Path to the CSV file to upload.
    #[arg(value_name = "CSV_FILE")]
    pub csv_file: PathBuf,

    /// Id of the author the questions are created under.
    #[arg(long = "author", value_name = "ID")]
    pub author: i64,

    /// Store directory holding authors.json and questions.json.
    ///
    /// Without this flag the upload is a dry run: rows are validated and
    /// counted against an in-memory store that is discarded afterwards.
    #[arg(long = "store-dir", value_name = "DIR")]
    pub store_dir: Option<PathBuf>,

    /// Print the batch report as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct TemplateArgs {
    /// Where to write the template (default: quiz_bulk_upload_template.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct AddAuthorArgs {
    /// Numeric id for the author.
    #[arg(long = "id", value_name = "ID")]
    pub id: i64,

    /// Display name for the author.
    #[arg(long = "name", value_name = "NAME")]
    pub name: String,

    /// Store directory holding authors.json and questions.json.
    #[arg(long = "store-dir", value_name = "DIR")]
    pub store_dir: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
