//! CLI definitions and command dispatch.

use std::{ffi::OsString, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand, error::ErrorKind};
use log::debug;

use gfont_core::{config::CLI_NAME, download};

#[derive(Parser)]
#[command(name = "gfont", version, disable_help_subcommand = true)]
#[command(about = "Self-host Google Fonts: download font files and rewrite the stylesheet")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download the fonts referenced by a Google Fonts CSS API URL
    Download {
        /// Directory that receives index.css and one folder per font family
        public_path: PathBuf,
        /// Google Fonts CSS API URL, e.g. https://fonts.googleapis.com/css?family=Lato
        google_font_api_url: String,
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        rest: Vec<String>,
    },
}

/// What a command line asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Download { dest: PathBuf, api_url: String },
    /// Print a fixed message and exit successfully.
    Print(String),
}

impl Action {
    /// Run the action and map the outcome to the process exit code.
    ///
    /// A failed download has already been reported on stdout by the pipeline,
    /// so it only turns into [`ExitCode::FAILURE`].
    pub fn run(self) -> ExitCode {
        match self {
            Action::Download { dest, api_url } => match download(&dest, &api_url) {
                Ok(summary) => {
                    debug!("{summary:?}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    debug!("download failed: {e:?}");
                    ExitCode::FAILURE
                }
            },
            Action::Print(message) => {
                println!("{message}");
                ExitCode::SUCCESS
            }
        }
    }
}

/// Parse `args` (including the program name) into an [`Action`].
///
/// Missing `download` parameters and unknown subcommands become
/// [`Action::Print`]; help, version, and other clap errors are returned.
pub fn parse<I, T>(args: I) -> Result<Action, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    match Cli::try_parse_from(&args) {
        Ok(Cli { command: None }) => {
            Ok(Action::Print(format!("No argument provided for the {CLI_NAME}.")))
        }
        Ok(Cli { command: Some(Commands::Download { public_path, google_font_api_url, rest }) }) => {
            if !rest.is_empty() {
                debug!("Ignoring extra arguments: {rest:?}");
            }
            Ok(Action::Download { dest: public_path, api_url: google_font_api_url })
        }
        Err(e) => match e.kind() {
            ErrorKind::MissingRequiredArgument => Ok(Action::Print(
                "The 'download' command needs a <public_path> and a <google_font_api_url> as parameters."
                    .to_string(),
            )),
            ErrorKind::InvalidSubcommand | ErrorKind::UnknownArgument => {
                let first = args.get(1).map(|a| a.to_string_lossy()).unwrap_or_default();
                Ok(Action::Print(format!("Unknown argument '{first}' for the {CLI_NAME}.")))
            }
            _ => Err(e),
        },
    }
}

/// Parse `args` and run the resulting action.
pub fn dispatch<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match parse(args) {
        Ok(action) => action.run(),
        Err(e) => e.exit(),
    }
}
