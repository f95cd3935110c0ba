//! Command-line interface implementation for genfile.
//! Provides argument parsing and help text formatting using clap.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{error::ErrorKind, ArgAction, CommandFactory, Parser};

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

const EXIT_CODES_HELP: &str = "Exit code:
  0  succeed
  1  help
  2  input error
  3  output error";

/// Command-line arguments structure for genfile.
#[derive(Parser, Debug)]
#[command(
    name = "genfile",
    version,
    about = "Generate files from templates with given variables.",
    long_about = None,
    disable_help_flag = true,
    after_help = EXIT_CODES_HELP
)]
pub struct Args {
    /// The file containing variables, with a json or toml extension
    #[arg(short = 'v', value_name = "VARFILE")]
    pub varfile: PathBuf,

    /// The template file or the directory containing template files
    #[arg(short = 'i', value_name = "INPUT")]
    pub input: PathBuf,

    /// The directory to output generated files to
    #[arg(short = 'o', value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Show help
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,

    /// Enable verbose logging output
    #[arg(long)]
    pub verbose: bool,
}

/// What the command line asks genfile to do.
#[derive(Debug)]
pub enum Invocation {
    /// Generate files with the given arguments
    Run(Args),
    /// Print the usage text
    Help,
}

/// Parses an argument list (program name first).
///
/// A help request, a missing required flag or an empty flag value yields
/// `Invocation::Help`.
/// Any other parse failure (unknown flag, `--version`) is returned as the
/// clap error for the caller to report.
pub fn parse_args<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(args) {
        Ok(args) if args.help => Ok(Invocation::Help),
        Ok(args) => Ok(Invocation::Run(args)),
        Err(e)
            if matches!(
                e.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::InvalidValue
                    | ErrorKind::DisplayHelp
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            Ok(Invocation::Help)
        }
        Err(e) => Err(e),
    }
}

/// Parses the arguments of the current process.
pub fn get_args() -> Result<Invocation, clap::Error> {
    parse_args(std::env::args_os())
}

/// Renders the usage text, exit code table included.
pub fn render_help() -> String {
    Args::command().help_template(HELP_TEMPLATE).render_help().to_string()
}
