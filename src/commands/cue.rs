use clap::Parser;
use std::path::PathBuf;

/// Prints the disc metadata, files and tracks of one or more CUE sheets.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct InspectCommand {
    /// CUE sheet(s) to read
    #[arg(value_name = "CUE", required = true)]
    pub input: Vec<PathBuf>,

    /// Print the parsed sheet(s) as JSON instead of text
    #[arg(long, short = 'j', default_value_t = false)]
    pub json: bool,
}

/// Prints where every track starts and ends inside its audio file.
#[derive(Parser, Debug, Clone, Eq, PartialEq)]
pub struct SpansCommand {
    /// CUE sheet(s) to read
    #[arg(value_name = "CUE", required = true)]
    pub input: Vec<PathBuf>,
}
