use crate::commands::cue::{InspectCommand, SpansCommand};
use clap::{Parser, Subcommand};

pub mod cue;

/// CLI for reading CUE sheets and the track layout they describe.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Inspect(InspectCommand),
    Spans(SpansCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_inspect_with_json() {
        let cli = Cli::try_parse_from(["cuesheet", "inspect", "--json", "a.cue", "b.cue"]).unwrap();
        match cli.command {
            Commands::Inspect(cmd) => {
                assert!(cmd.json);
                assert_eq!(cmd.input, vec![PathBuf::from("a.cue"), PathBuf::from("b.cue")]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn spans_requires_an_input() {
        assert!(Cli::try_parse_from(["cuesheet", "spans"]).is_err());
    }
}
