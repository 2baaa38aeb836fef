//! Command-line interface orchestration for hypernet.
//!
//! Every command loads a WordNet from a synsets file and a hypernyms file,
//! runs one query against it, and returns a [`Report`] for rendering.

mod commands;

pub use commands::{
    Cli, CliError, Command, HYPERNYMS_ENV, IsNounArgs, NounPair, OutcastArgs, OutcastLine, Report,
    SYNSETS_ENV, render_report, run_cli,
};

#[cfg(test)]
mod test_helpers;
