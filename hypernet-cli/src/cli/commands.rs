//! Command implementations and argument parsing for the hypernet CLI.

use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use hypernet_core::{Outcast, Synset, WordNet, WordNetError};
use hypernet_providers_text::{TextProviderError, load_wordnet};
use thiserror::Error;
use tracing::{Span, debug, field, info, instrument};

/// Environment variable naming the synsets file.
pub const SYNSETS_ENV: &str = "HYPERNET_SYNSETS";
/// Environment variable naming the hypernyms file.
pub const HYPERNYMS_ENV: &str = "HYPERNET_HYPERNYMS";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "hypernet",
    about = "Query noun relatedness over a WordNet hypernym graph."
)]
pub struct Cli {
    /// Synset records, one `id,noun noun ...,gloss` per line.
    #[arg(long, env = SYNSETS_ENV, value_name = "PATH")]
    pub synsets: PathBuf,

    /// Hypernym records, one `id,hypernym,...` per line.
    #[arg(long, env = HYPERNYMS_ENV, value_name = "PATH")]
    pub hypernyms: PathBuf,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the length of the shortest ancestral path between two nouns.
    Distance(NounPair),
    /// Print the synset on the shortest ancestral path between two nouns.
    Ancestor(NounPair),
    /// Report whether a word is a known noun.
    IsNoun(IsNounArgs),
    /// List every known noun.
    Nouns,
    /// Print the outcast of each file's whitespace-separated nouns.
    Outcast(OutcastArgs),
}

/// Two nouns to relate.
#[derive(Debug, Args, Clone)]
pub struct NounPair {
    /// First noun.
    pub left: String,
    /// Second noun.
    pub right: String,
}

/// Arguments for `is-noun`.
#[derive(Debug, Args, Clone)]
pub struct IsNounArgs {
    /// Word to look up.
    pub term: String,
}

/// Arguments for `outcast`.
#[derive(Debug, Args, Clone)]
pub struct OutcastArgs {
    /// Files listing the nouns to rank.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading an input.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Record parsing or graph validation failed.
    #[error(transparent)]
    Text(#[from] TextProviderError),
    /// A query against the loaded WordNet failed.
    #[error(transparent)]
    Core(#[from] WordNetError),
    /// A noun list could not be ranked.
    #[error("`{path}`: {source}")]
    Outcast {
        /// File holding the rejected list.
        path: PathBuf,
        /// Underlying query failure.
        #[source]
        source: WordNetError,
    },
}

impl CliError {
    /// Returns the query error carried by this failure, if any.
    #[must_use]
    pub fn wordnet_error(&self) -> Option<&WordNetError> {
        match self {
            Self::Core(error) | Self::Outcast { source: error, .. } => Some(error),
            Self::Text(TextProviderError::Core(error)) => Some(error),
            _ => None,
        }
    }
}

/// The outcast selected for one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcastLine {
    /// File the nouns were read from.
    pub path: PathBuf,
    /// The least related noun in that file.
    pub outcast: String,
}

/// The result of a command, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Shortest ancestral path length.
    Distance(usize),
    /// Shortest common ancestor synset.
    Ancestor(Synset),
    /// Whether the term is a known noun.
    IsNoun(bool),
    /// Every known noun in first-seen order.
    Nouns(Vec<String>),
    /// One outcast per input file, in argument order.
    Outcast(Vec<OutcastLine>),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when an input cannot be read or parsed, or a query
/// is rejected.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use hypernet_cli::cli::{Cli, Command, NounPair, Report, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let synsets = NamedTempFile::new()?;
/// std::fs::write(synsets.path(), "0,dog,\n1,cat,\n2,animal,\n")?;
/// let hypernyms = NamedTempFile::new()?;
/// std::fs::write(hypernyms.path(), "0,2\n1,2\n")?;
/// let cli = Cli {
///     synsets: synsets.path().to_path_buf(),
///     hypernyms: hypernyms.path().to_path_buf(),
///     command: Command::Distance(NounPair {
///         left: "dog".into(),
///         right: "cat".into(),
///     }),
/// };
/// assert_eq!(run_cli(cli)?, Report::Distance(2));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty)
)]
pub fn run_cli(cli: Cli) -> Result<Report, CliError> {
    let Cli {
        synsets,
        hypernyms,
        command,
    } = cli;
    Span::current().record("command", field::display(command_label(&command)));
    let wordnet = load(&synsets, &hypernyms)?;
    run_command(&wordnet, command)
}

pub(super) fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Distance(_) => "distance",
        Command::Ancestor(_) => "ancestor",
        Command::IsNoun(_) => "is-noun",
        Command::Nouns => "nouns",
        Command::Outcast(_) => "outcast",
    }
}

#[instrument(
    name = "cli.load",
    err,
    skip_all,
    fields(synsets = %synsets.display(), hypernyms = %hypernyms.display())
)]
pub(super) fn load(synsets: &Path, hypernyms: &Path) -> Result<WordNet, CliError> {
    let name = derive_wordnet_name(synsets);
    let wordnet = load_wordnet(&name, open_reader(synsets)?, open_reader(hypernyms)?)?;
    info!(
        wordnet = wordnet.name(),
        nouns = wordnet.index().noun_count(),
        synsets = wordnet.index().synset_count(),
        "wordnet loaded"
    );
    Ok(wordnet)
}

#[instrument(name = "cli.execute", err, skip(wordnet, command))]
pub(super) fn run_command(wordnet: &WordNet, command: Command) -> Result<Report, CliError> {
    let report = match command {
        Command::Distance(NounPair { left, right }) => {
            Report::Distance(wordnet.distance(&left, &right)?)
        }
        Command::Ancestor(NounPair { left, right }) => {
            Report::Ancestor(wordnet.common_ancestor(&left, &right)?.clone())
        }
        Command::IsNoun(IsNounArgs { term }) => Report::IsNoun(wordnet.is_noun(&term)),
        Command::Nouns => Report::Nouns(wordnet.nouns().map(ToOwned::to_owned).collect()),
        Command::Outcast(OutcastArgs { files }) => Report::Outcast(run_outcast(wordnet, files)?),
    };
    debug!(?report, "command completed");
    Ok(report)
}

#[instrument(name = "cli.outcast", err, skip(wordnet, files), fields(files = files.len()))]
pub(super) fn run_outcast(
    wordnet: &WordNet,
    files: Vec<PathBuf>,
) -> Result<Vec<OutcastLine>, CliError> {
    let lists = files
        .iter()
        .map(|path| read_noun_list(path))
        .collect::<Result<Vec<_>, _>>()?;
    let outcast = Outcast::new(wordnet);

    #[cfg(feature = "parallel")]
    let results = outcast.outcast_batch(&lists);
    #[cfg(not(feature = "parallel"))]
    let results: Vec<_> = lists
        .iter()
        .map(|nouns| outcast.outcast(nouns.as_slice()))
        .collect();

    files
        .into_iter()
        .zip(results)
        .map(|(path, result)| match result {
            Ok(noun) => Ok(OutcastLine {
                outcast: noun.to_owned(),
                path,
            }),
            Err(source) => Err(CliError::Outcast { path, source }),
        })
        .collect()
}

pub(super) fn read_noun_list(path: &Path) -> Result<Vec<String>, CliError> {
    let contents = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(contents.split_whitespace().map(ToOwned::to_owned).collect())
}

#[instrument(name = "cli.open_reader", err, fields(path = field::Empty))]
pub(super) fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_wordnet_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "wordnet".to_owned())
}

/// Renders `report` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::path::PathBuf;
/// # use hypernet_cli::cli::{OutcastLine, Report, render_report};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let report = Report::Outcast(vec![OutcastLine {
///     path: PathBuf::from("outcast5.txt"),
///     outcast: "table".into(),
/// }]);
/// let mut buffer = Vec::new();
/// render_report(&report, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "outcast5.txt: table\n");
/// # Ok(())
/// # }
/// ```
pub fn render_report(report: &Report, mut writer: impl Write) -> io::Result<()> {
    match report {
        Report::Distance(distance) => writeln!(writer, "{distance}")?,
        Report::Ancestor(synset) => writeln!(writer, "{}", synset.text())?,
        Report::IsNoun(known) => writeln!(writer, "{known}")?,
        Report::Nouns(nouns) => {
            for noun in nouns {
                writeln!(writer, "{noun}")?;
            }
        }
        Report::Outcast(lines) => {
            for line in lines {
                writeln!(writer, "{}: {}", line.path.display(), line.outcast)?;
            }
        }
    }
    Ok(())
}
