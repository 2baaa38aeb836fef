//! Line-based readers for synset and hypernym record files.
//!
//! Synset records look like `36,AND_circuit AND_gate,a circuit in a computer`:
//! an id, the member nouns separated by spaces, and an optional gloss that may
//! itself contain commas. Hypernym records look like `164,21012,56099`: a
//! hyponym id followed by zero or more hypernym ids. Blank lines are skipped
//! and `\r\n` endings are accepted.

mod errors;

use std::io::BufRead;

use hypernet_core::{Synset, SynsetId, WordNet, WordNetBuilder};
use tracing::{debug, instrument};

pub use errors::{RecordKind, TextProviderError};

/// One hypernym record: a hyponym and every hypernym listed for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HypernymRecord {
    /// The more specific synset.
    pub hyponym: SynsetId,
    /// The more general synsets, in file order.
    pub hypernyms: Vec<SynsetId>,
}

/// Reads every synset record from `reader`.
///
/// # Errors
/// Returns [`TextProviderError::EmptyInput`] when no record is present,
/// [`TextProviderError::MalformedRecord`] for an unparsable line, and
/// [`TextProviderError::Io`] when reading fails.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use hypernet_providers_text::read_synsets;
///
/// let synsets = read_synsets(Cursor::new("0,entity,that which is\n1,dog domestic_dog,a canine\n"))?;
/// assert_eq!(synsets.len(), 2);
/// assert_eq!(synsets[1].terms(), ["dog", "domestic_dog"]);
/// assert_eq!(synsets[1].gloss(), Some("a canine"));
/// # Ok::<(), hypernet_providers_text::TextProviderError>(())
/// ```
pub fn read_synsets<R: BufRead>(reader: R) -> Result<Vec<Synset>, TextProviderError> {
    let mut synsets = Vec::new();
    for_each_record(reader, |line, record| {
        synsets.push(parse_synset(line, record)?);
        Ok(())
    })?;
    if synsets.is_empty() {
        return Err(TextProviderError::EmptyInput {
            kind: RecordKind::Synsets,
        });
    }
    Ok(synsets)
}

/// Reads every hypernym record from `reader`. An empty stream is valid and
/// describes a graph with no edges.
///
/// # Errors
/// Returns [`TextProviderError::MalformedRecord`] for an unparsable line and
/// [`TextProviderError::Io`] when reading fails.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use hypernet_providers_text::{HypernymRecord, read_hypernyms};
///
/// let records = read_hypernyms(Cursor::new("1,0\n2,0,1\n"))?;
/// assert_eq!(records[1], HypernymRecord { hyponym: 2, hypernyms: vec![0, 1] });
/// # Ok::<(), hypernet_providers_text::TextProviderError>(())
/// ```
pub fn read_hypernyms<R: BufRead>(reader: R) -> Result<Vec<HypernymRecord>, TextProviderError> {
    let mut records = Vec::new();
    for_each_record(reader, |line, record| {
        records.push(parse_hypernyms(line, record)?);
        Ok(())
    })?;
    Ok(records)
}

/// Reads both record streams and builds a validated [`WordNet`].
///
/// # Errors
/// Returns any parse failure from [`read_synsets`] or [`read_hypernyms`], and
/// [`TextProviderError::Core`] when the records do not form a rooted DAG.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use hypernet_providers_text::load_wordnet;
///
/// let wordnet = load_wordnet(
///     "demo",
///     Cursor::new("0,a,\n1,b,\n2,c,\n"),
///     Cursor::new("0,2\n1,2\n"),
/// )?;
/// assert_eq!(wordnet.distance("a", "b")?, 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(name = "text.load_wordnet", err, skip(synsets, hypernyms))]
pub fn load_wordnet<S, H>(name: &str, synsets: S, hypernyms: H) -> Result<WordNet, TextProviderError>
where
    S: BufRead,
    H: BufRead,
{
    let synsets = read_synsets(synsets)?;
    let records = read_hypernyms(hypernyms)?;
    debug!(
        synsets = synsets.len(),
        records = records.len(),
        "records parsed"
    );
    let builder = records.into_iter().fold(
        WordNetBuilder::new().with_name(name).with_synsets(synsets),
        |builder, record| builder.with_hypernyms(record.hyponym, record.hypernyms),
    );
    Ok(builder.build()?)
}

fn for_each_record<R, F>(reader: R, mut visit: F) -> Result<(), TextProviderError>
where
    R: BufRead,
    F: FnMut(usize, &str) -> Result<(), TextProviderError>,
{
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let record = line.trim_end_matches('\r');
        if record.trim().is_empty() {
            continue;
        }
        visit(index + 1, record)?;
    }
    Ok(())
}

fn parse_synset(line: usize, record: &str) -> Result<Synset, TextProviderError> {
    let mut fields = record.splitn(3, ',');
    let id = parse_id(RecordKind::Synsets, line, fields.next().unwrap_or_default())?;
    let nouns = fields
        .next()
        .ok_or_else(|| malformed(RecordKind::Synsets, line, "missing noun field"))?;
    let terms: Vec<&str> = nouns.split_whitespace().collect();
    if terms.is_empty() {
        return Err(malformed(RecordKind::Synsets, line, "synset lists no nouns"));
    }
    let synset = Synset::new(id, terms);
    Ok(match fields.next().map(str::trim) {
        Some(gloss) if !gloss.is_empty() => synset.with_gloss(gloss),
        _ => synset,
    })
}

fn parse_hypernyms(line: usize, record: &str) -> Result<HypernymRecord, TextProviderError> {
    let mut fields = record.split(',');
    let hyponym = parse_id(RecordKind::Hypernyms, line, fields.next().unwrap_or_default())?;
    let hypernyms = fields
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(|field| parse_id(RecordKind::Hypernyms, line, field))
        .collect::<Result<_, _>>()?;
    Ok(HypernymRecord { hyponym, hypernyms })
}

fn parse_id(kind: RecordKind, line: usize, field: &str) -> Result<SynsetId, TextProviderError> {
    let trimmed = field.trim();
    trimmed
        .parse()
        .map_err(|_| malformed(kind, line, format!("`{trimmed}` is not a synset id")))
}

fn malformed(kind: RecordKind, line: usize, reason: impl Into<String>) -> TextProviderError {
    TextProviderError::MalformedRecord {
        kind,
        line,
        reason: reason.into(),
    }
}
