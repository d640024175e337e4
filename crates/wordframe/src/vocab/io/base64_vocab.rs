//! # Base64 Vocabulary IO

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use base64::{Engine, prelude::BASE64_STANDARD};

use crate::{
    errors::{WFResult, WordframeError},
    types::TokenType,
    vocab::Vocabulary,
};

/// Load a [`Vocabulary`] from a base64 vocab file.
///
/// Lines are:
/// ```terminaloutput
/// {BASE64 TOKEN} {ID}
/// ```
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_vocabulary_path<T, P>(path: P) -> WFResult<Vocabulary<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_vocabulary(reader)
}

/// Read a [`Vocabulary`] from a base64 vocab line reader.
///
/// Ids must be exactly ``1..=n``, in order. Blank lines are skipped.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_vocabulary<T, R>(reader: R) -> WFResult<Vocabulary<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut tokens: Vec<String> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        let (encoded, id) = line.split_once(' ').ok_or_else(|| {
            WordframeError::Parse(format!("line {}: expected \"TOKEN ID\"", idx + 1))
        })?;

        let bytes = BASE64_STANDARD
            .decode(encoded)
            .map_err(|e| WordframeError::Parse(format!("line {}: {e}", idx + 1)))?;
        let token = String::from_utf8(bytes)
            .map_err(|e| WordframeError::Parse(format!("line {}: {e}", idx + 1)))?;

        let id: u64 = id
            .parse()
            .map_err(|e: core::num::ParseIntError| {
                WordframeError::Parse(format!("line {}: {e}", idx + 1))
            })?;

        let expected = tokens.len() as u64 + 1;
        if id != expected {
            return Err(WordframeError::VocabConflict(format!(
                "token {token:?} has id {id}; expected {expected}"
            )));
        }

        tokens.push(token);
    }

    Vocabulary::from_ranked_tokens(tokens)
}

/// Save a [`Vocabulary`] to a base64 vocab file.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_vocabulary_path<T: TokenType, P: AsRef<Path>>(
    vocab: &Vocabulary<T>,
    path: P,
) -> WFResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_vocabulary(vocab, &mut writer)
}

/// Write a [`Vocabulary`] to a [`Write`] writer.
///
/// Lines are:
/// ```terminaloutput
/// {BASE64 TOKEN} {ID}
/// ```
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `writer` - the writer to target.
pub fn write_vocabulary<T, W>(
    vocab: &Vocabulary<T>,
    writer: &mut W,
) -> WFResult<()>
where
    T: TokenType,
    W: Write,
{
    for (id, token) in vocab.iter() {
        writeln!(writer, "{} {}", BASE64_STANDARD.encode(token), id)?;
    }
    writer.flush()?;

    Ok(())
}
