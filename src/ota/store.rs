//! In-memory dictionary store backed by a `.ota` text file.
//!
//! A store maps each word to its meanings and keeps entries in ascending
//! lexicographic order of the word, which is also the order written by
//! [`DictionaryStore::save`].
//!
//! Lookups hand out shared borrows; the only way to change an entry is through
//! the store's own methods (`put`, `remove`, `add_meaning`, `remove_meaning`),
//! so nothing outside the store can alias its meaning lists.

use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::Path;
use log::{debug, info, warn};

use super::format::record;
use super::iter::Records;
use super::types::error::{OtaError, Result};
use super::types::models::{LineEnding, LoadOptions, MalformedPolicy};
use super::types::variants::{Multi, Variant};
use super::utils;

/// An ordered mapping from word to meanings.
///
/// The variant `V` decides how many meanings a word carries:
/// - [`Multi`]: one or more, in order
/// - [`Main`](super::types::variants::Main): exactly one
/// - [`Sentence`](super::types::variants::Sentence): exactly one sentence
#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryStore<V: Variant = Multi> {
    entries: BTreeMap<String, V::Value>,
}

impl<V: Variant> Default for DictionaryStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant> DictionaryStore<V> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Parses a whole dictionary stream.
    ///
    /// A later record for the same word replaces an earlier one. Malformed
    /// records are handled according to `options.malformed`; decoding and
    /// I/O errors always fail the load.
    pub fn load<R: Read>(input: R, options: LoadOptions) -> Result<Self> {
        let mut store = Self::new();
        let mut skipped = 0usize;

        for result in Records::<R, V>::new(input) {
            let parsed = result.and_then(|rec| {
                let line = rec.line;
                V::from_meanings(rec.meanings)
                    .map(|value| (rec.word, value, line))
                    .map_err(|reason| record::malformed(line, reason))
            });
            let (word, value, line) = match parsed {
                Ok(entry) => entry,
                Err(OtaError::MalformedRecord { line, reason })
                    if options.malformed == MalformedPolicy::Skip =>
                {
                    warn!("Skipping malformed {} record on line {}: {}", V::DEBUG_NAME, line, reason);
                    skipped += 1;
                    continue;
                }
                Err(e) => return Err(e),
            };
            if store.entries.insert(word, value).is_some() {
                debug!("Line {} replaces an earlier record for the same word", line);
            }
        }

        debug!(
            "Loaded {} {} entries ({} malformed records skipped)",
            store.entries.len(),
            V::DEBUG_NAME,
            skipped
        );
        Ok(store)
    }

    /// Loads a dictionary file.
    ///
    /// # Errors
    /// - `OtaError::NotFound` if the file does not exist
    /// - `OtaError::InvalidUtf8` / `OtaError::TruncatedUtf8` on bad encoding
    /// - `OtaError::MalformedRecord` under `MalformedPolicy::Reject`
    pub fn open(path: impl AsRef<Path>, options: LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening {} dictionary: {}", V::DEBUG_NAME, path.display());
        let file = utils::open_source(path)?;
        let store = Self::load(file, options)?;
        info!("Dictionary {} opened: {} words", path.display(), store.len());
        Ok(store)
    }

    /// Returns the meanings of `word`.
    pub fn get(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(V::meanings)
    }

    /// Returns the stored value of `word` in its variant-specific form.
    pub fn value(&self, word: &str) -> Option<&V::Value> {
        self.entries.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Inserts or replaces the meanings of `word`.
    ///
    /// An empty `meanings` leaves the store untouched and returns `Ok(None)`.
    /// Otherwise returns the previous meanings, if any.
    ///
    /// # Errors
    /// - `OtaError::InvalidValue` if the word or a meaning would not read back
    ///   unchanged from the file format
    /// - `OtaError::MalformedRecord` if the variant rejects the meaning count
    pub fn put(
        &mut self,
        word: impl Into<String>,
        meanings: Vec<String>,
    ) -> Result<Option<Vec<String>>> {
        if meanings.is_empty() {
            return Ok(None);
        }
        let word = word.into();
        record::validate_value::<V::Chars>(&word)?;
        for meaning in &meanings {
            record::validate_value::<V::Chars>(meaning)?;
        }
        let value = V::from_meanings(meanings).map_err(|reason| OtaError::InvalidValue {
            value: word.clone(),
            reason,
        })?;
        Ok(self.entries.insert(word, value).map(V::into_meanings))
    }

    /// Removes `word` and returns its meanings.
    pub fn remove(&mut self, word: &str) -> Option<Vec<String>> {
        self.entries.remove(word).map(V::into_meanings)
    }

    /// All words in ascending order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// All entries in ascending word order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.entries
            .iter()
            .map(|(word, value)| (word.as_str(), V::meanings(value)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the whole store into memory.
    pub fn to_bytes(&self, ending: LineEnding) -> Vec<u8> {
        let mut buf = Vec::new();
        for (word, meanings) in self.iter() {
            // Writing into a Vec cannot fail.
            let _ = record::write_record(&mut buf, word, meanings, ending);
        }
        buf
    }

    /// Writes every entry as `word: meaning, meaning` in word order.
    ///
    /// The records are rendered in memory first and handed to `sink` in a
    /// single write.
    pub fn save<W: Write>(&self, mut sink: W, ending: LineEnding) -> Result<()> {
        sink.write_all(&self.to_bytes(ending))?;
        sink.flush()?;
        Ok(())
    }

    /// Replaces the file at `path` with this store's contents.
    pub fn save_to_path(&self, path: impl AsRef<Path>, ending: LineEnding) -> Result<()> {
        let path = path.as_ref();
        utils::commit_atomically(path, &self.to_bytes(ending))?;
        info!("Saved {} {} entries to {}", self.len(), V::DEBUG_NAME, path.display());
        Ok(())
    }
}

impl DictionaryStore<Multi> {
    /// Appends `meaning` to `word`, creating the entry if needed.
    ///
    /// Returns false if the word already had this meaning.
    pub fn add_meaning(&mut self, word: &str, meaning: impl Into<String>) -> Result<bool> {
        let meaning = meaning.into();
        record::validate_value::<<Multi as Variant>::Chars>(&meaning)?;
        if let Some(meanings) = self.entries.get_mut(word) {
            if meanings.contains(&meaning) {
                return Ok(false);
            }
            meanings.push(meaning);
            return Ok(true);
        }
        self.put(word, vec![meaning])?;
        Ok(true)
    }

    /// Removes one meaning of `word`; removing the last one removes the word.
    ///
    /// Returns false if the word did not have this meaning.
    pub fn remove_meaning(&mut self, word: &str, meaning: &str) -> bool {
        let Some(meanings) = self.entries.get_mut(word) else {
            return false;
        };
        let Some(index) = meanings.iter().position(|m| m == meaning) else {
            return false;
        };
        meanings.remove(index);
        if meanings.is_empty() {
            self.entries.remove(word);
            debug!("Removed last meaning of {:?}; word dropped", word);
        }
        true
    }
}
