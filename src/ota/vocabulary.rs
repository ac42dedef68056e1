//! The full vocabulary: one main dictionary, four part-of-speech
//! dictionaries and an example-sentence file per part of speech.
//!
//! # Directory layout
//!
//! ```text
//! <root>/
//! ├── dict/
//! │   ├── MainDict.ota
//! │   ├── NounDict.ota
//! │   ├── VerbDict.ota
//! │   ├── AdjectiveDict.ota
//! │   └── AdverbDict.ota
//! └── sample/
//!     ├── NounSample.ota
//!     ├── VerbSample.ota
//!     ├── AdjectiveSample.ota
//!     └── AdverbSample.ota
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use log::info;

use super::store::DictionaryStore;
use super::types::error::Result;
use super::types::models::{LineEnding, LoadOptions};
use super::types::variants::{Main, Multi, Sentence};
use super::utils;

/// Stored in a sample file when a word has no example sentence.
pub const NO_SAMPLE: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// Capitalized name used in file names.
    pub fn head_word(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "Noun",
            PartOfSpeech::Verb => "Verb",
            PartOfSpeech::Adjective => "Adjective",
            PartOfSpeech::Adverb => "Adverb",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.head_word().to_lowercase())
    }
}

/// Where the vocabulary lives and how it is read and written.
#[derive(Debug, Clone)]
pub struct VocabularyConfig {
    pub root: PathBuf,
    pub load: LoadOptions,
    pub line_ending: LineEnding,
}

impl VocabularyConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            load: LoadOptions::default(),
            line_ending: LineEnding::native(),
        }
    }

    pub fn main_path(&self) -> PathBuf {
        self.root.join("dict").join("MainDict.ota")
    }

    pub fn dictionary_path(&self, part: PartOfSpeech) -> PathBuf {
        self.root
            .join("dict")
            .join(format!("{}Dict.ota", part.head_word()))
    }

    pub fn sample_path(&self, part: PartOfSpeech) -> PathBuf {
        self.root
            .join("sample")
            .join(format!("{}Sample.ota", part.head_word()))
    }
}

/// Everything known about one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry<'a> {
    pub word: &'a str,
    pub main: Option<&'a str>,
    pub meanings: Vec<(PartOfSpeech, &'a [String])>,
}

/// The loaded vocabulary. Owns every store; callers borrow them.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    config: VocabularyConfig,
    main: DictionaryStore<Main>,
    parts: BTreeMap<PartOfSpeech, DictionaryStore<Multi>>,
    samples: BTreeMap<PartOfSpeech, DictionaryStore<Sentence>>,
}

impl Vocabulary {
    /// An empty vocabulary that will be saved under `config.root`.
    pub fn empty(config: VocabularyConfig) -> Self {
        Self {
            config,
            main: DictionaryStore::new(),
            parts: PartOfSpeech::ALL
                .into_iter()
                .map(|part| (part, DictionaryStore::new()))
                .collect(),
            samples: PartOfSpeech::ALL
                .into_iter()
                .map(|part| (part, DictionaryStore::new()))
                .collect(),
        }
    }

    /// Loads every dictionary and sample file.
    ///
    /// # Errors
    /// Fails on the first file that is missing or cannot be parsed.
    pub fn open(config: VocabularyConfig) -> Result<Self> {
        info!("Opening vocabulary at {}", config.root.display());
        let main = DictionaryStore::open(config.main_path(), config.load)?;
        let mut parts = BTreeMap::new();
        let mut samples = BTreeMap::new();
        for part in PartOfSpeech::ALL {
            parts.insert(
                part,
                DictionaryStore::open(config.dictionary_path(part), config.load)?,
            );
            samples.insert(
                part,
                DictionaryStore::open(config.sample_path(part), config.load)?,
            );
        }
        info!("Vocabulary opened: {} main words", main.len());
        Ok(Self {
            config,
            main,
            parts,
            samples,
        })
    }

    /// Writes every store back to its file.
    pub fn save(&self) -> Result<()> {
        let ending = self.config.line_ending;
        create_parent(&self.config.main_path())?;
        self.main.save_to_path(self.config.main_path(), ending)?;
        for part in PartOfSpeech::ALL {
            let dictionary_path = self.config.dictionary_path(part);
            let sample_path = self.config.sample_path(part);
            create_parent(&sample_path)?;
            self.part(part).save_to_path(dictionary_path, ending)?;
            self.samples(part).save_to_path(sample_path, ending)?;
        }
        Ok(())
    }

    pub fn config(&self) -> &VocabularyConfig {
        &self.config
    }

    pub fn main(&self) -> &DictionaryStore<Main> {
        &self.main
    }

    pub fn main_mut(&mut self) -> &mut DictionaryStore<Main> {
        &mut self.main
    }

    pub fn part(&self, part: PartOfSpeech) -> &DictionaryStore<Multi> {
        &self.parts[&part]
    }

    pub fn part_mut(&mut self, part: PartOfSpeech) -> &mut DictionaryStore<Multi> {
        self.parts.entry(part).or_default()
    }

    pub fn samples(&self, part: PartOfSpeech) -> &DictionaryStore<Sentence> {
        &self.samples[&part]
    }

    /// Gathers `word` from the main and every part-of-speech dictionary.
    ///
    /// Returns `None` if no dictionary knows the word.
    pub fn lookup<'a>(&'a self, word: &'a str) -> Option<WordEntry<'a>> {
        let main = self.main.value(word).map(String::as_str);
        let meanings: Vec<_> = self
            .parts
            .iter()
            .filter_map(|(part, store)| store.get(word).map(|m| (*part, m)))
            .collect();
        if main.is_none() && meanings.is_empty() {
            return None;
        }
        Some(WordEntry {
            word,
            main,
            meanings,
        })
    }

    /// The example sentence for `word`, if one is recorded.
    pub fn clue(&self, part: PartOfSpeech, word: &str) -> Option<&str> {
        self.samples(part)
            .value(word)
            .map(String::as_str)
            .filter(|sentence| *sentence != NO_SAMPLE)
    }

    /// Records an example sentence, uppercasing its first letter.
    pub fn set_clue(&mut self, part: PartOfSpeech, word: &str, sentence: &str) -> Result<()> {
        let sentence = utils::capitalize_first(sentence.trim());
        self.samples
            .entry(part)
            .or_default()
            .put(word, vec![sentence])?;
        Ok(())
    }

    /// Removes `word` from every dictionary and sample file.
    ///
    /// Returns true if any store held the word.
    pub fn remove_word(&mut self, word: &str) -> bool {
        let mut removed = self.main.remove(word).is_some();
        for store in self.parts.values_mut() {
            removed |= store.remove(word).is_some();
        }
        for store in self.samples.values_mut() {
            removed |= store.remove(word).is_some();
        }
        removed
    }

    /// Words of the main dictionary in ascending order.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.main.words()
    }
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
