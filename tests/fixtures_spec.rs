use std::fs;
use std::path::{Path, PathBuf};

use ota_dict::{
    LineEnding, OtaError, PartOfSpeech, Vocabulary, VocabularyConfig,
};

fn fixture_path(parts: &[&str]) -> PathBuf {
    let mut p = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    for part in parts {
        p.push(part);
    }
    p
}

fn fixture_config() -> VocabularyConfig {
    let mut config = VocabularyConfig::new(fixture_path(&["tests", "fixtures", "vocab"]));
    config.line_ending = LineEnding::Lf;
    config
}

fn copy_tree(from: &Path, to: &Path) {
    fs::create_dir_all(to).expect("create dir");
    for entry in fs::read_dir(from).expect("read dir") {
        let entry = entry.expect("dir entry");
        let target = to.join(entry.file_name());
        if entry.file_type().expect("file type").is_dir() {
            copy_tree(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), &target).expect("copy file");
        }
    }
}

#[test]
fn vocabulary_fixture_loads() {
    let vocab = Vocabulary::open(fixture_config()).expect("open vocabulary");

    assert_eq!(
        vocab.words().collect::<Vec<_>>(),
        vec!["apple", "book", "run", "свет"]
    );
    assert_eq!(
        vocab.main().value("book").map(String::as_str),
        Some("printed pages bound together")
    );
    assert_eq!(
        vocab.part(PartOfSpeech::Noun).get("book").unwrap(),
        &["a written work".to_string(), "a set of printed pages".to_string()][..]
    );
    assert_eq!(
        vocab.part(PartOfSpeech::Verb).get("run").unwrap().len(),
        3
    );
    assert_eq!(
        vocab.part(PartOfSpeech::Adjective).get("run").unwrap(),
        &["operating — in motion".to_string()][..]
    );
    assert!(vocab.part(PartOfSpeech::Adverb).is_empty());
}

#[test]
fn lookup_gathers_every_part_of_speech() {
    let vocab = Vocabulary::open(fixture_config()).expect("open vocabulary");

    let entry = vocab.lookup("run").expect("run is known");
    assert_eq!(entry.main, Some("to move quickly on foot"));
    let parts: Vec<PartOfSpeech> = entry.meanings.iter().map(|(part, _)| *part).collect();
    assert_eq!(parts, vec![PartOfSpeech::Verb, PartOfSpeech::Adjective]);

    assert!(vocab.lookup("unknown").is_none());
}

#[test]
fn clues_come_from_sample_files() {
    let vocab = Vocabulary::open(fixture_config()).expect("open vocabulary");

    assert_eq!(
        vocab.clue(PartOfSpeech::Noun, "apple"),
        Some("An apple a day keeps the doctor away.")
    );
    assert_eq!(vocab.clue(PartOfSpeech::Noun, "book"), None);
    assert_eq!(
        vocab.clue(PartOfSpeech::Verb, "book"),
        Some("We booked a table, then a taxi.")
    );
    assert_eq!(vocab.clue(PartOfSpeech::Adverb, "run"), None);
}

#[test]
fn edits_survive_save_and_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    copy_tree(&fixture_path(&["tests", "fixtures", "vocab"]), dir.path());
    let mut config = VocabularyConfig::new(dir.path());
    config.line_ending = LineEnding::Lf;

    let mut vocab = Vocabulary::open(config.clone()).expect("open copy");
    vocab
        .main_mut()
        .put("swim", vec!["to move through water".into()])
        .unwrap();
    vocab
        .part_mut(PartOfSpeech::Verb)
        .add_meaning("swim", "to move through water")
        .unwrap();
    vocab
        .set_clue(PartOfSpeech::Verb, "swim", "fish swim in the sea.")
        .unwrap();
    assert!(vocab.remove_word("apple"));
    assert!(!vocab.remove_word("apple"));
    vocab.save().expect("save");

    let reopened = Vocabulary::open(config.clone()).expect("reopen");
    assert_eq!(
        reopened.words().collect::<Vec<_>>(),
        vec!["book", "run", "swim", "свет"]
    );
    assert_eq!(
        reopened.clue(PartOfSpeech::Verb, "swim"),
        Some("Fish swim in the sea.")
    );
    assert!(reopened.part(PartOfSpeech::Noun).get("apple").is_none());
    assert!(reopened.samples(PartOfSpeech::Noun).value("apple").is_none());

    assert_eq!(
        fs::read_to_string(config.dictionary_path(PartOfSpeech::Noun)).unwrap(),
        "book: a written work, a set of printed pages\nсвет: light, world\n"
    );
}

#[test]
fn empty_vocabulary_creates_its_layout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = VocabularyConfig::new(dir.path().join("fresh"));
    config.line_ending = LineEnding::Lf;

    let mut vocab = Vocabulary::empty(config.clone());
    vocab.main_mut().put("tea", vec!["a hot drink".into()]).unwrap();
    vocab.save().expect("save");

    assert!(config.sample_path(PartOfSpeech::Adverb).exists());
    let reopened = Vocabulary::open(config).expect("reopen");
    assert_eq!(reopened.main().len(), 1);
}

#[test]
fn missing_files_fail_the_open() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = VocabularyConfig::new(dir.path());
    match Vocabulary::open(config.clone()) {
        Err(OtaError::NotFound { path }) => assert_eq!(path, config.main_path()),
        other => panic!("expected not found, got {:?}", other.map(|_| ())),
    }
}
