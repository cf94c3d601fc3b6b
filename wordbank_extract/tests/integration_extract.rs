//! Integration tests for the word-only extractors.
//!
//! These tests verify that:
//! - tagged study lists yield each entry's word once, in first-seen order
//! - `--keep-duplicates` style options keep every occurrence
//! - output files are newline-terminated and honour the output encoding

use std::path::Path;
use wordbank_core::TextEncoding;
use wordbank_extract::{GenericExtractor, TaggedExtractor, WordListOptions, write_words};

const KAOYAN_SAMPLE: &str = "\
#separator:tab
RECITE abandon [ə'bændən]\t\"RECITE abandon [ə'bændən] v. 放弃\"
\"SPELLING a_and_n\"\t\"SPELLING a_and_n\tabandon\t[ə'bændən]\tv. 放弃\"
DICTATION\t\"DICTATION \tabandon \t[ə'bændən] v. 放弃\"
RECITE Ability [ə'bɪləti]\t\"RECITE ability\"
DICTATION\t\"DICTATION \tability \t[ə'bɪləti]\"

DICTATION\t\"DICTATION \t[broken] \tability\"
";

fn write_input(dir: &Path, name: &str, content: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_tagged_extractor_dedupes_across_line_shapes() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "考研词汇5500.txt", KAOYAN_SAMPLE.as_bytes());
    let output = dir.path().join("out.txt");

    let count = write_words(&TaggedExtractor, &input, &output, WordListOptions::default()).unwrap();

    assert_eq!(count, 2);
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "abandon\nAbility\n");
}

#[test]
fn test_tagged_extractor_keep_duplicates_and_lower() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "kaoyan.txt", KAOYAN_SAMPLE.as_bytes());
    let output = dir.path().join("out.txt");

    let options = WordListOptions {
        dedupe: false,
        lowercase: true,
        ..WordListOptions::default()
    };
    let count = write_words(&TaggedExtractor, &input, &output, options).unwrap();

    assert_eq!(count, 5);
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "abandon\nabandon\nabandon\nability\nability\n"
    );
}

#[test]
fn test_generic_extractor_with_excel_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "初中英语单词.txt",
        "#separator:tab\n#html:false\napple\t/ˈæpəl/\tn. 苹果\nApple\tn. 苹果公司\n\"what's\"\t是什么\n"
            .as_bytes(),
    );
    let output = dir.path().join("out.txt");

    let options = WordListOptions {
        output_encoding: TextEncoding::utf8_sig(),
        ..WordListOptions::default()
    };
    let count = write_words(&GenericExtractor, &input, &output, options).unwrap();

    assert_eq!(count, 2);
    assert_eq!(
        std::fs::read(&output).unwrap(),
        b"\xEF\xBB\xBFapple\nwhat's\n".to_vec()
    );
}

#[test]
fn test_invalid_utf8_input_is_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "broken.txt", b"apple\t\xFF\xFE\nbanana\n");
    let output = dir.path().join("out.txt");

    let count = write_words(&GenericExtractor, &input, &output, WordListOptions::default()).unwrap();

    assert_eq!(count, 2);
}

#[test]
fn test_missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.txt");

    let result = write_words(
        &GenericExtractor,
        &dir.path().join("missing.txt"),
        &output,
        WordListOptions::default(),
    );

    assert!(result.is_err());
    assert!(!output.exists());
}
