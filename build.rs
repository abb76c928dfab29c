//! Build script to embed the word lists
//!
//! Each list file holds one word per line. Every entry must be exactly five
//! ASCII letters; anything else fails the build so the embedded lists never
//! need runtime validation beyond normalization.

use std::collections::HashSet;
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const WORD_LENGTH: usize = 5;

struct WordList {
    input: &'static str,
    output: &'static str,
    const_name: &'static str,
    doc: &'static str,
}

const LISTS: [WordList; 2] = [
    WordList {
        input: "data/solutions.txt",
        output: "solutions.rs",
        const_name: "SOLUTIONS",
        doc: "Words eligible to be chosen as the hidden solution",
    },
    WordList {
        input: "data/guesses.txt",
        output: "guesses.rs",
        const_name: "GUESSES",
        doc: "Every word accepted as a guess",
    },
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");

    for list in &LISTS {
        println!("cargo:rerun-if-changed={}", list.input);

        let content = fs::read_to_string(list.input)
            .unwrap_or_else(|e| panic!("Failed to read {}: {e}", list.input));
        let words = parse_words(list.input, &content);

        let path = Path::new(&out_dir).join(list.output);
        fs::write(&path, render(list, &words))
            .unwrap_or_else(|e| panic!("Failed to write {}: {e}", path.display()));
    }
}

/// Trimmed, lowercased, non-blank lines; panics on a malformed entry
fn parse_words(input: &str, content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        assert!(
            word.len() == WORD_LENGTH && word.bytes().all(|b| b.is_ascii_alphabetic()),
            "{input}:{}: '{word}' is not a {WORD_LENGTH}-letter word",
            line_no + 1
        );

        let word = word.to_ascii_lowercase();
        if seen.insert(word.clone()) {
            words.push(word);
        } else {
            println!(
                "cargo:warning={input}:{}: duplicate word '{word}'",
                line_no + 1
            );
        }
    }

    words
}

fn render(list: &WordList, words: &[String]) -> String {
    let name = list.const_name;
    let count = words.len();
    let mut out = String::new();

    let _ = writeln!(out, "// Generated from {}", list.input);
    let _ = writeln!(out);
    let _ = writeln!(out, "/// {}", list.doc);
    let _ = writeln!(out, "pub const {name}: &[&str] = &[");
    for word in words {
        let _ = writeln!(out, "    \"{word}\",");
    }
    let _ = writeln!(out, "];");
    let _ = writeln!(out);
    let _ = writeln!(out, "/// Number of words in {name}");
    let _ = writeln!(out, "pub const {name}_COUNT: usize = {count};");

    out
}
