use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::bail_parse;
use crate::error::{PathfindError, Result};
use crate::graph::{Edge, Graph};

/// Word ladders: words are nodes, and two words are linked when they differ
/// in exactly one letter.
///
/// Only the dictionary is stored; edges are computed on demand by trying
/// every substitution from the alphabet.
#[derive(Debug, Clone, Default)]
pub struct WordLadder {
    dictionary: HashSet<String>,
    // Ordered so that edges come out in the same order every run
    alphabet: BTreeSet<char>,
}

impl WordLadder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dictionary with one word per line; `#` lines are comments.
    pub fn parse(text: &str) -> Self {
        let mut ladder = WordLadder::new();
        for line in text.lines() {
            let line = line.trim();
            if !line.is_empty() && !line.starts_with('#') {
                ladder.add_word(line);
            }
        }
        tracing::debug!(
            words = ladder.dictionary.len(),
            alphabet = ladder.alphabet.len(),
            "parsed word ladder"
        );
        ladder
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Add a word in lower case. Words with non-letters are ignored.
    /// Returns whether the word was accepted.
    pub fn add_word(&mut self, word: &str) -> bool {
        if word.is_empty() || !word.chars().all(char::is_alphabetic) {
            return false;
        }
        let word = word.to_lowercase();
        self.alphabet.extend(word.chars());
        self.dictionary.insert(word);
        true
    }

    pub fn alphabet(&self) -> impl Iterator<Item = char> + '_ {
        self.alphabet.iter().copied()
    }
}

impl Graph for WordLadder {
    type Node = String;

    fn name(&self) -> &'static str {
        "word ladder"
    }

    fn nodes(&self) -> Result<HashSet<String>> {
        Ok(self.dictionary.clone())
    }

    fn contains_node(&self, v: &String) -> bool {
        self.dictionary.contains(v)
    }

    fn outgoing_edges(&self, v: &String) -> Result<Vec<Edge<String>>> {
        if !self.dictionary.contains(v) {
            return Err(PathfindError::unknown_node(v));
        }
        let letters: Vec<char> = v.chars().collect();
        let mut edges = Vec::new();
        let mut candidate = letters.clone();
        for i in 0..letters.len() {
            for c in self.alphabet.iter().copied() {
                if c == letters[i] {
                    continue;
                }
                candidate[i] = c;
                let word: String = candidate.iter().collect();
                if self.dictionary.contains(&word) {
                    edges.push(Edge::new(v.clone(), word));
                }
            }
            candidate[i] = letters[i];
        }
        Ok(edges)
    }

    fn is_weighted(&self) -> bool {
        false
    }

    /// Number of positions where the words differ. Words of different
    /// lengths can never be connected, so the estimate is infinite.
    fn guess_cost(&self, v: &String, w: &String) -> f64 {
        if v.chars().count() != w.chars().count() {
            return f64::INFINITY;
        }
        v.chars().zip(w.chars()).filter(|(a, b)| a != b).count() as f64
    }

    fn parse_node(&self, s: &str) -> Result<String> {
        let word = s.to_lowercase();
        if !self.dictionary.contains(&word) {
            bail_parse!("word", s, "unknown word");
        }
        Ok(word)
    }
}

impl fmt::Display for WordLadder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let alphabet: String = self.alphabet.iter().collect();
        write!(
            f,
            "Word ladder graph with {} words.\nAlphabet: {}",
            self.dictionary.len(),
            alphabet
        )
    }
}
