mod alphabet;
mod builder;

pub use self::alphabet::{normalize, Alphabet};
pub use self::builder::TrieBuilder;
use crate::labelset::{Label, LabelSet};
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

/// Index of the root node.
pub const ROOT: usize = 0;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// A read-only trie that holds all the valid words of a dictionary.
///
/// Nodes are stored breadth first: the children of a node are contiguous,
/// so a node only needs the index of its first child and the set of child labels.
pub struct Trie {
    /// List of nodes in trie. Each node is a tuple with the index of the first
    /// child node, and a `LabelSet` with the labels of all child nodes.
    nodes: Vec<(u32, LabelSet)>,
    /// Label of each node.
    labels: Vec<Label>,
    /// List indicating terminal nodes
    terminal: Vec<bool>,
    /// Translate letters to labels.
    alphabet: Alphabet,
    word_count: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Trie::from_builder(&TrieBuilder::new(), Alphabet::default())
    }
}

impl fmt::Display for Trie {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Trie: {} words, {} nodes, alphabet '{}'>",
            self.word_count,
            self.node_count(),
            self.alphabet.letters().iter().collect::<String>()
        )
    }
}

pub struct IteratorChildren<'a> {
    trie: &'a Trie,
    range: std::ops::Range<usize>,
}

impl<'a> Iterator for IteratorChildren<'a> {
    type Item = (char, usize);
    fn next(&mut self) -> Option<Self::Item> {
        for i in self.range.by_ref() {
            if let Some(letter) = self.trie.alphabet.letter(self.trie.labels[i]) {
                return Some((letter, i));
            }
        }
        None
    }
}

impl Trie {
    fn from_builder(builder: &TrieBuilder<Label>, alphabet: Alphabet) -> Trie {
        let mut nodes: Vec<(u32, LabelSet)> = Vec::new();
        let mut labels: Vec<Label> = Vec::new();
        let mut terminal: Vec<bool> = Vec::new();
        let mut word_count = 0;

        let mut i: usize = 0;
        let mut queue = VecDeque::new();
        queue.push_back((builder, ROOT, 0));
        while let Some((node, parent, label)) = queue.pop_front() {
            let ls: LabelSet = node.children().iter().map(|(label, _)| *label).collect();
            for (child_label, child) in node.children() {
                queue.push_back((child.as_ref(), i, *child_label));
            }
            if node.terminal() {
                word_count += 1;
            }
            nodes.push((0, ls));
            terminal.push(node.terminal());
            labels.push(label);
            if i > 0 && nodes[parent].0 == 0 {
                nodes[parent].0 = i as u32;
            }
            i += 1;
        }
        Trie {
            nodes,
            labels,
            terminal,
            alphabet,
            word_count,
        }
    }

    /// Build a trie from a list of words. Words are case-normalized, empty words are skipped.
    /// ## Errors
    /// If the words use more than 63 distinct letters.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Trie, Error};
    /// let trie = Trie::from_words(&["rust", "rest"])?;
    /// assert!(trie.contains("Rust"));
    /// assert!(trie.has_prefix("re"));
    /// assert!(!trie.contains("re"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Trie, Error> {
        let alphabet = Alphabet::from_words(words)?;
        let mut builder = TrieBuilder::new();
        for word in words {
            // every letter is in the alphabet, it was built from these words
            if let Some(labels) = alphabet.encode(word.as_ref()) {
                if !labels.is_empty() {
                    builder.insert(labels);
                }
            }
        }
        Ok(Trie::from_builder(&builder, alphabet))
    }

    #[cfg(feature = "bincode")]
    /// Deserialize the trie from a bincoded file.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(path: &str) -> Result<Trie, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(path).map_err(|source| Error::ReadError {
            path: String::from(path),
            source,
        })?;
        let reader = BufReader::new(file);
        bincode::deserialize_from(reader)
            .map_err(|_| Error::TrieDeserializeError(String::from(path)))
    }

    #[cfg(feature = "bincode")]
    /// Serialize the trie to a bincoded file.
    /// ## Errors
    /// - If the file can not be created.
    /// - If the trie can not be serialized
    pub fn serialize_into(&self, path: &str) -> Result<(), Error> {
        use std::fs::File;
        use std::io::BufWriter;
        let file = File::create(path).map_err(|source| Error::WriteError {
            path: String::from(path),
            source,
        })?;
        let writer = BufWriter::new(file);
        bincode::serialize_into(writer, self)
            .map_err(|_| Error::TrieSerializeError(String::from(path)))
    }

    /// Returns true if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Index of the root node.
    pub fn root(&self) -> usize {
        ROOT
    }

    /// Returns true if the path to `node` spells a word.
    pub fn is_terminal(&self, node: usize) -> bool {
        self.terminal[node]
    }

    /// Get the index of the child of `node` reached with `letter`, if present.
    pub fn child(&self, node: usize, letter: char) -> Option<usize> {
        let label = self.alphabet.label(letter)?;
        self.child_by_label(node, label)
    }

    fn child_by_label(&self, node: usize, label: Label) -> Option<usize> {
        let (start, labels) = &self.nodes[node];
        labels.index_of(label).map(|index| *start as usize + index)
    }

    /// Iterate over the (letter, node) children of `node`, in alphabet order.
    pub fn children(&self, node: usize) -> IteratorChildren {
        let (start, labels) = &self.nodes[node];
        let start = *start as usize;
        let range = if labels.is_empty() {
            0..0
        } else {
            start..start + labels.len()
        };
        IteratorChildren { trie: self, range }
    }

    /// Follow `word` from the root, returning the node it ends in.
    pub fn walk(&self, word: &str) -> Option<usize> {
        word.chars()
            .try_fold(ROOT, |node, letter| self.child(node, letter))
    }

    /// Returns true if `word` is in the trie.
    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty() && self.walk(word).map_or(false, |node| self.terminal[node])
    }

    /// Returns true if some word in the trie starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        !self.is_empty() && self.walk(prefix).is_some()
    }
}
