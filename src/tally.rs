//! Word frequencies bucketed by word length
//!
//! Backs the `hapax` binary, which reports words occurring exactly once.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use bstr::ByteSlice;

use crate::input::LineReader;

/// Largest `max_len` a tally accepts
pub const MAX_WORD_LEN_LIMIT: u64 = 1024;

/// Longest word counted unless configured otherwise
pub const DEFAULT_MAX_WORD_LEN: usize = 24;

pub struct WordTally {
    /// Index is word length in characters; index 0 stays empty
    buckets: Vec<BTreeMap<String, usize>>,
    max_len: usize,
    total: usize,
}

impl WordTally {
    pub fn new(max_len: usize) -> Self {
        Self {
            buckets: vec![BTreeMap::new(); max_len + 1],
            max_len,
            total: 0,
        }
    }

    /// Tally every word in `reader`
    ///
    /// Input need not be valid UTF-8; undecodable bytes never form words.
    pub fn from_reader<R: BufRead>(reader: R, max_len: usize) -> io::Result<Self> {
        let mut tally = Self::new(max_len);
        let mut lines = LineReader::new(reader);
        while let Some(line) = lines.read_line()? {
            for word in line.words() {
                tally.add(word);
            }
        }
        Ok(tally)
    }

    /// Count one word, returning false if it was skipped
    ///
    /// Only purely alphabetic words of 1..=max_len characters are counted,
    /// case-insensitively.
    pub fn add(&mut self, word: &str) -> bool {
        if !word.chars().all(char::is_alphabetic) {
            return false;
        }
        let len = word.chars().count();
        if len == 0 || len > self.max_len {
            return false;
        }

        *self.buckets[len].entry(word.to_lowercase()).or_insert(0) += 1;
        self.total += 1;
        true
    }

    /// Number of words counted, repeats included
    pub fn total_words(&self) -> usize {
        self.total
    }

    pub fn count(&self, word: &str) -> usize {
        let word = word.to_lowercase();
        self.buckets
            .get(word.chars().count())
            .and_then(|bucket| bucket.get(&word))
            .copied()
            .unwrap_or(0)
    }

    /// Words seen exactly once, shortest first and sorted within a length
    pub fn hapax(&self, length: Option<usize>) -> Vec<&str> {
        let buckets: Vec<&BTreeMap<String, usize>> = match length {
            Some(len) => self.buckets.get(len).into_iter().collect(),
            None => self.buckets.iter().collect(),
        };

        buckets
            .into_iter()
            .flat_map(|bucket| bucket.iter())
            .filter(|&(_, &count)| count == 1)
            .map(|(word, _)| word.as_str())
            .collect()
    }

    pub fn write_data<W: Write>(&self, writer: &mut W, name: &str) -> io::Result<()> {
        writeln!(writer, "All word count data from file '{}':", name)?;
        for (len, bucket) in self.buckets.iter().enumerate() {
            if bucket.is_empty() {
                continue;
            }
            writeln!(writer, "Length {}:", len)?;
            for (word, count) in bucket {
                writeln!(writer, "    '{}' {}", word, count)?;
            }
        }
        Ok(())
    }

    pub fn write_hapax<W: Write>(
        &self,
        writer: &mut W,
        name: &str,
        length: Option<usize>,
    ) -> io::Result<()> {
        writeln!(writer, "Hapax from the file: {}", name)?;
        for word in self.hapax(length) {
            writeln!(writer, "\t{}", word)?;
        }
        Ok(())
    }
}
