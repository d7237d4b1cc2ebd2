// src/analyzer.rs
//! The six line statistics.
//!
//! Every computation works on the trimmed form of each line and skips lines
//! that trim to nothing, while line numbers stay tied to the original
//! position in the file. Computations are independent of one another and
//! scan lines in parallel; per-line results are collected in line order.

use std::collections::HashSet;

use rayon::prelude::*;

/// The input file as an ordered, immutable list of raw lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Document {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// A value attached to a 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineValue<T> {
    pub line: usize,
    pub value: T,
}

impl<T> LineValue<T> {
    pub fn new(line: usize, value: T) -> Self {
        Self { line, value }
    }
}

/// Results of all six computations. Per-line lists are in ascending line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub lengths: Vec<LineValue<usize>>,
    pub char_counts: Vec<LineValue<usize>>,
    pub most_unique: Option<LineValue<String>>,
    pub unique_counts: Vec<LineValue<usize>>,
    pub longest_words: Vec<LineValue<String>>,
    pub longest_word: Option<String>,
}

/// Runs the six computations concurrently and gathers their results.
pub fn analyze(doc: &Document) -> Report {
    let ((lengths, char_counts), ((most_unique, unique_counts), (longest_words, longest_word))) =
        rayon::join(
            || rayon::join(|| line_lengths(doc), || line_char_counts(doc)),
            || {
                rayon::join(
                    || rayon::join(|| most_unique_line(doc), || line_unique_counts(doc)),
                    || rayon::join(|| line_longest_words(doc), || longest_word_in_text(doc)),
                )
            },
        );

    Report {
        lengths,
        char_counts,
        most_unique,
        unique_counts,
        longest_words,
        longest_word,
    }
}

pub fn line_lengths(doc: &Document) -> Vec<LineValue<usize>> {
    per_line(doc, |text| Some(length(text)))
}

pub fn line_char_counts(doc: &Document) -> Vec<LineValue<usize>> {
    per_line(doc, |text| Some(char_count(text)))
}

/// The first line with the highest number of distinct characters.
pub fn most_unique_line(doc: &Document) -> Option<LineValue<String>> {
    doc.lines
        .par_iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            let text = line.trim();
            (!text.is_empty()).then(|| (idx, unique_chars(text), text))
        })
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
        .map(|(idx, _, text)| LineValue::new(idx + 1, text.to_owned()))
}

pub fn line_unique_counts(doc: &Document) -> Vec<LineValue<usize>> {
    per_line(doc, |text| Some(unique_chars(text)))
}

pub fn line_longest_words(doc: &Document) -> Vec<LineValue<String>> {
    per_line(doc, |text| longest_word(words(text)).map(str::to_owned))
}

/// The longest word across the whole document, earliest one on a tie.
pub fn longest_word_in_text(doc: &Document) -> Option<String> {
    doc.lines
        .par_iter()
        .enumerate()
        .flat_map_iter(|(idx, line)| {
            words(line.trim())
                .enumerate()
                .map(move |(pos, word)| ((idx, pos), length(word), word))
        })
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
        .map(|(_, _, word)| word.to_owned())
}

fn per_line<T, F>(doc: &Document, f: F) -> Vec<LineValue<T>>
where
    T: Send,
    F: Fn(&str) -> Option<T> + Sync,
{
    doc.lines
        .par_iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            let text = line.trim();
            if text.is_empty() {
                return None;
            }
            f(text).map(|value| LineValue::new(idx + 1, value))
        })
        .collect()
}

/// Length of `text` in UTF-16 code units, so a character outside the BMP
/// counts as two.
pub fn length(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Size of the UTF-16 code unit stream of `text`. Always equal to [`length`].
pub fn char_count(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Distinct UTF-16 code units in `text`.
pub fn unique_chars(text: &str) -> usize {
    text.encode_utf16().collect::<HashSet<_>>().len()
}

/// Letters, digits and `_`. Digits include every Unicode numeric
/// (`Nd`, `Nl`, `No`), so `²` and `Ⅻ` are word characters.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Splits on runs of non-word characters, dropping empty fragments.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
}

/// Longest of `words`; the first one wins among equals.
pub fn longest_word<'a>(words: impl IntoIterator<Item = &'a str>) -> Option<&'a str> {
    words.into_iter().fold(None, |best, word| match best {
        Some(b) if length(word) <= length(b) => Some(b),
        _ => Some(word),
    })
}
