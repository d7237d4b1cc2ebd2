// src/report.rs
use std::fmt;
use std::io::{self, Write};

use crate::analyzer::{LineValue, Report};

/// Writes the report as six headed sections, in fixed order.
pub fn render(report: &Report, out: &mut impl Write) -> io::Result<()> {
    write!(out, "{report}")?;
    out.flush()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Line lengths:")?;
        rows(f, &self.lengths, |f, v| write!(f, "length: {v}"))?;

        writeln!(f, "\nCharacter counts per line:")?;
        rows(f, &self.char_counts, |f, v| write!(f, "characters: {v}"))?;

        writeln!(f, "\nLine with the most unique characters:")?;
        if let Some(LineValue { line, value }) = &self.most_unique {
            writeln!(f, "Line {line} - \"{value}\"")?;
        }

        writeln!(f, "\nUnique characters per line:")?;
        rows(f, &self.unique_counts, |f, v| write!(f, "unique characters: {v}"))?;

        writeln!(f, "\nLongest word in each line:")?;
        rows(f, &self.longest_words, |f, v| write!(f, "longest word: \"{v}\""))?;

        writeln!(f, "\nLongest word in the entire text:")?;
        if let Some(word) = &self.longest_word {
            writeln!(f, "\"{word}\"")?;
        }
        Ok(())
    }
}

fn rows<T>(
    f: &mut fmt::Formatter<'_>,
    values: &[LineValue<T>],
    label: impl Fn(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    for LineValue { line, value } in values {
        write!(f, "Line {line} - ")?;
        label(f, value)?;
        writeln!(f)?;
    }
    Ok(())
}
