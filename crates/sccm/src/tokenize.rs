//! Line splitting for pasted text.

use std::sync::LazyLock;

use regex::Regex;

/// Space-run splitters for headerless lines, strictest first. Tabs always split.
static RELAXED_SPLITTERS: LazyLock<[(usize, Regex); 3]> = LazyLock::new(|| {
    [4, 3, 2].map(|run| {
        let re = Regex::new(&format!(r" {{{run},}}|\t+")).unwrap();
        (run, re)
    })
});

/// Non-blank lines of `text`, accepting `\n`, `\r\n` and bare `\r` endings.
pub fn non_empty_lines(text: &str) -> Vec<&str> {
    text.split(['\r', '\n'])
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Delimiter for a first line that has one: comma when present, else tab.
pub fn delimiter_for(line: &str) -> Option<u8> {
    if line.contains(',') {
        Some(b',')
    } else if line.contains('\t') {
        Some(b'\t')
    } else {
        None
    }
}

/// Read delimited text into rows of trimmed cells.
///
/// Quoted cells may hold the delimiter, line breaks and doubled quotes, so
/// CSV written by the exporters reads back unchanged. Rows may differ in
/// length.
pub fn read_delimited(text: &str, delimiter: u8) -> Result<Vec<Vec<String>>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// A headerless line split into columns, with the space-run length that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelaxedSplit<'a> {
    pub tokens: Vec<&'a str>,
    pub run: usize,
}

/// Split a headerless line on runs of spaces.
///
/// Tries runs of 4+ spaces first; while that yields fewer than `min_tokens`
/// columns, retries with 3+ and then 2+. The 2+ result is taken as-is even
/// when still short: inconsistent spacing can misalign columns, and that is
/// left visible rather than guessed around.
pub fn split_relaxed(line: &str, min_tokens: usize) -> RelaxedSplit<'_> {
    let mut last = RelaxedSplit {
        tokens: Vec::new(),
        run: 0,
    };

    for (run, re) in RELAXED_SPLITTERS.iter() {
        let tokens: Vec<&str> = re
            .split(line)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        last = RelaxedSplit { tokens, run: *run };
        if last.tokens.len() >= min_tokens {
            break;
        }
    }

    last
}
