use std::{fs, io, num::ParseIntError, path::PathBuf};

use itertools::Itertools;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("line {line}: invalid calorie value {content:?}")]
    ParseLine {
        line: usize,
        content: String,
        source: ParseIntError,
    },

    #[error("error reading input")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    Blank,
    Value(i64),
}

fn tag_line(number: usize, content: &str) -> Result<Line, ProcessError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        Ok(Line::Blank)
    } else {
        trimmed
            .parse()
            .map(Line::Value)
            .map_err(|source| ProcessError::ParseLine {
                line: number,
                content: content.to_string(),
                source,
            })
    }
}

/// Sums each blank-delimited run of integer lines, in input order. Runs of
/// blank lines separate groups and never contribute a group themselves.
pub fn group_sums(
    input: impl Iterator<Item = impl Into<String>>,
) -> Result<Vec<i64>, ProcessError> {
    let tagged = input
        .enumerate()
        .map(|(i, line)| tag_line(i + 1, &line.into()))
        .collect::<Result<Vec<_>, _>>()?;

    let runs = tagged
        .into_iter()
        .group_by(|line| matches!(line, Line::Blank));

    Ok(runs
        .into_iter()
        .filter_map(|(blank, run)| {
            (!blank).then(|| {
                run.filter_map(|line| match line {
                    Line::Value(v) => Some(v),
                    Line::Blank => None,
                })
                .sum::<i64>()
            })
        })
        .collect())
}

/// Aggregates the calorie groups of one input file. Construction stores the
/// path only; `process` reads and sums, and the statistics are pure reads
/// over the stored sums.
#[derive(Debug)]
pub struct CalorieCounter {
    path: PathBuf,
    group_sums: Vec<i64>,
}

impl CalorieCounter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            group_sums: Vec::new(),
        }
    }

    pub fn process(&mut self) -> Result<(), ProcessError> {
        let contents = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                ProcessError::FileNotFound(self.path.clone())
            }
            _ => ProcessError::Io(e),
        })?;

        // Prior sums are replaced only once the whole file has parsed.
        self.group_sums = group_sums(contents.lines())?;

        Ok(())
    }

    pub fn max_group_sum(&self) -> Option<i64> {
        self.group_sums.iter().copied().max()
    }

    /// Sum of the three largest group sums. With fewer than three groups it
    /// sums what is there; `None` only when no groups exist.
    pub fn sum_of_largest_three(&self) -> Option<i64> {
        (!self.group_sums.is_empty())
            .then(|| self.group_sums.iter().sorted().rev().take(3).sum::<i64>())
    }

    pub fn group_sums(&self) -> &[i64] {
        &self.group_sums
    }
}
