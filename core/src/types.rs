use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::ParseClueIdError;

/// Remote identifier of a category.
pub type CategoryId = u32;

/// Tags one load sequence, so results from a superseded load can be told apart.
pub type Generation = u64;

/// Position of a clue on the board, `category` is the column and `row` the clue rank.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClueId {
    pub category: usize,
    pub row: usize,
}

impl ClueId {
    pub const fn new(category: usize, row: usize) -> Self {
        Self { category, row }
    }
}

/// Written as `"<category>-<row>"`, which is what goes into the `data-clue` attribute.
impl fmt::Display for ClueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.row)
    }
}

impl FromStr for ClueId {
    type Err = ParseClueIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, row) = s.split_once('-').ok_or(ParseClueIdError)?;
        Ok(Self {
            category: category.parse().map_err(|_| ParseClueIdError)?,
            row: row.parse().map_err(|_| ParseClueIdError)?,
        })
    }
}
