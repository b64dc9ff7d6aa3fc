use thiserror::Error;

use crate::CategoryId;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board needs at least one category")]
    ZeroWidth,
    #[error("Board needs at least one row")]
    ZeroRows,
    #[error("Requested {requested} categories but the pool only has {available}")]
    NotEnoughCategories { requested: usize, available: usize },
    #[error("Category {0} appears more than once in the pool")]
    DuplicateCategory(CategoryId),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Category has no title")]
    MissingTitle,
    #[error("Category has {found} clues, need at least {needed}")]
    TooFewClues { found: usize, needed: usize },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("Invalid clue id")]
pub struct ParseClueIdError;
