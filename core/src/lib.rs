#![no_std]

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use error::*;
pub use fetch::*;
pub use layout::*;
pub use lifecycle::*;
pub use sampler::*;
pub use types::*;

mod board;
mod error;
mod fetch;
mod layout;
mod lifecycle;
mod sampler;
mod types;

/// Categories known to exist on the default API.
pub const DEFAULT_POOL: &[CategoryId] = &[2, 3, 4, 6, 8, 9, 10, 11, 12, 13, 14, 15, 17, 18];

pub const DEFAULT_WIDTH: usize = 6;

pub const DEFAULT_ROWS: usize = 5;

pub const DEFAULT_API_BASE: &str = "https://rithm-jeopardy.herokuapp.com/api/";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of categories (columns) per game.
    pub width: usize,
    /// Number of clues (rows) per category.
    pub rows: usize,
    pub pool: Vec<CategoryId>,
    pub api_base: String,
}

impl GameConfig {
    pub fn new(width: usize, rows: usize) -> Self {
        Self {
            width,
            rows,
            ..Default::default()
        }
    }

    pub fn with_pool(mut self, pool: impl Into<Vec<CategoryId>>) -> Self {
        self.pool = pool.into();
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Checks the config can actually produce a board, so a bad setup fails at startup and not
    /// halfway through a fetch.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.width > self.pool.len() {
            return Err(ConfigError::NotEnoughCategories {
                requested: self.width,
                available: self.pool.len(),
            });
        }
        for (i, id) in self.pool.iter().enumerate() {
            if self.pool[..i].contains(id) {
                return Err(ConfigError::DuplicateCategory(*id));
            }
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            rows: DEFAULT_ROWS,
            pool: DEFAULT_POOL.to_vec(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Changed(RevealState),
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed(_) => true,
        }
    }
}
