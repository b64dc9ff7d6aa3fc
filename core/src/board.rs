use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// How far a clue has been uncovered. Only ever moves forward.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    #[default]
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    pub const fn advance(self) -> Self {
        match self {
            Self::Hidden => Self::Question,
            Self::Question | Self::Answer => Self::Answer,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Answer)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clue {
    pub question: String,
    pub answer: String,
    pub reveal_state: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            reveal_state: RevealState::Hidden,
        }
    }

    pub fn reveal(&mut self) -> RevealOutcome {
        if self.reveal_state.is_terminal() {
            return RevealOutcome::NoChange;
        }
        self.reveal_state = self.reveal_state.advance();
        RevealOutcome::Changed(self.reveal_state)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    pub clues: Vec<Clue>,
}

impl Category {
    /// Maps a remote payload into a board column, keeping only the first `rows` clues.
    pub fn from_payload(payload: CategoryPayload, rows: usize) -> Result<Self, BoardError> {
        if payload.title.trim().is_empty() {
            return Err(BoardError::MissingTitle);
        }
        if payload.clues.len() < rows {
            return Err(BoardError::TooFewClues {
                found: payload.clues.len(),
                needed: rows,
            });
        }

        let clues = payload
            .clues
            .into_iter()
            .take(rows)
            .map(|clue| Clue::new(clue.question, clue.answer))
            .collect();
        Ok(Self {
            title: payload.title,
            clues,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Rows that every column can fill.
    pub fn rows(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.clues.len())
            .min()
            .unwrap_or(0)
    }

    pub fn push(&mut self, category: Category) {
        self.categories.push(category);
    }

    pub fn clue(&self, id: ClueId) -> Option<&Clue> {
        self.categories.get(id.category)?.clues.get(id.row)
    }

    fn clue_mut(&mut self, id: ClueId) -> Option<&mut Clue> {
        self.categories.get_mut(id.category)?.clues.get_mut(id.row)
    }

    /// Advances a single clue. Unknown ids are ignored.
    pub fn reveal(&mut self, id: ClueId) -> RevealOutcome {
        match self.clue_mut(id) {
            Some(clue) => clue.reveal(),
            None => {
                log::trace!("no clue at {}", id);
                RevealOutcome::NoChange
            }
        }
    }
}
