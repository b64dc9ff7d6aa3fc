use alloc::vec::Vec;

use crate::*;

pub const PLACEHOLDER: &str = "?";

/// One of the three stacked texts inside a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Layer {
    Placeholder,
    Question,
    Answer,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Placeholder, Layer::Question, Layer::Answer];

    pub const fn for_state(state: RevealState) -> Self {
        match state {
            RevealState::Hidden => Self::Placeholder,
            RevealState::Question => Self::Question,
            RevealState::Answer => Self::Answer,
        }
    }

    pub const fn class(self) -> &'static str {
        match self {
            Self::Placeholder => "placeholder",
            Self::Question => "question",
            Self::Answer => "answer",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayerView<'a> {
    pub layer: Layer,
    pub text: &'a str,
    pub visible: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CellLayout<'a> {
    pub id: ClueId,
    pub layers: [LayerView<'a>; 3],
}

impl<'a> CellLayout<'a> {
    pub fn new(id: ClueId, clue: &'a Clue) -> Self {
        let shown = Layer::for_state(clue.reveal_state);
        let layers = Layer::ALL.map(|layer| LayerView {
            layer,
            text: match layer {
                Layer::Placeholder => PLACEHOLDER,
                Layer::Question => clue.question.as_str(),
                Layer::Answer => clue.answer.as_str(),
            },
            visible: layer == shown,
        });
        Self { id, layers }
    }

    pub fn visible(&self) -> &LayerView<'a> {
        self.layers
            .iter()
            .find(|layer| layer.visible)
            .unwrap_or(&self.layers[0])
    }
}

/// Grid view of a board: a header per category, then `rows` rows with one cell per category.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardLayout<'a> {
    pub headers: Vec<&'a str>,
    pub rows: Vec<Vec<CellLayout<'a>>>,
}

impl<'a> BoardLayout<'a> {
    pub fn from_board(board: &'a Board) -> Self {
        let headers = board
            .categories()
            .iter()
            .map(|category| category.title.as_str())
            .collect();

        let rows = (0..board.rows())
            .map(|row| {
                board
                    .categories()
                    .iter()
                    .enumerate()
                    .map(|(category, column)| {
                        CellLayout::new(ClueId::new(category, row), &column.clues[row])
                    })
                    .collect()
            })
            .collect();

        Self { headers, rows }
    }
}
