use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Display;
use core::future::Future;
use serde::{Deserialize, Serialize};

use crate::*;

/// Category as served by the remote API. Extra fields are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub title: String,
    pub clues: Vec<CluePayload>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CluePayload {
    pub question: String,
    pub answer: String,
}

/// Where category data comes from.
pub trait CategorySource {
    type Error: Display;

    fn fetch_category(
        &self,
        id: CategoryId,
    ) -> impl Future<Output = Result<CategoryPayload, Self::Error>>;
}

/// Loads every id in order, one request at a time.
///
/// A category that fails to load or is malformed is logged and left out, so the board can end up
/// narrower than `ids`.
pub async fn fetch_categories<S: CategorySource>(
    source: &S,
    ids: &[CategoryId],
    rows: usize,
) -> Board {
    let mut board = Board::default();

    for &id in ids {
        let payload = match source.fetch_category(id).await {
            Ok(payload) => payload,
            Err(err) => {
                log::error!("failed to fetch category {}: {}", id, err);
                continue;
            }
        };

        match Category::from_payload(payload, rows) {
            Ok(category) => board.push(category),
            Err(err) => log::warn!("skipping category {}: {}", id, err),
        }
    }

    if board.len() < ids.len() {
        log::warn!("loaded {} of {} categories", board.len(), ids.len());
    }
    board
}
