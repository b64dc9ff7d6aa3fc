use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Nothing started yet.
    #[default]
    Idle,
    Loading,
    Ready,
}

impl GamePhase {
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// Owns the board of the current game and decides which load results are still wanted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lifecycle {
    generation: Generation,
    phase: GamePhase,
    board: Option<Board>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Drops the current board and begins a new load.
    ///
    /// The returned generation has to be handed back to [`Lifecycle::finish`] together with the
    /// loaded board.
    pub fn start(&mut self) -> Generation {
        self.generation = self.generation.wrapping_add(1);
        self.phase = GamePhase::Loading;
        self.board = None;
        log::debug!("game {} loading", self.generation);
        self.generation
    }

    /// Installs a loaded board, unless a newer load was started in the meantime.
    pub fn finish(&mut self, generation: Generation, board: Board) -> bool {
        if generation != self.generation || !self.phase.is_loading() {
            log::warn!(
                "dropping stale board from game {} (current is {})",
                generation,
                self.generation
            );
            return false;
        }

        log::debug!(
            "game {} ready with {} categories",
            generation,
            board.len()
        );
        self.board = Some(board);
        self.phase = GamePhase::Ready;
        true
    }

    pub fn reveal(&mut self, id: ClueId) -> RevealOutcome {
        match (self.phase, self.board.as_mut()) {
            (GamePhase::Ready, Some(board)) => board.reveal(id),
            _ => RevealOutcome::NoChange,
        }
    }
}

/// Samples the categories for one game and fetches them.
pub async fn load_board<S: CategorySource>(
    source: &S,
    config: &GameConfig,
    seed: u64,
) -> Result<Board, ConfigError> {
    let ids = RandomSampler::new(seed).pick_ids(&config.pool, config.width)?;
    Ok(fetch_categories(source, &ids, config.rows).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tests::category;
    use crate::fetch::tests::FakeSource;
    use alloc::vec;
    use futures::executor::block_on;

    #[test]
    fn starts_idle_without_board() {
        let lifecycle = Lifecycle::new();

        assert_eq!(lifecycle.phase(), GamePhase::Idle);
        assert_eq!(lifecycle.board(), None);
    }

    #[test]
    fn finish_moves_to_ready() {
        let mut lifecycle = Lifecycle::new();
        let generation = lifecycle.start();
        assert!(lifecycle.phase().is_loading());

        assert!(lifecycle.finish(generation, Board::new(vec![category("Math", 5)])));

        assert!(lifecycle.phase().is_ready());
        assert_eq!(lifecycle.board().map(Board::len), Some(1));
    }

    #[test]
    fn empty_board_still_reaches_ready() {
        let mut lifecycle = Lifecycle::new();
        let generation = lifecycle.start();

        assert!(lifecycle.finish(generation, Board::default()));

        assert!(lifecycle.phase().is_ready());
    }

    #[test]
    fn stale_generation_is_dropped() {
        let mut lifecycle = Lifecycle::new();
        let first = lifecycle.start();
        let second = lifecycle.start();

        assert!(!lifecycle.finish(first, Board::new(vec![category("Old", 5)])));
        assert!(lifecycle.phase().is_loading());

        assert!(lifecycle.finish(second, Board::new(vec![category("New", 5)])));
        assert_eq!(lifecycle.board().unwrap().categories()[0].title, "New");

        // a late duplicate of the current generation does not replace the board either
        assert!(!lifecycle.finish(second, Board::default()));
        assert_eq!(lifecycle.board().map(Board::len), Some(1));
    }

    #[test]
    fn restart_discards_board_and_new_board_is_independent() {
        let mut lifecycle = Lifecycle::new();
        let generation = lifecycle.start();
        lifecycle.finish(generation, Board::new(vec![category("Math", 5)]));
        lifecycle.reveal(ClueId::new(0, 0));
        let mut old = lifecycle.board().cloned().unwrap();

        let generation = lifecycle.start();
        assert_eq!(lifecycle.phase(), GamePhase::Loading);
        assert_eq!(lifecycle.board(), None);
        lifecycle.finish(generation, Board::new(vec![category("Math", 5)]));
        old.reveal(ClueId::new(0, 1));

        let board = lifecycle.board().unwrap();
        assert_eq!(
            board.clue(ClueId::new(0, 0)).map(|clue| clue.reveal_state),
            Some(RevealState::Hidden)
        );
        assert_eq!(
            board.clue(ClueId::new(0, 1)).map(|clue| clue.reveal_state),
            Some(RevealState::Hidden)
        );
    }

    #[test]
    fn reveal_is_ignored_while_loading() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.start();

        assert_eq!(lifecycle.reveal(ClueId::new(0, 0)), RevealOutcome::NoChange);
    }

    #[test]
    fn partial_failure_still_reaches_ready() {
        let config = GameConfig::default();
        let source = FakeSource {
            failing: config.pool[..7].to_vec(),
            ..Default::default()
        };
        let mut lifecycle = Lifecycle::new();
        let generation = lifecycle.start();

        let board = block_on(load_board(&source, &config, 99)).unwrap();
        let failed = source
            .requested
            .borrow()
            .iter()
            .filter(|id| source.failing.contains(id))
            .count();
        assert_eq!(source.requested.borrow().len(), 6);
        assert_eq!(board.len(), 6 - failed);
        assert!(lifecycle.finish(generation, board));
        assert!(lifecycle.phase().is_ready());
    }

    #[test]
    fn two_of_six_failing_leaves_four_categories() {
        let config = GameConfig::new(6, 5).with_pool([1, 2, 3, 4, 5, 6]);
        let source = FakeSource {
            failing: vec![2, 5],
            ..Default::default()
        };

        let board = block_on(load_board(&source, &config, 3)).unwrap();

        assert_eq!(board.len(), 4);
        assert_eq!(board.rows(), 5);
    }

    #[test]
    fn load_board_rejects_oversized_width() {
        let config = GameConfig::new(4, 5).with_pool([1, 2, 3]);

        let result = block_on(load_board(&FakeSource::default(), &config, 0));

        assert!(matches!(
            result,
            Err(ConfigError::NotEnoughCategories { .. })
        ));
    }
}
