use crate::board::{BoardView, clue_id_from_event};
use crate::source::HttpCategorySource;
use crate::utils::js_random_seed;
use clap::Args;
use jeopardy_core::{self as game, Board, ClueId, GameConfig, GamePhase, Generation};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Loaded { generation: Generation, board: Board },
    Reveal(ClueId),
    NewGame,
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed for the first game instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of categories on the board
    #[arg(long, default_value_t = game::DEFAULT_WIDTH)]
    pub width: usize,

    /// Number of clues per category
    #[arg(long, default_value_t = game::DEFAULT_ROWS)]
    pub rows: usize,

    /// Base URL of the category API
    #[arg(long, default_value = game::DEFAULT_API_BASE)]
    pub api_base: String,
}

impl GameProps {
    pub(crate) fn config(&self) -> GameConfig {
        GameConfig::new(self.width, self.rows).with_api_base(self.api_base.clone())
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    config: GameConfig,
    source: HttpCategorySource,
    lifecycle: game::Lifecycle,
    seed: u64,
}

/// What the component has to do once a message has been applied.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Step {
    Nothing,
    Redraw,
    Restart,
}

/// Applies a message to the lifecycle. Restarts are left to the caller, which owns the fetch.
pub(crate) fn apply(lifecycle: &mut game::Lifecycle, msg: Msg) -> Step {
    use Msg::*;

    match msg {
        Loaded { generation, board } => {
            if lifecycle.finish(generation, board) {
                Step::Redraw
            } else {
                Step::Nothing
            }
        }
        Reveal(id) => {
            let outcome = lifecycle.reveal(id);
            log::trace!("reveal {}: {:?}", id, outcome);
            if outcome.has_update() {
                Step::Redraw
            } else {
                Step::Nothing
            }
        }
        NewGame => Step::Restart,
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct ScreenProps {
    pub phase: GamePhase,
    pub board: Option<Board>,
    pub onnewgame: Callback<MouseEvent>,
}

/// Spinner while loading, otherwise the board and a single restart button.
#[function_component(GameScreen)]
pub(crate) fn screen_component(props: &ScreenProps) -> Html {
    match (props.phase, &props.board) {
        (GamePhase::Ready, Some(board)) => html! {
            <>
                <BoardView board={board.clone()}/>
                <div>
                    <button class="restart-button" onclick={props.onnewgame.clone()}>
                        <span>{"Start New Game"}</span>
                    </button>
                </div>
            </>
        },
        _ => html! { <div id="spinner"/> },
    }
}

impl GameView {
    /// Throws away the current board and kicks off loading a new one.
    fn start_game(&mut self, ctx: &Context<Self>) {
        let generation = self.lifecycle.start();
        let source = self.source.clone();
        let config = self.config.clone();
        let seed = self.seed;
        log::debug!("seed: {}", seed);

        ctx.link().send_future(async move {
            let board = match game::load_board(&source, &config, seed).await {
                Ok(board) => board,
                Err(err) => {
                    log::error!("could not pick categories: {}", err);
                    Board::default()
                }
            };
            Msg::Loaded { generation, board }
        });
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let config = props.config();
        let mut view = Self {
            source: HttpCategorySource::new(config.api_base.clone()),
            config,
            lifecycle: game::Lifecycle::new(),
            seed: props.seed.unwrap_or_else(js_random_seed),
        };
        view.start_game(ctx);
        view
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match apply(&mut self.lifecycle, msg) {
            Step::Nothing => false,
            Step::Redraw => true,
            Step::Restart => {
                log::debug!("new game");
                self.seed = js_random_seed();
                self.start_game(ctx);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onclick = ctx
            .link()
            .batch_callback(|e: MouseEvent| clue_id_from_event(&e).map(Msg::Reveal));
        let onnewgame = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::NewGame
        });

        html! {
            <div class="jeopardy" {onclick}>
                <GameScreen
                    phase={self.lifecycle.phase()}
                    board={self.lifecycle.board().cloned()}
                    {onnewgame}
                />
            </div>
        }
    }
}
