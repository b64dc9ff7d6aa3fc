use jeopardy_core::{Board, BoardLayout, CellLayout, ClueId};
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

/// Attribute linking a rendered cell back to its clue on the board.
pub(crate) const CLUE_ATTR: &str = "data-clue";

/// Finds the clue a clicked element belongs to, if any.
pub(crate) fn clue_id_from_target(target: &Element) -> Option<ClueId> {
    let cell = target.closest(&format!("[{CLUE_ATTR}]")).ok()??;
    cell.get_attribute(CLUE_ATTR)?.parse().ok()
}

pub(crate) fn clue_id_from_event(e: &MouseEvent) -> Option<ClueId> {
    let target = e.target()?.dyn_into::<Element>().ok()?;
    clue_id_from_target(&target)
}

fn cell_class(cell: &CellLayout) -> Classes {
    classes!("clue", cell.visible().layer.class())
}

fn view_cell(cell: &CellLayout) -> Html {
    html! {
        <td data-clue={cell.id.to_string()} class={cell_class(cell)}>
            {
                for cell.layers.iter().map(|layer| html! {
                    <span class={layer.layer.class()} hidden={!layer.visible}>
                        { layer.text.to_owned() }
                    </span>
                })
            }
        </td>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct BoardProps {
    pub board: Board,
}

#[function_component(BoardView)]
pub(crate) fn board_component(props: &BoardProps) -> Html {
    let layout = BoardLayout::from_board(&props.board);

    html! {
        <table id="jeopardy">
            <thead>
                <tr>
                    {
                        for layout.headers.iter().map(|title| html! {
                            <th>{ title.to_string() }</th>
                        })
                    }
                </tr>
            </thead>
            <tbody>
                {
                    for layout.rows.iter().map(|row| html! {
                        <tr>{ for row.iter().map(view_cell) }</tr>
                    })
                }
            </tbody>
        </table>
    }
}
