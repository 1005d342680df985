//! Character roster: three cards, one column on narrow viewports and a
//! three-across row on wide ones.

use gpui::{prelude::*, *};
use ui_common::{Motion, Palette, h_flex, v_flex};

use crate::copy;
use crate::roster::{CharacterEntry, ROSTER};

/// Below this viewport width the cards stack in a single column.
const GRID_BREAKPOINT: f32 = 768.0;

pub fn characters(window: &Window) -> impl IntoElement {
    let palette = Palette::nebula();
    let viewport_width: f32 = window.viewport_size().width.into();

    let cards = ROSTER
        .iter()
        .enumerate()
        .map(|(ix, entry)| {
            div().flex_1().child(Motion::rise().animate(
                ElementId::Name(format!("character-card-{ix}").into()),
                card(ix, entry, palette),
            ))
        });

    let grid = if viewport_width < GRID_BREAKPOINT {
        v_flex().gap_8().children(cards)
    } else {
        h_flex().items_start().gap_8().children(cards)
    };

    v_flex()
        .w_full()
        .max_w(px(1024.0))
        .mx_auto()
        .px_4()
        .pb_20()
        .child(
            div()
                .text_3xl()
                .font_weight(FontWeight::BOLD)
                .mb_4()
                .child(copy::CHARACTERS_HEADING),
        )
        .child(grid)
}

fn card(ix: usize, entry: &CharacterEntry, palette: Palette) -> impl IntoElement {
    div()
        .id(ElementId::Name(format!("character-card-hit-{ix}").into()))
        .bg(palette.card_bg)
        .p_6()
        .rounded_lg()
        .hover(move |s| s.bg(palette.card_hover_bg))
        .child(
            div()
                .text_xl()
                .font_weight(FontWeight::BOLD)
                .mb_2()
                .child(entry.name),
        )
        .child(div().child(entry.role))
}
