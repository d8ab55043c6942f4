//! Export dialog hint about content left out of the export.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosted by the board export options. Reads the `columns` and `board`
//! slices from context and renders nothing when every column is visible
//! and other participants' notes are shown.

use leptos::prelude::*;

use crate::components::warning_icon::WarningIcon;
use crate::i18n::{HINT_HIDDEN_COLUMNS, HINT_HIDDEN_NOTES, I18n};
use crate::state::board::BoardState;
use crate::state::columns::ColumnsState;
use crate::state::export_hint::{HiddenColumn, HintView, select_hint};

/// Warning panel listing hidden columns and hidden participant notes.
#[component]
pub fn ExportHintHiddenContent() -> impl IntoView {
    let columns = expect_context::<RwSignal<ColumnsState>>();
    let board = expect_context::<RwSignal<BoardState>>();
    let i18n = expect_context::<I18n>();

    let hint = move || columns.with(|c| board.with(|b| select_hint(&c.items, b)));

    Effect::new(move |_| {
        let view = hint();
        log::debug!(
            "export hint: visible={} hidden_columns={} notes_hidden={}",
            view.is_visible(),
            view.columns().len(),
            view.show_notes_message()
        );
    });

    move || match hint() {
        HintView::None => None,
        HintView::Hint { columns, show_notes_message } => Some(view! {
            <div class="hint-hidden-columns__grid-container">
                <WarningIcon class="hint-hidden-columns__info-icon"/>
                {(!columns.is_empty()).then(|| hidden_columns_section(i18n, columns))}
                {show_notes_message.then(|| {
                    view! {
                        <span class="hint-hidden-columns__info-text">{move || i18n.t(HINT_HIDDEN_NOTES)}</span>
                    }
                })}
            </div>
        }),
    }
}

fn hidden_columns_section(i18n: I18n, columns: Vec<HiddenColumn>) -> impl IntoView {
    view! {
        <span class="hint-hidden-columns__info-text">{move || i18n.t(HINT_HIDDEN_COLUMNS)}</span>
        <div class="hint-hidden-columns__columns-list-container">
            <ul class="hint-hidden-columns__columns-list">
                <For
                    each=move || columns.clone()
                    key=|col: &HiddenColumn| col.id.clone()
                    children=move |col: HiddenColumn| view! { <li>{col.name}</li> }
                />
            </ul>
        </div>
    }
}
