use super::*;
use crate::state::board::BoardData;

// =============================================================
// Helpers
// =============================================================

fn board_with(flag: Option<bool>) -> BoardState {
    BoardState::loaded(BoardData {
        id: "b-1".to_owned(),
        show_notes_of_other_users: flag,
        ..BoardData::default()
    })
}

fn names(view: &HintView) -> Vec<&str> {
    view.columns().iter().map(|c| c.name.as_str()).collect()
}

// =============================================================
// hidden_columns
// =============================================================

#[test]
fn hidden_columns_preserves_source_order() {
    let columns = vec![
        Column::new("1", "Alpha", false),
        Column::new("2", "Beta", true),
        Column::new("3", "Gamma", false),
        Column::new("4", "Delta", false),
    ];
    let hidden: Vec<&str> = hidden_columns(&columns).iter().map(|c| c.id.as_str()).collect();
    assert_eq!(hidden, vec!["1", "3", "4"]);
}

#[test]
fn hidden_columns_empty_input_yields_empty() {
    assert!(hidden_columns(&[]).is_empty());
}

// =============================================================
// notes_hidden
// =============================================================

#[test]
fn notes_hidden_follows_flag() {
    assert!(!notes_hidden(&board_with(Some(true))));
    assert!(notes_hidden(&board_with(Some(false))));
}

#[test]
fn notes_hidden_when_flag_absent() {
    assert!(notes_hidden(&board_with(None)));
}

#[test]
fn notes_hidden_when_board_not_loaded() {
    assert!(notes_hidden(&BoardState::default()));
}

// =============================================================
// select_hint scenarios
// =============================================================

#[test]
fn hidden_column_with_notes_shown_lists_only_columns() {
    let columns = vec![Column::new("1", "To Do", true), Column::new("2", "Archive", false)];
    let view = select_hint(&columns, &board_with(Some(true)));
    assert!(view.is_visible());
    assert!(view.show_columns_message());
    assert_eq!(names(&view), vec!["Archive"]);
    assert!(!view.show_notes_message());
}

#[test]
fn no_columns_with_notes_hidden_shows_only_notes_message() {
    let view = select_hint(&[], &board_with(Some(false)));
    assert_eq!(
        view,
        HintView::Hint {
            columns: Vec::new(),
            show_notes_message: true,
        }
    );
    assert!(!view.show_columns_message());
}

#[test]
fn absent_flag_shows_only_notes_message() {
    let columns = vec![Column::new("1", "Done", true)];
    let view = select_hint(&columns, &board_with(None));
    assert!(view.is_visible());
    assert!(view.columns().is_empty());
    assert!(view.show_notes_message());
}

#[test]
fn everything_visible_renders_nothing() {
    let columns = vec![Column::new("1", "Done", true)];
    let view = select_hint(&columns, &board_with(Some(true)));
    assert_eq!(view, HintView::None);
    assert!(!view.is_visible());
    assert!(!view.show_columns_message());
    assert!(!view.show_notes_message());
}

#[test]
fn many_hidden_columns_listed_in_order_with_notes_message() {
    let columns: Vec<Column> = (0..6)
        .map(|i| Column::new(i.to_string(), format!("Col {i}"), i % 2 == 1))
        .collect();
    let view = select_hint(&columns, &board_with(Some(false)));
    assert_eq!(names(&view), vec!["Col 0", "Col 2", "Col 4"]);
    let ids: Vec<&str> = view.columns().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["0", "2", "4"]);
    assert!(view.show_notes_message());
}

#[test]
fn select_hint_reflects_latest_state() {
    let mut columns = vec![Column::new("1", "Done", true)];
    let board = board_with(Some(true));
    assert_eq!(select_hint(&columns, &board), HintView::None);

    columns[0].visible = false;
    assert_eq!(names(&select_hint(&columns, &board)), vec!["Done"]);
}

#[test]
fn hint_view_default_is_none() {
    assert_eq!(HintView::default(), HintView::None);
    assert!(HintView::None.columns().is_empty());
}
