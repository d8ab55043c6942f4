//! Root application component with context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::export_hint_hidden_content::ExportHintHiddenContent;
use crate::i18n::{I18n, Locale};
use crate::state::{board::BoardState, columns::ColumnsState};
use crate::util::locale_pref;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the board, column, and i18n contexts the export options read.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let columns = RwSignal::new(ColumnsState::default());
    let board = RwSignal::new(BoardState::default());
    let i18n = I18n::new(locale_pref::read_preference());

    provide_context(columns);
    provide_context(board);
    provide_context(i18n);

    Effect::new(move |_| locale_pref::persist(i18n.locale()));

    let on_locale_change = move |ev: leptos::ev::Event| match event_target_value(&ev).parse::<Locale>() {
        Ok(locale) => i18n.set_locale(locale),
        Err(e) => log::warn!("locale change rejected: {e}"),
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/retro-export-hint.css"/>
        <Title text="Export board"/>

        <section class="export-board-option">
            <select class="export-board-option__locale" on:change=on_locale_change>
                {Locale::ALL
                    .iter()
                    .map(|locale| {
                        let locale = *locale;
                        view! {
                            <option value=locale.tag() selected=move || i18n.locale() == locale>
                                {locale.tag()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <ExportHintHiddenContent/>
        </section>
    }
}
