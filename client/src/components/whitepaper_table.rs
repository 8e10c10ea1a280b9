//! Whitepaper summaries table with filter, expansion, delete, and export.
//!
//! SYSTEM CONTEXT
//! ==============
//! The parent owns the `refresh` counter. The table reloads on mount and on
//! every change of that counter; a delete only asks the parent to bump it, so
//! a row disappears once the reload lands and never before.

use leptos::prelude::*;

use research::format::format_date;
use research::whitepapers::{SummaryToggle, WhitepaperRecord, export_file_name, export_text};

use crate::state::notify::{Notice, NotifyState, Severity};
use crate::state::whitepapers::WhitepapersState;
use crate::util::lifecycle::ViewLifecycle;

#[component]
pub fn WhitepaperTable(refresh: RwSignal<u64>, on_changed: Callback<()>) -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();
    let table = RwSignal::new(WhitepapersState::default());
    let lifecycle = ViewLifecycle::for_current_view();

    {
        let lifecycle = lifecycle.clone();
        Effect::new(move || {
            let _ = refresh.get();
            table.update(WhitepapersState::begin_load);
            let lifecycle = lifecycle.clone();
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_whitepapers().await;
                if let Err(e) = &result {
                    log::error!("whitepaper listing failed: {e}");
                }
                if lifecycle.accepts("whitepapers") {
                    table.update(|t| t.finish_load(result));
                }
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = lifecycle;
        });
    }

    let on_delete = Callback::new(move |id: String| {
        let lifecycle = lifecycle.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_whitepaper(&id).await {
                Ok(()) => {
                    if lifecycle.accepts("whitepaper delete") {
                        on_changed.run(());
                    }
                }
                Err(e) => {
                    log::error!("whitepaper delete failed for {id}: {e}");
                    if lifecycle.accepts("whitepaper delete") {
                        notify.update(|n| {
                            n.push(Notice { message: e, severity: Severity::Error });
                        });
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, lifecycle);
    });

    let on_export = Callback::new(move |record: WhitepaperRecord| {
        if let Err(e) = crate::util::download::download_text(&export_file_name(&record), &export_text(&record)) {
            notify.update(|n| {
                n.push(Notice { message: e, severity: Severity::Error });
            });
        }
    });

    view! {
        <div class="whitepaper-table">
            <input
                class="whitepaper-table__filter"
                type="search"
                placeholder="Filter by label"
                prop:value=move || table.with(|t| t.filter.clone())
                on:input=move |ev| table.update(|t| t.filter = event_target_value(&ev))
            />
            <Show when=move || table.with(|t| t.error.is_some())>
                <p class="whitepaper-table__error">{move || table.with(|t| t.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || !table.with(|t| t.loading && t.items.is_empty())
                fallback=move || view! { <p>"Loading whitepapers..."</p> }
            >
                <table class="whitepaper-table__grid">
                    <thead>
                        <tr>
                            <th>"Label"</th>
                            <th>"Summary"</th>
                            <th>"Created"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || table.with(WhitepapersState::visible)
                            key=|record| record.id.clone()
                            let:record
                        >
                            <WhitepaperRow record=record table=table on_delete=on_delete on_export=on_export/>
                        </For>
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

#[component]
fn WhitepaperRow(
    record: WhitepaperRecord,
    table: RwSignal<WhitepapersState>,
    on_delete: Callback<String>,
    on_export: Callback<WhitepaperRecord>,
) -> impl IntoView {
    let record = StoredValue::new(record);
    let id = record.with_value(|r| r.id.clone());
    let label = record.with_value(|r| r.label.clone());
    let created = record.with_value(|r| format_date(&r.created_at));
    let summary = move || record.with_value(|r| table.with(|t| t.summary(r)));

    view! {
        <tr class="whitepaper-table__row">
            <td class="whitepaper-table__label">{label}</td>
            <td class="whitepaper-table__summary">
                {move || {
                    let view_model = summary();
                    let toggle = view_model.toggle;
                    let lines = view_model
                        .lines
                        .into_iter()
                        .map(|line| {
                            if line.heading {
                                view! { <h4 class="whitepaper-table__heading">{line.text}</h4> }.into_any()
                            } else {
                                view! { <p class="whitepaper-table__line">{line.text}</p> }.into_any()
                            }
                        })
                        .collect_view();
                    let toggle_button = toggle.map(|t| {
                        let text = match t {
                            SummaryToggle::ShowMore => "Show more",
                            SummaryToggle::ShowLess => "Show less",
                        };
                        let row_id = record.with_value(|r| r.id.clone());
                        view! {
                            <button
                                class="btn btn--link whitepaper-table__toggle"
                                on:click=move |_| table.update(|t| t.toggle_expand(&row_id))
                            >
                                {text}
                            </button>
                        }
                    });
                    view! { {lines} {toggle_button} }
                }}
            </td>
            <td class="whitepaper-table__created">{created}</td>
            <td class="whitepaper-table__actions">
                <button class="btn" on:click=move |_| on_export.run(record.get_value())>
                    "Export"
                </button>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(id.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
