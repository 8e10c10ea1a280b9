//! Read-only projection of a token search payload.

use leptos::prelude::*;

use research::tokens::{CellKind, DetailRow, TokenDataPayload, detail_rows, dextool_cards};

/// One value cell. Links and images only become elements when available.
pub(crate) fn detail_cell(row: DetailRow) -> AnyView {
    if !row.is_available() {
        return view! { <span class="token-data__na">{row.value}</span> }.into_any();
    }
    match row.kind {
        CellKind::Text => view! { <span>{row.value}</span> }.into_any(),
        CellKind::Link => {
            let href = row.value.clone();
            view! {
                <a href=href target="_blank" rel="noopener noreferrer">
                    {row.value}
                </a>
            }
            .into_any()
        }
        CellKind::Image => {
            view! { <img class="token-data__logo" src=row.value alt=row.label/> }.into_any()
        }
    }
}

#[component]
pub fn TokenDataView(payload: TokenDataPayload) -> impl IntoView {
    let rows = detail_rows(&payload)
        .into_iter()
        .map(|row| {
            view! {
                <tr>
                    <th scope="row">{row.label}</th>
                    <td>{detail_cell(row)}</td>
                </tr>
            }
        })
        .collect_view();

    let cards = dextool_cards(&payload)
        .into_iter()
        .map(|card| {
            let entries = card
                .entries
                .into_iter()
                .map(|entry| {
                    view! {
                        <div class="scan-card__entry">
                            <span class="scan-card__label">{entry.label}</span>
                            <span class="scan-card__value">{entry.value}</span>
                        </div>
                    }
                })
                .collect_view();
            view! { <div class="scan-card">{entries}</div> }
        })
        .collect_view();

    view! {
        <section class="token-data">
            <table class="token-data__table">
                <tbody>{rows}</tbody>
            </table>
            <h3 class="token-data__section">"Security scans"</h3>
            <div class="token-data__scans">{cards}</div>
        </section>
    }
}
