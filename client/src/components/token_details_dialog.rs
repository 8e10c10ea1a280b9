//! Post-search dialog: token headline or the not-found message.

use leptos::prelude::*;

use research::tokens::{TOKEN_NOT_FOUND, headline_rows};

use super::token_data_view::detail_cell;
use crate::state::search::DialogContent;

#[component]
pub fn TokenDetailsDialog(
    content: DialogContent,
    on_close: Callback<()>,
    on_view_details: Callback<()>,
) -> impl IntoView {
    let body = match content {
        DialogContent::Found(report) => {
            let rows = headline_rows(&report.response)
                .into_iter()
                .map(|row| {
                    view! {
                        <div class="token-details__row">
                            <span class="token-details__label">{row.label}</span>
                            <span class="token-details__value">{detail_cell(row)}</span>
                        </div>
                    }
                })
                .collect_view();
            view! {
                <div class="token-details">{rows}</div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_view_details.run(())>
                        "View details"
                    </button>
                </div>
            }
            .into_any()
        }
        DialogContent::NotFound => view! {
            <p class="dialog__message">{TOKEN_NOT_FOUND}</p>
            <div class="dialog__actions">
                <button class="btn" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--token" on:click=move |ev| ev.stop_propagation()>
                {body}
            </div>
        </div>
    }
}
