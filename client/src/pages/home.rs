//! Token search page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route. Loads the watchlist selector, submits searches, and shows
//! the reply three ways: a details dialog for a hit, the same dialog in its
//! not-found form, or a blocking alert for anything else.

use leptos::prelude::*;

use research::tokens::classify_search_reply;

use crate::components::alert_dialog::AlertDialog;
use crate::components::token_data_view::TokenDataView;
use crate::components::token_details_dialog::TokenDetailsDialog;
use crate::state::search::{SearchState, watchlist_option_value};
use crate::util::lifecycle::ViewLifecycle;

#[component]
pub fn HomePage() -> impl IntoView {
    let search = RwSignal::new(SearchState::default());
    let lifecycle = ViewLifecycle::for_current_view();

    let watchlist_rev = Memo::new(move |_| search.with(|s| s.watchlist_rev));
    {
        let lifecycle = lifecycle.clone();
        Effect::new(move || {
            let _ = watchlist_rev.get();
            let lifecycle = lifecycle.clone();
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_watchlists().await {
                    Ok(items) => {
                        if lifecycle.accepts("watchlists") {
                            search.update(|s| s.watchlists = items);
                        }
                    }
                    Err(e) => log::error!("watchlist listing failed: {e}"),
                }
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = lifecycle;
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !search.with(SearchState::can_submit) {
            return;
        }
        search.update(|s| s.busy = true);
        let query = search.with(|s| s.query.clone());
        let lifecycle = lifecycle.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::search_token(&query).await;
            if !lifecycle.accepts("token search") {
                return;
            }
            match result {
                Ok(reply) => search.update(|s| s.apply_outcome(classify_search_reply(&reply))),
                Err(e) => {
                    log::error!("token search failed for {}: {e}", query.token_name);
                    search.update(|s| s.apply_transport_error(e));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (query, lifecycle);
    };

    let watchlists = Memo::new(move |_| search.with(|s| s.watchlists.clone()));
    let token_data = Memo::new(move |_| search.with(|s| s.token_data.clone()));
    let dialog = Memo::new(move |_| search.with(|s| s.dialog.clone()));
    let alert = Memo::new(move |_| search.with(|s| s.alert.clone()));

    let on_dialog_close = Callback::new(move |()| search.update(SearchState::close_dialog));
    let on_view_details = Callback::new(move |()| search.update(SearchState::view_details));
    let on_alert_close = Callback::new(move |()| search.update(SearchState::dismiss_alert));

    view! {
        <div class="home-page">
            <header class="page__header">
                <h1>"Token search"</h1>
            </header>
            <form class="search-form" on:submit=on_submit>
                <input
                    class="search-form__input"
                    type="text"
                    placeholder="Token name"
                    prop:value=move || search.with(|s| s.query.token_name.clone())
                    on:input=move |ev| search.update(|s| s.query.token_name = event_target_value(&ev))
                />
                <input
                    class="search-form__input"
                    type="text"
                    placeholder="Token symbol (optional)"
                    prop:value=move || search.with(|s| s.query.token_symbol.clone())
                    on:input=move |ev| search.update(|s| s.query.token_symbol = event_target_value(&ev))
                />
                <select
                    class="search-form__select"
                    prop:value=move || search.with(|s| s.query.watchlist.clone())
                    on:change=move |ev| search.update(|s| s.query.watchlist = event_target_value(&ev))
                >
                    <option value="">"None"</option>
                    {move || {
                        watchlists
                            .get()
                            .into_iter()
                            .map(|w| view! { <option value=watchlist_option_value(&w)>{w.name.clone()}</option> })
                            .collect_view()
                    }}
                </select>
                <button
                    class="btn search-form__refresh"
                    type="button"
                    title="Reload watchlists"
                    on:click=move |_| search.update(SearchState::bump_watchlists)
                >
                    "↻"
                </button>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || !search.with(SearchState::can_submit)
                >
                    {move || if search.with(|s| s.busy) { "Searching..." } else { "Search" }}
                </button>
            </form>

            {move || {
                token_data
                    .get()
                    .map(|payload| view! { <TokenDataView payload=payload/> })
            }}

            {move || {
                dialog
                    .get()
                    .map(|content| {
                        view! {
                            <TokenDetailsDialog
                                content=content
                                on_close=on_dialog_close
                                on_view_details=on_view_details
                            />
                        }
                    })
            }}

            {move || {
                alert
                    .get()
                    .map(|message| view! { <AlertDialog message=message on_close=on_alert_close/> })
            }}
        </div>
    }
}
