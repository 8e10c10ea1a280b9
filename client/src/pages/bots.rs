//! Bots page: the merged listing with one card per bot.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server already joined both upstream listings, tolerating either one
//! being down, so this page only sees a single reply. Card actions bump
//! `refresh` to reload the whole listing.

use leptos::prelude::*;

use crate::components::bot_item::BotItem;
use crate::state::bots::BotsState;
use crate::util::lifecycle::ViewLifecycle;

#[component]
pub fn BotsPage() -> impl IntoView {
    let bots = RwSignal::new(BotsState::default());
    let refresh = RwSignal::new(0_u64);
    let lifecycle = ViewLifecycle::for_current_view();

    Effect::new(move || {
        let _ = refresh.get();
        bots.update(BotsState::begin_load);
        let lifecycle = lifecycle.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_bots().await;
            if let Err(e) = &result {
                log::error!("bot listing failed: {e}");
            }
            if lifecycle.accepts("bots") {
                bots.update(|b| b.finish_load(result));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = lifecycle;
    });

    let items = Memo::new(move |_| bots.with(|b| b.items.clone()));
    let on_changed = Callback::new(move |()| refresh.update(|n| *n += 1));

    view! {
        <div class="bots-page">
            <header class="page__header">
                <h1>"Bots"</h1>
                <Show when=move || bots.with(|b| b.loading)>
                    <span class="page__loading">"Loading bots..."</span>
                </Show>
            </header>
            <div class="bots-page__cards">
                {move || {
                    items
                        .get()
                        .into_iter()
                        .map(|bot| view! { <BotItem bot=bot on_changed=on_changed/> })
                        .collect_view()
                }}
            </div>
            <Show when=move || bots.with(|b| !b.loading && b.items.is_empty())>
                <p class="page__empty">"No bots found."</p>
            </Show>
        </div>
    }
}
