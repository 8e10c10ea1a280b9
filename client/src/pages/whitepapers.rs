//! Whitepapers page hosting the summaries table.

use leptos::prelude::*;

use crate::components::whitepaper_table::WhitepaperTable;

#[component]
pub fn WhitepapersPage() -> impl IntoView {
    let refresh = RwSignal::new(0_u64);
    let on_changed = Callback::new(move |()| refresh.update(|n| *n += 1));

    view! {
        <div class="whitepapers-page">
            <header class="page__header">
                <h1>"Whitepapers"</h1>
            </header>
            <WhitepaperTable refresh=refresh on_changed=on_changed/>
        </div>
    }
}
