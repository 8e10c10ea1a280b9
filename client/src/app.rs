//! Root application component with routing and the shared notification context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::components::snackbar::Snackbar;
use crate::pages::{bots::BotsPage, home::HomePage, whitepapers::WhitepapersPage};
use crate::state::notify::NotifyState;

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
/// Owns the single Snackbar notification slot; every page reads it from
/// context. Page data stays in page-local state containers.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let notify = RwSignal::new(NotifyState::default());
    provide_context(notify);

    view! {
        <Stylesheet id="leptos" href="/pkg/research-dashboard.css"/>
        <Title text="Token Research"/>

        <Router>
            <nav class="nav-bar">
                <span class="nav-bar__brand">"Token Research"</span>
                <A href="/">"Search"</A>
                <A href="/bots">"Bots"</A>
                <A href="/whitepapers">"Whitepapers"</A>
            </nav>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("bots") view=BotsPage/>
                    <Route path=StaticSegment("whitepapers") view=WhitepapersPage/>
                </Routes>
            </main>
            <Snackbar/>
        </Router>
    }
}
