//! Transient notification bar shared by the whole app.

use leptos::prelude::*;

use crate::state::notify::NotifyState;

/// Renders the current notification and schedules its auto-dismiss.
///
/// Clicking elsewhere does not close it; only the close button or the timer
/// does.
#[component]
pub fn Snackbar() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(seq) = notify.with(|n| n.current.as_ref().map(|c| c.seq)) else {
            return;
        };
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(crate::state::notify::AUTO_DISMISS_MS).await;
            let _ = notify.try_update(|n| n.dismiss(seq));
        });
    });

    view! {
        {move || {
            notify
                .get()
                .current
                .map(|n| {
                    let seq = n.seq;
                    view! {
                        <div class=format!("snackbar {}", n.severity.css_class()) role="status">
                            <span class="snackbar__message">{n.message}</span>
                            <button
                                class="snackbar__close"
                                title="Close"
                                on:click=move |_| notify.update(|s| s.dismiss(seq))
                            >
                                "×"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
