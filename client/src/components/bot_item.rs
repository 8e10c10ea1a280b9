//! Card for one bot with its status toggle and interval editor.
//!
//! DESIGN
//! ======
//! Both actions report through the shared Snackbar and then ask the owning
//! page to reload via `on_changed`. A status toggle always reloads; an
//! interval edit reloads only when the upstream accepted it.

use leptos::prelude::*;

use research::bots::Bot;

use crate::state::notify::NotifyState;
use crate::util::lifecycle::ViewLifecycle;

#[component]
pub fn BotItem(bot: Bot, on_changed: Callback<()>) -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();
    let lifecycle = ViewLifecycle::for_current_view();
    let bot = StoredValue::new(bot);

    let menu_open = RwSignal::new(false);
    let editing_interval = RwSignal::new(false);
    let interval_input = RwSignal::new(String::new());

    let on_toggle = {
        let lifecycle = lifecycle.clone();
        move |_| {
            menu_open.set(false);
            let current = bot.get_value();
            let lifecycle = lifecycle.clone();
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let result = crate::net::api::change_bot_status(&current).await;
                if let Err(e) = &result {
                    log::error!("bot status change failed for {}: {e}", current.name);
                }
                if !lifecycle.accepts("bot status") {
                    return;
                }
                notify.update(|n| {
                    n.push(crate::state::notify::status_change_notice(&result));
                });
                on_changed.run(());
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (current, lifecycle);
        }
    };

    let on_edit_interval = move |_| {
        menu_open.set(false);
        interval_input.set(bot.with_value(|b| b.interval.map(|h| h.to_string()).unwrap_or_default()));
        editing_interval.set(true);
    };

    let on_interval_cancel = Callback::new(move |()| editing_interval.set(false));
    let on_interval_save = Callback::new(move |()| {
        editing_interval.set(false);
        let current = bot.get_value();
        let interval = interval_input.get_untracked();
        let lifecycle = lifecycle.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::change_bot_interval(&current, &interval).await;
            if let Err(e) = &result {
                log::error!("bot interval change failed for {}: {e}", current.name);
            }
            if !lifecycle.accepts("bot interval") {
                return;
            }
            notify.update(|n| {
                n.push(crate::state::notify::interval_change_notice(&result));
            });
            if crate::state::notify::interval_change_refreshes(&result) {
                on_changed.run(());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (current, interval, lifecycle);
    });

    let (name, description, status, status_label, toggle_label, interval_text, schedule) = bot.with_value(|b| {
        (
            b.name.clone(),
            b.description.clone().unwrap_or_default(),
            b.status,
            b.status_label(),
            b.toggle_label(),
            b.interval_text(),
            b.schedule_lines(),
        )
    });

    view! {
        <div class="bot-card" class:bot-card--active=status>
            <div class="bot-card__header">
                <span class="bot-card__name">{name}</span>
                <span class="bot-card__status">{status_label}</span>
                <button
                    class="btn bot-card__menu-toggle"
                    title="Actions"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "⋮"
                </button>
                <Show when=move || menu_open.get()>
                    <div class="bot-card__menu">
                        <button class="bot-card__menu-item" on:click=on_edit_interval>
                            "Edit Interval"
                        </button>
                        <button class="bot-card__menu-item" on:click=on_toggle.clone()>
                            {toggle_label}
                        </button>
                    </div>
                </Show>
            </div>
            <p class="bot-card__description">{description}</p>
            <p class="bot-card__interval">{interval_text}</p>
            {schedule
                .into_iter()
                .map(|(label, raw)| view! { <p class="bot-card__meta">{label} ": " {raw}</p> })
                .collect_view()}
        </div>
        <Show when=move || editing_interval.get()>
            <IntervalDialog value=interval_input on_cancel=on_interval_cancel on_save=on_interval_save/>
        </Show>
    }
}

/// Hours entry for a bot interval. The text is sent as typed.
#[component]
fn IntervalDialog(value: RwSignal<String>, on_cancel: Callback<()>, on_save: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--interval" on:click=move |ev| ev.stop_propagation()>
                <label class="dialog__label">
                    "Interval (hours)"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || value.get()
                        on:input=move |ev| value.set(event_target_value(&ev))
                        autofocus=true
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_save.run(())>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
