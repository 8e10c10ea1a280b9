//! Blocking alert with a single acknowledge action.

use leptos::prelude::*;

#[component]
pub fn AlertDialog(message: String, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop">
            <div class="dialog dialog--alert" role="alertdialog">
                <p class="dialog__message">{message}</p>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(()) autofocus=true>
                        "OK"
                    </button>
                </div>
            </div>
        </div>
    }
}
