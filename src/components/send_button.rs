//! Send button for the composer row.

use leptos::prelude::*;

/// Accent used when the host supplies no `send_button_color`.
pub const DEFAULT_SEND_COLOR: &str = "#3b81f6";

/// Paper-plane button that dispatches the current message.
#[component]
pub fn SendButton(
    on_click: Callback<()>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(optional)] color: Option<String>,
) -> impl IntoView {
    let color = color.unwrap_or_else(|| DEFAULT_SEND_COLOR.to_owned());

    view! {
        <button
            type="button"
            class="composer__send"
            aria-label="Send message"
            title="Send message"
            style:color=color
            disabled=move || disabled.get()
            on:click=move |_| on_click.run(())
        >
            <svg
                class="composer__icon"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
            >
                <path
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    d="M6 12L3.269 3.126A59.768 59.768 0 0121.485 12 59.77 59.77 0 013.27 20.876L5.999 12zm0 0h7.5"
                />
            </svg>
        </button>
    }
}
