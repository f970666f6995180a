//! Microphone button for speech-to-text hosts.

use leptos::prelude::*;

/// Button that forwards clicks straight to the host's microphone handler.
///
/// Recording itself is owned by the host; this control keeps no state.
#[component]
pub fn MicrophoneButton(
    on_click: Callback<()>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="composer__microphone"
            aria-label="Record audio"
            title="Record audio"
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
                    d="M12 18.75a6 6 0 006-6v-1.5m-6 7.5a6 6 0 01-6-6v-1.5m6 7.5v3.75m-3.75 0h7.5M12 15.75a3 3 0 01-3-3V4.5a3 3 0 116 0v8.25a3 3 0 01-3 3z"
                />
            </svg>
        </button>
    }
}
