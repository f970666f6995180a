//! Hidden-file-picker trigger for image uploads.

use leptos::prelude::*;

/// Image upload control.
///
/// The visible button forwards clicks to a hidden native file input so the
/// browser picker opens without the input ever being shown. After the host
/// has seen the change event, the input's value is reset so selecting the
/// same file again still fires a change.
#[component]
pub fn UploadButton(
    on_file_selected: Callback<leptos::ev::Event>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let file_ref = NodeRef::<leptos::html::Input>::new();

    let on_click = move |_| {
        if let Some(input) = file_ref.get_untracked() {
            input.click();
        }
    };

    let on_change = move |ev: leptos::ev::Event| {
        on_file_selected.run(ev);
        if let Some(input) = file_ref.get_untracked() {
            input.set_value("");
        }
    };

    view! {
        <input
            class="composer__file-input"
            type="file"
            accept="image/*"
            node_ref=file_ref
            style:display="none"
            on:change=on_change
        />
        <button
            type="button"
            class="composer__upload"
            aria-label="Upload image"
            title="Upload image"
            disabled=move || disabled.get()
            on:click=on_click
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
                    d="M2.25 15.75l5.159-5.159a2.25 2.25 0 013.182 0l5.159 5.159m-1.5-1.5l1.409-1.409a2.25 2.25 0 013.182 0l2.909 2.909m-18 3.75h16.5a1.5 1.5 0 001.5-1.5V6a1.5 1.5 0 00-1.5-1.5H3.75A1.5 1.5 0 002.25 6v12a1.5 1.5 0 001.5 1.5zm10.5-11.25h.008v.008h-.008V8.25z"
                />
            </svg>
        </button>
    }
}
