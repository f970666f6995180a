//! The chat message composer widget.
//!
//! Owns the transient input state (text, warning, send-enabled flag), renders
//! the field and its child controls, and forwards finished messages to the
//! host. All validation goes through the pure functions in
//! [`crate::state::composer`]; handlers here only move values between those
//! functions and the DOM.

use leptos::prelude::*;

use crate::components::microphone_button::MicrophoneButton;
use crate::components::send_button::{DEFAULT_SEND_COLOR, SendButton};
use crate::components::upload_button::UploadButton;
use crate::config::{CharLimit, UploadsConfig};
use crate::state::composer::{ComposerState, backspace_at, enter_should_submit};
use crate::util::autofocus;
use crate::util::sound::NotificationSound;

/// Chat message composer: text field plus send, upload, and microphone
/// controls.
///
/// Purely presentational: transport, persistence, and bot logic stay with
/// the host behind the callback props. Enter and the send button both route
/// through one validation-and-dispatch routine; invalid submits (empty text,
/// active warning, failed native validity check) are silently ignored.
#[component]
pub fn Composer(
    /// Fired exactly once per valid submit, with the raw field text.
    on_submit: Callback<String>,
    /// Fired when the microphone button is activated.
    on_microphone_clicked: Callback<()>,
    /// Fired with the raw change event when a file is picked.
    on_file_selected: Callback<leptos::ev::Event>,
    #[prop(optional)] placeholder: Option<String>,
    /// Initial field text.
    #[prop(optional)]
    default_value: Option<String>,
    #[prop(optional)] background_color: Option<String>,
    #[prop(optional)] text_color: Option<String>,
    #[prop(optional)] send_button_color: Option<String>,
    /// Field font size in pixels.
    #[prop(optional)]
    font_size: Option<u32>,
    /// Disables the field and every control.
    #[prop(default = false)]
    disabled: bool,
    /// Toggles for the auxiliary upload and microphone controls.
    #[prop(optional)]
    uploads: UploadsConfig,
    /// Character limit; edits beyond it are rejected with a warning.
    #[prop(optional)]
    max_chars: Option<usize>,
    /// Host override for the over-limit warning text.
    #[prop(optional)]
    max_chars_warning: Option<String>,
    /// Overrides the responsive autofocus default.
    #[prop(optional)]
    auto_focus: Option<bool>,
    /// Play a notification sound after each successful send.
    #[prop(default = false)]
    send_message_sound: bool,
    /// Override for the notification sound asset URL.
    #[prop(optional)]
    send_sound_location: Option<String>,
) -> impl IntoView {
    let limit = StoredValue::new(CharLimit {
        max_chars,
        warning_message: max_chars_warning,
    });
    let state = RwSignal::new(ComposerState::with_text(default_value.unwrap_or_default()));
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Eagerly built so the asset is fetched before the first send.
    let sound = StoredValue::new_local(if send_message_sound {
        NotificationSound::preload(send_sound_location.as_deref())
    } else {
        NotificationSound::disabled()
    });

    let controls_disabled = Signal::derive(move || disabled || state.get().send_disabled);

    // Single validation + dispatch routine shared by Enter and the send
    // button.
    let do_submit = move || {
        if disabled {
            return;
        }
        let snapshot = state.get_untracked();
        if !snapshot.can_submit() {
            return;
        }
        // Native constraints (required, pattern, ...) stay with the field.
        if let Some(input) = input_ref.get_untracked() {
            if !input.check_validity() {
                return;
            }
        }
        on_submit.run(snapshot.text);
        sound.with_value(NotificationSound::play);
        state.update(ComposerState::clear);
    };

    let on_input = move |ev: leptos::ev::Event| {
        let candidate = event_target_value(&ev);
        let next = limit.with_value(|l| state.get_untracked().apply_edit(&candidate, l));
        let rejected = next.text != candidate;
        let committed = next.text.clone();
        state.set(next);
        // A rejected edit must not survive in the DOM either.
        if rejected {
            if let Some(input) = input_ref.get_untracked() {
                input.set_value(&committed);
            }
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if enter_should_submit(&ev.key(), ev.is_composing(), ev.key_code()) {
            ev.prevent_default();
            do_submit();
            return;
        }
        if ev.key() == "Backspace" {
            let Some(input) = input_ref.get_untracked() else {
                return;
            };
            let Ok(Some(cursor)) = input.selection_start() else {
                return;
            };
            // Splice the controlled text ourselves so the committed state and
            // the native cursor never drift apart.
            ev.prevent_default();
            let (next_text, next_cursor) =
                backspace_at(&state.get_untracked().text, cursor as usize);
            let next = limit.with_value(|l| state.get_untracked().apply_edit(&next_text, l));
            state.set(next);
            input.set_value(&next_text);
            let _ = input.set_selection_range(next_cursor as u32, next_cursor as u32);
        }
    };

    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            if autofocus::resolve(auto_focus, disabled) {
                let _ = input.focus();
            }
        }
    });

    let placeholder = placeholder.unwrap_or_else(|| "Type your question".to_owned());
    let background = background_color.unwrap_or_default();
    let foreground = text_color.unwrap_or_default();
    let font_size_css = font_size.map(|px| format!("{px}px")).unwrap_or_default();
    let send_color = send_button_color.unwrap_or_else(|| DEFAULT_SEND_COLOR.to_owned());

    view! {
        <div class="composer" data-testid="input" style:background-color=background>
            <Show when=move || !state.get().warning.is_empty()>
                <div class="composer__warning" data-testid="warning-message">
                    {move || state.get().warning}
                </div>
            </Show>

            <div class="composer__row">
                <input
                    class="composer__field"
                    type="text"
                    placeholder=placeholder
                    node_ref=input_ref
                    prop:value=move || state.get().text
                    on:input=on_input
                    on:keydown=on_keydown
                    disabled=disabled
                    style:color=foreground
                    style:font-size=font_size_css
                />

                {uploads.is_image_upload_allowed.then(|| view! {
                    <UploadButton on_file_selected=on_file_selected disabled=controls_disabled/>
                })}

                {uploads.is_speech_to_text_enabled.then(|| view! {
                    <MicrophoneButton on_click=on_microphone_clicked disabled=controls_disabled/>
                })}

                <SendButton
                    on_click=Callback::new(move |()| do_submit())
                    disabled=controls_disabled
                    color=send_color
                />
            </div>
        </div>
    }
}
