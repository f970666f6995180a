//! Notification sound played after a successful send.
//!
//! The audio element is constructed eagerly on mount so the asset is fetched
//! before the first send. Playback is fire-and-forget: failures are logged
//! and never block the submit path. Requires a browser environment.

#[cfg(test)]
#[path = "sound_test.rs"]
mod sound_test;

/// Default asset location, resolved relative to the widget bundle.
pub const DEFAULT_SOUND_LOCATION: &str = "./assets/send-message.mp3";

/// Pick the configured sound URL, falling back to the bundled default.
pub fn resolve_location(location: Option<&str>) -> &str {
    match location {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_SOUND_LOCATION,
    }
}

/// Preloaded audio handle for the send notification.
#[derive(Clone, Debug, Default)]
pub struct NotificationSound {
    #[cfg(feature = "hydrate")]
    audio: Option<web_sys::HtmlAudioElement>,
}

impl NotificationSound {
    /// Handle that never plays anything, for widgets with the sound off.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Eagerly construct the audio element for the configured location.
    pub fn preload(location: Option<&str>) -> Self {
        #[cfg(feature = "hydrate")]
        {
            let url = resolve_location(location);
            match web_sys::HtmlAudioElement::new_with_src(url) {
                Ok(audio) => {
                    audio.set_preload("auto");
                    Self { audio: Some(audio) }
                }
                Err(_) => {
                    log::warn!("could not create notification audio for {url}");
                    Self { audio: None }
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = location;
            Self::default()
        }
    }

    /// Best-effort playback; errors are swallowed.
    pub fn play(&self) {
        #[cfg(feature = "hydrate")]
        if let Some(audio) = &self.audio {
            audio.set_current_time(0.0);
            let _ = audio.play();
        }
    }
}
