//! Responsive autofocus policy for the composer field.
//!
//! An explicit host preference always wins. Without one, the field is focused
//! on mount only on desktop-class environments: small screens would pop the
//! on-screen keyboard over the conversation the moment the widget loads.

#[cfg(test)]
#[path = "autofocus_test.rs"]
mod autofocus_test;

/// Viewport width at or below which autofocus is suppressed by default.
pub const SMALL_SCREEN_WIDTH_PX: f64 = 640.0;

/// Decide whether the field should receive focus on mount.
pub fn should_autofocus(
    preference: Option<bool>,
    disabled: bool,
    mobile: bool,
    viewport_width: f64,
) -> bool {
    if disabled {
        return false;
    }
    preference.unwrap_or_else(|| !mobile && viewport_width > SMALL_SCREEN_WIDTH_PX)
}

/// Crude mobile-class detection from the user agent string.
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    ["Android", "iPhone", "iPad", "iPod", "Mobile"]
        .iter()
        .any(|marker| user_agent.contains(marker))
}

/// Evaluate the policy against the live browser environment.
///
/// Returns `false` outside a browser.
pub fn resolve(preference: Option<bool>, disabled: bool) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let mobile = window
            .navigator()
            .user_agent()
            .map_or(false, |ua| is_mobile_user_agent(&ua));
        let width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0);
        should_autofocus(preference, disabled, mobile, width)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (preference, disabled);
        false
    }
}
