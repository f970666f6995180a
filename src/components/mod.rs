//! Composer widget and its child controls.

pub mod composer;
pub mod microphone_button;
pub mod send_button;
pub mod upload_button;
