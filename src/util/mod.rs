//! Browser-environment helpers for the composer widget.

pub mod autofocus;
pub mod sound;
