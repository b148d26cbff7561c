//! Keepsake core
//!
//! Platform-agnostic logic for the Keepsake greeting card: the date-lock
//! gate, view gating, and the small timing state machines the views run on.
//! This crate owns states and transitions only; scheduling lives in the web
//! crate so every timer can be cancelled with its owning component.

pub mod content;
pub mod diagnosis;
pub mod gallery;
pub mod gate;
pub mod playback;
pub mod typewriter;
pub mod views;

// Re-export commonly used types
pub use content::{ContentData, ContentError, GalleryPhoto, Song, SurpriseCopy};
pub use diagnosis::{
    DIAGNOSIS_DURATION_MS, Diagnosis, PrescriptionLabels, prescription_html,
};
pub use gallery::{HOLD_DURATION_MS, RevealSet, Slideshow};
pub use gate::{
    Gate, GateStatus, LOCKOUT_MS, SubmitOutcome, TimelineStep, UnlockAction, format_date_input,
    unlock_timeline,
};
pub use playback::{LINE_INTERVAL_MS, LineTicker, Playback};
pub use typewriter::{SMILE_DURATION_MS, TYPE_INTERVAL_MS, Typewriter};
pub use views::{MenuEntry, ViewId, VisitedSet, menu_entries, resolve_active};
