//! Static content the card renders: the secret date, the letter, the
//! anthem, the photo reel and the medical-card copy.
//!
//! The data ships as embedded JSON; validation happens at load so a broken
//! bundle fails loudly at startup instead of rendering a half-empty card.

use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("secret date must contain exactly 8 digits, found {0}")]
    BadSecretDate(usize),
    #[error("song list is empty")]
    NoSongs,
    #[error("duplicate photo id `{0}`")]
    DuplicatePhotoId(String),
    #[error("revealable photo `{0}` has no hidden caption")]
    MissingHiddenCaption(String),
    #[error("content bundle is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    /// The memory attached to the song, shown under the title.
    pub memory: String,
    /// Accent color the music view hands to the shell.
    pub color: String,
    /// Audio path relative to the asset base.
    pub audio: String,
    /// Cover image path relative to the asset base.
    pub image: String,
    #[serde(default)]
    pub lines: Vec<String>,
}

#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
pub struct GalleryPhoto {
    pub id: String,
    pub src: String,
    pub alt: String,
    pub caption: String,
    #[serde(default)]
    pub revealable: bool,
    /// Swapped in for the caption once the photo is revealed.
    #[serde(default)]
    pub hidden_caption: Option<String>,
}

#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
pub struct SurpriseCopy {
    pub header_name: String,
    pub header_beloved: String,
    pub symptoms: String,
    pub treatment: String,
    pub prognosis: String,
    pub diagnosis: String,
}

#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
pub struct ContentData {
    /// `dd.mm.yyyy`; only its digits take part in the gate comparison.
    pub secret_date: String,
    pub letter: String,
    pub songs: Vec<Song>,
    pub photos: Vec<GalleryPhoto>,
    pub surprise: SurpriseCopy,
}

impl ContentData {
    /// Parse and validate an embedded content bundle.
    ///
    /// # Errors
    ///
    /// Returns a [`ContentError`] when the JSON does not parse or the data
    /// breaks one of the card's assumptions.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let data: Self = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let digit_count = self
            .secret_date
            .chars()
            .filter(char::is_ascii_digit)
            .count();
        if digit_count != 8 {
            return Err(ContentError::BadSecretDate(digit_count));
        }
        if self.songs.is_empty() {
            return Err(ContentError::NoSongs);
        }
        let mut seen = HashSet::new();
        for photo in &self.photos {
            if !seen.insert(photo.id.as_str()) {
                return Err(ContentError::DuplicatePhotoId(photo.id.clone()));
            }
            if photo.revealable && photo.hidden_caption.is_none() {
                return Err(ContentError::MissingHiddenCaption(photo.id.clone()));
            }
        }
        Ok(())
    }

    /// The card plays a single anthem; extra songs are reserve material.
    #[must_use]
    pub fn anthem(&self) -> &Song {
        &self.songs[0]
    }
}
