//! The embedded content bundle: everything the card shows that is data, not
//! behavior.

use keepsake_core::{ContentData, Song, SurpriseCopy};
use once_cell::sync::Lazy;

static CONTENT_JSON: &str = include_str!("../static/assets/data/content.json");

static CONTENT: Lazy<ContentData> = Lazy::new(|| {
    ContentData::from_json(CONTENT_JSON).unwrap_or_else(|err| {
        log::error!("embedded content bundle is invalid: {err}");
        fallback_content()
    })
});

/// The card's content. Parsed once; a broken bundle degrades to a minimal
/// built-in card instead of taking the page down.
#[must_use]
pub fn content() -> &'static ContentData {
    &CONTENT
}

fn fallback_content() -> ContentData {
    ContentData {
        secret_date: "14.02.2024".to_string(),
        letter: "Я тебе кохаю.".to_string(),
        songs: vec![Song {
            id: "anthem".to_string(),
            title: "Наша пісня".to_string(),
            memory: String::new(),
            color: "#f8bcd8".to_string(),
            audio: "audio/anthem.mp3".to_string(),
            image: "photos/anthem.jpg".to_string(),
            lines: Vec::new(),
        }],
        photos: Vec::new(),
        surprise: SurpriseCopy {
            header_name: String::new(),
            header_beloved: String::new(),
            symptoms: String::new(),
            treatment: String::new(),
            prognosis: String::new(),
            diagnosis: String::new(),
        },
    }
}
