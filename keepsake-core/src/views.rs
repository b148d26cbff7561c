//! View identifiers, the per-session visited set and the unlock rule for
//! the secret cabinet.

use std::fmt;
use std::str::FromStr;

/// Minimum number of base sections that must be visited before the secret
/// cabinet appears.
const UNLOCK_THRESHOLD: usize = 2;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ViewId {
    #[default]
    Login,
    Letter,
    Music,
    Gallery,
    Surprise,
}

impl ViewId {
    /// The base sections, in tab order. Visiting these feeds the unlock rule.
    pub const SECTIONS: [Self; 3] = [Self::Letter, Self::Music, Self::Gallery];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Letter => "letter",
            Self::Music => "music",
            Self::Gallery => "gallery",
            Self::Surprise => "surprise",
        }
    }

    /// Content views, i.e. everything behind the gate.
    #[must_use]
    pub const fn is_section(self) -> bool {
        !matches!(self, Self::Login)
    }

    /// Where the gate lands after a match, and where a locked-out secret
    /// view redirects to.
    #[must_use]
    pub const fn first_section() -> Self {
        Self::SECTIONS[0]
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "login" => Ok(Self::Login),
            "letter" => Ok(Self::Letter),
            "music" => Ok(Self::Music),
            "gallery" => Ok(Self::Gallery),
            "surprise" => Ok(Self::Surprise),
            _ => Err(()),
        }
    }
}

/// Per-session record of which content views have been opened.
///
/// Monotonic: entries only ever flip to `true`, never back.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct VisitedSet {
    letter: bool,
    music: bool,
    gallery: bool,
    surprise: bool,
}

impl VisitedSet {
    /// Record a view activation. Idempotent; `Login` is never recorded.
    /// Returns whether anything changed.
    pub fn mark(&mut self, view: ViewId) -> bool {
        let slot = match view {
            ViewId::Login => return false,
            ViewId::Letter => &mut self.letter,
            ViewId::Music => &mut self.music,
            ViewId::Gallery => &mut self.gallery,
            ViewId::Surprise => &mut self.surprise,
        };
        let changed = !*slot;
        *slot = true;
        changed
    }

    #[must_use]
    pub const fn contains(self, view: ViewId) -> bool {
        match view {
            ViewId::Login => false,
            ViewId::Letter => self.letter,
            ViewId::Music => self.music,
            ViewId::Gallery => self.gallery,
            ViewId::Surprise => self.surprise,
        }
    }

    /// How many of the three base sections have been visited.
    #[must_use]
    pub const fn count_base(self) -> usize {
        self.letter as usize + self.music as usize + self.gallery as usize
    }

    /// Derived, never stored: the secret cabinet opens after two sections.
    #[must_use]
    pub const fn secret_unlocked(self) -> bool {
        self.count_base() >= UNLOCK_THRESHOLD
    }
}

/// Enforce the reachability invariant: the secret view is only active while
/// the unlock predicate holds. Everything else passes through.
#[must_use]
pub const fn resolve_active(view: ViewId, secret_unlocked: bool) -> ViewId {
    match view {
        ViewId::Surprise if !secret_unlocked => ViewId::first_section(),
        other => other,
    }
}

/// One tab in the navigation strip. Label and note are i18n keys resolved
/// by the UI.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MenuEntry {
    pub view: ViewId,
    pub label_key: &'static str,
    pub note_key: &'static str,
}

const BASE_ENTRIES: [MenuEntry; 3] = [
    MenuEntry {
        view: ViewId::Letter,
        label_key: "menu.letter",
        note_key: "menu.letter_note",
    },
    MenuEntry {
        view: ViewId::Music,
        label_key: "menu.music",
        note_key: "menu.music_note",
    },
    MenuEntry {
        view: ViewId::Gallery,
        label_key: "menu.gallery",
        note_key: "menu.gallery_note",
    },
];

const SECRET_ENTRY: MenuEntry = MenuEntry {
    view: ViewId::Surprise,
    label_key: "menu.surprise",
    note_key: "menu.surprise_note",
};

/// The tab list shown to the user: the base sections, with the secret tab
/// appended only while the predicate holds.
#[must_use]
pub fn menu_entries(secret_unlocked: bool) -> Vec<MenuEntry> {
    let mut entries = BASE_ENTRIES.to_vec();
    if secret_unlocked {
        entries.push(SECRET_ENTRY);
    }
    entries
}
