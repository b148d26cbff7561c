//! Date-lock gate guarding the card's content views.
//!
//! The gate compares the digits of the entered date against the digits of
//! the secret date; separators never take part in the comparison. Timing is
//! expressed as data (`unlock_timeline`, `LOCKOUT_MS`) so the UI schedules
//! the transitions and can cancel them with the owning component.

use std::fmt;

/// Cooldown after a failed attempt, during which submits are ignored.
pub const LOCKOUT_MS: u32 = 1_800;

const MAX_DATE_DIGITS: usize = 8;

/// One step of the post-match reveal sequence.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimelineStep {
    pub at_ms: u32,
    pub action: UnlockAction,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UnlockAction {
    /// Show the greeting line under the lit heart.
    ShowGreeting,
    /// Clear the gate and navigate to the first content view.
    Enter,
}

const UNLOCK_TIMELINE: [TimelineStep; 2] = [
    TimelineStep {
        at_ms: 600,
        action: UnlockAction::ShowGreeting,
    },
    TimelineStep {
        at_ms: 2_400,
        action: UnlockAction::Enter,
    },
];

/// The ordered reveal plan that follows a successful match.
///
/// Steps are relative to the moment of the match, not to each other.
#[must_use]
pub const fn unlock_timeline() -> &'static [TimelineStep] {
    &UNLOCK_TIMELINE
}

/// Re-group free-text date input as `dd.mm.yyyy` while the user types.
///
/// Non-digits are stripped, the digits are truncated to eight, and dots are
/// inserted once the following group has begun: `"0102199"` stays
/// `"01.02.199"`, never `"01.02.199."`.
#[must_use]
pub fn format_date_input(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_DATE_DIGITS)
        .collect();

    let mut parts: Vec<&str> = Vec::with_capacity(3);
    if !digits.is_empty() {
        parts.push(&digits[..digits.len().min(2)]);
    }
    if digits.len() >= 3 {
        parts.push(&digits[2..digits.len().min(4)]);
    }
    if digits.len() >= 5 {
        parts.push(&digits[4..digits.len().min(8)]);
    }
    parts.join(".")
}

fn digits_of(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum GateStatus {
    #[default]
    Idle,
    /// Transient: the reveal sequence is running.
    Unlocked,
    /// Transient: cooldown after a mismatch.
    Locked,
}

impl fmt::Display for GateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Unlocked => "unlocked",
            Self::Locked => "locked",
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitOutcome {
    /// Digits matched; the unlock timeline should be scheduled.
    Accepted,
    /// Digits differed; the lockout cooldown should be scheduled.
    Rejected,
    /// Submit was suppressed (locked, or the input is incomplete).
    Ignored,
}

/// The date-lock state machine.
///
/// Owns the secret, the formatted input and the transient status. The error
/// flag outlives the lockout on purpose: the message stays visible until the
/// user edits the input, while resubmission is re-enabled as soon as the
/// cooldown expires.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Gate {
    secret: String,
    input: String,
    status: GateStatus,
    error: bool,
}

impl Gate {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            input: String::new(),
            status: GateStatus::Idle,
            error: false,
        }
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub const fn status(&self) -> GateStatus {
        self.status
    }

    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.error
    }

    #[must_use]
    pub const fn is_locked(&self) -> bool {
        matches!(self.status, GateStatus::Locked)
    }

    /// True while the heart should be lit and the reveal sequence runs.
    #[must_use]
    pub const fn is_unlocked(&self) -> bool {
        matches!(self.status, GateStatus::Unlocked)
    }

    /// Store a new candidate, re-formatted as the user types.
    ///
    /// Edits always reset feedback: the error line and any greeting state
    /// disappear immediately. An active lockout is not shortened.
    pub fn set_input(&mut self, raw: &str) {
        self.input = format_date_input(raw);
        self.error = false;
        if self.status == GateStatus::Unlocked {
            self.status = GateStatus::Idle;
        }
    }

    /// Submit is enabled only for a complete candidate.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        digits_of(&self.input).len() == digits_of(&self.secret).len()
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_locked() || !self.can_submit() {
            return SubmitOutcome::Ignored;
        }
        if digits_of(&self.input) == digits_of(&self.secret) {
            self.status = GateStatus::Unlocked;
            self.error = false;
            SubmitOutcome::Accepted
        } else {
            self.status = GateStatus::Locked;
            self.error = true;
            SubmitOutcome::Rejected
        }
    }

    /// Cooldown expired; resubmission is allowed again.
    pub fn clear_lock(&mut self) {
        if self.status == GateStatus::Locked {
            self.status = GateStatus::Idle;
        }
    }

    /// Clear the candidate and return to `Idle` (the reveal finished and the
    /// app navigated away).
    pub fn reset(&mut self) {
        self.input.clear();
        self.status = GateStatus::Idle;
        self.error = false;
    }
}
