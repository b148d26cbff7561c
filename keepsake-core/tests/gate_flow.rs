//! End-to-end walk through the gate: typing, mismatch lockout, match,
//! reveal timeline and the hand-off into the tab layout.

use keepsake_core::{
    Gate, LOCKOUT_MS, SubmitOutcome, UnlockAction, ViewId, VisitedSet, resolve_active,
    unlock_timeline,
};

const SECRET: &str = "14.02.2024";

#[test]
fn wrong_date_then_right_date() {
    let mut gate = Gate::new(SECRET);

    // A wrong candidate of the right length is rejected and locks the gate.
    gate.set_input("01011999");
    assert_eq!(gate.input(), "01.01.1999");
    assert!(gate.can_submit());
    assert_eq!(gate.submit(), SubmitOutcome::Rejected);
    assert!(gate.is_locked());
    assert!(gate.has_error());

    // Hammering submit during the cooldown does nothing.
    assert_eq!(gate.submit(), SubmitOutcome::Ignored);
    assert_eq!(gate.submit(), SubmitOutcome::Ignored);

    // The cooldown expires; the user corrects the date.
    gate.clear_lock();
    gate.set_input("14022024");
    assert_eq!(gate.input(), "14.02.2024");
    assert!(!gate.has_error(), "editing cleared the error line");
    assert_eq!(gate.submit(), SubmitOutcome::Accepted);
    assert!(gate.is_unlocked());

    // The reveal plan the UI schedules from here.
    let steps = unlock_timeline();
    assert_eq!(steps[0].at_ms, 600);
    assert!(matches!(steps[0].action, UnlockAction::ShowGreeting));
    assert_eq!(steps[1].at_ms, 2_400);
    assert!(matches!(steps[1].action, UnlockAction::Enter));

    // The Enter step resets the gate and lands on the first section.
    gate.reset();
    assert_eq!(gate.input(), "");
    assert!(!gate.is_unlocked());
    assert_eq!(ViewId::first_section(), ViewId::Letter);
}

#[test]
fn partial_input_cannot_submit() {
    let mut gate = Gate::new(SECRET);
    for partial in ["1", "1402", "140220", "1402202"] {
        gate.set_input(partial);
        assert!(!gate.can_submit(), "{partial:?} should not be submittable");
        assert_eq!(gate.submit(), SubmitOutcome::Ignored);
    }
}

#[test]
fn separators_do_not_matter() {
    for candidate in ["14.02.2024", "14/02/2024", "14 02 2024", "14022024"] {
        let mut gate = Gate::new(SECRET);
        gate.set_input(candidate);
        assert_eq!(gate.submit(), SubmitOutcome::Accepted, "{candidate:?}");
    }
}

#[test]
fn lockout_duration_matches_the_cooldown_contract() {
    assert_eq!(LOCKOUT_MS, 1_800);
}

#[test]
fn unlocking_lands_on_a_view_the_router_accepts() {
    // Fresh session: nothing visited, secret locked.
    let visited = VisitedSet::default();
    let landing = resolve_active(ViewId::first_section(), visited.secret_unlocked());
    assert_eq!(landing, ViewId::Letter);
}
