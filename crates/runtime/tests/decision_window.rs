//! Decision-window admission rules driven through the runtime façade.

use battle_core::{DEFAULT_ACTION_LABEL, RhythmConfig, Seconds, SelectError, Side};
use runtime::{BattleRuntime, BattleStateEvent, DecisionEvent, Event, Topic};
use tokio::sync::broadcast::Receiver;

fn at(seconds: f64) -> Seconds {
    Seconds::new(seconds)
}

fn drain(rx: &mut Receiver<Event>) -> Vec<Event> {
    let mut out = Vec::new();
    while let Ok(event) = rx.try_recv() {
        out.push(event);
    }
    out
}

/// Runs a runtime up to the first open decision window (opens just after
/// `now = 1.0` with the test cadence).
fn runtime_with_open_window() -> BattleRuntime {
    let mut rt = BattleRuntime::builder()
        .with_rhythm_config(
            RhythmConfig::new()
                .with_beats_before_decision(2)
                .with_beat_interval(0.5)
                .with_decision_window(0.5)
                .with_loop_delay(0.5),
        )
        .build();

    rt.start_battle(at(0.0));
    rt.tick(at(0.5));
    rt.tick(at(1.0));
    rt.tick(at(1.05));
    assert!(rt.is_decision_window());
    rt
}

#[test]
fn second_selection_hits_the_lock() {
    let mut rt = runtime_with_open_window();
    rt.update_status(Side::Player, 10, 2, 5);

    rt.try_select_skill(1).expect("strike should be affordable");
    assert_eq!(rt.roster().player.ledger.spirit(), 4);

    assert_eq!(rt.try_select_skill(2), Err(SelectError::AlreadySelected));
    assert_eq!(rt.roster().player.ledger.spirit(), 4);
}

#[test]
fn dodge_without_charges_consumes_the_turn() {
    let mut rt = runtime_with_open_window();
    rt.update_status(Side::Player, 10, 0, 0);
    let mut decision_rx = rt.subscribe(Topic::Decision);

    assert_eq!(rt.try_select_skill(0), Err(SelectError::DodgeNotEnough));
    assert_eq!(rt.roster().player.ledger.dodge_charges(), 0);

    // Locked, not a second resource error.
    assert_eq!(rt.try_select_skill(0), Err(SelectError::AlreadySelected));

    assert_eq!(
        drain(&mut decision_rx),
        vec![
            Event::Decision(DecisionEvent::Rejected {
                reason: SelectError::DodgeNotEnough
            }),
            Event::Decision(DecisionEvent::Rejected {
                reason: SelectError::AlreadySelected
            }),
        ]
    );

    // The failed attempt forfeits the end-of-window trickle.
    rt.tick(at(1.5));
    assert_eq!(rt.roster().player.ledger.spirit(), 0);
}

#[test]
fn unaffordable_skill_leaves_spirit_untouched() {
    let mut rt = runtime_with_open_window();
    rt.update_status(Side::Player, 10, 2, 1);

    // Index 2 costs 2 spirit.
    assert_eq!(rt.try_select_skill(2), Err(SelectError::SpiritNotEnough));
    assert_eq!(rt.roster().player.ledger.spirit(), 1);
}

#[test]
fn out_of_range_index_is_invalid_but_not_consuming() {
    let mut rt = runtime_with_open_window();
    rt.update_status(Side::Player, 10, 2, 5);

    assert_eq!(rt.try_select_skill(42), Err(SelectError::InvalidSkill));

    // The window is still open for a valid choice.
    rt.try_select_skill(1).expect("window should still accept");
}

#[test]
fn selection_outside_a_window_is_rejected() {
    let mut rt = BattleRuntime::builder().build();
    assert_eq!(rt.try_select_skill(0), Err(SelectError::NotInDecision));

    // Also rejected during the loop delay after a window closes.
    let mut rt = runtime_with_open_window();
    rt.tick(at(1.5));
    assert!(!rt.is_decision_window());
    assert_eq!(rt.try_select_skill(0), Err(SelectError::NotInDecision));
}

#[test]
fn trickle_at_spirit_ceiling_stays_silent() {
    let mut rt = runtime_with_open_window();
    rt.update_status(Side::Player, 10, 2, 10);
    let mut battle_rx = rt.subscribe(Topic::Battle);

    rt.tick(at(1.5));
    assert_eq!(rt.roster().player.ledger.spirit(), 10);

    let events = drain(&mut battle_rx);
    assert!(
        !events.contains(&Event::Battle(BattleStateEvent::InfoChanged)),
        "a capped trickle must not emit an info change: {events:?}"
    );
}

#[test]
fn pending_label_tracks_the_committed_action() {
    let mut rt = runtime_with_open_window();
    assert_eq!(rt.pending_action_label(), DEFAULT_ACTION_LABEL);

    rt.update_status(Side::Player, 10, 2, 5);
    rt.try_select_skill(1).expect("strike should be affordable");
    assert_eq!(rt.pending_action_label(), "Strike");
}
