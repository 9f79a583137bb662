use std::cell::RefCell;
use std::rc::Rc;

use crate::core::*;
use crate::test::test_util::{GameTestState, RecordingObserver};
use Direction::*;

const PUSH_LEVEL: &str = r#"
#####
#@$.#
#####
"#;

#[test]
fn observers_are_notified_in_registration_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let first_log = log.clone();
    let second_log = log.clone();
    let first: Rc<dyn GameObserver> =
        Rc::new(move |event: GameEvent| first_log.borrow_mut().push(("first", event)));
    let second: Rc<dyn GameObserver> =
        Rc::new(move |event: GameEvent| second_log.borrow_mut().push(("second", event)));

    let mut game = GameTestState::new(PUSH_LEVEL);
    game.game.add_observer(&first);
    game.game.add_observer(&second);
    game.assert_move(Right);

    assert_eq!(
        *log.borrow(),
        vec![
            ("first", GameEvent::BoxMoved),
            ("second", GameEvent::BoxMoved),
            ("first", GameEvent::PlayerMoved),
            ("second", GameEvent::PlayerMoved),
            ("first", GameEvent::LevelWon),
            ("second", GameEvent::LevelWon),
        ]
    );
}

#[test]
fn duplicate_registration_is_notified_twice() {
    let mut game = GameTestState::new(PUSH_LEVEL);
    let handle = game.handle.clone();
    game.game.add_observer(&handle);
    assert_eq!(game.game.observer_count(), 2);

    game.game.notify(GameEvent::PlayerMoved);
    assert_eq!(
        game.events(),
        vec![GameEvent::PlayerMoved, GameEvent::PlayerMoved]
    );

    // one removal drops one registration
    game.game.remove_observer(&handle);
    assert_eq!(game.game.observer_count(), 1);
    game.recorder.clear();
    game.game.notify(GameEvent::PlayerMoved);
    assert_eq!(game.events(), vec![GameEvent::PlayerMoved]);
}

#[test]
fn removed_observer_is_not_notified() {
    let mut game = GameTestState::new(PUSH_LEVEL);
    let handle = game.handle.clone();
    game.game.remove_observer(&handle);
    assert_eq!(game.game.observer_count(), 0);

    game.assert_move(Right);
    assert!(game.events().is_empty());
}

#[test]
fn removing_unknown_observer_is_a_no_op() {
    let mut game = GameTestState::new(PUSH_LEVEL);
    let stranger: Rc<dyn GameObserver> = Rc::new(RecordingObserver::default());
    game.game.remove_observer(&stranger);
    assert_eq!(game.game.observer_count(), 1);

    game.assert_move(Right);
    assert_eq!(game.recorder.last(), Some(GameEvent::LevelWon));
}

#[test]
fn dropped_observer_is_skipped() {
    let mut game = GameTestState::new(PUSH_LEVEL);
    let short_lived = Rc::new(RecordingObserver::default());
    {
        let handle: Rc<dyn GameObserver> = short_lived.clone();
        game.game.add_observer(&handle);
    }
    assert_eq!(game.game.observer_count(), 2);
    drop(short_lived);
    assert_eq!(game.game.observer_count(), 1);

    game.assert_move(Right);
    assert_eq!(
        game.events(),
        vec![GameEvent::BoxMoved, GameEvent::PlayerMoved, GameEvent::LevelWon]
    );
}

#[test]
fn observer_reads_state_after_the_command_returns() {
    // observers record, the driver reacts once the engine call is over
    let pending = Rc::new(RefCell::new(None));
    let sink = pending.clone();
    let handle: Rc<dyn GameObserver> = Rc::new(move |event: GameEvent| {
        if event == GameEvent::LevelWon {
            *sink.borrow_mut() = Some(event);
        }
    });

    let mut game = GameTestState::new(PUSH_LEVEL);
    game.game.add_observer(&handle);
    game.assert_move(Right);

    if pending.borrow_mut().take().is_some() {
        game.game.restart_level().unwrap();
    }
    assert_eq!(game.game.current_state(), GameState::Playing);
    assert_eq!(game.game.player_position(), Position::new(1, 1));
    assert_eq!(game.recorder.last(), Some(GameEvent::LevelReloaded));
}
