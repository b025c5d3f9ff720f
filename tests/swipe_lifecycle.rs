use std::cell::RefCell;
use std::rc::Rc;

use yew_touch::{
    attach, detach, GestureState, MemorySurface, OwnerId, Phase, SwipeDirection, SyntheticTouchEvent,
    TouchConfig, TouchSettings,
};

type Seen = Rc<RefCell<Vec<(&'static str, SwipeDirection)>>>;

fn recording(seen: &Seen, who: &'static str) -> TouchConfig<SyntheticTouchEvent> {
    let on = |dir: SwipeDirection| {
        let seen = seen.clone();
        move |_: &GestureState| seen.borrow_mut().push((who, dir))
    };
    TouchConfig::new()
        .on_left(on(SwipeDirection::Left))
        .on_right(on(SwipeDirection::Right))
        .on_up(on(SwipeDirection::Up))
        .on_down(on(SwipeDirection::Down))
}

fn gesture(surface: &MemorySurface, from: (f64, f64), to: (f64, f64)) {
    surface.dispatch(Phase::Start, &SyntheticTouchEvent::at(from.0, from.1));
    surface.dispatch(Phase::Move, &SyntheticTouchEvent::at((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0));
    surface.dispatch(Phase::End, &SyntheticTouchEvent::at(to.0, to.1));
}

#[test]
fn swipes_through_a_surface() {
    let seen = Seen::default();
    let surface = MemorySurface::new();
    let owner = OwnerId::next();
    assert!(attach(&surface, &recording(&seen, "pad"), owner));

    gesture(&surface, (100.0, 100.0), (50.0, 105.0));
    gesture(&surface, (100.0, 100.0), (105.0, 105.0));
    gesture(&surface, (100.0, 200.0), (100.0, 150.0));
    gesture(&surface, (0.0, 0.0), (0.0, 40.0));
    gesture(&surface, (0.0, 0.0), (40.0, 3.0));

    assert_eq!(
        *seen.borrow(),
        vec![
            ("pad", SwipeDirection::Left),
            ("pad", SwipeDirection::Up),
            ("pad", SwipeDirection::Down),
            ("pad", SwipeDirection::Right),
        ]
    );
}

#[test]
fn owners_on_a_shared_parent_are_independent() {
    let seen = Seen::default();
    let list = MemorySurface::new();
    let (a, b) = (list.child(), list.child());
    let settings = TouchSettings::from_json(r#"{"parent": true}"#).unwrap();
    let config_a = recording(&seen, "a").with_settings(settings);
    let config_b = recording(&seen, "b").with_settings(settings);
    let (owner_a, owner_b) = (OwnerId::next(), OwnerId::next());

    attach(&a, &config_a, owner_a);
    attach(&b, &config_b, owner_b);
    assert_eq!(list.listener_count(), 6);

    gesture(&list, (0.0, 0.0), (-60.0, 0.0));
    assert_eq!(
        *seen.borrow(),
        vec![("a", SwipeDirection::Left), ("b", SwipeDirection::Left)]
    );

    assert!(detach(&a, &config_a, owner_a));
    assert_eq!(list.listener_count(), 3);
    for phase in Phase::ALL {
        assert_eq!(list.listener_count_for(phase), 1);
    }

    seen.borrow_mut().clear();
    gesture(&list, (0.0, 0.0), (60.0, 0.0));
    assert_eq!(*seen.borrow(), vec![("b", SwipeDirection::Right)]);

    assert!(!detach(&a, &config_a, owner_a));
    assert_eq!(list.registered_owners(), vec![owner_b]);
}

#[test]
fn orphan_with_parent_flag_registers_nothing() {
    let seen = Seen::default();
    let orphan = MemorySurface::new();
    let config = recording(&seen, "x").parent(true);
    let owner = OwnerId::next();

    assert!(!attach(&orphan, &config, owner));
    assert!(!detach(&orphan, &config, owner));
    assert_eq!(orphan.listener_count(), 0);
}

#[test]
fn raw_phases_pass_through() {
    let phases = Rc::new(RefCell::new(Vec::new()));
    let surface = MemorySurface::new();
    let push = |phase: Phase| {
        let phases = phases.clone();
        move |e: &yew_touch::TouchWrappedEvent<'_, SyntheticTouchEvent>| {
            phases.borrow_mut().push((phase, e.gesture.point(phase)));
        }
    };
    let config = TouchConfig::new()
        .on_start(push(Phase::Start))
        .on_move(push(Phase::Move))
        .on_end(push(Phase::End));
    attach(&surface, &config, OwnerId::next());

    gesture(&surface, (10.0, 10.0), (30.0, 50.0));
    let recorded: Vec<Phase> = phases.borrow().iter().map(|(p, _)| *p).collect();
    assert_eq!(recorded, vec![Phase::Start, Phase::Move, Phase::End]);
    assert_eq!(phases.borrow()[1].1.client_x, 20.0);
    assert_eq!(phases.borrow()[2].1.client_y, 50.0);
}
