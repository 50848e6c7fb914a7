//! Integration tests for the session coordinator

use std::time::{Duration, Instant};

use algotrace::prelude::*;

fn session() -> Session {
    Session::new(AlgorithmRegistry::with_all_plugins(), PlaybackConfig::default()).unwrap()
}

#[test]
fn test_every_registered_algorithm_runs_in_a_session() {
    let mut session = session();
    session.set_target(Some(3.0)).unwrap();
    let registry = AlgorithmRegistry::with_all_plugins();

    for info in registry.list() {
        session.set_structure_kind(info.structure).unwrap();
        let input = match info.structure {
            StructureKind::Graph => r#"{"nodes": [1, 2, 3], "edges": [[0, 1], [1, 2]]}"#,
            _ => "3, 1, 2",
        };
        session.load_input(input).unwrap();
        session.select_algorithm(info.name).unwrap();
        assert_eq!(session.algorithm(), info.name);
        assert!(
            !session.trace().unwrap().is_empty(),
            "{} produced no steps",
            info.name
        );
    }
}

#[test]
fn test_each_rebuild_bumps_generation() {
    let mut session = session();
    let start = session.generation();
    session.load_input("1 2").unwrap();
    session.select_algorithm("quick-sort").unwrap();
    session.insert_node(0, 9.0).unwrap();
    assert_eq!(session.generation(), start + 3);
}

#[test]
fn test_input_change_cancels_playback() {
    let start = Instant::now();
    let mut session = session();
    session.load_input("4 3 2 1").unwrap();
    assert!(session.play(start));
    session.tick(start + Duration::from_secs(1));

    session.load_input("2 1").unwrap();
    assert_eq!(session.state(), PlaybackState::Ready);
    assert_eq!(session.controller().current_index(), 0);
    assert!(!session.tick(start + Duration::from_secs(2)));
}

#[test]
fn test_events_reach_the_caller() {
    let now = Instant::now();
    let mut session = session();
    session.load_input("2 1").unwrap();
    session.take_events();

    session.step_forward(now);
    let events = session.take_events();
    assert!(events.contains(&PlaybackEvent::StepChanged { index: 1 }));
}

#[test]
fn test_tree_editing_keeps_slots() {
    let mut session = session();
    session.set_structure_kind(StructureKind::Tree).unwrap();
    session.load_input("1, null, 3").unwrap();
    session.insert_node(1, 2.0).unwrap();
    assert_eq!(session.raw_input(), "1, 2, null, 3");
    assert_eq!(
        session.structure(),
        &Structure::Tree(vec![Some(1.0), Some(2.0), None, Some(3.0)])
    );
}

#[test]
fn test_speed_is_validated() {
    let mut session = session();
    assert!(matches!(
        session.set_speed(-1.0),
        Err(TraceError::InvalidSpeed { .. })
    ));
    assert_eq!(session.set_speed(2.0).unwrap(), 2.0);
}

#[test]
fn test_node_selection_does_not_change_state() {
    let mut session = session();
    session.load_input("7 8").unwrap();
    let generation = session.generation();
    session.node_selected(1);
    session.node_selected(42);
    assert_eq!(session.generation(), generation);
    assert_eq!(session.state(), PlaybackState::Ready);
}
