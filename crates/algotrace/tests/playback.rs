//! Integration tests for the playback controller over real traces

use std::sync::Arc;
use std::time::{Duration, Instant};

use proptest::prelude::*;

use algotrace::playback::{PlaybackController, PlaybackEvent, PlaybackState, PlaybackStatus};
use algotrace::{trace, PlaybackConfig, StructureKind, TraceParams};

fn sort_trace() -> Arc<algotrace::Trace> {
    Arc::new(
        trace(
            StructureKind::Array,
            "bubble-sort",
            "5 2 8 1",
            &TraceParams::new(),
        )
        .unwrap(),
    )
}

#[test]
fn test_full_playback_reaches_final_step() {
    let config = PlaybackConfig::default().with_base_interval(Duration::from_millis(100));
    let mut controller = PlaybackController::new(config);
    let trace = sort_trace();
    controller.load(Arc::clone(&trace));

    let mut now = Instant::now();
    assert!(controller.play(now));
    while let Some(deadline) = controller.next_deadline() {
        now = deadline;
        controller.tick(now);
    }

    assert_eq!(controller.state(), PlaybackState::Paused);
    assert_eq!(controller.current_index(), trace.len() - 1);
    assert_eq!(controller.progress(), 1.0);
    let values: Vec<f64> = controller
        .data_snapshot()
        .unwrap()
        .iter()
        .map(|e| e.value)
        .collect();
    assert_eq!(values, vec![1.0, 2.0, 5.0, 8.0]);
}

#[test]
fn test_playback_at_double_speed_takes_half_the_time() {
    let trace = sort_trace();
    let start = Instant::now();

    let mut elapsed = Vec::new();
    for speed in [1.0, 2.0] {
        let mut controller = PlaybackController::default();
        controller.load(Arc::clone(&trace));
        controller.set_speed(speed).unwrap();
        controller.play(start);
        let mut last = start;
        while let Some(deadline) = controller.next_deadline() {
            last = deadline;
            controller.tick(deadline);
        }
        elapsed.push(last - start);
    }
    assert_eq!(elapsed[0], elapsed[1] * 2);
}

#[test]
fn test_pause_and_resume() {
    let start = Instant::now();
    let mut controller = PlaybackController::default();
    controller.load(sort_trace());
    controller.play(start);
    controller.tick(start + Duration::from_secs(1));
    controller.pause();

    assert_eq!(controller.state(), PlaybackState::Paused);
    assert!(!controller.tick(start + Duration::from_secs(5)));
    assert_eq!(controller.current_index(), 1);

    assert!(controller.toggle(start + Duration::from_secs(5)));
    assert!(controller.tick(start + Duration::from_secs(6)));
    assert_eq!(controller.current_index(), 2);
}

#[test]
fn test_reset_restores_initial_order() {
    let now = Instant::now();
    let mut controller = PlaybackController::default();
    controller.load(sort_trace());
    controller.seek(10, now);
    controller.take_events();

    controller.reset();
    let restore = controller
        .take_events()
        .into_iter()
        .find_map(|event| match event {
            PlaybackEvent::Reset { restore } => restore,
            _ => None,
        })
        .unwrap();
    let values: Vec<f64> = restore.iter().map(|e| e.value).collect();
    assert_eq!(values, vec![5.0, 2.0, 8.0, 1.0]);
}

#[test]
fn test_traversal_reset_has_nothing_to_restore() {
    let mut controller = PlaybackController::default();
    controller.load(
        trace(
            StructureKind::Tree,
            "inorder",
            "1 2 3",
            &TraceParams::new(),
        )
        .unwrap(),
    );
    controller.take_events();
    controller.reset();
    assert!(controller
        .take_events()
        .contains(&PlaybackEvent::Reset { restore: None }));
}

#[test]
fn test_status_serializes() {
    let mut controller = PlaybackController::default();
    controller.load(sort_trace());
    let json = serde_json::to_string(&PlaybackStatus::from(&controller)).unwrap();
    assert!(json.contains("\"state\":\"Ready\""));
    assert!(json.contains("\"total_steps\":18"));
}

#[derive(Debug, Clone)]
enum Action {
    Play,
    Pause,
    Forward,
    Back,
    Seek(usize),
    Reset,
    Wait(u64),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Play),
        Just(Action::Pause),
        Just(Action::Forward),
        Just(Action::Back),
        (0usize..40).prop_map(Action::Seek),
        Just(Action::Reset),
        (0u64..3000).prop_map(Action::Wait),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn index_always_in_range(actions in prop::collection::vec(action(), 0..60)) {
        let trace = sort_trace();
        let last = trace.len() - 1;
        let mut controller = PlaybackController::default();
        controller.load(trace);
        let mut now = Instant::now();

        for action in actions {
            let before = controller.current_index();
            match action {
                Action::Play => { controller.play(now); }
                Action::Pause => controller.pause(),
                Action::Forward => {
                    controller.step_forward(now);
                    if before == last {
                        prop_assert_eq!(controller.current_index(), last);
                    }
                }
                Action::Back => {
                    controller.step_back(now);
                    if before == 0 {
                        prop_assert_eq!(controller.current_index(), 0);
                    }
                }
                Action::Seek(index) => { controller.seek(index, now); }
                Action::Reset => controller.reset(),
                Action::Wait(ms) => {
                    now += Duration::from_millis(ms);
                    controller.tick(now);
                }
            }
            prop_assert!(controller.current_index() <= last);
            if controller.current_index() == last && controller.next_deadline().is_none() {
                prop_assert!(!controller.is_playing());
            }
            if controller.is_playing() {
                prop_assert!(controller.next_deadline().is_some());
            }
        }
    }
}
