//! Tests for the capture sink and session controller.

use std::thread;

use crate::{
    capture::SessionController,
    frame::{FrameCount, FrameEncoder, FrameHeader},
};

fn frames_for(payload: &[u8], capacity: usize) -> Vec<Vec<u8>> {
    FrameEncoder::for_frame_budget(FrameHeader::WIRE_SIZE + capacity)
        .expect("budget")
        .encode(payload)
        .expect("encode")
}

#[test]
fn completion_is_published_once_and_taken_once() {
    let controller = SessionController::new();
    let sink = controller.sink();
    let payload = b"air-gapped transfer".to_vec();

    for raw in frames_for(&payload, 4) {
        sink.on_frame_detected(&raw);
    }

    let captured = controller.take_payload().expect("payload published");
    assert_eq!(captured.into_bytes(), payload);
    assert!(controller.take_payload().is_none());
}

#[test]
fn single_frame_capture_completes_immediately() {
    let controller = SessionController::new();
    let sink = controller.sink();

    for raw in frames_for(b"tiny", 32) {
        sink.on_frame_detected(&raw);
    }

    let captured = controller.take_payload().expect("payload published");
    assert_eq!(captured.bytes(), b"tiny");
}

#[test]
fn progress_tracks_captured_frames() {
    let controller = SessionController::new();
    let sink = controller.sink();
    let frames = frames_for(&[0xC3; 20], 5);
    assert_eq!(frames.len(), 4);

    sink.on_frame_detected(&frames[0]);
    sink.on_frame_detected(&frames[1]);

    let progress = controller.current_progress();
    assert_eq!(progress.captured(), 2);
    assert_eq!(progress.declared_total().map(FrameCount::get), Some(4));
    assert!((progress.fraction() - 0.5).abs() < f32::EPSILON);
}

#[test]
fn empty_reads_leave_progress_idle() {
    let controller = SessionController::new();
    let sink = controller.sink();
    sink.on_frame_detected(&[]);
    assert_eq!(controller.current_progress().captured(), 0);
    assert_eq!(controller.current_progress().declared_total(), None);
}

#[test]
fn frames_after_completion_are_dropped_until_reset() {
    let controller = SessionController::new();
    let sink = controller.sink();
    let frames = frames_for(&[0x7E; 12], 4);

    for raw in &frames {
        sink.on_frame_detected(raw);
    }
    // The camera is still pointed at the code; replayed frames must not
    // restart accumulation while the payload awaits hand-off.
    for raw in &frames {
        sink.on_frame_detected(raw);
    }
    assert_eq!(controller.current_progress().captured(), 0);
    assert!(controller.take_payload().is_some());

    controller.reset();
    sink.on_frame_detected(&frames[0]);
    assert_eq!(controller.current_progress().captured(), 1);
}

#[test]
fn reset_clears_progress_and_pending_payload() {
    let controller = SessionController::new();
    let sink = controller.sink();
    let frames = frames_for(&[0x11; 12], 4);

    sink.on_frame_detected(&frames[0]);
    assert_eq!(controller.current_progress().captured(), 1);

    controller.reset();
    controller.reset();
    assert_eq!(controller.current_progress().captured(), 0);
    assert_eq!(controller.current_progress().declared_total(), None);
    assert!(controller.take_payload().is_none());

    sink.on_frame_detected(&frames[0]);
    let progress = controller.current_progress();
    assert_eq!(progress.captured(), 1);
    assert_eq!(progress.declared_total().map(FrameCount::get), Some(3));
}

#[test]
fn concurrent_sinks_complete_exactly_once() {
    let controller = SessionController::new();
    let payload: Vec<u8> = (0_u8..=255).cycle().take(600).collect();
    let frames = frames_for(&payload, 60);

    thread::scope(|scope| {
        for _ in 0..4 {
            let sink = controller.sink();
            let frames = frames.clone();
            scope.spawn(move || {
                for _ in 0..3 {
                    for raw in &frames {
                        sink.on_frame_detected(raw);
                    }
                }
            });
        }
    });

    let captured = controller.take_payload().expect("exactly one payload");
    assert_eq!(captured.into_bytes(), payload);
    assert!(controller.take_payload().is_none());
}

#[tokio::test]
async fn watchers_observe_progress_and_completion() {
    let controller = SessionController::new();
    let sink = controller.sink();
    let mut progress = controller.progress();
    let mut completions = controller.completions();
    let frames = frames_for(b"watch me", 2);
    assert_eq!(frames.len(), 4);

    sink.on_frame_detected(&frames[0]);
    progress.changed().await.expect("progress update");
    assert_eq!(progress.borrow_and_update().captured(), 1);

    for raw in &frames[1..] {
        sink.on_frame_detected(raw);
    }
    completions.changed().await.expect("completion update");
    assert!(completions.borrow_and_update().is_some());
}
