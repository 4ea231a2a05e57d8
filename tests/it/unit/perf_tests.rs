//! Unit tests for perf module.

use hoverboard::perf::{FrameMonitor, ScopedTimer, TARGET_FRAME_MS};

#[test]
fn test_frame_monitor_basic() {
    let mut monitor = FrameMonitor::new();

    monitor.begin_frame();
    let time = monitor.end_frame();

    assert!(time.is_some());
    assert!(time.unwrap() >= 0.0);
    assert_eq!(monitor.total_frames(), 1);
}

#[test]
fn test_end_without_begin() {
    let mut monitor = FrameMonitor::new();
    assert!(monitor.end_frame().is_none());
    assert_eq!(monitor.total_frames(), 0);
}

#[test]
fn test_recorded_frames_statistics() {
    let mut monitor = FrameMonitor::new();
    for ms in [10.0, 20.0, 30.0] {
        monitor.record_frame(ms);
    }

    assert!((monitor.average_frame_time() - 20.0).abs() < 0.001);
    assert_eq!(monitor.max_frame_time(), 30.0);
    assert!((monitor.estimated_fps() - 50.0).abs() < 0.001);
    assert_eq!(monitor.slow_frames(), 0);
}

#[test]
fn test_slow_frames_are_counted() {
    let mut monitor = FrameMonitor::new();
    monitor.record_frame(TARGET_FRAME_MS * 3.0);
    monitor.record_frame(1.0);

    assert_eq!(monitor.slow_frames(), 1);

    monitor.reset();
    assert_eq!(monitor.total_frames(), 0);
    assert_eq!(monitor.average_frame_time(), 0.0);
}

#[test]
fn test_scoped_timer_creation() {
    let timer = ScopedTimer::new("test_op", 1000.0);
    assert!(timer.elapsed_ms() >= 0.0);
}
