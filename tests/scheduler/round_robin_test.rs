/*!
 * Round-Robin Tests
 * Scheduling passes over hand-built metrics
 */

use bank_kernel::{MetricsTracker, RoundRobin, RunQueue, SchedulerError, SimClock};
use pretty_assertions::assert_eq;

fn tracker_with(execution_times: &[i64]) -> MetricsTracker {
    let mut tracker = MetricsTracker::new();
    for (i, exec) in execution_times.iter().enumerate() {
        tracker.record_arrival(i as u32 + 1, 0, *exec);
    }
    tracker
}

#[test]
fn test_worked_example() {
    let mut tracker = tracker_with(&[5, 2, 4]);
    let mut queue = RunQueue::with_capacity(8);
    assert_eq!(tracker.enqueue_pending(&mut queue).unwrap(), 3);

    let clock = SimClock::new();
    let schedule = RoundRobin::new(2).run(&mut tracker, &mut queue, &clock).unwrap();

    assert_eq!(schedule.completion_times(), vec![11, 4, 10]);
    let turnaround: Vec<_> = schedule.rows.iter().map(|m| m.turnaround_time).collect();
    let waiting: Vec<_> = schedule.rows.iter().map(|m| m.waiting_time).collect();
    assert_eq!(turnaround, vec![11, 4, 10]);
    assert_eq!(waiting, vec![6, 2, 6]);
    assert_eq!(clock.now(), 11);
    assert!((schedule.stats.average_waiting - 14.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_waiting_equals_turnaround_minus_execution() {
    let mut tracker = tracker_with(&[1, 3, 5, 2, 4]);
    let mut queue = RunQueue::with_capacity(8);
    tracker.enqueue_pending(&mut queue).unwrap();

    let schedule = RoundRobin::new(2)
        .run(&mut tracker, &mut queue, &SimClock::new())
        .unwrap();

    for row in &schedule.rows {
        assert!(row.is_completed());
        assert_eq!(row.waiting_time, row.turnaround_time - row.execution_time);
        assert!(row.waiting_time >= 0);
    }
    let busy: i64 = schedule.slices.iter().map(|s| s.duration()).sum();
    assert_eq!(busy, 15);
}

#[test]
fn test_no_slice_exceeds_quantum() {
    let mut tracker = tracker_with(&[5, 5]);
    let mut queue = RunQueue::with_capacity(4);
    tracker.enqueue_pending(&mut queue).unwrap();

    let schedule = RoundRobin::new(2)
        .run(&mut tracker, &mut queue, &SimClock::new())
        .unwrap();

    assert!(schedule.slices.iter().all(|s| s.duration() <= 2));
    assert_eq!(schedule.stats.preemptions, 4);
}

#[test]
fn test_completed_records_are_not_requeued() {
    let mut tracker = tracker_with(&[3]);
    let mut queue = RunQueue::with_capacity(4);
    let clock = SimClock::new();
    tracker.enqueue_pending(&mut queue).unwrap();
    RoundRobin::new(2).run(&mut tracker, &mut queue, &clock).unwrap();

    assert_eq!(tracker.enqueue_pending(&mut queue).unwrap(), 0);
    let again = RoundRobin::new(2).run(&mut tracker, &mut queue, &clock).unwrap();
    assert!(again.slices.is_empty());
    assert_eq!(again.completion_times(), vec![3]);
}

#[test]
fn test_queue_rejects_duplicates() {
    let mut queue = RunQueue::with_capacity(2);
    queue.enqueue(0).unwrap();
    assert_eq!(queue.enqueue(0), Err(SchedulerError::AlreadyQueued(0)));
    queue.enqueue(1).unwrap();
    assert_eq!(queue.enqueue(2), Err(SchedulerError::QueueFull { capacity: 2 }));
}
