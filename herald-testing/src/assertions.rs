// Assertions over recorded listener activity

use crate::recorder::Recorder;
use std::fmt::Debug;
use std::time::Duration;

/// Assert that a recorder holds exactly `expected`, in order
pub fn assert_recorded<T>(recorder: &Recorder<T>, expected: &[T])
where
    T: Clone + PartialEq + Debug,
{
    let actual = recorder.entries();
    assert_eq!(
        actual, expected,
        "Expected recorded values {:?}, got {:?}",
        expected, actual
    );
}

/// Assert that a recorder holds `expected` regardless of order
///
/// For listeners running as independent tasks, where completion order is
/// not defined.
pub fn assert_recorded_unordered<T>(recorder: &Recorder<T>, expected: &[T])
where
    T: Clone + PartialEq + Debug,
{
    let actual = recorder.entries();
    let mut remaining = actual.clone();
    for value in expected {
        match remaining.iter().position(|v| v == value) {
            Some(index) => {
                remaining.swap_remove(index);
            }
            None => panic!("Expected {:?} to be recorded, got {:?}", value, actual),
        }
    }
    assert!(
        remaining.is_empty(),
        "Unexpected recorded values {:?} (all: {:?})",
        remaining,
        actual
    );
}

/// Assert that a recorder reaches `count` values within `timeout`
pub fn assert_recorded_within<T>(recorder: &Recorder<T>, count: usize, timeout: Duration) {
    assert!(
        recorder.wait_for_len(count, timeout),
        "Expected {} recorded values within {:?}, got {}",
        count,
        timeout,
        recorder.len()
    );
}
