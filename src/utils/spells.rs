//! Wet/dry spell primitives
//!
//! Rolling-run helpers shared by the agro decision rules: wet-day flags,
//! longest dry spell in a window, and running consecutive-event counts.

/// Standard WMO wet-day threshold [mm].
pub const WET_DAY_THRESHOLD: f64 = 1.0;

/// Flag days with rainfall of at least `threshold` mm.
pub fn wet_days(values: &[f64], threshold: f64) -> Vec<bool> {
    values.iter().map(|&v| threshold <= v).collect()
}

/// Longest run of consecutive days with value at or below `threshold`
/// (the maximum dry-spell length) within the supplied window.
pub fn cdd_max(values: &[f64], threshold: f64) -> usize {
    let mut current = 0;
    let mut longest = 0;
    for &v in values {
        if v <= threshold {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Running count of consecutive `true` events ending at the *previous*
/// position. The count resets to 0 on a `false` event, so `events[i]`
/// itself never contributes to `out[i]`.
pub fn consecutive_event_count(events: &[bool]) -> Vec<u32> {
    let mut count = 0;
    let mut out = Vec::with_capacity(events.len());
    for &event in events {
        if event {
            out.push(count);
            count += 1;
        } else {
            count = 0;
            out.push(count);
        }
    }
    out
}
