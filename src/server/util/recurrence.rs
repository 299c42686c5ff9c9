/// Fixed recurrence intervals in seconds, keyed by recurrence type.
const RECURRING_INTERVALS: [(&str, i64); 5] = [
    ("daily", 86_400),
    ("weekly", 604_800),
    ("fortnightly", 1_210_000),
    ("monthly", 2_628_000),
    ("yearly", 31_540_000),
];

/// Looks up the interval in seconds for a recurrence type such as `weekly`.
///
/// Returns `None` for anything outside the fixed table, including `None` and the empty
/// string used by one-off events.
pub fn recurring_interval(recurring_type: &str) -> Option<i64> {
    RECURRING_INTERVALS
        .iter()
        .find(|(name, _)| *name == recurring_type)
        .map(|(_, seconds)| *seconds)
}

/// Resolves the interval stored for an event.
///
/// An explicit interval always wins; otherwise the interval is derived from the recurrence
/// type, falling back to `0` for unknown types.
pub fn resolve_interval(recurring_type: &str, explicit: Option<i64>) -> i64 {
    explicit
        .or_else(|| recurring_interval(recurring_type))
        .unwrap_or(0)
}
