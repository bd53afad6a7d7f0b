/// Round to the nearest integer, halves toward positive infinity
/// (`2.5 → 3`, `-2.5 → -2`), matching the figures already published on the
/// dashboard.
///
/// `x - floor(x)` is exact, so values just under a half and integers past
/// 2^52 are not nudged up the way `floor(x + 0.5)` would.
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// `round_half_up(x * 100) / 100`
pub fn round_cents(x: f64) -> f64 {
    round_half_up(x * 100.0) / 100.0
}
