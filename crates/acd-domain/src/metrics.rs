//! Derived-metrics calculator
//!
//! Pure, total functions turning raw capacity counters into free-capacity
//! and ratio figures. Division by zero yields 0.0, never an error or NaN:
//! the formulas are kept here, isolated from any network concern, so they
//! are independently testable.

/// Free capacity: `total - used`
pub fn free_gb(total_gb: f64, used_gb: f64) -> f64 {
    total_gb - used_gb
}

/// Utilization as a percentage of total: `used / total * 100`
///
/// Returns 0.0 when `total_gb` is zero.
pub fn utilization_percent(used_gb: f64, total_gb: f64) -> f64 {
    ratio_percent(used_gb, total_gb)
}

/// Subscription as a percentage of total: `subscribed / total * 100`
///
/// May exceed 100 under thin provisioning; never clamped.
/// Returns 0.0 when `total_gb` is zero.
pub fn subscription_percent(subscribed_gb: f64, total_gb: f64) -> f64 {
    ratio_percent(subscribed_gb, total_gb)
}

fn ratio_percent(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        (numerator / denominator) * 100.0
    } else {
        0.0
    }
}
