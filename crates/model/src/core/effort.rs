/// Working minutes in one person-day.
pub const MINUTES_PER_PERSON_DAY: f64 = 480.0;

/// Decimal places kept on converted effort.
pub const EFFORT_DECIMALS: usize = 2;

/// Converts a vendor effort estimate in minutes to person-days.
/// Negative or non-finite input counts as no effort.
pub fn person_days(minutes: f64) -> f64 {
    if !minutes.is_finite() || minutes <= 0.0 {
        return 0.0;
    }
    round_to(minutes / MINUTES_PER_PERSON_DAY, EFFORT_DECIMALS)
}

/// Rounds to `decimals` places, correctly rounded from the binary value with
/// exact ties going to the even digit.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
