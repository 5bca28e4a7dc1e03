/// Format one per-manager summary line.
///
/// The raw time text is reproduced as stored, not re-formatted.
///
/// # Examples
///
/// ```
/// use filter_core::formatting::format_manager_total;
///
/// assert_eq!(
///     format_manager_total("0a", "2.50"),
///     "Total time for manager 0a: 2.50"
/// );
/// ```
pub fn format_manager_total(id: &str, raw_time: &str) -> String {
    format!("Total time for manager {}: {}", id, raw_time)
}

/// Format the grand-total line with six decimal places.
///
/// # Examples
///
/// ```
/// use filter_core::formatting::format_grand_total;
///
/// assert_eq!(
///     format_grand_total(7.25),
///     "Total BackOff Time Delay (s) 7.250000"
/// );
/// assert_eq!(
///     format_grand_total(0.0),
///     "Total BackOff Time Delay (s) 0.000000"
/// );
/// ```
pub fn format_grand_total(total_seconds: f64) -> String {
    format!("Total BackOff Time Delay (s) {:.6}", total_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_total_keeps_raw_text() {
        // Stored times are echoed verbatim, trailing spaces included.
        assert_eq!(
            format_manager_total("0b", "3.00   "),
            "Total time for manager 0b: 3.00   "
        );
    }

    #[test]
    fn test_grand_total_rounds_to_six_places() {
        assert_eq!(
            format_grand_total(1.0 / 3.0),
            "Total BackOff Time Delay (s) 0.333333"
        );
    }

    #[test]
    fn test_grand_total_negative() {
        assert_eq!(
            format_grand_total(-2.5),
            "Total BackOff Time Delay (s) -2.500000"
        );
    }
}
