//! Display formatting. Values reach this module at full precision and are only
//! rounded for presentation.

/// Whole US dollars with thousands separators, e.g. `$10,567,964`.
pub fn format_usd(value: f64) -> String {
    let rounded = value.round();
    let grouped = group_thousands(rounded.abs() as u64);
    if rounded < 0.0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Day counts with one decimal place.
pub fn format_days(value: f64) -> String {
    format!("{value:.1}")
}

pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_uses_thousands_separators() {
        assert_eq!(format_usd(10_567_964.383_561_645), "$10,567,964");
        assert_eq!(format_usd(487_500.0), "$487,500");
        assert_eq!(format_usd(999.5), "$1,000");
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(-170_000.0), "-$170,000");
    }

    #[test]
    fn days_keep_one_decimal() {
        assert_eq!(format_days(22.4535), "22.5");
        assert_eq!(format_days(17.0), "17.0");
    }

    #[test]
    fn percent_from_fraction() {
        assert_eq!(format_percent(0.8107), "81.1%");
    }
}
