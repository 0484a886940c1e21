//! Amount formatting and rounding helpers.

/// Round to 2 decimal places (reported monetary values).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format an amount the way the assistant quotes Taka: no decimals,
/// thousands separated by commas, e.g. `12345678.9` -> `"12,345,679"`.
pub fn format_taka(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let negative = rounded < 0;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round2(10.006), 10.01);
        assert_eq!(round2(1.2345), 1.23);
        assert_eq!(round2(33.333333), 33.33);
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_taka(0.0), "0");
        assert_eq!(format_taka(999.0), "999");
        assert_eq!(format_taka(1000.0), "1,000");
        assert_eq!(format_taka(1234567.0), "1,234,567");
        assert_eq!(format_taka(12345678.9), "12,345,679");
        assert_eq!(format_taka(-50000.0), "-50,000");
    }
}
