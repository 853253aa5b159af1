/// How the numeric part of an ordinal string is rendered.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum NumberFormat {
    /// Pads with leading zeros up to the given width. The sign counts
    /// toward the width.
    ZeroPadded(usize),
    /// Separates thousands with `,`.
    Grouped
}

impl NumberFormat {
    pub fn apply(&self, number: i64) -> String {
        match self {
            NumberFormat::ZeroPadded(width) => format!("{:0width$}", number, width = *width),
            NumberFormat::Grouped => group_thousands(number)
        }
    }
}

fn group_thousands(number: i64) -> String {
    let digits = number.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if number < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

fn format_number(number: i64, format: Option<NumberFormat>) -> String {
    format.map_or_else(|| number.to_string(), |f| f.apply(number))
}

/// Returns the English ordinal suffix for a non-negative number.
pub fn ordinal_suffix(number: i64) -> &'static str {
    match number % 100 {
        11 | 12 | 13 => "th",
        _ => match number % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th"
        }
    }
}

/// Formats `number` followed by its English ordinal suffix, e.g. `1st`,
/// `12th`, `23rd`.
///
/// Negative numbers are returned in their plain formatted form without any
/// suffix, so `-5` renders as `"-5"`.
pub fn to_ordinal_string(number: i64, format: Option<NumberFormat>) -> String {
    let formatted = format_number(number, format);
    if number < 0 {
        return formatted;
    }
    formatted + ordinal_suffix(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_sign() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(-1234567), "-1,234,567");
    }

    #[test]
    fn teens_take_th() {
        for n in [11, 12, 13, 111, 212, 1013] {
            assert_eq!(ordinal_suffix(n), "th", "{n}");
        }
    }
}
