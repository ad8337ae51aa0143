//! Money and percentage formatting in pt-BR style.

/// Inserts `sep` every three digits of a non-negative integer string.
fn group_thousands(digits: &str, sep: char) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(sep);
        }
        result.push(c);
    }
    result
}

/// Number with `.` thousands separator and decimal comma: `1.234,50`
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };
    let grouped = group_thousands(int_part, '.');
    // "-0,00" is not a thing
    let negative = value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}{grouped},{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// BRL: `R$ 1.234,56`, negatives as `-R$ 1.234,56`
pub fn format_currency(value: f64) -> String {
    let body = format_decimal(value.abs(), 2);
    if value < 0.0 && body != "0,00" {
        format!("-R$ {body}")
    } else {
        format!("R$ {body}")
    }
}

/// One digit after the point: `64.0%`
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Y axis tick in thousands, `R$1.5k`
pub fn format_compact_currency(value: f64) -> String {
    let thousands = (value / 1000.0 * 100.0).round() / 100.0;
    format!("R${}k", thousands)
}

/// Parses user input such as `1.234,56`, `1234.56` or `1234,5`.
pub fn parse_amount(input: &str) -> Option<f64> {
    let cleaned: String = input
        .trim()
        .trim_start_matches("R$")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    let normalized = if cleaned.contains(',') {
        cleaned.replace('.', "").replace(',', ".")
    } else {
        cleaned
    };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_brl() {
        assert_eq!(format_currency(1234.56), "R$ 1.234,56");
        assert_eq!(format_currency(1_234_567.891), "R$ 1.234.567,89");
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(999.999), "R$ 1.000,00");
        assert_eq!(format_currency(-50.0), "-R$ 50,00");
        assert_eq!(format_currency(-0.001), "R$ 0,00");
    }

    #[test]
    fn decimal_grouping() {
        assert_eq!(format_decimal(100.0, 0), "100");
        assert_eq!(format_decimal(1000.0, 0), "1.000");
        assert_eq!(format_decimal(-98765.4, 1), "-98.765,4");
        assert_eq!(format_decimal(f64::NAN, 2), "0,00");
    }

    #[test]
    fn percent_one_decimal() {
        assert_eq!(format_percent(64.01), "64.0%");
        assert_eq!(format_percent(100.0), "100.0%");
        assert_eq!(format_percent(-3.26), "-3.3%");
    }

    #[test]
    fn compact_axis_ticks() {
        assert_eq!(format_compact_currency(2000.0), "R$2k");
        assert_eq!(format_compact_currency(1500.0), "R$1.5k");
        assert_eq!(format_compact_currency(0.0), "R$0k");
        assert_eq!(format_compact_currency(250.0), "R$0.25k");
    }

    #[test]
    fn parses_user_amounts() {
        assert_eq!(parse_amount("1.234,56"), Some(1234.56));
        assert_eq!(parse_amount("1234.56"), Some(1234.56));
        assert_eq!(parse_amount("R$ 10,5"), Some(10.5));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
    }
}
