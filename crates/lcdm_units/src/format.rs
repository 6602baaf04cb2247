//! Display formatting for large distances.

/// Render a number as a rounded integer with digits grouped in threes,
/// separated by a single space (`4632879102` -> `"4 632 879 102"`).
///
/// Zero renders as `"0"`. NaN and infinities fall back to their plain
/// `Display` form.
pub fn format_large_number(number: f64) -> String {
    if number == 0.0 {
        return "0".to_string();
    }
    if !number.is_finite() {
        return number.to_string();
    }

    let digits = format!("{:.0}", number.abs());
    let grouped = group_thousands(&digits);
    if number < 0.0 && digits != "0" {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Render a number in exponent form with three decimals (`1.500e3`).
pub fn format_scientific(number: f64) -> String {
    format!("{number:.3e}")
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
