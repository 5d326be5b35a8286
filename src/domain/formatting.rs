//! Display formatting for computed figures.
//!
//! The presentation layer renders every dollar amount and rate through these
//! helpers so the same number always reads the same way.

/// Groups digits in threes: `1234567` → `"1,234,567"`.
pub fn count(value: impl Into<i128>) -> String {
    let value = value.into();
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Whole-dollar USD: `12255000` → `"$12,255,000"`, `-500` → `"-$500"`.
pub fn currency(amount: impl Into<i128>) -> String {
    let amount = amount.into();
    let body = count(amount.unsigned_abs() as i128);
    if amount < 0 {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// One-decimal percentage: `16.26` → `"16.3%"`.
pub fn percent(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }
    format!("{:.1}%", value)
}

/// ROI shown as a multiple once it reaches 100%: `262.6` → `"2.6X"`, `45.0` → `"45.0%"`.
pub fn roi(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }
    if value >= 100.0 {
        format!("{:.1}X", value / 100.0)
    } else {
        format!("{:.1}%", value)
    }
}

/// Coverage fraction as a percentage: `0.1626` → `"16.3%"`.
pub fn coverage(fraction: f64) -> String {
    percent(fraction * 100.0)
}
