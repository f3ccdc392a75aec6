use crate::config;

/// Input mask for the phone field.
///
/// Keeps at most `MAX_PHONE_DIGITS` digits of `raw` and lays them out as
/// `(DDD`, `(DDD) DDD`, `(DDD) DDD-DDDD` or `+DDD DDD DDDD D...` depending
/// on how many there are. Returns `None` when `raw` has no digits, in which
/// case the field keeps whatever was typed.
pub fn format_phone(raw: &str) -> Option<String> {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(config::MAX_PHONE_DIGITS)
        .collect();

    // ASCII digits only, so byte slicing below is on char boundaries
    let formatted = match digits.len() {
        0 => return None,
        1..=3 => format!("({}", digits),
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        7..=10 => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        _ => format!(
            "+{} {} {} {}",
            &digits[..3],
            &digits[3..6],
            &digits[6..10],
            &digits[10..]
        ),
    };
    Some(formatted)
}
