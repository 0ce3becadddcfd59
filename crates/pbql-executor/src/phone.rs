//! Phone number formatting.

use pbql::grammar::PHONE_DIGITS;

/// Renders a bare ten-digit phone as `+C (AAA) BBB-CC-DD`.
///
/// Anything that is not exactly ten ASCII digits is returned unchanged.
///
/// ```rust
/// use pbql_executor::format_phone;
///
/// assert_eq!(format_phone("9161234567", "7"), "+7 (916) 123-45-67");
/// ```
pub fn format_phone(phone: &str, country_code: &str) -> String {
    if phone.len() != PHONE_DIGITS || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return phone.to_string();
    }

    format!(
        "+{} ({}) {}-{}-{}",
        country_code,
        &phone[..3],
        &phone[3..6],
        &phone[6..8],
        &phone[8..]
    )
}
