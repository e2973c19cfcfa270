//! Digit-string utilities shared by all language renderers.
//!
//! Renderers operate on plain ASCII digit strings so that values up to the
//! supported maximum (15 integer digits) never need a wide integer type at
//! the API boundary. Non-digit bytes are filtered out during normalization,
//! never inside the renderers themselves.

/// Keeps only ASCII digits from the input.
///
/// Renderers assume their input went through this filter; they index into
/// word tables by digit value and must never see anything else.
pub(crate) fn keep_digits(input: &str) -> String {
	input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Strips leading zeros from an integer digit string.
///
/// An empty or all-zero input normalizes to `"0"`, so the result is never
/// empty.
pub(crate) fn strip_leading_zeros(digits: &str) -> &str {
	let stripped = digits.trim_start_matches('0');
	if stripped.is_empty() { "0" } else { stripped }
}

/// Strips trailing zeros from a decimal digit string.
///
/// An all-zero decimal part normalizes to the empty string; the caller
/// omits the decimal-separator word in that case.
pub(crate) fn strip_trailing_zeros(digits: &str) -> &str {
	digits.trim_end_matches('0')
}

/// Partitions an integer digit string into scale groups.
///
/// Groups are returned least-significant first, so the index of a group is
/// its scale level (0 = no scale word, 1 = thousand-level, ...). `width` is
/// 3 for most languages and 4 for languages that scale by 10,000.
///
/// # Notes
/// - The input must contain ASCII digits only.
/// - The most significant group may be shorter than `width`.
pub(crate) fn split_groups(digits: &str, width: usize) -> Vec<u16> {
	let bytes = digits.as_bytes();
	let mut groups = Vec::with_capacity(bytes.len() / width + 1);

	let mut end = bytes.len();
	while end > 0 {
		let start = end.saturating_sub(width);
		let mut value: u16 = 0;
		for &b in &bytes[start..end] {
			value = value * 10 + u16::from(b - b'0');
		}
		groups.push(value);
		end = start;
	}

	groups
}

/// Renders a digit string digit by digit through a name table.
///
/// Used by the decimal renderers: fractional digits are always spelled
/// independently, never grouped into teens or tens.
pub(crate) fn spell_digits(digits: &str, names: &[&str; 10], separator: &str) -> String {
	let mut result = String::new();
	for b in digits.bytes() {
		if !result.is_empty() {
			result.push_str(separator);
		}
		result.push_str(names[usize::from(b - b'0')]);
	}
	result
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn leading_zeros_normalize_to_single_zero() {
		assert_eq!(strip_leading_zeros("000"), "0");
		assert_eq!(strip_leading_zeros(""), "0");
		assert_eq!(strip_leading_zeros("007"), "7");
		assert_eq!(strip_leading_zeros("700"), "700");
	}

	#[test]
	fn trailing_zeros_may_strip_to_empty() {
		assert_eq!(strip_trailing_zeros("500"), "5");
		assert_eq!(strip_trailing_zeros("0"), "");
		assert_eq!(strip_trailing_zeros("05"), "05");
	}

	#[test]
	fn groups_are_least_significant_first() {
		assert_eq!(split_groups("1234567", 3), vec![567, 234, 1]);
		assert_eq!(split_groups("7", 3), vec![7]);
		assert_eq!(split_groups("12345", 4), vec![2345, 1]);
	}

	#[test]
	fn spelling_uses_the_name_table() {
		const NAMES: [&str; 10] = [
			"zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
		];
		assert_eq!(spell_digits("05", &NAMES, " "), "zero five");
		assert_eq!(spell_digits("", &NAMES, " "), "");
	}
}
