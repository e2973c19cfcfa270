//! English rendering rules.
//!
//! Regular short-scale naming: every nonzero scale group keeps its numeral
//! ("one thousand"), tens and ones join with a hyphen ("ninety-nine").

use super::LanguageText;
use super::digits;

const DIGIT_NAMES: [&str; 10] = [
	"zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];
const TEENS: [&str; 10] = [
	"ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen",
	"eighteen", "nineteen",
];
const TENS_MULTIPLES: [&str; 8] = [
	"twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];
const SCALE_NAMES: [&str; 5] = ["", "thousand", "million", "billion", "trillion"];

pub(crate) const TEXT: LanguageText = LanguageText {
	negative: "negative",
	decimal: "point",
	not_a_number: "The provided value is not a number",
	number_too_large: "Number too large: maximum 999 trillion is supported",
};

/// Renders a group in [1, 999].
fn three_digits(value: u16) -> String {
	let hundreds = usize::from(value / 100);
	let remainder = value % 100;

	let mut result = String::new();
	if hundreds > 0 {
		result.push_str(DIGIT_NAMES[hundreds]);
		result.push_str(" hundred");
	}

	if remainder > 0 {
		if !result.is_empty() {
			result.push(' ');
		}
		let tens = usize::from(remainder / 10);
		let ones = usize::from(remainder % 10);
		if (10..20).contains(&remainder) {
			result.push_str(TEENS[ones]);
		} else if tens >= 2 {
			result.push_str(TENS_MULTIPLES[tens - 2]);
			if ones > 0 {
				result.push('-');
				result.push_str(DIGIT_NAMES[ones]);
			}
		} else {
			result.push_str(DIGIT_NAMES[ones]);
		}
	}

	result
}

pub(crate) fn integer_to_words(digits: &str) -> String {
	if digits == "0" {
		return DIGIT_NAMES[0].to_owned();
	}

	let groups = digits::split_groups(digits, 3);
	let mut parts = Vec::new();
	for (level, &value) in groups.iter().enumerate().rev() {
		if value == 0 {
			continue;
		}
		let mut part = three_digits(value);
		if level > 0 {
			part.push(' ');
			part.push_str(SCALE_NAMES[level]);
		}
		parts.push(part);
	}

	parts.join(" ")
}

pub(crate) fn decimal_to_words(digits: &str) -> String {
	digits::spell_digits(digits, &DIGIT_NAMES, " ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn small_numbers() {
		assert_eq!(integer_to_words("0"), "zero");
		assert_eq!(integer_to_words("7"), "seven");
		assert_eq!(integer_to_words("19"), "nineteen");
		assert_eq!(integer_to_words("20"), "twenty");
		assert_eq!(integer_to_words("99"), "ninety-nine");
	}

	#[test]
	fn hundreds() {
		assert_eq!(integer_to_words("100"), "one hundred");
		assert_eq!(integer_to_words("101"), "one hundred one");
		assert_eq!(integer_to_words("110"), "one hundred ten");
		assert_eq!(integer_to_words("999"), "nine hundred ninety-nine");
	}

	#[test]
	fn scale_groups_keep_their_numeral() {
		assert_eq!(integer_to_words("1000"), "one thousand");
		assert_eq!(integer_to_words("1001"), "one thousand one");
		assert_eq!(integer_to_words("1000000"), "one million");
	}

	#[test]
	fn zero_groups_add_no_scale_word() {
		assert_eq!(integer_to_words("100000"), "one hundred thousand");
		assert_eq!(integer_to_words("1000001"), "one million one");
		assert_eq!(
			integer_to_words("250000"),
			"two hundred fifty thousand"
		);
	}

	#[test]
	fn full_range_boundary() {
		assert_eq!(
			integer_to_words("999999999999999"),
			"nine hundred ninety-nine trillion nine hundred ninety-nine billion \
			 nine hundred ninety-nine million nine hundred ninety-nine thousand \
			 nine hundred ninety-nine"
		);
	}

	#[test]
	fn decimals_are_spelled_digit_by_digit() {
		assert_eq!(decimal_to_words("45"), "four five");
		assert_eq!(decimal_to_words("01"), "zero one");
	}
}
