//! Japanese rendering rules.
//!
//! Numbers group by four digits, not three: the scales are 万 (10^4),
//! 億 (10^8) and 兆 (10^12). Inside a group, 千, 百 and 十 follow their
//! multiplier, which is omitted when it is one (千, not 一千). Everything
//! concatenates without separators.

use super::LanguageText;
use super::digits;

const DIGIT_NAMES: [&str; 10] = [
	"零", "一", "二", "三", "四", "五", "六", "七", "八", "九",
];
const SCALE_NAMES: [&str; 4] = ["", "万", "億", "兆"];

pub(crate) const TEXT: LanguageText = LanguageText {
	negative: "マイナス",
	decimal: "点",
	not_a_number: "指定された値は数値ではありません",
	number_too_large: "数値が大きすぎます: 最大999兆までです",
};

fn four_digits(value: u16) -> String {
	let mut result = String::new();
	let mut remaining = value;

	for (unit, magnitude) in [("千", 1000), ("百", 100), ("十", 10)] {
		let count = remaining / magnitude;
		if count > 0 {
			if count > 1 {
				result.push_str(DIGIT_NAMES[usize::from(count)]);
			}
			result.push_str(unit);
			remaining %= magnitude;
		}
	}
	if remaining > 0 {
		result.push_str(DIGIT_NAMES[usize::from(remaining)]);
	}

	result
}

pub(crate) fn integer_to_words(digits: &str) -> String {
	if digits == "0" {
		return DIGIT_NAMES[0].to_owned();
	}

	let groups = digits::split_groups(digits, 4);
	let mut result = String::new();
	for (level, &value) in groups.iter().enumerate().rev() {
		if value == 0 {
			continue;
		}
		result.push_str(&four_digits(value));
		result.push_str(SCALE_NAMES[level]);
	}

	result
}

pub(crate) fn decimal_to_words(digits: &str) -> String {
	digits::spell_digits(digits, &DIGIT_NAMES, "")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn multiplier_omitted_when_one() {
		assert_eq!(integer_to_words("10"), "十");
		assert_eq!(integer_to_words("100"), "百");
		assert_eq!(integer_to_words("1000"), "千");
		assert_eq!(integer_to_words("111"), "百十一");
	}

	#[test]
	fn multiplier_kept_above_one() {
		assert_eq!(integer_to_words("20"), "二十");
		assert_eq!(integer_to_words("345"), "三百四十五");
		assert_eq!(integer_to_words("8000"), "八千");
	}

	#[test]
	fn four_digit_scales() {
		assert_eq!(integer_to_words("10000"), "一万");
		assert_eq!(integer_to_words("100000000"), "一億");
		assert_eq!(integer_to_words("12345"), "一万二千三百四十五");
	}

	#[test]
	fn decimal_concatenates() {
		assert_eq!(decimal_to_words("05"), "零五");
	}
}
