//! Azerbaijani rendering rules.
//!
//! Fully regular: hundreds keep their numeral ("bir yüz"), scale groups keep
//! theirs ("bir min"), tens and ones join with a space.

use super::LanguageText;
use super::digits;

const DIGIT_NAMES: [&str; 10] = [
	"sıfır", "bir", "iki", "üç", "dörd", "beş", "altı", "yeddi", "səkkiz", "doqquz",
];
const TEENS: [&str; 10] = [
	"on", "on bir", "on iki", "on üç", "on dörd", "on beş", "on altı", "on yeddi", "on səkkiz",
	"on doqquz",
];
const TENS_MULTIPLES: [&str; 8] = [
	"iyirmi", "otuz", "qırx", "əlli", "altmış", "yetmiş", "səksən", "doxsan",
];
const SCALE_NAMES: [&str; 5] = ["", "min", "milyon", "milyard", "trilyon"];

pub(crate) const TEXT: LanguageText = LanguageText {
	negative: "mənfi",
	decimal: "tam",
	not_a_number: "Verilən dəyər bir rəqəm deyil",
	number_too_large: "Çox böyük nömrə: maksimum 999 trilyon dəstəklənir",
};

fn two_digits(value: u16) -> String {
	let tens = usize::from(value / 10);
	let ones = usize::from(value % 10);
	if (10..20).contains(&value) {
		TEENS[ones].to_owned()
	} else if tens >= 2 {
		if ones == 0 {
			TENS_MULTIPLES[tens - 2].to_owned()
		} else {
			format!("{} {}", TENS_MULTIPLES[tens - 2], DIGIT_NAMES[ones])
		}
	} else {
		DIGIT_NAMES[ones].to_owned()
	}
}

fn three_digits(value: u16) -> String {
	let hundreds = usize::from(value / 100);
	let remainder = value % 100;

	let mut result = String::new();
	if hundreds > 0 {
		result.push_str(DIGIT_NAMES[hundreds]);
		result.push_str(" yüz");
	}
	if remainder > 0 {
		if !result.is_empty() {
			result.push(' ');
		}
		result.push_str(&two_digits(remainder));
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
	fn hundreds_keep_the_numeral() {
		assert_eq!(integer_to_words("100"), "bir yüz");
		assert_eq!(integer_to_words("110"), "bir yüz on");
		assert_eq!(integer_to_words("999"), "doqquz yüz doxsan doqquz");
	}

	#[test]
	fn scale_groups_keep_the_numeral() {
		assert_eq!(integer_to_words("1000"), "bir min");
		assert_eq!(integer_to_words("1001"), "bir min bir");
		assert_eq!(integer_to_words("2345"), "iki min üç yüz qırx beş");
		assert_eq!(integer_to_words("10000"), "on min");
	}

	#[test]
	fn tens_join_with_a_space() {
		assert_eq!(integer_to_words("23"), "iyirmi üç");
		assert_eq!(integer_to_words("50"), "əlli");
	}
}
