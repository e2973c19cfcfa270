//! Turkish rendering rules.
//!
//! The numeral "bir" is dropped before "yüz" (100 is "yüz", never
//! "bir yüz") and before "bin" when the thousands group is exactly 1
//! (1000 is "bin"). Higher scales keep their numeral ("bir milyon").

use super::LanguageText;
use super::digits;

const DIGIT_NAMES: [&str; 10] = [
	"sıfır", "bir", "iki", "üç", "dört", "beş", "altı", "yedi", "sekiz", "dokuz",
];
const TEENS: [&str; 10] = [
	"on", "on bir", "on iki", "on üç", "on dört", "on beş", "on altı", "on yedi", "on sekiz",
	"on dokuz",
];
const TENS_MULTIPLES: [&str; 8] = [
	"yirmi", "otuz", "kırk", "elli", "altmış", "yetmiş", "seksen", "doksan",
];
const SCALE_NAMES: [&str; 5] = ["", "bin", "milyon", "milyar", "trilyon"];

pub(crate) const TEXT: LanguageText = LanguageText {
	negative: "eksi",
	decimal: "virgül",
	not_a_number: "Verilen değer bir sayı değil",
	number_too_large: "Çok büyük sayı: maksimum 999 trilyon destekleniyor",
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
		// "bir yüz" is just "yüz"
		if hundreds > 1 {
			result.push_str(DIGIT_NAMES[hundreds]);
			result.push(' ');
		}
		result.push_str("yüz");
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
		// "bir bin" is just "bin"
		if level == 1 && value == 1 {
			parts.push(SCALE_NAMES[1].to_owned());
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
	fn bare_hundred_and_thousand() {
		assert_eq!(integer_to_words("100"), "yüz");
		assert_eq!(integer_to_words("1000"), "bin");
		assert_eq!(integer_to_words("1001"), "bin bir");
	}

	#[test]
	fn numeral_kept_when_not_one() {
		assert_eq!(integer_to_words("200"), "iki yüz");
		assert_eq!(integer_to_words("2000"), "iki bin");
		assert_eq!(integer_to_words("123"), "yüz yirmi üç");
	}

	#[test]
	fn higher_scales_keep_bir() {
		assert_eq!(integer_to_words("1000000"), "bir milyon");
		assert_eq!(integer_to_words("1001000"), "bir milyon bin");
	}
}
