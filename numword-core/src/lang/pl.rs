//! Polish rendering rules.
//!
//! Hundreds have one irregular word per multiplier ("dwieście",
//! "pięćset"). Scale words agree with their group value in three forms:
//! singular for values ending in 1 (except 11), a plural for 2-4 (except
//! 12-14), and the genitive plural otherwise ("dwa tysiące", "pięć
//! tysięcy"). The form is chosen independently per scale group.

use super::LanguageText;
use super::digits;

const DIGIT_NAMES: [&str; 10] = [
	"zero", "jeden", "dwa", "trzy", "cztery", "pięć", "sześć", "siedem", "osiem", "dziewięć",
];
const TEENS: [&str; 10] = [
	"dziesięć", "jedenaście", "dwanaście", "trzynaście", "czternaście", "piętnaście",
	"szesnaście", "siedemnaście", "osiemnaście", "dziewiętnaście",
];
const TENS_MULTIPLES: [&str; 8] = [
	"dwadzieścia", "trzydzieści", "czterdzieści", "pięćdziesiąt", "sześćdziesiąt",
	"siedemdziesiąt", "osiemdziesiąt", "dziewięćdziesiąt",
];
const HUNDREDS: [&str; 9] = [
	"sto", "dwieście", "trzysta", "czterysta", "pięćset", "sześćset", "siedemset", "osiemset",
	"dziewięćset",
];
const SCALE_NAMES: [&str; 7] = [
	"", "tysiąc", "milion", "miliard", "bilion", "biliard", "trylion",
];
const SCALE_NAMES_PLURAL: [&str; 7] = [
	"", "tysiące", "miliony", "miliardy", "biliony", "biliardy", "tryliony",
];
const SCALE_NAMES_GENITIVE: [&str; 7] = [
	"", "tysięcy", "milionów", "miliardów", "bilionów", "biliardów", "trylionów",
];

pub(crate) const TEXT: LanguageText = LanguageText {
	negative: "minus",
	decimal: "przecinek",
	not_a_number: "Podana wartość nie jest liczbą",
	number_too_large: "Zbyt duża liczba: maksymalnie obsługiwane jest 999 trylionów",
};

/// Selects the scale form for a group value.
///
/// Driven by the last two digits of the group alone: ends in 1 (not 11)
/// takes the singular, 2-4 (not 12-14) the plural, everything else the
/// genitive plural.
fn scale_word(value: u16, level: usize) -> &'static str {
	let last_two = value % 100;
	if (11..=19).contains(&last_two) {
		return SCALE_NAMES_GENITIVE[level];
	}
	match value % 10 {
		1 => SCALE_NAMES[level],
		2..=4 => SCALE_NAMES_PLURAL[level],
		_ => SCALE_NAMES_GENITIVE[level],
	}
}

fn three_digits(value: u16) -> String {
	let hundreds = usize::from(value / 100);
	let remainder = value % 100;
	let tens = usize::from(remainder / 10);
	let ones = usize::from(remainder % 10);

	let mut parts: Vec<&str> = Vec::new();
	if hundreds > 0 {
		parts.push(HUNDREDS[hundreds - 1]);
	}
	if (10..20).contains(&remainder) {
		parts.push(TEENS[ones]);
	} else {
		if tens >= 2 {
			parts.push(TENS_MULTIPLES[tens - 2]);
		}
		if ones > 0 {
			parts.push(DIGIT_NAMES[ones]);
		}
	}

	parts.join(" ")
}

pub(crate) fn integer_to_words(digits: &str) -> String {
	if digits == "0" {
		return DIGIT_NAMES[0].to_owned();
	}

	let groups = digits::split_groups(digits, 3);
	let lowest_nonzero = groups.iter().position(|&value| value != 0).unwrap_or(0);

	let mut parts = Vec::new();
	for (level, &value) in groups.iter().enumerate().rev() {
		if value == 0 {
			continue;
		}
		let part = if level > 0 {
			// "tysiąc", not "jeden tysiąc", when it opens the number
			if value == 1 && level == lowest_nonzero {
				scale_word(value, level).to_owned()
			} else {
				format!("{} {}", three_digits(value), scale_word(value, level))
			}
		} else {
			three_digits(value)
		};
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
	fn irregular_hundreds() {
		assert_eq!(integer_to_words("100"), "sto");
		assert_eq!(integer_to_words("200"), "dwieście");
		assert_eq!(integer_to_words("500"), "pięćset");
	}

	#[test]
	fn three_scale_forms() {
		assert_eq!(integer_to_words("1000"), "tysiąc");
		assert_eq!(integer_to_words("2000"), "dwa tysiące");
		assert_eq!(integer_to_words("5000"), "pięć tysięcy");
		assert_eq!(integer_to_words("11000"), "jedenaście tysięcy");
		assert_eq!(integer_to_words("21000"), "dwadzieścia jeden tysiąc");
		assert_eq!(integer_to_words("22000"), "dwadzieścia dwa tysiące");
	}

	#[test]
	fn agreement_is_per_group() {
		assert_eq!(
			integer_to_words("2005000"),
			"dwa miliony pięć tysięcy"
		);
	}
}
