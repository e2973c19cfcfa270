//! Swedish rendering rules.
//!
//! Hundreds, tens and ones compound without spaces ("etthundratjugotre").
//! The thousands scale word stands bare for exactly one ("tusen"); million
//! and above take "en" and pluralize ("en miljon", "två miljoner").

use super::LanguageText;
use super::digits;

const DIGIT_NAMES: [&str; 10] = [
	"noll", "ett", "två", "tre", "fyra", "fem", "sex", "sju", "åtta", "nio",
];
const TEENS: [&str; 10] = [
	"tio", "elva", "tolv", "tretton", "fjorton", "femton", "sexton", "sjutton", "arton",
	"nitton",
];
const TENS_MULTIPLES: [&str; 8] = [
	"tjugo", "trettio", "fyrtio", "femtio", "sextio", "sjuttio", "åttio", "nittio",
];
const SCALE_NAMES: [&str; 7] = [
	"", "tusen", "miljon", "miljard", "biljon", "biljard", "triljon",
];
const SCALE_NAMES_PLURAL: [&str; 7] = [
	"", "tusen", "miljoner", "miljarder", "biljoner", "biljarder", "triljoner",
];

pub(crate) const TEXT: LanguageText = LanguageText {
	negative: "minus",
	decimal: "komma",
	not_a_number: "Det angivna värdet är inte ett nummer",
	number_too_large: "För stort tal: högst 999 triljoner stöds",
};

fn two_digits(value: u16) -> String {
	let tens = usize::from(value / 10);
	let ones = usize::from(value % 10);

	if value < 10 {
		DIGIT_NAMES[ones].to_owned()
	} else if value < 20 {
		TEENS[ones].to_owned()
	} else if ones == 0 {
		TENS_MULTIPLES[tens - 2].to_owned()
	} else {
		format!("{}{}", TENS_MULTIPLES[tens - 2], DIGIT_NAMES[ones])
	}
}

fn three_digits(value: u16) -> String {
	let hundreds = usize::from(value / 100);
	let remainder = value % 100;

	let mut result = String::new();
	if hundreds > 0 {
		result.push_str(DIGIT_NAMES[hundreds]);
		result.push_str("hundra");
	}
	if remainder > 0 {
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
		let part = if level == 1 {
			if value == 1 {
				SCALE_NAMES[1].to_owned()
			} else {
				format!("{} tusen", three_digits(value))
			}
		} else if level >= 2 {
			if value == 1 {
				// "en miljon", not "ett miljon"
				format!("en {}", SCALE_NAMES[level])
			} else {
				format!("{} {}", three_digits(value), SCALE_NAMES_PLURAL[level])
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
	fn compact_compounds() {
		assert_eq!(integer_to_words("23"), "tjugotre");
		assert_eq!(integer_to_words("123"), "etthundratjugotre");
		assert_eq!(integer_to_words("111"), "etthundraelva");
	}

	#[test]
	fn bare_tusen_but_en_miljon() {
		assert_eq!(integer_to_words("1000"), "tusen");
		assert_eq!(integer_to_words("2000"), "två tusen");
		assert_eq!(integer_to_words("1000000"), "en miljon");
		assert_eq!(integer_to_words("2000000"), "två miljoner");
	}
}
