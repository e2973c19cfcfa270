//! French rendering rules.
//!
//! The 70-99 range is built on the 60 and 80 bases ("soixante-dix",
//! "quatre-vingt-onze"), 21-61 take "-et-un", exactly 80 takes a plural
//! "s" ("quatre-vingts") as do exact multiples of hundred ("deux cents").
//! "mille" never takes a numeral "un" nor a plural, while million and
//! above require "un" and pluralize.

use super::LanguageText;
use super::digits;

const DIGIT_NAMES: [&str; 10] = [
	"zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf",
];
const TEENS: [&str; 10] = [
	"dix", "onze", "douze", "treize", "quatorze", "quinze", "seize", "dix-sept", "dix-huit",
	"dix-neuf",
];
const TENS_MULTIPLES: [&str; 8] = [
	"vingt", "trente", "quarante", "cinquante", "soixante", "soixante-dix", "quatre-vingt",
	"quatre-vingt-dix",
];
const SCALE_NAMES: [&str; 7] = [
	"", "mille", "million", "milliard", "billion", "billiard", "trillion",
];
const SCALE_NAMES_PLURAL: [&str; 7] = [
	"", "mille", "millions", "milliards", "billions", "billiards", "trillions",
];

pub(crate) const TEXT: LanguageText = LanguageText {
	negative: "moins",
	decimal: "virgule",
	not_a_number: "La valeur fournie n'est pas un nombre",
	number_too_large: "Nombre trop grand: maximum de 999 billions pris en charge",
};

/// Renders 1-99, including the irregular 70-99 system.
fn two_digits(value: u16) -> String {
	let tens = usize::from(value / 10);
	let ones = usize::from(value % 10);

	if value < 10 {
		DIGIT_NAMES[ones].to_owned()
	} else if value < 20 {
		TEENS[ones].to_owned()
	} else if matches!(value, 21 | 31 | 41 | 51 | 61) {
		format!("{}-et-un", TENS_MULTIPLES[tens - 2])
	} else if (70..80).contains(&value) {
		// 70-79 count up from 60: soixante-dix, soixante-et-onze, ...
		if value == 71 {
			"soixante-et-onze".to_owned()
		} else {
			format!("soixante-{}", TEENS[usize::from(value - 70)])
		}
	} else if (90..100).contains(&value) {
		// 90-99 count up from 80: quatre-vingt-dix, quatre-vingt-onze, ...
		format!("quatre-vingt-{}", TEENS[usize::from(value - 90)])
	} else if ones == 0 {
		if value == 80 {
			"quatre-vingts".to_owned()
		} else {
			TENS_MULTIPLES[tens - 2].to_owned()
		}
	} else {
		format!("{}-{}", TENS_MULTIPLES[tens - 2], DIGIT_NAMES[ones])
	}
}

fn three_digits(value: u16) -> String {
	let hundreds = usize::from(value / 100);
	let remainder = value % 100;

	let mut result = String::new();
	if hundreds > 0 {
		if hundreds == 1 {
			result.push_str("cent");
		} else {
			result.push_str(DIGIT_NAMES[hundreds]);
			result.push_str(" cent");
			// Exact multiples of hundred pluralize: "deux cents"
			if remainder == 0 {
				result.push('s');
			}
		}
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
		let part = if level == 1 {
			// Never "un mille", never "milles"
			if value == 1 {
				SCALE_NAMES[1].to_owned()
			} else {
				format!("{} mille", three_digits(value))
			}
		} else if level >= 2 {
			let scale = if value == 1 { SCALE_NAMES[level] } else { SCALE_NAMES_PLURAL[level] };
			format!("{} {}", three_digits(value), scale)
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
	fn et_un_forms() {
		assert_eq!(integer_to_words("21"), "vingt-et-un");
		assert_eq!(integer_to_words("61"), "soixante-et-un");
		assert_eq!(integer_to_words("71"), "soixante-et-onze");
	}

	#[test]
	fn seventies_and_nineties() {
		assert_eq!(integer_to_words("70"), "soixante-dix");
		assert_eq!(integer_to_words("75"), "soixante-quinze");
		assert_eq!(integer_to_words("90"), "quatre-vingt-dix");
		assert_eq!(integer_to_words("99"), "quatre-vingt-dix-neuf");
	}

	#[test]
	fn eighty_takes_plural_s() {
		assert_eq!(integer_to_words("80"), "quatre-vingts");
		assert_eq!(integer_to_words("81"), "quatre-vingt-un");
	}

	#[test]
	fn hundreds() {
		assert_eq!(integer_to_words("100"), "cent");
		assert_eq!(integer_to_words("200"), "deux cents");
		assert_eq!(integer_to_words("201"), "deux cent un");
	}

	#[test]
	fn mille_has_no_numeral_but_million_does() {
		assert_eq!(integer_to_words("1000"), "mille");
		assert_eq!(integer_to_words("2000"), "deux mille");
		assert_eq!(integer_to_words("1000000"), "un million");
		assert_eq!(integer_to_words("2000000"), "deux millions");
	}
}
