//! German rendering rules.
//!
//! Numbers compound into single words up to the thousands
//! ("zweitausenddreihundertvierunddreißig"): ones precede tens joined by
//! "und", and the thousands group attaches directly to "tausend". The
//! digit 1 has a standalone form "eins" used at the end of a word, while
//! "ein" is used inside compounds and "eine" before Million and above.

use super::LanguageText;
use super::digits;

const DIGIT_NAMES: [&str; 10] = [
	"null", "ein", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun",
];
const DIGIT_NAMES_STANDALONE: [&str; 10] = [
	"null", "eins", "zwei", "drei", "vier", "fünf", "sechs", "sieben", "acht", "neun",
];
const TEENS: [&str; 10] = [
	"zehn", "elf", "zwölf", "dreizehn", "vierzehn", "fünfzehn", "sechzehn", "siebzehn",
	"achtzehn", "neunzehn",
];
const TENS_MULTIPLES: [&str; 8] = [
	"zwanzig", "dreißig", "vierzig", "fünfzig", "sechzig", "siebzig", "achtzig", "neunzig",
];
const SCALE_NAMES: [&str; 7] = [
	"", "tausend", "Million", "Milliarde", "Billion", "Billiarde", "Trillion",
];
const SCALE_NAMES_PLURAL: [&str; 7] = [
	"", "tausend", "Millionen", "Milliarden", "Billionen", "Billiarden", "Trillionen",
];

pub(crate) const TEXT: LanguageText = LanguageText {
	negative: "minus",
	decimal: "Komma",
	not_a_number: "Der angegebene Wert ist keine Zahl",
	number_too_large: "Zahl zu groß: maximal 999 Billionen werden unterstützt",
};

/// Renders 1-99. `standalone` selects "eins" over "ein" for a bare 1.
fn two_digits(value: u16, standalone: bool) -> String {
	let tens = usize::from(value / 10);
	let ones = usize::from(value % 10);
	if value == 1 && standalone {
		DIGIT_NAMES_STANDALONE[1].to_owned()
	} else if value < 10 {
		DIGIT_NAMES[ones].to_owned()
	} else if value < 20 {
		TEENS[ones].to_owned()
	} else if ones == 0 {
		TENS_MULTIPLES[tens - 2].to_owned()
	} else {
		// 21 is "einundzwanzig": ones, then "und", then tens
		format!("{}und{}", DIGIT_NAMES[ones], TENS_MULTIPLES[tens - 2])
	}
}

fn three_digits(value: u16, standalone: bool) -> String {
	let hundreds = usize::from(value / 100);
	let remainder = value % 100;

	let mut result = String::new();
	if hundreds > 0 {
		result.push_str(DIGIT_NAMES[hundreds]);
		result.push_str("hundert");
	}
	if remainder > 0 {
		result.push_str(&two_digits(remainder, standalone));
	}

	result
}

pub(crate) fn integer_to_words(digits: &str) -> String {
	if digits == "0" {
		return DIGIT_NAMES_STANDALONE[0].to_owned();
	}

	let groups = digits::split_groups(digits, 3);
	let mut result = String::new();
	for (level, &value) in groups.iter().enumerate().rev() {
		if value == 0 {
			continue;
		}
		if level >= 2 {
			if value == 1 {
				result.push_str("eine ");
				result.push_str(SCALE_NAMES[level]);
			} else {
				result.push_str(&three_digits(value, false));
				result.push(' ');
				result.push_str(SCALE_NAMES_PLURAL[level]);
			}
			result.push(' ');
		} else if level == 1 {
			// Compounds directly: "eintausend", "zweitausendvierzig"
			result.push_str(&three_digits(value, false));
			result.push_str("tausend");
		} else {
			result.push_str(&three_digits(value, true));
		}
	}

	result.trim_end().to_owned()
}

pub(crate) fn decimal_to_words(digits: &str) -> String {
	// Standalone forms after the decimal point ("eins", not "ein")
	digits::spell_digits(digits, &DIGIT_NAMES_STANDALONE, " ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn standalone_one_is_eins() {
		assert_eq!(integer_to_words("1"), "eins");
		assert_eq!(integer_to_words("101"), "einhunderteins");
		assert_eq!(integer_to_words("21"), "einundzwanzig");
	}

	#[test]
	fn thousands_compound_into_one_word() {
		assert_eq!(integer_to_words("1000"), "eintausend");
		assert_eq!(integer_to_words("2040"), "zweitausendvierzig");
		assert_eq!(
			integer_to_words("234567"),
			"zweihundertvierunddreißigtausendfünfhundertsiebenundsechzig"
		);
	}

	#[test]
	fn millions_are_separate_words() {
		assert_eq!(integer_to_words("1000000"), "eine Million");
		assert_eq!(integer_to_words("2000001"), "zwei Millionen eins");
		assert_eq!(integer_to_words("1000001"), "eine Million eins");
	}

	#[test]
	fn decimal_uses_standalone_forms() {
		assert_eq!(decimal_to_words("15"), "eins fünf");
	}
}
