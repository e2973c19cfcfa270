//! Dutch rendering rules.
//!
//! Ones precede tens joined by "en" ("drieentwintig"), hundreds and
//! thousands compound without spaces, and the numeral is dropped before
//! "honderd" and "duizend" when the multiplier is exactly one.

use super::LanguageText;
use super::digits;

const DIGIT_NAMES: [&str; 10] = [
	"nul", "een", "twee", "drie", "vier", "vijf", "zes", "zeven", "acht", "negen",
];
const TEENS: [&str; 10] = [
	"tien", "elf", "twaalf", "dertien", "veertien", "vijftien", "zestien", "zeventien",
	"achttien", "negentien",
];
const TENS_MULTIPLES: [&str; 8] = [
	"twintig", "dertig", "veertig", "vijftig", "zestig", "zeventig", "tachtig", "negentig",
];
const SCALE_NAMES: [&str; 5] = ["", "duizend", "miljoen", "miljard", "biljoen"];

pub(crate) const TEXT: LanguageText = LanguageText {
	negative: "negatief",
	decimal: "komma",
	not_a_number: "De opgegeven waarde is geen getal",
	number_too_large: "Getal te groot: maximaal 999 biljoen wordt ondersteund",
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
		format!("{}en{}", DIGIT_NAMES[ones], TENS_MULTIPLES[tens - 2])
	}
}

fn three_digits(value: u16) -> String {
	let hundreds = usize::from(value / 100);
	let remainder = value % 100;

	let mut result = String::new();
	if hundreds > 0 {
		if hundreds > 1 {
			result.push_str(DIGIT_NAMES[hundreds]);
		}
		result.push_str("honderd");
	}
	if remainder > 0 {
		// "honderdeneen" but "honderdtien"
		if !result.is_empty() && remainder < 10 {
			result.push_str("en");
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
			if value == 1 {
				SCALE_NAMES[1].to_owned()
			} else {
				format!("{}duizend", three_digits(value))
			}
		} else if level >= 2 {
			format!("{} {}", three_digits(value), SCALE_NAMES[level])
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
	fn ones_precede_tens() {
		assert_eq!(integer_to_words("23"), "drieentwintig");
		assert_eq!(integer_to_words("80"), "tachtig");
	}

	#[test]
	fn hundreds_compound() {
		assert_eq!(integer_to_words("100"), "honderd");
		assert_eq!(integer_to_words("101"), "honderdeneen");
		assert_eq!(integer_to_words("110"), "honderdtien");
		assert_eq!(integer_to_words("223"), "tweehonderddrieentwintig");
	}

	#[test]
	fn bare_duizend() {
		assert_eq!(integer_to_words("1000"), "duizend");
		assert_eq!(integer_to_words("1001"), "duizend een");
		assert_eq!(integer_to_words("2300"), "tweeduizend driehonderd");
	}
}
