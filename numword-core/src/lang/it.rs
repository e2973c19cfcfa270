//! Italian rendering rules.
//!
//! Groups compound without spaces ("centoventitre") and the tens word
//! elides its final vowel before the vowel-initial ones words "uno" and
//! "otto" ("ventuno", "ventotto"). Thousands use bare "mille" for one and
//! the plural "mila" otherwise; million and above take "un" and a
//! singular/plural pair.

use super::LanguageText;
use super::digits;

const DIGIT_NAMES: [&str; 10] = [
	"zero", "uno", "due", "tre", "quattro", "cinque", "sei", "sette", "otto", "nove",
];
const TEENS: [&str; 10] = [
	"dieci", "undici", "dodici", "tredici", "quattordici", "quindici", "sedici",
	"diciassette", "diciotto", "diciannove",
];
const TENS_MULTIPLES: [&str; 8] = [
	"venti", "trenta", "quaranta", "cinquanta", "sessanta", "settanta", "ottanta", "novanta",
];
const SCALE_NAMES_SINGULAR: [&str; 5] = ["", "mille", "milione", "miliardo", "bilione"];
const SCALE_NAMES_PLURAL: [&str; 5] = ["", "mila", "milioni", "miliardi", "bilioni"];

pub(crate) const TEXT: LanguageText = LanguageText {
	negative: "negativo",
	decimal: "virgola",
	not_a_number: "Il valore fornito non è un numero",
	number_too_large: "Numero troppo grande: è supportato un massimo di 999 bilioni",
};

/// Renders 1-99 with vowel elision before "uno" and "otto".
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
		let mut tens_word = TENS_MULTIPLES[tens - 2];
		if ones == 1 || ones == 8 {
			// Drop the final vowel before a vowel-initial ones word
			tens_word = &tens_word[..tens_word.len() - 1];
		}
		format!("{}{}", tens_word, DIGIT_NAMES[ones])
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
		result.push_str("cento");
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
				"mille".to_owned()
			} else {
				format!("{}{}", three_digits(value), SCALE_NAMES_PLURAL[1])
			}
		} else if level >= 2 {
			if value == 1 {
				format!("un {}", SCALE_NAMES_SINGULAR[level])
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
	fn elision_before_uno_and_otto() {
		assert_eq!(integer_to_words("21"), "ventuno");
		assert_eq!(integer_to_words("28"), "ventotto");
		assert_eq!(integer_to_words("23"), "ventitre");
		assert_eq!(integer_to_words("88"), "ottantotto");
	}

	#[test]
	fn hundreds_compound() {
		assert_eq!(integer_to_words("100"), "cento");
		assert_eq!(integer_to_words("123"), "centoventitre");
		assert_eq!(integer_to_words("800"), "ottocento");
	}

	#[test]
	fn mille_and_mila() {
		assert_eq!(integer_to_words("1000"), "mille");
		assert_eq!(integer_to_words("2000"), "duemila");
		assert_eq!(integer_to_words("1000000"), "un milione");
		assert_eq!(integer_to_words("2000000"), "due milioni");
	}
}
