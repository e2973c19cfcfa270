//! Hindi rendering rules.
//!
//! Uses the Indian scale system: after the hundreds come हज़ार (10^3),
//! लाख (10^5), करोड़ (10^7), अरब (10^9), खरब (10^11) and नील (10^13),
//! each carrying a 1-99 segment. Every value from 1 to 99 has its own
//! word, so the 21-99 range is a full irregular table rather than a
//! tens-plus-ones composition.

use super::LanguageText;
use super::digits;

const DIGIT_NAMES: [&str; 10] = [
	"शून्य", "एक", "दो", "तीन", "चार", "पांच", "छह", "सात", "आठ", "नौ",
];
const TEENS: [&str; 10] = [
	"दस", "ग्यारह", "बारह", "तेरह", "चौदह", "पंद्रह", "सोलह", "सत्रह", "अठारह", "उन्नीस",
];
const TENS_MULTIPLES: [&str; 8] = [
	"बीस", "तीस", "चालीस", "पचास", "साठ", "सत्तर", "अस्सी", "नब्बे",
];
/// Irregular words for 21-99, indexed by [tens - 2][ones - 1].
const TENS_PLUS: [[&str; 9]; 8] = [
	["इक्कीस", "बाईस", "तेईस", "चौबीस", "पच्चीस", "छब्बीस", "सत्ताईस", "अट्ठाईस", "उनतीस"],
	["इकतीस", "बत्तीस", "तैंतीस", "चौंतीस", "पैंतीस", "छत्तीस", "सैंतीस", "अड़तीस", "उनतालीस"],
	["इकतालीस", "बयालीस", "तैंतालीस", "चवालीस", "पैंतालीस", "छियालीस", "सैंतालीस", "अड़तालीस", "उनचास"],
	["इक्यावन", "बावन", "तिरपन", "चौवन", "पचपन", "छप्पन", "सत्तावन", "अट्ठावन", "उनसठ"],
	["इकसठ", "बासठ", "तिरसठ", "चौंसठ", "पैंसठ", "छियासठ", "सड़सठ", "अड़सठ", "उनहत्तर"],
	["इकहत्तर", "बहत्तर", "तिहत्तर", "चौहत्तर", "पचहत्तर", "छिहत्तर", "सतहत्तर", "अठहत्तर", "उन्यासी"],
	["इक्यासी", "बयासी", "तिरासी", "चौरासी", "पचासी", "छियासी", "सत्तासी", "अट्ठासी", "नवासी"],
	["इक्यानवे", "बानवे", "तिरानवे", "चौरानवे", "पचानवे", "छियानवे", "सत्तानवे", "अट्ठानवे", "निन्यानवे"],
];
/// Indian scale words, high to low, with the power of ten they name.
const SCALES: [(&str, u64); 6] = [
	("नील", 10_000_000_000_000),
	("खरब", 100_000_000_000),
	("अरब", 1_000_000_000),
	("करोड़", 10_000_000),
	("लाख", 100_000),
	("हज़ार", 1_000),
];

pub(crate) const TEXT: LanguageText = LanguageText {
	negative: "ऋण",
	decimal: "दशमलव",
	not_a_number: "दिया गया मान एक संख्या नहीं है",
	number_too_large: "बहुत बड़ी संख्या: अधिकतम 999 खरब समर्थित है",
};

fn two_digits(value: u64) -> &'static str {
	let tens = (value / 10) as usize;
	let ones = (value % 10) as usize;
	if value < 10 {
		DIGIT_NAMES[ones]
	} else if value < 20 {
		TEENS[ones]
	} else if ones == 0 {
		TENS_MULTIPLES[tens - 2]
	} else {
		TENS_PLUS[tens - 2][ones - 1]
	}
}

pub(crate) fn integer_to_words(digits: &str) -> String {
	if digits == "0" {
		return DIGIT_NAMES[0].to_owned();
	}

	// At most 15 digits, so the value fits u64
	let mut remaining: u64 = digits.bytes().fold(0, |n, b| n * 10 + u64::from(b - b'0'));

	let mut parts: Vec<String> = Vec::new();
	for (name, magnitude) in SCALES {
		let segment = remaining / magnitude;
		if segment > 0 {
			parts.push(format!("{} {}", two_digits(segment), name));
			remaining %= magnitude;
		}
	}

	let hundreds = remaining / 100;
	if hundreds > 0 {
		parts.push(format!("{} सौ", DIGIT_NAMES[hundreds as usize]));
		remaining %= 100;
	}
	if remaining > 0 {
		parts.push(two_digits(remaining).to_owned());
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
	fn irregular_tens_table() {
		assert_eq!(integer_to_words("21"), "इक्कीस");
		assert_eq!(integer_to_words("55"), "पचपन");
		assert_eq!(integer_to_words("99"), "निन्यानवे");
		assert_eq!(integer_to_words("40"), "चालीस");
	}

	#[test]
	fn indian_scales() {
		assert_eq!(integer_to_words("1000"), "एक हज़ार");
		assert_eq!(integer_to_words("100000"), "एक लाख");
		assert_eq!(integer_to_words("10000000"), "एक करोड़");
		assert_eq!(integer_to_words("1234"), "एक हज़ार दो सौ चौंतीस");
	}

	#[test]
	fn segments_compose_high_to_low() {
		// 12,34,56,789 in Indian notation
		assert_eq!(
			integer_to_words("123456789"),
			"बारह करोड़ चौंतीस लाख छप्पन हज़ार सात सौ नवासी"
		);
	}
}
