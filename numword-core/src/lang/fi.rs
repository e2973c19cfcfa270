//! Finnish rendering rules.
//!
//! Tens compound with the "kymmentä" suffix ("kaksikymmentä"), hundreds
//! with "sata"/"sataa". Scale words switch between the nominative after an
//! implicit or explicit one ("tuhat", "yksi miljoona") and the partitive
//! after anything else ("kaksi tuhatta", "viisi miljoonaa").

use super::LanguageText;
use super::digits;

const DIGIT_NAMES: [&str; 10] = [
	"nolla", "yksi", "kaksi", "kolme", "neljä", "viisi", "kuusi", "seitsemän", "kahdeksan",
	"yhdeksän",
];
const TEENS: [&str; 10] = [
	"kymmenen", "yksitoista", "kaksitoista", "kolmetoista", "neljätoista", "viisitoista",
	"kuusitoista", "seitsemäntoista", "kahdeksantoista", "yhdeksäntoista",
];
const SCALE_NAMES: [&str; 6] = ["", "tuhat", "miljoona", "miljardi", "biljoona", "triljoona"];
const SCALE_NAMES_PARTITIVE: [&str; 6] = [
	"", "tuhatta", "miljoonaa", "miljardia", "biljoonaa", "triljoonaa",
];

pub(crate) const TEXT: LanguageText = LanguageText {
	negative: "miinus",
	decimal: "pilkku",
	not_a_number: "Annettu arvo ei ole numero",
	number_too_large: "Liian suuri luku: enintään 999 triljoonaa tuetaan",
};

fn two_digits(value: u16) -> String {
	let tens = usize::from(value / 10);
	let ones = usize::from(value % 10);

	if value < 10 {
		DIGIT_NAMES[ones].to_owned()
	} else if value < 20 {
		TEENS[ones].to_owned()
	} else if ones == 0 {
		format!("{}kymmentä", DIGIT_NAMES[tens])
	} else {
		format!("{}kymmentä {}", DIGIT_NAMES[tens], DIGIT_NAMES[ones])
	}
}

fn three_digits(value: u16) -> String {
	let hundreds = usize::from(value / 100);
	let remainder = value % 100;

	let mut result = String::new();
	if hundreds > 0 {
		if hundreds == 1 {
			result.push_str("sata");
		} else {
			result.push_str(DIGIT_NAMES[hundreds]);
			result.push_str("sataa");
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
			if value == 1 {
				SCALE_NAMES[1].to_owned()
			} else {
				format!("{} {}", three_digits(value), SCALE_NAMES_PARTITIVE[1])
			}
		} else if level >= 2 {
			if value == 1 {
				format!("yksi {}", SCALE_NAMES[level])
			} else {
				format!("{} {}", three_digits(value), SCALE_NAMES_PARTITIVE[level])
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
