//! Portuguese rendering rules.
//!
//! Exactly one hundred is "cem"; with a remainder it becomes "cento e
//! vinte". The other hundreds are irregular words ("duzentos",
//! "quinhentos"). "e" joins tens with ones and hundreds with their
//! remainder, and reappears before a final group below one hundred
//! ("mil e um"). The thousands word stands bare for exactly one ("mil");
//! million and above take "um" and pluralize ("dois milhões").

use super::LanguageText;
use super::digits;

const DIGIT_NAMES: [&str; 10] = [
	"zero", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove",
];
const TEENS: [&str; 10] = [
	"dez", "onze", "doze", "treze", "catorze", "quinze", "dezesseis", "dezessete", "dezoito",
	"dezenove",
];
const TENS_MULTIPLES: [&str; 8] = [
	"vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta", "noventa",
];
const HUNDREDS: [&str; 9] = [
	"cento", "duzentos", "trezentos", "quatrocentos", "quinhentos", "seiscentos", "setecentos",
	"oitocentos", "novecentos",
];
const SCALE_NAMES: [&str; 5] = ["", "mil", "milhão", "bilhão", "trilhão"];
const SCALE_NAMES_PLURAL: [&str; 5] = ["", "mil", "milhões", "bilhões", "trilhões"];

pub(crate) const TEXT: LanguageText = LanguageText {
	negative: "menos",
	decimal: "vírgula",
	not_a_number: "O valor fornecido não é um número",
	number_too_large: "Número grande demais: o máximo suportado é 999 trilhões",
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
		format!("{} e {}", TENS_MULTIPLES[tens - 2], DIGIT_NAMES[ones])
	}
}

fn three_digits(value: u16) -> String {
	if value == 100 {
		return "cem".to_owned();
	}

	let hundreds = usize::from(value / 100);
	let remainder = value % 100;

	let mut result = String::new();
	if hundreds > 0 {
		result.push_str(HUNDREDS[hundreds - 1]);
	}
	if remainder > 0 {
		if !result.is_empty() {
			result.push_str(" e ");
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
	let mut result = String::new();
	for (level, &value) in groups.iter().enumerate().rev() {
		if value == 0 {
			continue;
		}
		let part = if level == 1 {
			if value == 1 {
				SCALE_NAMES[1].to_owned()
			} else {
				format!("{} mil", three_digits(value))
			}
		} else if level >= 2 {
			if value == 1 {
				format!("um {}", SCALE_NAMES[level])
			} else {
				format!("{} {}", three_digits(value), SCALE_NAMES_PLURAL[level])
			}
		} else {
			three_digits(value)
		};

		if !result.is_empty() {
			// "mil e um" but "mil duzentos e trinta"
			if level == 0 && (value < 100 || value % 100 == 0) {
				result.push_str(" e ");
			} else {
				result.push(' ');
			}
		}
		result.push_str(&part);
	}

	result
}

pub(crate) fn decimal_to_words(digits: &str) -> String {
	digits::spell_digits(digits, &DIGIT_NAMES, " ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cem_versus_cento() {
		assert_eq!(integer_to_words("100"), "cem");
		assert_eq!(integer_to_words("120"), "cento e vinte");
		assert_eq!(integer_to_words("500"), "quinhentos");
	}

	#[test]
	fn e_joins_tens_and_ones() {
		assert_eq!(integer_to_words("23"), "vinte e três");
		assert_eq!(integer_to_words("123"), "cento e vinte e três");
	}

	#[test]
	fn bare_mil_and_um_milhao() {
		assert_eq!(integer_to_words("1000"), "mil");
		assert_eq!(integer_to_words("2000"), "dois mil");
		assert_eq!(integer_to_words("1000000"), "um milhão");
		assert_eq!(integer_to_words("2000000"), "dois milhões");
	}

	#[test]
	fn e_before_small_final_group() {
		assert_eq!(integer_to_words("1001"), "mil e um");
		assert_eq!(integer_to_words("1100"), "mil e cem");
		assert_eq!(integer_to_words("1234"), "mil duzentos e trinta e quatro");
	}
}
