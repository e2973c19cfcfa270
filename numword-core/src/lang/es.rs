//! Spanish rendering rules.
//!
//! Exactly 100 is "cien" but "ciento" when followed by more; 500, 700 and
//! 900 have irregular hundred words; 21-29 fuse into "veinti-"; other tens
//! join ones with "y". The numeral before a scale word shortens to "un"
//! ("un millón") and is dropped entirely before "mil".

use super::LanguageText;
use super::digits;

const DIGIT_NAMES: [&str; 10] = [
	"cero", "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve",
];
const TEENS: [&str; 10] = [
	"diez", "once", "doce", "trece", "catorce", "quince", "dieciséis", "diecisiete",
	"dieciocho", "diecinueve",
];
const TENS_MULTIPLES: [&str; 8] = [
	"veinte", "treinta", "cuarenta", "cincuenta", "sesenta", "setenta", "ochenta", "noventa",
];
const SCALE_NAMES: [&str; 5] = ["", "mil", "millón", "billón", "trillón"];
const SCALE_NAMES_PLURAL: [&str; 5] = ["", "mil", "millones", "billones", "trillones"];

pub(crate) const TEXT: LanguageText = LanguageText {
	negative: "negativo",
	decimal: "coma",
	not_a_number: "El valor proporcionado no es un número",
	number_too_large: "Número demasiado grande: se admite un máximo de 999 trillones",
};

/// Irregular hundred word for a hundreds digit in [1, 9].
fn hundred_word(hundreds: usize, exact: bool) -> &'static str {
	match hundreds {
		1 if exact => "cien",
		1 => "ciento",
		5 => "quinientos",
		7 => "setecientos",
		9 => "novecientos",
		2 => "doscientos",
		3 => "trescientos",
		4 => "cuatrocientos",
		6 => "seiscientos",
		_ => "ochocientos",
	}
}

/// Renders 1-99. `in_scale` shortens a trailing "uno" to "un".
fn two_digits(value: u16, in_scale: bool) -> String {
	let tens = usize::from(value / 10);
	let ones = usize::from(value % 10);

	if value == 1 && in_scale {
		"un".to_owned()
	} else if value < 10 {
		DIGIT_NAMES[ones].to_owned()
	} else if value < 20 {
		TEENS[ones].to_owned()
	} else if tens == 2 {
		if ones == 0 {
			"veinte".to_owned()
		} else {
			// 21-29 fuse: "veintiuno", "veintidós" spelled without accent here
			format!("veinti{}", DIGIT_NAMES[ones])
		}
	} else if ones == 0 {
		TENS_MULTIPLES[tens - 2].to_owned()
	} else {
		format!("{} y {}", TENS_MULTIPLES[tens - 2], DIGIT_NAMES[ones])
	}
}

fn three_digits(value: u16, in_scale: bool) -> String {
	let hundreds = usize::from(value / 100);
	let remainder = value % 100;

	let mut result = String::new();
	if hundreds > 0 {
		result.push_str(hundred_word(hundreds, remainder == 0));
	}
	if remainder > 0 {
		if !result.is_empty() {
			result.push(' ');
		}
		result.push_str(&two_digits(remainder, in_scale));
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
				format!("{} mil", three_digits(value, true))
			}
		} else if level >= 2 {
			let scale = if value == 1 { SCALE_NAMES[level] } else { SCALE_NAMES_PLURAL[level] };
			format!("{} {}", three_digits(value, true), scale)
		} else {
			three_digits(value, false)
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
	fn cien_versus_ciento() {
		assert_eq!(integer_to_words("100"), "cien");
		assert_eq!(integer_to_words("101"), "ciento uno");
		assert_eq!(integer_to_words("150"), "ciento cincuenta");
	}

	#[test]
	fn irregular_hundreds() {
		assert_eq!(integer_to_words("500"), "quinientos");
		assert_eq!(integer_to_words("700"), "setecientos");
		assert_eq!(integer_to_words("900"), "novecientos");
		assert_eq!(integer_to_words("200"), "doscientos");
	}

	#[test]
	fn veinti_fusion_and_y() {
		assert_eq!(integer_to_words("21"), "veintiuno");
		assert_eq!(integer_to_words("29"), "veintinueve");
		assert_eq!(integer_to_words("32"), "treinta y dos");
	}

	#[test]
	fn scale_numerals() {
		assert_eq!(integer_to_words("1000"), "mil");
		assert_eq!(integer_to_words("2000"), "dos mil");
		assert_eq!(integer_to_words("1000000"), "un millón");
		assert_eq!(integer_to_words("3000000"), "tres millones");
	}
}
