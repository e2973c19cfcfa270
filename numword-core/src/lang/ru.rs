//! Russian rendering rules.
//!
//! Hundreds have one irregular word per multiplier ("двести", "пятьсот").
//! Scale words agree with their group value in three forms (singular /
//! paucal / genitive plural), recomputed per group from its last two
//! digits. The thousand scale is feminine, so ones inside a thousands
//! group use the feminine digit forms ("одна тысяча", "две тысячи").

use super::LanguageText;
use super::digits;

const DIGIT_NAMES: [&str; 10] = [
	"ноль", "один", "два", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
];
const DIGIT_NAMES_FEMININE: [&str; 10] = [
	"ноль", "одна", "две", "три", "четыре", "пять", "шесть", "семь", "восемь", "девять",
];
const TEENS: [&str; 10] = [
	"десять", "одиннадцать", "двенадцать", "тринадцать", "четырнадцать", "пятнадцать",
	"шестнадцать", "семнадцать", "восемнадцать", "девятнадцать",
];
const TENS_MULTIPLES: [&str; 8] = [
	"двадцать", "тридцать", "сорок", "пятьдесят", "шестьдесят", "семьдесят", "восемьдесят",
	"девяносто",
];
const HUNDREDS: [&str; 9] = [
	"сто", "двести", "триста", "четыреста", "пятьсот", "шестьсот", "семьсот", "восемьсот",
	"девятьсот",
];

/// Scale forms per level: [singular, paucal, genitive plural].
const SCALE_FORMS: [[&str; 3]; 4] = [
	["тысяча", "тысячи", "тысяч"],
	["миллион", "миллиона", "миллионов"],
	["миллиард", "миллиарда", "миллиардов"],
	["триллион", "триллиона", "триллионов"],
];

pub(crate) const TEXT: LanguageText = LanguageText {
	negative: "минус",
	decimal: "целых",
	not_a_number: "Предоставленное значение не является числом",
	number_too_large: "Слишком большое число: поддерживается максимум 999 триллионов",
};

/// Form index for a group value: 0 singular, 1 paucal, 2 genitive plural.
fn form_index(value: u16) -> usize {
	let last_two = value % 100;
	if (11..=19).contains(&last_two) {
		return 2;
	}
	match value % 10 {
		1 => 0,
		2..=4 => 1,
		_ => 2,
	}
}

fn three_digits(value: u16, feminine: bool) -> String {
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
			if feminine {
				parts.push(DIGIT_NAMES_FEMININE[ones]);
			} else {
				parts.push(DIGIT_NAMES[ones]);
			}
		}
	}

	parts.join(" ")
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
		let part = if level > 0 {
			// Thousands are feminine
			let words = three_digits(value, level == 1);
			format!("{} {}", words, SCALE_FORMS[level - 1][form_index(value)])
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
	fn irregular_hundreds() {
		assert_eq!(integer_to_words("100"), "сто");
		assert_eq!(integer_to_words("200"), "двести");
		assert_eq!(integer_to_words("900"), "девятьсот");
	}

	#[test]
	fn feminine_thousands() {
		assert_eq!(integer_to_words("1000"), "одна тысяча");
		assert_eq!(integer_to_words("2000"), "две тысячи");
		assert_eq!(integer_to_words("21000"), "двадцать одна тысяча");
	}

	#[test]
	fn three_scale_forms_are_distinct() {
		let one = integer_to_words("1000");
		let two = integer_to_words("2000");
		let five = integer_to_words("5000");
		assert!(one.ends_with("тысяча"));
		assert!(two.ends_with("тысячи"));
		assert!(five.ends_with("тысяч"));
	}

	#[test]
	fn teens_take_genitive_plural() {
		assert_eq!(integer_to_words("11000"), "одиннадцать тысяч");
		assert_eq!(integer_to_words("12000000"), "двенадцать миллионов");
	}

	#[test]
	fn masculine_millions() {
		assert_eq!(integer_to_words("1000000"), "один миллион");
		assert_eq!(integer_to_words("2000000"), "два миллиона");
	}
}
