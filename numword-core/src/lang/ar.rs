//! Arabic rendering rules.
//!
//! Ones precede tens joined by "و" ("خمسة وعشرون"), hundreds have one word
//! per multiplier. A scale word has four variants chosen by its group
//! value: bare singular for exactly 1 ("ألف"), dual for exactly 2
//! ("ألفان"), plural after 3-10 ("ثلاثة آلاف"), singular again after 11+
//! ("أحد عشر ألف"). Nonzero groups join with "و".

use super::LanguageText;
use super::digits;

const DIGIT_NAMES: [&str; 10] = [
	"صفر", "واحد", "اثنان", "ثلاثة", "أربعة", "خمسة", "ستة", "سبعة", "ثمانية", "تسعة",
];
const TEENS: [&str; 10] = [
	"عشرة", "أحد عشر", "اثنا عشر", "ثلاثة عشر", "أربعة عشر", "خمسة عشر", "ستة عشر",
	"سبعة عشر", "ثمانية عشر", "تسعة عشر",
];
const TENS_MULTIPLES: [&str; 8] = [
	"عشرون", "ثلاثون", "أربعون", "خمسون", "ستون", "سبعون", "ثمانون", "تسعون",
];
const HUNDREDS: [&str; 9] = [
	"مائة", "مائتان", "ثلاثمائة", "أربعمائة", "خمسمائة", "ستمائة", "سبعمائة", "ثمانمائة",
	"تسعمائة",
];
const SCALE_NAMES: [&str; 5] = ["", "ألف", "مليون", "مليار", "تريليون"];
const SCALE_NAMES_DUAL: [&str; 5] = ["", "ألفان", "مليونان", "ملياران", "تريليونان"];
const SCALE_NAMES_PLURAL: [&str; 5] = ["", "آلاف", "ملايين", "مليارات", "تريليونات"];

pub(crate) const TEXT: LanguageText = LanguageText {
	negative: "سالب",
	decimal: "فاصلة",
	not_a_number: "القيمة المقدمة ليست رقما",
	number_too_large: "الرقم كبير جدا: الحد الأقصى المدعوم هو 999 تريليون",
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
		// Ones first: "خمسة وعشرون"
		format!("{} و{}", DIGIT_NAMES[ones], TENS_MULTIPLES[tens - 2])
	}
}

fn three_digits(value: u16) -> String {
	let hundreds = usize::from(value / 100);
	let remainder = value % 100;

	let mut result = String::new();
	if hundreds > 0 {
		result.push_str(HUNDREDS[hundreds - 1]);
	}
	if remainder > 0 {
		if !result.is_empty() {
			result.push_str(" و");
		}
		result.push_str(&two_digits(remainder));
	}

	result
}

/// Scale word for a nonzero group: 1, 2, 3-10 and 11+ differ.
fn scale_part(value: u16, level: usize) -> String {
	if value == 1 {
		SCALE_NAMES[level].to_owned()
	} else if value == 2 {
		SCALE_NAMES_DUAL[level].to_owned()
	} else if (3..=10).contains(&value) {
		format!("{} {}", three_digits(value), SCALE_NAMES_PLURAL[level])
	} else {
		format!("{} {}", three_digits(value), SCALE_NAMES[level])
	}
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
		if level > 0 {
			parts.push(scale_part(value, level));
		} else {
			parts.push(three_digits(value));
		}
	}

	parts.join(" و")
}

pub(crate) fn decimal_to_words(digits: &str) -> String {
	digits::spell_digits(digits, &DIGIT_NAMES, " ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ones_precede_tens_with_waw() {
		assert_eq!(integer_to_words("25"), "خمسة وعشرون");
		assert_eq!(integer_to_words("20"), "عشرون");
	}

	#[test]
	fn four_scale_variants() {
		assert_eq!(integer_to_words("1000"), "ألف");
		assert_eq!(integer_to_words("2000"), "ألفان");
		assert_eq!(integer_to_words("3000"), "ثلاثة آلاف");
		assert_eq!(integer_to_words("11000"), "أحد عشر ألف");
	}

	#[test]
	fn groups_join_with_waw() {
		assert_eq!(integer_to_words("1005"), "ألف وخمسة");
		assert_eq!(integer_to_words("1000005"), "مليون وخمسة");
	}

	#[test]
	fn hundreds_table() {
		assert_eq!(integer_to_words("100"), "مائة");
		assert_eq!(integer_to_words("200"), "مائتان");
		assert_eq!(integer_to_words("105"), "مائة وخمسة");
	}
}
