//! Input validation and word assembly.
//!
//! The converter is the thin layer above the language renderers: it cleans
//! the caller's input, classifies it as a number or not, splits sign,
//! integer and decimal parts, and assembles the rendered pieces into the
//! final string. All failures surface as localized strings, never as
//! errors; the return value itself is the signal.

use serde::{Deserialize, Serialize};

use crate::lang::Language;

/// Caller-tunable conversion settings.
///
/// # Responsibilities
/// - Select the target language by ISO 639-1 code
/// - Toggle the decimal portion of the rendering
/// - Toggle capitalization of the first character
///
/// # Invariants
/// - An unrecognized language code never fails: it resolves to the default
///   language
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
	/// ISO 639-1 code of the target language.
	pub language: String,
	/// Render the fractional part, joined by the language's decimal word.
	pub include_decimal_text: bool,
	/// Uppercase the first character of the result.
	pub capitalize: bool,
}

impl Default for ConversionOptions {
	fn default() -> Self {
		Self {
			language: Language::DEFAULT.code().to_owned(),
			include_decimal_text: true,
			capitalize: false,
		}
	}
}

/// A cleaned input split into its structural parts.
struct NumericInput<'a> {
	negative: bool,
	integer_digits: &'a str,
	decimal_digits: Option<&'a str>,
}

/// Strict numeric shape: optional sign, digits with at most one point,
/// at least one digit overall. Scientific notation is not a number here.
fn parse_numeric(cleaned: &str) -> Option<NumericInput<'_>> {
	let (negative, unsigned) = match cleaned.as_bytes().first() {
		Some(b'-') => (true, &cleaned[1..]),
		Some(b'+') => (false, &cleaned[1..]),
		_ => (false, cleaned),
	};

	let (integer_digits, decimal_digits) = match unsigned.split_once('.') {
		Some((integer, decimal)) => (integer, Some(decimal)),
		None => (unsigned, None),
	};

	let all_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
	if !all_digits(integer_digits) || !decimal_digits.map_or(true, all_digits) {
		return None;
	}
	if integer_digits.is_empty() && decimal_digits.map_or(true, str::is_empty) {
		return None;
	}

	Some(NumericInput { negative, integer_digits, decimal_digits })
}

/// Converts a numeric value to its word representation.
///
/// # Behavior
/// - Whitespace and comma separators are stripped before parsing, so
///   `"1,234"` converts like `"1234"`.
/// - Unparseable input returns the language's not-a-number message;
///   magnitudes of 10^15 and above return its too-large message. Neither
///   case carries the negative word or capitalization.
/// - With `include_decimal_text` off the fractional part is dropped.
///
/// # Notes
/// Accepts anything `Display`, so both numeric types and pre-formatted
/// strings convert through the same call.
pub fn to_words<T: std::fmt::Display>(value: T, options: &ConversionOptions) -> String {
	let language = Language::lookup(&options.language);

	let cleaned: String = value
		.to_string()
		.chars()
		.filter(|character| !character.is_whitespace() && *character != ',')
		.collect();

	let Some(input) = parse_numeric(&cleaned) else {
		tracing::debug!(input = %cleaned, language = %language, "input is not a number");
		return language.text().not_a_number.to_owned();
	};

	let stripped = input.integer_digits.trim_start_matches('0');
	if stripped.len() > crate::lang::MAX_INTEGER_DIGITS {
		tracing::debug!(digits = stripped.len(), language = %language, "magnitude exceeded");
		return language.text().number_too_large.to_owned();
	}

	let mut result = language.render_integer(input.integer_digits);

	if options.include_decimal_text {
		if let Some(decimal_digits) = input.decimal_digits {
			let decimal_words = language.render_decimal(decimal_digits);
			if !decimal_words.is_empty() {
				result.push(' ');
				result.push_str(language.text().decimal);
				result.push(' ');
				result.push_str(&decimal_words);
			}
		}
	}

	if input.negative {
		result = format!("{} {}", language.text().negative, result);
	}

	if options.capitalize {
		result = capitalize_first(result);
	}

	result
}

fn capitalize_first(text: String) -> String {
	let mut characters = text.chars();
	match characters.next() {
		Some(first) => first.to_uppercase().chain(characters).collect(),
		None => text,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_options_target_english() {
		let options = ConversionOptions::default();
		assert_eq!(options.language, "en");
		assert!(options.include_decimal_text);
		assert!(!options.capitalize);
	}

	#[test]
	fn separators_are_stripped() {
		let options = ConversionOptions::default();
		assert_eq!(to_words("1,234", &options), to_words(1234, &options));
		assert_eq!(to_words(" 42 ", &options), to_words(42, &options));
	}

	#[test]
	fn non_numbers_return_the_localized_message() {
		let options = ConversionOptions::default();
		assert_eq!(to_words("abc", &options), "The provided value is not a number");
		assert_eq!(to_words("1e5", &options), "The provided value is not a number");
		assert_eq!(to_words("1.2.3", &options), "The provided value is not a number");
		assert_eq!(to_words("", &options), "The provided value is not a number");
		assert_eq!(to_words("-", &options), "The provided value is not a number");
	}

	#[test]
	fn negative_values_take_the_negative_word() {
		let options = ConversionOptions::default();
		assert_eq!(to_words(-1, &options), "negative one");
		assert_eq!(to_words("-0.5", &options), "negative zero point five");
	}

	#[test]
	fn plus_sign_is_accepted() {
		let options = ConversionOptions::default();
		assert_eq!(to_words("+7", &options), "seven");
	}

	#[test]
	fn decimal_text_can_be_dropped() {
		let options = ConversionOptions {
			include_decimal_text: false,
			..ConversionOptions::default()
		};
		assert_eq!(to_words(123.45, &options), "one hundred twenty-three");
	}

	#[test]
	fn capitalize_affects_only_the_first_character() {
		let options = ConversionOptions {
			capitalize: true,
			..ConversionOptions::default()
		};
		assert_eq!(to_words(21, &options), "Twenty-one");
		assert_eq!(to_words(-3, &options), "Negative three");
	}

	#[test]
	fn bare_decimal_point_input() {
		let options = ConversionOptions::default();
		assert_eq!(to_words(".5", &options), "zero point five");
		assert_eq!(to_words("5.", &options), "five");
	}
}
