//! Language registry and rendering dispatch.
//!
//! Each supported language lives in its own module with its own immutable
//! word tables and rendering rules. The [`Language`] enum is the registry:
//! a closed set of variants, one per ISO 639-1 code, dispatched through a
//! single interface so the compiler verifies every language implements the
//! full rendering contract.

/// Arabic: irregular hundreds, dual scale forms, "و" conjunction.
mod ar;
/// Azerbaijani: regular hundreds ("bir yüz"), space-joined tens.
mod az;
/// German: ones-before-tens compounding, standalone "eins".
mod de;
/// English: hyphenated tens, invariant scale words.
mod en;
/// Spanish: "cien"/"ciento", "veinti-" fusion, irregular hundreds.
mod es;
/// Finnish: "kymmentä" compounds, partitive scale forms.
mod fi;
/// French: soixante-dix/quatre-vingt system, plural "cents".
mod fr;
/// Hindi: Indian scale system (lakh/crore), irregular 21-99 table.
mod hi;
/// Italian: vowel elision before uno/otto, "mila" plural.
mod it;
/// Japanese: 4-digit grouping by 万, no separators.
mod ja;
/// Dutch: ones-before-tens compounding onto "duizend".
mod nl;
/// Polish: irregular hundreds, 3-form scale agreement.
mod pl;
/// Portuguese: "cem"/"cento", "e" conjunction, irregular hundreds.
mod pt;
/// Russian: irregular hundreds, 3-form agreement, feminine thousands.
mod ru;
/// Swedish: compact compounds, "en miljon" vs "ett".
mod sv;
/// Turkish: bare "yüz" and "bin".
mod tr;

/// Internal digit-string helpers (group splitting, zero stripping).
///
/// Not exposed.
pub(crate) mod digits;

/// Largest supported integer width in digits.
///
/// The highest scale word in every language covers the 10^12 tier, so the
/// renderers accept up to 999 × 10^12. Anything with more digits is
/// rejected with a localized message rather than rendered partially.
pub const MAX_INTEGER_DIGITS: usize = 15;

/// Localized fixed phrases of one language.
///
/// Two short connective words and the two error strings the converter
/// returns instead of failing.
pub struct LanguageText {
	/// Word prefixed to negative values.
	pub negative: &'static str,
	/// Word inserted between the integer and decimal renderings.
	pub decimal: &'static str,
	/// Returned when the input does not parse as a number.
	pub not_a_number: &'static str,
	/// Returned when the magnitude is 10^15 or more.
	pub number_too_large: &'static str,
}

/// A supported language, dispatching to its rendering engine.
///
/// # Responsibilities
/// - Map ISO 639-1 codes to renderer implementations
/// - Render integer and decimal digit strings to words
/// - Expose the language's localized fixed phrases
///
/// # Invariants
/// - [`Language::lookup`] is total: unknown codes resolve to the default
///   language instead of failing
/// - All word tables are process-wide `'static` constants; rendering never
///   mutates shared state and is safe to call from any thread
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
	Arabic,
	Azerbaijani,
	German,
	English,
	Spanish,
	Finnish,
	French,
	Hindi,
	Italian,
	Japanese,
	Dutch,
	Polish,
	Portuguese,
	Russian,
	Swedish,
	Turkish,
}

/// Registered codes in registration order.
const SUPPORTED_CODES: [&str; 16] = [
	"ar", "az", "de", "en", "es", "fi", "fr", "hi", "it", "ja", "nl", "pl", "pt", "ru", "sv", "tr",
];

impl Language {
	/// The default language used when a code is unknown.
	pub const DEFAULT: Language = Language::English;

	/// Resolves a code to a language, case-insensitively.
	///
	/// Returns `None` for unregistered codes.
	pub fn from_code(code: &str) -> Option<Self> {
		let code = code.to_ascii_lowercase();
		match code.as_str() {
			"ar" => Some(Language::Arabic),
			"az" => Some(Language::Azerbaijani),
			"de" => Some(Language::German),
			"en" => Some(Language::English),
			"es" => Some(Language::Spanish),
			"fi" => Some(Language::Finnish),
			"fr" => Some(Language::French),
			"hi" => Some(Language::Hindi),
			"it" => Some(Language::Italian),
			"ja" => Some(Language::Japanese),
			"nl" => Some(Language::Dutch),
			"pl" => Some(Language::Polish),
			"pt" => Some(Language::Portuguese),
			"ru" => Some(Language::Russian),
			"sv" => Some(Language::Swedish),
			"tr" => Some(Language::Turkish),
			_ => None,
		}
	}

	/// Resolves a code to a language, falling back to the default.
	///
	/// This lookup never fails: an unknown code silently degrades to the
	/// default language (logged at debug level).
	pub fn lookup(code: &str) -> Self {
		match Self::from_code(code) {
			Some(language) => language,
			None => {
				tracing::debug!(code, "unknown language code, using default");
				Self::DEFAULT
			}
		}
	}

	/// Whether a code is registered, case-insensitively.
	pub fn is_supported(code: &str) -> bool {
		Self::from_code(code).is_some()
	}

	/// All registered codes, in registration order.
	pub fn supported_codes() -> &'static [&'static str] {
		&SUPPORTED_CODES
	}

	/// The ISO 639-1 code of this language.
	pub fn code(&self) -> &'static str {
		match self {
			Language::Arabic => "ar",
			Language::Azerbaijani => "az",
			Language::German => "de",
			Language::English => "en",
			Language::Spanish => "es",
			Language::Finnish => "fi",
			Language::French => "fr",
			Language::Hindi => "hi",
			Language::Italian => "it",
			Language::Japanese => "ja",
			Language::Dutch => "nl",
			Language::Polish => "pl",
			Language::Portuguese => "pt",
			Language::Russian => "ru",
			Language::Swedish => "sv",
			Language::Turkish => "tr",
		}
	}

	/// The language's localized fixed phrases.
	pub fn text(&self) -> &'static LanguageText {
		match self {
			Language::Arabic => &ar::TEXT,
			Language::Azerbaijani => &az::TEXT,
			Language::German => &de::TEXT,
			Language::English => &en::TEXT,
			Language::Spanish => &es::TEXT,
			Language::Finnish => &fi::TEXT,
			Language::French => &fr::TEXT,
			Language::Hindi => &hi::TEXT,
			Language::Italian => &it::TEXT,
			Language::Japanese => &ja::TEXT,
			Language::Dutch => &nl::TEXT,
			Language::Polish => &pl::TEXT,
			Language::Portuguese => &pt::TEXT,
			Language::Russian => &ru::TEXT,
			Language::Swedish => &sv::TEXT,
			Language::Turkish => &tr::TEXT,
		}
	}

	/// Renders an integer digit string as words.
	///
	/// # Behavior
	/// - Non-digit characters are ignored; leading zeros are stripped, so
	///   `"007"` renders the same as `"7"`.
	/// - An empty or all-zero input renders the language's zero word.
	/// - Inputs wider than [`MAX_INTEGER_DIGITS`] return the localized
	///   too-large message, never a partial rendering.
	pub fn render_integer(&self, integer_digits: &str) -> String {
		let digits = digits::keep_digits(integer_digits);
		let digits = digits::strip_leading_zeros(&digits);
		if digits.len() > MAX_INTEGER_DIGITS {
			return self.text().number_too_large.to_owned();
		}

		match self {
			Language::Arabic => ar::integer_to_words(digits),
			Language::Azerbaijani => az::integer_to_words(digits),
			Language::German => de::integer_to_words(digits),
			Language::English => en::integer_to_words(digits),
			Language::Spanish => es::integer_to_words(digits),
			Language::Finnish => fi::integer_to_words(digits),
			Language::French => fr::integer_to_words(digits),
			Language::Hindi => hi::integer_to_words(digits),
			Language::Italian => it::integer_to_words(digits),
			Language::Japanese => ja::integer_to_words(digits),
			Language::Dutch => nl::integer_to_words(digits),
			Language::Polish => pl::integer_to_words(digits),
			Language::Portuguese => pt::integer_to_words(digits),
			Language::Russian => ru::integer_to_words(digits),
			Language::Swedish => sv::integer_to_words(digits),
			Language::Turkish => tr::integer_to_words(digits),
		}
	}

	/// Renders a decimal digit string digit by digit.
	///
	/// Trailing zeros are stripped first; an empty or all-zero input yields
	/// an empty string, and the caller must then omit the decimal word.
	pub fn render_decimal(&self, decimal_digits: &str) -> String {
		let digits = digits::keep_digits(decimal_digits);
		let digits = digits::strip_trailing_zeros(&digits);
		if digits.is_empty() {
			return String::new();
		}

		match self {
			Language::Arabic => ar::decimal_to_words(digits),
			Language::Azerbaijani => az::decimal_to_words(digits),
			Language::German => de::decimal_to_words(digits),
			Language::English => en::decimal_to_words(digits),
			Language::Spanish => es::decimal_to_words(digits),
			Language::Finnish => fi::decimal_to_words(digits),
			Language::French => fr::decimal_to_words(digits),
			Language::Hindi => hi::decimal_to_words(digits),
			Language::Italian => it::decimal_to_words(digits),
			Language::Japanese => ja::decimal_to_words(digits),
			Language::Dutch => nl::decimal_to_words(digits),
			Language::Polish => pl::decimal_to_words(digits),
			Language::Portuguese => pt::decimal_to_words(digits),
			Language::Russian => ru::decimal_to_words(digits),
			Language::Swedish => sv::decimal_to_words(digits),
			Language::Turkish => tr::decimal_to_words(digits),
		}
	}
}

impl std::fmt::Display for Language {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.code())
	}
}
