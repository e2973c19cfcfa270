use numword_core::convert::{to_words, ConversionOptions};
use numword_core::lang::Language;

fn main() {
    // Default options: English, decimal text included, no capitalization
    let options = ConversionOptions::default();

    println!("{}", to_words(0, &options));
    println!("{}", to_words(1001, &options));
    println!("{}", to_words(123.45, &options));
    println!("{}", to_words(-1, &options));

    // Separators in string input are ignored
    println!("{}", to_words("1,234,567", &options));

    // Pick another language by ISO 639-1 code
    let french = ConversionOptions {
        language: "fr".to_owned(),
        ..ConversionOptions::default()
    };
    println!("{}", to_words(81, &french));

    // Capitalize only the first character of the result
    let capitalized = ConversionOptions {
        capitalize: true,
        ..ConversionOptions::default()
    };
    println!("{}", to_words(21, &capitalized));

    // Drop the fractional part entirely
    let integer_only = ConversionOptions {
        include_decimal_text: false,
        ..ConversionOptions::default()
    };
    println!("{}", to_words(123.45, &integer_only));

    // An unknown language code falls back to the default language
    let unknown = ConversionOptions {
        language: "xx".to_owned(),
        ..ConversionOptions::default()
    };
    println!("{}", to_words(42, &unknown));

    // Invalid input comes back as a localized message, not an error
    println!("{}", to_words("not a number", &options));

    // The same value in every supported language
    for code in Language::supported_codes() {
        let per_language = ConversionOptions {
            language: (*code).to_owned(),
            ..ConversionOptions::default()
        };
        println!("{}: {}", code, to_words(2345, &per_language));
    }
}
