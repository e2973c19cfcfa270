use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};

use serde::Deserialize;
use numword_core::convert::{to_words, ConversionOptions};
use numword_core::lang::Language;

/// Struct representing query parameters for the `/v1/convert` endpoint
#[derive(Deserialize)]
struct ConvertParams {
	value: Option<String>,
	language: Option<String>,
	include_decimal_text: Option<bool>,
	capitalize: Option<bool>,
}

#[derive(Deserialize)]
struct LanguageQuery {
	code: Option<String>,
}

impl ConvertParams {
	/// Merges the query parameters with the default conversion options.
	fn options(&self) -> ConversionOptions {
		let defaults = ConversionOptions::default();
		ConversionOptions {
			language: self.language.clone().unwrap_or(defaults.language),
			include_decimal_text: self.include_decimal_text.unwrap_or(defaults.include_decimal_text),
			capitalize: self.capitalize.unwrap_or(defaults.capitalize),
		}
	}
}

/// HTTP GET endpoint `/v1/convert`
///
/// Converts the `value` query parameter to words in the requested language.
/// Returns the word sequence as the response body. Invalid numbers come
/// back as the language's own error message with status 200, since the
/// conversion itself never fails.
#[get("/v1/convert")]
async fn get_convert(query: web::Query<ConvertParams>) -> impl Responder {
	let value = match &query.value {
		Some(v) if !v.trim().is_empty() => v.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty 'value' parameter"),
	};

	let options = query.options();
	tracing::info!(value, language = %options.language, "convert request");
	HttpResponse::Ok().body(to_words(value, &options))
}

#[get("/v1/languages")]
async fn get_languages() -> impl Responder {
	HttpResponse::Ok().body(Language::supported_codes().join("\n"))
}

#[get("/v1/is_supported")]
async fn get_is_supported(query: web::Query<LanguageQuery>) -> impl Responder {
	let code = match &query.code {
		Some(c) if !c.trim().is_empty() => c.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty 'code' parameter"),
	};
	HttpResponse::Ok().body(Language::is_supported(code).to_string())
}

/// Main entry point for the server.
///
/// Starts an Actix-web HTTP server exposing the conversion API. The
/// language tables are compile-time constants, so there is no shared
/// state to protect and every request is handled independently.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - Log verbosity follows the `RUST_LOG` environment variable.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
		)
		.init();

	tracing::info!("listening on 127.0.0.1:5000");
	HttpServer::new(|| {
		App::new()
			.service(get_convert)
			.service(get_languages)
			.service(get_is_supported)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
