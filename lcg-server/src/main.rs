use std::collections::HashMap;
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{delete, get, web, App, HttpResponse, HttpServer, Responder};
use log::info;
use serde::{Deserialize, Serialize};

use lcg_core::model::format::{render_errors, render_table};
use lcg_core::{Panel, RawInput, Variant};

mod config;

use config::ServerConfig;

/// Query parameters of `/v1/generate`.
///
/// Fields are kept as raw text: validation belongs to the engine.
/// `c` is ignored by multiplicative variants.
#[derive(Deserialize)]
struct GenerateParams {
	variant: Option<String>,
	seed: Option<String>,
	k: Option<String>,
	c: Option<String>,
	p: Option<String>,
	d: Option<String>,
}

#[derive(Deserialize)]
struct PanelQuery {
	variant: Option<String>,
}

/// Body of every 400 response.
#[derive(Serialize)]
struct ErrorBody {
	errors: Vec<String>,
}

/// One panel per variant, like the two screens of the web UI.
struct SharedData {
	panels: HashMap<Variant, Panel>,
}

impl SharedData {
	fn new() -> Self {
		Self { panels: Variant::ALL.into_iter().map(|v| (v, Panel::new(v))).collect() }
	}

	fn panel(&mut self, variant: Variant) -> &mut Panel {
		self.panels.entry(variant).or_insert_with(|| Panel::new(variant))
	}
}

/// Missing `variant` selects the linear generator.
fn parse_variant(raw: &Option<String>) -> Result<Variant, String> {
	match raw {
		None => Ok(Variant::Linear),
		Some(s) => s.parse(),
	}
}

fn bad_request(errors: Vec<String>) -> HttpResponse {
	HttpResponse::BadRequest().json(ErrorBody { errors })
}

impl GenerateParams {
	fn raw_input(&self) -> RawInput {
		let text = |field: &Option<String>| field.clone().unwrap_or_default();
		RawInput {
			seed: text(&self.seed),
			k: text(&self.k),
			additive_constant: self.c.clone(),
			desired_count: text(&self.p),
			decimal_digits: text(&self.d),
		}
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Runs the engine on the query fields and stores the outcome in the
/// variant's panel. Returns the result as JSON, or `{ "errors": [...] }`
/// with status 400.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let variant = match parse_variant(&query.variant) {
		Ok(v) => v,
		Err(e) => return bad_request(vec![e]),
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Panel lock failed"),
	};

	match shared_data.panel(variant).generate(&query.raw_input()) {
		Ok(result) => {
			info!("Generated {} rows for {}", result.rows.len(), variant);
			HttpResponse::Ok().json(result)
		}
		Err(e) => {
			info!("Refused {} request: {}", variant, e);
			bad_request(e.messages())
		}
	}
}

/// HTTP GET endpoint `/v1/panel`: current state of a panel as JSON.
#[get("/v1/panel")]
async fn get_panel(data: web::Data<Mutex<SharedData>>, query: web::Query<PanelQuery>) -> impl Responder {
	let variant = match parse_variant(&query.variant) {
		Ok(v) => v,
		Err(e) => return bad_request(vec![e]),
	};
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Panel lock failed"),
	};
	HttpResponse::Ok().json(shared_data.panel(variant))
}

/// HTTP GET endpoint `/v1/table`: the panel's last result as a text table.
///
/// Errors are returned as a bulleted list, an empty panel as an empty body.
#[get("/v1/table")]
async fn get_table(data: web::Data<Mutex<SharedData>>, query: web::Query<PanelQuery>) -> impl Responder {
	let variant = match parse_variant(&query.variant) {
		Ok(v) => v,
		Err(e) => return bad_request(vec![e]),
	};
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Panel lock failed"),
	};
	let panel = shared_data.panel(variant);
	let body = match panel.result() {
		Some(result) => render_table(result),
		None => render_errors(panel.errors()),
	};
	HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(body)
}

/// HTTP DELETE endpoint `/v1/panel`: clears a panel.
#[delete("/v1/panel")]
async fn delete_panel(data: web::Data<Mutex<SharedData>>, query: web::Query<PanelQuery>) -> impl Responder {
	let variant = match parse_variant(&query.variant) {
		Ok(v) => v,
		Err(e) => return bad_request(vec![e]),
	};
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Panel lock failed"),
	};
	shared_data.panel(variant).clear();
	HttpResponse::Ok().body("Panel cleared")
}

/// Main entry point for the server.
///
/// Creates one empty panel per variant behind a `Mutex` and serves the
/// generator endpoints. The bind address comes from `ServerConfig`
/// (`LCG_HOST` / `LCG_PORT`, default 127.0.0.1:5000).
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = ServerConfig::from_env().map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
	let shared_data = web::Data::new(Mutex::new(SharedData::new()));

	info!("Listening on {}:{}", config.host, config.port);
	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.app_data(shared_data.clone())
			.service(get_generated)
			.service(get_panel)
			.service(get_table)
			.service(delete_panel)
	})
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
