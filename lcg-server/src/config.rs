use std::env;

/// Default bind address.
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

/// Where the HTTP server listens.
///
/// Read from `LCG_HOST` and `LCG_PORT`, each falling back to its default when unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
	pub host: String,
	pub port: u16,
}

impl ServerConfig {
	pub fn from_env() -> Result<Self, String> {
		Self::from_values(env::var("LCG_HOST").ok(), env::var("LCG_PORT").ok())
	}

	fn from_values(host: Option<String>, port: Option<String>) -> Result<Self, String> {
		let host = match host {
			Some(h) if !h.trim().is_empty() => h.trim().to_owned(),
			_ => DEFAULT_HOST.to_owned(),
		};
		let port = match port {
			Some(p) => p.trim().parse::<u16>().map_err(|_| format!("LCG_PORT must be a port number, got '{}'", p))?,
			None => DEFAULT_PORT,
		};
		Ok(Self { host, port })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let config = ServerConfig::from_values(None, None).unwrap();
		assert_eq!(config, ServerConfig { host: "127.0.0.1".to_owned(), port: 5000 });
	}

	#[test]
	fn overrides() {
		let config = ServerConfig::from_values(Some("0.0.0.0".to_owned()), Some("8080".to_owned())).unwrap();
		assert_eq!(config.host, "0.0.0.0");
		assert_eq!(config.port, 8080);
	}

	#[test]
	fn blank_host_falls_back() {
		let config = ServerConfig::from_values(Some("  ".to_owned()), None).unwrap();
		assert_eq!(config.host, DEFAULT_HOST);
	}

	#[test]
	fn invalid_port() {
		assert!(ServerConfig::from_values(None, Some("http".to_owned())).is_err());
		assert!(ServerConfig::from_values(None, Some("70000".to_owned())).is_err());
	}
}
