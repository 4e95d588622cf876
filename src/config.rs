// src/config.rs
use std::net::SocketAddr;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    /// Fixed seed for particle placement. `None` draws fresh entropy per request.
    pub particle_seed: Option<u64>,
    pub enable_hsts: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let particle_seed = match var("PARTICLE_SEED") {
            Some(seed) if !seed.trim().is_empty() => Some(
                seed.trim()
                    .parse()
                    .map_err(|e| format!("Invalid PARTICLE_SEED '{}': {}", seed, e))?,
            ),
            _ => None,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: var("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .map_err(|e| format!("Invalid PORT: {}", e))?,
            static_dir: var("STATIC_DIR").unwrap_or_else(|| "static".to_string()),
            particle_seed,
            enable_hsts: var("ENABLE_HSTS").as_deref() == Some("true"),
        })
    }

    pub fn server_addr(&self) -> Result<SocketAddr, Box<dyn std::error::Error>> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid server address {}:{}: {}", self.host, self.port, e).into())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: "static".to_string(),
            particle_seed: None,
            enable_hsts: false,
        }
    }
}
