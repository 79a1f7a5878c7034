use mosaic::EncoderConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub encoder: EncoderConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_concurrent_renders: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_concurrent_renders: 16,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub default_size: f64,
    pub demo_size: f64,
    pub slice_size: f64,
    pub max_size: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_size: 96.0,
            demo_size: 96.0,
            slice_size: 900.0,
            max_size: 4096.0,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        // Current directory first, then the workspace root.
        let config_candidates = ["config/default", "demos/viz-service/config/default"];

        let mut builder = config::Config::builder();

        let override_path = std::env::var("VIZ_SERVICE_CONFIG")
            .ok()
            .filter(|path| std::path::Path::new(&format!("{}.toml", path)).exists());

        match override_path {
            Some(path) => {
                builder = builder.add_source(config::File::with_name(&path));
            }
            None => {
                if let Some(path) = config_candidates
                    .iter()
                    .find(|path| std::path::Path::new(&format!("{}.toml", path)).exists())
                {
                    builder = builder.add_source(config::File::with_name(path));
                }
            }
        }

        builder =
            builder.add_source(config::Environment::with_prefix("VIZ_SERVICE").separator("__"));

        builder.build()?.try_deserialize()
    }
}
