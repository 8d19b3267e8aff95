use serde::Deserialize;

/// Upstream connection settings. The API key is mandatory; its absence is
/// caught when the client is constructed at boot.
#[derive(Debug, Clone, Default)]
pub struct UpstreamConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

pub struct Config {
    pub mode: String, // "server" or "stdio"
    pub port: u16,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    mode: Option<String>,
    port: Option<u16>,
    #[serde(default)]
    upstream: FileUpstream,
}

#[derive(Debug, Default, Deserialize)]
struct FileUpstream {
    base_url: Option<String>,
    api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_env_over(FileConfig::default())
    }

    /// Optional TOML file (TYPEFULLY_MCP_CONFIG, else ./typefully-mcp.toml)
    /// supplies defaults; environment variables win.
    pub fn load() -> Self {
        let path = std::env::var("TYPEFULLY_MCP_CONFIG")
            .unwrap_or_else(|_| "typefully-mcp.toml".to_string());
        let file = match std::fs::read_to_string(&path) {
            Ok(raw) => match toml::from_str::<FileConfig>(&raw) {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::warn!(path = %path, error = %e, "ignoring unparseable config file");
                    FileConfig::default()
                }
            },
            Err(_) => FileConfig::default(),
        };
        Self::from_env_over(file)
    }

    fn from_env_over(file: FileConfig) -> Self {
        let mode = std::env::var("MODE")
            .ok()
            .or(file.mode)
            .unwrap_or_else(|| "server".into());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .or(file.port)
            .unwrap_or(8080);
        let base_url = std::env::var("TYPEFULLY_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .or(file.upstream.base_url);
        let api_key = std::env::var("TYPEFULLY_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .or(file.upstream.api_key);

        Self {
            mode,
            port,
            upstream: UpstreamConfig { base_url, api_key },
        }
    }
}
