use serde::Deserialize;

/// Knobs for the simulated chain. There is no real network behind these:
/// the delays stand in for contract deployment and ticket minting latency.
#[derive(Debug, Clone, Deserialize)]
pub struct ChainSimConfig {
    pub network: String,
    pub deploy_ms: u64,
    pub mint_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub chain: ChainSimConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = std::env::var("APP_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8080);
        let chain = ChainSimConfig {
            network: std::env::var("CHAIN_NETWORK").unwrap_or_else(|_| "endless-testnet".into()),
            deploy_ms: std::env::var("CHAIN_DEPLOY_MS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(3000),
            mint_ms: std::env::var("CHAIN_MINT_MS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(1500),
        };
        Ok(Self { host, port, chain })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_falls_back_to_defaults() {
        std::env::remove_var("APP_HOST");
        std::env::remove_var("APP_PORT");
        let config = AppConfig::from_env().expect("defaults");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.chain.deploy_ms, 3000);
    }
}
