use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use livrocaixa_core::constants::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_FILE_NAME, DEFAULT_MONTHLY_GOAL, DEFAULT_SHEET_NAME};
use livrocaixa_core::{ColumnMapping, DashboardSettings};
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub file: PathBuf,
    pub sheet: String,
    pub columns: ColumnMapping,
    pub dashboard: DashboardSettings,
    pub log_format: LogFormat,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let var = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let host: IpAddr = parse_var("HOST", &var("HOST", "0.0.0.0"))?;
        let port: u16 = parse_var("PORT", &var("PORT", "8050"))?;
        let monthly_goal: Decimal = parse_var(
            "LIVROCAIXA_MONTHLY_GOAL",
            &var("LIVROCAIXA_MONTHLY_GOAL", &DEFAULT_MONTHLY_GOAL.to_string()),
        )?;

        let defaults = ColumnMapping::default();
        let columns = ColumnMapping {
            order_date: var("LIVROCAIXA_COL_DATE", &defaults.order_date),
            total_value: var("LIVROCAIXA_COL_VALUE", &defaults.total_value),
            commission: var("LIVROCAIXA_COL_COMMISSION", &defaults.commission),
            quantity: var("LIVROCAIXA_COL_QUANTITY", &defaults.quantity),
            client: var("LIVROCAIXA_COL_CLIENT", &defaults.client),
        };

        let log_format = match var("LOG_FORMAT", "text").to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "text" | "pretty" => LogFormat::Text,
            other => anyhow::bail!("LOG_FORMAT must be 'text' or 'json', got '{}'", other),
        };

        let dashboard = DashboardSettings {
            monthly_goal,
            currency_symbol: var("LIVROCAIXA_CURRENCY", DEFAULT_CURRENCY_SYMBOL),
        };
        dashboard.validate()?;

        Ok(Self {
            listen_addr: SocketAddr::new(host, port),
            file: PathBuf::from(var("LIVROCAIXA_FILE", DEFAULT_FILE_NAME)),
            sheet: var("LIVROCAIXA_SHEET", DEFAULT_SHEET_NAME),
            columns,
            dashboard,
            log_format,
        })
    }
}

fn parse_var<T>(key: &str, raw: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse::<T>()
        .with_context(|| format!("Invalid value for {}: '{}'", key, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listen_addr.to_string(), "0.0.0.0:8050");
        assert_eq!(config.file, PathBuf::from("Livro-Caixa.xlsx"));
        assert_eq!(config.sheet, "Livro Caixa");
        assert_eq!(config.dashboard.monthly_goal, Decimal::from(100000));
        assert_eq!(config.columns, ColumnMapping::default());
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn overrides() {
        let config = config_from(&[
            ("PORT", "9000"),
            ("LIVROCAIXA_MONTHLY_GOAL", "25000.50"),
            ("LIVROCAIXA_COL_CLIENT", "Customer"),
            ("LOG_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(config.listen_addr.port(), 9000);
        assert_eq!(config.dashboard.monthly_goal.to_string(), "25000.50");
        assert_eq!(config.columns.client, "Customer");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("LIVROCAIXA_MONTHLY_GOAL", "lots")]).is_err());
        assert!(config_from(&[("LIVROCAIXA_MONTHLY_GOAL", "-1")]).is_err());
        assert!(config_from(&[("LOG_FORMAT", "xml")]).is_err());
    }
}
