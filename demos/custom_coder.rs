//! Example demonstrating custom coders and per-field functions

use envset::{Env, EnvError, EnvValue};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Endpoint {
    pub host: String,
    pub port: u16,
}

// Stored as JSON in a single variable
impl EnvValue for Endpoint {
    fn decode_env(value: &str) -> Result<Self, EnvError> {
        serde_json::from_str(value).map_err(EnvError::custom)
    }

    fn encode_env(&self) -> Result<String, EnvError> {
        serde_json::to_string(self).map_err(EnvError::custom)
    }
}

fn comma_separated(s: &str) -> Result<Vec<String>, String> {
    Ok(s.split(',').map(|s| s.trim().to_string()).collect())
}

fn comma_joined(values: &Vec<String>) -> Result<String, String> {
    Ok(values.join(","))
}

#[derive(Debug, Default, Env)]
struct Config {
    #[env("ENDPOINT")]
    pub endpoint: Endpoint,

    #[env("FALLBACK")]
    pub fallback: Option<Endpoint>,

    #[env("TAGS", deserializer = "comma_separated", serializer = "comma_joined")]
    pub tags: Vec<String>,

    #[env("LABELS", deserializer = "serde_json::from_str", serializer = "serde_json::to_string")]
    pub labels: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let mut es = envset::environ_to_env_set([
        r#"ENDPOINT={"host":"api.local","port":8443}"#,
        "TAGS=prod, api, v2",
        r#"LABELS=["blue","green"]"#,
    ])?;

    let mut config = Config::default();
    envset::unmarshal(&mut es, &mut config)?;

    println!("Configuration loaded:");
    println!("  Endpoint: {:?}", config.endpoint);
    println!("  Fallback: {:?}", config.fallback);
    println!("  Tags: {:?}", config.tags);
    println!("  Labels: {:?}", config.labels);

    println!("Marshalled: {:?}", envset::marshal(&config)?);

    Ok(())
}
