//! Example demonstrating default values, required variables and lists

use envset::{Env, EnvError, EnvSet};
use std::time::Duration;

#[derive(Debug, Default, Env)]
struct Config {
    #[env("DATABASE_URL,required=true")]
    pub database_url: String,

    #[env("POOL_SIZE,default=10")]
    pub pool_size: u32,

    #[env("TIMEOUT,default=30s")]
    pub timeout: Duration,

    // Split on `|` unless another separator is given
    #[env("HOSTS,default=a.local|b.local")]
    pub hosts: Vec<String>,

    #[env("PORTS,separator=&")]
    pub ports: Vec<u16>,
}

fn main() -> anyhow::Result<()> {
    // Nothing set: DATABASE_URL is required
    match envset::unmarshal(&mut EnvSet::new(), &mut Config::default()) {
        Err(EnvError::MissingRequiredValue { key }) => println!("Missing required: {key}"),
        other => println!("Unexpected: {other:?}"),
    }

    let mut es = envset::environ_to_env_set([
        "DATABASE_URL=postgres://localhost/mydb",
        "TIMEOUT=1m30s",
        "PORTS=80&443",
    ])?;
    let mut config = Config::default();
    envset::unmarshal(&mut es, &mut config)?;

    println!("Configuration:");
    println!("  Database URL: {}", config.database_url);
    println!("  Pool Size: {}", config.pool_size);
    println!("  Timeout: {:?}", config.timeout);
    println!("  Hosts: {:?}", config.hosts);
    println!("  Ports: {:?}", config.ports);

    Ok(())
}
