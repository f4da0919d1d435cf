//! Basic usage example

use envset::{Env, EnvSet};

#[derive(Debug, Default, Env)]
struct Config {
    // Loaded from DATABASE_URL
    #[env("DATABASE_URL")]
    pub database_url: String,

    // First key present wins
    #[env("SERVER_ADDR,LISTEN_ADDR")]
    pub server_addr: String,

    // Numeric type
    #[env("MAX_CONNECTIONS")]
    pub max_connections: u32,

    // Boolean type
    #[env("DEBUG_MODE")]
    pub debug_mode: bool,
}

fn main() -> anyhow::Result<()> {
    let mut es: EnvSet = envset::environ_to_env_set([
        "DATABASE_URL=postgres://localhost/mydb",
        "LISTEN_ADDR=0.0.0.0:3000",
        "MAX_CONNECTIONS=10",
        "EDITOR=vim",
    ])?;

    let mut config = Config::default();
    envset::unmarshal(&mut es, &mut config)?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);
    println!("Unclaimed variables: {:?}", es);

    Ok(())
}
