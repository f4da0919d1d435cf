//! Example demonstrating nested structs sharing one set of variables

use envset::Env;

#[derive(Debug, Default, Env)]
struct Database {
    #[env("DATABASE_HOST,default=localhost")]
    pub host: String,

    #[env("DATABASE_PORT,default=5432")]
    pub port: u16,
}

#[derive(Debug, Default, Env)]
struct Config {
    #[env("APP_NAME")]
    pub app_name: String,

    #[env(nested)]
    pub database: Database,
}

fn main() -> anyhow::Result<()> {
    let es = envset::environ_to_env_set(["APP_NAME=my-app", "DATABASE_PORT=6543"])?;

    let mut config = Config::default();
    let leftover = envset::decode(es, &mut config)?;

    println!("Configuration loaded:");
    println!("  App Name: {}", config.app_name);
    println!("  Database: {}:{}", config.database.host, config.database.port);
    println!("Unclaimed variables: {}", leftover.len());

    let mut environ = envset::env_set_to_environ(&envset::marshal(&config)?);
    environ.sort();
    println!("Marshalled: {:?}", environ);

    Ok(())
}
