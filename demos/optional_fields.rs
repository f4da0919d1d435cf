//! Example demonstrating Option<T> for optional fields

use envset::Env;

#[derive(Debug, Default, Env)]
struct Config {
    #[env("APP_NAME")]
    pub app_name: String,

    // None if not set, Some("") if set to an empty value
    #[env("API_KEY")]
    pub api_key: Option<String>,

    #[env("PORT")]
    pub port: Option<u16>,

    #[env("DEBUG")]
    pub debug: Option<bool>,
}

fn main() -> anyhow::Result<()> {
    let es = envset::environ_to_env_set(["APP_NAME=my-application", "PORT=8080", "API_KEY="])?;

    let mut config = Config::default();
    envset::decode(es, &mut config)?;

    println!("Configuration:");
    println!("  App Name: {}", config.app_name);
    println!("  API Key: {:?}", config.api_key); // Some("")
    println!("  Port: {:?}", config.port); // Some(8080)
    println!("  Debug: {:?}", config.debug); // None

    // DEBUG is omitted, not written as an empty value
    let es = envset::marshal(&config)?;
    println!("Marshalled: {:?}", es);

    Ok(())
}
