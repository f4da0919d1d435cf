//! Example demonstrating change sets applied between two decodes

use envset::{ChangeSet, Env, EnvSetExt};

#[derive(Debug, Default, Env)]
struct Config {
    #[env("LOG_LEVEL,default=info")]
    pub log_level: String,

    #[env("WORKERS")]
    pub workers: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let mut es = envset::environ_to_env_set(["LOG_LEVEL=debug", "WORKERS=4"])?;

    let mut config = Config::default();
    envset::unmarshal(&mut es.clone(), &mut config)?;
    println!("Before: {:?}", config);

    let changes = ChangeSet::from([
        ("LOG_LEVEL".to_string(), None),
        ("WORKERS".to_string(), Some("8".to_string())),
    ]);
    es.apply(&changes);

    let mut config = Config::default();
    envset::unmarshal(&mut es, &mut config)?;
    println!("After: {:?}", config);

    Ok(())
}
