use envset::Env;

#[derive(Env)]
pub struct Config {
    #[env("default=1")]
    pub port: u16,
}

fn main() {}
