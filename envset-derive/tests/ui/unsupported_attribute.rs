use envset::Env;

#[derive(Env)]
pub struct Config {
    #[env("PORT", flatten)]
    pub port: u16,
}

fn main() {}
