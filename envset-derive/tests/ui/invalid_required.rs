use envset::Env;

#[derive(Env)]
pub struct Config {
    #[env("PORT,required=yes")]
    pub port: u16,
}

fn main() {}
