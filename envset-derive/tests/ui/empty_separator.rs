use envset::Env;

#[derive(Env)]
pub struct Config {
    #[env("LIST,separator=")]
    pub list: Vec<String>,
}

fn main() {}
