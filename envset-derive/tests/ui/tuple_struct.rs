use envset::Env;

#[derive(Env)]
pub struct Config(#[env("PORT")] pub u16);

fn main() {}
