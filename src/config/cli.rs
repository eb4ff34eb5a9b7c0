use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "menupos")]
#[command(about = "A small point-of-sale catalog demo")]
pub struct CliConfig {
    /// TOML seed catalog to load into the in-memory stores
    #[arg(long, default_value = "catalog.toml")]
    pub seed_file: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
