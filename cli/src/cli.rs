use clap::Parser;

#[derive(Parser)]
#[command(name = "cursus")]
#[command(about = "An interactive course-management registry.")]
pub struct CommandLine {
    /// Skip the startup banner
    #[arg(long)]
    pub no_banner: bool,

    /// Start with an empty registry instead of the demo dataset
    #[arg(long)]
    pub no_seed: bool,

    /// Reduce decorative output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
