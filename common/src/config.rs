pub struct Config {
    /// Suppresses the startup banner.
    pub no_banner: bool,

    /// Starts with an empty registry instead of the demo dataset.
    pub no_seed: bool,

    /// Output reduction level. Anything above 0 drops headers
    /// and decorative separators.
    pub quiet: u8,
}
