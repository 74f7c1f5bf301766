#[derive(Debug, Default, Clone)]
pub struct Config {
    /// Hides the startup banner.
    pub no_banner: bool,
    /// Disables ANSI colors in terminal output.
    pub no_color: bool,
    /// Decoration level to suppress.
    ///
    /// `1` hides banner and headers, `2` also hides the closing separator.
    /// Spoken lines are never suppressed.
    pub quiet: u8,
}
