/// Layout of the two integers that open a match.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Framing {
    /// `id` and `max_rounds` share the first line: `42,10`.
    #[default]
    Inline,
    /// One integer per line: `42` then `10`.
    Stacked,
}
