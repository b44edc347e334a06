/// Tuning knobs for a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexConfig {
    /// Clamp a child's main size to zero when shrinking would drive it negative.
    ///
    /// - **true**: a child never receives a negative exact size. Overflow that
    ///   cannot be absorbed is left as overflow.
    /// - **false**: the proportional shrink is applied verbatim, which keeps the
    ///   shrink total exact but can hand children negative sizes.
    ///
    /// Defaults to `true`.
    pub clamp_negative_basis: bool,
}

impl Default for FlexConfig {
    fn default() -> Self {
        Self {
            clamp_negative_basis: true,
        }
    }
}
