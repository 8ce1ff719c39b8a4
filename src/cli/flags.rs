#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub save: bool,
    pub quiet: bool,
    pub score: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_digits: bool,
    pub no_special: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
}

impl CliFlags {
    /// True if any flag changes the generation policy.
    pub fn has_policy_args(&self) -> bool {
        self.length.is_some()
            || self.no_upper
            || self.no_lower
            || self.no_digits
            || self.no_special
    }
}
