#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    pub processed: u64,
    pub too_short: u64,
    pub errors: u64,
}
