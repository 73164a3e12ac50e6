/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    /// Zero-based position of the question on screen.
    pub current: usize,
    pub total: usize,
    pub answered: usize,
    pub is_last: bool,
}

impl SessionProgress {
    /// One-based question number shown to the user.
    #[must_use]
    pub fn number(&self) -> usize {
        self.current + 1
    }
}
