#[derive(Debug, Clone)]
pub struct SkipListOptions {
    /// Seed for the coin flips that pick node heights. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Node slots reserved up front.
    pub capacity: usize,
}

impl Default for SkipListOptions {
    fn default() -> Self {
        Self {
            seed: None,
            capacity: 0,
        }
    }
}

impl SkipListOptions {
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
