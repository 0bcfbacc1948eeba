use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum SeedSource {
    /// Start with an empty roster
    Empty,
    /// The built-in sample roster
    Sample,
    /// JSON array of people on disk
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct StoreOptions {
    pub seed: SeedSource,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl StoreOptions {
    /// Defines what the store holds before the first request arrives
    pub fn set_seed(mut self, seed: SeedSource) -> Self {
        self.seed = seed;
        self
    }

    /// Seeds from `path` when given, otherwise falls back to the sample roster when
    /// `sample` is set. Mirrors the flags of the server binary.
    pub fn set_seed_from_flags(self, path: Option<PathBuf>, sample: bool) -> Self {
        let seed = match (path, sample) {
            (Some(path), _) => SeedSource::File(path),
            (None, true) => SeedSource::Sample,
            (None, false) => SeedSource::Empty,
        };

        self.set_seed(seed)
    }
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            seed: SeedSource::Empty,
        }
    }
}
