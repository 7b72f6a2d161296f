/// Nesting limit used by the game itself.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options for reading NBT.
///
/// ```
/// # use nbtree::io::ReadOpts;
/// let opts = ReadOpts::new().max_depth(64).max_bytes(2 * 1024 * 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOpts {
    pub(crate) max_depth: usize,
    pub(crate) max_bytes: Option<u64>,
}

impl Default for ReadOpts {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_bytes: None,
        }
    }
}

impl ReadOpts {
    pub fn new() -> Self {
        Default::default()
    }

    /// Maximum number of nested compounds and lists. The root compound counts
    /// as the first level. Defaults to 512.
    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = value;
        self
    }

    /// Maximum number of bytes the reader may consume. Unlimited by default.
    /// Useful when reading untrusted data, since lengths in the data could
    /// otherwise claim gigabytes.
    pub fn max_bytes(mut self, value: u64) -> Self {
        self.max_bytes = Some(value);
        self
    }
}
