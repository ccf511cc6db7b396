//! Extraction configuration.

/// Maximum destination path length, in characters, inherited from the
/// Windows `MAX_PATH` limit the tool has always enforced.
pub const DEFAULT_MAX_PATH_LENGTH: usize = 260;

/// What to do with an entry whose parent directory is the output root
/// itself.
///
/// The collision check compares the entry's parent directory string with
/// the output root name literally. It fires for every entry placed directly
/// in the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Skip directory creation and still write the file. The output root
    /// already exists when entries are processed.
    #[default]
    SkipDirectories,
    /// Skip the whole entry without writing anything.
    SkipEntry,
}

/// Configuration for a single extraction run.
///
/// # Examples
///
/// ```
/// use vpkx_core::CollisionPolicy;
/// use vpkx_core::ExtractConfig;
///
/// let config = ExtractConfig::default();
/// assert_eq!(config.max_path_length, 260);
///
/// let strict = ExtractConfig {
///     collision_policy: CollisionPolicy::SkipEntry,
///     ..Default::default()
/// };
/// assert_eq!(strict.collision_policy, CollisionPolicy::SkipEntry);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Destination paths with this many characters or more abort the run.
    pub max_path_length: usize,

    /// Handling of entries that sit directly in the output root.
    pub collision_policy: CollisionPolicy,
}

impl Default for ExtractConfig {
    /// Default values:
    /// - `max_path_length`: 260
    /// - `collision_policy`: [`CollisionPolicy::SkipDirectories`]
    fn default() -> Self {
        Self {
            max_path_length: DEFAULT_MAX_PATH_LENGTH,
            collision_policy: CollisionPolicy::default(),
        }
    }
}

impl ExtractConfig {
    /// Sets the collision policy.
    #[must_use]
    pub const fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }

    /// Sets the maximum destination path length.
    #[must_use]
    pub const fn with_max_path_length(mut self, max: usize) -> Self {
        self.max_path_length = max;
        self
    }
}
