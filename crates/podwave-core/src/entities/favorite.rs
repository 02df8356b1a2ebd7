//! Favorites - a user's saved-episode markers, unique per (user, episode)

/// Outcome of a favorite toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    /// The pair did not exist and was inserted
    Activated,
    /// The pair existed and was removed
    Deactivated,
}

impl FavoriteToggle {
    /// Whether the episode is a favorite after the toggle
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Activated)
    }
}
