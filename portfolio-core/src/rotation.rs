//! Rotating role headline under the name in the summary section.

use std::time::Duration;

/// Time each role stays on screen.
pub const ROTATION_INTERVAL: Duration = Duration::from_millis(2500);

/// Cycles through a fixed list of role strings. An empty list is inert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleRotation {
    roles: &'static [&'static str],
    index: usize,
}

impl RoleRotation {
    /// Start at the first role.
    pub const fn new(roles: &'static [&'static str]) -> Self {
        Self { roles, index: 0 }
    }

    /// Role currently shown.
    pub fn current(&self) -> &'static str {
        self.roles.get(self.index).copied().unwrap_or_default()
    }

    /// Position of the current role.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Move to the next role, wrapping around.
    pub fn advance(&mut self) {
        if !self.roles.is_empty() {
            self.index = (self.index + 1) % self.roles.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLES: &[&str] = &["Frontend Developer", "Backend Developer", "Full Stack Developer"];

    #[test]
    fn test_advance_wraps() {
        let mut rotation = RoleRotation::new(ROLES);
        assert_eq!(rotation.current(), "Frontend Developer");
        rotation.advance();
        rotation.advance();
        assert_eq!(rotation.current(), "Full Stack Developer");
        rotation.advance();
        assert_eq!(rotation.index(), 0);
    }

    #[test]
    fn test_empty_rotation_is_inert() {
        let mut rotation = RoleRotation::new(&[]);
        rotation.advance();
        assert_eq!(rotation.current(), "");
        assert_eq!(rotation.index(), 0);
    }
}
