//! Role → presentation attribute resolution.

use par_jsonview_config::RoleColors;

use super::types::Role;

/// Presentation attributes for one span role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleDescriptor {
    /// Foreground color as `[r, g, b]`.
    pub fg: [u8; 3],
    /// Whether the span is bold.
    pub bold: bool,
    /// Whether the span is italic.
    pub italic: bool,
    /// Extra blank line after the span, to visually separate sibling blocks.
    /// Baked into the `MarkEnd` descriptor only, never computed per call.
    pub trailing_blank: bool,
}

/// Fixed, role-indexed style table.
///
/// The role set is closed, so this is an array lookup rather than an open
/// map; resolution never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleMap {
    entries: [StyleDescriptor; Role::COUNT],
}

impl StyleMap {
    /// Build the table from one presentation mode's per-role colors.
    pub fn from_colors(colors: &RoleColors) -> Self {
        let plain = |fg: [u8; 3]| StyleDescriptor {
            fg,
            bold: false,
            italic: false,
            trailing_blank: false,
        };

        let mut entries = [plain(colors.scalar); Role::COUNT];
        entries[Role::Key.index()] = StyleDescriptor {
            bold: true,
            ..plain(colors.key)
        };
        entries[Role::Scalar.index()] = plain(colors.scalar);
        entries[Role::StringValue.index()] = plain(colors.string);
        entries[Role::Special.index()] = StyleDescriptor {
            italic: true,
            ..plain(colors.special)
        };
        entries[Role::MarkStart.index()] = plain(colors.mark);
        entries[Role::MarkEnd.index()] = StyleDescriptor {
            trailing_blank: true,
            ..plain(colors.mark)
        };

        Self { entries }
    }

    /// Default dark-background table.
    pub fn dark_default() -> Self {
        Self::from_colors(&RoleColors::dark_default())
    }

    /// Default light-background table.
    pub fn light_default() -> Self {
        Self::from_colors(&RoleColors::light_default())
    }

    /// Look up the descriptor for a role. Pure and infallible.
    pub fn resolve(&self, role: Role) -> &StyleDescriptor {
        &self.entries[role.index()]
    }
}

impl Default for StyleMap {
    fn default() -> Self {
        Self::dark_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_resolves() {
        let map = StyleMap::dark_default();
        for role in [
            Role::Key,
            Role::Scalar,
            Role::StringValue,
            Role::Special,
            Role::MarkStart,
            Role::MarkEnd,
        ] {
            // Resolution is total; just exercise each slot.
            let _ = map.resolve(role);
        }
    }

    #[test]
    fn test_mark_end_carries_trailing_blank() {
        let map = StyleMap::dark_default();
        assert!(map.resolve(Role::MarkEnd).trailing_blank);
        assert!(!map.resolve(Role::MarkStart).trailing_blank);
        assert!(!map.resolve(Role::Key).trailing_blank);
    }

    #[test]
    fn test_light_and_dark_tables_differ() {
        let dark = StyleMap::dark_default();
        let light = StyleMap::light_default();
        assert_ne!(dark.resolve(Role::Key).fg, light.resolve(Role::Key).fg);
    }
}
