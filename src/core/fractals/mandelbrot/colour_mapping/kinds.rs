#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourModeKind {
    #[default]
    Smooth,
    Simple,
    Modulo,
    Mixed,
}

impl ColourModeKind {
    pub const ALL: &'static [Self] = &[Self::Smooth, Self::Simple, Self::Modulo, Self::Mixed];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Smooth => "Smooth",
            Self::Simple => "Simple",
            Self::Modulo => "Modulo",
            Self::Mixed => "Mixed",
        }
    }

    /// Interpolating modes blend two neighbouring palette entries.
    #[must_use]
    pub const fn requires_interpolation(self) -> bool {
        matches!(self, Self::Smooth | Self::Mixed)
    }

    #[must_use]
    pub const fn min_palette_len(self) -> usize {
        if self.requires_interpolation() { 2 } else { 1 }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for ColourModeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(ColourModeKind::ALL.first(), Some(&ColourModeKind::default()));
    }

    #[test]
    fn from_index_follows_all_order() {
        for (index, &kind) in ColourModeKind::ALL.iter().enumerate() {
            assert_eq!(ColourModeKind::from_index(index), Some(kind));
        }
        assert_eq!(ColourModeKind::from_index(ColourModeKind::ALL.len()), None);
    }

    #[test]
    fn interpolating_modes_need_two_colours() {
        assert_eq!(ColourModeKind::Smooth.min_palette_len(), 2);
        assert_eq!(ColourModeKind::Mixed.min_palette_len(), 2);
        assert_eq!(ColourModeKind::Simple.min_palette_len(), 1);
        assert_eq!(ColourModeKind::Modulo.min_palette_len(), 1);
    }

    #[test]
    fn display_matches_display_name() {
        for &kind in ColourModeKind::ALL {
            assert_eq!(kind.to_string(), kind.display_name());
        }
    }
}
