/// # Quirks
/// Historical interpreters disagree on a couple of instruction
/// behaviors and programs exist that depend on each side. The defaults
/// are the modern readings; each flag opts back into the older one.
#[derive(Clone, Copy, Debug, Default)]
pub struct Quirks {
    /// 8XY6/8XYE shift Vy into Vx instead of shifting Vx in place
    pub legacy_shift: bool,
    /// Sprite pixels past the display edge wrap around instead of
    /// being clipped
    pub wrap_sprites: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quirks_default_off() {
        let quirks = Quirks::default();
        assert!(!quirks.legacy_shift);
        assert!(!quirks.wrap_sprites);
    }
}
