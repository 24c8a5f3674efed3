/// 65 caractères — du plus sombre au plus dense.
pub const RAMP: &str =
    "`^\",:;Il!i~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Lookup table mapping brightness [0..255] → glyph.
///
/// Pre-computed at startup for O(1) per-pixel cost. The index formula
/// `v * (len - 1) / 255` in integer arithmetic matches
/// `floor((len - 1) * (v / 255.0))` for every v in [0, 255].
///
/// # Example
/// ```
/// use gc_core::charset::GlyphRamp;
/// let ramp = GlyphRamp::default();
/// assert_eq!(ramp.map(0), '`');
/// assert_eq!(ramp.map(255), '$');
/// ```
pub struct GlyphRamp {
    lut: [char; 256],
}

impl GlyphRamp {
    /// Build a LUT from a charset ordered darkest→densest.
    ///
    /// # Example
    /// ```
    /// use gc_core::charset::GlyphRamp;
    /// let ramp = GlyphRamp::new("`$");
    /// assert_eq!(ramp.map(0), '`');
    /// assert_eq!(ramp.map(255), '$');
    /// ```
    #[must_use]
    pub fn new(charset: &str) -> Self {
        let chars: Vec<char> = charset.chars().collect();
        if chars.len() < 2 {
            // Fallback: if charset is too short, use a minimal default.
            return Self::new("`$");
        }
        let len = chars.len();
        let mut lut = [' '; 256];
        for (i, slot) in lut.iter_mut().enumerate() {
            *slot = chars[i * (len - 1) / 255];
        }
        Self { lut }
    }

    /// Map a brightness value [0..255] to a glyph.
    ///
    /// # Example
    /// ```
    /// use gc_core::charset::GlyphRamp;
    /// let ramp = GlyphRamp::new("`:$");
    /// assert_eq!(ramp.map(128), ':');
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn map(&self, brightness: u8) -> char {
        self.lut[brightness as usize]
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self::new(RAMP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_has_expected_bounds() {
        assert_eq!(RAMP.chars().count(), 65);
        assert_eq!(RAMP.chars().next(), Some('`'));
        assert_eq!(RAMP.chars().last(), Some('$'));
    }

    #[test]
    fn glyph_ramp_maps_extremes() {
        let ramp = GlyphRamp::default();
        assert_eq!(ramp.map(0), '`');
        assert_eq!(ramp.map(255), '$');
    }

    #[test]
    fn glyph_ramp_monotonic() {
        let ramp = GlyphRamp::default();
        let chars: Vec<char> = RAMP.chars().collect();
        let mut prev_idx = 0usize;
        for v in 0..=255u8 {
            let ch = ramp.map(v);
            let idx = chars.iter().position(|&c| c == ch).unwrap();
            assert!(idx >= prev_idx, "LUT non monotone à la luminosité {v}");
            prev_idx = idx;
        }
    }

    #[test]
    fn integer_index_matches_float_formula() {
        let len = RAMP.chars().count();
        for v in 0..=255usize {
            let integer = v * (len - 1) / 255;
            let float = ((len - 1) as f64 * (v as f64 / 255.0)) as usize;
            assert_eq!(integer, float, "divergence à la luminosité {v}");
        }
    }

    #[test]
    fn short_charset_falls_back() {
        let ramp = GlyphRamp::new("@");
        assert_eq!(ramp.map(0), '`');
        assert_eq!(ramp.map(255), '$');
    }
}
