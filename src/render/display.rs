//! Display sizing hints.
//!
//! The engine has no opinion about pixels; these helpers carry the
//! widget's rule of shrinking the value font once the text outgrows
//! the display.

use serde::{Deserialize, Serialize};

/// Tunable sizing for the live value line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// Font size used while the text fits.
    pub base_font_px: f32,
    /// Smallest size the font shrinks to.
    pub min_font_px: f32,
    /// Number of characters that fit at the base size.
    pub fit_chars: usize,
    /// Size lost per character beyond `fit_chars`.
    pub shrink_per_char_px: f32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            base_font_px: 36.0,
            min_font_px: 18.0,
            fit_chars: 12,
            shrink_per_char_px: 1.6,
        }
    }
}

impl DisplayOptions {
    /// Font size for a value line of `len` characters.
    pub fn font_px(&self, len: usize) -> f32 {
        if len <= self.fit_chars {
            return self.base_font_px;
        }
        let shrink = (len - self.fit_chars) as f32 * self.shrink_per_char_px;
        (self.base_font_px - shrink).max(self.min_font_px)
    }
}
