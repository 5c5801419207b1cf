// src/text.rs

use crate::shapes::{rectangle, Shape};

/// Renders a text label as geometry, centered on (x, y).
///
/// Glyphs are plain filled blocks: good enough for silkscreen-style
/// reference labels, and downstream consumers treat the result as an
/// opaque shape anyway. `size` is the glyph height in board units.
pub fn render_text(text: &str, x: f32, y: f32, size: f32) -> Shape {
    let glyph_w = 0.6 * size;
    let advance = 0.8 * size;

    let n = text.chars().count();
    if n == 0 || size <= 0.0 {
        return Shape::empty();
    }

    // Total width spans n advances minus the trailing gap.
    let total_w = advance * n as f32 - (advance - glyph_w);
    let mut out = Shape::empty();
    let mut cx = x - total_w / 2.0 + glyph_w / 2.0;

    for c in text.chars() {
        if !c.is_whitespace() {
            let glyph = rectangle(
                cx - glyph_w / 2.0,
                cx + glyph_w / 2.0,
                y - size / 2.0,
                y + size / 2.0,
            );
            out = out.union(glyph);
        }
        cx += advance;
    }
    out
}
