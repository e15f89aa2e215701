//! Fixed arc palette
//!
//! One stroke color per arc, violet fading to blue from the innermost arc
//! out. The palette length defines the arc count; `consts::ARC_COUNT` must
//! stay in sync.

/// Per-arc stroke colors, innermost first
pub const ARC_COLORS: [&str; 21] = [
    "#ed7bef", "#e47ef3", "#db82f6", "#d285f9", "#c888fc", "#be8afd", "#b48dff",
    "#aa8fff", "#a091ff", "#9693ff", "#8c95fe", "#8197fc", "#7798fa", "#6d99f8",
    "#639af5", "#589bf2", "#4e9cee", "#459cea", "#3b9de6", "#319de1", "#289ddc",
];

/// Fill color for the orbiting dots
pub const DOT_COLOR: &str = "white";

/// Stroke color for the baseline
pub const BASELINE_COLOR: &str = "white";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ARC_COUNT;

    #[test]
    fn test_palette_matches_arc_count() {
        assert_eq!(ARC_COLORS.len(), ARC_COUNT);
    }

    #[test]
    fn test_colors_are_hex_triplets() {
        for color in ARC_COLORS {
            assert!(color.starts_with('#') && color.len() == 7, "bad color {color}");
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }
}
