//! Color utility functions for the galaxy canvas.

use ratatui::style::Color;

/// An opaque RGB triple.
pub type Rgb = (u8, u8, u8);

/// Resolve a terminal color to RGB so it can be blended.
///
/// Named colors use the xterm defaults, `Reset` resolves to black.
pub fn to_rgb(color: Color) -> Rgb {
    match color {
        Color::Reset | Color::Black => (0, 0, 0),
        Color::Red => (205, 0, 0),
        Color::Green => (0, 205, 0),
        Color::Yellow => (205, 205, 0),
        Color::Blue => (0, 0, 238),
        Color::Magenta => (205, 0, 205),
        Color::Cyan => (0, 205, 205),
        Color::Gray => (229, 229, 229),
        Color::DarkGray => (127, 127, 127),
        Color::LightRed => (255, 0, 0),
        Color::LightGreen => (0, 255, 0),
        Color::LightYellow => (255, 255, 0),
        Color::LightBlue => (92, 92, 255),
        Color::LightMagenta => (255, 0, 255),
        Color::LightCyan => (0, 255, 255),
        Color::White => (255, 255, 255),
        Color::Rgb(r, g, b) => (r, g, b),
        Color::Indexed(index) => indexed_to_rgb(index),
    }
}

fn indexed_to_rgb(index: u8) -> Rgb {
    const ANSI: [Color; 16] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::Gray,
        Color::DarkGray,
        Color::LightRed,
        Color::LightGreen,
        Color::LightYellow,
        Color::LightBlue,
        Color::LightMagenta,
        Color::LightCyan,
        Color::White,
    ];
    const LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

    match index {
        0..=15 => to_rgb(ANSI[index as usize]),
        16..=231 => {
            let i = (index - 16) as usize;
            (LEVELS[i / 36], LEVELS[(i / 6) % 6], LEVELS[i % 6])
        }
        _ => {
            let v = 8 + (index - 232) * 10;
            (v, v, v)
        }
    }
}

/// Blend `src` over `dst` with the given alpha (0.0-1.0).
pub fn blend(src: Rgb, dst: Rgb, alpha: f32) -> Rgb {
    let alpha = alpha.clamp(0.0, 1.0);
    let mix = |s: u8, d: u8| (s as f32 * alpha + d as f32 * (1.0 - alpha)).round() as u8;
    (mix(src.0, dst.0), mix(src.1, dst.1), mix(src.2, dst.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rgb_passthrough() {
        assert_eq!(to_rgb(Color::Rgb(1, 2, 3)), (1, 2, 3));
        assert_eq!(to_rgb(Color::White), (255, 255, 255));
        assert_eq!(to_rgb(Color::Reset), (0, 0, 0));
    }

    #[test]
    fn test_indexed_palette() {
        assert_eq!(to_rgb(Color::Indexed(15)), (255, 255, 255));
        assert_eq!(to_rgb(Color::Indexed(16)), (0, 0, 0));
        assert_eq!(to_rgb(Color::Indexed(231)), (255, 255, 255));
        assert_eq!(to_rgb(Color::Indexed(232)), (8, 8, 8));
        assert_eq!(to_rgb(Color::Indexed(255)), (238, 238, 238));
    }

    #[test]
    fn test_blend() {
        let white = (255, 255, 255);
        let black = (0, 0, 0);
        assert_eq!(blend(white, black, 0.0), black);
        assert_eq!(blend(white, black, 1.0), white);
        assert_eq!(blend(white, black, 0.5), (128, 128, 128));
        // Alpha is clamped
        assert_eq!(blend(white, black, 3.0), white);
    }
}
