use serde::{Deserialize, Serialize};

fn default_alpha() -> f32 {
    1.0
}

/// A normalized RGBA color. Channels are expected in `[0.0, 1.0]`; the
/// model performs no clamping, callers supply in-range values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    #[serde(default = "default_alpha")]
    pub alpha: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 0.0,
    };

    pub fn new(red: f32, green: f32, blue: f32) -> Color {
        Color {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }

    pub fn with_alpha(red: f32, green: f32, blue: f32, alpha: f32) -> Color {
        Color {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// The toolkit-native 8-bit-per-channel representation, rounded to
    /// nearest.
    pub fn to_toolkit(&self) -> [u8; 4] {
        [
            (self.red * 255.0).round() as u8,
            (self.green * 255.0).round() as u8,
            (self.blue * 255.0).round() as u8,
            (self.alpha * 255.0).round() as u8,
        ]
    }

    /// Inverse of [`Color::to_toolkit`]. Lossy beyond float precision,
    /// but stable through another `to_toolkit` round.
    pub fn from_toolkit(bytes: [u8; 4]) -> Color {
        Color {
            red: bytes[0] as f32 / 255.0,
            green: bytes[1] as f32 / 255.0,
            blue: bytes[2] as f32 / 255.0,
            alpha: bytes[3] as f32 / 255.0,
        }
    }

    /// Builds an opaque color from a `0xRRGGBB` literal.
    pub fn from_hex_rgb(hex: u32) -> Color {
        Color::from_toolkit([
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            0xFF,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_toolkit_rounds_to_nearest() {
        let color = Color::with_alpha(1.0, 0.0, 0.5, 1.0);
        assert_eq!(color.to_toolkit(), [255, 0, 128, 255]);
    }

    #[test]
    fn byte_round_trip_is_stable() {
        for r in 0..=255u8 {
            let bytes = [r, r.wrapping_add(17), r.wrapping_mul(3), 255 - r];
            let color = Color::from_toolkit(bytes);
            assert_eq!(color.to_toolkit(), bytes);
            assert_eq!(Color::from_toolkit(color.to_toolkit()).to_toolkit(), bytes);
        }
    }

    #[test]
    fn float_construction_round_trips_through_bytes() {
        for step in 0..=100 {
            let v = step as f32 / 100.0;
            let color = Color::with_alpha(v, 1.0 - v, v / 2.0, v);
            let bytes = color.to_toolkit();
            assert_eq!(Color::from_toolkit(bytes).to_toolkit(), bytes);
        }
    }

    #[test]
    fn alpha_defaults_to_opaque() {
        let color: Color = serde_json::from_str(r#"{"red":0.1,"green":0.2,"blue":0.3}"#).unwrap();
        assert_eq!(color.alpha, 1.0);
        assert_eq!(Color::new(0.1, 0.2, 0.3).alpha, 1.0);
    }

    #[test]
    fn hex_construction() {
        assert_eq!(Color::from_hex_rgb(0xFF0080).to_toolkit(), [255, 0, 128, 255]);
    }
}
