//! RGB color value with arithmetic components.

use serde::{Deserialize, Serialize};

/// A color with red/green/blue components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// Create from arithmetic components in [0, 1].
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create from 8-bit components.
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Convert to 8-bit components, rounding and clamping.
    pub fn to_u8(&self) -> (u8, u8, u8) {
        let q = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }

    /// Linear interpolation toward `other` by `t` in [0, 1].
    pub fn lerp(&self, other: &Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        Rgb {
            r: self.r * (1.0 - t) + other.r * t,
            g: self.g * (1.0 - t) + other.g * t,
            b: self.b * (1.0 - t) + other.b * t,
        }
    }

    /// Convert from HSV: hue in degrees, saturation and value in [0, 1].
    pub fn from_hsv(hue_deg: f64, saturation: f64, value: f64) -> Self {
        let h = hue_deg.rem_euclid(360.0) / 60.0;
        let s = saturation.clamp(0.0, 1.0);
        let v = value.clamp(0.0, 1.0);

        let i = h.floor();
        let f = h - i;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match i as i32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Self { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints_exact() {
        let a = Rgb::new(0.0, 0.25, 1.0);
        let b = Rgb::new(1.0, 0.75, 0.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(Rgb::from_hsv(0.0, 1.0, 1.0), Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(Rgb::from_hsv(120.0, 1.0, 1.0), Rgb::new(0.0, 1.0, 0.0));
        assert_eq!(Rgb::from_hsv(240.0, 1.0, 1.0), Rgb::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_hsv_grayscale_when_unsaturated() {
        let gray = Rgb::from_hsv(200.0, 0.0, 0.5);
        assert_eq!(gray, Rgb::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_u8_roundtrip() {
        let c = Rgb::from_u8(12, 200, 255);
        assert_eq!(c.to_u8(), (12, 200, 255));
    }
}
