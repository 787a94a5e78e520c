//! Degree/minute/second conversion
//!
//! GPS angles are stored in EXIF as three unsigned rationals plus a
//! one-letter hemisphere reference. This module turns them into signed
//! decimal degrees.

/// Unsigned TIFF rational (numerator / denominator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rational {
    pub numerator: u32,
    pub denominator: u32,
}

impl Rational {
    /// Creates a new rational
    pub fn new(numerator: u32, denominator: u32) -> Self {
        Rational { numerator, denominator }
    }

    /// Evaluates the rational as a float
    ///
    /// A zero denominator evaluates to 0.0. Cameras in the wild write 0/0
    /// for unknown seconds and the rest of the angle is still usable.
    pub fn to_f64(&self) -> f64 {
        if self.denominator == 0 {
            0.0
        } else {
            self.numerator as f64 / self.denominator as f64
        }
    }
}

/// Hemisphere reference of a GPS angle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Parses the ASCII reference letter stored in the GPS IFD
    pub fn from_ref(byte: u8) -> Option<Self> {
        match byte {
            b'N' => Some(Hemisphere::North),
            b'S' => Some(Hemisphere::South),
            b'E' => Some(Hemisphere::East),
            b'W' => Some(Hemisphere::West),
            _ => None,
        }
    }

    /// Sign applied to the decoded magnitude
    pub fn sign(&self) -> f64 {
        match self {
            Hemisphere::North | Hemisphere::East => 1.0,
            Hemisphere::South | Hemisphere::West => -1.0,
        }
    }
}

/// Converts a degrees/minutes/seconds triple to signed decimal degrees
///
/// # Arguments
/// * `dms` - Degrees, minutes and seconds as rationals
/// * `hemisphere` - Reference; `South` and `West` negate the result
///
/// # Returns
/// The angle in decimal degrees, without any rounding
pub fn to_decimal_degrees(dms: &[Rational; 3], hemisphere: Hemisphere) -> f64 {
    let magnitude = dms[0].to_f64() + dms[1].to_f64() / 60.0 + dms[2].to_f64() / 3600.0;
    magnitude * hemisphere.sign()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dms(d: u32, m: u32, s: (u32, u32)) -> [Rational; 3] {
        [Rational::new(d, 1), Rational::new(m, 1), Rational::new(s.0, s.1)]
    }

    #[test]
    fn test_london_latitude() {
        let value = to_decimal_degrees(&dms(51, 30, (26, 1)), Hemisphere::North);
        assert!((value - 51.507222).abs() < 1e-6);
    }

    #[test]
    fn test_hemisphere_sign_law() {
        let angle = dms(12, 34, (5678, 100));
        let magnitude = to_decimal_degrees(&angle, Hemisphere::North);
        assert!(magnitude >= 0.0);

        assert_eq!(to_decimal_degrees(&angle, Hemisphere::East), magnitude);
        assert_eq!(to_decimal_degrees(&angle, Hemisphere::South), -magnitude);
        assert_eq!(to_decimal_degrees(&angle, Hemisphere::West), -magnitude);
    }

    #[test]
    fn test_zero_denominator_counts_as_zero() {
        let with_zero = to_decimal_degrees(&dms(10, 30, (15, 0)), Hemisphere::North);
        assert_eq!(with_zero, 10.5);
        assert_eq!(Rational::new(7, 0).to_f64(), 0.0);
    }

    #[test]
    fn test_fractional_seconds_are_not_rounded() {
        // 0°0'0.0036" is 1e-6 degrees
        let value = to_decimal_degrees(&dms(0, 0, (36, 10000)), Hemisphere::East);
        assert!((value - 1e-6).abs() < 1e-12);
    }

    #[test]
    fn test_reference_parsing() {
        assert_eq!(Hemisphere::from_ref(b'N'), Some(Hemisphere::North));
        assert_eq!(Hemisphere::from_ref(b'W'), Some(Hemisphere::West));
        assert_eq!(Hemisphere::from_ref(b'n'), None);
        assert_eq!(Hemisphere::from_ref(0), None);
    }
}
