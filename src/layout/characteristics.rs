use crate::error::LayoutError;

use super::HorizonSpec;

/// A 24-bit `0xRRGGBB` display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// Parses six hex digits (`"905020"`), with or without a `0x` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidFaceSpec`] if the text is not a 24-bit hex
    /// value.
    pub fn from_hex(text: &str) -> Result<Self, LayoutError> {
        let digits = text.strip_prefix("0x").unwrap_or(text);
        let hex = digits.chars().all(|c| c.is_ascii_hexdigit());
        if digits.is_empty() || digits.len() > 6 || !hex {
            return Err(LayoutError::InvalidFaceSpec(format!("bad color `{text}`")));
        }
        u32::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| LayoutError::InvalidFaceSpec(format!("bad color `{text}`")))
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn red(self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn green(self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn blue(self) -> u8 {
        (self.0 & 0xff) as u8
    }
}

/// Unit in which a layout's lengths were authored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthUnit {
    /// The internal unit.
    #[default]
    Millimeters,
    Inches,
}

impl LengthUnit {
    /// Factor converting one of this unit into millimetres.
    #[must_use]
    pub fn to_millimeters(self) -> f64 {
        match self {
            LengthUnit::Millimeters => 1.0,
            LengthUnit::Inches => 25.4,
        }
    }
}

/// Track-wide parameters of a layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Characteristics {
    /// Full width of the running surface.
    pub track_width: f64,
    /// Vertical extent of the track below the path.
    pub track_thickness: f64,
    /// Target length of one piece.
    pub piece_length: f64,
    /// Maximum slope change between adjacent pieces, in radians.
    pub slope_increment: f64,
    pub color: Color,
    pub horizon: HorizonSpec,
}

impl Characteristics {
    /// Creates characteristics with the slope increment authored in degrees.
    #[must_use]
    pub fn new(
        track_width: f64,
        track_thickness: f64,
        piece_length: f64,
        slope_increment_degrees: f64,
        color: Color,
        horizon: HorizonSpec,
    ) -> Self {
        Self {
            track_width,
            track_thickness,
            piece_length,
            slope_increment: slope_increment_degrees.to_radians(),
            color,
            horizon,
        }
    }

    /// Half the track width; the offset from the path to either rim.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.track_width / 2.0
    }

    pub(crate) fn scaled(mut self, factor: f64) -> Self {
        self.track_width *= factor;
        self.track_thickness *= factor;
        self.piece_length *= factor;
        self.horizon.distance *= factor;
        self
    }

    /// Checks that every dimension is finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameter`] naming the first bad value.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let checks = [
            ("track width", self.track_width),
            ("track thickness", self.track_thickness),
            ("piece length", self.piece_length),
            ("slope increment", self.slope_increment),
            ("horizon distance", self.horizon.distance),
        ];
        for (parameter, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::InvalidParameter { parameter, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn horizon() -> HorizonSpec {
        HorizonSpec::parse(500.0, ["!000000"; 6]).unwrap()
    }

    #[test]
    fn slope_increment_is_stored_in_radians() {
        let c = Characteristics::new(20.0, 5.0, 10.0, 5.0, Color(0), horizon());
        assert_relative_eq!(c.slope_increment, 5.0_f64.to_radians());
    }

    #[test]
    fn color_channels() {
        let c = Color::from_hex("0x905020").unwrap();
        assert_eq!((c.red(), c.green(), c.blue()), (0x90, 0x50, 0x20));
    }

    #[test]
    fn oversized_color_is_rejected() {
        assert!(Color::from_hex("1234567").is_err());
    }

    #[test]
    fn only_one_hex_prefix_is_accepted() {
        assert_eq!(Color::from_hex("905020").unwrap(), Color(0x90_5020));
        assert!(Color::from_hex("0x0x905020").is_err());
        assert!(Color::from_hex("+90502").is_err());
    }

    #[test]
    fn scaling_covers_every_length() {
        let c = Characteristics::new(1.0, 0.5, 2.0, 5.0, Color(0), horizon())
            .scaled(LengthUnit::Inches.to_millimeters());
        assert_relative_eq!(c.track_width, 25.4);
        assert_relative_eq!(c.track_thickness, 12.7);
        assert_relative_eq!(c.piece_length, 50.8);
        assert_relative_eq!(c.horizon.distance, 12_700.0);
        assert_relative_eq!(c.slope_increment, 5.0_f64.to_radians());
    }

    #[test]
    fn zero_piece_length_is_rejected() {
        let c = Characteristics::new(20.0, 5.0, 0.0, 5.0, Color(0), horizon());
        assert_eq!(
            c.validate(),
            Err(LayoutError::InvalidParameter {
                parameter: "piece length",
                value: 0.0
            })
        );
    }
}
