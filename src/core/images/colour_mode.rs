use std::fmt;

/// Colour layout of a source image before conversion to RGBA.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColourMode {
    Rgba,
    Rgb,
    Grayscale,
    GrayscaleAlpha,
    Indexed,
}

impl ColourMode {
    /// Only colour images with an alpha channel can be shown as-is on the overlay.
    #[must_use]
    pub fn has_colour_and_alpha(self) -> bool {
        matches!(self, Self::Rgba)
    }

    #[must_use]
    pub fn from_png(colour_type: png::ColorType) -> Self {
        match colour_type {
            png::ColorType::Rgba => Self::Rgba,
            png::ColorType::Rgb => Self::Rgb,
            png::ColorType::Grayscale => Self::Grayscale,
            png::ColorType::GrayscaleAlpha => Self::GrayscaleAlpha,
            png::ColorType::Indexed => Self::Indexed,
        }
    }

    #[must_use]
    pub fn from_decoded(colour_type: image::ColorType) -> Self {
        match (colour_type.has_color(), colour_type.has_alpha()) {
            (true, true) => Self::Rgba,
            (true, false) => Self::Rgb,
            (false, true) => Self::GrayscaleAlpha,
            (false, false) => Self::Grayscale,
        }
    }
}

impl fmt::Display for ColourMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rgba => "RGBA",
            Self::Rgb => "RGB",
            Self::Grayscale => "L",
            Self::GrayscaleAlpha => "LA",
            Self::Indexed => "P",
        };

        write!(f, "{name}")
    }
}
