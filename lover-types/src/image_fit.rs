//! Object-fit choice for loaded images.

use serde::{Deserialize, Serialize};

/// Soft fill shown behind letterboxed portrait images.
pub const CONTAIN_BACKGROUND: &str =
    "linear-gradient(90deg, rgba(255,111,165,.06), rgba(155,231,245,.04))";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFit {
    #[default]
    Cover,
    Contain,
}

impl ImageFit {
    /// Portrait images are contained so faces are not cropped; everything
    /// else covers the frame.
    pub fn for_natural_size(width: u32, height: u32) -> Self {
        if height > width {
            ImageFit::Contain
        } else {
            ImageFit::Cover
        }
    }

    pub fn object_fit(&self) -> &'static str {
        match self {
            ImageFit::Cover => "cover",
            ImageFit::Contain => "contain",
        }
    }

    pub fn background(&self) -> Option<&'static str> {
        match self {
            ImageFit::Cover => None,
            ImageFit::Contain => Some(CONTAIN_BACKGROUND),
        }
    }

    /// Inline style fragment for an `img` element.
    pub fn style(&self) -> String {
        match self.background() {
            Some(background) => format!(
                "object-fit: {}; background: {};",
                self.object_fit(),
                background
            ),
            None => format!("object-fit: {};", self.object_fit()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portrait_is_contained() {
        let fit = ImageFit::for_natural_size(600, 900);
        assert_eq!(fit, ImageFit::Contain);
        assert!(fit.style().contains("object-fit: contain"));
        assert!(fit.style().contains("linear-gradient"));
    }

    #[test]
    fn landscape_and_square_cover() {
        assert_eq!(ImageFit::for_natural_size(900, 600), ImageFit::Cover);
        assert_eq!(ImageFit::for_natural_size(500, 500), ImageFit::Cover);
        assert_eq!(ImageFit::Cover.style(), "object-fit: cover;");
    }

    #[test]
    fn unloaded_image_defaults_to_cover() {
        assert_eq!(ImageFit::for_natural_size(0, 0), ImageFit::Cover);
    }
}
