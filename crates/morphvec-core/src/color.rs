//! Color sign: maps a region's classified color to a ±1 multiplier.

use morphvec_graph::MeanColor;

use crate::error::VectorizeError;

/// Sign multiplier of a classified color.
pub fn sign_of(color: MeanColor) -> f64 {
    match color {
        MeanColor::Black => -1.0,
        MeanColor::White => 1.0,
    }
}

/// Sign multiplier of a raw mean color.
///
/// `0` is background (`-1`); `1` and `255` are foreground (`+1`). Anything
/// else is rejected.
///
/// # Example
/// ```
/// use morphvec_core::color_sign;
///
/// assert_eq!(color_sign(0).unwrap(), -1.0);
/// assert_eq!(color_sign(255).unwrap(), 1.0);
/// assert!(color_sign(128).is_err());
/// ```
pub fn color_sign(raw: u8) -> Result<f64, VectorizeError> {
    MeanColor::classify(raw)
        .map(sign_of)
        .ok_or(VectorizeError::InvalidColor {
            value: raw,
            node: None,
        })
}
