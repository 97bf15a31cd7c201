//! Region node types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a region node (usually the segmentation label).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(value: u32) -> Self {
        NodeId(value)
    }
}

/// Classified region color.
///
/// Segmented images arrive either already binarized (`0`/`1`) or as 8-bit
/// masks (`0`/`255`). Both white encodings classify the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeanColor {
    /// Background region (raw value `0`).
    Black,
    /// Foreground region (raw value `1` or `255`).
    White,
}

impl MeanColor {
    /// Raw values accepted by [`MeanColor::classify`].
    pub const RAW_DOMAIN: &'static [u8] = &[0, 1, 255];

    /// Classifies a raw mean color value.
    ///
    /// Returns `None` for anything outside `{0, 1, 255}`.
    pub fn classify(raw: u8) -> Option<MeanColor> {
        match raw {
            0 => Some(MeanColor::Black),
            1 | 255 => Some(MeanColor::White),
            _ => None,
        }
    }

    /// Returns the color as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            MeanColor::Black => "black",
            MeanColor::White => "white",
        }
    }
}

/// Node attributes read by the vectorizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Shape signature scalar.
    Weight,
    /// Raw mean color of the region.
    MeanColor,
    /// Region area in pixels.
    PixelCount,
}

impl Attribute {
    /// Returns the attribute name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Weight => "weight",
            Attribute::MeanColor => "mean color",
            Attribute::PixelCount => "pixel count",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A region of a segmented image.
///
/// Attributes are optional because the graph builder attaches them in stages:
/// color and area come with the adjacency graph, signatures are computed per
/// region afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionNode {
    /// Node identity.
    pub id: NodeId,
    /// Shape signature (e.g. surface-to-volume ratio).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Raw mean color, expected in `{0, 1, 255}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean_color: Option<u8>,
    /// Region area in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_count: Option<u64>,
}

impl RegionNode {
    /// Creates a node with no attributes.
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            weight: None,
            mean_color: None,
            pixel_count: None,
        }
    }

    /// Creates a fully attributed node.
    pub fn region(id: impl Into<NodeId>, weight: f64, mean_color: u8, pixel_count: u64) -> Self {
        Self {
            id: id.into(),
            weight: Some(weight),
            mean_color: Some(mean_color),
            pixel_count: Some(pixel_count),
        }
    }

    /// Sets the signature weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Sets the raw mean color.
    pub fn with_mean_color(mut self, mean_color: u8) -> Self {
        self.mean_color = Some(mean_color);
        self
    }

    /// Sets the pixel count.
    pub fn with_pixel_count(mut self, pixel_count: u64) -> Self {
        self.pixel_count = Some(pixel_count);
        self
    }

    /// Classified color, if present and inside the valid domain.
    pub fn color(&self) -> Option<MeanColor> {
        self.mean_color.and_then(MeanColor::classify)
    }

    /// Returns true if every attribute is set.
    pub fn is_complete(&self) -> bool {
        self.weight.is_some() && self.mean_color.is_some() && self.pixel_count.is_some()
    }
}
