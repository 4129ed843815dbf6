use std::collections::BTreeMap;

use crate::foundation::core::{Affine, Vec2};

/// One named visual output quantity.
///
/// Translation comes in two flavors because the original design mixes units:
/// [`Channel::TranslateY`] carries pixels, [`Channel::TranslateYPercent`]
/// carries percent of the element height. The render boundary owns unit
/// application; here both are plain numbers.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Opacity in `[0, 1]`.
    Opacity,
    /// Uniform scale factor.
    Scale,
    /// Horizontal translation in pixels.
    TranslateX,
    /// Vertical translation in pixels.
    TranslateY,
    /// Vertical translation in percent of element height.
    TranslateYPercent,
    /// Rotation around the x axis in degrees.
    RotateX,
    /// Rotation around the y axis in degrees.
    RotateY,
    /// Rotation around the z axis (in-plane) in degrees.
    RotateZ,
    /// Stacking order.
    ZIndex,
    /// Perspective distance in pixels.
    Perspective,
}

/// Current value per channel for one item, recomputed per progress sample.
///
/// A `ChannelSet` has no identity beyond "this item's values this frame".
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ChannelSet {
    values: BTreeMap<Channel, f64>,
}

impl ChannelSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one channel's value.
    pub fn set(&mut self, channel: Channel, value: f64) {
        self.values.insert(channel, value);
    }

    /// Value for `channel`, if any curve produced one.
    pub fn get(&self, channel: Channel) -> Option<f64> {
        self.values.get(&channel).copied()
    }

    /// Opacity, defaulting to fully opaque.
    pub fn opacity(&self) -> f64 {
        self.get(Channel::Opacity).unwrap_or(1.0)
    }

    /// Uniform scale, defaulting to 1.
    pub fn scale(&self) -> f64 {
        self.get(Channel::Scale).unwrap_or(1.0)
    }

    /// Iterate channels in stable order.
    pub fn iter(&self) -> impl Iterator<Item = (Channel, f64)> + '_ {
        self.values.iter().map(|(&c, &v)| (c, v))
    }

    /// Number of populated channels.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no channel is populated.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Assemble the 2D-transform subset (pixel translation, in-plane rotation,
    /// uniform scale) as an affine for render boundaries that consume
    /// matrices. Canonical order: translate, then rotate, then scale.
    pub fn to_affine(&self) -> Affine {
        let translate = Vec2::new(
            self.get(Channel::TranslateX).unwrap_or(0.0),
            self.get(Channel::TranslateY).unwrap_or(0.0),
        );
        let rotation_rad = self.get(Channel::RotateZ).unwrap_or(0.0).to_radians();
        let scale = self.scale();

        Affine::translate(translate) * Affine::rotate(rotation_rad) * Affine::scale(scale)
    }
}

impl FromIterator<(Channel, f64)> for ChannelSet {
    fn from_iter<I: IntoIterator<Item = (Channel, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
