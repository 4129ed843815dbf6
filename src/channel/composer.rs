use std::collections::BTreeMap;

use crate::{
    animation::curve::Curve,
    channel::set::{Channel, ChannelSet},
    foundation::core::Progress,
    foundation::error::{ScrollyteError, ScrollyteResult},
    section::partition::Section,
};

/// Evaluates an independent [`Curve`] per channel for one visual item.
///
/// One [`compose`](ItemComposer::compose) call evaluates every channel from
/// the same progress snapshot, so channels of one item can never tear.
#[derive(Clone, Debug, Default)]
pub struct ItemComposer {
    curves: BTreeMap<Channel, Curve>,
}

impl ItemComposer {
    /// Empty composer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a curve for `channel`, replacing any previous one.
    pub fn with(mut self, channel: Channel, curve: Curve) -> Self {
        self.curves.insert(channel, curve);
        self
    }

    /// Insert a curve for `channel`.
    pub fn insert(&mut self, channel: Channel, curve: Curve) {
        self.curves.insert(channel, curve);
    }

    /// Channels this composer produces.
    pub fn channels(&self) -> impl Iterator<Item = Channel> + '_ {
        self.curves.keys().copied()
    }

    /// Curve registered for `channel`, if any.
    pub fn curve(&self, channel: Channel) -> Option<&Curve> {
        self.curves.get(&channel)
    }

    /// Evaluate every channel at one progress snapshot.
    pub fn compose(&self, progress: Progress) -> ChannelSet {
        let x = progress.value();
        self.curves
            .iter()
            .map(|(&channel, curve)| (channel, curve.evaluate(x)))
            .collect()
    }
}

/// Symmetric fade across a section's boundaries: a 4-breakpoint opacity curve
/// `[start, start+margin, end-margin, end]` mapping to
/// `[lead_in, 1, 1, tail_out]`.
///
/// The first item of a sectioned region typically passes `lead_in = 1.0` so it
/// is already visible when the region pins.
pub fn fade_curve(
    section: &Section,
    margin: f64,
    lead_in: f64,
    tail_out: f64,
) -> ScrollyteResult<Curve> {
    if !(margin > 0.0 && margin.is_finite()) {
        return Err(ScrollyteError::validation("fade margin must be > 0"));
    }
    if 2.0 * margin > section.span() {
        return Err(ScrollyteError::validation(
            "fade margin must fit twice within the section",
        ));
    }
    Curve::from_pairs(
        &[
            section.start,
            section.start + margin,
            section.end - margin,
            section.end,
        ],
        &[lead_in, 1.0, 1.0, tail_out],
    )
}

/// A scale (or any single-channel) curve from explicit breakpoint/value
/// literals anchored at a section start.
///
/// Offsets are added to `section.start` and then pinned to a running maximum,
/// so configurations whose literal tail re-lists the (numerically smaller)
/// section end stay non-decreasing while keeping every observable value. The
/// hero item's 6-point escalation relies on this: its dwell window extends
/// well past the item's nominal slot, deliberately.
pub fn anchored_curve(section: &Section, offsets: &[f64], values: &[f64]) -> ScrollyteResult<Curve> {
    let mut breakpoints = Vec::with_capacity(offsets.len());
    let mut pin = f64::NEG_INFINITY;
    for &offset in offsets {
        pin = pin.max(section.start + offset);
        breakpoints.push(pin);
    }
    Curve::from_pairs(&breakpoints, values)
}

#[cfg(test)]
#[path = "../../tests/unit/channel/composer.rs"]
mod tests;
