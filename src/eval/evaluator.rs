use crate::{
    channel::composer::ItemComposer,
    channel::set::{Channel, ChannelSet},
    foundation::core::Progress,
    foundation::error::ScrollyteResult,
    scene::model::RegionDef,
    section::partition::{Partition, Section},
};

/// Compiled form of one region: its partition plus one composer per item.
///
/// Building a program front-loads the per-definition work (partition
/// realization, curve map assembly) so per-frame evaluation is pure lookup
/// and interpolation.
#[derive(Clone, Debug)]
pub struct RegionProgram {
    partition: Partition,
    items: Vec<(String, ItemComposer)>,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Evaluated channel values for one item at one progress snapshot.
pub struct ItemFrame {
    /// Item identifier from the scene definition.
    pub item_id: String,
    /// Item index in definition order.
    pub index: usize,
    /// Channel values at this snapshot.
    pub channels: ChannelSet,
}

impl RegionProgram {
    /// Compile a validated region definition.
    pub fn new(region: &RegionDef) -> ScrollyteResult<Self> {
        let partition = region.partition.build()?;
        let items = region
            .items
            .iter()
            .map(|item| {
                let mut composer = ItemComposer::new();
                for track in &item.channels {
                    track.curve.validate()?;
                    composer.insert(track.channel, track.curve.clone());
                }
                Ok((item.id.clone(), composer))
            })
            .collect::<ScrollyteResult<Vec<_>>>()?;
        Ok(Self { partition, items })
    }

    /// Section covering item `index`.
    pub fn section(&self, index: usize) -> Option<&Section> {
        self.partition.get(index)
    }

    /// Number of items this program evaluates.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the program has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[tracing::instrument(skip(program))]
/// Evaluate every item of a region at one progress snapshot.
///
/// Curves are defined over the region's global progress domain, so the raw
/// progress value feeds every composer directly. Frames come back in
/// painter's order: ascending z (an item's `ZIndex` channel if present,
/// its definition index otherwise), definition order breaking ties.
pub fn evaluate_region(program: &RegionProgram, progress: Progress) -> Vec<ItemFrame> {
    let mut frames: Vec<ItemFrame> = program
        .items
        .iter()
        .enumerate()
        .map(|(index, (item_id, composer))| ItemFrame {
            item_id: item_id.clone(),
            index,
            channels: composer.compose(progress),
        })
        .collect();

    frames.sort_by(|a, b| {
        let za = a.channels.get(Channel::ZIndex).unwrap_or(a.index as f64);
        let zb = b.channels.get(Channel::ZIndex).unwrap_or(b.index as f64);
        za.total_cmp(&zb).then(a.index.cmp(&b.index))
    });
    frames
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
