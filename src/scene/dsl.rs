//! Builder DSL for assembling a [`SceneDef`] in code.

use crate::{
    animation::{curve::Curve, spring::SpringConfig},
    channel::set::Channel,
    foundation::error::ScrollyteResult,
    marquee::driver::MarqueeConfig,
    progress::tracker::TrackWindow,
    scene::model::{
        ChannelTrackDef, GateDef, ItemDef, MarqueeRowDef, PartitionDef, RegionDef, SceneDef,
    },
};

/// Builder for [`SceneDef`].
pub struct SceneBuilder {
    name: String,
    regions: Vec<RegionDef>,
    marquees: Vec<MarqueeRowDef>,
    gates: Vec<GateDef>,
}

impl SceneBuilder {
    /// Create a builder for a new scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            regions: Vec::new(),
            marquees: Vec::new(),
            gates: Vec::new(),
        }
    }

    /// Append a finished region.
    pub fn region(mut self, region: RegionDef) -> Self {
        self.regions.push(region);
        self
    }

    /// Append a marquee row.
    pub fn marquee(mut self, id: impl Into<String>, config: MarqueeConfig) -> Self {
        self.marquees.push(MarqueeRowDef {
            id: id.into(),
            config,
        });
        self
    }

    /// Append a visibility gate.
    pub fn gate(mut self, id: impl Into<String>, threshold: f64) -> Self {
        self.gates.push(GateDef {
            id: id.into(),
            threshold,
        });
        self
    }

    /// Build and validate the final [`SceneDef`].
    pub fn build(self) -> ScrollyteResult<SceneDef> {
        let scene = SceneDef {
            name: self.name,
            regions: self.regions,
            marquees: self.marquees,
            gates: self.gates,
        };
        scene.validate()?;
        Ok(scene)
    }
}

/// Builder for [`RegionDef`].
pub struct RegionBuilder {
    id: String,
    window: TrackWindow,
    spring: Option<SpringConfig>,
    partition: PartitionDef,
    items: Vec<ItemDef>,
}

impl RegionBuilder {
    /// Create a builder for a region tracked over `window`.
    ///
    /// The partition defaults to equal tiling over however many items are
    /// added; call [`partition`](Self::partition) to override.
    pub fn new(id: impl Into<String>, window: TrackWindow) -> Self {
        Self {
            id: id.into(),
            window,
            spring: None,
            partition: PartitionDef::Equal { count: 0 },
            items: Vec::new(),
        }
    }

    /// Smooth the region's progress through a spring.
    pub fn spring(mut self, config: SpringConfig) -> Self {
        self.spring = Some(config);
        self
    }

    /// Override the default equal partition.
    pub fn partition(mut self, partition: PartitionDef) -> Self {
        self.partition = partition;
        self
    }

    /// Append a finished item.
    pub fn item(mut self, item: ItemDef) -> Self {
        self.items.push(item);
        self
    }

    /// Finish the region. Invariants are checked later by
    /// [`SceneDef::validate`].
    pub fn build(self) -> RegionDef {
        let partition = match self.partition {
            PartitionDef::Equal { count: 0 } => PartitionDef::Equal {
                count: self.items.len(),
            },
            other => other,
        };
        RegionDef {
            id: self.id,
            window: self.window,
            spring: self.spring,
            partition,
            items: self.items,
        }
    }
}

/// Builder for [`ItemDef`].
pub struct ItemBuilder {
    id: String,
    channels: Vec<ChannelTrackDef>,
}

impl ItemBuilder {
    /// Create a builder for an item.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            channels: Vec::new(),
        }
    }

    /// Drive `channel` with `curve`.
    pub fn channel(mut self, channel: Channel, curve: Curve) -> Self {
        self.channels.push(ChannelTrackDef { channel, curve });
        self
    }

    /// Finish the item.
    pub fn build(self) -> ItemDef {
        ItemDef {
            id: self.id,
            channels: self.channels,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/dsl.rs"]
mod tests;
