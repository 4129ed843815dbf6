//! Declarative scene description.
//!
//! A [`SceneDef`] names every scroll-tracked region, marquee row and
//! visibility gate of a page. Definitions round-trip through serde, so a
//! scene can live in a JSON file; [`SceneDef::validate`] must be called
//! after deserialization because serde does not run the invariant checks.

use crate::{
    animation::{curve::Curve, spring::SpringConfig},
    channel::set::Channel,
    foundation::error::{ScrollyteError, ScrollyteResult},
    marquee::driver::MarqueeConfig,
    progress::tracker::TrackWindow,
    section::partition::Partition,
};

/// One channel track inside an item: a curve that feeds a channel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChannelTrackDef {
    /// Target channel.
    pub channel: Channel,
    /// Curve over the item's local progress domain.
    pub curve: Curve,
}

/// One animated item inside a region.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ItemDef {
    /// Stable identifier, unique within the region.
    pub id: String,
    /// Channel tracks evaluated against the region's progress.
    pub channels: Vec<ChannelTrackDef>,
}

/// How a region's progress domain is split across its items.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PartitionDef {
    /// `count` equal tiles covering `[0, 1]`.
    Equal {
        /// Number of tiles; must match the region's item count.
        count: usize,
    },
    /// Explicit, possibly overlapping `(start, end)` windows.
    Custom {
        /// One window per item, in item order.
        windows: Vec<(f64, f64)>,
    },
}

impl PartitionDef {
    /// Realize the partition this definition describes.
    pub fn build(&self) -> ScrollyteResult<Partition> {
        match self {
            PartitionDef::Equal { count } => Partition::equal(*count),
            PartitionDef::Custom { windows } => Partition::custom(windows),
        }
    }

    fn len(&self) -> usize {
        match self {
            PartitionDef::Equal { count } => *count,
            PartitionDef::Custom { windows } => windows.len(),
        }
    }
}

/// One scroll-tracked region of the page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RegionDef {
    /// Stable identifier, unique within the scene.
    pub id: String,
    /// Which scroll span maps to progress `[0, 1]`.
    pub window: TrackWindow,
    /// Optional spring smoothing applied to the region's raw progress.
    #[serde(default)]
    pub spring: Option<SpringConfig>,
    /// How the progress domain is split across the items.
    pub partition: PartitionDef,
    /// Items in partition order.
    pub items: Vec<ItemDef>,
}

/// One velocity-driven marquee row.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MarqueeRowDef {
    /// Stable identifier, unique within the scene.
    pub id: String,
    /// Driver configuration.
    #[serde(flatten)]
    pub config: MarqueeConfig,
}

/// One scroll-depth visibility gate.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GateDef {
    /// Stable identifier, unique within the scene.
    pub id: String,
    /// Fraction of the viewport height the scroll must exceed.
    pub threshold: f64,
}

/// A complete scroll scene.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneDef {
    /// Human-readable scene name.
    pub name: String,
    /// Scroll-tracked regions.
    #[serde(default)]
    pub regions: Vec<RegionDef>,
    /// Marquee rows.
    #[serde(default)]
    pub marquees: Vec<MarqueeRowDef>,
    /// Visibility gates.
    #[serde(default)]
    pub gates: Vec<GateDef>,
}

impl SceneDef {
    /// Check every invariant the serde derive cannot.
    ///
    /// Errors name the offending region, item, row or gate id.
    pub fn validate(&self) -> ScrollyteResult<()> {
        if self.name.trim().is_empty() {
            return Err(ScrollyteError::scene("scene name must be non-empty"));
        }

        check_unique_ids("region", self.regions.iter().map(|r| r.id.as_str()))?;
        check_unique_ids("marquee", self.marquees.iter().map(|m| m.id.as_str()))?;
        check_unique_ids("gate", self.gates.iter().map(|g| g.id.as_str()))?;

        for region in &self.regions {
            region.validate()?;
        }
        for row in &self.marquees {
            row.config
                .validate()
                .map_err(|e| ScrollyteError::scene(format!("marquee '{}': {e}", row.id)))?;
        }
        for gate in &self.gates {
            if !(gate.threshold > 0.0 && gate.threshold <= 1.0) {
                return Err(ScrollyteError::scene(format!(
                    "gate '{}': threshold must be in (0, 1]",
                    gate.id
                )));
            }
        }
        Ok(())
    }

    /// Look up a region by id.
    pub fn region(&self, id: &str) -> Option<&RegionDef> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Look up a marquee row by id.
    pub fn marquee(&self, id: &str) -> Option<&MarqueeRowDef> {
        self.marquees.iter().find(|m| m.id == id)
    }
}

impl RegionDef {
    fn validate(&self) -> ScrollyteResult<()> {
        let scoped = |e: ScrollyteError| ScrollyteError::scene(format!("region '{}': {e}", self.id));

        if self.partition.len() != self.items.len() {
            return Err(ScrollyteError::scene(format!(
                "region '{}': partition has {} sections but {} items",
                self.id,
                self.partition.len(),
                self.items.len()
            )));
        }
        self.partition.build().map_err(scoped)?;

        if let Some(spring) = &self.spring {
            spring.validate().map_err(scoped)?;
        }

        check_unique_ids("item", self.items.iter().map(|i| i.id.as_str()))
            .map_err(|e| ScrollyteError::scene(format!("region '{}': {e}", self.id)))?;

        for item in &self.items {
            for track in &item.channels {
                track.curve.validate().map_err(|e| {
                    ScrollyteError::scene(format!(
                        "region '{}' item '{}' channel {:?}: {e}",
                        self.id, item.id, track.channel
                    ))
                })?;
            }
        }
        Ok(())
    }
}

fn check_unique_ids<'a>(
    kind: &str,
    ids: impl Iterator<Item = &'a str>,
) -> ScrollyteResult<()> {
    let mut seen = std::collections::BTreeSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(ScrollyteError::scene(format!("{kind} id must be non-empty")));
        }
        if !seen.insert(id) {
            return Err(ScrollyteError::scene(format!("duplicate {kind} id '{id}'")));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
