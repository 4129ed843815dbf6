//! The portfolio scene, built from the literal tuning values of the page it
//! describes.
//!
//! Everything here is data: a pinned four-card zoom region, an enter/exit 3D
//! skills container, a spring-smoothed contact region, six scroll-coupled
//! skill marquees plus a fixed-period logo marquee, and two background
//! visibility gates.

use crate::{
    animation::{curve::Curve, spring::SpringConfig},
    channel::composer::{anchored_curve, fade_curve},
    channel::set::Channel,
    foundation::error::ScrollyteResult,
    marquee::driver::MarqueeConfig,
    progress::tracker::TrackWindow,
    scene::dsl::{ItemBuilder, RegionBuilder, SceneBuilder},
    scene::model::{RegionDef, SceneDef},
    section::partition::Partition,
    style::registry::StyleRegistry,
};

/// Name of the gradient keyframes fragment the hero headline uses.
pub const GRADIENT_KEYFRAMES_NAME: &str = "gradient";

/// CSS body of the gradient keyframes fragment.
pub const GRADIENT_KEYFRAMES_BODY: &str = "@keyframes gradient {
  0% { background-position: 0% 50%; }
  50% { background-position: 100% 50%; }
  100% { background-position: 0% 50%; }
}";

/// Register the gradient keyframes in the process-wide style registry.
///
/// Safe to call from every card instance; only the first call inserts.
pub fn ensure_gradient_keyframes() -> bool {
    StyleRegistry::with_global(|registry| {
        registry.ensure(GRADIENT_KEYFRAMES_NAME, GRADIENT_KEYFRAMES_BODY)
    })
}

/// Pointer-tilt curve for rotation around x: pointer y offset in
/// `[-200, 200]` px maps to `[10, -10]` degrees.
pub fn pointer_tilt_x() -> ScrollyteResult<Curve> {
    Curve::from_pairs(&[-200.0, 200.0], &[10.0, -10.0])
}

/// Pointer-tilt curve for rotation around y: pointer x offset in
/// `[-200, 200]` px maps to `[-10, 10]` degrees.
pub fn pointer_tilt_y() -> ScrollyteResult<Curve> {
    Curve::from_pairs(&[-200.0, 200.0], &[-10.0, 10.0])
}

/// Ids of the six scroll-coupled skill rows, top to bottom.
pub const SKILL_ROW_IDS: [&str; 6] = [
    "skills-0", "skills-1", "skills-2", "skills-3", "skills-4", "skills-5",
];

/// `(base_velocity, direction)` per skill row, top to bottom. Alternating
/// directions with increasing speed toward the bottom.
pub const SKILL_ROW_VELOCITIES: [(f64, f64); 6] = [
    (-5.0, -1.0),
    (5.0, 1.0),
    (-8.0, -1.0),
    (8.0, 1.0),
    (-10.0, -1.0),
    (10.0, 1.0),
];

/// The complete portfolio scene.
pub fn portfolio() -> ScrollyteResult<SceneDef> {
    let mut scene = SceneBuilder::new("portfolio")
        .region(zoom_region()?)
        .region(skills_region()?)
        .region(contact_region()?);

    for (id, (base_velocity, direction)) in SKILL_ROW_IDS.iter().zip(SKILL_ROW_VELOCITIES) {
        scene = scene.marquee(
            *id,
            MarqueeConfig {
                base_velocity,
                direction,
                pause_on_hover: false,
                scroll_coupled: true,
                period: None,
            },
        );
    }

    scene
        // The logo marquee is a plain CSS-style loop: 20 s period, reversed,
        // paused under the pointer, indifferent to scroll.
        .marquee(
            "logos",
            MarqueeConfig {
                base_velocity: 1.0,
                direction: -1.0,
                pause_on_hover: true,
                scroll_coupled: false,
                period: Some(20.0),
            },
        )
        .gate("dot-background", 0.7)
        .gate("grid-background", 0.7)
        .build()
}

/// The pinned zoom region: four cards tiling a 400 vh scroll span.
fn zoom_region() -> ScrollyteResult<RegionDef> {
    const CARDS: [&str; 4] = [
        "projects",
        "anomaly-detection",
        "project-management",
        "social-privacy-hub",
    ];

    let partition = Partition::equal(CARDS.len())?;
    let mut region = RegionBuilder::new("zoom", TrackWindow::pinned());

    for (index, id) in CARDS.iter().enumerate() {
        let section = &partition.sections()[index];
        let lead_in = if index == 0 { 1.0 } else { 0.0 };
        let opacity = fade_curve(section, 0.1, lead_in, 0.0)?;

        // The hero card keeps escalating well past its nominal slot while
        // the region is pinned; the other cards settle at 1.2x within it.
        let scale = if index == 0 {
            anchored_curve(
                section,
                &[0.0, 0.3, 0.7, 1.2, 1.6, section.span()],
                &[2.0, 2.5, 3.0, 3.5, 4.0, 3.5],
            )?
        } else {
            anchored_curve(
                section,
                &[
                    0.0,
                    0.0,
                    0.3,
                    section.span(),
                    section.span(),
                    section.span(),
                ],
                &[1.0, 1.0, 1.2, 1.2, 1.2, 1.2],
            )?
        };

        region = region.item(
            ItemBuilder::new(*id)
                .channel(Channel::Opacity, opacity)
                .channel(Channel::Scale, scale)
                .build(),
        );
    }

    Ok(region.build())
}

/// The 3D skills container: enter/exit tracked, single item carrying the
/// whole transform stack.
fn skills_region() -> ScrollyteResult<RegionDef> {
    let container = ItemBuilder::new("container")
        .channel(
            Channel::ZIndex,
            Curve::from_pairs(&[0.0, 0.5, 1.0], &[10.0, 20.0, 10.0])?,
        )
        .channel(
            Channel::Opacity,
            Curve::from_pairs(&[0.0, 0.3, 0.7, 1.0], &[0.6, 1.0, 1.0, 0.6])?,
        )
        .channel(
            Channel::Scale,
            Curve::from_pairs(&[0.0, 0.3, 0.7, 1.0], &[0.8, 0.9, 1.1, 1.2])?,
        )
        .channel(
            Channel::TranslateYPercent,
            Curve::from_pairs(&[0.0, 1.0], &[0.0, -20.0])?,
        )
        .channel(
            Channel::RotateX,
            Curve::from_pairs(&[0.0, 1.0], &[0.0, 5.0])?,
        )
        .channel(
            Channel::Perspective,
            Curve::from_pairs(&[0.0, 1.0], &[1000.0, 500.0])?,
        )
        .build();

    Ok(RegionBuilder::new("three-d-skills", TrackWindow::enter_exit())
        .item(container)
        .build())
}

/// The contact region: enter/exit tracked with spring-smoothed progress.
fn contact_region() -> ScrollyteResult<RegionDef> {
    let form = ItemBuilder::new("form")
        .channel(
            Channel::Scale,
            Curve::from_pairs(&[0.0, 0.5, 1.0], &[0.8, 1.1, 0.8])?,
        )
        .channel(
            Channel::Opacity,
            Curve::from_pairs(&[0.0, 0.2, 0.8, 1.0], &[0.0, 1.0, 1.0, 0.0])?,
        )
        .channel(
            Channel::TranslateY,
            Curve::from_pairs(&[0.0, 0.5, 1.0], &[100.0, 0.0, -100.0])?,
        )
        .build();

    Ok(RegionBuilder::new("contact", TrackWindow::enter_exit())
        .spring(SpringConfig::contact_form())
        .item(form)
        .build())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/presets.rs"]
mod tests;
