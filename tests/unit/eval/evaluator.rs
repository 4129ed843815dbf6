use super::*;
use crate::{
    animation::curve::Curve,
    progress::tracker::TrackWindow,
    scene::dsl::{ItemBuilder, RegionBuilder},
    scene::presets,
};

fn constant(value: f64) -> Curve {
    Curve::from_pairs(&[0.0, 1.0], &[value, value]).unwrap()
}

#[test]
fn program_compiles_the_portfolio_zoom_region() {
    let scene = presets::portfolio().unwrap();
    let program = RegionProgram::new(scene.region("zoom").unwrap()).unwrap();
    assert_eq!(program.len(), 4);
    assert!((program.section(0).unwrap().end - 0.25).abs() < 1e-12);
    assert!(program.section(4).is_none());
}

#[test]
fn evaluation_uses_one_progress_snapshot_for_every_item() {
    let scene = presets::portfolio().unwrap();
    let program = RegionProgram::new(scene.region("zoom").unwrap()).unwrap();

    let frames = evaluate_region(&program, Progress::new(0.0));
    assert_eq!(frames.len(), 4);
    // At pin start the hero card is fully visible at 2x; the rest are hidden.
    let hero = frames.iter().find(|f| f.item_id == "projects").unwrap();
    assert_eq!(hero.channels.opacity(), 1.0);
    assert_eq!(hero.channels.scale(), 2.0);
    for frame in frames.iter().filter(|f| f.index != 0) {
        assert_eq!(frame.channels.opacity(), 0.0);
    }
}

#[test]
fn painter_order_defaults_to_definition_index() {
    let region = RegionBuilder::new("r", TrackWindow::pinned())
        .item(ItemBuilder::new("back").channel(Channel::Opacity, constant(1.0)).build())
        .item(ItemBuilder::new("front").channel(Channel::Opacity, constant(1.0)).build())
        .build();
    let program = RegionProgram::new(&region).unwrap();

    let frames = evaluate_region(&program, Progress::new(0.5));
    let order: Vec<&str> = frames.iter().map(|f| f.item_id.as_str()).collect();
    assert_eq!(order, ["back", "front"]);
}

#[test]
fn explicit_z_index_overrides_definition_order() {
    let region = RegionBuilder::new("r", TrackWindow::pinned())
        .item(
            ItemBuilder::new("high")
                .channel(Channel::ZIndex, constant(20.0))
                .build(),
        )
        .item(
            ItemBuilder::new("low")
                .channel(Channel::ZIndex, constant(10.0))
                .build(),
        )
        .build();
    let program = RegionProgram::new(&region).unwrap();

    let frames = evaluate_region(&program, Progress::new(0.5));
    let order: Vec<&str> = frames.iter().map(|f| f.item_id.as_str()).collect();
    assert_eq!(order, ["low", "high"]);
}

#[test]
fn z_order_can_change_mid_scroll() {
    // The 3D container's z curve peaks at mid progress; a program mixing it
    // with a fixed-z item reorders as progress moves.
    let rising = Curve::from_pairs(&[0.0, 0.5, 1.0], &[10.0, 20.0, 10.0]).unwrap();
    let region = RegionBuilder::new("r", TrackWindow::enter_exit())
        .partition(crate::scene::model::PartitionDef::Custom {
            windows: vec![(0.0, 1.0), (0.0, 1.0)],
        })
        .item(ItemBuilder::new("container").channel(Channel::ZIndex, rising).build())
        .item(ItemBuilder::new("fixed").channel(Channel::ZIndex, constant(15.0)).build())
        .build();
    let program = RegionProgram::new(&region).unwrap();

    let at = |p: f64| {
        evaluate_region(&program, Progress::new(p))
            .last()
            .unwrap()
            .item_id
            .clone()
    };
    assert_eq!(at(0.0), "fixed");
    assert_eq!(at(0.5), "container");
    assert_eq!(at(1.0), "fixed");
}

#[test]
fn item_frames_serialize_with_snake_case_channels() {
    let region = RegionBuilder::new("r", TrackWindow::pinned())
        .item(
            ItemBuilder::new("only")
                .channel(Channel::TranslateYPercent, constant(-20.0))
                .build(),
        )
        .build();
    let program = RegionProgram::new(&region).unwrap();
    let frames = evaluate_region(&program, Progress::new(1.0));
    let json = serde_json::to_string(&frames).unwrap();
    assert!(json.contains("\"translate_y_percent\":-20.0"));
    assert!(json.contains("\"item_id\":\"only\""));
}
