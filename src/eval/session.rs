use std::{cell::RefCell, rc::Rc};

use crate::{
    animation::spring::SpringFilter,
    eval::evaluator::{evaluate_region, ItemFrame, RegionProgram},
    foundation::core::{Progress, RegionRect, ScrollInput},
    foundation::error::ScrollyteResult,
    marquee::driver::MarqueeDriver,
    progress::tracker::ProgressTracker,
    progress::velocity::ScrollVelocityTracker,
    scene::model::SceneDef,
    signal::cell::{Subscription, ValueCell},
    visibility::gate::VisibilityGate,
};

/// Layout and pointer events the host feeds between ticks.
#[derive(Clone, Debug)]
pub enum SessionEvent {
    /// A region's rect was measured or re-measured.
    RegionLayout {
        /// Region id from the scene definition.
        region: String,
        /// Document-space rect.
        rect: RegionRect,
    },
    /// A region left the layout; its progress falls back to zero.
    RegionDetached {
        /// Region id from the scene definition.
        region: String,
    },
    /// The pointer entered a marquee row.
    PointerOver {
        /// Marquee row id.
        marquee: String,
    },
    /// The pointer left a marquee row.
    PointerLeave {
        /// Marquee row id.
        marquee: String,
    },
}

#[derive(Clone, Debug, serde::Serialize)]
/// One region's evaluated output for a tick.
pub struct RegionFrame {
    /// Region id.
    pub region_id: String,
    /// Smoothed progress the items were evaluated at.
    pub progress: f64,
    /// Item frames in painter's order.
    pub items: Vec<ItemFrame>,
}

#[derive(Clone, Debug, serde::Serialize)]
/// One marquee row's state after a tick.
pub struct MarqueeFrame {
    /// Row id.
    pub row_id: String,
    /// Unbounded offset.
    pub offset: f64,
    /// Loop phase for fixed-period rows.
    pub phase: Option<f64>,
}

#[derive(Clone, Debug, serde::Serialize)]
/// An edge-triggered gate flip observed during a tick.
pub struct GateTransition {
    /// Gate id.
    pub gate_id: String,
    /// New visibility.
    pub visible: bool,
}

#[derive(Clone, Debug, Default, serde::Serialize)]
/// Everything the render boundary needs after one tick.
pub struct FrameUpdate {
    /// Region outputs, in scene order.
    pub regions: Vec<RegionFrame>,
    /// Marquee outputs, in scene order.
    pub marquees: Vec<MarqueeFrame>,
    /// Gates that flipped this tick. Empty on steady frames.
    pub gates: Vec<GateTransition>,
}

struct RegionState {
    id: String,
    tracker: ProgressTracker,
    spring: Option<SpringFilter>,
    program: RegionProgram,
}

struct MarqueeState {
    id: String,
    driver: MarqueeDriver,
}

struct GateState {
    id: String,
    gate: VisibilityGate,
}

/// Drives a whole scene from one scroll input cell.
///
/// The session subscribes to the input cell on construction and reads the
/// latest value at each [`tick`](Self::tick); dropping the session drops the
/// subscription, so teardown needs no explicit call.
pub struct ScrollSession {
    regions: Vec<RegionState>,
    marquees: Vec<MarqueeState>,
    gates: Vec<GateState>,
    velocity: ScrollVelocityTracker,
    latest: Rc<RefCell<ScrollInput>>,
    clock: f64,
    _input: Subscription<ScrollInput>,
}

impl ScrollSession {
    /// Compile `scene` and attach to `input`.
    ///
    /// The scene is validated first; a session never exists for an invalid
    /// scene.
    pub fn new(scene: &SceneDef, input: &ValueCell<ScrollInput>) -> ScrollyteResult<Self> {
        scene.validate()?;

        let regions = scene
            .regions
            .iter()
            .map(|region| {
                Ok(RegionState {
                    id: region.id.clone(),
                    tracker: ProgressTracker::new(region.window),
                    spring: region
                        .spring
                        .map(|config| SpringFilter::new(config, 0.0))
                        .transpose()?,
                    program: RegionProgram::new(region)?,
                })
            })
            .collect::<ScrollyteResult<Vec<_>>>()?;

        let marquees = scene
            .marquees
            .iter()
            .map(|row| {
                Ok(MarqueeState {
                    id: row.id.clone(),
                    driver: MarqueeDriver::new(row.config)?,
                })
            })
            .collect::<ScrollyteResult<Vec<_>>>()?;

        let gates = scene
            .gates
            .iter()
            .map(|gate| {
                Ok(GateState {
                    id: gate.id.clone(),
                    gate: VisibilityGate::new(gate.threshold)?,
                })
            })
            .collect::<ScrollyteResult<Vec<_>>>()?;

        let latest = Rc::new(RefCell::new(input.get()));
        let sink = Rc::clone(&latest);
        let _input = input.subscribe(move |value| {
            *sink.borrow_mut() = *value;
        });

        Ok(Self {
            regions,
            marquees,
            gates,
            velocity: ScrollVelocityTracker::new(),
            latest,
            clock: 0.0,
            _input,
        })
    }

    /// Apply a layout or pointer event. Unknown ids are ignored, so hosts
    /// can forward events for elements that did not make it into the scene.
    pub fn handle(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::RegionLayout { region, rect } => {
                if let Some(state) = self.regions.iter_mut().find(|r| r.id == region) {
                    state.tracker.attach(rect);
                } else {
                    tracing::debug!(region, "layout event for unknown region");
                }
            }
            SessionEvent::RegionDetached { region } => {
                if let Some(state) = self.regions.iter_mut().find(|r| r.id == region) {
                    state.tracker.detach();
                }
            }
            SessionEvent::PointerOver { marquee } => {
                if let Some(state) = self.marquees.iter_mut().find(|m| m.id == marquee) {
                    state.driver.set_hovered(true);
                }
            }
            SessionEvent::PointerLeave { marquee } => {
                if let Some(state) = self.marquees.iter_mut().find(|m| m.id == marquee) {
                    state.driver.set_hovered(false);
                }
            }
        }
    }

    #[tracing::instrument(skip(self))]
    /// Advance the whole scene by `dt` seconds and evaluate one frame.
    pub fn tick(&mut self, dt: f64) -> FrameUpdate {
        let input = *self.latest.borrow();
        self.clock += dt.max(0.0);
        self.velocity.sample(input.scroll_y, self.clock);
        let velocity = self.velocity.velocity();

        let regions = self
            .regions
            .iter_mut()
            .map(|state| {
                let raw = state.tracker.progress(input);
                let progress = match &mut state.spring {
                    Some(spring) => {
                        spring.set_target(raw.value());
                        Progress::new(spring.tick(dt))
                    }
                    None => raw,
                };
                RegionFrame {
                    region_id: state.id.clone(),
                    progress: progress.value(),
                    items: evaluate_region(&state.program, progress),
                }
            })
            .collect();

        let marquees = self
            .marquees
            .iter_mut()
            .map(|state| {
                state.driver.observe_scroll_velocity(velocity);
                MarqueeFrame {
                    row_id: state.id.clone(),
                    offset: state.driver.tick(dt),
                    phase: state.driver.phase(),
                }
            })
            .collect();

        let gates = self
            .gates
            .iter_mut()
            .filter_map(|state| {
                state.gate.observe(input).map(|visible| {
                    tracing::debug!(gate = %state.id, visible, "gate transition");
                    GateTransition {
                        gate_id: state.id.clone(),
                        visible,
                    }
                })
            })
            .collect();

        FrameUpdate {
            regions,
            marquees,
            gates,
        }
    }

    /// Latest scroll input the session has seen.
    pub fn input(&self) -> ScrollInput {
        *self.latest.borrow()
    }

    /// Latched scroll velocity in px/s.
    pub fn scroll_velocity(&self) -> f64 {
        self.velocity.velocity()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/session.rs"]
mod tests;
