//! Scrollyte maps scroll progress to visual parameters.
//!
//! The engine turns a page's scroll position (`ScrollInput`) into per-item
//! channel values (`ChannelSet`) through a declarative scene description
//! (`SceneDef`).
//!
//! # Pipeline overview
//!
//! 1. **Track**: `ScrollInput + RegionRect -> Progress` (where a region sits
//!    inside its scroll window)
//! 2. **Smooth** (optional): progress through a damped spring filter
//! 3. **Evaluate**: `Progress -> Vec<ItemFrame>` (piecewise-linear curves per
//!    channel, painter-ordered)
//! 4. **Drive**: marquee rows, visibility gates, and the contact form state
//!    machine advance alongside
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the same scroll trace always produces the same frames.
//! - **No IO in the engine**: layout measurement, rendering, and mail delivery
//!   live behind host-provided boundaries ([`Mailer`], session events).
//! - **Single-threaded reactive core**: scroll input flows through
//!   [`ValueCell`] subscriptions; dropping a [`ScrollSession`] is teardown.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod channel;
mod contact;
mod eval;
mod foundation;
mod marquee;
mod progress;
mod scene;
mod section;
mod signal;
mod style;
mod visibility;

pub use animation::curve::{Curve, CurvePoint};
pub use animation::ease::Ease;
pub use animation::spring::{SpringConfig, SpringFilter};
pub use channel::composer::{ItemComposer, anchored_curve, fade_curve};
pub use channel::set::{Channel, ChannelSet};
pub use contact::form::{ContactForm, FormPhase};
pub use contact::mailer::{
    ContactMessage, ENV_PUBLIC_KEY, ENV_SERVICE_ID, ENV_TEMPLATE_ID, Mailer, MailerConfig,
};
pub use eval::evaluator::{ItemFrame, RegionProgram, evaluate_region};
pub use eval::session::{
    FrameUpdate, GateTransition, MarqueeFrame, RegionFrame, ScrollSession, SessionEvent,
};
pub use foundation::core::{Affine, Progress, RegionRect, ScrollInput, Vec2};
pub use foundation::error::{ScrollyteError, ScrollyteResult};
pub use marquee::driver::{MarqueeConfig, MarqueeDriver};
pub use progress::tracker::{Alignment, Edge, ProgressTracker, TrackWindow};
pub use progress::velocity::ScrollVelocityTracker;
pub use scene::dsl::{ItemBuilder, RegionBuilder, SceneBuilder};
pub use scene::model::{
    ChannelTrackDef, GateDef, ItemDef, MarqueeRowDef, PartitionDef, RegionDef, SceneDef,
};
pub use scene::presets::{
    GRADIENT_KEYFRAMES_BODY, GRADIENT_KEYFRAMES_NAME, SKILL_ROW_IDS, SKILL_ROW_VELOCITIES,
    ensure_gradient_keyframes, pointer_tilt_x, pointer_tilt_y, portfolio,
};
pub use section::partition::{Partition, Section};
pub use signal::cell::{Subscription, ValueCell};
pub use signal::theme::{Theme, ThemeSignal};
pub use style::registry::StyleRegistry;
pub use visibility::gate::VisibilityGate;
