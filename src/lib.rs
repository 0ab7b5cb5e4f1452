//! Scrollstage is a scroll-linked choreography engine for page sections.
//!
//! The engine maps document scroll positions onto deterministic visual
//! state for named targets: a hero section whose actors hand off in a
//! two-pair crossfade relay, and a letter-spread section whose words
//! expand and become selectable as the visitor scrolls. Hosts stay
//! thin; every threshold and easing window lives in a serializable
//! [`Choreography`]. The public API is session-oriented:
//!
//! - Build and validate a [`Choreography`] (or start from
//!   [`Choreography::default`], the production page)
//! - Create a [`ScrollDirector`] over a host implementing [`Metrics`]
//!   and [`Surface`]
//! - Feed it scroll/resize notifications and interaction events, and
//!   claim the coalesced update pass once per tick
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod interact;
mod schedule;

/// Serializable choreography model and builder.
pub mod choreography;
/// Pure progress-to-frame mapping passes.
pub mod eval;
/// Session-oriented driving API.
pub mod session;
/// Host contracts and frame application.
pub mod stage;

pub use crate::foundation::core::{Progress, Rect, Section, SectionGeometry};
pub use crate::foundation::error::{StageError, StageResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::segment::{Lerp, Segment, Stagger};
pub use crate::choreography::dsl::ChoreographyBuilder;
pub use crate::choreography::model::{
    ActorDef, ActorRole, Choreography, FormtScript, MenuScript, PanelDef, ParallaxScript,
    RevealScript, WordDef,
};
pub use crate::eval::formt::{FormtFrame, WordFrame, eval_formt};
pub use crate::eval::parallax::{ActorState, ParallaxFrame, eval_parallax};
pub use crate::interact::nav::NavMenu;
pub use crate::interact::reveal::RevealOnce;
pub use crate::interact::selection::Selection;
pub use crate::schedule::frame::PassScheduler;
pub use crate::session::director::ScrollDirector;
pub use crate::stage::memory::{MemoryStage, TargetRecord};
pub use crate::stage::metrics::Metrics;
pub use crate::stage::surface::{Surface, Tag};
