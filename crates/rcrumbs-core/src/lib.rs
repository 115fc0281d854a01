#![forbid(unsafe_code)]

//! Responsive breadcrumb trail fitting.
//!
//! A [`Trail`] is attached to a [`CrumbHost`] (the container and its crumb
//! list). It hides crumbs from the middle of the trail as the container
//! narrows, keeps the last crumb for as long as it fits, never hides the
//! first crumb (truncating it with an ellipsis instead), and animates crumbs
//! in and out on resize.

pub mod config;
pub mod crumb;
pub mod fit;
pub mod host;
pub mod logging;
pub mod trail;
pub mod transition;

pub use config::{AnimationConfig, ConfigError, TrailConfig};
pub use crumb::{Crumb, Projection, Visibility};
pub use fit::{Decision, FitPlan, FitState};
pub use host::{CrumbHost, NoopObserver, TrailObserver};
pub use trail::{ResizeDecision, Trail};
pub use transition::WidthTransition;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, info, trace, warn};
