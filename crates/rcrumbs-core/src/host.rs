#![forbid(unsafe_code)]

//! Seams between the fitter and its environment.
//!
//! [`CrumbHost`] is the measuring/styling backend that owns the container and
//! its crumb list. [`TrailObserver`] receives the display hooks fired around
//! every fit pass.

use crate::crumb::{Crumb, Projection};
use crate::fit::FitState;

/// The container holding the crumb list.
///
/// Indices are crumb positions after [`strip_whitespace`](Self::strip_whitespace)
/// has run; they never change afterwards.
pub trait CrumbHost {
    /// Current container width in cells.
    fn container_width(&self) -> u16;

    /// Number of crumb items in the list. Zero when there is no list.
    fn crumb_count(&self) -> usize;

    /// Remove whitespace-only filler between crumbs so width sums are exact.
    fn strip_whitespace(&mut self);

    /// Natural width of crumb `index`, measured without disturbing what is
    /// currently on screen.
    fn measure_detached(&mut self, index: usize) -> u16;

    /// Restyle crumb `index`.
    fn apply(&mut self, index: usize, projection: Projection);
}

/// Display hooks. Every method defaults to a no-op.
pub trait TrailObserver {
    /// Before each full fit pass.
    fn pre_crumbs_list_display(&mut self, _state: &FitState) {}

    /// After each full fit pass.
    fn post_crumbs_list_display(&mut self, _state: &FitState) {}

    /// Before each crumb's show/hide decision is applied.
    fn pre_crumb_display(&mut self, _crumb: &Crumb) {}

    /// After a crumb becomes visibly shown (after its reveal, if animated).
    fn post_crumb_display(&mut self, _crumb: &Crumb) {}
}

/// Observer that ignores every hook.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl TrailObserver for NoopObserver {}
