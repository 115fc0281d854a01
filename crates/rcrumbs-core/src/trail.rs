#![forbid(unsafe_code)]

//! The trail handle: attach, fit passes, transitions, and the resize reactor.
//!
//! # Usage
//!
//! ```ignore
//! let mut trail = Trail::attach(host, TrailConfig::default());
//!
//! // On container resize
//! if trail.on_resize() == ResizeDecision::Refit {
//!     request_redraw();
//! }
//!
//! // Each frame while something is moving
//! if trail.is_animating() {
//!     trail.tick(dt);
//! }
//! ```
//!
//! # Ordering
//!
//! A fit pass decides and projects every crumb before it returns. Reveal
//! completions (which bump `shown_count` and fire `post_crumb_display`) land
//! later, from [`Trail::tick`] or [`Trail::finish_transitions`], and fire at
//! most once per transition. The resize reactor force-completes every
//! in-flight transition before a new pass, so an old pass's completion never
//! runs against a new pass's bookkeeping.
//!
//! Attaching takes the host by value: a container can only be driven by one
//! trail, and there is no way to bind it twice.

use std::time::Duration;

use crate::config::TrailConfig;
use crate::crumb::{Crumb, Projection, Visibility};
use crate::fit::{self, Decision, FitState};
use crate::host::{CrumbHost, NoopObserver, TrailObserver};
use crate::transition::{TransitionKind, WidthTransition};

/// Outcome of [`Trail::on_resize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDecision {
    /// A fit pass ran.
    Refit,
    /// The new width cannot change anything; no pass ran.
    Skip,
}

/// A breadcrumb trail bound to one container.
#[derive(Debug)]
pub struct Trail<H, O = NoopObserver> {
    host: H,
    observer: O,
    config: TrailConfig,
    crumbs: Vec<Crumb>,
    state: FitState,
}

impl<H: CrumbHost> Trail<H> {
    /// Attach to `host`, measure every crumb, and run the initial pass
    /// without animation.
    pub fn attach(host: H, config: TrailConfig) -> Self {
        Self::attach_with_observer(host, config, NoopObserver)
    }
}

impl<H: CrumbHost, O: TrailObserver> Trail<H, O> {
    /// Like [`Trail::attach`], with display hooks.
    pub fn attach_with_observer(mut host: H, config: TrailConfig, observer: O) -> Self {
        host.strip_whitespace();
        let crumbs: Vec<Crumb> = (0..host.crumb_count())
            .map(|index| Crumb::new(index, host.measure_detached(index)))
            .collect();

        crate::info!(
            crumbs = crumbs.len(),
            ellipsis = config.ellipsis,
            animation = config.animation.activated,
            "trail attached"
        );

        let mut trail = Self {
            host,
            observer,
            config,
            crumbs,
            state: FitState::default(),
        };
        trail.fit_pass(false);
        trail
    }

    /// React to a container resize.
    ///
    /// Re-fits when the container is now narrower than the shown crumbs, wide
    /// enough for the next candidate to fit, or when the first crumb is
    /// ellipsized and its clip follows the new width. Otherwise nothing
    /// happens.
    pub fn on_resize(&mut self) -> ResizeDecision {
        let width = self.host.container_width();
        if !self.needs_refit(width) {
            crate::debug!(width, "resize skipped");
            return ResizeDecision::Skip;
        }
        crate::debug!(
            width,
            total = self.state.total_shown_width,
            "resize triggers refit"
        );
        self.finish_transitions();
        self.fit_pass(self.config.animation.activated);
        ResizeDecision::Refit
    }

    /// Force a fit pass regardless of the reactor's guard.
    pub fn refit(&mut self) {
        self.finish_transitions();
        self.fit_pass(self.config.animation.activated);
    }

    /// Advance in-flight transitions by `dt` and push updated projections.
    pub fn tick(&mut self, dt: Duration) {
        if !self.is_animating() {
            return;
        }
        for crumb in &mut self.crumbs {
            if let Some(transition) = crumb.transition.as_mut() {
                transition.tick(dt);
            }
        }
        self.settle();
    }

    /// Jump every in-flight transition to its end state and run its
    /// completion effects.
    pub fn finish_transitions(&mut self) {
        if !self.is_animating() {
            return;
        }
        for crumb in &mut self.crumbs {
            if let Some(transition) = crumb.transition.as_mut() {
                transition.finish();
            }
        }
        self.settle();
    }

    /// Whether any crumb is mid-transition.
    pub fn is_animating(&self) -> bool {
        self.crumbs.iter().any(Crumb::is_transitioning)
    }

    /// Crumbs in trail order.
    pub fn crumbs(&self) -> &[Crumb] {
        &self.crumbs
    }

    /// Visibility of crumb `index`, if it exists.
    pub fn visibility(&self, index: usize) -> Option<Visibility> {
        self.crumbs.get(index).map(Crumb::visibility)
    }

    /// Current projection of every crumb, in trail order.
    pub fn projections(&self) -> Vec<Projection> {
        self.crumbs.iter().map(Crumb::projection).collect()
    }

    /// Bookkeeping from the last pass.
    pub fn state(&self) -> &FitState {
        &self.state
    }

    /// Options this trail was attached with.
    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    /// The container.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The container, mutably (e.g. to update its width before [`on_resize`](Self::on_resize)).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The display hooks.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Detach, returning the container and observer.
    pub fn into_parts(self) -> (H, O) {
        (self.host, self.observer)
    }

    fn needs_refit(&self, width: u16) -> bool {
        let Some(first) = self.crumbs.first() else {
            return false;
        };
        let total = self.state.total_shown_width;
        if width < total {
            return true;
        }

        let first_ellipsized = matches!(first.visibility(), Visibility::Ellipsized { .. });
        let candidate = self
            .state
            .next_hidden_width
            .or_else(|| first_ellipsized.then(|| first.width()));
        let Some(candidate) = candidate else {
            return false;
        };
        if u32::from(total) + u32::from(candidate) <= u32::from(width) {
            return true;
        }

        // The ellipsized first crumb's clip tracks the width.
        first_ellipsized && width != self.state.container_width
    }

    fn fit_pass(&mut self, allow_animation: bool) {
        if self.crumbs.is_empty() {
            return;
        }

        let width = self.host.container_width();
        let widths: Vec<u16> = self.crumbs.iter().map(Crumb::width).collect();
        let plan = fit::plan(&widths, width, self.config.ellipsis);

        self.state.container_width = width;
        self.state.shown_count = 0;
        self.state.total_shown_width = plan.total_shown_width;
        self.state.next_hidden_width = plan.next_hidden_width;

        self.observer.pre_crumbs_list_display(&self.state);

        let animate = allow_animation && self.config.animation.activated;
        for index in (0..self.crumbs.len()).rev() {
            self.observer.pre_crumb_display(&self.crumbs[index]);
            let decision = plan.decisions[index];
            crate::trace!(index, width = self.crumbs[index].width(), ?decision, "crumb decision");
            match decision {
                Decision::Show => self.show(index, Visibility::Shown, animate),
                Decision::Force => self.show(index, Visibility::Shown, false),
                Decision::Ellipsize { width } => {
                    self.show(index, Visibility::Ellipsized { width }, false);
                }
                Decision::Hide => self.hide(index, animate),
            }
        }

        self.state.last_shown_count = self.state.shown_count;

        crate::debug!(
            width,
            crumbs = self.crumbs.len(),
            shown = self.state.shown_count,
            total = self.state.total_shown_width,
            next_hidden = ?self.state.next_hidden_width,
            "fit pass"
        );

        self.project();
        self.observer.post_crumbs_list_display(&self.state);
    }

    fn show(&mut self, index: usize, visibility: Visibility, animate: bool) {
        let speed = self.config.animation.speed;
        let crumb = &mut self.crumbs[index];
        let reveal = animate && !crumb.visibility.is_visible();
        crumb.visibility = visibility;
        if reveal {
            crumb.transition = Some(WidthTransition::reveal(crumb.width(), speed));
        } else {
            crumb.transition = None;
            self.state.shown_count += 1;
            self.observer.post_crumb_display(&self.crumbs[index]);
        }
    }

    fn hide(&mut self, index: usize, animate: bool) {
        let speed = self.config.animation.speed;
        let crumb = &mut self.crumbs[index];
        let from = crumb.rendered_width();
        let collapse = animate && crumb.visibility.is_visible() && from > 0;
        crumb.visibility = Visibility::Hidden;
        crumb.transition = collapse.then(|| WidthTransition::collapse(from, speed));
    }

    /// Run completion effects for landed transitions, then re-project.
    fn settle(&mut self) {
        for index in 0..self.crumbs.len() {
            match self.crumbs[index].take_completed() {
                Some(TransitionKind::Reveal) => {
                    self.state.shown_count += 1;
                    self.observer.post_crumb_display(&self.crumbs[index]);
                }
                Some(TransitionKind::Collapse) | None => {}
            }
        }
        self.project();
    }

    fn project(&mut self) {
        for crumb in &self.crumbs {
            self.host.apply(crumb.index(), crumb.projection());
        }
    }
}
