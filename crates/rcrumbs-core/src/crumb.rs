#![forbid(unsafe_code)]

//! Crumb model and its render projection.

use crate::transition::{TransitionKind, WidthTransition};

/// Visibility decided by the last fit pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Rendered at natural width.
    Shown,
    /// Not rendered.
    Hidden,
    /// First crumb only: rendered clipped to `width` cells with a truncation marker.
    Ellipsized { width: u16 },
}

impl Visibility {
    /// Shown or ellipsized.
    #[inline]
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// How the host should draw a crumb right now.
///
/// This is the only thing a host ever receives; it is derived from the
/// crumb's [`Visibility`] and any in-flight transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Natural width, no truncation.
    Natural,
    /// Not drawn.
    Hidden,
    /// Mid-transition: clipped to `width` cells, no marker.
    Clipped { width: u16 },
    /// Clipped to `width` cells with a truncation marker.
    Ellipsized { width: u16 },
}

/// One entry of the trail.
#[derive(Debug, Clone)]
pub struct Crumb {
    index: usize,
    width: u16,
    pub(crate) visibility: Visibility,
    pub(crate) transition: Option<WidthTransition>,
}

impl Crumb {
    /// A crumb as found in the initial markup: shown at natural width.
    pub(crate) fn new(index: usize, width: u16) -> Self {
        Self {
            index,
            width,
            visibility: Visibility::Shown,
            transition: None,
        }
    }

    /// Position in the trail (0 = first).
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Cached natural width in cells.
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Visibility decided by the last fit pass.
    #[inline]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Whether a width transition is still running.
    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Width currently occupied on screen.
    pub fn rendered_width(&self) -> u16 {
        match self.projection() {
            Projection::Natural => self.width,
            Projection::Hidden => 0,
            Projection::Clipped { width } | Projection::Ellipsized { width } => width,
        }
    }

    /// Derive the host-facing projection.
    pub fn projection(&self) -> Projection {
        if let Some(transition) = &self.transition {
            return Projection::Clipped {
                width: transition.width(),
            };
        }
        match self.visibility {
            Visibility::Shown => Projection::Natural,
            Visibility::Hidden => Projection::Hidden,
            Visibility::Ellipsized { width } => Projection::Ellipsized { width },
        }
    }

    /// Take the transition if it has landed.
    pub(crate) fn take_completed(&mut self) -> Option<TransitionKind> {
        match &self.transition {
            Some(t) if t.is_complete() => {
                let kind = t.kind();
                self.transition = None;
                Some(kind)
            }
            _ => None,
        }
    }
}
