#![forbid(unsafe_code)]

//! Greedy width fit.
//!
//! [`plan`] decides, for a container width and the cached crumb widths, which
//! crumbs are shown, hidden, or ellipsized. It is pure: applying the plan
//! (transitions, hooks, host styling) is the job of [`crate::trail::Trail`].
//!
//! # Algorithm
//!
//! Crumbs are walked from last to first with a signed `remaining` budget
//! starting at the container width. Every crumb's width is subtracted,
//! hidden ones included, so once a crumb fails to fit every earlier crumb
//! with a non-zero width fails too.
//!
//! - `remaining >= 0` after subtracting: the crumb fits (inclusive boundary).
//! - Otherwise, the first crumb is ellipsized (or forced to natural width
//!   when ellipsis is off), and any other crumb is hidden.
//!
//! The first crumb is therefore never hidden. Its clip is the space the
//! fitting crumbs leave free, `container_width - total_shown_width`, capped
//! at its natural width; hidden crumbs take no space. Shown crumbs plus the
//! clip never exceed the container.

/// Per-crumb outcome of a fit pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Fits; shown at natural width.
    Show,
    /// Does not fit; hidden.
    Hide,
    /// First crumb, does not fit, ellipsis on: clipped to `width`.
    Ellipsize { width: u16 },
    /// First crumb, does not fit, ellipsis off: natural width regardless.
    Force,
}

/// Result of [`plan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitPlan {
    /// One decision per crumb, indexed by position.
    pub decisions: Vec<Decision>,
    /// Sum of widths of crumbs that fit.
    pub total_shown_width: u16,
    /// Width of the highest-index hidden crumb with a non-zero width.
    pub next_hidden_width: Option<u16>,
}

/// Bookkeeping exposed to observers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FitState {
    /// Container width the last pass ran against.
    pub container_width: u16,
    /// Crumbs counted as shown so far (revealing crumbs count on completion).
    pub shown_count: usize,
    /// `shown_count` as persisted at the end of the previous pass.
    pub last_shown_count: usize,
    /// Sum of natural widths of crumbs that fit in the last pass.
    pub total_shown_width: u16,
    /// Width the container must grow by for the next hidden crumb to fit.
    pub next_hidden_width: Option<u16>,
}

/// Decide visibility for every crumb.
///
/// `widths[i]` is the natural width of crumb `i`. An empty slice yields an
/// empty plan.
#[must_use]
pub fn plan(widths: &[u16], container_width: u16, ellipsis: bool) -> FitPlan {
    let mut decisions = vec![Decision::Hide; widths.len()];
    let mut remaining = i32::from(container_width);
    let mut total: u32 = 0;
    let mut next_hidden_width = None;

    for (index, &width) in widths.iter().enumerate().rev() {
        remaining -= i32::from(width);

        decisions[index] = if remaining >= 0 {
            total += u32::from(width);
            Decision::Show
        } else if index == 0 {
            if ellipsis {
                Decision::Ellipsize {
                    width: clip_width(container_width, total, width),
                }
            } else {
                Decision::Force
            }
        } else {
            if next_hidden_width.is_none() && width > 0 {
                next_hidden_width = Some(width);
            }
            Decision::Hide
        };
    }

    FitPlan {
        decisions,
        // Shown crumbs all fit inside `container_width`.
        total_shown_width: u16::try_from(total).unwrap_or(u16::MAX),
        next_hidden_width,
    }
}

/// Space left for an overflowing first crumb.
fn clip_width(container_width: u16, shown: u32, width: u16) -> u16 {
    let free = u32::from(container_width).saturating_sub(shown);
    u16::try_from(free).map_or(width, |free| free.min(width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_trail_is_empty_plan() {
        let plan = plan(&[], 100, true);
        assert!(plan.decisions.is_empty());
        assert_eq!(plan.total_shown_width, 0);
        assert_eq!(plan.next_hidden_width, None);
    }

    #[test]
    fn everything_fits() {
        let plan = plan(&[10, 20, 30], 60, true);
        assert_eq!(plan.decisions, vec![Decision::Show; 3]);
        assert_eq!(plan.total_shown_width, 60);
        assert_eq!(plan.next_hidden_width, None);
    }

    #[test]
    fn exact_fit_is_inclusive() {
        let plan = plan(&[200, 300], 500, true);
        assert_eq!(plan.decisions, vec![Decision::Show, Decision::Show]);
    }

    #[test]
    fn middle_crumbs_hide_first_is_ellipsized() {
        // 200 and 300 fill the container; nothing is left for home.
        let plan = plan(&[50, 80, 200, 300], 500, true);
        assert_eq!(
            plan.decisions,
            vec![
                Decision::Ellipsize { width: 0 },
                Decision::Hide,
                Decision::Show,
                Decision::Show,
            ]
        );
        assert_eq!(plan.total_shown_width, 500);
        assert_eq!(plan.next_hidden_width, Some(80));
    }

    #[test]
    fn hidden_crumbs_leave_their_space_to_home() {
        // 80 is hidden; 510 - 500 leaves 10 cells.
        let plan = plan(&[50, 80, 200, 300], 510, true);
        assert_eq!(plan.decisions[0], Decision::Ellipsize { width: 10 });
        assert_eq!(plan.decisions[1], Decision::Hide);
        assert_eq!(plan.total_shown_width, 500);
    }

    #[test]
    fn first_crumb_clipped_to_leftover_space() {
        // 30 fits (remaining 10), home needs 25 but only 10 left.
        let plan = plan(&[25, 30], 40, true);
        assert_eq!(
            plan.decisions,
            vec![Decision::Ellipsize { width: 10 }, Decision::Show]
        );
        assert_eq!(plan.total_shown_width, 30);
        assert_eq!(plan.next_hidden_width, None);
    }

    #[test]
    fn ellipsis_off_forces_first_crumb() {
        let plan = plan(&[50, 80, 200, 300], 500, false);
        assert_eq!(plan.decisions[0], Decision::Force);
        assert_eq!(plan.decisions[1], Decision::Hide);
    }

    #[test]
    fn last_crumb_hidden_when_it_alone_overflows() {
        let plan = plan(&[5, 50], 20, true);
        assert_eq!(plan.decisions[1], Decision::Hide);
        assert_eq!(plan.next_hidden_width, Some(50));
        // Nothing fits, so all 20 cells are free; the clip caps at home's width.
        assert_eq!(plan.decisions[0], Decision::Ellipsize { width: 5 });
    }

    #[test]
    fn zero_width_container_fully_ellipsizes_single_crumb() {
        let plan = plan(&[12], 0, true);
        assert_eq!(plan.decisions, vec![Decision::Ellipsize { width: 0 }]);
    }

    #[test]
    fn next_hidden_is_highest_index_hidden() {
        let plan = plan(&[1, 7, 8, 9, 10], 12, true);
        assert_eq!(plan.decisions[4], Decision::Show);
        assert_eq!(plan.decisions[3], Decision::Hide);
        assert_eq!(plan.decisions[2], Decision::Hide);
        assert_eq!(plan.next_hidden_width, Some(9));
    }

    #[test]
    fn zero_width_crumb_after_overflow_is_hidden() {
        // 10 fits, 5 fails; the zero-width crumb behind it is hidden as well.
        let plan = plan(&[1, 0, 5, 10], 12, true);
        assert_eq!(plan.next_hidden_width, Some(5));
        assert_eq!(plan.decisions[1], Decision::Hide);
    }

    #[test]
    fn zero_width_crumb_fits_while_budget_holds() {
        let plan = plan(&[3, 0, 4], 7, true);
        assert_eq!(plan.decisions, vec![Decision::Show; 3]);
    }
}
