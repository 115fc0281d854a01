#![forbid(unsafe_code)]

//! Rendered-line scenarios: a trail on a text container across resizes.

use std::time::Duration;

use proptest::prelude::*;
use rcrumbs_core::{ResizeDecision, Trail, TrailConfig, Visibility};
use rcrumbs_text::{TextContainer, display_width};

const LABELS: [&str; 5] = ["Home", "Projects", "frankentui", "crates", "README.md"];

fn trail(width: u16, config: TrailConfig) -> Trail<TextContainer> {
    Trail::attach(TextContainer::from_labels(width, LABELS), config)
}

fn still() -> TrailConfig {
    TrailConfig::default().with_animation(false)
}

fn resize(trail: &mut Trail<TextContainer>, width: u16) -> ResizeDecision {
    trail.host_mut().set_width(width);
    trail.on_resize()
}

#[test]
fn wide_container_shows_everything() {
    let trail = trail(80, still());
    assert_eq!(
        trail.host().render_line(),
        "Home › Projects › frankentui › crates › README.md"
    );
}

#[test]
fn narrowing_drops_middle_crumbs_first() {
    let mut trail = trail(80, still());
    // Widths: 7, 11, 13, 9, 9.
    // At 31 the last three crumbs fill the container; home has no room left.
    assert_eq!(resize(&mut trail, 31), ResizeDecision::Refit);
    assert_eq!(trail.host().render_line(), "frankentui › crates › README.md");
    assert_eq!(trail.visibility(0), Some(Visibility::Ellipsized { width: 0 }));

    assert_eq!(resize(&mut trail, 20), ResizeDecision::Refit);
    assert_eq!(trail.host().render_line(), "H…crates › README.md");
}

#[test]
fn home_clip_tracks_width_with_middle_hidden() {
    let mut trail = trail(20, still());
    assert_eq!(trail.visibility(1), Some(Visibility::Hidden));
    assert_eq!(trail.visibility(0), Some(Visibility::Ellipsized { width: 2 }));

    assert_eq!(resize(&mut trail, 22), ResizeDecision::Refit);
    assert_eq!(trail.host().render_line(), "Hom…crates › README.md");
    assert_eq!(display_width(&trail.host().render_line()), 22);
}

#[test]
fn home_is_truncated_when_space_runs_out() {
    let trail = trail(45, still());
    // Everything after home takes 42 cells, leaving 3.
    assert_eq!(
        trail.host().render_line(),
        "Ho…Projects › frankentui › crates › README.md"
    );
}

#[test]
fn home_without_ellipsis_overflows() {
    let trail = trail(45, still().with_ellipsis(false));
    let line = trail.host().render_line();
    assert_eq!(line, "Home › Projects › frankentui › crates › README.md");
    assert_eq!(display_width(&line), 49);
}

#[test]
fn animated_reveal_grows_cell_by_cell() {
    let mut trail = trail(20, TrailConfig::default());
    assert_eq!(trail.host().render_line(), "H…crates › README.md");
    assert_eq!(resize(&mut trail, 38), ResizeDecision::Refit);
    let start = trail.host().render_line();
    // frankentui starts at zero width; home gets its full 7 cells back.
    assert_eq!(start, "Home › crates › README.md");

    trail.tick(Duration::from_millis(200));
    let mid = trail.host().render_line();
    assert!(display_width(&mid) > display_width(&start));
    assert!(display_width(&mid) < 38);

    trail.tick(Duration::from_millis(200));
    assert_eq!(trail.host().render_line(), "Home › frankentui › crates › README.md");
}

proptest! {
    #[test]
    fn rendered_line_fits_when_ellipsis_on(width in 0u16..=80) {
        let trail = trail(width, still());
        let line = display_width(&trail.host().render_line());
        prop_assert!(line <= usize::from(width), "line {} exceeds {}", line, width);
    }
}
