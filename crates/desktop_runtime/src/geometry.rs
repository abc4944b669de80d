//! Stateless geometry helpers used by the window-manager reducer.
//!
//! Every function here is pure. Inputs that cannot produce a usable result (non-finite values,
//! zero-sized viewports) fall back to a caller-supplied last-known-good value instead of
//! propagating garbage into window state.

use crate::{
    config::DesktopConfig,
    model::{Anchor, Position, ResizeEdge, Size, Viewport, WindowRect},
};

/// Inclusive size range an interactive resize may produce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeBounds {
    pub min: Size,
    pub max: Size,
}

/// Returns `candidate` when usable, otherwise `last_known_good`.
pub fn usable_viewport(candidate: Viewport, last_known_good: Viewport) -> Viewport {
    if candidate.is_usable() {
        candidate
    } else {
        last_known_good
    }
}

/// Centers a window of `size` in `viewport`, shifted up by `vertical_bias`, never off-screen
/// toward the top-left even when the viewport is smaller than the window.
pub fn initial_position(viewport: Viewport, size: Size, vertical_bias: f64) -> Position {
    let x = (viewport.width - size.width) / 2.0;
    let y = (viewport.height - size.height) / 2.0 - vertical_bias;
    Position::new(non_negative_or_zero(x), non_negative_or_zero(y))
}

/// Normalizes `position` against `viewport`. `None` when either input is unusable.
pub fn anchor_for(position: Position, viewport: Viewport) -> Option<Anchor> {
    if !viewport.is_usable() || !position.is_finite() {
        return None;
    }
    Some(Anchor {
        x: position.x / viewport.width,
        y: position.y / viewport.height,
    })
}

/// Scales an anchor back to absolute coordinates in `viewport`.
pub fn anchored_position(anchor: Anchor, viewport: Viewport) -> Position {
    Position::new(anchor.x * viewport.width, anchor.y * viewport.height)
}

/// Resize limits for the current viewport: the configured absolute maximum, further capped to a
/// fraction of the viewport.
pub fn size_bounds(viewport: Viewport, config: &DesktopConfig) -> SizeBounds {
    SizeBounds {
        min: config.min_window_size,
        max: Size::new(
            config
                .max_window_size
                .width
                .min(viewport.width * config.max_viewport_width_ratio),
            config
                .max_window_size
                .height
                .min(viewport.height * config.max_viewport_height_ratio),
        ),
    }
}

/// Clamps a dimension into `[min, max]`; `min` wins when the viewport cap drops below it.
pub fn clamp_dimension(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Computes the rectangle for a resize of `baseline` by pointer delta `(dx, dy)` measured from
/// the resize start.
///
/// East/south handles grow the dimension directly. West/north handles keep the opposite edge
/// fixed: the clamped dimension is computed first and the origin is derived from it, so the
/// fixed edge does not move even when the size is pinned at a bound.
pub fn resize_from_baseline(
    baseline: WindowRect,
    edge: ResizeEdge,
    dx: f64,
    dy: f64,
    bounds: SizeBounds,
) -> WindowRect {
    if !dx.is_finite() || !dy.is_finite() {
        return baseline;
    }

    let mut rect = baseline;
    if edge.moves_east() {
        rect.w = clamp_dimension(baseline.w + dx, bounds.min.width, bounds.max.width);
    }
    if edge.moves_west() {
        rect.w = clamp_dimension(baseline.w - dx, bounds.min.width, bounds.max.width);
        rect.x = baseline.x + (baseline.w - rect.w);
    }
    if edge.moves_south() {
        rect.h = clamp_dimension(baseline.h + dy, bounds.min.height, bounds.max.height);
    }
    if edge.moves_north() {
        rect.h = clamp_dimension(baseline.h - dy, bounds.min.height, bounds.max.height);
        rect.y = baseline.y + (baseline.h - rect.h);
    }
    rect
}

/// Workspace a maximized window fills: full width, between the menu bar and the taskbar.
pub fn maximized_rect(viewport: Viewport, config: &DesktopConfig) -> WindowRect {
    WindowRect {
        x: 0.0,
        y: config.menu_bar_height,
        w: viewport.width.max(0.0),
        h: (viewport.height - config.menu_bar_height - config.taskbar_height).max(0.0),
    }
}

/// Replaces each non-finite or negative dimension of `candidate` with the previous value.
pub fn sanitize_size(candidate: Size, last_known_good: Size) -> Size {
    let pick = |value: f64, fallback: f64| {
        if value.is_finite() && value >= 0.0 {
            value
        } else {
            fallback
        }
    };
    Size::new(
        pick(candidate.width, last_known_good.width),
        pick(candidate.height, last_known_good.height),
    )
}

/// Replaces each non-finite coordinate of `candidate` with the previous value.
///
/// Negative coordinates are legitimate: windows may be dragged partially off-screen.
pub fn sanitize_position(candidate: Position, last_known_good: Position) -> Position {
    let pick = |value: f64, fallback: f64| if value.is_finite() { value } else { fallback };
    Position::new(
        pick(candidate.x, last_known_good.x),
        pick(candidate.y, last_known_good.y),
    )
}

fn non_negative_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn bounds_for(viewport: Viewport) -> SizeBounds {
        size_bounds(viewport, &DesktopConfig::default())
    }

    #[test]
    fn initial_position_centers_with_vertical_bias() {
        let position = initial_position(
            Viewport::new(1920.0, 1080.0),
            Size::new(600.0, 400.0),
            50.0,
        );
        assert_eq!(position, Position::new(660.0, 290.0));
    }

    #[test]
    fn initial_position_never_goes_negative_on_small_viewports() {
        let position =
            initial_position(Viewport::new(500.0, 380.0), Size::new(600.0, 400.0), 50.0);
        assert_eq!(position, Position::new(0.0, 0.0));
    }

    #[test]
    fn anchor_round_trips_through_a_different_viewport() {
        let anchor = anchor_for(Position::new(960.0, 432.0), Viewport::new(1920.0, 1080.0))
            .expect("usable anchor");
        assert_eq!(anchor, Anchor { x: 0.5, y: 0.4 });

        let moved = anchored_position(anchor, Viewport::new(1280.0, 720.0));
        assert!((moved.x - 640.0).abs() < 1e-9);
        assert!((moved.y - 288.0).abs() < 1e-9);
    }

    #[test]
    fn anchor_is_not_recorded_for_zero_viewport() {
        assert_eq!(
            anchor_for(Position::new(10.0, 10.0), Viewport::new(0.0, 0.0)),
            None
        );
    }

    #[test]
    fn size_bounds_cap_relative_to_viewport() {
        let bounds = bounds_for(Viewport::new(1280.0, 720.0));
        assert_eq!(bounds.max, Size::new(1088.0, 540.0));

        let wide = bounds_for(Viewport::new(2560.0, 1440.0));
        assert_eq!(wide.max, Size::new(1200.0, 750.0));
    }

    #[test]
    fn east_resize_clamps_to_max_and_min() {
        let baseline = WindowRect {
            x: 100.0,
            y: 100.0,
            w: 600.0,
            h: 400.0,
        };
        let bounds = bounds_for(Viewport::new(1280.0, 720.0));

        let grown = resize_from_baseline(baseline, ResizeEdge::East, 10_000.0, 0.0, bounds);
        assert_eq!(grown.w, 1088.0);
        assert_eq!(grown.x, 100.0);

        let shrunk = resize_from_baseline(baseline, ResizeEdge::East, -10_000.0, 0.0, bounds);
        assert_eq!(shrunk.w, 400.0);
    }

    #[test]
    fn west_resize_keeps_right_edge_fixed_when_clamped() {
        let baseline = WindowRect {
            x: 300.0,
            y: 100.0,
            w: 600.0,
            h: 400.0,
        };
        let bounds = bounds_for(Viewport::new(1400.0, 900.0));

        let shrunk = resize_from_baseline(baseline, ResizeEdge::West, 500.0, 0.0, bounds);
        assert_eq!(shrunk.w, 400.0);
        assert_eq!(shrunk.x, 500.0);
        assert_eq!(shrunk.right(), baseline.right());

        let grown = resize_from_baseline(baseline, ResizeEdge::West, -120.0, 0.0, bounds);
        assert_eq!(grown.w, 720.0);
        assert_eq!(grown.x, 180.0);
        assert_eq!(grown.right(), baseline.right());
    }

    #[test]
    fn north_west_resize_keeps_bottom_right_corner_fixed() {
        let baseline = WindowRect {
            x: 200.0,
            y: 200.0,
            w: 600.0,
            h: 400.0,
        };
        let bounds = bounds_for(Viewport::new(1400.0, 900.0));

        let rect = resize_from_baseline(baseline, ResizeEdge::NorthWest, -50.0, -1_000.0, bounds);
        assert_eq!(rect.w, 650.0);
        assert_eq!(rect.h, 675.0);
        assert_eq!(rect.right(), baseline.right());
        assert_eq!(rect.bottom(), baseline.bottom());
    }

    #[test]
    fn min_bound_wins_when_viewport_cap_is_smaller() {
        let bounds = bounds_for(Viewport::new(300.0, 200.0));
        assert_eq!(clamp_dimension(50.0, bounds.min.width, bounds.max.width), 400.0);
        assert_eq!(clamp_dimension(900.0, bounds.min.width, bounds.max.width), 400.0);
    }

    #[test]
    fn non_finite_delta_keeps_baseline() {
        let baseline = WindowRect {
            x: 1.0,
            y: 2.0,
            w: 600.0,
            h: 400.0,
        };
        let bounds = bounds_for(Viewport::new(1400.0, 900.0));
        assert_eq!(
            resize_from_baseline(baseline, ResizeEdge::SouthEast, f64::NAN, 3.0, bounds),
            baseline
        );
    }

    #[test]
    fn maximized_rect_reserves_menu_bar_and_taskbar() {
        let rect = maximized_rect(Viewport::new(1920.0, 1080.0), &DesktopConfig::default());
        assert_eq!(
            rect,
            WindowRect {
                x: 0.0,
                y: 32.0,
                w: 1920.0,
                h: 980.0,
            }
        );
    }

    #[test]
    fn sanitizers_fall_back_per_component() {
        assert_eq!(
            sanitize_size(Size::new(-5.0, 320.0), Size::new(600.0, 400.0)),
            Size::new(600.0, 320.0)
        );
        assert_eq!(
            sanitize_position(Position::new(-40.0, f64::INFINITY), Position::new(10.0, 20.0)),
            Position::new(-40.0, 20.0)
        );
        assert_eq!(
            usable_viewport(Viewport::new(0.0, 0.0), Viewport::new(1400.0, 900.0)),
            Viewport::new(1400.0, 900.0)
        );
    }
}
