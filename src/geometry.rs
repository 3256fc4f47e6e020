//! Menu sizing and viewport-aware placement.
//!
//! Pure functions shared by the view layer and usable on their own. Placement
//! never pushes the menu fully off-screen: the configured [`Overflow`] policy
//! decides between clamping into view and flipping to the opposite side of the
//! trigger point, and the result is floored at zero as a last resort.

use crate::style::{Direction, Overflow, Style};

/// Computes the total on-screen height of a menu.
///
/// The height covers the container border and padding on both sides, one
/// partition (with its vertical margins) between every pair of consecutive
/// groups, and the heights of all items. `heights` holds one inner `Vec` of
/// item heights per group.
pub fn menu_height(style: &Style, heights: &[Vec<f32>]) -> f32 {
    let partitions = heights.len().saturating_sub(1) as f32;

    2.0 * style.border_width
        + 2.0 * style.container_padding
        + partitions * (2.0 * style.partition_margin + style.partition_width)
        + heights.iter().flatten().sum::<f32>()
}

/// Resolves the horizontal position of a menu.
///
/// [`Direction::LeftOfPointer`] prefers `trigger_x - menu_width` and falls
/// back per `overflow` when that runs past the left edge;
/// [`Direction::RightOfPointer`] prefers `trigger_x` and falls back when the
/// menu runs past the right edge. [`Overflow::Shift`] clamps into view,
/// [`Overflow::Mirror`] flips to the other side of the trigger point.
pub fn resolve_x(
    direction: Direction,
    overflow: Overflow,
    viewport_width: f32,
    menu_width: f32,
    trigger_x: f32,
) -> f32 {
    let x = match direction {
        Direction::LeftOfPointer => {
            let preferred = trigger_x - menu_width;

            if preferred < 0.0 {
                match overflow {
                    Overflow::Shift => 0.0,
                    Overflow::Mirror => trigger_x,
                }
            } else {
                preferred
            }
        }
        Direction::RightOfPointer => {
            if trigger_x + menu_width > viewport_width {
                match overflow {
                    Overflow::Shift => viewport_width - menu_width,
                    Overflow::Mirror => trigger_x - menu_width,
                }
            } else {
                trigger_x
            }
        }
    };

    x.max(0.0)
}

/// Resolves the vertical position of a menu.
///
/// The preferred position is the trigger point itself; when the menu would
/// run past the bottom edge, [`Overflow::Shift`] clamps it into view and
/// [`Overflow::Mirror`] opens it upwards instead.
pub fn resolve_y(overflow: Overflow, viewport_height: f32, menu_height: f32, trigger_y: f32) -> f32 {
    let y = if trigger_y + menu_height > viewport_height {
        match overflow {
            Overflow::Shift => viewport_height - menu_height,
            Overflow::Mirror => trigger_y - menu_height,
        }
    } else {
        trigger_y
    };

    y.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> Style {
        Style {
            border_width: 1.0,
            container_padding: 4.0,
            partition_width: 1.0,
            partition_margin: 4.0,
            ..Style::default()
        }
    }

    #[test]
    fn height_of_two_groups() {
        let style = metrics();

        // 2*1 border + 2*4 padding + one partition (2*4 + 1) + 20 + 20
        assert_eq!(
            menu_height(&style, &[vec![20.0], vec![20.0]]),
            2.0 + 8.0 + 9.0 + 40.0
        );
    }

    #[test]
    fn height_is_additive_per_group() {
        let style = metrics();
        let base = vec![vec![20.0, 28.0], vec![28.0]];
        let mut extended = base.clone();
        extended.push(vec![30.0, 12.0]);

        let partition = 2.0 * style.partition_margin + style.partition_width;

        assert_eq!(
            menu_height(&style, &extended),
            menu_height(&style, &base) + 42.0 + partition
        );
    }

    #[test]
    fn height_of_empty_menu() {
        let style = metrics();

        assert_eq!(menu_height(&style, &[]), 2.0 + 8.0);
    }

    #[test]
    fn x_fits_on_preferred_side() {
        assert_eq!(
            resolve_x(Direction::LeftOfPointer, Overflow::Shift, 500.0, 300.0, 400.0),
            100.0
        );
        assert_eq!(
            resolve_x(Direction::RightOfPointer, Overflow::Shift, 500.0, 300.0, 100.0),
            100.0
        );
    }

    #[test]
    fn x_shift_clamps_left_edge() {
        assert_eq!(
            resolve_x(Direction::LeftOfPointer, Overflow::Shift, 500.0, 300.0, 100.0),
            0.0
        );
    }

    #[test]
    fn x_mirror_flips_to_right() {
        assert_eq!(
            resolve_x(Direction::LeftOfPointer, Overflow::Mirror, 500.0, 300.0, 100.0),
            100.0
        );
    }

    #[test]
    fn x_shift_clamps_right_edge() {
        assert_eq!(
            resolve_x(Direction::RightOfPointer, Overflow::Shift, 500.0, 300.0, 400.0),
            200.0
        );
    }

    #[test]
    fn x_mirror_flips_to_left() {
        assert_eq!(
            resolve_x(Direction::RightOfPointer, Overflow::Mirror, 500.0, 300.0, 400.0),
            100.0
        );
    }

    #[test]
    fn x_never_negative() {
        // Mirror fallback would land at -200; the floor wins.
        assert_eq!(
            resolve_x(Direction::RightOfPointer, Overflow::Mirror, 300.0, 300.0, 100.0),
            0.0
        );
    }

    #[test]
    fn y_fits_below() {
        assert_eq!(resolve_y(Overflow::Shift, 500.0, 200.0, 100.0), 100.0);
    }

    #[test]
    fn y_shift_clamps_bottom_edge() {
        assert_eq!(resolve_y(Overflow::Shift, 500.0, 200.0, 400.0), 300.0);
    }

    #[test]
    fn y_mirror_opens_upwards() {
        assert_eq!(resolve_y(Overflow::Mirror, 500.0, 200.0, 400.0), 200.0);
    }

    #[test]
    fn y_never_negative() {
        assert_eq!(resolve_y(Overflow::Mirror, 500.0, 200.0, 100.0), 0.0);
    }

    #[test]
    fn unknown_viewport_never_clamps() {
        // Before the first resize event the viewport is reported as infinite.
        assert_eq!(
            resolve_x(
                Direction::RightOfPointer,
                Overflow::Shift,
                f32::INFINITY,
                300.0,
                400.0
            ),
            400.0
        );
        assert_eq!(resolve_y(Overflow::Shift, f32::INFINITY, 200.0, 400.0), 400.0);
    }
}
