//! Frame negotiation between the tracked window and the companion.
//!
//! Pure functions only: given the tracked frame and the display list, derive
//! where the companion goes and how far the tracked window must give way.
//! This is the only place screen-bounds math happens.

mod screens;
mod shrink;


pub use screens::containing_screen;
pub use shrink::ShrinkAdjustment;

use dockside_common::{PlacementError, Rect};

/// Result of one negotiation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Negotiation {
    /// Where the companion should be.
    pub companion: Rect,
    /// How far the tracked window must give way.
    pub shrink: ShrinkAdjustment,
    /// The tracked frame with `shrink` applied.
    pub tracked: Rect,
    /// Screen the placement was clamped to, if any.
    pub screen: Option<Rect>,
}

/// Place a companion of `default_width` beside `tracked`.
///
/// The companion docks to the trailing edge, or the leading edge when
/// `inverted`, and takes the tracked window's height. When it would cross
/// the containing screen's edge it slides back onto the screen and the
/// slide distance becomes the shrink for the tracked window, so the two
/// never overlap. Without a containing screen the unclamped frame is
/// returned with no shrink.
pub fn negotiate(
    tracked: Rect,
    screens: &[Rect],
    inverted: bool,
    default_width: f64,
) -> Result<Negotiation, PlacementError> {
    ensure_placeable("tracked", tracked)?;

    let desired_x = if inverted {
        tracked.min_x() - default_width
    } else {
        tracked.max_x()
    };

    let Some(screen) = containing_screen(tracked, screens) else {
        let companion = Rect::new(desired_x, tracked.y, default_width, tracked.height);
        ensure_placeable("companion", companion)?;
        return Ok(Negotiation {
            companion,
            shrink: ShrinkAdjustment::NONE,
            tracked,
            screen: None,
        });
    };

    let width = default_width.min(screen.width);
    let desired_x = if inverted {
        tracked.min_x() - width
    } else {
        tracked.max_x()
    };
    let x = desired_x.min(screen.max_x() - width).max(screen.min_x());

    let y = tracked.min_y().max(screen.min_y());
    let height = tracked.max_y().min(screen.max_y()) - y;
    let companion = Rect::new(x, y, width, height);
    ensure_placeable("companion", companion)?;

    // Only a slide toward the tracked window eats into its space; a slide
    // away from it leaves a gap instead.
    let shrink = if inverted {
        ShrinkAdjustment::leading((x - desired_x).max(0.0))
    } else {
        ShrinkAdjustment::trailing((desired_x - x).max(0.0))
    };
    let shrunk = shrink.apply(tracked);
    ensure_placeable("tracked", shrunk)?;

    Ok(Negotiation {
        companion,
        shrink,
        tracked: shrunk,
        screen: Some(screen),
    })
}

fn ensure_placeable(what: &'static str, rect: Rect) -> Result<(), PlacementError> {
    if rect.is_empty() || !rect.width.is_finite() || !rect.height.is_finite() {
        return Err(PlacementError::DegenerateFrame {
            what,
            width: rect.width,
            height: rect.height,
        });
    }
    Ok(())
}
