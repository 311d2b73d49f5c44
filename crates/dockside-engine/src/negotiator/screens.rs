use dockside_common::Rect;

/// The screen a frame belongs to.
///
/// Picks the screen with the largest overlap. Ties go to the screen that
/// contains the frame's origin. A frame that overlaps nothing belongs to
/// the screen holding its origin, or to no screen at all.
pub fn containing_screen(frame: Rect, screens: &[Rect]) -> Option<Rect> {
    let origin = frame.origin();
    screens
        .iter()
        .map(|screen| {
            let overlap = frame.intersection(screen).map_or(0.0, |r| r.area());
            (*screen, overlap, screen.contains_point(origin))
        })
        .filter(|(_, overlap, holds_origin)| *overlap > 0.0 || *holds_origin)
        .max_by(|(_, a, a_origin), (_, b, b_origin)| {
            a.total_cmp(b).then_with(|| a_origin.cmp(b_origin))
        })
        .map(|(screen, _, _)| screen)
}
