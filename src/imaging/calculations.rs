//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Scale `source` to an exact `width`, deriving the height from the aspect ratio.
///
/// Height is rounded to the nearest pixel and never drops below 1. Sources
/// narrower than `width` are scaled up, so the output width is always `width`.
///
/// # Examples
/// ```
/// # use photo_tool::imaging::fit_to_width;
/// assert_eq!(fit_to_width((800, 600), 200), (200, 150));
/// assert_eq!(fit_to_width((600, 800), 200), (200, 267));
/// ```
pub fn fit_to_width(source: (u32, u32), width: u32) -> (u32, u32) {
    let (src_w, src_h) = source;
    if src_w == 0 {
        return (width, 1);
    }
    let height = (width as f64 * src_h as f64 / src_w as f64).round() as u32;
    (width, height.max(1))
}
