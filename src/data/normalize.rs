/// Largest raw pixel intensity.
pub const PIXEL_MAX: f64 = 255.0;

/// Maps raw [0, 255] pixel values to [0, 1] in place.
pub fn normalize_pixels(values: &mut [f64]) {
    for v in values.iter_mut() {
        *v /= PIXEL_MAX;
    }
}
