/// Squared modulus past which an orbit is known to diverge (`|z| >= 2`).
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts how many iterations of `z = z² + c` stay inside the escape radius,
/// starting from `z = 0`, for `c = real + imag·i`.
///
/// Returns `max_iterations` exactly when the orbit never escapes within the
/// budget; callers treat that value as "inside the set". A point that leaves
/// the radius on the very first step (any `|c| >= 2`) returns 0.
#[inline]
#[must_use]
pub fn escape_time(real: f64, imag: f64, max_iterations: u32) -> u32 {
    let mut x = 0.0;
    let mut y = 0.0;
    let mut x2 = 0.0;
    let mut y2 = 0.0;
    let mut iteration = 0;

    while iteration < max_iterations {
        y = 2.0 * x * y + imag;
        x = x2 - y2 + real;
        x2 = x * x;
        y2 = y * y;

        if x2 + y2 >= ESCAPE_RADIUS_SQUARED {
            break;
        }

        iteration += 1;
    }

    iteration
}
