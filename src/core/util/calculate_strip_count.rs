use std::num::NonZeroU32;

/// Fewest strips a render pass is split into, regardless of core count.
pub const MIN_STRIPS: u32 = 4;

/// Number of strips for a raster of `height` rows given `max_strips`
/// workers. Never more strips than rows, so no worker is handed nothing.
pub fn calculate_strips_for_height(max_strips: NonZeroU32, height: u32) -> u32 {
    max_strips.get().min(height).max(1)
}

/// One strip per available hardware thread, with a floor of [`MIN_STRIPS`].
pub fn calculate_strip_count(height: u32) -> u32 {
    let num_avail_threads = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1) as u32;

    let max_strips = NonZeroU32::new(num_avail_threads.max(MIN_STRIPS)).unwrap_or(NonZeroU32::MIN);

    calculate_strips_for_height(max_strips, height)
}
