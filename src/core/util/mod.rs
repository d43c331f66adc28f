pub mod calculate_strip_count;
pub mod calculate_strip_rows;
pub mod map_value;
pub mod pixel_to_complex_coords;
