pub mod render_strip;
