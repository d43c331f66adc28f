use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fractal_sonifier::adapters::pixel_format::copy_packed_to_rgba;
use fractal_sonifier::core::data::raster::pack_rgba;

fn bench_copy_packed_to_rgba(c: &mut Criterion) {
    let src: Vec<u32> = (0..800 * 600)
        .map(|i: u32| pack_rgba((i % 256) as u8, (i / 3 % 256) as u8, (i / 7 % 256) as u8, 255))
        .collect();
    let mut dst = vec![0u8; src.len() * 4];

    c.bench_function("copy_packed_to_rgba_800x600", |b| {
        b.iter(|| copy_packed_to_rgba(black_box(&src), black_box(&mut dst)))
    });
}

criterion_group!(benches, bench_copy_packed_to_rgba);
criterion_main!(benches);
