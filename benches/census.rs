use bit_grid::utils::bits::UNIT_BITS;
use bit_grid::utils::census::{clear_bits_parallel, clear_bits_sequential};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn storage(units: usize) -> Vec<u8> {
    (0..units).map(|i| (i.wrapping_mul(31) ^ (i >> 3)) as u8).collect()
}

fn bench_census_small(c: &mut Criterion) {
    let units = storage(32);
    let bits = units.len() * UNIT_BITS;
    c.bench_function("census_16x16_sequential", |b| {
        b.iter(|| clear_bits_sequential(black_box(&units), black_box(bits)))
    });
}

fn bench_census_large(c: &mut Criterion) {
    // 4096 x 4096 cells
    let units = storage(4096 * 4096 / UNIT_BITS);
    let bits = units.len() * UNIT_BITS;
    c.bench_function("census_4096x4096_sequential", |b| {
        b.iter(|| clear_bits_sequential(black_box(&units), black_box(bits)))
    });
    c.bench_function("census_4096x4096_parallel", |b| {
        b.iter(|| clear_bits_parallel(black_box(&units), black_box(bits)))
    });
}

criterion_group!(benches, bench_census_small, bench_census_large);
criterion_main!(benches);
