use criterion::{
    black_box, criterion_group, criterion_main, AxisScale, BenchmarkId,
    Criterion, PlotConfiguration,
};
use nahc::{CurveOrder, Point};

/// Initialize a new benchmark group with logarithmic axis scale.
macro_rules! new_benchmark_group {
    ($c:ident, $name:literal) => {{
        let plot_config =
            PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
        let mut group = $c.benchmark_group($name);
        group.plot_config(plot_config);
        group
    }};
}

/// Curve order used by every benchmark.
const ORDER: u8 = 16;

/// Row-major scan of the top-left `side x side` block of the grid.
fn row_scan(side: u32) -> Vec<Point> {
    (0..side)
        .flat_map(|y| (0..side).map(move |x| Point::new(x, y)))
        .collect()
}

fn encode(c: &mut Criterion) {
    let order = CurveOrder::new(ORDER).expect("valid order");
    let inputs = [10, 100, 1000];

    let mut group = new_benchmark_group!(c, "Encode");
    for side in inputs {
        let points = row_scan(side);
        group.bench_with_input(
            BenchmarkId::new("Streaming", side),
            &points,
            |b, points| {
                b.iter(|| {
                    nahc::encode(ORDER, points.iter().copied())
                        .collect::<Result<Vec<_>, _>>()
                        .expect("valid points")
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("Reference", side),
            &points,
            |b, points| {
                b.iter(|| {
                    points
                        .iter()
                        .map(|point| {
                            nahc::encode_point(order, black_box(*point))
                        })
                        .collect::<Result<Vec<_>, _>>()
                        .expect("valid points")
                });
            },
        );
    }
    group.finish();
}

fn decode(c: &mut Criterion) {
    let order = CurveOrder::new(ORDER).expect("valid order");
    let inputs = [100, 10_000, 1_000_000];

    let mut group = new_benchmark_group!(c, "Decode");
    for count in inputs {
        let start = order.max_code() / 3;
        let codes = (start..start + count).collect::<Vec<u64>>();
        group.bench_with_input(
            BenchmarkId::new("Streaming", count),
            &codes,
            |b, codes| {
                b.iter(|| {
                    nahc::decode(ORDER, codes.iter().copied())
                        .collect::<Result<Vec<_>, _>>()
                        .expect("valid codes")
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("Reference", count),
            &codes,
            |b, codes| {
                b.iter(|| {
                    codes
                        .iter()
                        .map(|code| nahc::decode_point(order, black_box(*code)))
                        .collect::<Result<Vec<_>, _>>()
                        .expect("valid codes")
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, encode, decode);
criterion_main!(benches);
