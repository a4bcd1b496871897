use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spider_core::{Chart, HeuristicFontOracle};

fn build_chart(axes: usize, series: usize) -> Chart {
    let mut ch = Chart::new();
    for i in 0..axes {
        ch.add_axis(format!("axis {i}")).expect("axis");
    }
    for s in 0..series {
        let data = (0..axes).map(|i| (format!("axis {i}"), ((i * 7 + s * 13) % 17) as f64 + 1.0));
        ch.add_series(format!("series {s}"), data).expect("series");
    }
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_commands");
    for &(axes, series) in &[(6usize, 3usize), (50, 20)] {
        group.bench_function(format!("axes{axes}_series{series}"), |b| {
            let ch = build_chart(axes, series);
            b.iter(|| {
                let cmds = ch.render_commands(&mut HeuristicFontOracle::new()).expect("render");
                black_box(cmds);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
