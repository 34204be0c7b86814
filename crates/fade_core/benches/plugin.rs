use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fade_core::{generate, Easing, FadeConfig, FadePlugin, Stylesheet};

fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate table 24", |b| {
        b.iter(|| generate(black_box(24), false, Easing::EaseOutCubic))
    });
    c.bench_function("generate sampled 24", |b| {
        b.iter(|| generate(black_box(24), true, Easing::EaseInOutQuart))
    });
}

fn bench_plugin(c: &mut Criterion) {
    let config = FadeConfig::default();
    c.bench_function("build plugin", |b| b.iter(|| FadePlugin::new(black_box(&config))));

    let plugin = FadePlugin::new(&config);
    c.bench_function("render stylesheet", |b| {
        b.iter(|| {
            let mut stylesheet = Stylesheet::new();
            plugin.submit(&mut stylesheet);
            stylesheet.to_css()
        })
    });
}

criterion_group!(benches, bench_generate, bench_plugin);
criterion_main!(benches);
