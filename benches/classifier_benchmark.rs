use criterion::{black_box, criterion_group, criterion_main, Criterion};
use foliar::{image_to_tensor, reply_for, Analyzer, ClassifierHandle, RuntimeConfig};
use image::{DynamicImage, Rgb, RgbImage};

fn photo(width: u32, height: u32) -> DynamicImage {
    let gradient = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 120) as u8, 100 + (y % 120) as u8, ((x + y) % 90) as u8])
    });
    DynamicImage::ImageRgb8(gradient)
}

fn demo_analyzer() -> Analyzer {
    let handle = ClassifierHandle::initialize(
        "/nonexistent/foliar-bench/model.onnx",
        &RuntimeConfig::default(),
    );
    Analyzer::new(handle)
}

fn bench_preprocessing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Preprocessing");

    // Configure sampling
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    let small = photo(320, 240);
    group.bench_function("small_photo", |b| {
        b.iter(|| image_to_tensor(black_box(&small)))
    });

    let large = photo(1920, 1080);
    group.bench_function("large_photo", |b| {
        b.iter(|| image_to_tensor(black_box(&large)))
    });

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Dispatch");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    let analyzer = demo_analyzer();
    let tensor = image_to_tensor(&photo(640, 480));

    group.bench_function("demo_dispatch", |b| {
        b.iter(|| analyzer.dispatch(black_box(&tensor)))
    });

    let small = photo(320, 240);
    group.bench_function("demo_analyze_end_to_end", |b| {
        b.iter(|| analyzer.analyze(black_box(&small)))
    });

    group.finish();
}

fn bench_responder(c: &mut Criterion) {
    let mut group = c.benchmark_group("Responder");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    group.bench_function("first_rule", |b| {
        b.iter(|| reply_for(black_box("when should I water my plants?")))
    });

    group.bench_function("last_rule", |b| {
        b.iter(|| reply_for(black_box("thank you for all the help")))
    });

    group.bench_function("fallback", |b| {
        b.iter(|| {
            reply_for(black_box(
                "tell me something entirely unrelated to gardening",
            ))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_preprocessing, bench_dispatch, bench_responder);
criterion_main!(benches);
