use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rphonemask::{PHONE_MASK_UTIL, Selection};

type TestEntity = (&'static str, &'static str);

fn setup_inputs() -> Vec<TestEntity> {
    vec![
        ("12025551234", "us"),
        ("+1 (202) 555-1234", "us"),
        ("79991234567", "ru"),
        ("442087654321", "gb"),
        ("4915123456789", "de"),
        ("12", "us"),
        ("", "us"),
    ]
}

fn formatting_benchmark(c: &mut Criterion) {
    let inputs: Vec<(&str, String)> = setup_inputs()
        .into_iter()
        .map(|(raw, region)| {
            let template = PHONE_MASK_UTIL
                .country_for_region(region)
                .unwrap()
                .mask
                .clone();
            (raw, template)
        })
        .collect();

    let mut group = c.benchmark_group("Masking");

    group.bench_function("format_to_mask", |b| {
        b.iter(|| {
            for (raw, template) in &inputs {
                PHONE_MASK_UTIL.format_to_mask(black_box(raw), black_box(template));
            }
        })
    });

    group.bench_function("format_and_track", |b| {
        b.iter(|| {
            for (raw, template) in &inputs {
                PHONE_MASK_UTIL.format_and_track(
                    black_box(raw),
                    black_box(template),
                    Selection::caret(raw.len()),
                    false,
                );
            }
        })
    });

    group.finish();
}

criterion_group!(benches, formatting_benchmark);
criterion_main!(benches);
