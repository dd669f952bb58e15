use chatmark_engine::{format_message, to_html};
use criterion::{Criterion, criterion_group, criterion_main};

fn generate_message(sections: usize) -> String {
    let mut message = String::new();
    for i in 0..sections {
        message.push_str(&format!("🐾**Species {i}** (observed)\n"));
        message.push_str("- **Diet:** insects, **berries** and small mammals\n");
        message.push_str("• Active at dusk, see https://example.com/species/");
        message.push_str(&format!("{i}.\n\n"));
        message.push_str("Plain prose with a stray * and an **unterminated run\n");
    }
    message
}

fn bench_format_message(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");

    let content = generate_message(200);
    group.bench_function("format_message", |b| {
        b.iter(|| format_message(std::hint::black_box(&content), None));
    });

    let formatted = format_message(&content, None);
    group.bench_function("to_html", |b| {
        b.iter(|| to_html(std::hint::black_box(&formatted)));
    });

    group.finish();
}

criterion_group!(benches, bench_format_message);
criterion_main!(benches);
