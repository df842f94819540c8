//! Transliteration pipeline benchmarks.
//!
//! Measures per-conversion overhead across the supported pairs to confirm
//! the regex tables amortize (compiled once) and conversions stay cheap.
//!
//! Run with: cargo bench --bench pipeline_performance

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use traducir::{transliterate, Language};

const JS_SNIPPET: &str = "\
function classify(n) {
  if (n > 0) {
    for (let i = 0; i < n; i++) {
      console.log(i);
    }
    return \"positive\";
  }
  return \"other\";
}";

const PY_SNIPPET: &str = "\
def classify(n):
    if n > 0:
        for i in range(n):
            print(i)
        return \"positive\"
    return \"other\"";

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("transliterate");

    let cases = [
        ("js_to_python", JS_SNIPPET, Language::JavaScript, Language::Python),
        ("js_to_swift", JS_SNIPPET, Language::JavaScript, Language::Swift),
        ("python_to_js", PY_SNIPPET, Language::Python, Language::JavaScript),
    ];

    for (name, source, from, to) in cases {
        group.bench_with_input(BenchmarkId::new("pair", name), &source, |b, source| {
            b.iter(|| {
                let out = transliterate(black_box(*source), &from, &to);
                black_box(out);
            });
        });
    }

    group.finish();
}

fn bench_fallback(c: &mut Criterion) {
    c.bench_function("unsupported_pair_fallback", |b| {
        let from = Language::Other("java".to_string());
        let to = Language::Other("rust".to_string());
        b.iter(|| {
            let out = transliterate(black_box(JS_SNIPPET), &from, &to);
            black_box(out);
        });
    });
}

criterion_group!(benches, bench_pipeline, bench_fallback);
criterion_main!(benches);
