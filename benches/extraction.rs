//! Criterion benchmarks for the extraction pipeline
//!
//! Measures page parsing throughput over synthetic report text shaped like
//! real multi-line lab report layouts.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use labreport_extractor::ReportParser;

/// Build one synthetic report page with the given number of marker blocks
fn synthetic_page(markers: usize) -> String {
    let mut lines = vec![
        "LABORATORY TEST REPORT".to_string(),
        "TEST PARAMETER".to_string(),
        "RESULT".to_string(),
    ];

    for i in 0..markers {
        lines.push(format!("MARKER BLOCK {}", i));
        lines.push("Method: Automated".to_string());
        lines.push(format!("{}.{}", 10 + (i % 90), i % 10));
        lines.push("Normal: 10 - 100".to_string());
    }

    lines.push("End Of Report".to_string());
    lines.join("\n")
}

fn bench_extract(c: &mut Criterion) {
    let parser = ReportParser::new();

    let single_page = vec![synthetic_page(30)];
    c.bench_function("extract_single_page_30_markers", |b| {
        b.iter(|| parser.extract(black_box(&single_page)).unwrap())
    });

    let multi_page: Vec<String> = (0..10).map(|_| synthetic_page(30)).collect();
    c.bench_function("extract_ten_pages_300_markers", |b| {
        b.iter(|| parser.extract(black_box(&multi_page)).unwrap())
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
