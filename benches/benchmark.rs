//! Performance benchmarks for iframe-extract.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - Scanning a synthetic page where the iframe sits near the end
//! - Decoding the same page as UTF-16LE and through the UTF-8 fallback

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use iframe_extract::encoding::{decode_utf16le, decode_utf8_ignoring_errors, decode_with_fallback};
use iframe_extract::scan::find_iframe_src;

fn sample_page(paragraphs: usize) -> String {
    let mut html = String::from("<html><head><title>Posiedzenie Sejmu</title></head><body>");
    for i in 0..paragraphs {
        html.push_str(&format!(
            "<p class=\"stenogram\" data-id=\"{i}\">Poseł zabiera głos w sprawie punktu {i}.</p>"
        ));
    }
    html.push_str(r#"<iframe width="800" src="https://example.com/transmisja?posiedzenie=12"></iframe>"#);
    html.push_str("</body></html>");
    html
}

fn utf16le(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");
    for paragraphs in [10, 1_000, 10_000] {
        let html = sample_page(paragraphs);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(paragraphs), &html, |b, html| {
            b.iter(|| find_iframe_src(black_box(html)));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let html = sample_page(1_000);
    let wide = utf16le(&html);
    let mut narrow = html.into_bytes();
    // Odd length forces the fallback branch.
    narrow.push(0xFF);
    if narrow.len() % 2 == 0 {
        narrow.push(b' ');
    }

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(wide.len() as u64));
    group.bench_function("utf16le", |b| b.iter(|| decode_utf16le(black_box(&wide))));
    group.throughput(Throughput::Bytes(narrow.len() as u64));
    group.bench_function("utf8_ignoring_errors", |b| {
        b.iter(|| decode_utf8_ignoring_errors(black_box(&narrow)));
    });
    group.bench_function("with_fallback", |b| {
        b.iter(|| decode_with_fallback(black_box(&narrow)));
    });
    group.finish();
}

criterion_group!(benches, bench_scan, bench_decode);
criterion_main!(benches);
