//! Performance benchmarks for rs-htmlutil.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - Bounded and unbounded searches over a small synthetic page
//! - Node removal and attribute stripping on a freshly parsed copy
//! - A generated page with many repeated blocks for scaling

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rs_htmlutil::{dom, remove_attributes, remove_nodes, search, Limit, MatchCriteria};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Sample Article</title>
</head>
<body>
    <nav class="menu">
        <a href="/" rel="home">Home</a>
        <a href="/about">About</a>
    </nav>
    <article>
        <h1>Sample Article Title</h1>
        <p class="byline">By the editors</p>
        <p>First paragraph with <a href="/x" rel="nofollow">a link</a>.</p>
        <div class="ad"><p>Sponsored</p></div>
        <p>Second paragraph.</p>
        <div class="ad"><div class="ad"><p>Nested sponsor</p></div></div>
    </article>
    <footer>
        <p>Copyright 2024</p>
    </footer>
</body>
</html>
"#;

fn generated_html(blocks: usize) -> String {
    let mut html = String::from("<html><body>");
    for i in 0..blocks {
        html.push_str(&format!(
            r#"<section id="s{i}"><p class="text">block {i}</p><div class="ad">ad {i}</div></section>"#
        ));
    }
    html.push_str("</body></html>");
    html
}

fn bench_search(c: &mut Criterion) {
    let doc = dom::parse(SAMPLE_HTML);
    let root = doc.root();
    let all_paragraphs = MatchCriteria::new("p");
    let first_ad = MatchCriteria::new("div").with_attr("class").with_value("ad").first();

    c.bench_function("search_unbounded", |b| {
        b.iter(|| search(black_box(&root), black_box(&all_paragraphs)));
    });
    c.bench_function("search_first", |b| {
        b.iter(|| search(black_box(&root), black_box(&first_ad)));
    });
}

fn bench_mutation(c: &mut Criterion) {
    let ads = MatchCriteria::new("div").with_attr("class").with_value("ad");

    c.bench_function("remove_nodes", |b| {
        b.iter(|| {
            let doc = dom::parse(black_box(SAMPLE_HTML));
            remove_nodes(&doc.root(), &ads)
        });
    });
    c.bench_function("remove_attributes", |b| {
        b.iter(|| {
            let doc = dom::parse(black_box(SAMPLE_HTML));
            remove_attributes(&doc.root(), "a", "rel", "nofollow", Limit::Unbounded)
        });
    });
}

/// Benchmark with generated pages of increasing size
fn bench_generated_html(c: &mut Criterion) {
    let mut group = c.benchmark_group("generated");

    for blocks in [10, 100, 1000] {
        let html = generated_html(blocks);
        let doc = dom::parse(&html);
        let root = doc.root();
        let criteria = MatchCriteria::any_element().with_attr("class").with_value("ad");

        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("search", blocks), &criteria, |b, criteria| {
            b.iter(|| search(black_box(&root), criteria));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_search, bench_mutation, bench_generated_html);
criterion_main!(benches);
