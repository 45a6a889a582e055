//! Performance benchmarks for feedscrub.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - Small synthetic article (~1KB) for the full pipeline
//! - Generated ad-heavy pages of increasing size for the cleaning stage

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use feedscrub::{
    clean, dom, extract_article, extract_article_with_options, ArticleSource, Options,
    OverflowPolicy, RuleSet,
};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Late goal settles derby</title>
</head>
<body>
    <nav>
        <a href="/">Home</a>
        <a href="/fixtures">Fixtures</a>
    </nav>
    <article>
        <h1>Late goal settles derby</h1>
        <p>The visitors struck in the final minute through their captain, who had
        been quiet for long spells but produced the finish the game deserved.</p>
        <p>Both managers said afterwards that the match turned on the sending-off
        just before the hour, which left the home side chasing shadows.</p>
        <p>A third paragraph keeps the sample close to a real report, with enough
        text for the cleaning passes to work through during the benchmark.</p>
        <div class="ad-banner">Buy now! 50% off replica shirts!</div>
        <div class="newsletter-signup">Subscribe to our newsletter for daily team news.</div>
    </article>
    <aside>
        <h3>Related</h3>
        <ul>
            <li>More derby coverage</li>
        </ul>
    </aside>
    <footer>
        <p>Copyright 2025</p>
    </footer>
</body>
</html>
"#;

fn sample_source() -> ArticleSource {
    ArticleSource::new(
        "News: Late goal settles derby",
        "https://example.com/derby-report",
        "Example Sport",
    )
}

fn bench_extract_default(c: &mut Criterion) {
    let source = sample_source();
    c.bench_function("extract_default", |b| {
        b.iter(|| extract_article(black_box(SAMPLE_HTML), black_box(&source)));
    });
}

fn bench_extract_truncate_policy(c: &mut Criterion) {
    let source = sample_source();
    let options = Options {
        overflow: OverflowPolicy::Truncate {
            max_chars: OverflowPolicy::LEGACY_TRUNCATE_CHARS,
        },
        bold_lead_paragraph: true,
        ..Options::default()
    };

    c.bench_function("extract_truncate_policy", |b| {
        b.iter(|| {
            extract_article_with_options(
                black_box(SAMPLE_HTML),
                black_box(&source),
                black_box(&options),
            )
        });
    });
}

/// Benchmark the cleaning stage alone on generated ad-heavy pages.
///
/// Cleaning mutates the tree, so each iteration re-parses; the numbers
/// cover parse plus both removal sweeps.
fn bench_clean_document(c: &mut Criterion) {
    let rules = RuleSet::default();
    let options = Options::default();

    let mut group = c.benchmark_group("parse_and_clean");

    for paragraph_count in [10_usize, 50, 200] {
        let html = synthetic_page(paragraph_count);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(paragraph_count),
            &html,
            |b, html| {
                b.iter(|| {
                    let document = dom::parse(black_box(html));
                    clean::clean_document(&document, &rules, &options)
                });
            },
        );
    }

    group.finish();
}

/// Build a page with `paragraph_count` report paragraphs and an ad
/// block every fifth paragraph.
fn synthetic_page(paragraph_count: usize) -> String {
    let mut body = String::new();
    for i in 0..paragraph_count {
        body.push_str(&format!(
            "<p>Paragraph {i}: the team kept possession well and the coach said the \
             second-half performance deserved more than a single goal.</p>\n"
        ));
        if i % 5 == 0 {
            body.push_str(
                "<div class=\"ad-banner\">Buy now! Limited time offer on season tickets!</div>\n",
            );
        }
    }
    format!(
        "<html><head><title>Synthetic</title></head><body>\
         <nav><a href=\"/\">Home</a></nav>\
         <article>{body}</article>\
         <footer>Copyright 2025</footer></body></html>"
    )
}

criterion_group!(
    benches,
    bench_extract_default,
    bench_extract_truncate_policy,
    bench_clean_document
);
criterion_main!(benches);
