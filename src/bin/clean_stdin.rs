//! Simple CLI that reads HTML from stdin and prints the cleaned
//! article as JSON. Handy for eyeballing what the cleaner does to a
//! saved page.
//!
//! Usage: clean_stdin [URL] [SOURCE_NAME] [TITLE] < page.html

use feedscrub::{extract_article_with_options, render, ArticleSource, Options};
use serde::Serialize;
use std::io::{self, Read};

#[derive(Serialize)]
struct Output {
    title: String,
    paragraphs: Vec<String>,
    html: String,
    chars_before: usize,
    chars_after: usize,
    removed_nodes: usize,
    warnings: Vec<String>,
}

fn main() {
    let mut args = std::env::args().skip(1);
    let url = args
        .next()
        .unwrap_or_else(|| "https://example.com/article".to_string());
    let name = args.next().unwrap_or_else(|| "stdin".to_string());
    let title = args.next().unwrap_or_default();

    // Read HTML from stdin
    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let source = ArticleSource::new(&title, &url, &name);
    let options = Options::default();
    let result = extract_article_with_options(&html, &source, &options);

    // Output JSON
    let output = match result {
        Ok(article) => {
            let rendered = render::to_html(&article, &options);
            Output {
                title: article.title,
                paragraphs: article.body_paragraphs,
                html: rendered,
                chars_before: article.stats.chars_before,
                chars_after: article.stats.chars_after,
                removed_nodes: article.stats.removed_nodes,
                warnings: article.warnings,
            }
        }
        Err(err) => Output {
            title: String::new(),
            paragraphs: Vec::new(),
            html: String::new(),
            chars_before: 0,
            chars_after: 0,
            removed_nodes: 0,
            warnings: vec![err.to_string()],
        },
    };

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
