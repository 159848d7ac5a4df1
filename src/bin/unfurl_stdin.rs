//! Simple CLI that reads HTML from stdin and outputs a JSON `CrawlResponse`
//! to stdout. Stands in for the HTTP handler that would normally call the
//! engine after fetching.

use rs_unfurl::{crawl, is_safe_url, CrawlRequest, CrawlResponse};
use std::io::{self, Read};

fn parse_args() -> Option<CrawlRequest> {
    let mut request = CrawlRequest::default();
    let mut args = std::env::args().skip(1);

    while let Some(flag) = args.next() {
        let value = args.next()?;
        match flag.as_str() {
            "--url" => request.source_url = value,
            "--title" => request.title_selector = Some(value),
            "--description" => request.description_selector = Some(value),
            "--image" => request.image_selector = Some(value),
            "--content" => request.content_selector = Some(value),
            _ => return None,
        }
    }

    Some(request)
}

fn main() {
    let Some(request) = parse_args() else {
        eprintln!(
            "usage: unfurl_stdin --url <url> [--title <sel>] [--description <sel>] [--image <sel>] [--content <sel>]"
        );
        std::process::exit(2);
    };

    // The fetch happened outside; still refuse to describe targets the
    // fetch layer should never have touched.
    let response = if !request.source_url.is_empty() && !is_safe_url(&request.source_url) {
        CrawlResponse::failure(format!("refusing unsafe url: {}", request.source_url))
    } else {
        let mut html = String::new();
        if io::stdin().read_to_string(&mut html).is_err() {
            eprintln!("failed to read from stdin");
            std::process::exit(1);
        }
        CrawlResponse::from(crawl(&html, &request))
    };

    println!("{}", serde_json::to_string(&response).unwrap_or_default());
}
