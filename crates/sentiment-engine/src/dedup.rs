//! Near-duplicate removal before scoring
//!
//! The same story is often syndicated across feeds or re-published with a
//! fresh timestamp. Articles for one entity whose headlines match after
//! case-folding and whitespace collapsing are collapsed to the earliest
//! published copy.

use sentiment_core::Article;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Case-fold a headline and collapse runs of whitespace to single spaces
pub fn normalize_title(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Key under which two articles count as the same story
///
/// Uses the normalized headline; an article without a headline falls back to
/// its URL. `None` means the article cannot be matched and is always kept.
pub fn dedup_key(article: &Article) -> Option<(String, String)> {
    let title = normalize_title(&article.title);
    if !title.is_empty() {
        return Some((article.symbol.clone(), title));
    }

    let url = article.url.trim();
    if url.is_empty() {
        None
    } else {
        Some((article.symbol.clone(), format!("url:{url}")))
    }
}

/// Earlier publication wins; an unknown timestamp loses to a known one
fn published_order(a: &Article, b: &Article) -> Ordering {
    match (a.published, b.published) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Remove duplicate articles, keeping the earliest-published copy of each story
///
/// Ties on publication time keep the copy that appears first in the input.
/// Survivors are returned in their original relative order and are not modified.
pub fn deduplicate(articles: Vec<Article>) -> Vec<Article> {
    let mut best: HashMap<(String, String), usize> = HashMap::new();
    let mut keep = vec![false; articles.len()];

    for (index, article) in articles.iter().enumerate() {
        let Some(key) = dedup_key(article) else {
            keep[index] = true;
            continue;
        };

        match best.get(&key) {
            Some(&current) if published_order(article, &articles[current]) != Ordering::Less => {}
            Some(&current) => {
                keep[current] = false;
                keep[index] = true;
                best.insert(key, index);
            }
            None => {
                keep[index] = true;
                best.insert(key, index);
            }
        }
    }

    articles
        .into_iter()
        .zip(keep)
        .filter_map(|(article, kept)| kept.then_some(article))
        .collect()
}
