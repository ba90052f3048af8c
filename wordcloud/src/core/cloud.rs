// src/core/cloud.rs
use std::collections::BTreeMap;

use crate::core::stopwords::Stopwords;
use crate::core::tokenize::tokenize;

/// Word to occurrence count. Ordered, so iterating yields the report order.
pub type WordCloud = BTreeMap<String, u64>;

/// Builds the frequency map for `text`. Stopwords are dropped before they
/// are counted; every key present has a count of at least one.
#[must_use]
pub fn build_cloud(text: &str, stopwords: &Stopwords) -> WordCloud {
    let mut cloud = WordCloud::new();

    for word in tokenize(text) {
        if stopwords.contains(&word) {
            continue;
        }
        *cloud.entry(word).or_insert(0) += 1;
    }

    cloud
}
