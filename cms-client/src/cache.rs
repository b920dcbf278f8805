/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Time-bounded response cache with tag-based invalidation.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use cached::{Cached, TimedSizedCache};
use serde_json::Value;

/// Most responses kept at once; the least recently used entry goes first.
pub const MAX_ENTRIES: usize = 256;

/// Raw response bodies keyed by request URL.
///
/// Entries expire after the configured lifespan; a tag evicts every entry it
/// was attached to at once.
pub struct ResponseCache {
    entries: TimedSizedCache<String, Value>,
    tags: HashMap<String, HashSet<String>>,
}

impl ResponseCache {
    pub fn new(lifespan: Duration) -> Self {
        Self::with_capacity(MAX_ENTRIES, lifespan)
    }

    pub fn with_capacity(capacity: usize, lifespan: Duration) -> Self {
        Self {
            entries: TimedSizedCache::with_size_and_lifespan(
                capacity.max(1),
                lifespan.as_secs().max(1),
            ),
            tags: HashMap::new(),
        }
    }

    pub fn get(&mut self, url: &str) -> Option<Value> {
        self.entries.cache_get(&url.to_string()).cloned()
    }

    pub fn insert(&mut self, url: String, body: Value, tags: &[String]) {
        for tag in tags {
            self.tags
                .entry(tag.clone())
                .or_default()
                .insert(url.clone());
        }
        self.entries.cache_set(url, body);
        self.prune_tags();
    }

    /// Forget tagged URLs whose entry expired or was evicted for space, so
    /// the tag index never outgrows the cache.
    fn prune_tags(&mut self) {
        let tracked: usize = self.tags.values().map(HashSet::len).sum();
        if tracked <= self.entries.cache_size() * 2 {
            return;
        }
        let entries = &mut self.entries;
        for urls in self.tags.values_mut() {
            urls.retain(|url| entries.cache_get(url).is_some());
        }
        self.tags.retain(|_, urls| !urls.is_empty());
    }

    #[cfg(test)]
    fn tagged(&self, tag: &str) -> usize {
        self.tags.get(tag).map_or(0, HashSet::len)
    }

    /// Evict every entry carrying `tag`. Returns how many live entries were
    /// removed.
    pub fn invalidate_tag(&mut self, tag: &str) -> usize {
        let Some(urls) = self.tags.remove(tag) else {
            return 0;
        };
        urls.into_iter()
            .filter(|url| self.entries.cache_remove(url).is_some())
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.cache_size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for ResponseCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseCache")
            .field("entries", &self.entries.cache_size())
            .field("tags", &self.tags.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tag(name: &str) -> Vec<String> {
        vec![name.to_string()]
    }

    #[test]
    fn serves_inserted_bodies() {
        let mut cache = ResponseCache::new(Duration::from_secs(60));
        cache.insert("http://cms/api/global".into(), json!({"data": {}}), &tag("strapi-data"));
        assert_eq!(cache.get("http://cms/api/global"), Some(json!({"data": {}})));
        assert_eq!(cache.get("http://cms/api/home-page"), None);
    }

    #[test]
    fn invalidating_a_tag_evicts_all_its_entries() {
        let mut cache = ResponseCache::new(Duration::from_secs(60));
        cache.insert("a".into(), json!(1), &tag("strapi-data"));
        cache.insert("b".into(), json!(2), &tag("strapi-data"));
        cache.insert("c".into(), json!(3), &tag("other"));

        assert_eq!(cache.invalidate_tag("strapi-data"), 2);
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.get("c"), Some(json!(3)));
    }

    #[test]
    fn size_and_tag_index_stay_bounded() {
        let mut cache = ResponseCache::with_capacity(4, Duration::from_secs(60));
        for n in 0..50 {
            cache.insert(format!("/api/portfolios/{n}"), json!(n), &tag("strapi-data"));
        }
        assert_eq!(cache.len(), 4);
        assert!(cache.tagged("strapi-data") <= 8);
        assert_eq!(cache.get("/api/portfolios/49"), Some(json!(49)));
        assert_eq!(cache.get("/api/portfolios/0"), None);
        assert_eq!(cache.invalidate_tag("strapi-data"), 4);
        assert!(cache.is_empty());
    }

    #[test]
    fn unknown_tag_is_a_no_op() {
        let mut cache = ResponseCache::new(Duration::from_secs(60));
        cache.insert("a".into(), json!(1), &tag("strapi-data"));
        assert_eq!(cache.invalidate_tag("nope"), 0);
        assert_eq!(cache.len(), 1);
    }
}
