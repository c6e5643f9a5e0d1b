//! Keyed word buckets
//!
//! A bucket index maps a cheap key (signature, deletion key, phonetic code) to
//! the ids of the words filed under it. It is built once from a frozen word
//! slice and only read afterwards.

use crate::core::{Word, WordId};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
pub struct KeyedBuckets {
    buckets: FxHashMap<String, Vec<WordId>>,
}

impl KeyedBuckets {
    /// File each word under exactly one key
    pub fn by_key<F>(words: &[Word], key: F) -> Self
    where
        F: Fn(&Word) -> String + Sync,
    {
        Self::by_keys(words, |word| std::iter::once(key(word)))
    }

    /// File each word under every key it produces
    ///
    /// Keys are computed in parallel; insertion happens in id order so every
    /// bucket lists its members in ascending id order.
    pub fn by_keys<F, K>(words: &[Word], keys: F) -> Self
    where
        F: Fn(&Word) -> K + Sync,
        K: IntoIterator<Item = String> + Send,
    {
        let per_word: Vec<K> = words.par_iter().map(&keys).collect();

        let mut buckets: FxHashMap<String, Vec<WordId>> = FxHashMap::default();
        for (i, word_keys) in per_word.into_iter().enumerate() {
            let id = WordId::new(i as u32);
            for key in word_keys {
                buckets.entry(key).or_default().push(id);
            }
        }

        Self { buckets }
    }

    /// Buckets holding at least two words, the only ones worth comparing
    #[must_use]
    pub fn shared(&self) -> Vec<&[WordId]> {
        self.buckets
            .values()
            .filter(|members| members.len() > 1)
            .map(Vec::as_slice)
            .collect()
    }

    /// Members of the bucket for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> &[WordId] {
        self.buckets.get(key).map_or(&[], Vec::as_slice)
    }

    /// Total number of keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Size of the most populated bucket
    #[must_use]
    pub fn largest(&self) -> usize {
        self.buckets.values().map(Vec::len).max().unwrap_or(0)
    }
}
