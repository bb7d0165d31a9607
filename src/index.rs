//! Dense integer ids for community names.

use crate::records::PostRecord;
use ahash::AHashMap;

/// Bijective mapping from community name to a dense id in `[0, N)`, where N is
/// the number of distinct communities in the dataset. Ids are assigned in
/// first-seen order, but nothing downstream depends on the assignment order,
/// only on uniqueness and density.
#[derive(Clone, Debug, Default)]
pub struct CommunityIndex {
    ids: AHashMap<String, usize>,
}

impl CommunityIndex {
    /// Build the index in one pass. Empty input yields an empty index.
    pub fn build(posts: &[PostRecord]) -> Self {
        let mut ids = AHashMap::new();
        for post in posts {
            let next = ids.len();
            ids.entry(post.community.clone()).or_insert(next);
        }
        Self { ids }
    }

    pub fn get(&self, community: &str) -> Option<usize> {
        self.ids.get(community).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
