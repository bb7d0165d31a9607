//! Per-author aggregation: membership set plus concatenated post text.

use crate::error::FeatureError;
use crate::index::CommunityIndex;
use crate::records::PostRecord;
use ahash::AHashMap;
use rayon::prelude::*;

/// What missing post bodies collapse to. The upstream corpus exports absent
/// bodies as the string "nan"; dropping those posts instead would change the
/// text corpus, so the placeholder is kept.
pub const MISSING_BODY: &str = "nan";

/// Derived per-author features.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthorProfile {
    /// Sorted, deduplicated community ids the author has posted in. Posting to
    /// the same community twice is the same as posting once.
    pub communities: Vec<usize>,
    /// All of the author's post bodies in dataset order, single-space joined.
    pub text: String,
}

/// Group posts by author and build every profile. Grouping is one sequential
/// pass so each group keeps the original dataset order; profile construction
/// is per-author independent and runs on the rayon pool.
pub fn build_profiles(
    posts: &[PostRecord],
    index: &CommunityIndex,
) -> Result<AHashMap<String, AuthorProfile>, FeatureError> {
    let mut groups: AHashMap<&str, Vec<usize>> = AHashMap::new();
    for (pos, post) in posts.iter().enumerate() {
        groups.entry(post.author.as_str()).or_default().push(pos);
    }

    let entries = groups
        .into_iter()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|(author, group)| {
            let profile = profile_for_group(posts, &group, index)?;
            Ok((author.to_string(), profile))
        })
        .collect::<Result<Vec<_>, FeatureError>>()?;

    Ok(entries.into_iter().collect())
}

fn profile_for_group(
    posts: &[PostRecord],
    group: &[usize],
    index: &CommunityIndex,
) -> Result<AuthorProfile, FeatureError> {
    let mut communities = Vec::with_capacity(group.len());
    let mut text = String::new();

    for (i, &pos) in group.iter().enumerate() {
        let post = &posts[pos];
        let id = index
            .get(&post.community)
            .ok_or_else(|| FeatureError::IndexInconsistency(post.community.clone()))?;
        communities.push(id);

        if i > 0 {
            text.push(' ');
        }
        text.push_str(post.body.as_deref().unwrap_or(MISSING_BODY));
    }

    communities.sort_unstable();
    communities.dedup();
    Ok(AuthorProfile { communities, text })
}
