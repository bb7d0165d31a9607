use serde::Deserialize;

/// One post row from the post table. Field names follow the generic schema;
/// the Reddit corpus column names deserialize via the aliases.
#[derive(Clone, Debug, Deserialize)]
pub struct PostRecord {
    pub author: String,
    #[serde(alias = "subreddit")]
    pub community: String,
    /// Empty CSV fields come through as `None`; aggregation substitutes the
    /// missing-body placeholder rather than dropping the post.
    #[serde(default)]
    pub body: Option<String>,
}

impl PostRecord {
    pub fn new(author: impl Into<String>, community: impl Into<String>, body: impl Into<String>) -> Self {
        Self { author: author.into(), community: community.into(), body: Some(body.into()) }
    }
}

/// One label row from the label table. The sequence order of these rows is
/// the row order of every pipeline output.
#[derive(Clone, Debug, Deserialize)]
pub struct LabelRecord {
    pub author: String,
    #[serde(alias = "gender")]
    pub label: String,
}

impl LabelRecord {
    pub fn new(author: impl Into<String>, label: impl Into<String>) -> Self {
        Self { author: author.into(), label: label.into() }
    }
}
