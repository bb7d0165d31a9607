use featl::{build_profiles, CommunityIndex, FeatureError, PostRecord, MISSING_BODY};

fn posts_basic() -> Vec<PostRecord> {
    vec![
        PostRecord::new("a1", "sub1", "hi"),
        PostRecord::new("a1", "sub2", "there"),
        PostRecord::new("a2", "sub1", "yo"),
    ]
}

/// Index size equals the number of distinct communities and ids are dense
/// over [0, N).
#[test]
fn index_is_dense_and_unique() {
    let posts = posts_basic();
    let index = CommunityIndex::build(&posts);
    assert_eq!(index.len(), 2);

    let mut ids = vec![index.get("sub1").unwrap(), index.get("sub2").unwrap()];
    ids.sort_unstable();
    assert_eq!(ids, vec![0, 1]);
    assert_eq!(index.get("sub3"), None);
}

#[test]
fn empty_dataset_yields_empty_index() {
    let index = CommunityIndex::build(&[]);
    assert_eq!(index.len(), 0);
    assert!(index.is_empty());
}

/// Posting to the same community many times is the same as posting once.
#[test]
fn membership_is_idempotent() {
    let once = vec![PostRecord::new("a1", "sub1", "x")];
    let thrice = vec![
        PostRecord::new("a1", "sub1", "x"),
        PostRecord::new("a1", "sub1", "y"),
        PostRecord::new("a1", "sub1", "z"),
    ];

    let index = CommunityIndex::build(&thrice);
    let from_once = build_profiles(&once, &index).unwrap();
    let from_thrice = build_profiles(&thrice, &index).unwrap();

    assert_eq!(from_once["a1"].communities, from_thrice["a1"].communities);
}

/// Text is the bodies in dataset order, single-space joined, untouched.
#[test]
fn text_concatenation_preserves_dataset_order() {
    let posts = posts_basic();
    let index = CommunityIndex::build(&posts);
    let profiles = build_profiles(&posts, &index).unwrap();

    assert_eq!(profiles["a1"].text, "hi there");
    assert_eq!(profiles["a2"].text, "yo");
}

/// A missing body becomes the placeholder token, not a dropped post.
#[test]
fn missing_body_uses_placeholder() {
    let posts = vec![
        PostRecord::new("a1", "sub1", "hi"),
        PostRecord {
            author: "a1".to_string(),
            community: "sub2".to_string(),
            body: None,
        },
        PostRecord::new("a1", "sub1", "bye"),
    ];
    let index = CommunityIndex::build(&posts);
    let profiles = build_profiles(&posts, &index).unwrap();

    assert_eq!(profiles["a1"].text, format!("hi {} bye", MISSING_BODY));
}

/// Every distinct author in the dataset gets exactly one profile.
#[test]
fn one_profile_per_author() {
    let posts = posts_basic();
    let index = CommunityIndex::build(&posts);
    let profiles = build_profiles(&posts, &index).unwrap();
    assert_eq!(profiles.len(), 2);
}

/// A community missing from the index is a fatal inconsistency, never a
/// silently skipped post.
#[test]
fn unknown_community_fails_loudly() {
    let indexed = vec![PostRecord::new("a1", "sub1", "hi")];
    let index = CommunityIndex::build(&indexed);

    let posts = vec![
        PostRecord::new("a1", "sub1", "hi"),
        PostRecord::new("a1", "sub_unseen", "oops"),
    ];
    let err = build_profiles(&posts, &index).unwrap_err();
    assert!(matches!(err, FeatureError::IndexInconsistency(c) if c == "sub_unseen"));
}
