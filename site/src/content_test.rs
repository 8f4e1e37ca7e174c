use std::collections::HashSet;

use super::*;

#[test]
fn story_ids_are_unique() {
    let ids: HashSet<_> = STORIES.iter().map(|s| s.id).collect();
    assert_eq!(ids.len(), STORIES.len());
}

#[test]
fn story_images_are_served_from_public() {
    assert!(STORIES.iter().all(|s| s.image.starts_with("/images/")));
}

#[test]
fn headline_contains_highlight() {
    assert!(HEADLINE.ends_with(HEADLINE_HIGHLIGHT));
}

#[test]
fn counted_specs_match_stats() {
    let ends: Vec<u32> = SPECS
        .iter()
        .filter_map(|s| match s.value {
            SpecValue::Counted { end, .. } => Some(end),
            SpecValue::Fixed(_) => None,
        })
        .collect();
    assert_eq!(ends, vec![24, 50, 10]);
}
