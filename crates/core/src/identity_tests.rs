// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn ids() -> MediaIdentifiers {
 MediaIdentifiers::new()
}

#[test]
fn title_alone_never_matches() {
 let a = MediaIdentifiers {
 title: Some("Same Title".into()),
 ..ids()
 };
 let b = MediaIdentifiers {
 title: Some("Same Title".into()),
 ..ids()
 };
 assert!(!media_items_match(&a, &b));
}

#[test]
fn shared_imdb_id_matches() {
 let a = MediaIdentifiers {
 imdb_id: Some("tt0001".into()),
 ..ids()
 };
 let b = MediaIdentifiers {
 imdb_id: Some("tt0001".into()),
 ..ids()
 };
 assert!(media_items_match(&a, &b));
}

#[test]
fn empty_external_ids_never_match() {
 let a = MediaIdentifiers {
 imdb_id: Some(String::new()),
 ..ids()
 };
 let b = MediaIdentifiers {
 imdb_id: Some(String::new()),
 ..ids()
 };
 assert!(!media_items_match(&a, &b));
}

#[test]
fn native_guid_matches_literally() {
 let a = MediaIdentifiers {
 native_guid: Some("plex://movie/abc".into()),
 ..ids()
 };
 let b = MediaIdentifiers {
 native_guid: Some("plex://movie/abc".into()),
 ..ids()
 };
 assert!(media_items_match(&a, &b));
}

#[test]
fn native_guid_matches_by_suffix_across_schemes() {
 let a = MediaIdentifiers {
 native_guid: Some("plex://movie/abc123".into()),
 ..ids()
 };
 let b = MediaIdentifiers {
 native_guid: Some("com.plexapp.agents.imdb://abc123".into()),
 ..ids()
 };
 assert!(media_items_match(&a, &b));
}

#[test]
fn location_basenames_intersect() {
 let a = MediaIdentifiers {
 locations: vec!["/mnt/a/Movie.mkv".into()],
 ..ids()
 };
 let b = MediaIdentifiers {
 locations: vec!["D:\\other\\Movie.mkv".into()],
 ..ids()
 };
 assert!(media_items_match(&a, &b));
}

#[test]
fn disjoint_locations_do_not_match() {
 let a = MediaIdentifiers {
 locations: vec!["/a/One.mkv".into()],
 ..ids()
 };
 let b = MediaIdentifiers {
 locations: vec!["/a/Two.mkv".into()],
 ..ids()
 };
 assert!(!media_items_match(&a, &b));
}

/// match must not be used transitively. Here α matches β via IMDB,
/// β matches γ via filename, but α and γ share nothing — they must not match.
#[test]
fn non_transitive_triple() {
 let alpha = MediaIdentifiers {
 imdb_id: Some("tt777".into()),
 ..ids()
 };
 let beta = MediaIdentifiers {
 imdb_id: Some("tt777".into()),
 locations: vec!["/x/Shared.mkv".into()],
 ..ids()
 };
 let gamma = MediaIdentifiers {
 locations: vec!["/y/Shared.mkv".into()],
 ..ids()
 };

 assert!(media_items_match(&alpha, &beta));
 assert!(media_items_match(&beta, &gamma));
 assert!(!media_items_match(&alpha, &gamma));
}

proptest::proptest! {
 #[test]
 fn match_is_symmetric(
 imdb_a in proptest::option::of("[a-z0-9]{0,6}"),
 imdb_b in proptest::option::of("[a-z0-9]{0,6}"),
 guid_a in proptest::option::of("[a-z:/0-9]{0,16}"),
 guid_b in proptest::option::of("[a-z:/0-9]{0,16}"),
 loc_a in proptest::collection::vec("[a-zA-Z0-9_./]{0,12}", 0..3),
 loc_b in proptest::collection::vec("[a-zA-Z0-9_./]{0,12}", 0..3),
 ) {
 let a = MediaIdentifiers {
 imdb_id: imdb_a,
 native_guid: guid_a,
 locations: loc_a,
 ..ids()
 };
 let b = MediaIdentifiers {
 imdb_id: imdb_b,
 native_guid: guid_b,
 locations: loc_b,
 ..ids()
 };
 proptest::prop_assert_eq!(media_items_match(&a, &b), media_items_match(&b, &a));
 }
}
