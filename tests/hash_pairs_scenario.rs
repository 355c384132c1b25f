#![cfg(feature = "combinator")]
//! End-to-end pipeline: parsing a `name=digest` list into a map.
//!
//! Parsing is not a library concern; these tests show that the public
//! combinators are enough to express it.

use std::collections::HashMap;

use ordseq::combinator::Pipeline;
use ordseq::error::SequenceError;
use ordseq::sequence::{ArrayList, Sequence};
use rstest::{fixture, rstest};

const DIGESTS: &str = "md5=37a6259cc0c1dae299a7866489dff0bd,sha1=2be88ca4,sha256=74234e98";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("ordseq=trace")
        .with_test_writer()
        .try_init();
}

#[fixture]
fn expected() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("md5", "37a6259cc0c1dae299a7866489dff0bd"),
        ("sha1", "2be88ca4"),
        ("sha256", "74234e98"),
    ])
}

fn split_pairs(input: &'static str) -> ArrayList<ArrayList<&'static str>> {
    let entries: ArrayList<&'static str> = input.split(',').collect();
    entries.map(|&entry| entry.split('=').collect())
}

#[rstest]
fn digests_fold_into_map(expected: HashMap<&'static str, &'static str>) {
    init_tracing();

    let hashes = split_pairs(DIGESTS)
        .filter(|pair| pair.len() == 2)
        .try_reduce(HashMap::new(), |mut hashes, pair| {
            hashes.insert(*pair.get(0)?, *pair.get(1)?);
            Ok::<_, SequenceError>(hashes)
        })
        .unwrap();

    assert_eq!(hashes, expected);
}

#[cfg(feature = "typeclass")]
#[rstest]
fn digest_batches_merge_before_folding(expected: HashMap<&'static str, &'static str>) {
    use ordseq::typeclass::{Foldable, Monoid};

    let batches = ["md5=37a6259cc0c1dae299a7866489dff0bd", "sha1=2be88ca4,sha256=74234e98"];
    let merged = ArrayList::combine_all(batches.into_iter().map(split_pairs));
    assert_eq!(merged.len(), 3);

    let hashes = merged.fold_left(HashMap::new(), |mut hashes, pair| {
        if let (Ok(name), Ok(digest)) = (pair.get(0), pair.get(1)) {
            hashes.insert(*name, *digest);
        }
        hashes
    });
    assert_eq!(hashes, expected);
}

#[rstest]
fn malformed_entries_are_dropped_by_filter() {
    let hashes = split_pairs("md5=abc,broken,sha1=x=y,,crc32=ff")
        .filter(|pair| pair.len() == 2)
        .reduce(HashMap::new(), |mut hashes, pair| {
            if let (Ok(name), Ok(digest)) = (pair.get(0), pair.get(1)) {
                hashes.insert(*name, *digest);
            }
            hashes
        });

    assert_eq!(hashes, HashMap::from([("md5", "abc"), ("crc32", "ff")]));
}

#[rstest]
fn missing_digest_surfaces_index_out_of_range() {
    init_tracing();

    let failure = split_pairs("md5=abc,sha1")
        .try_reduce(HashMap::new(), |mut hashes, pair| {
            hashes.insert(*pair.get(0)?, *pair.get(1)?);
            Ok::<_, SequenceError>(hashes)
        })
        .unwrap_err();

    assert_eq!(failure.index, 1);
    assert_eq!(
        failure.source,
        SequenceError::IndexOutOfRange {
            index: 1,
            length: 1
        }
    );
}

#[rstest]
fn for_each_collects_names_in_order() {
    let mut names = Vec::new();
    split_pairs(DIGESTS).for_each(|pair| {
        if let Some(name) = pair.first() {
            names.push(*name);
        }
    });
    assert_eq!(names, vec!["md5", "sha1", "sha256"]);
}
