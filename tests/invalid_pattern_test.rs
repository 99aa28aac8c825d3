use acmatch::errors::AcmatchError;
use acmatch::{AhoCorasick, AhoCorasickBuilder, Storage};

#[test]
fn test_empty_pattern() {
    assert!(AhoCorasick::new([""]).is_err());
}

#[test]
fn test_empty_pattern_among_others() {
    let err = AhoCorasick::new(["abc", "", "123"]).unwrap_err();
    match err {
        AcmatchError::InvalidArgument(e) => assert_eq!("pattern.len()", e.arg()),
        e => panic!("unexpected error: {e}"),
    }
}

#[test]
fn test_empty_pattern_with_storage_sparse() {
    assert!(AhoCorasickBuilder::new()
        .storage(Storage::Sparse)
        .build([""])
        .is_err());
}

#[test]
fn test_empty_pattern_with_storage_dense() {
    assert!(AhoCorasickBuilder::new()
        .storage(Storage::Dense)
        .build([""])
        .is_err());
}

#[test]
fn test_empty_set() {
    assert!(AhoCorasick::new(Vec::<String>::new()).is_ok());
}

#[test]
fn test_duplicate_patterns() {
    let pma = AhoCorasick::new(["abc", "123", "abc"]).unwrap();
    assert_eq!(3, pma.num_patterns());
    assert_eq!(2, pma.find_overlapping("abc").len());
}

#[test]
fn test_error_message() {
    let err = AhoCorasick::new(["a", ""]).unwrap_err();
    assert_eq!(
        "InvalidArgumentError: pattern.len(): must be >= 1, but the pattern at index 1 is empty",
        err.to_string(),
    );
}
