use super::*;

use std::collections::HashSet;

use rand::Rng;

const STORAGES: [Storage; 2] = [Storage::Sparse, Storage::Dense];

fn generate_random_string(size: usize) -> String {
    const CHARSET: &[u8] = b"random";
    let mut rng = rand::thread_rng();

    (0..size)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

fn build(storage: Storage, patterns: &[&str]) -> AhoCorasick {
    AhoCorasickBuilder::new()
        .storage(storage)
        .build(patterns)
        .unwrap()
}

fn triples<'a>(pma: &'a AhoCorasick, haystack: &str) -> Vec<(&'a str, usize, usize)> {
    pma.find_overlapping_iter(haystack)
        .map(|m| (m.pattern(), m.start(), m.end()))
        .collect()
}

#[test]
fn test_automaton_structure() {
    /*
     *          e--> 2 --r--> 8 --s--> 9
     *         /
     *   h--> 1 --i--> 6 --s--> 7
     *  /
     * 0 --s--> 3 --h--> 4 --e--> 5
     */
    for storage in STORAGES {
        let pma = build(storage, &["he", "she", "his", "hers"]);

        assert_eq!(storage, pma.storage());
        assert_eq!(10, pma.num_states());
        assert_eq!(vec![('h', 1), ('s', 3)], pma.edges(0));
        assert_eq!(vec![('e', 2), ('i', 6)], pma.edges(1));
        assert_eq!(vec![('r', 8)], pma.edges(2));
        assert_eq!(vec![('e', 5)], pma.edges(4));
        assert!(pma.edges(9).is_empty());

        let fail_expected = vec![0, 0, 0, 0, 1, 2, 0, 3, 0, 3];
        let fail_actual: Vec<_> = (0..10).map(|s| pma.fail(s)).collect();
        assert_eq!(fail_expected, fail_actual);

        assert_eq!(&[] as &[u32], pma.outputs(0));
        assert_eq!(&[0], pma.outputs(2));
        assert_eq!(&[1, 0], pma.outputs(5));
        assert_eq!(&[2], pma.outputs(7));
        assert_eq!(&[3], pma.outputs(9));
        assert!(!pma.has_output(4));
        assert!(pma.has_output(5));
    }
}

#[test]
fn test_worked_example() {
    for storage in STORAGES {
        let pma = build(storage, &["he", "she", "his", "hers"]);
        assert_eq!(
            vec![("she", 1, 3), ("he", 2, 3), ("hers", 2, 5)],
            triples(&pma, "ushers"),
        );
    }
}

#[test]
fn test_overlap_example() {
    for storage in STORAGES {
        let pma = build(storage, &["a", "ab", "b"]);
        assert_eq!(
            vec![("a", 0, 0), ("ab", 0, 1), ("b", 1, 1)],
            triples(&pma, "ab"),
        );
    }
}

#[test]
fn test_exact_self_match() {
    for storage in STORAGES {
        let pma = build(storage, &["abc"]);
        assert_eq!(vec![("abc", 0, 2)], triples(&pma, "abc"));
    }
}

#[test]
fn test_empty_haystack() {
    for storage in STORAGES {
        let pma = build(storage, &["a", "ab"]);
        assert!(triples(&pma, "").is_empty());
    }
}

#[test]
fn test_empty_pattern_set() {
    for storage in STORAGES {
        let pma = build(storage, &[]);
        assert_eq!(1, pma.num_states());
        assert_eq!(0, pma.num_patterns());
        assert_eq!(0, pma.fail(0));
        assert!(pma.edges(0).is_empty());
        assert!(triples(&pma, "anything at all").is_empty());
    }
}

#[test]
fn test_unseen_characters() {
    for storage in STORAGES {
        let pma = build(storage, &["ab", "b"]);
        assert_eq!(
            vec![("ab", 3, 4), ("b", 4, 4), ("b", 8, 8)],
            triples(&pma, "xyzab\u{1f600}a!b"),
        );
    }
}

#[test]
fn test_duplicate_patterns_reported_per_copy() {
    for storage in STORAGES {
        let pma = build(storage, &["ab", "x", "ab"]);
        let ids: Vec<_> = pma
            .find_overlapping_iter("abab")
            .map(|m| (m.pattern_id(), m.start(), m.end()))
            .collect();
        assert_eq!(vec![(0, 0, 1), (2, 0, 1), (0, 2, 3), (2, 2, 3)], ids);
    }
}

#[test]
fn test_byte_range_multibyte() {
    for storage in STORAGES {
        let pma = build(storage, &["世界", "界中", "に"]);
        let haystack = "全世界中に";
        let found: Vec<_> = pma
            .find_overlapping_iter(haystack)
            .map(|m| (m.start(), m.end(), &haystack[m.byte_range()]))
            .collect();
        assert_eq!(vec![(1, 2, "世界"), (2, 3, "界中"), (4, 4, "に")], found);
    }
}

#[test]
fn test_callback_agrees_with_iterator() {
    for storage in STORAGES {
        let pma = build(storage, &["he", "she", "his", "hers", "s"]);
        let haystack = "ushers ushers his hershey";
        let mut found = vec![];
        pma.for_each_match(haystack, |start, end, pattern| {
            found.push((pattern, start, end))
        });
        assert_eq!(triples(&pma, haystack), found);
    }
}

#[test]
fn test_iterator_can_stop_early() {
    let pma = AhoCorasick::new(["a"]).unwrap();
    let mut it = pma.find_overlapping_iter("aaaa");
    assert_eq!(Some(0), it.next().map(|m| m.start()));
    assert_eq!(Some(1), it.next().map(|m| m.start()));
    drop(it);

    // A new search starts over from the root.
    assert_eq!(4, pma.find_overlapping("aaaa").len());
}

#[test]
fn test_auto_storage() {
    let pma = AhoCorasick::new(["he", "she"]).unwrap();
    assert_eq!(Storage::Dense, pma.storage());

    let pma = AhoCorasickBuilder::new()
        .dense_cell_limit(1)
        .build(["he", "she"])
        .unwrap();
    assert_eq!(Storage::Sparse, pma.storage());
}

#[test]
fn test_pattern_accessor() {
    let pma = AhoCorasick::new(["he", "she"]).unwrap();
    assert_eq!(Some("she"), pma.pattern(1));
    assert_eq!(None, pma.pattern(2));
}

#[test]
fn test_shared_between_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AhoCorasick>();

    let pma = AhoCorasick::new(["he", "she", "his", "hers"]).unwrap();
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                assert_eq!(
                    vec![("she", 1, 3), ("he", 2, 3), ("hers", 2, 5)],
                    triples(&pma, "ushers"),
                );
            });
        }
    });
}

#[test]
fn test_num_states_random() {
    for _ in 0..100 {
        let patterns: Vec<_> = (0..50).map(|i| generate_random_string(1 + i % 8)).collect();
        let total: usize = patterns.iter().map(String::len).sum();
        let pma = AhoCorasick::new(&patterns).unwrap();
        assert!(pma.num_states() <= total + 1);

        // Every non-root state is reachable exactly once from the root.
        let mut visited = vec![false; pma.num_states()];
        let mut visitor = vec![0u32];
        while let Some(state_id) = visitor.pop() {
            assert!(!visited[state_id as usize]);
            visited[state_id as usize] = true;
            for (_, child_id) in pma.edges(state_id) {
                visitor.push(child_id);
            }
        }
        assert!(visited.into_iter().all(|v| v));
    }
}

#[test]
fn test_storages_agree_random() {
    for _ in 0..100 {
        let mut patterns = HashSet::new();
        for _ in 0..50 {
            patterns.insert(generate_random_string(3));
        }
        let patterns: Vec<_> = patterns.into_iter().collect();
        let haystack = generate_random_string(200);

        let sparse = AhoCorasickBuilder::new()
            .storage(Storage::Sparse)
            .build(&patterns)
            .unwrap();
        let dense = AhoCorasickBuilder::new()
            .storage(Storage::Dense)
            .build(&patterns)
            .unwrap();

        assert_eq!(triples(&sparse, &haystack), triples(&dense, &haystack));
        for state_id in 0..sparse.num_states() as u32 {
            assert_eq!(sparse.fail(state_id), dense.fail(state_id));
            assert_eq!(sparse.outputs(state_id), dense.outputs(state_id));
        }
    }
}

#[test]
fn test_repeated_search_is_deterministic() {
    let patterns: Vec<_> = (0..30).map(|_| generate_random_string(2)).collect();
    let pma = AhoCorasick::new(&patterns).unwrap();
    let rebuilt = AhoCorasick::new(&patterns).unwrap();
    let haystack = generate_random_string(500);

    let first = triples(&pma, &haystack);
    assert_eq!(first, triples(&pma, &haystack));
    assert_eq!(first, triples(&rebuilt, &haystack));
}
