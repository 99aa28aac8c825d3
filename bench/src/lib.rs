//! Synthetic corpora shared by the benchmark and the memory report.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 20150101;

/// Generates `num` distinct-ish lowercase words of 3 to 12 letters with a skewed letter
/// distribution, so that patterns share prefixes and suffixes as natural words do.
pub fn generate_words(num: usize) -> Vec<String> {
    const LETTERS: &[u8] = b"eeeeettttaaaoooiiinnnsshhrrdlcumwfgypbvk";
    let mut rng = StdRng::seed_from_u64(SEED ^ num as u64);
    let mut words: Vec<String> = (0..num)
        .map(|_| {
            let len = rng.gen_range(3..=12);
            (0..len)
                .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
                .collect()
        })
        .collect();
    words.sort_unstable();
    words.dedup();
    words
}

/// Generates a haystack of about `len` bytes made of words separated by spaces and
/// punctuation.
pub fn generate_haystack(len: usize) -> String {
    let words = generate_words(20000);
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut haystack = String::with_capacity(len + 16);
    while haystack.len() < len {
        haystack.push_str(&words[rng.gen_range(0..words.len())]);
        haystack.push(if rng.gen_range(0..10) == 0 { '.' } else { ' ' });
    }
    haystack
}

/// Generates `num` patterns over a small multi-byte alphabet, as found in CJK dictionaries.
pub fn generate_cjk_words(num: usize) -> Vec<String> {
    const CHARS: &[char] = &['日', '本', '語', '世', '界', '中', 'に', 'の', 'は', 'を'];
    let mut rng = StdRng::seed_from_u64(SEED ^ (num as u64) << 1);
    let mut words: Vec<String> = (0..num)
        .map(|_| {
            let len = rng.gen_range(1..=5);
            (0..len)
                .map(|_| CHARS[rng.gen_range(0..CHARS.len())])
                .collect()
        })
        .collect();
    words.sort_unstable();
    words.dedup();
    words
}
