use acmatch::{AhoCorasickBuilder, Storage};
use acmatch_bench::{generate_cjk_words, generate_words};

fn main() {
    for num in [100, 5000, 15000, 100000] {
        println!("== words_{num} ==");
        show_memory_stats(&generate_words(num));
    }
    {
        println!("== cjk_5000 ==");
        show_memory_stats(&generate_cjk_words(5000));
    }
}

fn show_memory_stats(patterns: &[String]) {
    for (title, storage) in [
        ("acmatch (sparse)", Storage::Sparse),
        ("acmatch (dense)", Storage::Dense),
    ] {
        let pma = AhoCorasickBuilder::new()
            .storage(storage)
            .build(patterns)
            .unwrap();
        format_memory(title, pma.heap_bytes());
    }
    {
        let pma = aho_corasick::AhoCorasick::new(patterns).unwrap();
        format_memory("aho_corasick", pma.memory_usage());
    }
}

fn format_memory(title: &str, bytes: usize) {
    println!(
        "{}: {} bytes, {:.3} MiB",
        title,
        bytes,
        bytes as f64 / (1024.0 * 1024.0)
    );
}
