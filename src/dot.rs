//! Graphviz export of an automaton.

use std::io::{self, Write};

use crate::{AhoCorasick, ROOT_STATE_ID};

/// Writes the automaton in the Graphviz DOT language.
///
/// States are visited in breadth-first order from the root. Goto transitions are drawn as bold
/// edges labelled with their character, failure links as dashed gray edges, and states that
/// report patterns as double circles.
///
/// # Arguments
///
/// * `pma` - Automaton to draw.
/// * `wtr` - Destination.
/// * `show_root_fails` - Also draws failure links pointing to the root. The root's own
///   failure link is always drawn.
///
/// # Errors
///
/// Errors of `wtr` are returned as is.
///
/// # Examples
///
/// ```
/// use acmatch::AhoCorasick;
///
/// let pma = AhoCorasick::new(["ab", "b"]).unwrap();
///
/// let mut dot = vec![];
/// acmatch::dot::write_dot(&pma, &mut dot, false).unwrap();
/// let dot = String::from_utf8(dot).unwrap();
///
/// assert!(dot.starts_with("digraph automaton {"));
/// assert!(dot.contains("\t0 -> 1 [label=\"a\", weight=100, style=bold];"));
/// assert!(dot.contains("\t2 -> 3 [style=dashed, color=gray, constraint=false];"));
/// assert!(dot.contains("\t2 [shape=doublecircle];"));
/// ```
pub fn write_dot<W>(pma: &AhoCorasick, mut wtr: W, show_root_fails: bool) -> io::Result<()>
where
    W: Write,
{
    writeln!(wtr, "digraph automaton {{")?;
    writeln!(wtr, "\tgraph [rankdir=LR];")?;

    let mut q = vec![ROOT_STATE_ID];
    let mut qi = 0;
    while qi < q.len() {
        let state_id = q[qi];
        qi += 1;
        for (c, child_id) in pma.edges(state_id) {
            writeln!(
                wtr,
                "\t{state_id} -> {child_id} [label=\"{}\", weight=100, style=bold];",
                escape(c),
            )?;
            q.push(child_id);
        }
    }

    for &state_id in &q {
        let fail_id = pma.fail(state_id);
        if show_root_fails || fail_id != ROOT_STATE_ID || state_id == ROOT_STATE_ID {
            writeln!(
                wtr,
                "\t{state_id} -> {fail_id} [style=dashed, color=gray, constraint=false];"
            )?;
        }
    }

    for &state_id in &q {
        let shape = if pma.has_output(state_id) {
            "doublecircle"
        } else {
            "circle"
        };
        writeln!(wtr, "\t{state_id} [shape={shape}];")?;
    }

    writeln!(wtr, "}}")
}

fn escape(c: char) -> String {
    match c {
        '"' => "\\\"".to_string(),
        '\\' => "\\\\".to_string(),
        '\n' => "\\n".to_string(),
        c => c.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{AhoCorasickBuilder, Storage};

    #[test]
    fn test_write_dot_same_for_both_storages() {
        let patterns = ["he", "she", "his", "hers"];
        let mut dots = vec![];
        for storage in [Storage::Sparse, Storage::Dense] {
            let pma = AhoCorasickBuilder::new()
                .storage(storage)
                .build(patterns)
                .unwrap();
            let mut dot = vec![];
            write_dot(&pma, &mut dot, true).unwrap();
            dots.push(String::from_utf8(dot).unwrap());
        }
        assert_eq!(dots[0], dots[1]);
    }

    #[test]
    fn test_write_dot_hides_root_fails() {
        let pma = AhoCorasick::new(["a"]).unwrap();
        let mut dot = vec![];
        write_dot(&pma, &mut dot, false).unwrap();
        let expected = "digraph automaton {\n\
                        \tgraph [rankdir=LR];\n\
                        \t0 -> 1 [label=\"a\", weight=100, style=bold];\n\
                        \t0 -> 0 [style=dashed, color=gray, constraint=false];\n\
                        \t0 [shape=circle];\n\
                        \t1 [shape=doublecircle];\n\
                        }\n";
        assert_eq!(expected, String::from_utf8(dot).unwrap());
    }

    #[test]
    fn test_escape_label() {
        let pma = AhoCorasick::new(["\""]).unwrap();
        let mut dot = vec![];
        write_dot(&pma, &mut dot, false).unwrap();
        assert!(String::from_utf8(dot)
            .unwrap()
            .contains("[label=\"\\\"\", weight=100, style=bold]"));
    }
}
