use std::fs::File;
use std::io::{self, prelude::*, stdin, BufReader};
use std::path::PathBuf;

use acmatch::{AhoCorasick, AhoCorasickBuilder, Storage};
use clap::{Parser, ValueEnum};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ArgColor {
    Never,
    Always,
    Auto,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ArgStorage {
    Auto,
    Sparse,
    Dense,
}

impl From<ArgStorage> for Storage {
    fn from(storage: ArgStorage) -> Self {
        match storage {
            ArgStorage::Auto => Self::Auto,
            ArgStorage::Sparse => Self::Sparse,
            ArgStorage::Dense => Self::Dense,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "acfind", about = "A program to find patterns in files.")]
struct Args {
    /// Match patterns separated with new lines.
    #[arg(short)]
    patterns: Option<String>,

    /// A filename containing patterns.
    #[arg(short = 'f')]
    pattern_file: Option<PathBuf>,

    /// Suppresses printing filenames.
    #[arg(long)]
    no_filename: bool,

    /// Prints line numbers.
    #[arg(short = 'n', long)]
    line_number: bool,

    /// Highlights the matching texts.
    #[arg(long, value_enum, default_value = "never")]
    color: ArgColor,

    /// Transition store of the automaton.
    #[arg(long, value_enum, default_value = "auto")]
    storage: ArgStorage,

    /// Prints the number of occurrences of each pattern instead of matching lines.
    #[arg(short = 'c', long)]
    count: bool,

    /// Prints the automaton in the Graphviz DOT language and exits.
    #[arg(long)]
    dot: bool,

    /// Also draws failure links pointing to the root with --dot.
    #[arg(long)]
    dot_root_fails: bool,

    /// File paths.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

/// Finds patterns using the given PMA and prints lines to the given `stream`.
/// When no pattern is found, this function does not print any string.
fn find_and_output(
    pma: &AhoCorasick,
    line: &str,
    filename: Option<&str>,
    line_no: Option<usize>,
    color: ArgColor,
    stream: &mut StandardStream,
) -> io::Result<()> {
    match color {
        ArgColor::Never => {
            if pma.find_overlapping_iter(line).next().is_some() {
                if let Some(filename) = filename {
                    write!(stream, "{filename}:")?;
                }
                if let Some(line_no) = line_no {
                    write!(stream, "{line_no}:")?;
                }
                writeln!(stream, "{line}")?;
            }
        }
        ArgColor::Always | ArgColor::Auto => {
            let mut color_counts = vec![0isize; line.len() + 1];
            let mut matched = false;
            for m in pma.find_overlapping_iter(line) {
                matched = true;
                let range = m.byte_range();
                color_counts[range.start] += 1;
                color_counts[range.end] -= 1;
            }
            if matched {
                if let Some(filename) = filename {
                    write!(stream, "{filename}:")?;
                }
                if let Some(line_no) = line_no {
                    write!(stream, "{line_no}:")?;
                }
                let mut depth = 0;
                let mut prev_pos = 0;
                for (pos, c) in color_counts.into_iter().enumerate() {
                    let new_depth = depth + c;
                    if depth == 0 && new_depth != 0 {
                        stream.reset()?;
                        write!(stream, "{}", &line[prev_pos..pos])?;
                        prev_pos = pos;
                    } else if depth != 0 && new_depth == 0 {
                        stream.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                        write!(stream, "{}", &line[prev_pos..pos])?;
                        prev_pos = pos;
                    }
                    depth = new_depth;
                }
                stream.reset()?;
                writeln!(stream, "{}", &line[prev_pos..])?;
            }
        }
    }
    Ok(())
}

/// Reads the patterns given by `-f` and `-p`. Empty lines are skipped.
fn load_patterns(args: &Args) -> io::Result<Vec<String>> {
    let mut patterns = vec![];
    if let Some(filename) = &args.pattern_file {
        let buf = BufReader::new(File::open(filename)?);
        for line in buf.lines() {
            let line = line?;
            if !line.is_empty() {
                patterns.push(line);
            }
        }
    }
    if let Some(pats_string) = &args.patterns {
        for pattern in pats_string.split('\n') {
            if !pattern.is_empty() {
                patterns.push(pattern.to_string());
            }
        }
    }
    Ok(patterns)
}

/// Visits the lines of the given files, or of the standard input if no file is given.
/// Unreadable files are reported to stderr and skipped.
fn for_each_line<F>(args: &Args, mut f: F) -> io::Result<()>
where
    F: FnMut(&str, Option<&str>, usize) -> io::Result<()>,
{
    if args.files.is_empty() {
        for (i, line) in stdin().lock().lines().enumerate() {
            f(&line?, None, i)?;
        }
    }

    for path in &args.files {
        let filename = path.to_str().filter(|_| !args.no_filename);
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!("{}: {}", path.display(), err);
                continue;
            }
        };
        for (i, line) in BufReader::new(file).lines().enumerate() {
            match line {
                Ok(line) => f(&line, filename, i)?,
                Err(err) => {
                    tracing::warn!("{}: {}", path.display(), err);
                    break;
                }
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var("ACFIND_LOG")
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    // Builds a PMA from given patterns.
    let patterns = load_patterns(&args)?;
    let pma = AhoCorasickBuilder::new()
        .storage(args.storage.into())
        .build(patterns)?;
    tracing::info!(
        num_patterns = pma.num_patterns(),
        num_states = pma.num_states(),
        storage = ?pma.storage(),
        heap_bytes = pma.heap_bytes(),
        "automaton ready"
    );

    if args.dot {
        acmatch::dot::write_dot(&pma, io::stdout().lock(), args.dot_root_fails)?;
        return Ok(());
    }

    if args.count {
        let mut counts = vec![0usize; pma.num_patterns()];
        for_each_line(&args, |line, _, _| {
            for m in pma.find_overlapping_iter(line) {
                counts[m.pattern_id()] += 1;
            }
            Ok(())
        })?;
        let mut stdout = io::stdout().lock();
        for (pattern_id, count) in counts.into_iter().enumerate() {
            let pattern = pma.pattern(pattern_id).unwrap_or_default();
            writeln!(stdout, "{count}\t{pattern}")?;
        }
        return Ok(());
    }

    // Initialize the stream of termcolor.
    let mut stdout = match args.color {
        ArgColor::Never => StandardStream::stdout(ColorChoice::Never),
        ArgColor::Always => StandardStream::stdout(ColorChoice::Always),
        ArgColor::Auto => StandardStream::stdout(ColorChoice::Auto),
    };

    for_each_line(&args, |line, filename, i| {
        let line_number = args.line_number.then_some(i + 1);
        find_and_output(&pma, line, filename, line_number, args.color, &mut stdout)
    })?;

    Ok(())
}
