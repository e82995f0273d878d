use jsonl_sampler::analyze::render::format_bytes;
use std::path::Path;

/// Width of the `=` rules around banners.
const RULE_WIDTH: usize = 60;

/// Prints `title` between two horizontal rules.
pub fn print_banner(title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("{}", rule);
    println!("  {}", title);
    println!("{}", rule);
}

/// Absolute form of `path` for display; falls back to the path as given.
pub fn display_path(path: &Path) -> String {
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

/// A list shortened to its first and last entries when it is too long to print.
#[derive(Debug, PartialEq, Eq)]
pub enum Listing<'a, T> {
    Full(&'a [T]),
    Truncated {
        head: &'a [T],
        omitted: usize,
        tail: &'a [T],
    },
}

/// Keeps `items` whole up to `max` entries, otherwise only the first and last `edge`.
pub fn listing<T>(items: &[T], max: usize, edge: usize) -> Listing<'_, T> {
    if items.len() <= max || items.len() <= edge * 2 {
        return Listing::Full(items);
    }

    Listing::Truncated {
        head: &items[..edge],
        omitted: items.len() - edge * 2,
        tail: &items[items.len() - edge..],
    }
}

/// Prints `(name, size)` rows as an aligned table, eliding the middle of long lists.
pub fn print_file_table(files: &[(String, u64)]) {
    let row = |(name, size): &(String, u64)| {
        println!("  {:20} {:>10}", name, format_bytes(*size as f64));
    };

    match listing(files, 10, 3) {
        Listing::Full(items) => items.iter().for_each(row),
        Listing::Truncated { head, tail, .. } => {
            head.iter().for_each(row);
            println!("  {:20}", "...");
            tail.iter().for_each(row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lists_are_kept_whole() {
        let items: Vec<u32> = (0..10).collect();
        assert_eq!(listing(&items, 10, 3), Listing::Full(&items[..]));
    }

    #[test]
    fn long_lists_keep_both_ends() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(
            listing(&items, 20, 5),
            Listing::Truncated {
                head: &items[..5],
                omitted: 15,
                tail: &items[20..],
            }
        );
    }
}
