//! Level diagram of a list, one line per level from the top down.
//!
//! ```text
//! -inf - -- 73 -- --- inf
//! -inf 8 -- 73 90 --- inf
//! -inf 8 12 73 90 456 inf
//! ```
//!
//! A value is printed on every level its node sits on and replaced by dashes of
//! the same width elsewhere, so the towers line up. Meant for eyeballing only.

use crate::skiplist::SkipList;
use std::fmt::{Display, Formatter};

const LOW: &str = "-inf";
const HIGH: &str = "inf";

impl<K: Display, C, H> Display for SkipList<K, C, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let cells: Vec<(String, usize)> = self
            .iter()
            .map(|entry| (entry.value.to_string(), entry.height))
            .collect();

        for level in (0..self.height()).rev() {
            f.write_str(LOW)?;
            for (value, height) in &cells {
                if *height > level {
                    write!(f, " {}", value)?;
                } else {
                    write!(f, " {}", "-".repeat(value.chars().count()))?;
                }
            }
            write!(f, " {}", HIGH)?;
            if level > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::make_skiplist;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render() {
        let list = make_skiplist(&[1, 3, 2, 1], &[73, 8, 456, 12]);
        let expected = "-inf 8 -- -- --- inf\n\
                        -inf 8 -- -- 456 inf\n\
                        -inf 8 12 73 456 inf";
        assert_eq!(list.to_string(), expected);
    }

    #[test]
    fn test_render_empty() {
        let list = make_skiplist(&[1], &[]);
        assert_eq!(list.to_string(), "-inf inf");
    }
}
