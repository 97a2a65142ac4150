//! An ordered multiset backed by a skip list.
//!
//! Values are kept in ascending order on level 0; each value also appears on a
//! random number of higher levels, which lets a lookup skip ahead instead of
//! walking the whole chain. Inserting a value that is already present bumps its
//! multiplicity rather than adding a second node.
//!
//! Based on William Pugh, ["Skip Lists: A Probabilistic Alternative to Balanced Trees"].
//!
//! ["Skip Lists: A Probabilistic Alternative to Balanced Trees"]: https://15721.courses.cs.cmu.edu/spring2018/papers/08-oltpindexes1/pugh-skiplists-cacm1990.pdf
//!
//! ```
//! use skipset::SkipList;
//!
//! let mut list = SkipList::new();
//! for v in [5, 3, 8, 3] {
//!     list.insert(v);
//! }
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.multiplicity(&3), 2);
//! assert_eq!(list.values().copied().collect::<Vec<_>>(), vec![3, 5, 8]);
//!
//! list.delete(&3);
//! list.delete(&3);
//! assert!(!list.contains(&3));
//! ```
mod arena;
pub mod cmp;
mod error;
pub mod height;
pub mod iter;
mod options;
mod render;
mod skiplist;
#[cfg(test)]
mod test_utils;

pub use crate::cmp::{Comparator, DefaultComparator};
pub use crate::error::Error;
pub use crate::height::{CoinFlip, Fixed, HeightSource};
pub use crate::iter::{Cursor, Entry, Iter, ListCursor};
pub use crate::options::SkipListOptions;
pub use crate::skiplist::SkipList;

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! ensure {
    ($cond:expr,$err:expr $(,)?) => {
        if !$cond {
            return Err($err);
        }
    };
}
