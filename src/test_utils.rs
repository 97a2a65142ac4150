use crate::cmp::DefaultComparator;
use crate::height::Fixed;
use crate::skiplist::SkipList;

/// Builds a list whose new nodes take their heights from `heights`, cycling.
pub(crate) fn make_skiplist(
    heights: &[usize],
    values: &[i64],
) -> SkipList<i64, DefaultComparator, Fixed> {
    let mut list = SkipList::with_height_source(DefaultComparator, Fixed::new(heights.to_vec()));
    list.extend(values.iter().copied());
    list
}

pub(crate) fn values<C, H>(list: &SkipList<i64, C, H>) -> Vec<i64> {
    list.values().copied().collect()
}

/// Values present on each level, bottom level first.
pub(crate) fn levels<C, H>(list: &SkipList<i64, C, H>) -> Vec<Vec<i64>> {
    (0..list.height())
        .map(|level| {
            list.iter()
                .filter(|entry| entry.height > level)
                .map(|entry| *entry.value)
                .collect()
        })
        .collect()
}
