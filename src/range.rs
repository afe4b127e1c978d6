use std::cmp::Ordering;

use crate::item::{Item, ItemRange};

/// Gap inserted between the end of one range and the start of the next,
/// so a boundary value is never claimed by two ranges.
pub const HAIRLINE: f64 = 0.01;

/// Upper bound of the percentage scale.
pub const FULL_SCALE: f64 = 100.0;

/// A range end landing here is moved up to [FULL_SCALE].
pub const HIGH_SNAP: f64 = 99.99;

/// A range start landing here is moved down to zero.
pub const LOW_SNAP: f64 = 0.01;

// Tolerance used when comparing against the snap points, covering f64
// representation error only.
const SNAP_EPSILON: f64 = 1e-9;

/// The range assigned to one item during a computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeEntry {
    /// Position of the item in the splitter's insertion order.
    pub index: usize,
    /// The inclusive range covered by the item.
    pub range: ItemRange
}

/// An immutable snapshot of the ranges computed for a set of items.
///
/// Entries are held in resolution order: descending weight, with equal
/// weights ordered by insertion index.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct RangeTable {
    entries: Vec<RangeEntry>
}

impl RangeTable {
    /// The entries of this table, in resolution order.
    pub fn entries(&self) -> &[RangeEntry] {
        &self.entries
    }

    /// Iterate over the entries in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = &RangeEntry> {
        self.entries.iter()
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The range assigned to the item at the given insertion index.
    pub fn range_of(&self, index: usize) -> Option<ItemRange> {
        self.entries.iter().find(|e| e.index == index).map(|e| e.range)
    }

    /// The highest range end in the table, or zero for an empty table.
    pub fn upper_bound(&self) -> f64 {
        self.entries.last().map_or(0.0, |e| e.range.high)
    }

    /// Find the first entry, in resolution order, whose range contains `value`.
    pub fn lookup(&self, value: f64) -> Option<&RangeEntry> {
        self.entries.iter().find(|e| e.range.contains(value))
    }
}

/// Orders items by descending weight, then by ascending insertion index.
fn compare_weights(a: (usize, f64), b: (usize, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then(a.0.cmp(&b.0))
}

fn is_near(value: f64, point: f64) -> bool {
    (value - point).abs() < SNAP_EPSILON
}

/// Partition `[0, 100]` into one range per item, proportional to weight.
///
/// Items are laid out heaviest first. Each range starts one [HAIRLINE]
/// after the previous range ended (the first starts at zero) and spans the
/// item's weight. Two fixed corrections are applied: an end of exactly
/// [HIGH_SNAP] becomes [FULL_SCALE], and a start of exactly [LOW_SNAP]
/// becomes zero. No other renormalization is done, so weights that do not
/// sum to 100 leave the tail of the scale uncovered (or overshoot it).
///
/// Items lighter than the hairline would end before they start; their start
/// is pulled back to their end, leaving a single point already owned by
/// the range before them.
///
/// # Examples
///
/// ```
/// use switchable::item::Item;
/// use switchable::range::compute_ranges;
///
/// let items: Vec<Item<&str>> = vec![
///     Item::new("c", 20, None),
///     Item::new("a", 50, None),
///     Item::new("b", 30, None),
/// ];
///
/// let table = compute_ranges(&items);
/// let order: Vec<usize> = table.iter().map(|e| e.index).collect();
/// assert_eq!(vec![1, 2, 0], order);
/// assert_eq!(100.0, table.upper_bound());
/// ```
pub fn compute_ranges<T, P>(items: &[Item<T, P>]) -> RangeTable {
    let mut order: Vec<(usize, f64)> = items.iter()
        .enumerate()
        .map(|(i, item)| (i, item.weight()))
        .collect();
    order.sort_by(|a, b| compare_weights(*a, *b));

    let mut prev = 0.0;
    let mut entries = Vec::with_capacity(order.len());

    for (index, weight) in order {
        let mut low = prev + if prev > 0.0 { HAIRLINE } else { 0.0 };
        let mut high = weight + prev;

        if is_near(high, HIGH_SNAP) {
            high = FULL_SCALE;
        }

        if is_near(low, LOW_SNAP) {
            low = 0.0;
        }

        if low > high {
            low = high;
        }

        log::trace!("item {index} (weight {weight}) -> [{low}, {high}]");
        entries.push(RangeEntry { index, range: ItemRange { low, high } });
        prev = high;
    }

    RangeTable { entries }
}
