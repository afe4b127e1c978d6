use num::ToPrimitive;
use rand::Rng;

use crate::draw::random_percentage;
use crate::error::SplitError;
use crate::item::{Item, ItemRange};
use crate::range::{compute_ranges, RangeTable};

/// A weighted set of items to split traffic between.
///
/// Every pick lays the items out over `[0, 100]` by weight (see
/// [compute_ranges]), draws a percentage and returns the item whose range
/// contains it. Ranges are recomputed on every pick, so items may be added
/// or removed between picks.
///
/// # Examples
///
/// ```
/// use switchable::splitter::Splitter;
///
/// let mut s: Splitter<&str> = Splitter::new();
/// s.add_item("control", 50, None);
/// s.add_item("variant-a", 30, None);
/// s.add_item("variant-b", 20, None);
///
/// let mut rng = rand::rng();
/// let picked = s.pick(&mut rng).unwrap();
/// assert!(["control", "variant-a", "variant-b"].contains(picked.payload()));
/// ```
#[derive(Clone, Debug)]
pub struct Splitter<T, P = ()> {
    items: Vec<Item<T, P>>,
    last_selected: Option<usize>
}

/// How a selection was resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resolution {
    /// The draw fell inside the range of the selected item.
    Matched(ItemRange),
    /// The draw fell outside every range, so an item was chosen uniformly
    /// at random instead.
    Fallback
}

/// The result of a pick.
#[derive(Debug)]
pub struct Selection<'a, T, P = ()> {
    item: &'a Item<T, P>,
    index: usize,
    draw: f64,
    resolution: Resolution
}

impl<'a, T, P> Selection<'a, T, P> {
    /// The selected item.
    pub fn item(&self) -> &'a Item<T, P> {
        self.item
    }

    /// Shorthand for the selected item's payload.
    pub fn payload(&self) -> &'a T {
        self.item.payload()
    }

    /// Position of the selected item in insertion order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The percentage that was drawn.
    pub fn draw(&self) -> f64 {
        self.draw
    }

    /// How the draw was resolved to an item.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// The range the draw matched, or None if the fallback was used.
    pub fn range(&self) -> Option<ItemRange> {
        match self.resolution {
            Resolution::Matched(r) => Some(r),
            Resolution::Fallback => None
        }
    }
}

impl<T, P> Splitter<T, P> {
    /// Create an empty splitter.
    pub fn new() -> Splitter<T, P> {
        Splitter {
            items: Vec::new(),
            last_selected: None
        }
    }

    /// Append an item. The weight is not validated.
    pub fn add_item<W: ToPrimitive>(&mut self, payload: T, weight: W, params: Option<P>) {
        self.items.push(Item::new(payload, weight, params));
    }

    /// Remove and return the item at the given insertion index.
    pub fn remove_item(&mut self, index: usize) -> Result<Item<T, P>, SplitError> {
        if index >= self.items.len() {
            return Err(SplitError::IndexOutOfRange { index, len: self.items.len() });
        }

        self.last_selected = match self.last_selected {
            Some(i) if i == index => None,
            Some(i) if i > index => Some(i - 1),
            other => other
        };

        Ok(self.items.remove(index))
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
        self.last_selected = None;
    }

    /// Does this splitter have any items to select from?
    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    /// Number of items held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Is this splitter empty?
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items, in insertion order.
    pub fn items(&self) -> &[Item<T, P>] {
        &self.items
    }

    /// Iterate over the items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Item<T, P>> {
        self.items.iter()
    }

    /// The most recently selected item, if it is still held.
    pub fn last_selected(&self) -> Option<&Item<T, P>> {
        self.last_selected.and_then(|i| self.items.get(i))
    }

    /// Compute the ranges for the current items.
    pub fn ranges(&self) -> RangeTable {
        compute_ranges(&self.items)
    }

    /// Find the item whose range contains `draw`, without falling back.
    pub fn resolve(&self, draw: f64) -> Option<&Item<T, P>> {
        self.ranges().lookup(draw).map(|e| &self.items[e.index])
    }

    /// Select an item at random, proportional to weight.
    ///
    /// Returns [SplitError::NoItems] if the splitter is empty. Otherwise an
    /// item is always returned, falling back to a uniform pick if the draw
    /// lands outside every range.
    pub fn pick<R: Rng>(&mut self, rng: &mut R) -> Result<Selection<'_, T, P>, SplitError> {
        let draw = random_percentage(rng);
        self.pick_with_draw(draw, rng)
    }

    /// Select an item for an already drawn percentage.
    ///
    /// The random number generator is only used if the fallback is needed.
    pub fn pick_with_draw<R: Rng>(&mut self, draw: f64, rng: &mut R) -> Result<Selection<'_, T, P>, SplitError> {
        if self.items.is_empty() {
            return Err(SplitError::NoItems);
        }

        let table = self.ranges();
        let (index, resolution) = match table.lookup(draw) {
            Some(e) => (e.index, Resolution::Matched(e.range)),
            None => {
                log::warn!(
                    "draw {draw} outside all ranges (upper bound {}), picking uniformly from {} items",
                    table.upper_bound(),
                    self.items.len()
                );
                (rng.random_range(0..self.items.len()), Resolution::Fallback)
            }
        };

        log::debug!("draw {draw} selected item {index} ({resolution:?})");
        self.last_selected = Some(index);

        Ok(Selection {
            item: &self.items[index],
            index,
            draw,
            resolution
        })
    }

    /// Select an item using the thread-local random number generator.
    pub fn pick_random(&mut self) -> Result<Selection<'_, T, P>, SplitError> {
        let mut rng = rand::rng();
        self.pick(&mut rng)
    }
}

impl<T, P> Default for Splitter<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P, W: ToPrimitive> FromIterator<(T, W, Option<P>)> for Splitter<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, W, Option<P>)>>(iter: I) -> Self {
        let mut s = Splitter::new();
        for (payload, weight, params) in iter {
            s.add_item(payload, weight, params);
        }
        s
    }
}
