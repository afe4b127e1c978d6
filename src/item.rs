use num::ToPrimitive;

/// One weighted alternative in a split test.
///
/// An item carries the value being selected (its payload), a weight
/// nominally read as a percentage, and optional parameters that travel
/// alongside the payload without ever being inspected.
///
/// # Examples
///
/// ```
/// use switchable::item::Item;
///
/// let item = Item::new("landing-b", 25.5, Some("blue"));
/// assert_eq!(&"landing-b", item.payload());
/// assert_eq!(25.5, item.weight());
/// assert_eq!(Some(&"blue"), item.params());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Item<T, P = ()> {
    payload: T,
    weight: f64,
    params: Option<P>
}

impl<T, P> Item<T, P> {
    /// Create a new item.
    ///
    /// The weight is accepted as-is: negative or oversized weights are not
    /// rejected and simply produce odd ranges. A weight that cannot be
    /// represented as an `f64` is treated as zero.
    pub fn new<W: ToPrimitive>(payload: T, weight: W, params: Option<P>) -> Item<T, P> {
        let weight = weight.to_f64().unwrap_or_else(|| {
            log::warn!("item weight is not representable as f64, using 0.0");
            0.0
        });

        Item { payload, weight, params }
    }

    /// The value this item stands for.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// The weight of this item, as a percentage.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Auxiliary parameters stored with this item, if any.
    pub fn params(&self) -> Option<&P> {
        self.params.as_ref()
    }

    /// Consume the item, returning its payload.
    pub fn into_payload(self) -> T {
        self.payload
    }
}

/// An inclusive `[low, high]` sub-range of `[0, 100]` assigned to an item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemRange {
    /// Lower bound (inclusive).
    pub low: f64,
    /// Upper bound (inclusive).
    pub high: f64
}

impl ItemRange {
    /// Does this range contain the given value? Both ends are inclusive.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}
