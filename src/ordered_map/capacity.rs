use super::OrderedMap;
use crate::raw::RawOrderedMap;

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty map with room for at least `capacity` entries before
    /// the node storage has to grow.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let map: OrderedMap<i32, i32> = OrderedMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedMap {
            raw: RawOrderedMap::with_capacity(capacity),
        }
    }

    /// Returns how many entries the map can hold without reallocating its
    /// node storage. Slots freed by removals count towards the capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let mut map: OrderedMap<i32, i32> = OrderedMap::with_capacity(32);
    /// map.insert_or_update(1, 1);
    /// map.clear();
    /// assert!(map.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
