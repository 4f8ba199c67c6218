use core::borrow::Borrow;
use core::fmt;
use core::ops::{Index, IndexMut};

use crate::error::{Error, Result};
use crate::raw::RawOrderedMap;

mod capacity;

/// An ordered map based on an unbalanced [binary search tree].
///
/// Keys must implement [`Ord`]. Each entry lives in its own tree node, and every
/// node keeps a link back to its parent so that removal can splice the tree
/// without searching again from the root.
///
/// The tree is never rebalanced: the first key inserted stays at the root until
/// it is removed, and inserting keys in sorted order builds a chain. Lookups,
/// inserts and removals take O(h) time, where h is the height of the tree (n in
/// the worst case).
///
/// Unlike `std`'s maps, [`get`](OrderedMap::get) reports a missing key as
/// [`Error::KeyNotFound`], and indexing never inserts.
///
/// # Examples
///
/// ```
/// use bst_map::{Error, OrderedMap};
///
/// let mut letters = OrderedMap::new();
/// letters.insert_or_update(5, 'e');
/// letters.insert_or_update(26, 'z');
/// letters.insert_or_update(1, 'a');
///
/// assert_eq!(letters.len(), 3);
/// assert_eq!(letters.get(&26), Ok(&'z'));
/// assert_eq!(letters.get(&2), Err(Error::KeyNotFound));
///
/// letters.remove(&5);
/// assert!(!letters.contains(&5));
/// assert_eq!(letters[&1], 'a');
/// ```
///
/// A map with a known list of entries can be built from an array. Later
/// entries overwrite earlier ones with the same key:
///
/// ```
/// use bst_map::OrderedMap;
///
/// let map = OrderedMap::from([("one", 1), ("two", 2), ("one", 3)]);
/// assert_eq!(map.len(), 2);
/// assert_eq!(map[&"one"], 3);
/// ```
///
/// # Copying and moving
///
/// [`Clone`] builds an independent tree: every entry of the copy lives at a new
/// address. Moving a map, including with [`take`](OrderedMap::take), hands over
/// the existing nodes without touching them, so their addresses are preserved.
///
/// [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree
pub struct OrderedMap<K, V> {
    raw: RawOrderedMap<K, V>,
}

impl<K, V> OrderedMap<K, V> {
    /// Makes a new, empty `OrderedMap`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    ///
    /// // entries can now be inserted into the empty map
    /// map.insert_or_update(1, "a");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> OrderedMap<K, V> {
        OrderedMap {
            raw: RawOrderedMap::new(),
        }
    }

    /// Clears the map, removing all elements. The node storage is kept for reuse.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// a.insert_or_update(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Moves every entry into a new map, leaving `self` empty.
    ///
    /// No entry is copied or visited: the returned map owns the very nodes
    /// `self` had, so references taken before the move would point at the same
    /// values afterwards. `self` stays usable.
    ///
    /// This is also how to move-assign: `*target = source.take()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let mut source = OrderedMap::from([(5, 5.5), (2, 2.2)]);
    /// let before: *const f64 = source.get(&5).unwrap();
    ///
    /// let moved = source.take();
    /// assert!(source.is_empty());
    /// assert!(core::ptr::eq(moved.get(&5).unwrap(), before));
    ///
    /// source.insert_or_update(9, 9.9);
    /// assert!(source.contains(&9));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use = "use `clear` to drop the entries instead"]
    pub fn take(&mut self) -> Self {
        OrderedMap {
            raw: self.raw.take(),
        }
    }

    /// Returns the number of elements in the map.
    ///
    /// The count is not cached; every node of the tree is visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert_or_update(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// assert!(a.is_empty());
    /// a.insert_or_update(1, "a");
    /// assert!(!a.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl<K: Ord, V> OrderedMap<K, V> {
    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the map has no entry for `key`. The
    /// map is never modified by a lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::{Error, OrderedMap};
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert_or_update(1, "a");
    /// assert_eq!(map.get(&1), Ok(&"a"));
    /// assert_eq!(map.get(&2), Err(Error::KeyNotFound));
    /// assert_eq!(map.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.get_key_value(key).map(|(_, value)| value)
    }

    /// Returns the stored key and its value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the map has no entry for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let map = OrderedMap::from([(String::from("one"), 1)]);
    /// assert_eq!(map.get_key_value("one"), Ok((&String::from("one"), &1)));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn get_key_value<Q>(&self, key: &Q) -> Result<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_key_value(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the map has no entry for `key`.
    /// Nothing is inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert_or_update(1, "a");
    /// if let Ok(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// assert!(map.get_mut(&2).is_err());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert_or_update(1, "a");
    /// assert!(map.contains(&1));
    /// assert!(!map.contains(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.search(key).is_some()
    }

    /// Inserts a key-value pair, or updates the value of an existing key.
    ///
    /// If the map did not have this key present, a new leaf is attached where
    /// the search ended and `None` is returned.
    ///
    /// If the map did have this key present, the value is replaced in place and
    /// the old value is returned. The entry keeps its node, and with it its
    /// address. The key is not updated.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.insert_or_update(37, "a"), None);
    /// assert!(!map.is_empty());
    ///
    /// map.insert_or_update(37, "b");
    /// assert_eq!(map.insert_or_update(37, "c"), Some("b"));
    /// assert_eq!(map[&37], "c");
    /// assert_eq!(map.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn insert_or_update(&mut self, key: K, value: V) -> Option<V> {
        self.raw.insert(key, value)
    }

    /// Removes a key from the map, returning the value at the key if the key
    /// was previously in the map. Removing an absent key does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert_or_update(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes a key from the map, returning the stored key and value if the
    /// key was previously in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert_or_update(1, "a");
    /// assert_eq!(map.remove_entry(&1), Some((1, "a")));
    /// assert_eq!(map.remove_entry(&1), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove(key)
    }
}

impl<K: Clone, V: Clone> Clone for OrderedMap<K, V> {
    fn clone(&self) -> Self {
        OrderedMap {
            raw: self.raw.clone(),
        }
    }

    /// Replaces the contents of `self` with a copy of `source`, reusing the
    /// node storage `self` already has.
    fn clone_from(&mut self, source: &Self) {
        self.raw.clone_from(&source.raw);
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.raw.in_order().eq(other.raw.in_order())
    }
}

impl<K: Eq, V: Eq> Eq for OrderedMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.raw.in_order()).finish()
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        OrderedMap::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = OrderedMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for OrderedMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert_or_update(k, v);
        }
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for OrderedMap<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<K, Q, V> Index<&Q> for OrderedMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    type Output = V;

    /// Returns a reference to the value for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map. Nothing is inserted.
    fn index(&self, key: &Q) -> &V {
        match self.get(key) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<K, Q, V> IndexMut<&Q> for OrderedMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    /// Returns a mutable reference to the value for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the map. Nothing is inserted.
    fn index_mut(&mut self, key: &Q) -> &mut V {
        match self.get_mut(key) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
