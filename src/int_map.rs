//! IntHashMap: separate-chaining hash table specialized to integer keys.

use core::fmt;
use slotmap::{DefaultKey, SlotMap};

/// Growth triggers when `len >= capacity * LOAD_FACTOR` at insertion time.
const LOAD_FACTOR: f64 = 0.75;

/// Smallest capacity the table will ever use.
const MIN_CAPACITY: usize = 13;

fn is_prime(n: usize) -> bool {
    if n % 2 == 0 {
        return n == 2;
    }
    let mut i = 3;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Smallest prime `>= max(n, MIN_CAPACITY)`, by trial division over odd
/// candidates.
fn next_prime(n: usize) -> usize {
    let mut n = n.max(MIN_CAPACITY);
    if n % 2 == 0 {
        n += 1;
    }
    while !is_prime(n) {
        n += 2;
    }
    n
}

#[derive(Debug)]
struct Entry {
    key: i64,
    value: i64,
    next: Option<DefaultKey>,
}

/// Hash map from `i64` to `i64` using separate chaining.
///
/// Buckets hold the head of a chain of entries whose keys share
/// `key mod capacity`; chains are searched linearly. Entries live in a
/// slotmap arena and link to each other by slot key, so unlinking an entry
/// is a link rewrite plus one arena removal.
///
/// Initial capacity is the smallest prime `>= max(13, hint)`. When an
/// insertion finds the load factor at or above 0.75, capacity doubles and
/// every entry is relinked under the new modulus before the insert lands.
pub struct IntHashMap {
    buckets: Vec<Option<DefaultKey>>,
    entries: SlotMap<DefaultKey, Entry>,
}

impl IntHashMap {
    /// Map with the default initial capacity (13 buckets).
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Map sized to the smallest prime `>= max(13, hint)`.
    pub fn with_capacity(hint: usize) -> Self {
        let capacity = next_prime(hint);
        Self {
            buckets: vec![None; capacity],
            entries: SlotMap::with_key(),
        }
    }

    /// Number of live key/value pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current bucket count.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket index for `key` under the current capacity. Euclidean
    /// remainder so negative keys index a valid slot.
    fn bucket_of(&self, key: i64) -> usize {
        key.rem_euclid(self.buckets.len() as i64) as usize
    }

    fn should_grow(&self) -> bool {
        self.entries.len() as f64 >= self.buckets.len() as f64 * LOAD_FACTOR
    }

    /// Slot key of the entry holding `key`, if present.
    fn find_entry(&self, key: i64) -> Option<DefaultKey> {
        let mut cur = self.buckets[self.bucket_of(key)];
        while let Some(k) = cur {
            let entry = &self.entries[k];
            if entry.key == key {
                return Some(k);
            }
            cur = entry.next;
        }
        None
    }

    /// Double the bucket array and relink every entry under the new
    /// capacity. Entries are not reallocated; only chain links and bucket
    /// heads change, so content and `len` are preserved exactly. Chain
    /// order is not preserved.
    fn grow(&mut self) {
        let new_capacity = self.buckets.len() * 2;
        let mut buckets: Vec<Option<DefaultKey>> = vec![None; new_capacity];
        let keys: Vec<DefaultKey> = self.entries.keys().collect();
        for k in keys {
            let slot = self.entries[k].key.rem_euclid(new_capacity as i64) as usize;
            self.entries[k].next = buckets[slot];
            buckets[slot] = Some(k);
        }
        self.buckets = buckets;
    }

    /// Insert or update. An existing key has its value overwritten in place
    /// with no growth check; a new key performs the load-factor check first
    /// and is appended to its chain after any growth.
    pub fn set(&mut self, key: i64, value: i64) {
        if let Some(k) = self.find_entry(key) {
            self.entries[k].value = value;
            return;
        }

        if self.should_grow() {
            self.grow();
        }

        let slot = self.bucket_of(key);
        let fresh = self.entries.insert(Entry {
            key,
            value,
            next: None,
        });
        match self.buckets[slot] {
            None => self.buckets[slot] = Some(fresh),
            Some(head) => {
                let mut tail = head;
                while let Some(next) = self.entries[tail].next {
                    tail = next;
                }
                self.entries[tail].next = Some(fresh);
            }
        }
    }

    /// Stored value for `key`, or `None` if absent.
    pub fn get(&self, key: i64) -> Option<i64> {
        self.find_entry(key).map(|k| self.entries[k].value)
    }

    pub fn contains_key(&self, key: i64) -> bool {
        self.find_entry(key).is_some()
    }

    /// Add 1 to the value at `key`; an absent key is created with value 1.
    pub fn increment(&mut self, key: i64) {
        match self.find_entry(key) {
            Some(k) => self.entries[k].value += 1,
            None => self.set(key, 1),
        }
    }

    /// Subtract 1 from the value at `key`; an absent key is created with
    /// value -1.
    pub fn decrement(&mut self, key: i64) {
        match self.find_entry(key) {
            Some(k) => self.entries[k].value -= 1,
            None => self.set(key, -1),
        }
    }

    /// Unlink and release the entry for `key`, returning its value. Absent
    /// keys are a no-op returning `None`.
    pub fn remove(&mut self, key: i64) -> Option<i64> {
        let slot = self.bucket_of(key);
        let mut prev: Option<DefaultKey> = None;
        let mut cur = self.buckets[slot];
        while let Some(k) = cur {
            if self.entries[k].key == key {
                let next = self.entries[k].next;
                match prev {
                    None => self.buckets[slot] = next,
                    Some(p) => self.entries[p].next = next,
                }
                return self.entries.remove(k).map(|e| e.value);
            }
            prev = Some(k);
            cur = self.entries[k].next;
        }
        None
    }

    /// Entries in bucket order, chains walked head to tail. Order is not
    /// stable across growth.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            map: self,
            bucket: 0,
            cur: None,
        }
    }
}

impl Default for IntHashMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Diagnostic dump: one `key: value` line per live entry, in bucket order.
impl fmt::Display for IntHashMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            writeln!(f, "{}: {}", key, value)?;
        }
        Ok(())
    }
}

/// Iterator over `(key, value)` pairs in bucket order.
pub struct Iter<'a> {
    map: &'a IntHashMap,
    bucket: usize,
    cur: Option<DefaultKey>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(k) = self.cur {
                let entry = &self.map.entries[k];
                self.cur = entry.next;
                return Some((entry.key, entry.value));
            }
            if self.bucket >= self.map.buckets.len() {
                return None;
            }
            self.cur = self.map.buckets[self.bucket];
            self.bucket += 1;
        }
    }
}
