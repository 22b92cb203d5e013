//! Contiguous record storage with amortized doubling
//!
//! The logical `capacity` is tracked separately from the backing `Vec` so
//! growth happens exactly when the trigger says so and always by a factor of
//! two, independent of how the allocator rounds requests.

use std::mem;

use log::debug;

use crate::error::{BenchError, Result};
use crate::record::Record;
use crate::store::{Footprint, GrowthTrigger, RecordStore};

/// Default number of slots reserved before the first insert
pub const DEFAULT_INITIAL_CAPACITY: usize = 1000;

pub struct ArrayStore {
    /// Occupied slots, `0..len`
    slots: Vec<Record>,
    /// Logical capacity; only ever doubles
    capacity: usize,
    growth: GrowthTrigger,
    /// Number of doublings so far
    grown: usize,
}

impl ArrayStore {
    pub fn new(initial_capacity: usize, growth: GrowthTrigger) -> Result<Self> {
        let capacity = initial_capacity.max(1);
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| BenchError::Allocation {
                requested: capacity,
            })?;

        Ok(Self {
            slots,
            capacity,
            growth,
            grown: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// How many times the buffer has doubled
    pub fn growth_count(&self) -> usize {
        self.grown
    }

    /// Percentage of allocated slots not holding a record
    pub fn waste_percent(&self) -> f64 {
        (1.0 - self.slots.len() as f64 / self.capacity as f64) * 100.0
    }

    /// Bytes reserved for slots, occupied or not
    pub fn allocated_bytes(&self) -> usize {
        self.capacity * mem::size_of::<Record>()
    }

    /// Double the logical capacity, moving existing records into the larger
    /// buffer.
    fn grow(&mut self) -> Result<()> {
        let requested = self
            .capacity
            .checked_mul(2)
            .ok_or(BenchError::Allocation {
                requested: usize::MAX,
            })?;

        self.slots
            .try_reserve_exact(requested - self.slots.len())
            .map_err(|_| BenchError::Allocation { requested })?;

        debug!(
            "array store grew from {} to {} slots at {} records",
            self.capacity,
            requested,
            self.slots.len()
        );
        self.capacity = requested;
        self.grown += 1;
        Ok(())
    }
}

impl RecordStore for ArrayStore {
    fn insert(&mut self, record: Record) -> Result<()> {
        if self.growth.needs_growth(self.slots.len(), self.capacity) {
            self.grow()?;
        }
        self.slots.push(record);
        Ok(())
    }

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn records(&self) -> Box<dyn Iterator<Item = &Record> + '_> {
        Box::new(self.slots.iter())
    }

    fn release(&mut self) -> usize {
        let released = self.slots.len();
        // Drops the records in 0..len, then frees the buffer itself
        drop(mem::take(&mut self.slots));
        released
    }

    fn footprint(&self) -> Option<Footprint> {
        Some(Footprint {
            allocated_bytes: self.allocated_bytes(),
            waste_percent: self.waste_percent(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(i: usize) -> Record {
        Record::new(format!("seq{i}"), "ACGT")
    }

    fn filled(n: usize, capacity: usize, growth: GrowthTrigger) -> ArrayStore {
        let mut store = ArrayStore::new(capacity, growth).unwrap();
        for i in 0..n {
            store.insert(record(i)).unwrap();
        }
        store
    }

    #[test]
    fn test_new_is_empty() {
        let store = ArrayStore::new(1000, GrowthTrigger::Full).unwrap();
        assert_eq!(store.len(), 0);
        assert_eq!(store.capacity(), 1000);
        assert_eq!(store.waste_percent(), 100.0);
    }

    #[test]
    fn test_zero_capacity_is_raised_to_one() {
        let mut store = ArrayStore::new(0, GrowthTrigger::Full).unwrap();
        assert_eq!(store.capacity(), 1);
        store.insert(record(0)).unwrap();
        store.insert(record(1)).unwrap();
        assert_eq!(store.capacity(), 2);
    }

    #[test]
    fn test_full_store_has_no_waste() {
        let store = filled(1000, 1000, GrowthTrigger::Full);
        assert_eq!(store.capacity(), 1000);
        assert_eq!(store.growth_count(), 0);
        assert_eq!(store.waste_percent(), 0.0);
    }

    #[test]
    fn test_single_record_waste() {
        let store = filled(1, 1000, GrowthTrigger::Full);
        assert!((store.waste_percent() - 99.9).abs() < 1e-9);
    }

    #[test]
    fn test_growth_doubles_exactly() {
        let store = filled(1001, 1000, GrowthTrigger::Full);
        assert_eq!(store.capacity(), 2000);
        assert_eq!(store.growth_count(), 1);

        let store = filled(4001, 1000, GrowthTrigger::Full);
        assert_eq!(store.capacity(), 8000);
        assert_eq!(store.growth_count(), 3);
    }

    #[test]
    fn test_headroom_grows_one_early() {
        let store = filled(998, 1000, GrowthTrigger::Headroom);
        assert_eq!(store.capacity(), 1000);

        let store = filled(999, 1000, GrowthTrigger::Headroom);
        assert_eq!(store.capacity(), 2000);

        let store = filled(1000, 1000, GrowthTrigger::Headroom);
        assert!((store.waste_percent() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_allocated_bytes_tracks_capacity() {
        let store = filled(3, 4, GrowthTrigger::Full);
        assert_eq!(store.allocated_bytes(), 4 * mem::size_of::<Record>());
        let store = filled(5, 4, GrowthTrigger::Full);
        assert_eq!(store.allocated_bytes(), 8 * mem::size_of::<Record>());
    }

    #[test]
    fn test_release_once() {
        let mut store = filled(25, 10, GrowthTrigger::Full);
        assert_eq!(store.release(), 25);
        assert_eq!(store.len(), 0);
        assert_eq!(store.release(), 0);
    }

    #[test]
    fn test_unallocatable_capacity() {
        assert!(matches!(
            ArrayStore::new(usize::MAX / 2, GrowthTrigger::Full),
            Err(BenchError::Allocation { requested }) if requested == usize::MAX / 2
        ));
    }

    #[test]
    fn test_allocation_error_message() {
        let err = ArrayStore::new(1 << 62, GrowthTrigger::Full).err().unwrap();
        assert_eq!(
            err.to_string(),
            format!("memory allocation failed for {} record slots", 1usize << 62)
        );
    }

    #[test]
    fn test_release_empty() {
        let mut store = ArrayStore::new(10, GrowthTrigger::Full).unwrap();
        assert_eq!(store.release(), 0);
    }
}
