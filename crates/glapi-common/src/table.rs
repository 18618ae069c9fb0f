// table.rs — Storage layer: the per-context dispatch table
//
// A Table is a fixed-length array of nullable function pointers. It is laid
// out exactly like a C `_glapi_proc[]`, so C code holding `as_ptr()` can
// index it directly. Invalid offsets never reach the array: reads through
// them yield `None`, writes through them are dropped.

use std::fmt;

use crate::abi::{Offset, Proc};
use crate::entries::STATIC_ENTRY_COUNT;
use crate::entry::EntryFn;

/// Slots reserved after the static layout for run-time registered entries.
pub const DEFAULT_DYNAMIC_SLOTS: usize = 300;

/// Default table length.
pub const DEFAULT_TABLE_SIZE: usize = STATIC_ENTRY_COUNT + DEFAULT_DYNAMIC_SLOTS;

#[derive(Clone)]
pub struct Table {
    slots: Box<[Option<Proc>]>,
}

impl Table {
    /// A table of the default size with every slot empty.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_TABLE_SIZE)
    }

    /// A table of `len` empty slots. The length never changes afterwards.
    pub fn with_size(len: usize) -> Self {
        Table {
            slots: vec![None; len].into_boxed_slice(),
        }
    }

    /// Take ownership of an existing slot array.
    pub fn from_slots(slots: Box<[Option<Proc>]>) -> Self {
        Table { slots }
    }

    /// Give up the slot array (for handing to C).
    pub fn into_slots(self) -> Box<[Option<Proc>]> {
        self.slots
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    fn index(&self, offset: Offset) -> Option<usize> {
        offset.index().filter(|&i| i < self.slots.len())
    }

    /// Store `f` at `offset`. Returns `false`, leaving the table untouched,
    /// when the offset is the sentinel or past the end.
    #[inline]
    pub fn set(&mut self, offset: Offset, f: Proc) -> bool {
        match self.index(offset) {
            Some(i) => {
                self.slots[i] = Some(f);
                true
            }
            None => false,
        }
    }

    /// Empty the slot at `offset`.
    pub fn clear(&mut self, offset: Offset) -> bool {
        match self.index(offset) {
            Some(i) => {
                self.slots[i] = None;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn get(&self, offset: Offset) -> Option<Proc> {
        self.index(offset).and_then(|i| self.slots[i])
    }

    /// Invoke the slot at `offset` as a function of type `F`.
    ///
    /// Returns `None` when the offset is unresolved or the slot is empty.
    ///
    /// # Safety
    /// The slot must hold a function of type `F`, and `args` must satisfy
    /// that function's contract.
    #[inline]
    pub unsafe fn call<F: EntryFn>(&self, offset: Offset, args: F::Args) -> Option<F::Output> {
        let proc = self.get(offset)?;
        let f = F::from_proc(proc);
        Some(f.invoke(args))
    }

    /// Number of non-empty slots.
    pub fn installed_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn iter_installed(&self) -> impl Iterator<Item = (Offset, Proc)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|f| (Offset::from_slot(i), f)))
    }

    /// Overwrite this table's slots with `other`'s. When the lengths differ,
    /// only the common prefix is copied. Returns the number of slots copied.
    pub fn copy_from(&mut self, other: &Table) -> usize {
        let n = self.slots.len().min(other.slots.len());
        self.slots[..n].copy_from_slice(&other.slots[..n]);
        n
    }

    /// C view of the slot array.
    pub fn as_ptr(&self) -> *const Option<Proc> {
        self.slots.as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut Option<Proc> {
        self.slots.as_mut_ptr()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("len", &self.len())
            .field("installed", &self.installed_count())
            .finish()
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::{Direct, Dispatch};
    use crate::entries::IsEnabledIndexedEXT;
    use crate::types::*;

    type AddFn = unsafe extern "C" fn(i32, i32) -> i32;

    unsafe extern "C" fn add(x: i32, y: i32) -> i32 {
        x + y
    }

    unsafe extern "C" fn noop() {}

    fn add_proc() -> Proc {
        (add as AddFn).into_proc()
    }

    #[test]
    fn test_new_table_is_empty_and_default_sized() {
        let t = Table::new();
        assert_eq!(t.len(), DEFAULT_TABLE_SIZE);
        assert_eq!(t.len(), 1170);
        assert_eq!(t.installed_count(), 0);
    }

    #[test]
    fn test_scenario_929_slots_set_then_call() {
        let mut t = Table::with_size(929);
        assert!(t.get(Offset::from_slot(17)).is_none(), "fresh slot must be empty");
        assert!(t.set(Offset::from_slot(17), add_proc()));
        assert_eq!(unsafe { t.call::<AddFn>(Offset::from_slot(17), (2, 3)) }, Some(5));
        assert_eq!(t.installed_count(), 1);
    }

    #[test]
    fn test_scenario_929_slots_named_entry() {
        unsafe extern "C" fn is_enabled_indexed(target: GLenum, index: GLuint) -> GLboolean {
            (target * 16 + index) as GLboolean
        }

        let d = Dispatch::new(Direct);
        let mut t = Table::with_size(929);
        assert_eq!(t.installed_count(), 0);
        assert!(d.get::<IsEnabledIndexedEXT>(&t).is_none(), "GET before SET must be null");
        assert!(unsafe { d.call::<IsEnabledIndexedEXT>(&t, (2, 3)) }.is_none());

        assert!(d.set::<IsEnabledIndexedEXT>(&mut t, is_enabled_indexed));
        assert_eq!(
            d.get::<IsEnabledIndexedEXT>(&t).map(|f| f as usize),
            Some(is_enabled_indexed as usize)
        );
        assert_eq!(unsafe { d.call::<IsEnabledIndexedEXT>(&t, (2, 3)) }, Some(35));
        assert_eq!(unsafe { d.call::<IsEnabledIndexedEXT>(&t, (7, 1)) }, Some(113));
        assert_eq!(t.installed_count(), 1);
    }

    #[test]
    fn test_sentinel_offset_is_inert() {
        let mut t = Table::with_size(8);
        assert!(!t.set(Offset::SENTINEL, noop), "set through sentinel must report no write");
        assert_eq!(t.installed_count(), 0);
        assert!(t.get(Offset::SENTINEL).is_none());
        assert!(!t.clear(Offset::SENTINEL));
    }

    #[test]
    fn test_out_of_range_offset_is_inert() {
        let mut t = Table::with_size(8);
        let past = Offset::from_slot(8);
        assert!(!t.set(past, noop));
        assert!(t.get(past).is_none());
        assert!(unsafe { t.call::<unsafe extern "C" fn()>(past, ()) }.is_none());
        assert!(t.set(Offset::from_slot(7), noop), "last slot is writable");
    }

    #[test]
    fn test_clear_empties_slot() {
        let mut t = Table::with_size(4);
        let o = Offset::from_slot(2);
        t.set(o, noop);
        assert!(t.clear(o));
        assert!(t.get(o).is_none());
    }

    #[test]
    fn test_iter_installed_reports_offsets_in_order() {
        let mut t = Table::with_size(10);
        t.set(Offset::from_slot(7), noop);
        t.set(Offset::from_slot(2), add_proc());
        let offsets: Vec<_> = t.iter_installed().map(|(o, _)| o.raw()).collect();
        assert_eq!(offsets, vec![2, 7]);
    }

    #[test]
    fn test_copy_from_shorter_table_copies_prefix() {
        let mut template = Table::with_size(4);
        template.set(Offset::from_slot(1), noop);
        template.set(Offset::from_slot(3), add_proc());

        let mut t = Table::with_size(10);
        t.set(Offset::from_slot(9), noop);
        assert_eq!(t.copy_from(&template), 4);
        assert!(t.get(Offset::from_slot(1)).is_some());
        assert!(t.get(Offset::from_slot(3)).is_some());
        assert!(t.get(Offset::from_slot(9)).is_some(), "slots past the template are kept");
    }

    #[test]
    fn test_c_view_matches_slots() {
        let mut t = Table::with_size(3);
        t.set(Offset::from_slot(1), noop);
        let raw = t.as_ptr() as *const *const ();
        unsafe {
            assert!((*raw).is_null());
            assert_eq!(*raw.add(1), noop as *const ());
            assert!((*raw.add(2)).is_null());
        }
    }

    #[test]
    fn test_slots_round_trip_through_box() {
        let mut t = Table::with_size(5);
        t.set(Offset::from_slot(4), noop);
        let slots = t.into_slots();
        assert_eq!(slots.len(), 5);
        let t = Table::from_slots(slots);
        assert!(t.get(Offset::from_slot(4)).is_some());
    }
}
