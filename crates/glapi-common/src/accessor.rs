// accessor.rs — Typed GET / SET / CALL over a Table
//
// One generic implementation serves every entry point. What differs between
// builds is only how an entry's offset is found: a module compiled against
// the frozen layout uses literal offsets (`Direct`); a module that must run
// against producers of other layouts reaches extension entries through its
// resolved RemapTable (`Remapped`). The `remap` feature picks the mode a
// module uses by default (`BuildAddressing`).

use std::sync::Arc;

use log::{debug, warn};

use crate::abi::{Offset, Proc};
use crate::config::DebugFlags;
use crate::current;
use crate::directory::ProcDirectory;
use crate::entry::{Entry, EntryDescriptor, EntryFn};
use crate::error::RemapError;
use crate::remap::RemapTable;
use crate::table::Table;

// ============================================================
// Addressing modes
// ============================================================

/// How an entry's offset is determined.
pub trait Addressing {
    fn offset_of(&self, entry: &EntryDescriptor) -> Offset;
}

/// Literal offsets from the static layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Direct;

impl Addressing for Direct {
    #[inline]
    fn offset_of(&self, entry: &EntryDescriptor) -> Offset {
        entry.fixed_offset.unwrap_or(Offset::SENTINEL)
    }
}

/// Remap-eligible entries go through a resolved RemapTable; core entries
/// keep their literal offsets.
#[derive(Debug, Clone)]
pub struct Remapped {
    remap: Arc<RemapTable>,
}

impl Remapped {
    /// Refuses a table that has not been resolved yet.
    pub fn new(remap: Arc<RemapTable>) -> Result<Self, RemapError> {
        if !remap.is_resolved() {
            return Err(RemapError::Unresolved);
        }
        Ok(Remapped { remap })
    }

    pub fn remap_table(&self) -> &RemapTable {
        &self.remap
    }
}

impl Addressing for Remapped {
    #[inline]
    fn offset_of(&self, entry: &EntryDescriptor) -> Offset {
        match entry.remap_index {
            Some(index) => self.remap.offset(index),
            None => entry.fixed_offset.unwrap_or(Offset::SENTINEL),
        }
    }
}

/// Addressing modes a loader can construct once it has resolved its
/// RemapTable.
pub trait LoaderAddressing: Addressing + Sized {
    fn for_loader(remap: &Arc<RemapTable>) -> Result<Self, RemapError>;
}

impl LoaderAddressing for Direct {
    fn for_loader(_remap: &Arc<RemapTable>) -> Result<Self, RemapError> {
        Ok(Direct)
    }
}

impl LoaderAddressing for Remapped {
    fn for_loader(remap: &Arc<RemapTable>) -> Result<Self, RemapError> {
        Remapped::new(Arc::clone(remap))
    }
}

/// Addressing mode of this build.
#[cfg(feature = "remap")]
pub type BuildAddressing = Remapped;

/// Addressing mode of this build.
#[cfg(not(feature = "remap"))]
pub type BuildAddressing = Direct;

// ============================================================
// Dispatch
// ============================================================

/// Typed access to the slots of any Table.
#[derive(Debug, Clone)]
pub struct Dispatch<A: Addressing> {
    addressing: A,
    flags: DebugFlags,
}

impl<A: Addressing> Dispatch<A> {
    pub fn new(addressing: A) -> Self {
        Dispatch {
            addressing,
            flags: DebugFlags::empty(),
        }
    }

    pub fn with_flags(mut self, flags: DebugFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn flags(&self) -> DebugFlags {
        self.flags
    }

    pub fn addressing(&self) -> &A {
        &self.addressing
    }

    /// Offset of `E` under this addressing mode.
    #[inline]
    pub fn offset<E: Entry>(&self) -> Offset {
        self.addressing.offset_of(&E::DESCRIPTOR)
    }

    #[inline]
    pub fn offset_of(&self, entry: &EntryDescriptor) -> Offset {
        self.addressing.offset_of(entry)
    }

    /// GET by descriptor: the untyped slot contents for `entry`.
    #[inline]
    pub fn get_entry(&self, table: &Table, entry: &EntryDescriptor) -> Option<Proc> {
        table.get(self.offset_of(entry))
    }

    /// SET by descriptor. Returns `false`, leaving the table unchanged, when
    /// `entry` has no slot under this addressing mode.
    pub fn set_entry(&self, table: &mut Table, entry: &EntryDescriptor, f: Proc) -> bool {
        let offset = self.offset_of(entry);
        let written = table.set(offset, f);
        if self.flags.contains(DebugFlags::INSTALL) {
            if written {
                debug!("install {} at {}", entry.name, offset);
            } else {
                debug!("install {} skipped: no slot", entry.name);
            }
        }
        written
    }

    /// CALL by descriptor, reinterpreting the slot as `F`.
    ///
    /// # Safety
    /// `F` must be the entry's pointer type and `args` must satisfy the
    /// installed function's contract.
    pub unsafe fn call_entry<F: EntryFn>(
        &self,
        table: &Table,
        entry: &EntryDescriptor,
        args: F::Args,
    ) -> Option<F::Output> {
        match self.get_entry(table, entry) {
            Some(proc) => Some(F::from_proc(proc).invoke(args)),
            None => {
                if self.flags.contains(DebugFlags::CALLS) {
                    warn!(
                        "call to {} with no function at offset {}",
                        entry.name,
                        self.offset_of(entry)
                    );
                }
                None
            }
        }
    }

    /// GET: the function installed for `E`, if any.
    #[inline]
    pub fn get<E: Entry>(&self, table: &Table) -> Option<E::Pointer> {
        let proc = self.get_entry(table, &E::DESCRIPTOR)?;
        // SAFETY: typed SET is the only way a Proc for `E`'s slot is made
        // from Rust; the pointer is reinterpreted, not called.
        Some(unsafe { <E::Pointer as EntryFn>::from_proc(proc) })
    }

    /// SET: install `f` for `E`. Returns `false`, leaving the table
    /// unchanged, when `E` has no slot under this addressing mode.
    #[inline]
    pub fn set<E: Entry>(&self, table: &mut Table, f: E::Pointer) -> bool {
        self.set_entry(table, &E::DESCRIPTOR, f.into_proc())
    }

    /// CALL: invoke `E` through `table`. `None` when nothing is installed
    /// or the entry has no slot.
    ///
    /// # Safety
    /// `args` must satisfy the installed function's contract.
    #[inline]
    pub unsafe fn call<E: Entry>(
        &self,
        table: &Table,
        args: <E::Pointer as EntryFn>::Args,
    ) -> Option<<E::Pointer as EntryFn>::Output> {
        self.call_entry::<E::Pointer>(table, &E::DESCRIPTOR, args)
    }

    /// CALL through this thread's current table.
    ///
    /// # Safety
    /// As for `call`.
    pub unsafe fn call_current<E: Entry>(
        &self,
        args: <E::Pointer as EntryFn>::Args,
    ) -> Option<<E::Pointer as EntryFn>::Output> {
        current::with_current(|table| table.and_then(|t| self.call::<E>(t, args)))
    }

    /// Untyped lookup of `name` through the producer's directory.
    pub fn get_by_name<D>(&self, dir: &D, table: &Table, name: &str) -> Option<Proc>
    where
        D: ProcDirectory + ?Sized,
    {
        table.get(dir.proc_offset(name))
    }

    /// Untyped install of `name` through the producer's directory.
    pub fn set_by_name<D>(&self, dir: &D, table: &mut Table, name: &str, f: Proc) -> bool
    where
        D: ProcDirectory + ?Sized,
    {
        let offset = dir.proc_offset(name);
        let written = table.set(offset, f);
        if self.flags.contains(DebugFlags::INSTALL) {
            debug!("install {} by name at {}", name, offset);
        }
        written
    }
}

impl<A: LoaderAddressing> Dispatch<A> {
    /// Dispatch for a loader that has resolved `remap`.
    pub fn for_loader(remap: &Arc<RemapTable>) -> Result<Self, RemapError> {
        A::for_loader(remap).map(Dispatch::new)
    }
}

impl Default for Dispatch<Direct> {
    fn default() -> Self {
        Dispatch::new(Direct)
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::RemapIndex;
    use crate::directory::Directory;
    use crate::entries::{self, ENTRIES, FIRST_REMAPPED_OFFSET, STATIC_ENTRY_COUNT};
    use crate::table::DEFAULT_TABLE_SIZE;
    use crate::types::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use std::collections::HashMap;

    unsafe extern "C" fn gen_lists(range: GLsizei) -> GLuint {
        range as GLuint * 10
    }

    unsafe extern "C" fn attach_shader(_program: GLuint, _shader: GLuint) {}

    unsafe extern "C" fn get_attrib_location(_program: GLuint, _name: *const GLchar) -> GLint {
        7
    }

    struct MapDirectory(HashMap<&'static str, Offset>, usize);

    impl ProcDirectory for MapDirectory {
        fn proc_offset(&self, name: &str) -> Offset {
            self.0.get(name).copied().unwrap_or(Offset::SENTINEL)
        }
        fn proc_name(&self, _offset: Offset) -> Option<String> {
            None
        }
        fn table_size(&self) -> usize {
            self.1
        }
    }

    fn resolved(dir: &dyn ProcDirectory) -> Arc<RemapTable> {
        let mut remap = RemapTable::for_entries();
        remap.resolve(dir, ENTRIES).expect("resolve");
        Arc::new(remap)
    }

    /// A producer that keeps the core layout but lays the extension entries
    /// out in reverse order.
    fn reversed_producer() -> MapDirectory {
        let last = ENTRIES.len() - 1;
        let offsets = ENTRIES
            .iter()
            .map(|e| match e.remap_index {
                Some(_) => {
                    let slot = e.fixed_offset.and_then(Offset::index).expect("fixed slot");
                    (e.name, Offset::from_slot(FIRST_REMAPPED_OFFSET + last - slot))
                }
                None => (e.name, e.fixed_offset.unwrap_or_default()),
            })
            .collect();
        MapDirectory(offsets, DEFAULT_TABLE_SIZE)
    }

    fn remapped_dispatch() -> Dispatch<Remapped> {
        Dispatch::new(Remapped::new(resolved(&reversed_producer())).expect("resolved"))
    }

    type Tagged = unsafe extern "C" fn() -> u32;

    unsafe extern "C" fn tagged<const N: u32>() -> u32 {
        N
    }

    unsafe extern "C" fn filler() {}

    macro_rules! tag_rows {
        ([$($hi:literal)*] $lo:tt) => { [$(tag_rows!(@row $hi $lo)),*] };
        (@row $hi:literal [$($lo:literal)*]) => { [$(tagged::<{ $hi * 32 + $lo }> as Tagged),*] };
    }

    /// One distinct function per entry; `TAGS[i / 32][i % 32]` returns `i`.
    const TAGS: [[Tagged; 32]; 28] = tag_rows!(
        [0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27]
        [0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31]
    );

    fn tag(i: usize) -> Tagged {
        TAGS[i / 32][i % 32]
    }

    fn full_table() -> Table {
        let mut t = Table::new();
        for i in 0..t.len() {
            t.set(Offset::from_slot(i), filler);
        }
        t
    }

    fn snapshot(t: &Table) -> Vec<Option<usize>> {
        (0..t.len())
            .map(|i| t.get(Offset::from_slot(i)).map(|p| p as usize))
            .collect()
    }

    fn set_get_every_entry<A: Addressing>(d: &Dispatch<A>) {
        let mut t = full_table();
        for (i, e) in ENTRIES.iter().enumerate() {
            let slot = d.offset_of(e).index().expect("every entry has a slot");
            let before = snapshot(&t);
            let f = tag(i).into_proc();

            assert!(d.set_entry(&mut t, e, f), "set {} refused", e.name);
            assert_eq!(
                d.get_entry(&t, e).map(|p| p as usize),
                Some(f as usize),
                "get {} must return what was set",
                e.name
            );
            for (j, (b, a)) in before.iter().zip(snapshot(&t)).enumerate() {
                if j != slot {
                    assert_eq!(*b, a, "setting {} changed slot {}", e.name, j);
                }
            }
        }
    }

    fn round_trip_every_entry<A: Addressing>(d: &Dispatch<A>, seed: u64) {
        assert!(ENTRIES.len() <= TAGS.len() * 32);
        let mut t = Table::new();
        let mut order: Vec<usize> = (0..ENTRIES.len()).collect();
        order.shuffle(&mut StdRng::seed_from_u64(seed));
        for i in order {
            assert!(d.set_entry(&mut t, &ENTRIES[i], tag(i).into_proc()));
        }
        assert_eq!(t.installed_count(), ENTRIES.len());

        for (i, e) in ENTRIES.iter().enumerate() {
            let got = unsafe { d.call_entry::<Tagged>(&t, e, ()) };
            assert_eq!(got, Some(i as u32), "{} reached the wrong function", e.name);
        }
    }

    fn typed_set_get_call<A: Addressing>(d: &Dispatch<A>) {
        let mut t = Table::new();
        assert!(d.get::<entries::GenLists>(&t).is_none());
        assert!(unsafe { d.call::<entries::GenLists>(&t, (4,)) }.is_none());

        assert!(d.set::<entries::GenLists>(&mut t, gen_lists));
        assert!(d.set::<entries::GetAttribLocationARB>(&mut t, get_attrib_location));
        let f = d.get::<entries::GenLists>(&t).expect("installed");
        assert_eq!(f as usize, gen_lists as usize);
        assert_eq!(unsafe { d.call::<entries::GenLists>(&t, (4,)) }, Some(40));
        assert_eq!(
            unsafe { d.call::<entries::GetAttribLocationARB>(&t, (1, std::ptr::null())) },
            Some(7)
        );
        assert_eq!(t.installed_count(), 2);
    }

    #[test]
    fn test_direct_offsets_are_a_permutation() {
        let d = Dispatch::new(Direct);
        let mut seen = vec![false; STATIC_ENTRY_COUNT];
        for e in ENTRIES {
            let slot = d.offset_of(e).index().expect("every entry has a slot");
            assert!(slot < STATIC_ENTRY_COUNT, "{} out of range", e.name);
            assert!(!seen[slot], "{} shares slot {}", e.name, slot);
            seen[slot] = true;
        }
        assert!(seen.iter().all(|&s| s), "every slot must be assigned");
    }

    #[test]
    fn test_typed_set_get_call() {
        let d = Dispatch::new(Direct);
        typed_set_get_call(&d);

        let mut t = Table::new();
        d.set::<entries::GenLists>(&mut t, gen_lists);
        assert_eq!(t.get(Offset::from_slot(5)).map(|p| p as usize), Some(gen_lists as usize));
    }

    #[test]
    fn test_typed_set_get_call_remapped() {
        let d = remapped_dispatch();
        typed_set_get_call(&d);

        let slot = d.offset::<entries::GetAttribLocationARB>();
        assert_ne!(slot, entries::GetAttribLocationARB::DESCRIPTOR.fixed_offset.unwrap_or_default());
    }

    #[test]
    fn test_set_get_every_entry_direct() {
        set_get_every_entry(&Dispatch::new(Direct));
    }

    #[test]
    fn test_set_get_every_entry_remapped() {
        set_get_every_entry(&remapped_dispatch());
    }

    #[test]
    fn test_round_trip_each_entry_reaches_its_own_function() {
        round_trip_every_entry(&Dispatch::new(Direct), 0x91a9);
        round_trip_every_entry(&remapped_dispatch(), 0x5eed);
    }

    #[test]
    fn test_remapped_uses_producer_offsets() {
        let mut offsets: HashMap<&'static str, Offset> =
            ENTRIES.iter().map(|e| (e.name, e.fixed_offset.unwrap_or_default())).collect();
        offsets.insert("AttachShader", Offset::from_slot(1000));
        let dir = MapDirectory(offsets, 1170);

        let d = Dispatch::new(Remapped::new(resolved(&dir)).expect("resolved"));
        assert_eq!(d.offset::<entries::AttachShader>().raw(), 1000);
        assert_eq!(d.offset::<entries::NewList>().raw(), 0, "core entries keep literal offsets");

        let mut t = Table::new();
        assert!(d.set::<entries::AttachShader>(&mut t, attach_shader));
        assert!(t.get(Offset::from_slot(1000)).is_some());
        assert!(t.get(Offset::from_slot(408)).is_none(), "fixed slot must not be written");
        assert!(d.get::<entries::AttachShader>(&t).is_some());
    }

    #[test_log::test]
    fn test_remapped_sentinel_set_is_noop() {
        let mut offsets: HashMap<&'static str, Offset> =
            ENTRIES.iter().map(|e| (e.name, e.fixed_offset.unwrap_or_default())).collect();
        offsets.remove("GetAttribLocationARB");
        let dir = MapDirectory(offsets, 1170);
        let remap = resolved(&dir);
        let index = entries::GetAttribLocationARB::DESCRIPTOR
            .remap_index
            .expect("remapped entry");
        assert!(remap.offset(index).is_sentinel());

        let d = Dispatch::new(Remapped::new(remap).expect("resolved"))
            .with_flags(DebugFlags::CALLS | DebugFlags::INSTALL);
        let mut t = full_table();
        let before = snapshot(&t);
        assert!(!d.set::<entries::GetAttribLocationARB>(&mut t, get_attrib_location));
        assert_eq!(snapshot(&t), before, "set through sentinel must not touch any slot");
        assert!(d.get::<entries::GetAttribLocationARB>(&t).is_none());
        assert!(unsafe { d.call::<entries::GetAttribLocationARB>(&t, (1, std::ptr::null())) }.is_none());
    }

    #[test]
    fn test_remapped_rejects_unresolved_table() {
        let err = Remapped::new(Arc::new(RemapTable::for_entries())).unwrap_err();
        assert_eq!(err, RemapError::Unresolved);
        assert!(Dispatch::<Remapped>::for_loader(&Arc::new(RemapTable::new(1))).is_err());
    }

    #[test]
    fn test_build_addressing_for_loader() {
        let remap = resolved(&Directory::new());
        let d = Dispatch::<BuildAddressing>::for_loader(&remap).expect("loader dispatch");
        // Against its own layout both modes agree.
        assert_eq!(d.offset::<entries::AttachShader>().index(), Some(408));
        assert_eq!(remap.offset(RemapIndex::new(0)).index(), Some(408));
    }

    #[test]
    fn test_call_current() {
        let d = Dispatch::new(Direct);
        let mut t = Table::new();
        d.set::<entries::GenLists>(&mut t, gen_lists);
        current::make_current(Some(Arc::new(t)));
        assert_eq!(unsafe { d.call_current::<entries::GenLists>((2,)) }, Some(20));
        current::make_current(None);
        assert!(unsafe { d.call_current::<entries::GenLists>((2,)) }.is_none());
    }

    #[test]
    fn test_by_name_uses_directory() {
        let dir = Directory::new();
        let d = Dispatch::new(Direct);
        let mut t = Table::new();
        let f: <entries::BindTexture as Entry>::Pointer = {
            unsafe extern "C" fn bind(_target: GLenum, _texture: GLuint) {}
            bind
        };
        assert!(d.set_by_name(&dir, &mut t, "BindTextureEXT", f.into_proc()));
        assert!(d.get::<entries::BindTexture>(&t).is_some(), "alias installs the canonical slot");
        assert!(d.get_by_name(&dir, &t, "BindTexture").is_some());
        assert!(!d.set_by_name(&dir, &mut t, "NotAnEntry", f.into_proc()));
    }
}
