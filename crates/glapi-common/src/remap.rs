// remap.rs — Remap layer: consumer-side indirection for extension entries
//
// A consumer module is compiled with a remap index for every entry outside
// the frozen core ABI. At load time it resolves each index to whatever slot
// the producer it is running against assigned that entry's name. After that
// single resolve the table is read-only and is shared by every context the
// module creates.

use std::os::raw::c_int;

use log::{debug, warn};

use crate::abi::{Offset, RemapIndex};
use crate::config::DebugFlags;
use crate::directory::{ProcDirectory, ProcRegistry};
use crate::entries::REMAP_TABLE_SIZE;
use crate::entry::EntryDescriptor;
use crate::error::RemapError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemapState {
    Uninitialized,
    Resolved,
}

/// Remap index → table offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemapTable {
    offsets: Box<[Offset]>,
    state: RemapState,
}

/// Outcome of resolving a RemapTable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveReport {
    pub resolved: usize,
    /// Names the producer does not know (their indices hold the sentinel).
    pub unresolved: Vec<&'static str>,
    /// Names registered with the producer during resolution.
    pub registered: Vec<&'static str>,
}

impl ResolveReport {
    /// Log a summary; individual unresolved names only with the REMAP flag.
    pub fn log(&self, flags: DebugFlags) {
        debug!(
            "remap: {} resolved, {} unresolved, {} registered",
            self.resolved,
            self.unresolved.len(),
            self.registered.len()
        );
        if flags.contains(DebugFlags::REMAP) {
            for name in &self.unresolved {
                warn!("remap: {} has no slot in this table layout", name);
            }
        }
    }
}

impl RemapTable {
    /// A table of `len` indices, all sentinel.
    pub fn new(len: usize) -> Self {
        RemapTable {
            offsets: vec![Offset::SENTINEL; len].into_boxed_slice(),
            state: RemapState::Uninitialized,
        }
    }

    /// A table sized for the shipped entry set.
    pub fn for_entries() -> Self {
        Self::new(REMAP_TABLE_SIZE)
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn state(&self) -> RemapState {
        self.state
    }

    pub fn is_resolved(&self) -> bool {
        self.state == RemapState::Resolved
    }

    /// Offset stored at `index`; sentinel when unresolved or out of range.
    #[inline]
    pub fn offset(&self, index: RemapIndex) -> Offset {
        self.offsets
            .get(index.get())
            .copied()
            .unwrap_or(Offset::SENTINEL)
    }

    /// Number of indices holding a real offset.
    pub fn resolved_count(&self) -> usize {
        self.offsets.iter().filter(|o| !o.is_sentinel()).count()
    }

    /// The table as a C `int[]`.
    pub fn as_c_ints(&self) -> &[c_int] {
        bytemuck::cast_slice(&self.offsets[..])
    }

    /// Report describing the stored offsets of `entries`, without asking
    /// any directory.
    pub fn report(&self, entries: &[EntryDescriptor]) -> ResolveReport {
        let mut report = ResolveReport::default();
        for d in entries {
            let Some(index) = d.remap_index else { continue };
            if self.offset(index).is_sentinel() {
                report.unresolved.push(d.name);
            } else {
                report.resolved += 1;
            }
        }
        report
    }

    fn check_indices(&self, entries: &[EntryDescriptor]) -> Result<(), RemapError> {
        for d in entries {
            if let Some(index) = d.remap_index {
                if index.get() >= self.offsets.len() {
                    return Err(RemapError::IndexOutOfRange {
                        name: d.name,
                        index: index.get(),
                        len: self.offsets.len(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Resolve every remap-eligible entry against `dir`.
    ///
    /// Names the directory does not know, or whose offset does not fit its
    /// tables, stay sentinel. Once resolved the table is never rewritten: a
    /// later call returns the report of the stored offsets. Fails, leaving
    /// the table unchanged, if an entry's remap index does not fit.
    pub fn resolve<D>(
        &mut self,
        dir: &D,
        entries: &[EntryDescriptor],
    ) -> Result<ResolveReport, RemapError>
    where
        D: ProcDirectory + ?Sized,
    {
        if self.is_resolved() {
            return Ok(self.report(entries));
        }
        self.check_indices(entries)?;
        let size = dir.table_size();
        let mut report = ResolveReport::default();

        for d in entries {
            let Some(index) = d.remap_index else { continue };
            let offset = dir.proc_offset(d.name);
            match offset.index() {
                Some(slot) if slot < size => {
                    self.offsets[index.get()] = offset;
                    report.resolved += 1;
                }
                _ => {
                    self.offsets[index.get()] = Offset::SENTINEL;
                    report.unresolved.push(d.name);
                }
            }
        }

        self.state = RemapState::Resolved;
        Ok(report)
    }

    /// Like `resolve`, but entries the registry does not know are registered
    /// with it (using their parameter signature) and take the slot it
    /// assigns. Entries it refuses stay sentinel.
    pub fn resolve_registering<R>(
        &mut self,
        registry: &R,
        entries: &[EntryDescriptor],
    ) -> Result<ResolveReport, RemapError>
    where
        R: ProcRegistry + ?Sized,
    {
        if self.is_resolved() {
            return Ok(self.report(entries));
        }
        self.check_indices(entries)?;
        let mut report = ResolveReport::default();

        for d in entries {
            let Some(index) = d.remap_index else { continue };
            let mut offset = registry.proc_offset(d.name);
            if offset.is_sentinel() {
                match registry.add_dispatch(&[d.name], d.signature) {
                    Ok(o) => {
                        offset = o;
                        report.registered.push(d.name);
                    }
                    Err(e) => debug!("remap: cannot register {}: {}", d.name, e),
                }
            }
            match offset.index() {
                Some(slot) if slot < registry.table_size() => {
                    self.offsets[index.get()] = offset;
                    report.resolved += 1;
                }
                _ => {
                    self.offsets[index.get()] = Offset::SENTINEL;
                    report.unresolved.push(d.name);
                }
            }
        }

        self.state = RemapState::Resolved;
        Ok(report)
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Directory;
    use crate::entries::{ALIASES, ENTRIES, FIRST_REMAPPED_OFFSET};
    use std::collections::HashMap;

    /// A directory answering from a plain map.
    struct MapDirectory {
        offsets: HashMap<String, Offset>,
        size: usize,
    }

    impl ProcDirectory for MapDirectory {
        fn proc_offset(&self, name: &str) -> Offset {
            self.offsets.get(name).copied().unwrap_or(Offset::SENTINEL)
        }

        fn proc_name(&self, offset: Offset) -> Option<String> {
            self.offsets
                .iter()
                .find(|(_, &o)| o == offset)
                .map(|(n, _)| n.clone())
        }

        fn table_size(&self) -> usize {
            self.size
        }
    }

    fn leaked_entries(count: usize) -> &'static [EntryDescriptor] {
        let v: Vec<EntryDescriptor> = (0..count)
            .map(|i| EntryDescriptor {
                name: Box::leak(format!("Ext{}", i).into_boxed_str()),
                fixed_offset: None,
                remap_index: Some(RemapIndex::new(i as u16)),
                signature: "i",
            })
            .collect();
        Box::leak(v.into_boxed_slice())
    }

    fn scenario_directory() -> MapDirectory {
        // 500 of the 521 names, at scattered offsets.
        let offsets = (0..500)
            .map(|i| (format!("Ext{}", i), Offset::from_slot(1000 + (i * 37) % 500)))
            .collect();
        MapDirectory { offsets, size: 1600 }
    }

    #[test]
    fn test_new_table_is_all_sentinel() {
        let t = RemapTable::new(521);
        assert_eq!(t.len(), 521);
        assert_eq!(t.state(), RemapState::Uninitialized);
        assert_eq!(t.resolved_count(), 0);
        assert!(t.as_c_ints().iter().all(|&v| v == -1));
    }

    #[test]
    fn test_scenario_521_entries_500_known() {
        let entries = leaked_entries(521);
        let dir = scenario_directory();
        let mut t = RemapTable::new(521);

        let report = t.resolve(&dir, entries).expect("resolve");
        assert_eq!(report.resolved, 500);
        assert_eq!(report.unresolved.len(), 21);
        assert_eq!(t.resolved_count(), 500);

        for d in entries {
            let index = d.remap_index.expect("remap entry");
            assert_eq!(
                t.offset(index),
                dir.proc_offset(d.name),
                "{} must hold the directory's offset",
                d.name
            );
        }
        assert!(t.offset(RemapIndex::new(520)).is_sentinel());
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let entries = leaked_entries(521);
        let dir = scenario_directory();
        let mut a = RemapTable::new(521);
        let mut b = RemapTable::new(521);
        a.resolve(&dir, entries).expect("resolve a");
        b.resolve(&dir, entries).expect("resolve b");
        assert_eq!(a, b);
    }

    #[test]
    fn test_second_resolve_is_noop() {
        let mut t = RemapTable::for_entries();
        let dir = Directory::new();
        let first = t.resolve(&dir, ENTRIES).expect("first resolve");
        let snapshot = t.clone();

        let second = t.resolve(&dir, ENTRIES).expect("second resolve succeeds");
        assert_eq!(t, snapshot, "contents must not change");
        assert_eq!(second.resolved, first.resolved);
        assert_eq!(second.unresolved, first.unresolved);
    }

    #[test]
    fn test_resolved_table_ignores_later_directory() {
        let entries = leaked_entries(521);
        let mut t = RemapTable::new(521);
        let first = t.resolve(&scenario_directory(), entries).expect("resolve");
        let snapshot = t.clone();

        let other = MapDirectory { offsets: HashMap::new(), size: 1600 };
        let again = t.resolve(&other, entries).expect("resolve again");
        assert_eq!(t, snapshot);
        assert_eq!(again, first);

        let registry = Directory::from_entries(ENTRIES, ALIASES, 8);
        let registering = t.resolve_registering(&registry, entries).expect("registering");
        assert_eq!(t, snapshot);
        assert!(registering.registered.is_empty());
        assert_eq!(registry.dynamic_count(), 0, "nothing is registered with a resolved table");
    }

    #[test]
    fn test_index_out_of_range_leaves_table_untouched() {
        let entries = leaked_entries(10);
        let dir = scenario_directory();
        let mut t = RemapTable::new(5);
        let err = t.resolve(&dir, entries).unwrap_err();
        assert!(matches!(err, RemapError::IndexOutOfRange { index: 5, len: 5, .. }), "got {:?}", err);
        assert_eq!(t.state(), RemapState::Uninitialized);
        assert_eq!(t.resolved_count(), 0);
    }

    #[test]
    fn test_offsets_past_table_size_stay_sentinel() {
        let entries = leaked_entries(2);
        let mut offsets = HashMap::new();
        offsets.insert("Ext0".to_string(), Offset::from_slot(3));
        offsets.insert("Ext1".to_string(), Offset::from_slot(10));
        let dir = MapDirectory { offsets, size: 10 };
        let mut t = RemapTable::new(2);
        let report = t.resolve(&dir, entries).expect("resolve");
        assert_eq!(t.offset(RemapIndex::new(0)).raw(), 3);
        assert!(t.offset(RemapIndex::new(1)).is_sentinel());
        assert_eq!(report.unresolved, vec!["Ext1"]);
    }

    #[test]
    fn test_shipped_entries_resolve_against_own_directory() {
        let dir = Directory::new();
        let mut t = RemapTable::for_entries();
        let report = t.resolve(&dir, ENTRIES).expect("resolve");
        assert_eq!(report.resolved, REMAP_TABLE_SIZE);
        assert!(report.unresolved.is_empty());
        assert_eq!(t.offset(RemapIndex::new(0)).index(), Some(FIRST_REMAPPED_OFFSET));
    }

    #[test_log::test]
    fn test_resolve_registering_assigns_dynamic_slots() {
        let entries = leaked_entries(3);
        let dir = Directory::from_entries(ENTRIES, ALIASES, 2);
        let mut t = RemapTable::new(3);
        let report = t.resolve_registering(&dir, entries).expect("resolve");
        assert_eq!(report.registered, vec!["Ext0", "Ext1"]);
        assert_eq!(report.unresolved, vec!["Ext2"], "third entry exceeds capacity");
        assert_eq!(t.offset(RemapIndex::new(0)).index(), Some(dir.static_len()));
        assert_eq!(t.offset(RemapIndex::new(1)).index(), Some(dir.static_len() + 1));
        report.log(DebugFlags::REMAP);
    }
}
