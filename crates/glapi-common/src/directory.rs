// directory.rs — Name → offset directory of a table producer
//
// The producer of a table layout is the authority on where each entry point
// lives. Consumers ask it by name and get an offset (or the sentinel). The
// compiled-in `Directory` knows the static layout, the alias names sharing
// static slots, and entry points registered at run time, which are placed in
// slots after the static range.

use std::collections::HashMap;
use std::os::raw::c_int;

use log::{debug, warn};
use parking_lot::RwLock;

use crate::abi::Offset;
use crate::config::DispatchConfig;
use crate::entries::{ALIASES, ENTRIES};
use crate::entry::EntryDescriptor;
use crate::error::DirectoryError;
use crate::table::DEFAULT_DYNAMIC_SLOTS;

// ============================================================
// Traits
// ============================================================

/// Read access to a producer's name → offset directory.
///
/// Names are entry-point names without the API prefix.
pub trait ProcDirectory {
    /// Current offset of `name`, or the sentinel if the producer does not
    /// know it.
    fn proc_offset(&self, name: &str) -> Offset;

    /// Canonical name of the entry at `offset`.
    fn proc_name(&self, offset: Offset) -> Option<String>;

    /// Length of the tables this producer builds.
    fn table_size(&self) -> usize;
}

/// A directory that can also grow: entry points unknown to it can be
/// registered and given a slot.
pub trait ProcRegistry: ProcDirectory {
    /// Register `names` (one entry point and its aliases) with parameter
    /// signature `signature`, returning the slot they share.
    fn add_dispatch(&self, names: &[&str], signature: &str) -> Result<Offset, DirectoryError>;
}

// ============================================================
// Directory
// ============================================================

struct DynamicEntry {
    names: Vec<String>,
    signature: String,
}

#[derive(Default)]
struct DynamicState {
    /// Indexed by `offset - static_len`.
    entries: Vec<DynamicEntry>,
    by_name: HashMap<String, Offset>,
}

/// The producer's compiled-in directory.
pub struct Directory {
    entries: &'static [EntryDescriptor],
    aliases: &'static [(&'static str, &'static str)],
    /// Static and alias names → position in `entries`.
    static_names: HashMap<&'static str, usize>,
    /// First slot after the static layout.
    static_len: usize,
    max_dynamic: usize,
    dynamic: RwLock<DynamicState>,
}

impl Directory {
    /// Directory of the shipped entry set with the default dynamic capacity.
    pub fn new() -> Self {
        Self::from_entries(ENTRIES, ALIASES, DEFAULT_DYNAMIC_SLOTS)
    }

    pub fn from_config(config: &DispatchConfig) -> Self {
        Self::from_entries(ENTRIES, ALIASES, config.max_dynamic_entries)
    }

    /// Directory over an arbitrary descriptor set. Descriptors without a
    /// fixed offset are not part of the static layout and are skipped, as
    /// are aliases whose canonical name is unknown. `max_dynamic` is capped
    /// so that `table_size()` stays a positive C int.
    pub fn from_entries(
        entries: &'static [EntryDescriptor],
        aliases: &'static [(&'static str, &'static str)],
        max_dynamic: usize,
    ) -> Self {
        let mut static_names = HashMap::with_capacity(entries.len() + aliases.len());
        let mut static_len = 0;
        for (i, d) in entries.iter().enumerate() {
            if let Some(slot) = d.fixed_offset.and_then(Offset::index) {
                static_names.insert(d.name, i);
                static_len = static_len.max(slot + 1);
            }
        }
        for &(alias, canonical) in aliases {
            match static_names.get(canonical).copied() {
                Some(i) => {
                    static_names.insert(alias, i);
                }
                None => debug!("alias {} names unknown entry {}", alias, canonical),
            }
        }

        let limit = (c_int::MAX as usize).saturating_sub(static_len);
        if max_dynamic > limit {
            warn!("{} dynamic slots do not fit a table, using {}", max_dynamic, limit);
        }

        Directory {
            entries,
            aliases,
            static_names,
            static_len,
            max_dynamic: max_dynamic.min(limit),
            dynamic: RwLock::new(DynamicState::default()),
        }
    }

    /// Number of slots in the static layout.
    pub fn static_len(&self) -> usize {
        self.static_len
    }

    pub fn max_dynamic(&self) -> usize {
        self.max_dynamic
    }

    /// Number of entry points registered at run time.
    pub fn dynamic_count(&self) -> usize {
        self.dynamic.read().entries.len()
    }

    pub fn aliases(&self) -> &'static [(&'static str, &'static str)] {
        self.aliases
    }

    pub fn entries(&self) -> &'static [EntryDescriptor] {
        self.entries
    }

    /// Parameter signature of the entry at `offset`.
    pub fn signature_of(&self, offset: Offset) -> Option<String> {
        let slot = offset.index()?;
        if slot < self.static_len {
            return self
                .entries
                .iter()
                .find(|d| d.fixed_offset == Some(offset))
                .map(|d| d.signature.to_string());
        }
        let dynamic = self.dynamic.read();
        dynamic
            .entries
            .get(slot - self.static_len)
            .map(|e| e.signature.clone())
    }

    fn static_offset(&self, name: &str) -> Option<Offset> {
        self.static_names
            .get(name)
            .and_then(|&i| self.entries[i].fixed_offset)
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

fn valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

impl ProcDirectory for Directory {
    fn proc_offset(&self, name: &str) -> Offset {
        if let Some(offset) = self.static_offset(name) {
            return offset;
        }
        self.dynamic
            .read()
            .by_name
            .get(name)
            .copied()
            .unwrap_or(Offset::SENTINEL)
    }

    fn proc_name(&self, offset: Offset) -> Option<String> {
        let slot = offset.index()?;
        if slot < self.static_len {
            return self
                .entries
                .iter()
                .find(|d| d.fixed_offset == Some(offset))
                .map(|d| d.name.to_string());
        }
        let dynamic = self.dynamic.read();
        dynamic
            .entries
            .get(slot - self.static_len)
            .and_then(|e| e.names.first().cloned())
    }

    fn table_size(&self) -> usize {
        self.static_len + self.max_dynamic
    }
}

impl ProcRegistry for Directory {
    /// All names must resolve to the same slot; after that, names already
    /// known must carry the same signature. If none is known, the names get
    /// the next free dynamic slot; names not yet known are then recorded as
    /// sharing the slot of those that are.
    fn add_dispatch(&self, names: &[&str], signature: &str) -> Result<Offset, DirectoryError> {
        if names.is_empty() {
            return Err(DirectoryError::BadName(String::new()));
        }
        if let Some(bad) = names.iter().find(|n| !valid_name(n)) {
            return Err(DirectoryError::BadName(bad.to_string()));
        }

        let mut dynamic = self.dynamic.write();

        let known: Vec<(&str, Offset)> = names
            .iter()
            .filter_map(|&name| {
                self.static_offset(name)
                    .or_else(|| dynamic.by_name.get(name).copied())
                    .map(|offset| (name, offset))
            })
            .collect();

        let found = known.first().map(|&(_, offset)| offset);
        if let Some(first) = found {
            if let Some(&(_, second)) = known.iter().find(|&&(_, o)| o != first) {
                return Err(DirectoryError::OffsetConflict { first, second });
            }
        }

        for &(name, offset) in &known {
            let existing = match offset.index() {
                Some(slot) if slot < self.static_len => self
                    .entries
                    .iter()
                    .find(|d| d.fixed_offset == Some(offset))
                    .map(|d| d.signature.to_string()),
                Some(slot) => dynamic
                    .entries
                    .get(slot - self.static_len)
                    .map(|e| e.signature.clone()),
                None => None,
            };
            if let Some(existing) = existing {
                if existing != signature {
                    return Err(DirectoryError::SignatureMismatch {
                        name: name.to_string(),
                        existing,
                        requested: signature.to_string(),
                    });
                }
            }
        }

        let offset = match found {
            Some(offset) => offset,
            None => {
                if dynamic.entries.len() >= self.max_dynamic {
                    return Err(DirectoryError::TableFull {
                        capacity: self.max_dynamic,
                    });
                }
                let offset = Offset::from_slot(self.static_len + dynamic.entries.len());
                dynamic.entries.push(DynamicEntry {
                    names: Vec::new(),
                    signature: signature.to_string(),
                });
                debug!("dynamic entry {} at offset {} ({:?})", names[0], offset, signature);
                offset
            }
        };

        for &name in names {
            if self.static_offset(name).is_some() || dynamic.by_name.contains_key(name) {
                continue;
            }
            dynamic.by_name.insert(name.to_string(), offset);
            if let Some(slot) = offset.index().filter(|&s| s >= self.static_len) {
                if let Some(entry) = dynamic.entries.get_mut(slot - self.static_len) {
                    entry.names.push(name.to_string());
                }
            }
        }

        Ok(offset)
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::{STATIC_ENTRY_COUNT, ENTRIES};

    #[test]
    fn test_static_names_resolve_to_fixed_offsets() {
        let dir = Directory::new();
        assert_eq!(dir.proc_offset("NewList").raw(), 0);
        assert_eq!(dir.proc_offset("GenLists").raw(), 5);
        assert_eq!(dir.proc_offset("AttachShader").raw(), 408);
        assert!(dir.proc_offset("NoSuchThing").is_sentinel());
        assert!(dir.proc_offset("glNewList").is_sentinel(), "directory names carry no prefix");
    }

    #[test]
    fn test_every_entry_round_trips_name_and_offset() {
        let dir = Directory::new();
        for d in ENTRIES {
            let offset = dir.proc_offset(d.name);
            assert_eq!(Some(offset), d.fixed_offset, "{} resolved to wrong slot", d.name);
            assert_eq!(dir.proc_name(offset).as_deref(), Some(d.name));
        }
    }

    #[test]
    fn test_aliases_share_canonical_slot() {
        let dir = Directory::new();
        assert_eq!(dir.proc_offset("BindTextureEXT"), dir.proc_offset("BindTexture"));
        assert_eq!(
            dir.proc_name(dir.proc_offset("BindTextureEXT")).as_deref(),
            Some("BindTexture"),
            "proc_name returns the canonical name"
        );
    }

    #[test]
    fn test_table_size_includes_dynamic_capacity() {
        let dir = Directory::new();
        assert_eq!(dir.static_len(), STATIC_ENTRY_COUNT);
        assert_eq!(dir.table_size(), STATIC_ENTRY_COUNT + DEFAULT_DYNAMIC_SLOTS);
        assert!(dir.proc_name(Offset::SENTINEL).is_none());
    }

    #[test]
    fn test_add_dispatch_assigns_consecutive_dynamic_slots() {
        let dir = Directory::with_capacity_for_test(4);
        let a = dir.add_dispatch(&["FooBarEXT"], "ip").expect("first registration");
        let b = dir.add_dispatch(&["BazQuuxEXT"], "").expect("second registration");
        assert_eq!(a.index(), Some(STATIC_ENTRY_COUNT));
        assert_eq!(b.index(), Some(STATIC_ENTRY_COUNT + 1));
        assert_eq!(dir.proc_offset("FooBarEXT"), a);
        assert_eq!(dir.proc_name(b).as_deref(), Some("BazQuuxEXT"));
        assert_eq!(dir.signature_of(a).as_deref(), Some("ip"));
        assert_eq!(dir.dynamic_count(), 2);
    }

    #[test]
    fn test_add_dispatch_is_idempotent() {
        let dir = Directory::with_capacity_for_test(4);
        let a = dir.add_dispatch(&["FooBarEXT"], "ip").expect("register");
        let again = dir.add_dispatch(&["FooBarEXT"], "ip").expect("re-register");
        assert_eq!(a, again);
        assert_eq!(dir.dynamic_count(), 1);
    }

    #[test]
    fn test_add_dispatch_known_static_name() {
        let dir = Directory::new();
        let offset = dir.add_dispatch(&["NewList"], "ii").expect("static entry");
        assert_eq!(offset.raw(), 0);
        assert_eq!(dir.dynamic_count(), 0, "known static names must not consume dynamic slots");
    }

    #[test]
    fn test_add_dispatch_new_alias_joins_existing_slot() {
        let dir = Directory::new();
        let offset = dir
            .add_dispatch(&["NewList", "NewListXYZ"], "ii")
            .expect("alias of static entry");
        assert_eq!(offset.raw(), 0);
        assert_eq!(dir.proc_offset("NewListXYZ").raw(), 0);
    }

    #[test]
    fn test_add_dispatch_signature_mismatch() {
        let dir = Directory::new();
        let err = dir.add_dispatch(&["NewList"], "ff").unwrap_err();
        assert!(matches!(err, DirectoryError::SignatureMismatch { .. }), "got {:?}", err);

        let dir = Directory::with_capacity_for_test(2);
        dir.add_dispatch(&["FooEXT"], "i").expect("register");
        assert!(dir.add_dispatch(&["FooEXT"], "p").is_err());
    }

    #[test]
    fn test_add_dispatch_offset_conflict() {
        let dir = Directory::new();
        let err = dir.add_dispatch(&["NewList", "EndList"], "ii").unwrap_err();
        assert!(matches!(err, DirectoryError::OffsetConflict { .. }), "got {:?}", err);
    }

    #[test]
    fn test_add_dispatch_conflict_reported_before_signature() {
        let dir = Directory::new();
        let err = dir.add_dispatch(&["NewList", "EndList"], "??").unwrap_err();
        assert!(matches!(err, DirectoryError::OffsetConflict { .. }), "got {:?}", err);

        let dir = Directory::with_capacity_for_test(2);
        let foo = dir.add_dispatch(&["FooEXT"], "i").expect("register");
        let err = dir.add_dispatch(&["FooEXT", "NewList"], "i").unwrap_err();
        assert_eq!(
            err,
            DirectoryError::OffsetConflict {
                first: foo,
                second: Offset::from_slot(0)
            }
        );
    }

    #[test_log::test]
    fn test_huge_dynamic_capacity_is_capped() {
        let dir = Directory::with_capacity_for_test(usize::MAX);
        assert_eq!(dir.table_size(), c_int::MAX as usize);
        assert_eq!(dir.max_dynamic(), c_int::MAX as usize - STATIC_ENTRY_COUNT);

        let dir = Directory::with_capacity_for_test(5_000_000_000);
        assert_eq!(dir.table_size(), c_int::MAX as usize);
    }

    #[test]
    fn test_add_dispatch_table_full() {
        let dir = Directory::with_capacity_for_test(1);
        dir.add_dispatch(&["OneEXT"], "").expect("fits");
        let err = dir.add_dispatch(&["TwoEXT"], "").unwrap_err();
        assert_eq!(err, DirectoryError::TableFull { capacity: 1 });
        assert!(dir.proc_offset("TwoEXT").is_sentinel());
    }

    #[test]
    fn test_add_dispatch_bad_names() {
        let dir = Directory::new();
        assert!(matches!(dir.add_dispatch(&[], "i"), Err(DirectoryError::BadName(_))));
        assert!(matches!(dir.add_dispatch(&[""], "i"), Err(DirectoryError::BadName(_))));
        assert!(matches!(
            dir.add_dispatch(&["Has Space"], "i"),
            Err(DirectoryError::BadName(_))
        ));
    }

    impl Directory {
        fn with_capacity_for_test(max_dynamic: usize) -> Self {
            Directory::from_entries(ENTRIES, ALIASES, max_dynamic)
        }
    }
}
