// populate.rs — Filling a dispatch table from exported symbols
//
// Each entry is looked up as `{prefix}{Name}`. If the implementation does not
// export that name, the entry's alias names are tried in turn, since many
// implementations export only the vendor-suffixed variant of an entry.

use std::collections::HashMap;

use libloading::Library;
use log::{debug, info};

use glapi_common::abi::Proc;
use glapi_common::accessor::{Addressing, Dispatch};
use glapi_common::config::DebugFlags;
use glapi_common::entries::{ALIASES, ENTRIES};
use glapi_common::entry::EntryDescriptor;
use glapi_common::table::Table;

use crate::library::ProducerLibrary;

// ============================================================
// Symbol sources
// ============================================================

/// Something that can produce an implementation function by symbol name.
pub trait SymbolSource {
    fn lookup(&self, symbol: &str) -> Option<Proc>;
}

impl SymbolSource for Library {
    fn lookup(&self, symbol: &str) -> Option<Proc> {
        // SAFETY: the symbol is only reinterpreted as an untyped slot value;
        // it is called through the entry's typed pointer.
        unsafe { self.get::<Proc>(symbol.as_bytes()) }.ok().map(|sym| *sym)
    }
}

impl SymbolSource for ProducerLibrary {
    fn lookup(&self, symbol: &str) -> Option<Proc> {
        self.library().lookup(symbol)
    }
}

impl SymbolSource for HashMap<String, Proc> {
    fn lookup(&self, symbol: &str) -> Option<Proc> {
        self.get(symbol).copied()
    }
}

impl SymbolSource for HashMap<&str, Proc> {
    fn lookup(&self, symbol: &str) -> Option<Proc> {
        self.get(symbol).copied()
    }
}

// ============================================================
// Population
// ============================================================

/// What populating a table did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulateReport {
    /// Slots filled from the entry's own name.
    pub installed: usize,
    /// Slots filled from an alias name, as `(entry, alias)`.
    pub via_alias: Vec<(&'static str, &'static str)>,
    /// Slots that were already filled and left alone.
    pub kept: usize,
    /// Entries the source does not export under any name.
    pub missing: Vec<&'static str>,
    /// Entries with no slot under the dispatch's addressing mode.
    pub unaddressable: Vec<&'static str>,
}

impl PopulateReport {
    pub fn filled(&self) -> usize {
        self.installed + self.via_alias.len()
    }
}

/// Fill every empty slot of `table` for the shipped entries.
pub fn populate_table<A, S>(
    dispatch: &Dispatch<A>,
    table: &mut Table,
    source: &S,
    prefix: &str,
) -> PopulateReport
where
    A: Addressing,
    S: SymbolSource + ?Sized,
{
    populate_entries(dispatch, table, source, prefix, ENTRIES, ALIASES)
}

/// Fill every empty slot of `table` for `entries`, trying `aliases` for
/// names the source does not export.
pub fn populate_entries<A, S>(
    dispatch: &Dispatch<A>,
    table: &mut Table,
    source: &S,
    prefix: &str,
    entries: &'static [EntryDescriptor],
    aliases: &'static [(&'static str, &'static str)],
) -> PopulateReport
where
    A: Addressing,
    S: SymbolSource + ?Sized,
{
    let verbose = dispatch.flags().contains(DebugFlags::INSTALL);
    let mut report = PopulateReport::default();

    for d in entries {
        let offset = dispatch.offset_of(d);
        match offset.index() {
            Some(slot) if slot < table.len() => {}
            _ => {
                report.unaddressable.push(d.name);
                continue;
            }
        }
        if table.get(offset).is_some() {
            report.kept += 1;
            continue;
        }

        if let Some(f) = source.lookup(&format!("{}{}", prefix, d.name)) {
            table.set(offset, f);
            report.installed += 1;
            if verbose {
                debug!("install {}{} at {}", prefix, d.name, offset);
            }
            continue;
        }

        let found = aliases
            .iter()
            .filter(|(_, canonical)| *canonical == d.name)
            .find_map(|&(alias, _)| {
                source
                    .lookup(&format!("{}{}", prefix, alias))
                    .map(|f| (alias, f))
            });
        match found {
            Some((alias, f)) => {
                table.set(offset, f);
                report.via_alias.push((d.name, alias));
                if verbose {
                    debug!("install {} at {} from {}{}", d.name, offset, prefix, alias);
                }
            }
            None => report.missing.push(d.name),
        }
    }

    info!(
        "populated {} of {} entries ({} from aliases, {} kept, {} missing)",
        report.filled(),
        entries.len(),
        report.via_alias.len(),
        report.kept,
        report.missing.len()
    );
    report
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glapi_common::accessor::Direct;
    use glapi_common::entries;
    use glapi_common::entry::EntryFn;

    unsafe extern "C" fn gen_lists(range: i32) -> u32 {
        range as u32 + 1
    }

    unsafe extern "C" fn bind_texture(_target: u32, _texture: u32) {}

    unsafe extern "C" fn other() {}

    fn as_proc(f: unsafe extern "C" fn(i32) -> u32) -> Proc {
        f.into_proc()
    }

    #[test]
    fn test_populate_by_exported_name() {
        let mut source: HashMap<&str, Proc> = HashMap::new();
        source.insert("glGenLists", as_proc(gen_lists));
        let d = Dispatch::new(Direct);
        let mut t = Table::new();

        let report = populate_table(&d, &mut t, &source, "gl");
        assert_eq!(report.installed, 1);
        assert_eq!(report.missing.len(), ENTRIES.len() - 1);
        assert_eq!(unsafe { d.call::<entries::GenLists>(&t, (4,)) }, Some(5));
    }

    #[test]
    fn test_populate_falls_back_to_alias() {
        let mut source: HashMap<String, Proc> = HashMap::new();
        source.insert("glBindTextureEXT".to_string(), (bind_texture as unsafe extern "C" fn(u32, u32)).into_proc());
        let d = Dispatch::new(Direct);
        let mut t = Table::new();

        let report = populate_table(&d, &mut t, &source, "gl");
        assert_eq!(report.installed, 0);
        assert_eq!(report.via_alias, vec![("BindTexture", "BindTextureEXT")]);
        assert!(d.get::<entries::BindTexture>(&t).is_some());
    }

    #[test]
    fn test_populate_uses_prefix() {
        let mut source: HashMap<&str, Proc> = HashMap::new();
        source.insert("mglGenLists", as_proc(gen_lists));
        source.insert("glEndList", other);
        let d = Dispatch::new(Direct);
        let mut t = Table::new();

        let report = populate_table(&d, &mut t, &source, "mgl");
        assert_eq!(report.filled(), 1);
        assert!(d.get::<entries::GenLists>(&t).is_some());
        assert!(d.get::<entries::EndList>(&t).is_none(), "unprefixed names must not match");
    }

    #[test]
    fn test_populate_keeps_installed_slots() {
        let mut source: HashMap<&str, Proc> = HashMap::new();
        source.insert("glEndList", other);
        let d = Dispatch::new(Direct);
        let mut t = Table::new();
        unsafe extern "C" fn mine() {}
        d.set::<entries::EndList>(&mut t, mine);

        let report = populate_table(&d, &mut t, &source, "gl");
        assert_eq!(report.kept, 1);
        assert_eq!(report.installed, 0);
        assert_eq!(
            d.get::<entries::EndList>(&t).map(|f| f as usize),
            Some(mine as usize),
            "existing slot must not be overwritten"
        );
    }

    #[test_log::test]
    fn test_populate_short_table_reports_unaddressable() {
        let source: HashMap<&str, Proc> = HashMap::new();
        let d = Dispatch::new(Direct).with_flags(DebugFlags::INSTALL);
        let mut t = Table::with_size(10);
        let report = populate_table(&d, &mut t, &source, "gl");
        assert_eq!(report.unaddressable.len(), ENTRIES.len() - 10);
        assert_eq!(report.missing.len(), 10);
    }
}
