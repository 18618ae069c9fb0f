// sanity.rs — Table and directory consistency checks
//
// Used by drivers after populating a table, and by the probe tool, to find
// entry points that were expected but never installed and alias names that
// do not land on their canonical slot.

use std::fmt;

use crate::accessor::{Addressing, Dispatch};
use crate::directory::{Directory, ProcDirectory};
use crate::entries::{ALIASES, ENTRIES};
use crate::entry::{find_entry, EntryDescriptor};
use crate::table::Table;

/// Installed / missing breakdown of a descriptor set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coverage {
    pub installed: Vec<&'static str>,
    /// Entries with a slot but nothing in it.
    pub missing: Vec<&'static str>,
    /// Entries with no slot under the dispatch's addressing mode.
    pub unaddressable: Vec<&'static str>,
}

impl Coverage {
    pub fn total(&self) -> usize {
        self.installed.len() + self.missing.len() + self.unaddressable.len()
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} installed, {} missing, {} without a slot",
            self.installed.len(),
            self.total(),
            self.missing.len(),
            self.unaddressable.len()
        )
    }
}

pub fn coverage<A: Addressing>(
    dispatch: &Dispatch<A>,
    table: &Table,
    entries: &'static [EntryDescriptor],
) -> Coverage {
    let mut cov = Coverage::default();
    for d in entries {
        let offset = dispatch.offset_of(d);
        if offset.index().filter(|&i| i < table.len()).is_none() {
            cov.unaddressable.push(d.name);
        } else if table.get(offset).is_some() {
            cov.installed.push(d.name);
        } else {
            cov.missing.push(d.name);
        }
    }
    cov
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionProblem {
    /// Not an entry point of this layout, nor an alias of one.
    Unknown(String),
    /// Known, but its slot is empty or unaddressable.
    NotInstalled(String),
}

/// Check that every name in `required` is installed in `table`. Names may be
/// canonical or alias names, without the API prefix.
pub fn validate_functions<A: Addressing>(
    dispatch: &Dispatch<A>,
    table: &Table,
    required: &[&str],
) -> Vec<FunctionProblem> {
    let mut problems = Vec::new();
    for &name in required {
        let canonical = ALIASES
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|&(_, c)| c)
            .unwrap_or(name);
        match find_entry(ENTRIES, canonical) {
            None => problems.push(FunctionProblem::Unknown(name.to_string())),
            Some(d) => {
                if table.get(dispatch.offset_of(d)).is_none() {
                    problems.push(FunctionProblem::NotInstalled(name.to_string()));
                }
            }
        }
    }
    problems
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasProblem {
    pub alias: &'static str,
    pub canonical: &'static str,
}

/// Every alias known to `dir` must resolve to its canonical entry's slot.
pub fn check_aliases(dir: &Directory) -> Vec<AliasProblem> {
    dir.aliases()
        .iter()
        .filter(|&&(alias, canonical)| {
            let expected = dir.proc_offset(canonical);
            expected.is_sentinel() || dir.proc_offset(alias) != expected
        })
        .map(|&(alias, canonical)| AliasProblem { alias, canonical })
        .collect()
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::Direct;
    use crate::entries;
    use crate::entry::EntryDescriptor;
    use crate::table::DEFAULT_DYNAMIC_SLOTS;

    unsafe extern "C" fn end_list() {}

    #[test]
    fn test_coverage_of_empty_table() {
        let d = Dispatch::new(Direct);
        let cov = coverage(&d, &Table::new(), ENTRIES);
        assert_eq!(cov.installed.len(), 0);
        assert_eq!(cov.missing.len(), ENTRIES.len());
        assert!(cov.unaddressable.is_empty());
    }

    #[test]
    fn test_coverage_counts_installed_and_short_tables() {
        let d = Dispatch::new(Direct);
        let mut t = Table::with_size(500);
        d.set::<entries::EndList>(&mut t, end_list);
        let cov = coverage(&d, &t, ENTRIES);
        assert_eq!(cov.installed, vec!["EndList"]);
        assert_eq!(cov.unaddressable.len(), ENTRIES.len() - 500);
        assert_eq!(cov.total(), ENTRIES.len());
        assert!(cov.to_string().starts_with("1/870 installed"));
    }

    #[test]
    fn test_validate_functions_reports_unknown_and_missing() {
        let d = Dispatch::new(Direct);
        let mut t = Table::new();
        d.set::<entries::EndList>(&mut t, end_list);
        let problems = validate_functions(&d, &t, &["EndList", "NewList", "Frobnicate"]);
        assert_eq!(
            problems,
            vec![
                FunctionProblem::NotInstalled("NewList".to_string()),
                FunctionProblem::Unknown("Frobnicate".to_string()),
            ]
        );
    }

    #[test]
    fn test_validate_functions_accepts_alias_names() {
        let d = Dispatch::new(Direct);
        let mut t = Table::new();
        unsafe extern "C" fn bind(_target: u32, _texture: u32) {}
        d.set::<entries::BindTexture>(&mut t, bind);
        assert!(validate_functions(&d, &t, &["BindTextureEXT", "BindTexture"]).is_empty());
    }

    #[test]
    fn test_shipped_aliases_are_consistent() {
        let problems = check_aliases(&Directory::new());
        assert!(problems.is_empty(), "inconsistent aliases: {:?}", problems);
    }

    #[test]
    fn test_alias_to_unknown_entry_is_reported() {
        static ONE: [EntryDescriptor; 1] = [<entries::NewList as crate::entry::Entry>::DESCRIPTOR];
        static BROKEN: [(&str, &str); 2] = [("NewListEXT", "NewList"), ("GoneEXT", "Gone")];
        let dir = Directory::from_entries(&ONE, &BROKEN, DEFAULT_DYNAMIC_SLOTS);
        assert_eq!(
            check_aliases(&dir),
            vec![AliasProblem { alias: "GoneEXT", canonical: "Gone" }]
        );
    }
}
