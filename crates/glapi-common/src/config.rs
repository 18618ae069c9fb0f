// config.rs — Run-time dispatch settings
//
// Settings are read from named environment variables once, at loader or
// library initialisation. Each variable has a default; unknown or malformed
// values are logged and ignored.

use std::os::raw::c_int;

use bitflags::bitflags;
use log::warn;

use crate::abi::API_PREFIX;
use crate::table::DEFAULT_DYNAMIC_SLOTS;

pub const ENV_DEBUG: &str = "GLAPI_DEBUG";
pub const ENV_SYMBOL_PREFIX: &str = "GLAPI_SYMBOL_PREFIX";
pub const ENV_MAX_DYNAMIC: &str = "GLAPI_MAX_DYNAMIC";

/// Largest dynamic capacity whose table length is still a positive C int.
pub const MAX_DYNAMIC_SLOTS: usize = c_int::MAX as usize - crate::entries::STATIC_ENTRY_COUNT;

bitflags! {
    /// Diagnostic switches, set by `GLAPI_DEBUG=calls,remap,install`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DebugFlags: u32 {
        /// Warn when a call reaches an empty or unresolved slot.
        const CALLS   = 0x0001;
        /// Warn about remap entries left unresolved.
        const REMAP   = 0x0002;
        /// Log every slot written while populating a table.
        const INSTALL = 0x0004;
    }
}

impl DebugFlags {
    /// Parse a comma- or space-separated list of flag names. `all` sets
    /// every flag. Unknown names are reported and skipped.
    pub fn parse(list: &str) -> Self {
        let mut flags = DebugFlags::empty();
        for word in list
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|w| !w.is_empty())
        {
            match word.to_ascii_lowercase().as_str() {
                "calls" => flags |= DebugFlags::CALLS,
                "remap" => flags |= DebugFlags::REMAP,
                "install" => flags |= DebugFlags::INSTALL,
                "all" => flags |= DebugFlags::all(),
                other => warn!("{}: unknown flag {:?}", ENV_DEBUG, other),
            }
        }
        flags
    }
}

/// Dispatch-layer settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Prefix prepended to entry names when looking up implementation
    /// symbols (`gl` finds `glNewList`, `mgl` finds `mglNewList`).
    pub symbol_prefix: String,
    pub debug: DebugFlags,
    /// Number of slots available to run-time registered entries.
    pub max_dynamic_entries: usize,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        DispatchConfig {
            symbol_prefix: API_PREFIX.to_string(),
            debug: DebugFlags::empty(),
            max_dynamic_entries: DEFAULT_DYNAMIC_SLOTS,
        }
    }
}

impl DispatchConfig {
    /// Settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Settings from an explicit set of variables. Variables not named here
    /// are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = DispatchConfig::default();
        for (key, value) in vars {
            let value = value.as_ref();
            match key.as_ref() {
                ENV_DEBUG => config.debug = DebugFlags::parse(value),
                ENV_SYMBOL_PREFIX => config.symbol_prefix = value.to_string(),
                ENV_MAX_DYNAMIC => match value.trim().parse::<u64>() {
                    Ok(n) if n > MAX_DYNAMIC_SLOTS as u64 => {
                        warn!(
                            "{}: {} slots do not fit a table, using {}",
                            ENV_MAX_DYNAMIC, n, MAX_DYNAMIC_SLOTS
                        );
                        config.max_dynamic_entries = MAX_DYNAMIC_SLOTS;
                    }
                    Ok(n) => config.max_dynamic_entries = n as usize,
                    Err(_) => warn!(
                        "{}: {:?} is not a slot count, keeping {}",
                        ENV_MAX_DYNAMIC, value, config.max_dynamic_entries
                    ),
                },
                _ => {}
            }
        }
        config
    }

    /// Length of a table that holds the static layout plus the dynamic
    /// capacity.
    pub fn table_size(&self) -> usize {
        crate::entries::STATIC_ENTRY_COUNT
            .saturating_add(self.max_dynamic_entries.min(MAX_DYNAMIC_SLOTS))
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::{Directory, ProcDirectory};

    #[test]
    fn test_defaults() {
        let c = DispatchConfig::from_vars(Vec::<(String, String)>::new());
        assert_eq!(c, DispatchConfig::default());
        assert_eq!(c.symbol_prefix, "gl");
        assert_eq!(c.max_dynamic_entries, 300);
        assert_eq!(c.table_size(), 1170);
        assert!(c.debug.is_empty());
    }

    #[test]
    fn test_debug_flag_list() {
        assert_eq!(
            DebugFlags::parse("calls, REMAP"),
            DebugFlags::CALLS | DebugFlags::REMAP
        );
        assert_eq!(DebugFlags::parse("all"), DebugFlags::all());
        assert_eq!(DebugFlags::parse(""), DebugFlags::empty());
    }

    #[test_log::test]
    fn test_unknown_debug_flag_is_skipped() {
        assert_eq!(DebugFlags::parse("install,bogus"), DebugFlags::INSTALL);
    }

    #[test]
    fn test_from_vars_reads_named_variables() {
        let c = DispatchConfig::from_vars([
            ("GLAPI_DEBUG", "install"),
            ("GLAPI_SYMBOL_PREFIX", "mgl"),
            ("GLAPI_MAX_DYNAMIC", "12"),
            ("PATH", "/usr/bin"),
        ]);
        assert_eq!(c.debug, DebugFlags::INSTALL);
        assert_eq!(c.symbol_prefix, "mgl");
        assert_eq!(c.max_dynamic_entries, 12);
        assert_eq!(c.table_size(), 882);
    }

    #[test_log::test]
    fn test_bad_dynamic_count_keeps_default() {
        let c = DispatchConfig::from_vars([("GLAPI_MAX_DYNAMIC", "lots")]);
        assert_eq!(c.max_dynamic_entries, DEFAULT_DYNAMIC_SLOTS);
        let c = DispatchConfig::from_vars([("GLAPI_MAX_DYNAMIC", "-5")]);
        assert_eq!(c.max_dynamic_entries, DEFAULT_DYNAMIC_SLOTS);
    }

    #[test_log::test]
    fn test_huge_dynamic_count_is_clamped() {
        for value in ["18446744073709551615", "5000000000"] {
            let c = DispatchConfig::from_vars([("GLAPI_MAX_DYNAMIC", value)]);
            assert_eq!(c.max_dynamic_entries, MAX_DYNAMIC_SLOTS, "{} must be clamped", value);
            assert_eq!(c.table_size(), c_int::MAX as usize);
            assert_eq!(Directory::from_config(&c).table_size(), c.table_size());
        }

        let c = DispatchConfig {
            max_dynamic_entries: usize::MAX,
            ..DispatchConfig::default()
        };
        assert_eq!(c.table_size(), c_int::MAX as usize, "set directly, still no overflow");
    }
}
