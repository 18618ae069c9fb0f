// abi.rs — C-compatible types for the dispatch boundary
//
// These types cross between producers (the library that owns the table
// layout) and consumers (drivers and clients that index into it). Their
// binary layout is fixed: a slot is one nullable C function pointer and an
// offset is a C `int` with -1 meaning "no slot".

use std::fmt;
use std::os::raw::{c_char, c_int, c_uint};

use bytemuck::{Pod, Zeroable};

// ============================================================
// Constants
// ============================================================

/// ABI version of the exported directory functions. Must match between a
/// producer library and any loader that binds its directory.
pub const GLAPI_ABI_VERSION: c_int = 1;

/// Raw value of an unresolved offset at the C boundary.
pub const SENTINEL_OFFSET: c_int = -1;

/// Prefix carried by every exported entry-point name.
pub const API_PREFIX: &str = "gl";

// Exported symbol names (NUL-terminated for dlsym).
pub const SYM_GET_ABI_VERSION: &[u8] = b"_glapi_get_abi_version\0";
pub const SYM_GET_DISPATCH_TABLE_SIZE: &[u8] = b"_glapi_get_dispatch_table_size\0";
pub const SYM_GET_PROC_OFFSET: &[u8] = b"_glapi_get_proc_offset\0";
pub const SYM_GET_PROC_NAME: &[u8] = b"_glapi_get_proc_name\0";

// ============================================================
// Slot type
// ============================================================

/// Untyped entry-point pointer as stored in a table slot.
///
/// `Option<Proc>` has the same layout as a nullable C function pointer, so a
/// `[Option<Proc>]` is binary-compatible with a C `_glapi_proc[]`.
pub type Proc = unsafe extern "C" fn();

// ============================================================
// Offset
// ============================================================

/// Index of a slot within a dispatch table, or the sentinel.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Pod, Zeroable)]
pub struct Offset(i32);

impl Offset {
    /// "Not present in this table."
    pub const SENTINEL: Offset = Offset(SENTINEL_OFFSET);

    /// Offset of slot `slot`. Slots that do not fit in a C `int` map to the
    /// sentinel.
    pub const fn from_slot(slot: usize) -> Self {
        if slot > i32::MAX as usize {
            Self::SENTINEL
        } else {
            Offset(slot as i32)
        }
    }

    /// Interpret a raw C offset. Any negative value is the sentinel.
    pub const fn from_raw(raw: c_int) -> Self {
        if raw < 0 {
            Self::SENTINEL
        } else {
            Offset(raw)
        }
    }

    pub const fn raw(self) -> c_int {
        self.0
    }

    pub const fn is_sentinel(self) -> bool {
        self.0 < 0
    }

    /// Slot index, or `None` for the sentinel.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        if self.0 < 0 {
            None
        } else {
            Some(self.0 as usize)
        }
    }
}

impl Default for Offset {
    fn default() -> Self {
        Self::SENTINEL
    }
}

impl fmt::Debug for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sentinel() {
            f.write_str("Offset(sentinel)")
        } else {
            write!(f, "Offset({})", self.0)
        }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sentinel() {
            f.write_str("-")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<Offset> for c_int {
    fn from(offset: Offset) -> c_int {
        offset.0
    }
}

// ============================================================
// Remap index
// ============================================================

/// Position of an entry within a RemapTable. Assigned by the consumer's
/// build, dense from zero.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RemapIndex(u16);

impl RemapIndex {
    pub const fn new(index: u16) -> Self {
        RemapIndex(index)
    }

    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

// ============================================================
// Exported directory function types
// ============================================================

/// `int _glapi_get_abi_version(void)`
pub type GetAbiVersionFn = unsafe extern "C" fn() -> c_int;

/// `unsigned _glapi_get_dispatch_table_size(void)`
pub type GetDispatchTableSizeFn = unsafe extern "C" fn() -> c_uint;

/// `int _glapi_get_proc_offset(const char *name)`
pub type GetProcOffsetFn = unsafe extern "C" fn(name: *const c_char) -> c_int;

/// `const char *_glapi_get_proc_name(unsigned offset)`
pub type GetProcNameFn = unsafe extern "C" fn(offset: c_uint) -> *const c_char;

/// `int _glapi_add_dispatch(const char *const *names, const char *signature)`
pub type AddDispatchFn =
    unsafe extern "C" fn(names: *const *const c_char, signature: *const c_char) -> c_int;

/// Strip the API prefix from an exported name (`glNewList` → `NewList`).
pub fn strip_api_prefix(name: &str) -> Option<&str> {
    name.strip_prefix(API_PREFIX).filter(|rest| !rest.is_empty())
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_slot_is_one_nullable_pointer() {
        assert_eq!(
            size_of::<Option<Proc>>(),
            size_of::<*const ()>(),
            "a slot must be exactly one pointer so C code can index the table"
        );
    }

    #[test]
    fn test_offset_is_c_int() {
        assert_eq!(size_of::<Offset>(), size_of::<c_int>());
        let offsets = [Offset::from_slot(3), Offset::SENTINEL];
        let raw: &[c_int] = bytemuck::cast_slice(&offsets);
        assert_eq!(raw, &[3, -1]);
    }

    #[test]
    fn test_offset_from_raw_negative_is_sentinel() {
        assert!(Offset::from_raw(-1).is_sentinel());
        assert!(Offset::from_raw(-77).is_sentinel());
        assert_eq!(Offset::from_raw(-77), Offset::SENTINEL);
        assert_eq!(Offset::from_raw(12).index(), Some(12));
    }

    #[test]
    fn test_offset_from_slot_overflow_is_sentinel() {
        assert_eq!(Offset::from_slot(i32::MAX as usize).index(), Some(i32::MAX as usize));
        assert!(Offset::from_slot(i32::MAX as usize + 1).is_sentinel());
    }

    #[test]
    fn test_offset_default_is_sentinel() {
        assert!(Offset::default().is_sentinel());
        assert_eq!(format!("{}", Offset::default()), "-");
        assert_eq!(format!("{:?}", Offset::from_slot(9)), "Offset(9)");
    }

    #[test]
    fn test_strip_api_prefix() {
        assert_eq!(strip_api_prefix("glNewList"), Some("NewList"));
        assert_eq!(strip_api_prefix("gl"), None);
        assert_eq!(strip_api_prefix("NewList"), None);
    }

    #[test]
    fn test_symbol_names_are_nul_terminated() {
        for sym in [
            SYM_GET_ABI_VERSION,
            SYM_GET_DISPATCH_TABLE_SIZE,
            SYM_GET_PROC_OFFSET,
            SYM_GET_PROC_NAME,
        ] {
            assert_eq!(sym.last(), Some(&0u8));
        }
    }
}
