// glapi-ffi — C ABI of the dispatch directory and tables
//
// Built as a shared library (libglapi) that drivers and loaders written in C
// link against or dlopen. It owns the producer directory for this process:
// offsets of the static layout, alias names, and entry points drivers
// register at run time. Offsets at this boundary are C ints with -1 as the
// sentinel; names carry the `gl` prefix.

#![allow(clippy::missing_safety_doc)]

use std::cell::Cell;
use std::collections::HashMap;
use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int, c_uint};

use log::{debug, warn};
use once_cell::sync::Lazy;
use parking_lot::Mutex;

use glapi_common::abi::{strip_api_prefix, Offset, Proc, API_PREFIX, GLAPI_ABI_VERSION, SENTINEL_OFFSET};
use glapi_common::config::DispatchConfig;
use glapi_common::directory::{Directory, ProcDirectory, ProcRegistry};
use glapi_common::table::Table;

// ============================================================
// Global state
// ============================================================

/// The process-wide directory, configured from the environment on first use.
static DIRECTORY: Lazy<Directory> = Lazy::new(|| {
    let config = DispatchConfig::from_env();
    debug!(
        "glapi directory: {} static slots, {} dynamic",
        glapi_common::entries::STATIC_ENTRY_COUNT,
        config.max_dynamic_entries
    );
    Directory::from_config(&config)
});

/// Exported names handed out by `_glapi_get_proc_name`. Never evicted, so
/// returned pointers stay valid for the life of the process.
static NAME_CACHE: Lazy<Mutex<HashMap<c_uint, CString>>> = Lazy::new(|| Mutex::new(HashMap::new()));

thread_local! {
    static CURRENT_DISPATCH: Cell<*mut Option<Proc>> = const { Cell::new(std::ptr::null_mut()) };
}

fn table_len() -> usize {
    DIRECTORY.table_size()
}

/// Bare entry name from a C exported name, or `None` if it is not one.
unsafe fn bare_name<'a>(name: *const c_char) -> Option<&'a str> {
    if name.is_null() {
        return None;
    }
    let name = CStr::from_ptr(name).to_str().ok()?;
    strip_api_prefix(name)
}

// ============================================================
// Directory queries
// ============================================================

#[no_mangle]
pub extern "C" fn _glapi_get_abi_version() -> c_int {
    GLAPI_ABI_VERSION
}

/// Number of slots in tables created by this library.
#[no_mangle]
pub extern "C" fn _glapi_get_dispatch_table_size() -> c_uint {
    table_len() as c_uint
}

/// Offset of exported entry point `name`, or -1.
#[no_mangle]
pub unsafe extern "C" fn _glapi_get_proc_offset(name: *const c_char) -> c_int {
    match bare_name(name) {
        Some(bare) => DIRECTORY.proc_offset(bare).raw(),
        None => SENTINEL_OFFSET,
    }
}

/// Exported name of the entry at `offset`, or NULL.
#[no_mangle]
pub extern "C" fn _glapi_get_proc_name(offset: c_uint) -> *const c_char {
    let Ok(raw) = c_int::try_from(offset) else {
        return std::ptr::null();
    };
    let mut cache = NAME_CACHE.lock();
    if let Some(name) = cache.get(&offset) {
        return name.as_ptr();
    }
    let Some(bare) = DIRECTORY.proc_name(Offset::from_raw(raw)) else {
        return std::ptr::null();
    };
    match CString::new(format!("{}{}", API_PREFIX, bare)) {
        Ok(name) => cache.entry(offset).or_insert(name).as_ptr(),
        Err(_) => std::ptr::null(),
    }
}

/// Register an entry point under the NULL-terminated list `names` with
/// parameter signature `signature`. Returns its offset, or -1.
#[no_mangle]
pub unsafe extern "C" fn _glapi_add_dispatch(
    names: *const *const c_char,
    signature: *const c_char,
) -> c_int {
    if names.is_null() {
        return SENTINEL_OFFSET;
    }
    let signature = if signature.is_null() {
        ""
    } else {
        match CStr::from_ptr(signature).to_str() {
            Ok(s) => s,
            Err(_) => return SENTINEL_OFFSET,
        }
    };

    let mut bare = Vec::new();
    let mut i = 0;
    loop {
        let name = *names.add(i);
        if name.is_null() {
            break;
        }
        match bare_name(name) {
            Some(b) => bare.push(b),
            None => {
                warn!("_glapi_add_dispatch: {:?} is not an exported GL name", CStr::from_ptr(name));
                return SENTINEL_OFFSET;
            }
        }
        i += 1;
    }

    match DIRECTORY.add_dispatch(&bare, signature) {
        Ok(offset) => offset.raw(),
        Err(e) => {
            warn!("_glapi_add_dispatch: {}", e);
            SENTINEL_OFFSET
        }
    }
}

// ============================================================
// Tables
// ============================================================

/// Allocate a table with every slot empty. Free with `_glapi_destroy_table`.
#[no_mangle]
pub extern "C" fn _glapi_create_table() -> *mut Option<Proc> {
    let slots = Table::with_size(table_len()).into_slots();
    Box::into_raw(slots) as *mut Option<Proc>
}

#[no_mangle]
pub unsafe extern "C" fn _glapi_destroy_table(table: *mut Option<Proc>) {
    if table.is_null() {
        return;
    }
    if CURRENT_DISPATCH.with(|c| c.get()) == table {
        CURRENT_DISPATCH.with(|c| c.set(std::ptr::null_mut()));
    }
    let slots = std::ptr::slice_from_raw_parts_mut(table, table_len());
    drop(Box::from_raw(slots));
}

unsafe fn slots<'a>(table: *mut Option<Proc>) -> Option<&'a mut [Option<Proc>]> {
    if table.is_null() {
        None
    } else {
        Some(std::slice::from_raw_parts_mut(table, table_len()))
    }
}

/// Store `f` at `offset`. Returns 1 if written, 0 for an invalid offset.
#[no_mangle]
pub unsafe extern "C" fn _glapi_set_entry(
    table: *mut Option<Proc>,
    offset: c_int,
    f: Option<Proc>,
) -> c_int {
    let Some(slots) = slots(table) else { return 0 };
    match Offset::from_raw(offset).index().and_then(|i| slots.get_mut(i)) {
        Some(slot) => {
            *slot = f;
            1
        }
        None => 0,
    }
}

/// Function at `offset`, or NULL for an empty slot or invalid offset.
#[no_mangle]
pub unsafe extern "C" fn _glapi_get_entry(table: *mut Option<Proc>, offset: c_int) -> Option<Proc> {
    let slots = slots(table)?;
    Offset::from_raw(offset)
        .index()
        .and_then(|i| slots.get(i).copied().flatten())
}

/// Make `table` the calling thread's current dispatch.
#[no_mangle]
pub extern "C" fn _glapi_set_dispatch(table: *mut Option<Proc>) {
    CURRENT_DISPATCH.with(|c| c.set(table));
}

#[no_mangle]
pub extern "C" fn _glapi_get_dispatch() -> *mut Option<Proc> {
    CURRENT_DISPATCH.with(|c| c.get())
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    unsafe extern "C" fn noop() {}

    fn offset_of(name: &str) -> c_int {
        let c = CString::new(name).expect("no NUL");
        unsafe { _glapi_get_proc_offset(c.as_ptr()) }
    }

    #[test]
    fn test_abi_version_and_size() {
        assert_eq!(_glapi_get_abi_version(), GLAPI_ABI_VERSION);
        assert!(_glapi_get_dispatch_table_size() as usize > glapi_common::entries::STATIC_ENTRY_COUNT);
    }

    #[test]
    fn test_proc_offset_requires_prefix() {
        assert_eq!(offset_of("glNewList"), 0);
        assert_eq!(offset_of("glAttachShader"), 408);
        assert_eq!(offset_of("NewList"), -1, "names without the prefix are unknown");
        assert_eq!(offset_of("glNoSuchEntry"), -1);
        assert_eq!(unsafe { _glapi_get_proc_offset(std::ptr::null()) }, -1);
    }

    #[test]
    fn test_proc_name_is_cached_and_prefixed() {
        let a = _glapi_get_proc_name(5);
        let b = _glapi_get_proc_name(5);
        assert!(!a.is_null());
        assert_eq!(a, b, "the same pointer must be returned each time");
        assert_eq!(unsafe { CStr::from_ptr(a) }.to_str(), Ok("glGenLists"));
        assert!(_glapi_get_proc_name(c_uint::MAX).is_null());
    }

    #[test]
    fn test_add_dispatch_round_trip() {
        let foo = CString::new("glFfiTestEntryEXT").expect("name");
        let foo_alias = CString::new("glFfiTestEntryARB").expect("name");
        let sig = CString::new("ip").expect("sig");
        let names = [foo.as_ptr(), foo_alias.as_ptr(), std::ptr::null()];

        let offset = unsafe { _glapi_add_dispatch(names.as_ptr(), sig.as_ptr()) };
        assert!(
            offset >= glapi_common::entries::STATIC_ENTRY_COUNT as c_int,
            "dynamic entries go after the static layout, got {}",
            offset
        );
        assert_eq!(offset_of("glFfiTestEntryEXT"), offset);
        assert_eq!(offset_of("glFfiTestEntryARB"), offset);

        let again = unsafe { _glapi_add_dispatch(names.as_ptr(), sig.as_ptr()) };
        assert_eq!(again, offset);

        let name = _glapi_get_proc_name(offset as c_uint);
        assert_eq!(unsafe { CStr::from_ptr(name) }.to_str(), Ok("glFfiTestEntryEXT"));
    }

    #[test_log::test]
    fn test_add_dispatch_rejects_bad_input() {
        let bad = CString::new("FfiNoPrefix").expect("name");
        let names = [bad.as_ptr(), std::ptr::null()];
        assert_eq!(unsafe { _glapi_add_dispatch(names.as_ptr(), std::ptr::null()) }, -1);
        assert_eq!(unsafe { _glapi_add_dispatch(std::ptr::null(), std::ptr::null()) }, -1);

        let new_list = CString::new("glNewList").expect("name");
        let sig = CString::new("ff").expect("sig");
        let names = [new_list.as_ptr(), std::ptr::null()];
        assert_eq!(
            unsafe { _glapi_add_dispatch(names.as_ptr(), sig.as_ptr()) },
            -1,
            "signature mismatch must be refused"
        );
    }

    #[test]
    fn test_table_lifecycle() {
        unsafe {
            let t = _glapi_create_table();
            assert!(!t.is_null());
            assert!(_glapi_get_entry(t, 3).is_none());

            assert_eq!(_glapi_set_entry(t, 3, Some(noop)), 1);
            assert_eq!(_glapi_get_entry(t, 3).map(|f| f as usize), Some(noop as usize));

            assert_eq!(_glapi_set_entry(t, -1, Some(noop)), 0, "sentinel write is refused");
            assert_eq!(_glapi_set_entry(t, c_int::MAX, Some(noop)), 0);
            assert!(_glapi_get_entry(t, -1).is_none());

            _glapi_set_dispatch(t);
            assert_eq!(_glapi_get_dispatch(), t);
            _glapi_destroy_table(t);
            assert!(_glapi_get_dispatch().is_null(), "destroying the current table clears it");
        }
    }
}
