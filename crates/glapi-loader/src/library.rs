// library.rs — Loading a GL implementation library and binding its directory
//
// A producer library may export the `_glapi_*` directory functions. When it
// does, the loader checks the ABI version and asks the library, by name,
// where each entry point lives in the tables it builds. When it does not,
// the library is still usable as a plain symbol source and the compiled-in
// layout is assumed.

use std::ffi::{CStr, CString};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use libloading::{Library, Symbol};
use log::{debug, info};
use thiserror::Error;

use glapi_common::abi::*;
use glapi_common::config::DispatchConfig;
use glapi_common::directory::{Directory, ProcDirectory};
use glapi_common::entries::ENTRIES;
use glapi_common::error::RemapError;
use glapi_common::remap::{RemapTable, ResolveReport};
use glapi_common::table::Table;

// ============================================================
// Errors
// ============================================================

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("library not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to load '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    #[error("{symbol} not found in '{path}': {source}")]
    MissingSymbol {
        path: PathBuf,
        symbol: String,
        #[source]
        source: libloading::Error,
    },

    #[error("'{path}' has dispatch ABI version {found} (expected {expected})")]
    AbiMismatch {
        path: PathBuf,
        found: i32,
        expected: i32,
    },

    #[error(transparent)]
    Remap(#[from] RemapError),
}

fn symbol_name(sym: &[u8]) -> String {
    String::from_utf8_lossy(sym.strip_suffix(b"\0").unwrap_or(sym)).into_owned()
}

/// Compare a producer's reported ABI version against ours.
pub fn check_abi_version(path: &Path, found: i32) -> Result<(), LoaderError> {
    if found != GLAPI_ABI_VERSION {
        return Err(LoaderError::AbiMismatch {
            path: path.to_path_buf(),
            found,
            expected: GLAPI_ABI_VERSION,
        });
    }
    Ok(())
}

// ============================================================
// LibraryDirectory — the queried directory transport
// ============================================================

/// A producer's directory, answered by calling its exported functions.
///
/// Holds raw function pointers into the library, so it is only handed out
/// by reference from the `ProducerLibrary` that keeps the library loaded.
pub struct LibraryDirectory {
    get_proc_offset: GetProcOffsetFn,
    get_proc_name: GetProcNameFn,
    get_table_size: GetDispatchTableSizeFn,
}

impl LibraryDirectory {
    pub(crate) fn from_fns(
        get_proc_offset: GetProcOffsetFn,
        get_proc_name: GetProcNameFn,
        get_table_size: GetDispatchTableSizeFn,
    ) -> Self {
        LibraryDirectory {
            get_proc_offset,
            get_proc_name,
            get_table_size,
        }
    }
}

impl ProcDirectory for LibraryDirectory {
    fn proc_offset(&self, name: &str) -> Offset {
        let Ok(exported) = CString::new(format!("{}{}", API_PREFIX, name)) else {
            return Offset::SENTINEL;
        };
        Offset::from_raw(unsafe { (self.get_proc_offset)(exported.as_ptr()) })
    }

    fn proc_name(&self, offset: Offset) -> Option<String> {
        let slot = offset.index()?;
        let ptr = unsafe { (self.get_proc_name)(slot as u32) };
        if ptr.is_null() {
            return None;
        }
        let exported = unsafe { CStr::from_ptr(ptr) }.to_str().ok()?;
        strip_api_prefix(exported).map(str::to_string)
    }

    fn table_size(&self) -> usize {
        unsafe { (self.get_table_size)() as usize }
    }
}

// ============================================================
// ProducerLibrary
// ============================================================

/// A loaded GL implementation library.
pub struct ProducerLibrary {
    directory: Option<LibraryDirectory>,
    path: PathBuf,
    /// Must outlive every pointer taken from it.
    library: Library,
}

impl ProducerLibrary {
    /// Load the library at `path` and bind its directory if it exports one.
    ///
    /// # Safety
    /// Loading runs the library's initialisers. The caller is responsible
    /// for `path` naming a GL implementation.
    ///
    /// # Errors
    /// - the file does not exist or cannot be loaded
    /// - the library reports a different dispatch ABI version
    /// - it exports the ABI version but not the rest of the directory
    pub unsafe fn load(path: impl AsRef<Path>) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoaderError::NotFound(path.to_path_buf()));
        }

        let library = Library::new(path).map_err(|source| LoaderError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let directory = Self::bind_directory(&library, path)?;
        match &directory {
            Some(dir) => info!(
                "Loaded {} (dispatch ABI {}, table size {})",
                path.display(),
                GLAPI_ABI_VERSION,
                dir.table_size()
            ),
            None => info!("Loaded {} (no dispatch directory)", path.display()),
        }

        Ok(ProducerLibrary {
            directory,
            path: path.to_path_buf(),
            library,
        })
    }

    unsafe fn bind_directory(
        library: &Library,
        path: &Path,
    ) -> Result<Option<LibraryDirectory>, LoaderError> {
        let get_abi_version: Symbol<GetAbiVersionFn> = match library.get(SYM_GET_ABI_VERSION) {
            Ok(sym) => sym,
            Err(e) => {
                debug!("{}: no {}: {}", path.display(), symbol_name(SYM_GET_ABI_VERSION), e);
                return Ok(None);
            }
        };
        check_abi_version(path, get_abi_version())?;

        let missing = |sym: &[u8], source| LoaderError::MissingSymbol {
            path: path.to_path_buf(),
            symbol: symbol_name(sym),
            source,
        };
        let get_proc_offset: Symbol<GetProcOffsetFn> = library
            .get(SYM_GET_PROC_OFFSET)
            .map_err(|e| missing(SYM_GET_PROC_OFFSET, e))?;
        let get_proc_name: Symbol<GetProcNameFn> = library
            .get(SYM_GET_PROC_NAME)
            .map_err(|e| missing(SYM_GET_PROC_NAME, e))?;
        let get_table_size: Symbol<GetDispatchTableSizeFn> = library
            .get(SYM_GET_DISPATCH_TABLE_SIZE)
            .map_err(|e| missing(SYM_GET_DISPATCH_TABLE_SIZE, e))?;

        Ok(Some(LibraryDirectory::from_fns(
            *get_proc_offset,
            *get_proc_name,
            *get_table_size,
        )))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    /// The library's exported directory, if it has one.
    pub fn directory(&self) -> Option<&LibraryDirectory> {
        self.directory.as_ref()
    }

    /// Resolve a RemapTable for the shipped entries against this library's
    /// directory, or against the compiled-in layout when it exports none.
    pub fn resolve_remap(
        &self,
        config: &DispatchConfig,
    ) -> Result<(Arc<RemapTable>, ResolveReport), LoaderError> {
        let mut remap = RemapTable::for_entries();
        let report = match &self.directory {
            Some(dir) => remap.resolve(dir, ENTRIES)?,
            None => remap.resolve(&Directory::from_config(config), ENTRIES)?,
        };
        report.log(config.debug);
        Ok((Arc::new(remap), report))
    }

    /// An empty table sized for this library's layout.
    pub fn create_table(&self, config: &DispatchConfig) -> Table {
        match &self.directory {
            Some(dir) => Table::with_size(dir.table_size()),
            None => Table::with_size(config.table_size()),
        }
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::raw::{c_char, c_int, c_uint};

    static NAMES: [&[u8]; 3] = [b"glNewList\0", b"glEndList\0", b"glFooEXT\0"];

    unsafe extern "C" fn fake_offset(name: *const c_char) -> c_int {
        let name = CStr::from_ptr(name).to_bytes_with_nul();
        NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| if i == 2 { 900 } else { i as c_int })
            .unwrap_or(-1)
    }

    unsafe extern "C" fn fake_name(offset: c_uint) -> *const c_char {
        match offset {
            0 | 1 => NAMES[offset as usize].as_ptr() as *const c_char,
            900 => NAMES[2].as_ptr() as *const c_char,
            _ => std::ptr::null(),
        }
    }

    unsafe extern "C" fn fake_size() -> c_uint {
        1000
    }

    fn fake_directory() -> LibraryDirectory {
        LibraryDirectory::from_fns(fake_offset, fake_name, fake_size)
    }

    #[test]
    fn test_queried_directory_adds_and_strips_prefix() {
        let dir = fake_directory();
        assert_eq!(dir.proc_offset("NewList").raw(), 0);
        assert_eq!(dir.proc_offset("FooEXT").raw(), 900);
        assert!(dir.proc_offset("Missing").is_sentinel());
        assert_eq!(dir.proc_name(Offset::from_slot(900)).as_deref(), Some("FooEXT"));
        assert_eq!(dir.proc_name(Offset::from_slot(5)), None);
        assert_eq!(dir.proc_name(Offset::SENTINEL), None);
        assert_eq!(dir.table_size(), 1000);
    }

    #[test]
    fn test_queried_directory_rejects_interior_nul() {
        assert!(fake_directory().proc_offset("New\0List").is_sentinel());
    }

    #[test]
    fn test_queried_directory_feeds_remap_resolution() {
        let dir = fake_directory();
        let mut remap = RemapTable::for_entries();
        let report = remap.resolve(&dir, ENTRIES).expect("resolve");
        assert_eq!(report.resolved, 0, "the fake producer knows no remapped entries");
        assert!(remap.is_resolved());
    }

    #[test]
    fn test_abi_version_check() {
        let p = Path::new("libGL.so");
        assert!(check_abi_version(p, GLAPI_ABI_VERSION).is_ok());
        let err = check_abi_version(p, GLAPI_ABI_VERSION + 1).unwrap_err();
        assert!(matches!(err, LoaderError::AbiMismatch { found, .. } if found == GLAPI_ABI_VERSION + 1));
        assert!(err.to_string().contains("expected 1"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = unsafe { ProducerLibrary::load("/nonexistent/libGL.so.1") }.err();
        assert!(matches!(err, Some(LoaderError::NotFound(_))), "got {:?}", err);
    }

    #[test]
    fn test_load_non_library_file() {
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let err = unsafe { ProducerLibrary::load(&manifest) }.err();
        assert!(matches!(err, Some(LoaderError::Open { .. })), "got {:?}", err);
    }

    #[test]
    fn test_symbol_name_strips_nul() {
        assert_eq!(symbol_name(SYM_GET_PROC_OFFSET), "_glapi_get_proc_offset");
    }
}
