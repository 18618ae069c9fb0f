// entry.rs — Entry-point descriptors and the typed entry machinery
//
// Every dispatch slot is described once, by a line in a `dispatch_entries!`
// block. The macro emits a zero-sized marker type per entry (carrying the
// descriptor and the Rust function-pointer type) and a const slice of all
// descriptors, so the typed accessors and the data-driven paths (remap
// resolution, table population) read the same source.

use crate::abi::{Offset, Proc, RemapIndex, API_PREFIX};

// ============================================================
// Descriptor
// ============================================================

/// Static description of one entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryDescriptor {
    /// Name without the API prefix (`NewList`).
    pub name: &'static str,
    /// Slot in the static layout this crate was generated against.
    pub fixed_offset: Option<Offset>,
    /// Position in a RemapTable, for entries outside the frozen core ABI.
    pub remap_index: Option<RemapIndex>,
    /// Parameter signature: one of `i`, `f`, `d`, `p` per parameter.
    pub signature: &'static str,
}

impl EntryDescriptor {
    pub fn is_remapped(&self) -> bool {
        self.remap_index.is_some()
    }

    /// Exported symbol name (`glNewList`).
    pub fn exported_name(&self) -> String {
        format!("{}{}", API_PREFIX, self.name)
    }
}

/// Look up a descriptor by bare name.
pub fn find_entry<'a>(entries: &'a [EntryDescriptor], name: &str) -> Option<&'a EntryDescriptor> {
    entries.iter().find(|d| d.name == name)
}

/// Compile-time layout check for a generated descriptor set: fixed offsets
/// must equal positions `0..static_count`, and remap indices must enumerate
/// `0..remap_count` in slot order.
pub const fn layout_is_dense(
    entries: &[EntryDescriptor],
    static_count: usize,
    remap_count: usize,
) -> bool {
    if entries.len() != static_count {
        return false;
    }
    let mut i = 0;
    let mut next_remap = 0;
    while i < entries.len() {
        match entries[i].fixed_offset {
            Some(offset) => {
                if offset.raw() != i as i32 {
                    return false;
                }
            }
            None => return false,
        }
        if let Some(remap) = entries[i].remap_index {
            if remap.get() != next_remap {
                return false;
            }
            next_remap += 1;
        }
        i += 1;
    }
    next_remap == remap_count
}

// ============================================================
// Typed entries
// ============================================================

/// A marker type naming one entry point.
pub trait Entry {
    const DESCRIPTOR: EntryDescriptor;

    /// The entry's C function-pointer type.
    type Pointer: EntryFn;
}

/// Conversion between a typed entry-point pointer and an untyped slot, and
/// invocation with a tuple of arguments.
///
/// This is the only place slot contents change type.
pub trait EntryFn: Copy {
    type Args;
    type Output;

    /// # Safety
    /// `proc` must have been produced from a function of this exact type.
    unsafe fn from_proc(proc: Proc) -> Self;

    fn into_proc(self) -> Proc;

    /// # Safety
    /// Calls foreign code; the arguments must satisfy the entry's contract.
    unsafe fn invoke(self, args: Self::Args) -> Self::Output;
}

macro_rules! impl_entry_fn {
    ($($arg:ident),*) => {
        impl<R, $($arg),*> EntryFn for unsafe extern "C" fn($($arg),*) -> R {
            type Args = ($($arg,)*);
            type Output = R;

            #[inline]
            unsafe fn from_proc(proc: Proc) -> Self {
                std::mem::transmute_copy::<Proc, Self>(&proc)
            }

            #[inline]
            fn into_proc(self) -> Proc {
                // SAFETY: every function pointer has the same size and
                // representation; only the call signature differs.
                unsafe { std::mem::transmute_copy::<Self, Proc>(&self) }
            }

            #[inline]
            #[allow(non_snake_case, clippy::unused_unit)]
            unsafe fn invoke(self, args: Self::Args) -> R {
                let ($($arg,)*) = args;
                (self)($($arg),*)
            }
        }
    };
}

impl_entry_fn!();
impl_entry_fn!(A1);
impl_entry_fn!(A1, A2);
impl_entry_fn!(A1, A2, A3);
impl_entry_fn!(A1, A2, A3, A4);
impl_entry_fn!(A1, A2, A3, A4, A5);
impl_entry_fn!(A1, A2, A3, A4, A5, A6);
impl_entry_fn!(A1, A2, A3, A4, A5, A6, A7);
impl_entry_fn!(A1, A2, A3, A4, A5, A6, A7, A8);
impl_entry_fn!(A1, A2, A3, A4, A5, A6, A7, A8, A9);
impl_entry_fn!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10);
impl_entry_fn!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11);
impl_entry_fn!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12);
impl_entry_fn!(A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11, A12, A13);

// ============================================================
// Descriptor-table macro
// ============================================================

/// Declare a set of entry points.
///
/// ```ignore
/// dispatch_entries! {
///     pub const ENTRIES;
///     NewList = 0 => fn(list: GLuint, mode: GLenum), "ii";
///     AttachShader = 408 @ 0 => fn(program: GLuint, shader: GLuint), "ii";
/// }
/// ```
///
/// `= offset` is the entry's fixed slot, `@ index` its remap index.
#[macro_export]
macro_rules! dispatch_entries {
    (@remap) => { None };
    (@remap $remap:literal) => { Some($crate::abi::RemapIndex::new($remap)) };
    (
        $vis:vis const $list:ident;
        $(
            $name:ident = $offset:literal $(@ $remap:literal)?
                => fn($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?, $sig:literal;
        )*
    ) => {
        $(
            #[derive(Debug, Clone, Copy)]
            $vis struct $name;

            impl $crate::entry::Entry for $name {
                const DESCRIPTOR: $crate::entry::EntryDescriptor = $crate::entry::EntryDescriptor {
                    name: stringify!($name),
                    fixed_offset: Some($crate::abi::Offset::from_slot($offset)),
                    remap_index: $crate::dispatch_entries!(@remap $($remap)?),
                    signature: $sig,
                };
                type Pointer = unsafe extern "C" fn($($arg: $ty),*) $(-> $ret)?;
            }
        )*

        $vis const $list: &[$crate::entry::EntryDescriptor] = &[
            $(<$name as $crate::entry::Entry>::DESCRIPTOR),*
        ];
    };
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::*;

    mod sample {
        use crate::types::*;

        crate::dispatch_entries! {
            pub const SAMPLE;
            Clear = 0 => fn(mask: GLbitfield), "i";
            GetError = 1 => fn() -> GLenum, "";
            Ortho = 2 => fn(l: GLdouble, r: GLdouble, b: GLdouble, t: GLdouble, n: GLdouble, f: GLdouble), "dddddd";
            BlendEquationSeparate = 3 @ 0 => fn(rgb: GLenum, alpha: GLenum), "ii";
            GetAttribLocation = 4 @ 1 => fn(program: GLuint, name: *const GLchar) -> GLint, "ip";
        }
    }

    unsafe extern "C" fn get_error() -> GLenum {
        0x0502
    }

    thread_local! {
        static ORTHO_SUM: std::cell::Cell<f64> = const { std::cell::Cell::new(0.0) };
    }

    unsafe extern "C" fn ortho_sum(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        ORTHO_SUM.with(|s| s.set(a + b + c + d + e + f));
    }

    #[test]
    fn test_macro_descriptors_in_declaration_order() {
        let names: Vec<_> = sample::SAMPLE.iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            ["Clear", "GetError", "Ortho", "BlendEquationSeparate", "GetAttribLocation"]
        );
        assert!(layout_is_dense(sample::SAMPLE, 5, 2));
    }

    #[test]
    fn test_macro_remap_index_optional() {
        assert_eq!(sample::Clear::DESCRIPTOR.remap_index, None);
        assert_eq!(
            sample::GetAttribLocation::DESCRIPTOR.remap_index,
            Some(RemapIndex::new(1))
        );
        assert!(sample::BlendEquationSeparate::DESCRIPTOR.is_remapped());
        assert_eq!(sample::Ortho::DESCRIPTOR.signature, "dddddd");
    }

    #[test]
    fn test_layout_rejects_gaps_and_out_of_order_remap() {
        let mut entries = sample::SAMPLE.to_vec();
        assert!(!layout_is_dense(&entries, 4, 2), "wrong count must fail");

        entries[2].fixed_offset = Some(Offset::from_slot(7));
        assert!(!layout_is_dense(&entries, 5, 2), "offset gap must fail");

        let mut entries = sample::SAMPLE.to_vec();
        entries[3].remap_index = Some(RemapIndex::new(1));
        entries[4].remap_index = Some(RemapIndex::new(0));
        assert!(!layout_is_dense(&entries, 5, 2), "remap order must follow slot order");

        let mut entries = sample::SAMPLE.to_vec();
        entries[1].fixed_offset = None;
        assert!(!layout_is_dense(&entries, 5, 2), "missing fixed offset must fail");
    }

    #[test]
    fn test_entry_fn_proc_conversion_preserves_address() {
        let f: <sample::GetError as Entry>::Pointer = get_error;
        let proc = f.into_proc();
        assert_eq!(proc as usize, f as usize);
        let back: <sample::GetError as Entry>::Pointer = unsafe { EntryFn::from_proc(proc) };
        assert_eq!(unsafe { back.invoke(()) }, 0x0502);
    }

    #[test]
    fn test_entry_fn_invoke_six_args() {
        let f: <sample::Ortho as Entry>::Pointer = ortho_sum;
        unsafe { f.invoke((1.0, 2.0, 3.0, 4.0, 5.0, 6.0)) };
        assert_eq!(ORTHO_SUM.with(|s| s.get()), 21.0, "all six arguments must arrive in order");
    }

    #[test]
    fn test_exported_name_and_find() {
        let d = find_entry(sample::SAMPLE, "Ortho").expect("Ortho declared");
        assert_eq!(d.exported_name(), "glOrtho");
        assert!(find_entry(sample::SAMPLE, "glOrtho").is_none());
    }
}
