// types.rs — GL scalar type aliases used in entry-point signatures
//
// Layouts match the C typedefs of the platform GL headers on LP64/LLP64
// targets. GLhandleARB is the non-Apple `unsigned int` variant.

#![allow(non_camel_case_types)]

use std::os::raw::{c_char, c_void};

pub type GLenum = u32;
pub type GLboolean = u8;
pub type GLbitfield = u32;
pub type GLvoid = c_void;
pub type GLbyte = i8;
pub type GLshort = i16;
pub type GLint = i32;
pub type GLubyte = u8;
pub type GLushort = u16;
pub type GLuint = u32;
pub type GLsizei = i32;
pub type GLfloat = f32;
pub type GLclampf = f32;
pub type GLdouble = f64;
pub type GLclampd = f64;

pub type GLchar = c_char;
pub type GLcharARB = c_char;
pub type GLhandleARB = u32;

pub type GLintptr = isize;
pub type GLsizeiptr = isize;
pub type GLintptrARB = isize;
pub type GLsizeiptrARB = isize;

pub type GLint64 = i64;
pub type GLuint64 = u64;
pub type GLint64EXT = i64;
pub type GLuint64EXT = u64;

/// Opaque fence object (`struct __GLsync *`).
pub type GLsync = *mut c_void;

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_scalar_sizes_match_c() {
        assert_eq!(size_of::<GLenum>(), 4);
        assert_eq!(size_of::<GLboolean>(), 1);
        assert_eq!(size_of::<GLsizei>(), 4);
        assert_eq!(size_of::<GLdouble>(), 8);
        assert_eq!(size_of::<GLint64EXT>(), 8);
    }

    #[test]
    fn test_pointer_sized_types() {
        let ptr = size_of::<*const ()>();
        assert_eq!(size_of::<GLintptr>(), ptr, "GLintptr must be pointer-sized");
        assert_eq!(size_of::<GLsizeiptrARB>(), ptr, "GLsizeiptrARB must be pointer-sized");
        assert_eq!(size_of::<GLsync>(), ptr);
    }
}
