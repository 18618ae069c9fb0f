// entries.rs — Entry-point descriptor table
//
// One line per dispatch slot, in slot order. Slots below FIRST_REMAPPED_OFFSET
// belong to the frozen core ABI; everything after carries a remap index and is
// reached through a RemapTable when the crate is built with the `remap` feature.
//
// Line format: Name = offset [@ remap_index] => fn(params) [-> ret], "signature";

#![allow(non_snake_case)]

use crate::types::*;

/// Number of slots with a fixed offset in the static layout.
pub const STATIC_ENTRY_COUNT: usize = 870;

/// First slot that is reached through the remap table in remap builds.
pub const FIRST_REMAPPED_OFFSET: usize = 408;

/// Number of entries in a RemapTable built for this descriptor set.
pub const REMAP_TABLE_SIZE: usize = 462;

crate::dispatch_entries! {
    pub const ENTRIES;

    NewList = 0 => fn(list: GLuint, mode: GLenum), "ii";
    EndList = 1 => fn(), "";
    CallList = 2 => fn(list: GLuint), "i";
    CallLists = 3 => fn(n: GLsizei, type_: GLenum, lists: *const GLvoid), "iip";
    DeleteLists = 4 => fn(list: GLuint, range: GLsizei), "ii";
    GenLists = 5 => fn(range: GLsizei) -> GLuint, "i";
    ListBase = 6 => fn(base: GLuint), "i";
    Begin = 7 => fn(mode: GLenum), "i";
    Bitmap = 8 => fn(width: GLsizei, height: GLsizei, xorig: GLfloat, yorig: GLfloat, xmove: GLfloat, ymove: GLfloat, bitmap: *const GLubyte), "iiffffp";
    Color3b = 9 => fn(red: GLbyte, green: GLbyte, blue: GLbyte), "iii";
    Color3bv = 10 => fn(v: *const GLbyte), "p";
    Color3d = 11 => fn(red: GLdouble, green: GLdouble, blue: GLdouble), "ddd";
    Color3dv = 12 => fn(v: *const GLdouble), "p";
    Color3f = 13 => fn(red: GLfloat, green: GLfloat, blue: GLfloat), "fff";
    Color3fv = 14 => fn(v: *const GLfloat), "p";
    Color3i = 15 => fn(red: GLint, green: GLint, blue: GLint), "iii";
    Color3iv = 16 => fn(v: *const GLint), "p";
    Color3s = 17 => fn(red: GLshort, green: GLshort, blue: GLshort), "iii";
    Color3sv = 18 => fn(v: *const GLshort), "p";
    Color3ub = 19 => fn(red: GLubyte, green: GLubyte, blue: GLubyte), "iii";
    Color3ubv = 20 => fn(v: *const GLubyte), "p";
    Color3ui = 21 => fn(red: GLuint, green: GLuint, blue: GLuint), "iii";
    Color3uiv = 22 => fn(v: *const GLuint), "p";
    Color3us = 23 => fn(red: GLushort, green: GLushort, blue: GLushort), "iii";
    Color3usv = 24 => fn(v: *const GLushort), "p";
    Color4b = 25 => fn(red: GLbyte, green: GLbyte, blue: GLbyte, alpha: GLbyte), "iiii";
    Color4bv = 26 => fn(v: *const GLbyte), "p";
    Color4d = 27 => fn(red: GLdouble, green: GLdouble, blue: GLdouble, alpha: GLdouble), "dddd";
    Color4dv = 28 => fn(v: *const GLdouble), "p";
    Color4f = 29 => fn(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat), "ffff";
    Color4fv = 30 => fn(v: *const GLfloat), "p";
    Color4i = 31 => fn(red: GLint, green: GLint, blue: GLint, alpha: GLint), "iiii";
    Color4iv = 32 => fn(v: *const GLint), "p";
    Color4s = 33 => fn(red: GLshort, green: GLshort, blue: GLshort, alpha: GLshort), "iiii";
    Color4sv = 34 => fn(v: *const GLshort), "p";
    Color4ub = 35 => fn(red: GLubyte, green: GLubyte, blue: GLubyte, alpha: GLubyte), "iiii";
    Color4ubv = 36 => fn(v: *const GLubyte), "p";
    Color4ui = 37 => fn(red: GLuint, green: GLuint, blue: GLuint, alpha: GLuint), "iiii";
    Color4uiv = 38 => fn(v: *const GLuint), "p";
    Color4us = 39 => fn(red: GLushort, green: GLushort, blue: GLushort, alpha: GLushort), "iiii";
    Color4usv = 40 => fn(v: *const GLushort), "p";
    EdgeFlag = 41 => fn(flag: GLboolean), "i";
    EdgeFlagv = 42 => fn(flag: *const GLboolean), "p";
    End = 43 => fn(), "";
    Indexd = 44 => fn(c: GLdouble), "d";
    Indexdv = 45 => fn(c: *const GLdouble), "p";
    Indexf = 46 => fn(c: GLfloat), "f";
    Indexfv = 47 => fn(c: *const GLfloat), "p";
    Indexi = 48 => fn(c: GLint), "i";
    Indexiv = 49 => fn(c: *const GLint), "p";
    Indexs = 50 => fn(c: GLshort), "i";
    Indexsv = 51 => fn(c: *const GLshort), "p";
    Normal3b = 52 => fn(nx: GLbyte, ny: GLbyte, nz: GLbyte), "iii";
    Normal3bv = 53 => fn(v: *const GLbyte), "p";
    Normal3d = 54 => fn(nx: GLdouble, ny: GLdouble, nz: GLdouble), "ddd";
    Normal3dv = 55 => fn(v: *const GLdouble), "p";
    Normal3f = 56 => fn(nx: GLfloat, ny: GLfloat, nz: GLfloat), "fff";
    Normal3fv = 57 => fn(v: *const GLfloat), "p";
    Normal3i = 58 => fn(nx: GLint, ny: GLint, nz: GLint), "iii";
    Normal3iv = 59 => fn(v: *const GLint), "p";
    Normal3s = 60 => fn(nx: GLshort, ny: GLshort, nz: GLshort), "iii";
    Normal3sv = 61 => fn(v: *const GLshort), "p";
    RasterPos2d = 62 => fn(x: GLdouble, y: GLdouble), "dd";
    RasterPos2dv = 63 => fn(v: *const GLdouble), "p";
    RasterPos2f = 64 => fn(x: GLfloat, y: GLfloat), "ff";
    RasterPos2fv = 65 => fn(v: *const GLfloat), "p";
    RasterPos2i = 66 => fn(x: GLint, y: GLint), "ii";
    RasterPos2iv = 67 => fn(v: *const GLint), "p";
    RasterPos2s = 68 => fn(x: GLshort, y: GLshort), "ii";
    RasterPos2sv = 69 => fn(v: *const GLshort), "p";
    RasterPos3d = 70 => fn(x: GLdouble, y: GLdouble, z: GLdouble), "ddd";
    RasterPos3dv = 71 => fn(v: *const GLdouble), "p";
    RasterPos3f = 72 => fn(x: GLfloat, y: GLfloat, z: GLfloat), "fff";
    RasterPos3fv = 73 => fn(v: *const GLfloat), "p";
    RasterPos3i = 74 => fn(x: GLint, y: GLint, z: GLint), "iii";
    RasterPos3iv = 75 => fn(v: *const GLint), "p";
    RasterPos3s = 76 => fn(x: GLshort, y: GLshort, z: GLshort), "iii";
    RasterPos3sv = 77 => fn(v: *const GLshort), "p";
    RasterPos4d = 78 => fn(x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble), "dddd";
    RasterPos4dv = 79 => fn(v: *const GLdouble), "p";
    RasterPos4f = 80 => fn(x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat), "ffff";
    RasterPos4fv = 81 => fn(v: *const GLfloat), "p";
    RasterPos4i = 82 => fn(x: GLint, y: GLint, z: GLint, w: GLint), "iiii";
    RasterPos4iv = 83 => fn(v: *const GLint), "p";
    RasterPos4s = 84 => fn(x: GLshort, y: GLshort, z: GLshort, w: GLshort), "iiii";
    RasterPos4sv = 85 => fn(v: *const GLshort), "p";
    Rectd = 86 => fn(x1: GLdouble, y1: GLdouble, x2: GLdouble, y2: GLdouble), "dddd";
    Rectdv = 87 => fn(v1: *const GLdouble, v2: *const GLdouble), "pp";
    Rectf = 88 => fn(x1: GLfloat, y1: GLfloat, x2: GLfloat, y2: GLfloat), "ffff";
    Rectfv = 89 => fn(v1: *const GLfloat, v2: *const GLfloat), "pp";
    Recti = 90 => fn(x1: GLint, y1: GLint, x2: GLint, y2: GLint), "iiii";
    Rectiv = 91 => fn(v1: *const GLint, v2: *const GLint), "pp";
    Rects = 92 => fn(x1: GLshort, y1: GLshort, x2: GLshort, y2: GLshort), "iiii";
    Rectsv = 93 => fn(v1: *const GLshort, v2: *const GLshort), "pp";
    TexCoord1d = 94 => fn(s: GLdouble), "d";
    TexCoord1dv = 95 => fn(v: *const GLdouble), "p";
    TexCoord1f = 96 => fn(s: GLfloat), "f";
    TexCoord1fv = 97 => fn(v: *const GLfloat), "p";
    TexCoord1i = 98 => fn(s: GLint), "i";
    TexCoord1iv = 99 => fn(v: *const GLint), "p";
    TexCoord1s = 100 => fn(s: GLshort), "i";
    TexCoord1sv = 101 => fn(v: *const GLshort), "p";
    TexCoord2d = 102 => fn(s: GLdouble, t: GLdouble), "dd";
    TexCoord2dv = 103 => fn(v: *const GLdouble), "p";
    TexCoord2f = 104 => fn(s: GLfloat, t: GLfloat), "ff";
    TexCoord2fv = 105 => fn(v: *const GLfloat), "p";
    TexCoord2i = 106 => fn(s: GLint, t: GLint), "ii";
    TexCoord2iv = 107 => fn(v: *const GLint), "p";
    TexCoord2s = 108 => fn(s: GLshort, t: GLshort), "ii";
    TexCoord2sv = 109 => fn(v: *const GLshort), "p";
    TexCoord3d = 110 => fn(s: GLdouble, t: GLdouble, r: GLdouble), "ddd";
    TexCoord3dv = 111 => fn(v: *const GLdouble), "p";
    TexCoord3f = 112 => fn(s: GLfloat, t: GLfloat, r: GLfloat), "fff";
    TexCoord3fv = 113 => fn(v: *const GLfloat), "p";
    TexCoord3i = 114 => fn(s: GLint, t: GLint, r: GLint), "iii";
    TexCoord3iv = 115 => fn(v: *const GLint), "p";
    TexCoord3s = 116 => fn(s: GLshort, t: GLshort, r: GLshort), "iii";
    TexCoord3sv = 117 => fn(v: *const GLshort), "p";
    TexCoord4d = 118 => fn(s: GLdouble, t: GLdouble, r: GLdouble, q: GLdouble), "dddd";
    TexCoord4dv = 119 => fn(v: *const GLdouble), "p";
    TexCoord4f = 120 => fn(s: GLfloat, t: GLfloat, r: GLfloat, q: GLfloat), "ffff";
    TexCoord4fv = 121 => fn(v: *const GLfloat), "p";
    TexCoord4i = 122 => fn(s: GLint, t: GLint, r: GLint, q: GLint), "iiii";
    TexCoord4iv = 123 => fn(v: *const GLint), "p";
    TexCoord4s = 124 => fn(s: GLshort, t: GLshort, r: GLshort, q: GLshort), "iiii";
    TexCoord4sv = 125 => fn(v: *const GLshort), "p";
    Vertex2d = 126 => fn(x: GLdouble, y: GLdouble), "dd";
    Vertex2dv = 127 => fn(v: *const GLdouble), "p";
    Vertex2f = 128 => fn(x: GLfloat, y: GLfloat), "ff";
    Vertex2fv = 129 => fn(v: *const GLfloat), "p";
    Vertex2i = 130 => fn(x: GLint, y: GLint), "ii";
    Vertex2iv = 131 => fn(v: *const GLint), "p";
    Vertex2s = 132 => fn(x: GLshort, y: GLshort), "ii";
    Vertex2sv = 133 => fn(v: *const GLshort), "p";
    Vertex3d = 134 => fn(x: GLdouble, y: GLdouble, z: GLdouble), "ddd";
    Vertex3dv = 135 => fn(v: *const GLdouble), "p";
    Vertex3f = 136 => fn(x: GLfloat, y: GLfloat, z: GLfloat), "fff";
    Vertex3fv = 137 => fn(v: *const GLfloat), "p";
    Vertex3i = 138 => fn(x: GLint, y: GLint, z: GLint), "iii";
    Vertex3iv = 139 => fn(v: *const GLint), "p";
    Vertex3s = 140 => fn(x: GLshort, y: GLshort, z: GLshort), "iii";
    Vertex3sv = 141 => fn(v: *const GLshort), "p";
    Vertex4d = 142 => fn(x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble), "dddd";
    Vertex4dv = 143 => fn(v: *const GLdouble), "p";
    Vertex4f = 144 => fn(x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat), "ffff";
    Vertex4fv = 145 => fn(v: *const GLfloat), "p";
    Vertex4i = 146 => fn(x: GLint, y: GLint, z: GLint, w: GLint), "iiii";
    Vertex4iv = 147 => fn(v: *const GLint), "p";
    Vertex4s = 148 => fn(x: GLshort, y: GLshort, z: GLshort, w: GLshort), "iiii";
    Vertex4sv = 149 => fn(v: *const GLshort), "p";
    ClipPlane = 150 => fn(plane: GLenum, equation: *const GLdouble), "ip";
    ColorMaterial = 151 => fn(face: GLenum, mode: GLenum), "ii";
    CullFace = 152 => fn(mode: GLenum), "i";
    Fogf = 153 => fn(pname: GLenum, param: GLfloat), "if";
    Fogfv = 154 => fn(pname: GLenum, params: *const GLfloat), "ip";
    Fogi = 155 => fn(pname: GLenum, param: GLint), "ii";
    Fogiv = 156 => fn(pname: GLenum, params: *const GLint), "ip";
    FrontFace = 157 => fn(mode: GLenum), "i";
    Hint = 158 => fn(target: GLenum, mode: GLenum), "ii";
    Lightf = 159 => fn(light: GLenum, pname: GLenum, param: GLfloat), "iif";
    Lightfv = 160 => fn(light: GLenum, pname: GLenum, params: *const GLfloat), "iip";
    Lighti = 161 => fn(light: GLenum, pname: GLenum, param: GLint), "iii";
    Lightiv = 162 => fn(light: GLenum, pname: GLenum, params: *const GLint), "iip";
    LightModelf = 163 => fn(pname: GLenum, param: GLfloat), "if";
    LightModelfv = 164 => fn(pname: GLenum, params: *const GLfloat), "ip";
    LightModeli = 165 => fn(pname: GLenum, param: GLint), "ii";
    LightModeliv = 166 => fn(pname: GLenum, params: *const GLint), "ip";
    LineStipple = 167 => fn(factor: GLint, pattern: GLushort), "ii";
    LineWidth = 168 => fn(width: GLfloat), "f";
    Materialf = 169 => fn(face: GLenum, pname: GLenum, param: GLfloat), "iif";
    Materialfv = 170 => fn(face: GLenum, pname: GLenum, params: *const GLfloat), "iip";
    Materiali = 171 => fn(face: GLenum, pname: GLenum, param: GLint), "iii";
    Materialiv = 172 => fn(face: GLenum, pname: GLenum, params: *const GLint), "iip";
    PointSize = 173 => fn(size: GLfloat), "f";
    PolygonMode = 174 => fn(face: GLenum, mode: GLenum), "ii";
    PolygonStipple = 175 => fn(mask: *const GLubyte), "p";
    Scissor = 176 => fn(x: GLint, y: GLint, width: GLsizei, height: GLsizei), "iiii";
    ShadeModel = 177 => fn(mode: GLenum), "i";
    TexParameterf = 178 => fn(target: GLenum, pname: GLenum, param: GLfloat), "iif";
    TexParameterfv = 179 => fn(target: GLenum, pname: GLenum, params: *const GLfloat), "iip";
    TexParameteri = 180 => fn(target: GLenum, pname: GLenum, param: GLint), "iii";
    TexParameteriv = 181 => fn(target: GLenum, pname: GLenum, params: *const GLint), "iip";
    TexImage1D = 182 => fn(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const GLvoid), "iiiiiiip";
    TexImage2D = 183 => fn(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, height: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const GLvoid), "iiiiiiiip";
    TexEnvf = 184 => fn(target: GLenum, pname: GLenum, param: GLfloat), "iif";
    TexEnvfv = 185 => fn(target: GLenum, pname: GLenum, params: *const GLfloat), "iip";
    TexEnvi = 186 => fn(target: GLenum, pname: GLenum, param: GLint), "iii";
    TexEnviv = 187 => fn(target: GLenum, pname: GLenum, params: *const GLint), "iip";
    TexGend = 188 => fn(coord: GLenum, pname: GLenum, param: GLdouble), "iid";
    TexGendv = 189 => fn(coord: GLenum, pname: GLenum, params: *const GLdouble), "iip";
    TexGenf = 190 => fn(coord: GLenum, pname: GLenum, param: GLfloat), "iif";
    TexGenfv = 191 => fn(coord: GLenum, pname: GLenum, params: *const GLfloat), "iip";
    TexGeni = 192 => fn(coord: GLenum, pname: GLenum, param: GLint), "iii";
    TexGeniv = 193 => fn(coord: GLenum, pname: GLenum, params: *const GLint), "iip";
    FeedbackBuffer = 194 => fn(size: GLsizei, type_: GLenum, buffer: *mut GLfloat), "iip";
    SelectBuffer = 195 => fn(size: GLsizei, buffer: *mut GLuint), "ip";
    RenderMode = 196 => fn(mode: GLenum) -> GLint, "i";
    InitNames = 197 => fn(), "";
    LoadName = 198 => fn(name: GLuint), "i";
    PassThrough = 199 => fn(token: GLfloat), "f";
    PopName = 200 => fn(), "";
    PushName = 201 => fn(name: GLuint), "i";
    DrawBuffer = 202 => fn(mode: GLenum), "i";
    Clear = 203 => fn(mask: GLbitfield), "i";
    ClearAccum = 204 => fn(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat), "ffff";
    ClearIndex = 205 => fn(c: GLfloat), "f";
    ClearColor = 206 => fn(red: GLclampf, green: GLclampf, blue: GLclampf, alpha: GLclampf), "ffff";
    ClearStencil = 207 => fn(s: GLint), "i";
    ClearDepth = 208 => fn(depth: GLclampd), "d";
    StencilMask = 209 => fn(mask: GLuint), "i";
    ColorMask = 210 => fn(red: GLboolean, green: GLboolean, blue: GLboolean, alpha: GLboolean), "iiii";
    DepthMask = 211 => fn(flag: GLboolean), "i";
    IndexMask = 212 => fn(mask: GLuint), "i";
    Accum = 213 => fn(op: GLenum, value: GLfloat), "if";
    Disable = 214 => fn(cap: GLenum), "i";
    Enable = 215 => fn(cap: GLenum), "i";
    Finish = 216 => fn(), "";
    Flush = 217 => fn(), "";
    PopAttrib = 218 => fn(), "";
    PushAttrib = 219 => fn(mask: GLbitfield), "i";
    Map1d = 220 => fn(target: GLenum, u1: GLdouble, u2: GLdouble, stride: GLint, order: GLint, points: *const GLdouble), "iddiip";
    Map1f = 221 => fn(target: GLenum, u1: GLfloat, u2: GLfloat, stride: GLint, order: GLint, points: *const GLfloat), "iffiip";
    Map2d = 222 => fn(target: GLenum, u1: GLdouble, u2: GLdouble, ustride: GLint, uorder: GLint, v1: GLdouble, v2: GLdouble, vstride: GLint, vorder: GLint, points: *const GLdouble), "iddiiddiip";
    Map2f = 223 => fn(target: GLenum, u1: GLfloat, u2: GLfloat, ustride: GLint, uorder: GLint, v1: GLfloat, v2: GLfloat, vstride: GLint, vorder: GLint, points: *const GLfloat), "iffiiffiip";
    MapGrid1d = 224 => fn(un: GLint, u1: GLdouble, u2: GLdouble), "idd";
    MapGrid1f = 225 => fn(un: GLint, u1: GLfloat, u2: GLfloat), "iff";
    MapGrid2d = 226 => fn(un: GLint, u1: GLdouble, u2: GLdouble, vn: GLint, v1: GLdouble, v2: GLdouble), "iddidd";
    MapGrid2f = 227 => fn(un: GLint, u1: GLfloat, u2: GLfloat, vn: GLint, v1: GLfloat, v2: GLfloat), "iffiff";
    EvalCoord1d = 228 => fn(u: GLdouble), "d";
    EvalCoord1dv = 229 => fn(u: *const GLdouble), "p";
    EvalCoord1f = 230 => fn(u: GLfloat), "f";
    EvalCoord1fv = 231 => fn(u: *const GLfloat), "p";
    EvalCoord2d = 232 => fn(u: GLdouble, v: GLdouble), "dd";
    EvalCoord2dv = 233 => fn(u: *const GLdouble), "p";
    EvalCoord2f = 234 => fn(u: GLfloat, v: GLfloat), "ff";
    EvalCoord2fv = 235 => fn(u: *const GLfloat), "p";
    EvalMesh1 = 236 => fn(mode: GLenum, i1: GLint, i2: GLint), "iii";
    EvalPoint1 = 237 => fn(i: GLint), "i";
    EvalMesh2 = 238 => fn(mode: GLenum, i1: GLint, i2: GLint, j1: GLint, j2: GLint), "iiiii";
    EvalPoint2 = 239 => fn(i: GLint, j: GLint), "ii";
    AlphaFunc = 240 => fn(func: GLenum, ref_: GLclampf), "if";
    BlendFunc = 241 => fn(sfactor: GLenum, dfactor: GLenum), "ii";
    LogicOp = 242 => fn(opcode: GLenum), "i";
    StencilFunc = 243 => fn(func: GLenum, ref_: GLint, mask: GLuint), "iii";
    StencilOp = 244 => fn(fail: GLenum, zfail: GLenum, zpass: GLenum), "iii";
    DepthFunc = 245 => fn(func: GLenum), "i";
    PixelZoom = 246 => fn(xfactor: GLfloat, yfactor: GLfloat), "ff";
    PixelTransferf = 247 => fn(pname: GLenum, param: GLfloat), "if";
    PixelTransferi = 248 => fn(pname: GLenum, param: GLint), "ii";
    PixelStoref = 249 => fn(pname: GLenum, param: GLfloat), "if";
    PixelStorei = 250 => fn(pname: GLenum, param: GLint), "ii";
    PixelMapfv = 251 => fn(map: GLenum, mapsize: GLsizei, values: *const GLfloat), "iip";
    PixelMapuiv = 252 => fn(map: GLenum, mapsize: GLsizei, values: *const GLuint), "iip";
    PixelMapusv = 253 => fn(map: GLenum, mapsize: GLsizei, values: *const GLushort), "iip";
    ReadBuffer = 254 => fn(mode: GLenum), "i";
    CopyPixels = 255 => fn(x: GLint, y: GLint, width: GLsizei, height: GLsizei, type_: GLenum), "iiiii";
    ReadPixels = 256 => fn(x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *mut GLvoid), "iiiiiip";
    DrawPixels = 257 => fn(width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *const GLvoid), "iiiip";
    GetBooleanv = 258 => fn(pname: GLenum, params: *mut GLboolean), "ip";
    GetClipPlane = 259 => fn(plane: GLenum, equation: *mut GLdouble), "ip";
    GetDoublev = 260 => fn(pname: GLenum, params: *mut GLdouble), "ip";
    GetError = 261 => fn() -> GLenum, "";
    GetFloatv = 262 => fn(pname: GLenum, params: *mut GLfloat), "ip";
    GetIntegerv = 263 => fn(pname: GLenum, params: *mut GLint), "ip";
    GetLightfv = 264 => fn(light: GLenum, pname: GLenum, params: *mut GLfloat), "iip";
    GetLightiv = 265 => fn(light: GLenum, pname: GLenum, params: *mut GLint), "iip";
    GetMapdv = 266 => fn(target: GLenum, query: GLenum, v: *mut GLdouble), "iip";
    GetMapfv = 267 => fn(target: GLenum, query: GLenum, v: *mut GLfloat), "iip";
    GetMapiv = 268 => fn(target: GLenum, query: GLenum, v: *mut GLint), "iip";
    GetMaterialfv = 269 => fn(face: GLenum, pname: GLenum, params: *mut GLfloat), "iip";
    GetMaterialiv = 270 => fn(face: GLenum, pname: GLenum, params: *mut GLint), "iip";
    GetPixelMapfv = 271 => fn(map: GLenum, values: *mut GLfloat), "ip";
    GetPixelMapuiv = 272 => fn(map: GLenum, values: *mut GLuint), "ip";
    GetPixelMapusv = 273 => fn(map: GLenum, values: *mut GLushort), "ip";
    GetPolygonStipple = 274 => fn(mask: *mut GLubyte), "p";
    GetString = 275 => fn(name: GLenum) -> *const GLubyte, "i";
    GetTexEnvfv = 276 => fn(target: GLenum, pname: GLenum, params: *mut GLfloat), "iip";
    GetTexEnviv = 277 => fn(target: GLenum, pname: GLenum, params: *mut GLint), "iip";
    GetTexGendv = 278 => fn(coord: GLenum, pname: GLenum, params: *mut GLdouble), "iip";
    GetTexGenfv = 279 => fn(coord: GLenum, pname: GLenum, params: *mut GLfloat), "iip";
    GetTexGeniv = 280 => fn(coord: GLenum, pname: GLenum, params: *mut GLint), "iip";
    GetTexImage = 281 => fn(target: GLenum, level: GLint, format: GLenum, type_: GLenum, pixels: *mut GLvoid), "iiiip";
    GetTexParameterfv = 282 => fn(target: GLenum, pname: GLenum, params: *mut GLfloat), "iip";
    GetTexParameteriv = 283 => fn(target: GLenum, pname: GLenum, params: *mut GLint), "iip";
    GetTexLevelParameterfv = 284 => fn(target: GLenum, level: GLint, pname: GLenum, params: *mut GLfloat), "iiip";
    GetTexLevelParameteriv = 285 => fn(target: GLenum, level: GLint, pname: GLenum, params: *mut GLint), "iiip";
    IsEnabled = 286 => fn(cap: GLenum) -> GLboolean, "i";
    IsList = 287 => fn(list: GLuint) -> GLboolean, "i";
    DepthRange = 288 => fn(zNear: GLclampd, zFar: GLclampd), "dd";
    Frustum = 289 => fn(left: GLdouble, right: GLdouble, bottom: GLdouble, top: GLdouble, zNear: GLdouble, zFar: GLdouble), "dddddd";
    LoadIdentity = 290 => fn(), "";
    LoadMatrixf = 291 => fn(m: *const GLfloat), "p";
    LoadMatrixd = 292 => fn(m: *const GLdouble), "p";
    MatrixMode = 293 => fn(mode: GLenum), "i";
    MultMatrixf = 294 => fn(m: *const GLfloat), "p";
    MultMatrixd = 295 => fn(m: *const GLdouble), "p";
    Ortho = 296 => fn(left: GLdouble, right: GLdouble, bottom: GLdouble, top: GLdouble, zNear: GLdouble, zFar: GLdouble), "dddddd";
    PopMatrix = 297 => fn(), "";
    PushMatrix = 298 => fn(), "";
    Rotated = 299 => fn(angle: GLdouble, x: GLdouble, y: GLdouble, z: GLdouble), "dddd";
    Rotatef = 300 => fn(angle: GLfloat, x: GLfloat, y: GLfloat, z: GLfloat), "ffff";
    Scaled = 301 => fn(x: GLdouble, y: GLdouble, z: GLdouble), "ddd";
    Scalef = 302 => fn(x: GLfloat, y: GLfloat, z: GLfloat), "fff";
    Translated = 303 => fn(x: GLdouble, y: GLdouble, z: GLdouble), "ddd";
    Translatef = 304 => fn(x: GLfloat, y: GLfloat, z: GLfloat), "fff";
    Viewport = 305 => fn(x: GLint, y: GLint, width: GLsizei, height: GLsizei), "iiii";
    ArrayElement = 306 => fn(i: GLint), "i";
    BindTexture = 307 => fn(target: GLenum, texture: GLuint), "ii";
    ColorPointer = 308 => fn(size: GLint, type_: GLenum, stride: GLsizei, pointer: *const GLvoid), "iiip";
    DisableClientState = 309 => fn(array: GLenum), "i";
    DrawArrays = 310 => fn(mode: GLenum, first: GLint, count: GLsizei), "iii";
    DrawElements = 311 => fn(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const GLvoid), "iiip";
    EdgeFlagPointer = 312 => fn(stride: GLsizei, pointer: *const GLvoid), "ip";
    EnableClientState = 313 => fn(array: GLenum), "i";
    IndexPointer = 314 => fn(type_: GLenum, stride: GLsizei, pointer: *const GLvoid), "iip";
    Indexub = 315 => fn(c: GLubyte), "i";
    Indexubv = 316 => fn(c: *const GLubyte), "p";
    InterleavedArrays = 317 => fn(format: GLenum, stride: GLsizei, pointer: *const GLvoid), "iip";
    NormalPointer = 318 => fn(type_: GLenum, stride: GLsizei, pointer: *const GLvoid), "iip";
    PolygonOffset = 319 => fn(factor: GLfloat, units: GLfloat), "ff";
    TexCoordPointer = 320 => fn(size: GLint, type_: GLenum, stride: GLsizei, pointer: *const GLvoid), "iiip";
    VertexPointer = 321 => fn(size: GLint, type_: GLenum, stride: GLsizei, pointer: *const GLvoid), "iiip";
    AreTexturesResident = 322 => fn(n: GLsizei, textures: *const GLuint, residences: *mut GLboolean) -> GLboolean, "ipp";
    CopyTexImage1D = 323 => fn(target: GLenum, level: GLint, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei, border: GLint), "iiiiiii";
    CopyTexImage2D = 324 => fn(target: GLenum, level: GLint, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei, border: GLint), "iiiiiiii";
    CopyTexSubImage1D = 325 => fn(target: GLenum, level: GLint, xoffset: GLint, x: GLint, y: GLint, width: GLsizei), "iiiiii";
    CopyTexSubImage2D = 326 => fn(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei), "iiiiiiii";
    DeleteTextures = 327 => fn(n: GLsizei, textures: *const GLuint), "ip";
    GenTextures = 328 => fn(n: GLsizei, textures: *mut GLuint), "ip";
    GetPointerv = 329 => fn(pname: GLenum, params: *mut *mut GLvoid), "ip";
    IsTexture = 330 => fn(texture: GLuint) -> GLboolean, "i";
    PrioritizeTextures = 331 => fn(n: GLsizei, textures: *const GLuint, priorities: *const GLclampf), "ipp";
    TexSubImage1D = 332 => fn(target: GLenum, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, type_: GLenum, pixels: *const GLvoid), "iiiiiip";
    TexSubImage2D = 333 => fn(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *const GLvoid), "iiiiiiiip";
    PopClientAttrib = 334 => fn(), "";
    PushClientAttrib = 335 => fn(mask: GLbitfield), "i";
    BlendColor = 336 => fn(red: GLclampf, green: GLclampf, blue: GLclampf, alpha: GLclampf), "ffff";
    BlendEquation = 337 => fn(mode: GLenum), "i";
    DrawRangeElements = 338 => fn(mode: GLenum, start: GLuint, end: GLuint, count: GLsizei, type_: GLenum, indices: *const GLvoid), "iiiiip";
    ColorTable = 339 => fn(target: GLenum, internalformat: GLenum, width: GLsizei, format: GLenum, type_: GLenum, table: *const GLvoid), "iiiiip";
    ColorTableParameterfv = 340 => fn(target: GLenum, pname: GLenum, params: *const GLfloat), "iip";
    ColorTableParameteriv = 341 => fn(target: GLenum, pname: GLenum, params: *const GLint), "iip";
    CopyColorTable = 342 => fn(target: GLenum, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei), "iiiii";
    GetColorTable = 343 => fn(target: GLenum, format: GLenum, type_: GLenum, table: *mut GLvoid), "iiip";
    GetColorTableParameterfv = 344 => fn(target: GLenum, pname: GLenum, params: *mut GLfloat), "iip";
    GetColorTableParameteriv = 345 => fn(target: GLenum, pname: GLenum, params: *mut GLint), "iip";
    ColorSubTable = 346 => fn(target: GLenum, start: GLsizei, count: GLsizei, format: GLenum, type_: GLenum, data: *const GLvoid), "iiiiip";
    CopyColorSubTable = 347 => fn(target: GLenum, start: GLsizei, x: GLint, y: GLint, width: GLsizei), "iiiii";
    ConvolutionFilter1D = 348 => fn(target: GLenum, internalformat: GLenum, width: GLsizei, format: GLenum, type_: GLenum, image: *const GLvoid), "iiiiip";
    ConvolutionFilter2D = 349 => fn(target: GLenum, internalformat: GLenum, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, image: *const GLvoid), "iiiiiip";
    ConvolutionParameterf = 350 => fn(target: GLenum, pname: GLenum, params: GLfloat), "iif";
    ConvolutionParameterfv = 351 => fn(target: GLenum, pname: GLenum, params: *const GLfloat), "iip";
    ConvolutionParameteri = 352 => fn(target: GLenum, pname: GLenum, params: GLint), "iii";
    ConvolutionParameteriv = 353 => fn(target: GLenum, pname: GLenum, params: *const GLint), "iip";
    CopyConvolutionFilter1D = 354 => fn(target: GLenum, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei), "iiiii";
    CopyConvolutionFilter2D = 355 => fn(target: GLenum, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei), "iiiiii";
    GetConvolutionFilter = 356 => fn(target: GLenum, format: GLenum, type_: GLenum, image: *mut GLvoid), "iiip";
    GetConvolutionParameterfv = 357 => fn(target: GLenum, pname: GLenum, params: *mut GLfloat), "iip";
    GetConvolutionParameteriv = 358 => fn(target: GLenum, pname: GLenum, params: *mut GLint), "iip";
    GetSeparableFilter = 359 => fn(target: GLenum, format: GLenum, type_: GLenum, row: *mut GLvoid, column: *mut GLvoid, span: *mut GLvoid), "iiippp";
    SeparableFilter2D = 360 => fn(target: GLenum, internalformat: GLenum, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, row: *const GLvoid, column: *const GLvoid), "iiiiiipp";
    GetHistogram = 361 => fn(target: GLenum, reset: GLboolean, format: GLenum, type_: GLenum, values: *mut GLvoid), "iiiip";
    GetHistogramParameterfv = 362 => fn(target: GLenum, pname: GLenum, params: *mut GLfloat), "iip";
    GetHistogramParameteriv = 363 => fn(target: GLenum, pname: GLenum, params: *mut GLint), "iip";
    GetMinmax = 364 => fn(target: GLenum, reset: GLboolean, format: GLenum, type_: GLenum, values: *mut GLvoid), "iiiip";
    GetMinmaxParameterfv = 365 => fn(target: GLenum, pname: GLenum, params: *mut GLfloat), "iip";
    GetMinmaxParameteriv = 366 => fn(target: GLenum, pname: GLenum, params: *mut GLint), "iip";
    Histogram = 367 => fn(target: GLenum, width: GLsizei, internalformat: GLenum, sink: GLboolean), "iiii";
    Minmax = 368 => fn(target: GLenum, internalformat: GLenum, sink: GLboolean), "iii";
    ResetHistogram = 369 => fn(target: GLenum), "i";
    ResetMinmax = 370 => fn(target: GLenum), "i";
    TexImage3D = 371 => fn(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const GLvoid), "iiiiiiiiip";
    TexSubImage3D = 372 => fn(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, type_: GLenum, pixels: *const GLvoid), "iiiiiiiiiip";
    CopyTexSubImage3D = 373 => fn(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei), "iiiiiiiii";
    ActiveTextureARB = 374 => fn(texture: GLenum), "i";
    ClientActiveTextureARB = 375 => fn(texture: GLenum), "i";
    MultiTexCoord1dARB = 376 => fn(target: GLenum, s: GLdouble), "id";
    MultiTexCoord1dvARB = 377 => fn(target: GLenum, v: *const GLdouble), "ip";
    MultiTexCoord1fARB = 378 => fn(target: GLenum, s: GLfloat), "if";
    MultiTexCoord1fvARB = 379 => fn(target: GLenum, v: *const GLfloat), "ip";
    MultiTexCoord1iARB = 380 => fn(target: GLenum, s: GLint), "ii";
    MultiTexCoord1ivARB = 381 => fn(target: GLenum, v: *const GLint), "ip";
    MultiTexCoord1sARB = 382 => fn(target: GLenum, s: GLshort), "ii";
    MultiTexCoord1svARB = 383 => fn(target: GLenum, v: *const GLshort), "ip";
    MultiTexCoord2dARB = 384 => fn(target: GLenum, s: GLdouble, t: GLdouble), "idd";
    MultiTexCoord2dvARB = 385 => fn(target: GLenum, v: *const GLdouble), "ip";
    MultiTexCoord2fARB = 386 => fn(target: GLenum, s: GLfloat, t: GLfloat), "iff";
    MultiTexCoord2fvARB = 387 => fn(target: GLenum, v: *const GLfloat), "ip";
    MultiTexCoord2iARB = 388 => fn(target: GLenum, s: GLint, t: GLint), "iii";
    MultiTexCoord2ivARB = 389 => fn(target: GLenum, v: *const GLint), "ip";
    MultiTexCoord2sARB = 390 => fn(target: GLenum, s: GLshort, t: GLshort), "iii";
    MultiTexCoord2svARB = 391 => fn(target: GLenum, v: *const GLshort), "ip";
    MultiTexCoord3dARB = 392 => fn(target: GLenum, s: GLdouble, t: GLdouble, r: GLdouble), "iddd";
    MultiTexCoord3dvARB = 393 => fn(target: GLenum, v: *const GLdouble), "ip";
    MultiTexCoord3fARB = 394 => fn(target: GLenum, s: GLfloat, t: GLfloat, r: GLfloat), "ifff";
    MultiTexCoord3fvARB = 395 => fn(target: GLenum, v: *const GLfloat), "ip";
    MultiTexCoord3iARB = 396 => fn(target: GLenum, s: GLint, t: GLint, r: GLint), "iiii";
    MultiTexCoord3ivARB = 397 => fn(target: GLenum, v: *const GLint), "ip";
    MultiTexCoord3sARB = 398 => fn(target: GLenum, s: GLshort, t: GLshort, r: GLshort), "iiii";
    MultiTexCoord3svARB = 399 => fn(target: GLenum, v: *const GLshort), "ip";
    MultiTexCoord4dARB = 400 => fn(target: GLenum, s: GLdouble, t: GLdouble, r: GLdouble, q: GLdouble), "idddd";
    MultiTexCoord4dvARB = 401 => fn(target: GLenum, v: *const GLdouble), "ip";
    MultiTexCoord4fARB = 402 => fn(target: GLenum, s: GLfloat, t: GLfloat, r: GLfloat, q: GLfloat), "iffff";
    MultiTexCoord4fvARB = 403 => fn(target: GLenum, v: *const GLfloat), "ip";
    MultiTexCoord4iARB = 404 => fn(target: GLenum, s: GLint, t: GLint, r: GLint, q: GLint), "iiiii";
    MultiTexCoord4ivARB = 405 => fn(target: GLenum, v: *const GLint), "ip";
    MultiTexCoord4sARB = 406 => fn(target: GLenum, s: GLshort, t: GLshort, r: GLshort, q: GLshort), "iiiii";
    MultiTexCoord4svARB = 407 => fn(target: GLenum, v: *const GLshort), "ip";

    // ---- remapped ----

    AttachShader = 408 @ 0 => fn(program: GLuint, shader: GLuint), "ii";
    CreateProgram = 409 @ 1 => fn() -> GLuint, "";
    CreateShader = 410 @ 2 => fn(type_: GLenum) -> GLuint, "i";
    DeleteProgram = 411 @ 3 => fn(program: GLuint), "i";
    DeleteShader = 412 @ 4 => fn(program: GLuint), "i";
    DetachShader = 413 @ 5 => fn(program: GLuint, shader: GLuint), "ii";
    GetAttachedShaders = 414 @ 6 => fn(program: GLuint, maxCount: GLsizei, count: *mut GLsizei, obj: *mut GLuint), "iipp";
    GetProgramInfoLog = 415 @ 7 => fn(program: GLuint, bufSize: GLsizei, length: *mut GLsizei, infoLog: *mut GLchar), "iipp";
    GetProgramiv = 416 @ 8 => fn(program: GLuint, pname: GLenum, params: *mut GLint), "iip";
    GetShaderInfoLog = 417 @ 9 => fn(shader: GLuint, bufSize: GLsizei, length: *mut GLsizei, infoLog: *mut GLchar), "iipp";
    GetShaderiv = 418 @ 10 => fn(shader: GLuint, pname: GLenum, params: *mut GLint), "iip";
    IsProgram = 419 @ 11 => fn(program: GLuint) -> GLboolean, "i";
    IsShader = 420 @ 12 => fn(shader: GLuint) -> GLboolean, "i";
    StencilFuncSeparate = 421 @ 13 => fn(face: GLenum, func: GLenum, ref_: GLint, mask: GLuint), "iiii";
    StencilMaskSeparate = 422 @ 14 => fn(face: GLenum, mask: GLuint), "ii";
    StencilOpSeparate = 423 @ 15 => fn(face: GLenum, sfail: GLenum, zfail: GLenum, zpass: GLenum), "iiii";
    UniformMatrix2x3fv = 424 @ 16 => fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat), "iiip";
    UniformMatrix2x4fv = 425 @ 17 => fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat), "iiip";
    UniformMatrix3x2fv = 426 @ 18 => fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat), "iiip";
    UniformMatrix3x4fv = 427 @ 19 => fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat), "iiip";
    UniformMatrix4x2fv = 428 @ 20 => fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat), "iiip";
    UniformMatrix4x3fv = 429 @ 21 => fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat), "iiip";
    DrawArraysInstanced = 430 @ 22 => fn(mode: GLenum, first: GLint, count: GLsizei, primcount: GLsizei), "iiii";
    DrawElementsInstanced = 431 @ 23 => fn(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const GLvoid, primcount: GLsizei), "iiipi";
    LoadTransposeMatrixdARB = 432 @ 24 => fn(m: *const GLdouble), "p";
    LoadTransposeMatrixfARB = 433 @ 25 => fn(m: *const GLfloat), "p";
    MultTransposeMatrixdARB = 434 @ 26 => fn(m: *const GLdouble), "p";
    MultTransposeMatrixfARB = 435 @ 27 => fn(m: *const GLfloat), "p";
    SampleCoverageARB = 436 @ 28 => fn(value: GLclampf, invert: GLboolean), "fi";
    CompressedTexImage1DARB = 437 @ 29 => fn(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, border: GLint, imageSize: GLsizei, data: *const GLvoid), "iiiiiip";
    CompressedTexImage2DARB = 438 @ 30 => fn(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, height: GLsizei, border: GLint, imageSize: GLsizei, data: *const GLvoid), "iiiiiiip";
    CompressedTexImage3DARB = 439 @ 31 => fn(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint, imageSize: GLsizei, data: *const GLvoid), "iiiiiiiip";
    CompressedTexSubImage1DARB = 440 @ 32 => fn(target: GLenum, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, imageSize: GLsizei, data: *const GLvoid), "iiiiiip";
    CompressedTexSubImage2DARB = 441 @ 33 => fn(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, imageSize: GLsizei, data: *const GLvoid), "iiiiiiiip";
    CompressedTexSubImage3DARB = 442 @ 34 => fn(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, imageSize: GLsizei, data: *const GLvoid), "iiiiiiiiiip";
    GetCompressedTexImageARB = 443 @ 35 => fn(target: GLenum, level: GLint, img: *mut GLvoid), "iip";
    DisableVertexAttribArrayARB = 444 @ 36 => fn(index: GLuint), "i";
    EnableVertexAttribArrayARB = 445 @ 37 => fn(index: GLuint), "i";
    GetProgramEnvParameterdvARB = 446 @ 38 => fn(target: GLenum, index: GLuint, params: *mut GLdouble), "iip";
    GetProgramEnvParameterfvARB = 447 @ 39 => fn(target: GLenum, index: GLuint, params: *mut GLfloat), "iip";
    GetProgramLocalParameterdvARB = 448 @ 40 => fn(target: GLenum, index: GLuint, params: *mut GLdouble), "iip";
    GetProgramLocalParameterfvARB = 449 @ 41 => fn(target: GLenum, index: GLuint, params: *mut GLfloat), "iip";
    GetProgramStringARB = 450 @ 42 => fn(target: GLenum, pname: GLenum, string: *mut GLvoid), "iip";
    GetProgramivARB = 451 @ 43 => fn(target: GLenum, pname: GLenum, params: *mut GLint), "iip";
    GetVertexAttribdvARB = 452 @ 44 => fn(index: GLuint, pname: GLenum, params: *mut GLdouble), "iip";
    GetVertexAttribfvARB = 453 @ 45 => fn(index: GLuint, pname: GLenum, params: *mut GLfloat), "iip";
    GetVertexAttribivARB = 454 @ 46 => fn(index: GLuint, pname: GLenum, params: *mut GLint), "iip";
    ProgramEnvParameter4dARB = 455 @ 47 => fn(target: GLenum, index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble), "iidddd";
    ProgramEnvParameter4dvARB = 456 @ 48 => fn(target: GLenum, index: GLuint, params: *const GLdouble), "iip";
    ProgramEnvParameter4fARB = 457 @ 49 => fn(target: GLenum, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat), "iiffff";
    ProgramEnvParameter4fvARB = 458 @ 50 => fn(target: GLenum, index: GLuint, params: *const GLfloat), "iip";
    ProgramLocalParameter4dARB = 459 @ 51 => fn(target: GLenum, index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble), "iidddd";
    ProgramLocalParameter4dvARB = 460 @ 52 => fn(target: GLenum, index: GLuint, params: *const GLdouble), "iip";
    ProgramLocalParameter4fARB = 461 @ 53 => fn(target: GLenum, index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat), "iiffff";
    ProgramLocalParameter4fvARB = 462 @ 54 => fn(target: GLenum, index: GLuint, params: *const GLfloat), "iip";
    ProgramStringARB = 463 @ 55 => fn(target: GLenum, format: GLenum, len: GLsizei, string: *const GLvoid), "iiip";
    VertexAttrib1dARB = 464 @ 56 => fn(index: GLuint, x: GLdouble), "id";
    VertexAttrib1dvARB = 465 @ 57 => fn(index: GLuint, v: *const GLdouble), "ip";
    VertexAttrib1fARB = 466 @ 58 => fn(index: GLuint, x: GLfloat), "if";
    VertexAttrib1fvARB = 467 @ 59 => fn(index: GLuint, v: *const GLfloat), "ip";
    VertexAttrib1sARB = 468 @ 60 => fn(index: GLuint, x: GLshort), "ii";
    VertexAttrib1svARB = 469 @ 61 => fn(index: GLuint, v: *const GLshort), "ip";
    VertexAttrib2dARB = 470 @ 62 => fn(index: GLuint, x: GLdouble, y: GLdouble), "idd";
    VertexAttrib2dvARB = 471 @ 63 => fn(index: GLuint, v: *const GLdouble), "ip";
    VertexAttrib2fARB = 472 @ 64 => fn(index: GLuint, x: GLfloat, y: GLfloat), "iff";
    VertexAttrib2fvARB = 473 @ 65 => fn(index: GLuint, v: *const GLfloat), "ip";
    VertexAttrib2sARB = 474 @ 66 => fn(index: GLuint, x: GLshort, y: GLshort), "iii";
    VertexAttrib2svARB = 475 @ 67 => fn(index: GLuint, v: *const GLshort), "ip";
    VertexAttrib3dARB = 476 @ 68 => fn(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble), "iddd";
    VertexAttrib3dvARB = 477 @ 69 => fn(index: GLuint, v: *const GLdouble), "ip";
    VertexAttrib3fARB = 478 @ 70 => fn(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat), "ifff";
    VertexAttrib3fvARB = 479 @ 71 => fn(index: GLuint, v: *const GLfloat), "ip";
    VertexAttrib3sARB = 480 @ 72 => fn(index: GLuint, x: GLshort, y: GLshort, z: GLshort), "iiii";
    VertexAttrib3svARB = 481 @ 73 => fn(index: GLuint, v: *const GLshort), "ip";
    VertexAttrib4NbvARB = 482 @ 74 => fn(index: GLuint, v: *const GLbyte), "ip";
    VertexAttrib4NivARB = 483 @ 75 => fn(index: GLuint, v: *const GLint), "ip";
    VertexAttrib4NsvARB = 484 @ 76 => fn(index: GLuint, v: *const GLshort), "ip";
    VertexAttrib4NubARB = 485 @ 77 => fn(index: GLuint, x: GLubyte, y: GLubyte, z: GLubyte, w: GLubyte), "iiiii";
    VertexAttrib4NubvARB = 486 @ 78 => fn(index: GLuint, v: *const GLubyte), "ip";
    VertexAttrib4NuivARB = 487 @ 79 => fn(index: GLuint, v: *const GLuint), "ip";
    VertexAttrib4NusvARB = 488 @ 80 => fn(index: GLuint, v: *const GLushort), "ip";
    VertexAttrib4bvARB = 489 @ 81 => fn(index: GLuint, v: *const GLbyte), "ip";
    VertexAttrib4dARB = 490 @ 82 => fn(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble), "idddd";
    VertexAttrib4dvARB = 491 @ 83 => fn(index: GLuint, v: *const GLdouble), "ip";
    VertexAttrib4fARB = 492 @ 84 => fn(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat), "iffff";
    VertexAttrib4fvARB = 493 @ 85 => fn(index: GLuint, v: *const GLfloat), "ip";
    VertexAttrib4ivARB = 494 @ 86 => fn(index: GLuint, v: *const GLint), "ip";
    VertexAttrib4sARB = 495 @ 87 => fn(index: GLuint, x: GLshort, y: GLshort, z: GLshort, w: GLshort), "iiiii";
    VertexAttrib4svARB = 496 @ 88 => fn(index: GLuint, v: *const GLshort), "ip";
    VertexAttrib4ubvARB = 497 @ 89 => fn(index: GLuint, v: *const GLubyte), "ip";
    VertexAttrib4uivARB = 498 @ 90 => fn(index: GLuint, v: *const GLuint), "ip";
    VertexAttrib4usvARB = 499 @ 91 => fn(index: GLuint, v: *const GLushort), "ip";
    VertexAttribPointerARB = 500 @ 92 => fn(index: GLuint, size: GLint, type_: GLenum, normalized: GLboolean, stride: GLsizei, pointer: *const GLvoid), "iiiiip";
    BindBufferARB = 501 @ 93 => fn(target: GLenum, buffer: GLuint), "ii";
    BufferDataARB = 502 @ 94 => fn(target: GLenum, size: GLsizeiptrARB, data: *const GLvoid, usage: GLenum), "iipi";
    BufferSubDataARB = 503 @ 95 => fn(target: GLenum, offset: GLintptrARB, size: GLsizeiptrARB, data: *const GLvoid), "iiip";
    DeleteBuffersARB = 504 @ 96 => fn(n: GLsizei, buffer: *const GLuint), "ip";
    GenBuffersARB = 505 @ 97 => fn(n: GLsizei, buffer: *mut GLuint), "ip";
    GetBufferParameterivARB = 506 @ 98 => fn(target: GLenum, pname: GLenum, params: *mut GLint), "iip";
    GetBufferPointervARB = 507 @ 99 => fn(target: GLenum, pname: GLenum, params: *mut *mut GLvoid), "iip";
    GetBufferSubDataARB = 508 @ 100 => fn(target: GLenum, offset: GLintptrARB, size: GLsizeiptrARB, data: *mut GLvoid), "iiip";
    IsBufferARB = 509 @ 101 => fn(buffer: GLuint) -> GLboolean, "i";
    MapBufferARB = 510 @ 102 => fn(target: GLenum, access: GLenum) -> *mut GLvoid, "ii";
    UnmapBufferARB = 511 @ 103 => fn(target: GLenum) -> GLboolean, "i";
    BeginQueryARB = 512 @ 104 => fn(target: GLenum, id: GLuint), "ii";
    DeleteQueriesARB = 513 @ 105 => fn(n: GLsizei, ids: *const GLuint), "ip";
    EndQueryARB = 514 @ 106 => fn(target: GLenum), "i";
    GenQueriesARB = 515 @ 107 => fn(n: GLsizei, ids: *mut GLuint), "ip";
    GetQueryObjectivARB = 516 @ 108 => fn(id: GLuint, pname: GLenum, params: *mut GLint), "iip";
    GetQueryObjectuivARB = 517 @ 109 => fn(id: GLuint, pname: GLenum, params: *mut GLuint), "iip";
    GetQueryivARB = 518 @ 110 => fn(target: GLenum, pname: GLenum, params: *mut GLint), "iip";
    IsQueryARB = 519 @ 111 => fn(id: GLuint) -> GLboolean, "i";
    AttachObjectARB = 520 @ 112 => fn(containerObj: GLhandleARB, obj: GLhandleARB), "ii";
    CompileShaderARB = 521 @ 113 => fn(shader: GLhandleARB), "i";
    CreateProgramObjectARB = 522 @ 114 => fn() -> GLhandleARB, "";
    CreateShaderObjectARB = 523 @ 115 => fn(shaderType: GLenum) -> GLhandleARB, "i";
    DeleteObjectARB = 524 @ 116 => fn(obj: GLhandleARB), "i";
    DetachObjectARB = 525 @ 117 => fn(containerObj: GLhandleARB, attachedObj: GLhandleARB), "ii";
    GetActiveUniformARB = 526 @ 118 => fn(program: GLhandleARB, index: GLuint, bufSize: GLsizei, length: *mut GLsizei, size: *mut GLint, type_: *mut GLenum, name: *mut GLcharARB), "iiipppp";
    GetAttachedObjectsARB = 527 @ 119 => fn(containerObj: GLhandleARB, maxLength: GLsizei, length: *mut GLsizei, infoLog: *mut GLhandleARB), "iipp";
    GetHandleARB = 528 @ 120 => fn(pname: GLenum) -> GLhandleARB, "i";
    GetInfoLogARB = 529 @ 121 => fn(obj: GLhandleARB, maxLength: GLsizei, length: *mut GLsizei, infoLog: *mut GLcharARB), "iipp";
    GetObjectParameterfvARB = 530 @ 122 => fn(obj: GLhandleARB, pname: GLenum, params: *mut GLfloat), "iip";
    GetObjectParameterivARB = 531 @ 123 => fn(obj: GLhandleARB, pname: GLenum, params: *mut GLint), "iip";
    GetShaderSourceARB = 532 @ 124 => fn(shader: GLhandleARB, bufSize: GLsizei, length: *mut GLsizei, source: *mut GLcharARB), "iipp";
    GetUniformLocationARB = 533 @ 125 => fn(program: GLhandleARB, name: *const GLcharARB) -> GLint, "ip";
    GetUniformfvARB = 534 @ 126 => fn(program: GLhandleARB, location: GLint, params: *mut GLfloat), "iip";
    GetUniformivARB = 535 @ 127 => fn(program: GLhandleARB, location: GLint, params: *mut GLint), "iip";
    LinkProgramARB = 536 @ 128 => fn(program: GLhandleARB), "i";
    ShaderSourceARB = 537 @ 129 => fn(shader: GLhandleARB, count: GLsizei, string: *mut *const GLcharARB, length: *const GLint), "iipp";
    Uniform1fARB = 538 @ 130 => fn(location: GLint, v0: GLfloat), "if";
    Uniform1fvARB = 539 @ 131 => fn(location: GLint, count: GLsizei, value: *const GLfloat), "iip";
    Uniform1iARB = 540 @ 132 => fn(location: GLint, v0: GLint), "ii";
    Uniform1ivARB = 541 @ 133 => fn(location: GLint, count: GLsizei, value: *const GLint), "iip";
    Uniform2fARB = 542 @ 134 => fn(location: GLint, v0: GLfloat, v1: GLfloat), "iff";
    Uniform2fvARB = 543 @ 135 => fn(location: GLint, count: GLsizei, value: *const GLfloat), "iip";
    Uniform2iARB = 544 @ 136 => fn(location: GLint, v0: GLint, v1: GLint), "iii";
    Uniform2ivARB = 545 @ 137 => fn(location: GLint, count: GLsizei, value: *const GLint), "iip";
    Uniform3fARB = 546 @ 138 => fn(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat), "ifff";
    Uniform3fvARB = 547 @ 139 => fn(location: GLint, count: GLsizei, value: *const GLfloat), "iip";
    Uniform3iARB = 548 @ 140 => fn(location: GLint, v0: GLint, v1: GLint, v2: GLint), "iiii";
    Uniform3ivARB = 549 @ 141 => fn(location: GLint, count: GLsizei, value: *const GLint), "iip";
    Uniform4fARB = 550 @ 142 => fn(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat), "iffff";
    Uniform4fvARB = 551 @ 143 => fn(location: GLint, count: GLsizei, value: *const GLfloat), "iip";
    Uniform4iARB = 552 @ 144 => fn(location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint), "iiiii";
    Uniform4ivARB = 553 @ 145 => fn(location: GLint, count: GLsizei, value: *const GLint), "iip";
    UniformMatrix2fvARB = 554 @ 146 => fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat), "iiip";
    UniformMatrix3fvARB = 555 @ 147 => fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat), "iiip";
    UniformMatrix4fvARB = 556 @ 148 => fn(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat), "iiip";
    UseProgramObjectARB = 557 @ 149 => fn(program: GLhandleARB), "i";
    ValidateProgramARB = 558 @ 150 => fn(program: GLhandleARB), "i";
    BindAttribLocationARB = 559 @ 151 => fn(program: GLhandleARB, index: GLuint, name: *const GLcharARB), "iip";
    GetActiveAttribARB = 560 @ 152 => fn(program: GLhandleARB, index: GLuint, bufSize: GLsizei, length: *mut GLsizei, size: *mut GLint, type_: *mut GLenum, name: *mut GLcharARB), "iiipppp";
    GetAttribLocationARB = 561 @ 153 => fn(program: GLhandleARB, name: *const GLcharARB) -> GLint, "ip";
    DrawBuffersARB = 562 @ 154 => fn(n: GLsizei, bufs: *const GLenum), "ip";
    RenderbufferStorageMultisample = 563 @ 155 => fn(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei), "iiiii";
    FramebufferTextureARB = 564 @ 156 => fn(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint), "iiii";
    FramebufferTextureFaceARB = 565 @ 157 => fn(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint, face: GLenum), "iiiii";
    ProgramParameteriARB = 566 @ 158 => fn(program: GLuint, pname: GLenum, value: GLint), "iii";
    FlushMappedBufferRange = 567 @ 159 => fn(target: GLenum, offset: GLintptr, length: GLsizeiptr), "iii";
    MapBufferRange = 568 @ 160 => fn(target: GLenum, offset: GLintptr, length: GLsizeiptr, access: GLbitfield) -> *mut GLvoid, "iiii";
    BindVertexArray = 569 @ 161 => fn(array: GLuint), "i";
    GenVertexArrays = 570 @ 162 => fn(n: GLsizei, arrays: *mut GLuint), "ip";
    CopyBufferSubData = 571 @ 163 => fn(readTarget: GLenum, writeTarget: GLenum, readOffset: GLintptr, writeOffset: GLintptr, size: GLsizeiptr), "iiiii";
    ClientWaitSync = 572 @ 164 => fn(sync: GLsync, flags: GLbitfield, timeout: GLuint64) -> GLenum, "pii";
    DeleteSync = 573 @ 165 => fn(sync: GLsync), "p";
    FenceSync = 574 @ 166 => fn(condition: GLenum, flags: GLbitfield) -> GLsync, "ii";
    GetInteger64v = 575 @ 167 => fn(pname: GLenum, params: *mut GLint64), "ip";
    GetSynciv = 576 @ 168 => fn(sync: GLsync, pname: GLenum, bufSize: GLsizei, length: *mut GLsizei, values: *mut GLint), "piipp";
    IsSync = 577 @ 169 => fn(sync: GLsync) -> GLboolean, "p";
    WaitSync = 578 @ 170 => fn(sync: GLsync, flags: GLbitfield, timeout: GLuint64), "pii";
    DrawElementsBaseVertex = 579 @ 171 => fn(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const GLvoid, basevertex: GLint), "iiipi";
    DrawRangeElementsBaseVertex = 580 @ 172 => fn(mode: GLenum, start: GLuint, end: GLuint, count: GLsizei, type_: GLenum, indices: *const GLvoid, basevertex: GLint), "iiiiipi";
    MultiDrawElementsBaseVertex = 581 @ 173 => fn(mode: GLenum, count: *const GLsizei, type_: GLenum, indices: *mut *const GLvoid, primcount: GLsizei, basevertex: *const GLint), "ipipip";
    BindTransformFeedback = 582 @ 174 => fn(target: GLenum, id: GLuint), "ii";
    DeleteTransformFeedbacks = 583 @ 175 => fn(n: GLsizei, ids: *const GLuint), "ip";
    DrawTransformFeedback = 584 @ 176 => fn(mode: GLenum, id: GLuint), "ii";
    GenTransformFeedbacks = 585 @ 177 => fn(n: GLsizei, ids: *mut GLuint), "ip";
    IsTransformFeedback = 586 @ 178 => fn(id: GLuint) -> GLboolean, "i";
    PauseTransformFeedback = 587 @ 179 => fn(), "";
    ResumeTransformFeedback = 588 @ 180 => fn(), "";
    PolygonOffsetEXT = 589 @ 181 => fn(factor: GLfloat, bias: GLfloat), "ff";
    GetPixelTexGenParameterfvSGIS = 590 @ 182 => fn(pname: GLenum, params: *mut GLfloat), "ip";
    GetPixelTexGenParameterivSGIS = 591 @ 183 => fn(pname: GLenum, params: *mut GLint), "ip";
    PixelTexGenParameterfSGIS = 592 @ 184 => fn(pname: GLenum, param: GLfloat), "if";
    PixelTexGenParameterfvSGIS = 593 @ 185 => fn(pname: GLenum, params: *const GLfloat), "ip";
    PixelTexGenParameteriSGIS = 594 @ 186 => fn(pname: GLenum, param: GLint), "ii";
    PixelTexGenParameterivSGIS = 595 @ 187 => fn(pname: GLenum, params: *const GLint), "ip";
    SampleMaskSGIS = 596 @ 188 => fn(value: GLclampf, invert: GLboolean), "fi";
    SamplePatternSGIS = 597 @ 189 => fn(pattern: GLenum), "i";
    ColorPointerEXT = 598 @ 190 => fn(size: GLint, type_: GLenum, stride: GLsizei, count: GLsizei, pointer: *const GLvoid), "iiiip";
    EdgeFlagPointerEXT = 599 @ 191 => fn(stride: GLsizei, count: GLsizei, pointer: *const GLboolean), "iip";
    IndexPointerEXT = 600 @ 192 => fn(type_: GLenum, stride: GLsizei, count: GLsizei, pointer: *const GLvoid), "iiip";
    NormalPointerEXT = 601 @ 193 => fn(type_: GLenum, stride: GLsizei, count: GLsizei, pointer: *const GLvoid), "iiip";
    TexCoordPointerEXT = 602 @ 194 => fn(size: GLint, type_: GLenum, stride: GLsizei, count: GLsizei, pointer: *const GLvoid), "iiiip";
    VertexPointerEXT = 603 @ 195 => fn(size: GLint, type_: GLenum, stride: GLsizei, count: GLsizei, pointer: *const GLvoid), "iiiip";
    PointParameterfEXT = 604 @ 196 => fn(pname: GLenum, param: GLfloat), "if";
    PointParameterfvEXT = 605 @ 197 => fn(pname: GLenum, params: *const GLfloat), "ip";
    LockArraysEXT = 606 @ 198 => fn(first: GLint, count: GLsizei), "ii";
    UnlockArraysEXT = 607 @ 199 => fn(), "";
    SecondaryColor3bEXT = 608 @ 200 => fn(red: GLbyte, green: GLbyte, blue: GLbyte), "iii";
    SecondaryColor3bvEXT = 609 @ 201 => fn(v: *const GLbyte), "p";
    SecondaryColor3dEXT = 610 @ 202 => fn(red: GLdouble, green: GLdouble, blue: GLdouble), "ddd";
    SecondaryColor3dvEXT = 611 @ 203 => fn(v: *const GLdouble), "p";
    SecondaryColor3fEXT = 612 @ 204 => fn(red: GLfloat, green: GLfloat, blue: GLfloat), "fff";
    SecondaryColor3fvEXT = 613 @ 205 => fn(v: *const GLfloat), "p";
    SecondaryColor3iEXT = 614 @ 206 => fn(red: GLint, green: GLint, blue: GLint), "iii";
    SecondaryColor3ivEXT = 615 @ 207 => fn(v: *const GLint), "p";
    SecondaryColor3sEXT = 616 @ 208 => fn(red: GLshort, green: GLshort, blue: GLshort), "iii";
    SecondaryColor3svEXT = 617 @ 209 => fn(v: *const GLshort), "p";
    SecondaryColor3ubEXT = 618 @ 210 => fn(red: GLubyte, green: GLubyte, blue: GLubyte), "iii";
    SecondaryColor3ubvEXT = 619 @ 211 => fn(v: *const GLubyte), "p";
    SecondaryColor3uiEXT = 620 @ 212 => fn(red: GLuint, green: GLuint, blue: GLuint), "iii";
    SecondaryColor3uivEXT = 621 @ 213 => fn(v: *const GLuint), "p";
    SecondaryColor3usEXT = 622 @ 214 => fn(red: GLushort, green: GLushort, blue: GLushort), "iii";
    SecondaryColor3usvEXT = 623 @ 215 => fn(v: *const GLushort), "p";
    SecondaryColorPointerEXT = 624 @ 216 => fn(size: GLint, type_: GLenum, stride: GLsizei, pointer: *const GLvoid), "iiip";
    MultiDrawArraysEXT = 625 @ 217 => fn(mode: GLenum, first: *const GLint, count: *const GLsizei, primcount: GLsizei), "ippi";
    MultiDrawElementsEXT = 626 @ 218 => fn(mode: GLenum, count: *const GLsizei, type_: GLenum, indices: *mut *const GLvoid, primcount: GLsizei), "ipipi";
    FogCoordPointerEXT = 627 @ 219 => fn(type_: GLenum, stride: GLsizei, pointer: *const GLvoid), "iip";
    FogCoorddEXT = 628 @ 220 => fn(coord: GLdouble), "d";
    FogCoorddvEXT = 629 @ 221 => fn(coord: *const GLdouble), "p";
    FogCoordfEXT = 630 @ 222 => fn(coord: GLfloat), "f";
    FogCoordfvEXT = 631 @ 223 => fn(coord: *const GLfloat), "p";
    PixelTexGenSGIX = 632 @ 224 => fn(mode: GLenum), "i";
    BlendFuncSeparateEXT = 633 @ 225 => fn(sfactorRGB: GLenum, dfactorRGB: GLenum, sfactorAlpha: GLenum, dfactorAlpha: GLenum), "iiii";
    FlushVertexArrayRangeNV = 634 @ 226 => fn(), "";
    VertexArrayRangeNV = 635 @ 227 => fn(length: GLsizei, pointer: *const GLvoid), "ip";
    CombinerInputNV = 636 @ 228 => fn(stage: GLenum, portion: GLenum, variable: GLenum, input: GLenum, mapping: GLenum, componentUsage: GLenum), "iiiiii";
    CombinerOutputNV = 637 @ 229 => fn(stage: GLenum, portion: GLenum, abOutput: GLenum, cdOutput: GLenum, sumOutput: GLenum, scale: GLenum, bias: GLenum, abDotProduct: GLboolean, cdDotProduct: GLboolean, muxSum: GLboolean), "iiiiiiiiii";
    CombinerParameterfNV = 638 @ 230 => fn(pname: GLenum, param: GLfloat), "if";
    CombinerParameterfvNV = 639 @ 231 => fn(pname: GLenum, params: *const GLfloat), "ip";
    CombinerParameteriNV = 640 @ 232 => fn(pname: GLenum, param: GLint), "ii";
    CombinerParameterivNV = 641 @ 233 => fn(pname: GLenum, params: *const GLint), "ip";
    FinalCombinerInputNV = 642 @ 234 => fn(variable: GLenum, input: GLenum, mapping: GLenum, componentUsage: GLenum), "iiii";
    GetCombinerInputParameterfvNV = 643 @ 235 => fn(stage: GLenum, portion: GLenum, variable: GLenum, pname: GLenum, params: *mut GLfloat), "iiiip";
    GetCombinerInputParameterivNV = 644 @ 236 => fn(stage: GLenum, portion: GLenum, variable: GLenum, pname: GLenum, params: *mut GLint), "iiiip";
    GetCombinerOutputParameterfvNV = 645 @ 237 => fn(stage: GLenum, portion: GLenum, pname: GLenum, params: *mut GLfloat), "iiip";
    GetCombinerOutputParameterivNV = 646 @ 238 => fn(stage: GLenum, portion: GLenum, pname: GLenum, params: *mut GLint), "iiip";
    GetFinalCombinerInputParameterfvNV = 647 @ 239 => fn(variable: GLenum, pname: GLenum, params: *mut GLfloat), "iip";
    GetFinalCombinerInputParameterivNV = 648 @ 240 => fn(variable: GLenum, pname: GLenum, params: *mut GLint), "iip";
    ResizeBuffersMESA = 649 @ 241 => fn(), "";
    WindowPos2dMESA = 650 @ 242 => fn(x: GLdouble, y: GLdouble), "dd";
    WindowPos2dvMESA = 651 @ 243 => fn(v: *const GLdouble), "p";
    WindowPos2fMESA = 652 @ 244 => fn(x: GLfloat, y: GLfloat), "ff";
    WindowPos2fvMESA = 653 @ 245 => fn(v: *const GLfloat), "p";
    WindowPos2iMESA = 654 @ 246 => fn(x: GLint, y: GLint), "ii";
    WindowPos2ivMESA = 655 @ 247 => fn(v: *const GLint), "p";
    WindowPos2sMESA = 656 @ 248 => fn(x: GLshort, y: GLshort), "ii";
    WindowPos2svMESA = 657 @ 249 => fn(v: *const GLshort), "p";
    WindowPos3dMESA = 658 @ 250 => fn(x: GLdouble, y: GLdouble, z: GLdouble), "ddd";
    WindowPos3dvMESA = 659 @ 251 => fn(v: *const GLdouble), "p";
    WindowPos3fMESA = 660 @ 252 => fn(x: GLfloat, y: GLfloat, z: GLfloat), "fff";
    WindowPos3fvMESA = 661 @ 253 => fn(v: *const GLfloat), "p";
    WindowPos3iMESA = 662 @ 254 => fn(x: GLint, y: GLint, z: GLint), "iii";
    WindowPos3ivMESA = 663 @ 255 => fn(v: *const GLint), "p";
    WindowPos3sMESA = 664 @ 256 => fn(x: GLshort, y: GLshort, z: GLshort), "iii";
    WindowPos3svMESA = 665 @ 257 => fn(v: *const GLshort), "p";
    WindowPos4dMESA = 666 @ 258 => fn(x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble), "dddd";
    WindowPos4dvMESA = 667 @ 259 => fn(v: *const GLdouble), "p";
    WindowPos4fMESA = 668 @ 260 => fn(x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat), "ffff";
    WindowPos4fvMESA = 669 @ 261 => fn(v: *const GLfloat), "p";
    WindowPos4iMESA = 670 @ 262 => fn(x: GLint, y: GLint, z: GLint, w: GLint), "iiii";
    WindowPos4ivMESA = 671 @ 263 => fn(v: *const GLint), "p";
    WindowPos4sMESA = 672 @ 264 => fn(x: GLshort, y: GLshort, z: GLshort, w: GLshort), "iiii";
    WindowPos4svMESA = 673 @ 265 => fn(v: *const GLshort), "p";
    MultiModeDrawArraysIBM = 674 @ 266 => fn(mode: *const GLenum, first: *const GLint, count: *const GLsizei, primcount: GLsizei, modestride: GLint), "pppii";
    MultiModeDrawElementsIBM = 675 @ 267 => fn(mode: *const GLenum, count: *const GLsizei, type_: GLenum, indices: *const *const GLvoid, primcount: GLsizei, modestride: GLint), "ppipii";
    DeleteFencesNV = 676 @ 268 => fn(n: GLsizei, fences: *const GLuint), "ip";
    FinishFenceNV = 677 @ 269 => fn(fence: GLuint), "i";
    GenFencesNV = 678 @ 270 => fn(n: GLsizei, fences: *mut GLuint), "ip";
    GetFenceivNV = 679 @ 271 => fn(fence: GLuint, pname: GLenum, params: *mut GLint), "iip";
    IsFenceNV = 680 @ 272 => fn(fence: GLuint) -> GLboolean, "i";
    SetFenceNV = 681 @ 273 => fn(fence: GLuint, condition: GLenum), "ii";
    TestFenceNV = 682 @ 274 => fn(fence: GLuint) -> GLboolean, "i";
    AreProgramsResidentNV = 683 @ 275 => fn(n: GLsizei, ids: *const GLuint, residences: *mut GLboolean) -> GLboolean, "ipp";
    BindProgramNV = 684 @ 276 => fn(target: GLenum, program: GLuint), "ii";
    DeleteProgramsNV = 685 @ 277 => fn(n: GLsizei, programs: *const GLuint), "ip";
    ExecuteProgramNV = 686 @ 278 => fn(target: GLenum, id: GLuint, params: *const GLfloat), "iip";
    GenProgramsNV = 687 @ 279 => fn(n: GLsizei, programs: *mut GLuint), "ip";
    GetProgramParameterdvNV = 688 @ 280 => fn(target: GLenum, index: GLuint, pname: GLenum, params: *mut GLdouble), "iiip";
    GetProgramParameterfvNV = 689 @ 281 => fn(target: GLenum, index: GLuint, pname: GLenum, params: *mut GLfloat), "iiip";
    GetProgramStringNV = 690 @ 282 => fn(id: GLuint, pname: GLenum, program: *mut GLubyte), "iip";
    GetProgramivNV = 691 @ 283 => fn(id: GLuint, pname: GLenum, params: *mut GLint), "iip";
    GetTrackMatrixivNV = 692 @ 284 => fn(target: GLenum, address: GLuint, pname: GLenum, params: *mut GLint), "iiip";
    GetVertexAttribPointervNV = 693 @ 285 => fn(index: GLuint, pname: GLenum, pointer: *mut *mut GLvoid), "iip";
    GetVertexAttribdvNV = 694 @ 286 => fn(index: GLuint, pname: GLenum, params: *mut GLdouble), "iip";
    GetVertexAttribfvNV = 695 @ 287 => fn(index: GLuint, pname: GLenum, params: *mut GLfloat), "iip";
    GetVertexAttribivNV = 696 @ 288 => fn(index: GLuint, pname: GLenum, params: *mut GLint), "iip";
    IsProgramNV = 697 @ 289 => fn(program: GLuint) -> GLboolean, "i";
    LoadProgramNV = 698 @ 290 => fn(target: GLenum, id: GLuint, len: GLsizei, program: *const GLubyte), "iiip";
    ProgramParameters4dvNV = 699 @ 291 => fn(target: GLenum, index: GLuint, num: GLsizei, params: *const GLdouble), "iiip";
    ProgramParameters4fvNV = 700 @ 292 => fn(target: GLenum, index: GLuint, num: GLsizei, params: *const GLfloat), "iiip";
    RequestResidentProgramsNV = 701 @ 293 => fn(n: GLsizei, ids: *const GLuint), "ip";
    TrackMatrixNV = 702 @ 294 => fn(target: GLenum, address: GLuint, matrix: GLenum, transform: GLenum), "iiii";
    VertexAttrib1dNV = 703 @ 295 => fn(index: GLuint, x: GLdouble), "id";
    VertexAttrib1dvNV = 704 @ 296 => fn(index: GLuint, v: *const GLdouble), "ip";
    VertexAttrib1fNV = 705 @ 297 => fn(index: GLuint, x: GLfloat), "if";
    VertexAttrib1fvNV = 706 @ 298 => fn(index: GLuint, v: *const GLfloat), "ip";
    VertexAttrib1sNV = 707 @ 299 => fn(index: GLuint, x: GLshort), "ii";
    VertexAttrib1svNV = 708 @ 300 => fn(index: GLuint, v: *const GLshort), "ip";
    VertexAttrib2dNV = 709 @ 301 => fn(index: GLuint, x: GLdouble, y: GLdouble), "idd";
    VertexAttrib2dvNV = 710 @ 302 => fn(index: GLuint, v: *const GLdouble), "ip";
    VertexAttrib2fNV = 711 @ 303 => fn(index: GLuint, x: GLfloat, y: GLfloat), "iff";
    VertexAttrib2fvNV = 712 @ 304 => fn(index: GLuint, v: *const GLfloat), "ip";
    VertexAttrib2sNV = 713 @ 305 => fn(index: GLuint, x: GLshort, y: GLshort), "iii";
    VertexAttrib2svNV = 714 @ 306 => fn(index: GLuint, v: *const GLshort), "ip";
    VertexAttrib3dNV = 715 @ 307 => fn(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble), "iddd";
    VertexAttrib3dvNV = 716 @ 308 => fn(index: GLuint, v: *const GLdouble), "ip";
    VertexAttrib3fNV = 717 @ 309 => fn(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat), "ifff";
    VertexAttrib3fvNV = 718 @ 310 => fn(index: GLuint, v: *const GLfloat), "ip";
    VertexAttrib3sNV = 719 @ 311 => fn(index: GLuint, x: GLshort, y: GLshort, z: GLshort), "iiii";
    VertexAttrib3svNV = 720 @ 312 => fn(index: GLuint, v: *const GLshort), "ip";
    VertexAttrib4dNV = 721 @ 313 => fn(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble), "idddd";
    VertexAttrib4dvNV = 722 @ 314 => fn(index: GLuint, v: *const GLdouble), "ip";
    VertexAttrib4fNV = 723 @ 315 => fn(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat), "iffff";
    VertexAttrib4fvNV = 724 @ 316 => fn(index: GLuint, v: *const GLfloat), "ip";
    VertexAttrib4sNV = 725 @ 317 => fn(index: GLuint, x: GLshort, y: GLshort, z: GLshort, w: GLshort), "iiiii";
    VertexAttrib4svNV = 726 @ 318 => fn(index: GLuint, v: *const GLshort), "ip";
    VertexAttrib4ubNV = 727 @ 319 => fn(index: GLuint, x: GLubyte, y: GLubyte, z: GLubyte, w: GLubyte), "iiiii";
    VertexAttrib4ubvNV = 728 @ 320 => fn(index: GLuint, v: *const GLubyte), "ip";
    VertexAttribPointerNV = 729 @ 321 => fn(index: GLuint, size: GLint, type_: GLenum, stride: GLsizei, pointer: *const GLvoid), "iiiip";
    VertexAttribs1dvNV = 730 @ 322 => fn(index: GLuint, n: GLsizei, v: *const GLdouble), "iip";
    VertexAttribs1fvNV = 731 @ 323 => fn(index: GLuint, n: GLsizei, v: *const GLfloat), "iip";
    VertexAttribs1svNV = 732 @ 324 => fn(index: GLuint, n: GLsizei, v: *const GLshort), "iip";
    VertexAttribs2dvNV = 733 @ 325 => fn(index: GLuint, n: GLsizei, v: *const GLdouble), "iip";
    VertexAttribs2fvNV = 734 @ 326 => fn(index: GLuint, n: GLsizei, v: *const GLfloat), "iip";
    VertexAttribs2svNV = 735 @ 327 => fn(index: GLuint, n: GLsizei, v: *const GLshort), "iip";
    VertexAttribs3dvNV = 736 @ 328 => fn(index: GLuint, n: GLsizei, v: *const GLdouble), "iip";
    VertexAttribs3fvNV = 737 @ 329 => fn(index: GLuint, n: GLsizei, v: *const GLfloat), "iip";
    VertexAttribs3svNV = 738 @ 330 => fn(index: GLuint, n: GLsizei, v: *const GLshort), "iip";
    VertexAttribs4dvNV = 739 @ 331 => fn(index: GLuint, n: GLsizei, v: *const GLdouble), "iip";
    VertexAttribs4fvNV = 740 @ 332 => fn(index: GLuint, n: GLsizei, v: *const GLfloat), "iip";
    VertexAttribs4svNV = 741 @ 333 => fn(index: GLuint, n: GLsizei, v: *const GLshort), "iip";
    VertexAttribs4ubvNV = 742 @ 334 => fn(index: GLuint, n: GLsizei, v: *const GLubyte), "iip";
    GetTexBumpParameterfvATI = 743 @ 335 => fn(pname: GLenum, param: *mut GLfloat), "ip";
    GetTexBumpParameterivATI = 744 @ 336 => fn(pname: GLenum, param: *mut GLint), "ip";
    TexBumpParameterfvATI = 745 @ 337 => fn(pname: GLenum, param: *const GLfloat), "ip";
    TexBumpParameterivATI = 746 @ 338 => fn(pname: GLenum, param: *const GLint), "ip";
    AlphaFragmentOp1ATI = 747 @ 339 => fn(op: GLenum, dst: GLuint, dstMod: GLuint, arg1: GLuint, arg1Rep: GLuint, arg1Mod: GLuint), "iiiiii";
    AlphaFragmentOp2ATI = 748 @ 340 => fn(op: GLenum, dst: GLuint, dstMod: GLuint, arg1: GLuint, arg1Rep: GLuint, arg1Mod: GLuint, arg2: GLuint, arg2Rep: GLuint, arg2Mod: GLuint), "iiiiiiiii";
    AlphaFragmentOp3ATI = 749 @ 341 => fn(op: GLenum, dst: GLuint, dstMod: GLuint, arg1: GLuint, arg1Rep: GLuint, arg1Mod: GLuint, arg2: GLuint, arg2Rep: GLuint, arg2Mod: GLuint, arg3: GLuint, arg3Rep: GLuint, arg3Mod: GLuint), "iiiiiiiiiiii";
    BeginFragmentShaderATI = 750 @ 342 => fn(), "";
    BindFragmentShaderATI = 751 @ 343 => fn(id: GLuint), "i";
    ColorFragmentOp1ATI = 752 @ 344 => fn(op: GLenum, dst: GLuint, dstMask: GLuint, dstMod: GLuint, arg1: GLuint, arg1Rep: GLuint, arg1Mod: GLuint), "iiiiiii";
    ColorFragmentOp2ATI = 753 @ 345 => fn(op: GLenum, dst: GLuint, dstMask: GLuint, dstMod: GLuint, arg1: GLuint, arg1Rep: GLuint, arg1Mod: GLuint, arg2: GLuint, arg2Rep: GLuint, arg2Mod: GLuint), "iiiiiiiiii";
    ColorFragmentOp3ATI = 754 @ 346 => fn(op: GLenum, dst: GLuint, dstMask: GLuint, dstMod: GLuint, arg1: GLuint, arg1Rep: GLuint, arg1Mod: GLuint, arg2: GLuint, arg2Rep: GLuint, arg2Mod: GLuint, arg3: GLuint, arg3Rep: GLuint, arg3Mod: GLuint), "iiiiiiiiiiiii";
    DeleteFragmentShaderATI = 755 @ 347 => fn(id: GLuint), "i";
    EndFragmentShaderATI = 756 @ 348 => fn(), "";
    GenFragmentShadersATI = 757 @ 349 => fn(range: GLuint) -> GLuint, "i";
    PassTexCoordATI = 758 @ 350 => fn(dst: GLuint, coord: GLuint, swizzle: GLenum), "iii";
    SampleMapATI = 759 @ 351 => fn(dst: GLuint, interp: GLuint, swizzle: GLenum), "iii";
    SetFragmentShaderConstantATI = 760 @ 352 => fn(dst: GLuint, value: *const GLfloat), "ip";
    PointParameteriNV = 761 @ 353 => fn(pname: GLenum, param: GLint), "ii";
    PointParameterivNV = 762 @ 354 => fn(pname: GLenum, params: *const GLint), "ip";
    ActiveStencilFaceEXT = 763 @ 355 => fn(face: GLenum), "i";
    BindVertexArrayAPPLE = 764 @ 356 => fn(array: GLuint), "i";
    DeleteVertexArraysAPPLE = 765 @ 357 => fn(n: GLsizei, arrays: *const GLuint), "ip";
    GenVertexArraysAPPLE = 766 @ 358 => fn(n: GLsizei, arrays: *mut GLuint), "ip";
    IsVertexArrayAPPLE = 767 @ 359 => fn(array: GLuint) -> GLboolean, "i";
    GetProgramNamedParameterdvNV = 768 @ 360 => fn(id: GLuint, len: GLsizei, name: *const GLubyte, params: *mut GLdouble), "iipp";
    GetProgramNamedParameterfvNV = 769 @ 361 => fn(id: GLuint, len: GLsizei, name: *const GLubyte, params: *mut GLfloat), "iipp";
    ProgramNamedParameter4dNV = 770 @ 362 => fn(id: GLuint, len: GLsizei, name: *const GLubyte, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble), "iipdddd";
    ProgramNamedParameter4dvNV = 771 @ 363 => fn(id: GLuint, len: GLsizei, name: *const GLubyte, v: *const GLdouble), "iipp";
    ProgramNamedParameter4fNV = 772 @ 364 => fn(id: GLuint, len: GLsizei, name: *const GLubyte, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat), "iipffff";
    ProgramNamedParameter4fvNV = 773 @ 365 => fn(id: GLuint, len: GLsizei, name: *const GLubyte, v: *const GLfloat), "iipp";
    PrimitiveRestartIndexNV = 774 @ 366 => fn(index: GLuint), "i";
    PrimitiveRestartNV = 775 @ 367 => fn(), "";
    DepthBoundsEXT = 776 @ 368 => fn(zmin: GLclampd, zmax: GLclampd), "dd";
    BlendEquationSeparateEXT = 777 @ 369 => fn(modeRGB: GLenum, modeA: GLenum), "ii";
    BindFramebufferEXT = 778 @ 370 => fn(target: GLenum, framebuffer: GLuint), "ii";
    BindRenderbufferEXT = 779 @ 371 => fn(target: GLenum, renderbuffer: GLuint), "ii";
    CheckFramebufferStatusEXT = 780 @ 372 => fn(target: GLenum) -> GLenum, "i";
    DeleteFramebuffersEXT = 781 @ 373 => fn(n: GLsizei, framebuffers: *const GLuint), "ip";
    DeleteRenderbuffersEXT = 782 @ 374 => fn(n: GLsizei, renderbuffers: *const GLuint), "ip";
    FramebufferRenderbufferEXT = 783 @ 375 => fn(target: GLenum, attachment: GLenum, renderbuffertarget: GLenum, renderbuffer: GLuint), "iiii";
    FramebufferTexture1DEXT = 784 @ 376 => fn(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint), "iiiii";
    FramebufferTexture2DEXT = 785 @ 377 => fn(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint), "iiiii";
    FramebufferTexture3DEXT = 786 @ 378 => fn(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint, zoffset: GLint), "iiiiii";
    GenFramebuffersEXT = 787 @ 379 => fn(n: GLsizei, framebuffers: *mut GLuint), "ip";
    GenRenderbuffersEXT = 788 @ 380 => fn(n: GLsizei, renderbuffers: *mut GLuint), "ip";
    GenerateMipmapEXT = 789 @ 381 => fn(target: GLenum), "i";
    GetFramebufferAttachmentParameterivEXT = 790 @ 382 => fn(target: GLenum, attachment: GLenum, pname: GLenum, params: *mut GLint), "iiip";
    GetRenderbufferParameterivEXT = 791 @ 383 => fn(target: GLenum, pname: GLenum, params: *mut GLint), "iip";
    IsFramebufferEXT = 792 @ 384 => fn(framebuffer: GLuint) -> GLboolean, "i";
    IsRenderbufferEXT = 793 @ 385 => fn(renderbuffer: GLuint) -> GLboolean, "i";
    RenderbufferStorageEXT = 794 @ 386 => fn(target: GLenum, internalformat: GLenum, width: GLsizei, height: GLsizei), "iiii";
    BlitFramebufferEXT = 795 @ 387 => fn(srcX0: GLint, srcY0: GLint, srcX1: GLint, srcY1: GLint, dstX0: GLint, dstY0: GLint, dstX1: GLint, dstY1: GLint, mask: GLbitfield, filter: GLenum), "iiiiiiiiii";
    BufferParameteriAPPLE = 796 @ 388 => fn(target: GLenum, pname: GLenum, param: GLint), "iii";
    FlushMappedBufferRangeAPPLE = 797 @ 389 => fn(target: GLenum, offset: GLintptr, size: GLsizeiptr), "iii";
    BindFragDataLocationEXT = 798 @ 390 => fn(program: GLuint, colorNumber: GLuint, name: *const GLchar), "iip";
    GetFragDataLocationEXT = 799 @ 391 => fn(program: GLuint, name: *const GLchar) -> GLint, "ip";
    GetUniformuivEXT = 800 @ 392 => fn(program: GLuint, location: GLint, params: *mut GLuint), "iip";
    GetVertexAttribIivEXT = 801 @ 393 => fn(index: GLuint, pname: GLenum, params: *mut GLint), "iip";
    GetVertexAttribIuivEXT = 802 @ 394 => fn(index: GLuint, pname: GLenum, params: *mut GLuint), "iip";
    Uniform1uiEXT = 803 @ 395 => fn(location: GLint, v0: GLuint), "ii";
    Uniform1uivEXT = 804 @ 396 => fn(location: GLint, count: GLsizei, value: *const GLuint), "iip";
    Uniform2uiEXT = 805 @ 397 => fn(location: GLint, v0: GLuint, v1: GLuint), "iii";
    Uniform2uivEXT = 806 @ 398 => fn(location: GLint, count: GLsizei, value: *const GLuint), "iip";
    Uniform3uiEXT = 807 @ 399 => fn(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint), "iiii";
    Uniform3uivEXT = 808 @ 400 => fn(location: GLint, count: GLsizei, value: *const GLuint), "iip";
    Uniform4uiEXT = 809 @ 401 => fn(location: GLint, v0: GLuint, v1: GLuint, v2: GLuint, v3: GLuint), "iiiii";
    Uniform4uivEXT = 810 @ 402 => fn(location: GLint, count: GLsizei, value: *const GLuint), "iip";
    VertexAttribI1iEXT = 811 @ 403 => fn(index: GLuint, x: GLint), "ii";
    VertexAttribI1ivEXT = 812 @ 404 => fn(index: GLuint, v: *const GLint), "ip";
    VertexAttribI1uiEXT = 813 @ 405 => fn(index: GLuint, x: GLuint), "ii";
    VertexAttribI1uivEXT = 814 @ 406 => fn(index: GLuint, v: *const GLuint), "ip";
    VertexAttribI2iEXT = 815 @ 407 => fn(index: GLuint, x: GLint, y: GLint), "iii";
    VertexAttribI2ivEXT = 816 @ 408 => fn(index: GLuint, v: *const GLint), "ip";
    VertexAttribI2uiEXT = 817 @ 409 => fn(index: GLuint, x: GLuint, y: GLuint), "iii";
    VertexAttribI2uivEXT = 818 @ 410 => fn(index: GLuint, v: *const GLuint), "ip";
    VertexAttribI3iEXT = 819 @ 411 => fn(index: GLuint, x: GLint, y: GLint, z: GLint), "iiii";
    VertexAttribI3ivEXT = 820 @ 412 => fn(index: GLuint, v: *const GLint), "ip";
    VertexAttribI3uiEXT = 821 @ 413 => fn(index: GLuint, x: GLuint, y: GLuint, z: GLuint), "iiii";
    VertexAttribI3uivEXT = 822 @ 414 => fn(index: GLuint, v: *const GLuint), "ip";
    VertexAttribI4bvEXT = 823 @ 415 => fn(index: GLuint, v: *const GLbyte), "ip";
    VertexAttribI4iEXT = 824 @ 416 => fn(index: GLuint, x: GLint, y: GLint, z: GLint, w: GLint), "iiiii";
    VertexAttribI4ivEXT = 825 @ 417 => fn(index: GLuint, v: *const GLint), "ip";
    VertexAttribI4svEXT = 826 @ 418 => fn(index: GLuint, v: *const GLshort), "ip";
    VertexAttribI4ubvEXT = 827 @ 419 => fn(index: GLuint, v: *const GLubyte), "ip";
    VertexAttribI4uiEXT = 828 @ 420 => fn(index: GLuint, x: GLuint, y: GLuint, z: GLuint, w: GLuint), "iiiii";
    VertexAttribI4uivEXT = 829 @ 421 => fn(index: GLuint, v: *const GLuint), "ip";
    VertexAttribI4usvEXT = 830 @ 422 => fn(index: GLuint, v: *const GLushort), "ip";
    VertexAttribIPointerEXT = 831 @ 423 => fn(index: GLuint, size: GLint, type_: GLenum, stride: GLsizei, pointer: *const GLvoid), "iiiip";
    FramebufferTextureLayerEXT = 832 @ 424 => fn(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint, layer: GLint), "iiiii";
    ColorMaskIndexedEXT = 833 @ 425 => fn(buf: GLuint, r: GLboolean, g: GLboolean, b: GLboolean, a: GLboolean), "iiiii";
    DisableIndexedEXT = 834 @ 426 => fn(target: GLenum, index: GLuint), "ii";
    EnableIndexedEXT = 835 @ 427 => fn(target: GLenum, index: GLuint), "ii";
    GetBooleanIndexedvEXT = 836 @ 428 => fn(value: GLenum, index: GLuint, data: *mut GLboolean), "iip";
    GetIntegerIndexedvEXT = 837 @ 429 => fn(value: GLenum, index: GLuint, data: *mut GLint), "iip";
    IsEnabledIndexedEXT = 838 @ 430 => fn(target: GLenum, index: GLuint) -> GLboolean, "ii";
    ClearColorIiEXT = 839 @ 431 => fn(r: GLint, g: GLint, b: GLint, a: GLint), "iiii";
    ClearColorIuiEXT = 840 @ 432 => fn(r: GLuint, g: GLuint, b: GLuint, a: GLuint), "iiii";
    GetTexParameterIivEXT = 841 @ 433 => fn(target: GLenum, pname: GLenum, params: *mut GLint), "iip";
    GetTexParameterIuivEXT = 842 @ 434 => fn(target: GLenum, pname: GLenum, params: *mut GLuint), "iip";
    TexParameterIivEXT = 843 @ 435 => fn(target: GLenum, pname: GLenum, params: *const GLint), "iip";
    TexParameterIuivEXT = 844 @ 436 => fn(target: GLenum, pname: GLenum, params: *const GLuint), "iip";
    BeginConditionalRenderNV = 845 @ 437 => fn(query: GLuint, mode: GLenum), "ii";
    EndConditionalRenderNV = 846 @ 438 => fn(), "";
    BeginTransformFeedbackEXT = 847 @ 439 => fn(mode: GLenum), "i";
    BindBufferBaseEXT = 848 @ 440 => fn(target: GLenum, index: GLuint, buffer: GLuint), "iii";
    BindBufferOffsetEXT = 849 @ 441 => fn(target: GLenum, index: GLuint, buffer: GLuint, offset: GLintptr), "iiii";
    BindBufferRangeEXT = 850 @ 442 => fn(target: GLenum, index: GLuint, buffer: GLuint, offset: GLintptr, size: GLsizeiptr), "iiiii";
    EndTransformFeedbackEXT = 851 @ 443 => fn(), "";
    GetTransformFeedbackVaryingEXT = 852 @ 444 => fn(program: GLuint, index: GLuint, bufSize: GLsizei, length: *mut GLsizei, size: *mut GLsizei, type_: *mut GLenum, name: *mut GLchar), "iiipppp";
    TransformFeedbackVaryingsEXT = 853 @ 445 => fn(program: GLuint, count: GLsizei, varyings: *mut *const GLchar, bufferMode: GLenum), "iipi";
    ProvokingVertexEXT = 854 @ 446 => fn(mode: GLenum), "i";
    GetTexParameterPointervAPPLE = 855 @ 447 => fn(target: GLenum, pname: GLenum, params: *mut *mut GLvoid), "iip";
    TextureRangeAPPLE = 856 @ 448 => fn(target: GLenum, length: GLsizei, pointer: *mut GLvoid), "iip";
    GetObjectParameterivAPPLE = 857 @ 449 => fn(objectType: GLenum, name: GLuint, pname: GLenum, value: *mut GLint), "iiip";
    ObjectPurgeableAPPLE = 858 @ 450 => fn(objectType: GLenum, name: GLuint, option: GLenum) -> GLenum, "iii";
    ObjectUnpurgeableAPPLE = 859 @ 451 => fn(objectType: GLenum, name: GLuint, option: GLenum) -> GLenum, "iii";
    ActiveProgramEXT = 860 @ 452 => fn(program: GLuint), "i";
    CreateShaderProgramEXT = 861 @ 453 => fn(type_: GLenum, string: *const GLchar) -> GLuint, "ip";
    UseShaderProgramEXT = 862 @ 454 => fn(type_: GLenum, program: GLuint), "ii";
    StencilFuncSeparateATI = 863 @ 455 => fn(frontfunc: GLenum, backfunc: GLenum, ref_: GLint, mask: GLuint), "iiii";
    ProgramEnvParameters4fvEXT = 864 @ 456 => fn(target: GLenum, index: GLuint, count: GLsizei, params: *const GLfloat), "iiip";
    ProgramLocalParameters4fvEXT = 865 @ 457 => fn(target: GLenum, index: GLuint, count: GLsizei, params: *const GLfloat), "iiip";
    GetQueryObjecti64vEXT = 866 @ 458 => fn(id: GLuint, pname: GLenum, params: *mut GLint64EXT), "iip";
    GetQueryObjectui64vEXT = 867 @ 459 => fn(id: GLuint, pname: GLenum, params: *mut GLuint64EXT), "iip";
    EGLImageTargetRenderbufferStorageOES = 868 @ 460 => fn(target: GLenum, writeOffset: *mut GLvoid), "ip";
    EGLImageTargetTexture2DOES = 869 @ 461 => fn(target: GLenum, writeOffset: *mut GLvoid), "ip";
}

const _: () = assert!(crate::entry::layout_is_dense(ENTRIES, STATIC_ENTRY_COUNT, REMAP_TABLE_SIZE));

/// Alternate exported names, as `(alias, canonical)` pairs. An alias shares
/// its canonical entry's slot.
pub const ALIASES: &[(&str, &str)] = &[
    ("ArrayElementEXT", "ArrayElement"),
    ("BindTextureEXT", "BindTexture"),
    ("DrawArraysEXT", "DrawArrays"),
    ("AreTexturesResidentEXT", "AreTexturesResident"),
    ("CopyTexImage1DEXT", "CopyTexImage1D"),
    ("CopyTexImage2DEXT", "CopyTexImage2D"),
    ("CopyTexSubImage1DEXT", "CopyTexSubImage1D"),
    ("CopyTexSubImage2DEXT", "CopyTexSubImage2D"),
    ("DeleteTexturesEXT", "DeleteTextures"),
    ("GenTexturesEXT", "GenTextures"),
    ("GetPointervEXT", "GetPointerv"),
    ("IsTextureEXT", "IsTexture"),
    ("PrioritizeTexturesEXT", "PrioritizeTextures"),
    ("TexSubImage1DEXT", "TexSubImage1D"),
    ("TexSubImage2DEXT", "TexSubImage2D"),
    ("BlendColorEXT", "BlendColor"),
    ("BlendEquationEXT", "BlendEquation"),
    ("DrawRangeElementsEXT", "DrawRangeElements"),
    ("ColorTableSGI", "ColorTable"),
    ("ColorTableEXT", "ColorTable"),
    ("ColorTableParameterfvSGI", "ColorTableParameterfv"),
    ("ColorTableParameterivSGI", "ColorTableParameteriv"),
    ("CopyColorTableSGI", "CopyColorTable"),
    ("GetColorTableSGI", "GetColorTable"),
    ("GetColorTableEXT", "GetColorTable"),
    ("GetColorTableParameterfvSGI", "GetColorTableParameterfv"),
    ("GetColorTableParameterfvEXT", "GetColorTableParameterfv"),
    ("GetColorTableParameterivSGI", "GetColorTableParameteriv"),
    ("GetColorTableParameterivEXT", "GetColorTableParameteriv"),
    ("ColorSubTableEXT", "ColorSubTable"),
    ("CopyColorSubTableEXT", "CopyColorSubTable"),
    ("ConvolutionFilter1DEXT", "ConvolutionFilter1D"),
    ("ConvolutionFilter2DEXT", "ConvolutionFilter2D"),
    ("ConvolutionParameterfEXT", "ConvolutionParameterf"),
    ("ConvolutionParameterfvEXT", "ConvolutionParameterfv"),
    ("ConvolutionParameteriEXT", "ConvolutionParameteri"),
    ("ConvolutionParameterivEXT", "ConvolutionParameteriv"),
    ("CopyConvolutionFilter1DEXT", "CopyConvolutionFilter1D"),
    ("CopyConvolutionFilter2DEXT", "CopyConvolutionFilter2D"),
    ("GetConvolutionFilterEXT", "GetConvolutionFilter"),
    ("GetConvolutionParameterfvEXT", "GetConvolutionParameterfv"),
    ("GetConvolutionParameterivEXT", "GetConvolutionParameteriv"),
    ("GetSeparableFilterEXT", "GetSeparableFilter"),
    ("SeparableFilter2DEXT", "SeparableFilter2D"),
    ("GetHistogramEXT", "GetHistogram"),
    ("GetHistogramParameterfvEXT", "GetHistogramParameterfv"),
    ("GetHistogramParameterivEXT", "GetHistogramParameteriv"),
    ("GetMinmaxEXT", "GetMinmax"),
    ("GetMinmaxParameterfvEXT", "GetMinmaxParameterfv"),
    ("GetMinmaxParameterivEXT", "GetMinmaxParameteriv"),
    ("HistogramEXT", "Histogram"),
    ("MinmaxEXT", "Minmax"),
    ("ResetHistogramEXT", "ResetHistogram"),
    ("ResetMinmaxEXT", "ResetMinmax"),
    ("TexImage3DEXT", "TexImage3D"),
    ("TexSubImage3DEXT", "TexSubImage3D"),
    ("CopyTexSubImage3DEXT", "CopyTexSubImage3D"),
    ("ActiveTexture", "ActiveTextureARB"),
    ("ClientActiveTexture", "ClientActiveTextureARB"),
    ("MultiTexCoord1d", "MultiTexCoord1dARB"),
    ("MultiTexCoord1dv", "MultiTexCoord1dvARB"),
    ("MultiTexCoord1f", "MultiTexCoord1fARB"),
    ("MultiTexCoord1fv", "MultiTexCoord1fvARB"),
    ("MultiTexCoord1i", "MultiTexCoord1iARB"),
    ("MultiTexCoord1iv", "MultiTexCoord1ivARB"),
    ("MultiTexCoord1s", "MultiTexCoord1sARB"),
    ("MultiTexCoord1sv", "MultiTexCoord1svARB"),
    ("MultiTexCoord2d", "MultiTexCoord2dARB"),
    ("MultiTexCoord2dv", "MultiTexCoord2dvARB"),
    ("MultiTexCoord2f", "MultiTexCoord2fARB"),
    ("MultiTexCoord2fv", "MultiTexCoord2fvARB"),
    ("MultiTexCoord2i", "MultiTexCoord2iARB"),
    ("MultiTexCoord2iv", "MultiTexCoord2ivARB"),
    ("MultiTexCoord2s", "MultiTexCoord2sARB"),
    ("MultiTexCoord2sv", "MultiTexCoord2svARB"),
    ("MultiTexCoord3d", "MultiTexCoord3dARB"),
    ("MultiTexCoord3dv", "MultiTexCoord3dvARB"),
    ("MultiTexCoord3f", "MultiTexCoord3fARB"),
    ("MultiTexCoord3fv", "MultiTexCoord3fvARB"),
    ("MultiTexCoord3i", "MultiTexCoord3iARB"),
    ("MultiTexCoord3iv", "MultiTexCoord3ivARB"),
    ("MultiTexCoord3s", "MultiTexCoord3sARB"),
    ("MultiTexCoord3sv", "MultiTexCoord3svARB"),
    ("MultiTexCoord4d", "MultiTexCoord4dARB"),
    ("MultiTexCoord4dv", "MultiTexCoord4dvARB"),
    ("MultiTexCoord4f", "MultiTexCoord4fARB"),
    ("MultiTexCoord4fv", "MultiTexCoord4fvARB"),
    ("MultiTexCoord4i", "MultiTexCoord4iARB"),
    ("MultiTexCoord4iv", "MultiTexCoord4ivARB"),
    ("MultiTexCoord4s", "MultiTexCoord4sARB"),
    ("MultiTexCoord4sv", "MultiTexCoord4svARB"),
    ("StencilOpSeparateATI", "StencilOpSeparate"),
    ("LoadTransposeMatrixd", "LoadTransposeMatrixdARB"),
    ("LoadTransposeMatrixf", "LoadTransposeMatrixfARB"),
    ("MultTransposeMatrixd", "MultTransposeMatrixdARB"),
    ("MultTransposeMatrixf", "MultTransposeMatrixfARB"),
    ("SampleCoverage", "SampleCoverageARB"),
    ("CompressedTexImage1D", "CompressedTexImage1DARB"),
    ("CompressedTexImage2D", "CompressedTexImage2DARB"),
    ("CompressedTexImage3D", "CompressedTexImage3DARB"),
    ("CompressedTexSubImage1D", "CompressedTexSubImage1DARB"),
    ("CompressedTexSubImage2D", "CompressedTexSubImage2DARB"),
    ("CompressedTexSubImage3D", "CompressedTexSubImage3DARB"),
    ("GetCompressedTexImage", "GetCompressedTexImageARB"),
    ("DisableVertexAttribArray", "DisableVertexAttribArrayARB"),
    ("EnableVertexAttribArray", "EnableVertexAttribArrayARB"),
    ("GetVertexAttribdv", "GetVertexAttribdvARB"),
    ("GetVertexAttribfv", "GetVertexAttribfvARB"),
    ("GetVertexAttribiv", "GetVertexAttribivARB"),
    ("ProgramParameter4dNV", "ProgramEnvParameter4dARB"),
    ("ProgramParameter4dvNV", "ProgramEnvParameter4dvARB"),
    ("ProgramParameter4fNV", "ProgramEnvParameter4fARB"),
    ("ProgramParameter4fvNV", "ProgramEnvParameter4fvARB"),
    ("VertexAttrib1d", "VertexAttrib1dARB"),
    ("VertexAttrib1dv", "VertexAttrib1dvARB"),
    ("VertexAttrib1f", "VertexAttrib1fARB"),
    ("VertexAttrib1fv", "VertexAttrib1fvARB"),
    ("VertexAttrib1s", "VertexAttrib1sARB"),
    ("VertexAttrib1sv", "VertexAttrib1svARB"),
    ("VertexAttrib2d", "VertexAttrib2dARB"),
    ("VertexAttrib2dv", "VertexAttrib2dvARB"),
    ("VertexAttrib2f", "VertexAttrib2fARB"),
    ("VertexAttrib2fv", "VertexAttrib2fvARB"),
    ("VertexAttrib2s", "VertexAttrib2sARB"),
    ("VertexAttrib2sv", "VertexAttrib2svARB"),
    ("VertexAttrib3d", "VertexAttrib3dARB"),
    ("VertexAttrib3dv", "VertexAttrib3dvARB"),
    ("VertexAttrib3f", "VertexAttrib3fARB"),
    ("VertexAttrib3fv", "VertexAttrib3fvARB"),
    ("VertexAttrib3s", "VertexAttrib3sARB"),
    ("VertexAttrib3sv", "VertexAttrib3svARB"),
    ("VertexAttrib4Nbv", "VertexAttrib4NbvARB"),
    ("VertexAttrib4Niv", "VertexAttrib4NivARB"),
    ("VertexAttrib4Nsv", "VertexAttrib4NsvARB"),
    ("VertexAttrib4Nub", "VertexAttrib4NubARB"),
    ("VertexAttrib4Nubv", "VertexAttrib4NubvARB"),
    ("VertexAttrib4Nuiv", "VertexAttrib4NuivARB"),
    ("VertexAttrib4Nusv", "VertexAttrib4NusvARB"),
    ("VertexAttrib4bv", "VertexAttrib4bvARB"),
    ("VertexAttrib4d", "VertexAttrib4dARB"),
    ("VertexAttrib4dv", "VertexAttrib4dvARB"),
    ("VertexAttrib4f", "VertexAttrib4fARB"),
    ("VertexAttrib4fv", "VertexAttrib4fvARB"),
    ("VertexAttrib4iv", "VertexAttrib4ivARB"),
    ("VertexAttrib4s", "VertexAttrib4sARB"),
    ("VertexAttrib4sv", "VertexAttrib4svARB"),
    ("VertexAttrib4ubv", "VertexAttrib4ubvARB"),
    ("VertexAttrib4uiv", "VertexAttrib4uivARB"),
    ("VertexAttrib4usv", "VertexAttrib4usvARB"),
    ("VertexAttribPointer", "VertexAttribPointerARB"),
    ("BindBuffer", "BindBufferARB"),
    ("BufferData", "BufferDataARB"),
    ("BufferSubData", "BufferSubDataARB"),
    ("DeleteBuffers", "DeleteBuffersARB"),
    ("GenBuffers", "GenBuffersARB"),
    ("GetBufferParameteriv", "GetBufferParameterivARB"),
    ("GetBufferPointerv", "GetBufferPointervARB"),
    ("GetBufferSubData", "GetBufferSubDataARB"),
    ("IsBuffer", "IsBufferARB"),
    ("MapBuffer", "MapBufferARB"),
    ("UnmapBuffer", "UnmapBufferARB"),
    ("BeginQuery", "BeginQueryARB"),
    ("DeleteQueries", "DeleteQueriesARB"),
    ("EndQuery", "EndQueryARB"),
    ("GenQueries", "GenQueriesARB"),
    ("GetQueryObjectiv", "GetQueryObjectivARB"),
    ("GetQueryObjectuiv", "GetQueryObjectuivARB"),
    ("GetQueryiv", "GetQueryivARB"),
    ("IsQuery", "IsQueryARB"),
    ("CompileShader", "CompileShaderARB"),
    ("GetActiveUniform", "GetActiveUniformARB"),
    ("GetShaderSource", "GetShaderSourceARB"),
    ("GetUniformLocation", "GetUniformLocationARB"),
    ("GetUniformfv", "GetUniformfvARB"),
    ("GetUniformiv", "GetUniformivARB"),
    ("LinkProgram", "LinkProgramARB"),
    ("ShaderSource", "ShaderSourceARB"),
    ("Uniform1f", "Uniform1fARB"),
    ("Uniform1fv", "Uniform1fvARB"),
    ("Uniform1i", "Uniform1iARB"),
    ("Uniform1iv", "Uniform1ivARB"),
    ("Uniform2f", "Uniform2fARB"),
    ("Uniform2fv", "Uniform2fvARB"),
    ("Uniform2i", "Uniform2iARB"),
    ("Uniform2iv", "Uniform2ivARB"),
    ("Uniform3f", "Uniform3fARB"),
    ("Uniform3fv", "Uniform3fvARB"),
    ("Uniform3i", "Uniform3iARB"),
    ("Uniform3iv", "Uniform3ivARB"),
    ("Uniform4f", "Uniform4fARB"),
    ("Uniform4fv", "Uniform4fvARB"),
    ("Uniform4i", "Uniform4iARB"),
    ("Uniform4iv", "Uniform4ivARB"),
    ("UniformMatrix2fv", "UniformMatrix2fvARB"),
    ("UniformMatrix3fv", "UniformMatrix3fvARB"),
    ("UniformMatrix4fv", "UniformMatrix4fvARB"),
    ("UseProgram", "UseProgramObjectARB"),
    ("ValidateProgram", "ValidateProgramARB"),
    ("BindAttribLocation", "BindAttribLocationARB"),
    ("GetActiveAttrib", "GetActiveAttribARB"),
    ("GetAttribLocation", "GetAttribLocationARB"),
    ("DrawBuffers", "DrawBuffersARB"),
    ("DrawBuffersATI", "DrawBuffersARB"),
    ("DrawBuffersNV", "DrawBuffersARB"),
    ("RenderbufferStorageMultisampleEXT", "RenderbufferStorageMultisample"),
    ("SampleMaskEXT", "SampleMaskSGIS"),
    ("SamplePatternEXT", "SamplePatternSGIS"),
    ("PointParameterf", "PointParameterfEXT"),
    ("PointParameterfARB", "PointParameterfEXT"),
    ("PointParameterfSGIS", "PointParameterfEXT"),
    ("PointParameterfv", "PointParameterfvEXT"),
    ("PointParameterfvARB", "PointParameterfvEXT"),
    ("PointParameterfvSGIS", "PointParameterfvEXT"),
    ("SecondaryColor3b", "SecondaryColor3bEXT"),
    ("SecondaryColor3bv", "SecondaryColor3bvEXT"),
    ("SecondaryColor3d", "SecondaryColor3dEXT"),
    ("SecondaryColor3dv", "SecondaryColor3dvEXT"),
    ("SecondaryColor3f", "SecondaryColor3fEXT"),
    ("SecondaryColor3fv", "SecondaryColor3fvEXT"),
    ("SecondaryColor3i", "SecondaryColor3iEXT"),
    ("SecondaryColor3iv", "SecondaryColor3ivEXT"),
    ("SecondaryColor3s", "SecondaryColor3sEXT"),
    ("SecondaryColor3sv", "SecondaryColor3svEXT"),
    ("SecondaryColor3ub", "SecondaryColor3ubEXT"),
    ("SecondaryColor3ubv", "SecondaryColor3ubvEXT"),
    ("SecondaryColor3ui", "SecondaryColor3uiEXT"),
    ("SecondaryColor3uiv", "SecondaryColor3uivEXT"),
    ("SecondaryColor3us", "SecondaryColor3usEXT"),
    ("SecondaryColor3usv", "SecondaryColor3usvEXT"),
    ("SecondaryColorPointer", "SecondaryColorPointerEXT"),
    ("MultiDrawArrays", "MultiDrawArraysEXT"),
    ("MultiDrawElements", "MultiDrawElementsEXT"),
    ("FogCoordPointer", "FogCoordPointerEXT"),
    ("FogCoordd", "FogCoorddEXT"),
    ("FogCoorddv", "FogCoorddvEXT"),
    ("FogCoordf", "FogCoordfEXT"),
    ("FogCoordfv", "FogCoordfvEXT"),
    ("BlendFuncSeparate", "BlendFuncSeparateEXT"),
    ("BlendFuncSeparateINGR", "BlendFuncSeparateEXT"),
    ("WindowPos2d", "WindowPos2dMESA"),
    ("WindowPos2dARB", "WindowPos2dMESA"),
    ("WindowPos2dv", "WindowPos2dvMESA"),
    ("WindowPos2dvARB", "WindowPos2dvMESA"),
    ("WindowPos2f", "WindowPos2fMESA"),
    ("WindowPos2fARB", "WindowPos2fMESA"),
    ("WindowPos2fv", "WindowPos2fvMESA"),
    ("WindowPos2fvARB", "WindowPos2fvMESA"),
    ("WindowPos2i", "WindowPos2iMESA"),
    ("WindowPos2iARB", "WindowPos2iMESA"),
    ("WindowPos2iv", "WindowPos2ivMESA"),
    ("WindowPos2ivARB", "WindowPos2ivMESA"),
    ("WindowPos2s", "WindowPos2sMESA"),
    ("WindowPos2sARB", "WindowPos2sMESA"),
    ("WindowPos2sv", "WindowPos2svMESA"),
    ("WindowPos2svARB", "WindowPos2svMESA"),
    ("WindowPos3d", "WindowPos3dMESA"),
    ("WindowPos3dARB", "WindowPos3dMESA"),
    ("WindowPos3dv", "WindowPos3dvMESA"),
    ("WindowPos3dvARB", "WindowPos3dvMESA"),
    ("WindowPos3f", "WindowPos3fMESA"),
    ("WindowPos3fARB", "WindowPos3fMESA"),
    ("WindowPos3fv", "WindowPos3fvMESA"),
    ("WindowPos3fvARB", "WindowPos3fvMESA"),
    ("WindowPos3i", "WindowPos3iMESA"),
    ("WindowPos3iARB", "WindowPos3iMESA"),
    ("WindowPos3iv", "WindowPos3ivMESA"),
    ("WindowPos3ivARB", "WindowPos3ivMESA"),
    ("WindowPos3s", "WindowPos3sMESA"),
    ("WindowPos3sARB", "WindowPos3sMESA"),
    ("WindowPos3sv", "WindowPos3svMESA"),
    ("WindowPos3svARB", "WindowPos3svMESA"),
    ("BindProgramARB", "BindProgramNV"),
    ("DeleteProgramsARB", "DeleteProgramsNV"),
    ("GenProgramsARB", "GenProgramsNV"),
    ("GetVertexAttribPointerv", "GetVertexAttribPointervNV"),
    ("GetVertexAttribPointervARB", "GetVertexAttribPointervNV"),
    ("IsProgramARB", "IsProgramNV"),
    ("PointParameteri", "PointParameteriNV"),
    ("PointParameteriv", "PointParameterivNV"),
    ("DeleteVertexArrays", "DeleteVertexArraysAPPLE"),
    ("IsVertexArray", "IsVertexArrayAPPLE"),
    ("PrimitiveRestartIndex", "PrimitiveRestartIndexNV"),
    ("BlendEquationSeparate", "BlendEquationSeparateEXT"),
    ("BlendEquationSeparateATI", "BlendEquationSeparateEXT"),
    ("BindFramebuffer", "BindFramebufferEXT"),
    ("BindRenderbuffer", "BindRenderbufferEXT"),
    ("CheckFramebufferStatus", "CheckFramebufferStatusEXT"),
    ("DeleteFramebuffers", "DeleteFramebuffersEXT"),
    ("DeleteRenderbuffers", "DeleteRenderbuffersEXT"),
    ("FramebufferRenderbuffer", "FramebufferRenderbufferEXT"),
    ("FramebufferTexture1D", "FramebufferTexture1DEXT"),
    ("FramebufferTexture2D", "FramebufferTexture2DEXT"),
    ("FramebufferTexture3D", "FramebufferTexture3DEXT"),
    ("GenFramebuffers", "GenFramebuffersEXT"),
    ("GenRenderbuffers", "GenRenderbuffersEXT"),
    ("GenerateMipmap", "GenerateMipmapEXT"),
    ("GetFramebufferAttachmentParameteriv", "GetFramebufferAttachmentParameterivEXT"),
    ("GetRenderbufferParameteriv", "GetRenderbufferParameterivEXT"),
    ("IsFramebuffer", "IsFramebufferEXT"),
    ("IsRenderbuffer", "IsRenderbufferEXT"),
    ("RenderbufferStorage", "RenderbufferStorageEXT"),
    ("BlitFramebuffer", "BlitFramebufferEXT"),
    ("BindFragDataLocation", "BindFragDataLocationEXT"),
    ("GetFragDataLocation", "GetFragDataLocationEXT"),
    ("GetUniformuiv", "GetUniformuivEXT"),
    ("GetVertexAttribIiv", "GetVertexAttribIivEXT"),
    ("GetVertexAttribIuiv", "GetVertexAttribIuivEXT"),
    ("Uniform1ui", "Uniform1uiEXT"),
    ("Uniform1uiv", "Uniform1uivEXT"),
    ("Uniform2ui", "Uniform2uiEXT"),
    ("Uniform2uiv", "Uniform2uivEXT"),
    ("Uniform3ui", "Uniform3uiEXT"),
    ("Uniform3uiv", "Uniform3uivEXT"),
    ("Uniform4ui", "Uniform4uiEXT"),
    ("Uniform4uiv", "Uniform4uivEXT"),
    ("VertexAttribI1i", "VertexAttribI1iEXT"),
    ("VertexAttribI1iv", "VertexAttribI1ivEXT"),
    ("VertexAttribI1ui", "VertexAttribI1uiEXT"),
    ("VertexAttribI1uiv", "VertexAttribI1uivEXT"),
    ("VertexAttribI2i", "VertexAttribI2iEXT"),
    ("VertexAttribI2iv", "VertexAttribI2ivEXT"),
    ("VertexAttribI2ui", "VertexAttribI2uiEXT"),
    ("VertexAttribI2uiv", "VertexAttribI2uivEXT"),
    ("VertexAttribI3i", "VertexAttribI3iEXT"),
    ("VertexAttribI3iv", "VertexAttribI3ivEXT"),
    ("VertexAttribI3ui", "VertexAttribI3uiEXT"),
    ("VertexAttribI3uiv", "VertexAttribI3uivEXT"),
    ("VertexAttribI4bv", "VertexAttribI4bvEXT"),
    ("VertexAttribI4i", "VertexAttribI4iEXT"),
    ("VertexAttribI4iv", "VertexAttribI4ivEXT"),
    ("VertexAttribI4sv", "VertexAttribI4svEXT"),
    ("VertexAttribI4ubv", "VertexAttribI4ubvEXT"),
    ("VertexAttribI4ui", "VertexAttribI4uiEXT"),
    ("VertexAttribI4uiv", "VertexAttribI4uivEXT"),
    ("VertexAttribI4usv", "VertexAttribI4usvEXT"),
    ("VertexAttribIPointer", "VertexAttribIPointerEXT"),
    ("FramebufferTextureLayer", "FramebufferTextureLayerEXT"),
    ("FramebufferTextureLayerARB", "FramebufferTextureLayerEXT"),
    ("ColorMaski", "ColorMaskIndexedEXT"),
    ("Disablei", "DisableIndexedEXT"),
    ("Enablei", "EnableIndexedEXT"),
    ("GetBooleani_v", "GetBooleanIndexedvEXT"),
    ("GetIntegeri_v", "GetIntegerIndexedvEXT"),
    ("IsEnabledi", "IsEnabledIndexedEXT"),
    ("GetTexParameterIiv", "GetTexParameterIivEXT"),
    ("GetTexParameterIuiv", "GetTexParameterIuivEXT"),
    ("TexParameterIiv", "TexParameterIivEXT"),
    ("TexParameterIuiv", "TexParameterIuivEXT"),
    ("BeginConditionalRender", "BeginConditionalRenderNV"),
    ("EndConditionalRender", "EndConditionalRenderNV"),
    ("BeginTransformFeedback", "BeginTransformFeedbackEXT"),
    ("BindBufferBase", "BindBufferBaseEXT"),
    ("BindBufferRange", "BindBufferRangeEXT"),
    ("EndTransformFeedback", "EndTransformFeedbackEXT"),
    ("GetTransformFeedbackVarying", "GetTransformFeedbackVaryingEXT"),
    ("TransformFeedbackVaryings", "TransformFeedbackVaryingsEXT"),
    ("ProvokingVertex", "ProvokingVertexEXT"),
];
