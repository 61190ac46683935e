//! Decoder test fixtures and shared helpers.

use crate::mesh::Mesh;
use crate::obj::decode_obj_str;
use crate::options::DecodeOptions;


/// Decode with default options, expecting no fatal error.
pub(super) fn decode(text: &str) -> Mesh {
    decode_obj_str(text, &mut DecodeOptions::default()).expect("decode failed")
}

/// Decode while capturing every diagnostic.
pub(super) fn decode_with_diagnostics(text: &str) -> (Mesh, Vec<String>) {
    let mut seen = Vec::new();
    let mut sink = |msg: &str| seen.push(msg.to_string());
    let mut options = DecodeOptions {
        diagnostics: Some(&mut sink),
        ..Default::default()
    };
    let mesh = decode_obj_str(text, &mut options).expect("decode failed");
    drop(options);
    (mesh, seen)
}

/// A textured cube with relative indices throughout.
pub(super) const CUBE_OBJ: &str = "
# texture_cube.obj

mtllib texture_cube.mtl

o cube

# square bottom
v -1 -1 -1
v -1 -1 1
v 1 -1 1
v 1 -1 -1

# square top
v -1 1 -1
v -1 1 1
v 1 1 1
v 1 1 -1

# uv coord

# red -3
vt 0 0

# green -2
vt .5 0

# blue -1
vt 1 0

# normal coord

# down -6
vn 0 -1 0

# up -5
vn 0 1 0

# right -4
vn 1 0 0

# left -3
vn -1 0 0

# front -2
vn 0 0 1

# back -1
vn 0 0 -1

usemtl 3-pixel-rgb

# face down (green -2)
f -6/-2/-6 -7/-2/-6 -8/-2/-6
f -8/-2/-6 -5/-2/-6 -6/-2/-6

# face up (green -2)
f -1/-2/-5 -4/-2/-5 -3/-2/-5
f -3/-2/-5 -2/-2/-5 -1/-2/-5

# face right (red -3)
f -5/-3/-4 -1/-3/-4 -2/-3/-4
f -2/-3/-4 -6/-3/-4 -5/-3/-4

# face left (red -3)
f -7/-3/-3 -3/-3/-3 -4/-3/-3
f -4/-3/-3 -8/-3/-3 -7/-3/-3

# face front (blue -1)
f -6/-1/-2 -2/-1/-2 -3/-1/-2
f -3/-1/-2 -7/-1/-2 -6/-1/-2

# face back (blue -1)
f -8/-1/-1 -4/-1/-1 -1/-1/-1
f -1/-1/-1 -5/-1/-1 -8/-1/-1
";

pub(super) const CUBE_STRIDE_SIZE: usize = 32;
pub(super) const CUBE_STRIDE_OFFSET_POSITION: usize = 0;
pub(super) const CUBE_STRIDE_OFFSET_TEXTURE: usize = 12;
pub(super) const CUBE_STRIDE_OFFSET_NORMAL: usize = 20;

#[rustfmt::skip]
pub(super) const CUBE_INDICES: [u32; 36] = [
    0, 1, 2, 2, 3, 0, 4, 5, 6, 6, 7, 4, 8, 9, 10, 10, 11, 8,
    12, 13, 14, 14, 15, 12, 16, 17, 18, 18, 19, 16, 20, 21, 22, 22, 23, 20,
];

#[rustfmt::skip]
pub(super) const CUBE_COORD: [f32; 192] = [
    1.0, -1.0, 1.0, 0.5, 0.0, 0.0, -1.0, 0.0,
    -1.0, -1.0, 1.0, 0.5, 0.0, 0.0, -1.0, 0.0,
    -1.0, -1.0, -1.0, 0.5, 0.0, 0.0, -1.0, 0.0,
    1.0, -1.0, -1.0, 0.5, 0.0, 0.0, -1.0, 0.0,
    1.0, 1.0, -1.0, 0.5, 0.0, 0.0, 1.0, 0.0,
    -1.0, 1.0, -1.0, 0.5, 0.0, 0.0, 1.0, 0.0,
    -1.0, 1.0, 1.0, 0.5, 0.0, 0.0, 1.0, 0.0,
    1.0, 1.0, 1.0, 0.5, 0.0, 0.0, 1.0, 0.0,
    1.0, -1.0, -1.0, 0.0, 0.0, 1.0, 0.0, 0.0,
    1.0, 1.0, -1.0, 0.0, 0.0, 1.0, 0.0, 0.0,
    1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0,
    1.0, -1.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0,
    -1.0, -1.0, 1.0, 0.0, 0.0, -1.0, 0.0, 0.0,
    -1.0, 1.0, 1.0, 0.0, 0.0, -1.0, 0.0, 0.0,
    -1.0, 1.0, -1.0, 0.0, 0.0, -1.0, 0.0, 0.0,
    -1.0, -1.0, -1.0, 0.0, 0.0, -1.0, 0.0, 0.0,
    1.0, -1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0,
    1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0,
    -1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0,
    -1.0, -1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 1.0,
    -1.0, -1.0, -1.0, 1.0, 0.0, 0.0, 0.0, -1.0,
    -1.0, 1.0, -1.0, 1.0, 0.0, 0.0, 0.0, -1.0,
    1.0, 1.0, -1.0, 1.0, 0.0, 0.0, 0.0, -1.0,
    1.0, -1.0, -1.0, 1.0, 0.0, 0.0, 0.0, -1.0,
];

/// Relative and absolute indices mixed; the repeats must weld.
pub(super) const RELATIVE_OBJ: &str = "
o relative_test
v 1 1 1
v 2 2 2
v 3 3 3
f 1 2 3
# this line should affect indices, but not vertex array
f -3 -2 -1
v 4 4 4
v 5 5 5
v 6 6 6
f 4 5 6
# this line should affect indices, but not vertex array
f -3 -2 -1
# these lines should affect indices, but not vertex array
f 1 2 3
f -6 -5 -4
";

pub(super) const RELATIVE_INDICES: [u32; 18] =
    [0, 1, 2, 0, 1, 2, 3, 4, 5, 3, 4, 5, 0, 1, 2, 0, 1, 2];

#[rustfmt::skip]
pub(super) const RELATIVE_COORD: [f32; 18] = [
    1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0,
    4.0, 4.0, 4.0, 5.0, 5.0, 5.0, 6.0, 6.0, 6.0,
];

/// Face preceding the vertex definitions it references.
pub(super) const FORWARD_OBJ: &str = "
o forward_vertices_test
# face pointing at vertices defined later in the stream;
# pass 1 pre-loads the component arrays so this resolves
f 1 2 3
v 1 1 1
v 2 2 2
v 3 3 3
";

pub(super) const FORWARD_INDICES: [u32; 3] = [0, 1, 2];
pub(super) const FORWARD_COORD: [f32; 9] = [1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 3.0];

/// `v//n` references: position and normal, no texture.
pub(super) const SKIPPED_UV_OBJ: &str = "
o skipped_uv

v 1 1 1
v 2 2 2
v 3 3 3

vn 1 0 0
vn 0 1 0
vn 0 0 1

f 1//1 2//2 3//3
";

pub(super) const SKIPPED_UV_INDICES: [u32; 3] = [0, 1, 2];

#[rustfmt::skip]
pub(super) const SKIPPED_UV_COORD: [f32; 18] = [
    1.0, 1.0, 1.0, 1.0, 0.0, 0.0,
    2.0, 2.0, 2.0, 0.0, 1.0, 0.0,
    3.0, 3.0, 3.0, 0.0, 0.0, 1.0,
];

/// Same as [`SKIPPED_UV_OBJ`] but with texture coordinates present in the
/// file and skipped by every reference.
pub(super) const SKIPPED_UV2_OBJ: &str = "
o skipped_uv

v 1 1 1
v 2 2 2
v 3 3 3

vt 0 0
vt .5 .5
vt 1 1

vn 1 0 0
vn 0 1 0
vn 0 0 1

f 1//1 2//2 3//3
";
