//! GLSL-style swizzling
//!
//! A pattern string picks one source for each output component:
//! - `x`/`r`, `y`/`g`, `z`/`b`, `w`/`a`: a component of the vector being read
//! - `_`: keep the base vector's component at that position
//! - `*`: the negated base component
//! - `1`, `0`, `-`: the constants 1, 0 and -1
//!
//! Narrower vectors can be read by extending them first (`v.extend(0.0)`).

use glam::{Vec2, Vec3, Vec4};

use crate::error::{Error, Result};

fn component(read: Vec4, selector: char, current: f32) -> Result<f32> {
    match selector {
        'x' | 'r' => Ok(read.x),
        'y' | 'g' => Ok(read.y),
        'z' | 'b' => Ok(read.z),
        'w' | 'a' => Ok(read.w),
        '_' => Ok(current),
        '*' => Ok(-current),
        '1' => Ok(1.0),
        '0' => Ok(0.0),
        '-' => Ok(-1.0),
        other => Err(Error::invalid(format!(
            "unknown swizzle component '{other}'"
        ))),
    }
}

fn read_components<const N: usize>(read: Vec4, pattern: &str, base: Vec4) -> Result<[f32; N]> {
    let selectors: Vec<char> = pattern.chars().collect();
    if selectors.len() != N {
        return Err(Error::invalid(format!(
            "swizzle pattern '{pattern}' must have exactly {N} components"
        )));
    }
    let mut out = [0.0; N];
    for (i, selector) in selectors.into_iter().enumerate() {
        out[i] = component(read, selector, base[i])?;
    }
    Ok(out)
}

/// Swizzle into a `Vec2`; `_` and `*` refer to `read` itself.
pub fn vec2(read: Vec4, pattern: &str) -> Result<Vec2> {
    vec2_onto(read, pattern, read)
}

/// Swizzle into a `Vec2`; `_` and `*` refer to `base`.
pub fn vec2_onto(read: Vec4, pattern: &str, base: Vec4) -> Result<Vec2> {
    read_components::<2>(read, pattern, base).map(Vec2::from_array)
}

pub fn vec3(read: Vec4, pattern: &str) -> Result<Vec3> {
    vec3_onto(read, pattern, read)
}

pub fn vec3_onto(read: Vec4, pattern: &str, base: Vec4) -> Result<Vec3> {
    read_components::<3>(read, pattern, base).map(Vec3::from_array)
}

pub fn vec4(read: Vec4, pattern: &str) -> Result<Vec4> {
    vec4_onto(read, pattern, read)
}

pub fn vec4_onto(read: Vec4, pattern: &str, base: Vec4) -> Result<Vec4> {
    read_components::<4>(read, pattern, base).map(Vec4::from_array)
}
