//! Compile-time probe for "can this value be rendered as text?".
//!
//! Diagnostic output of a [`ValueOrError`](crate::ValueOrError) needs to
//! print the contained value when it can and fall back to a placeholder when
//! it cannot. Stable Rust has no way to ask "does `T: Display`?" from
//! inside generic code, so value types opt in through [`Render`]: the
//! associated constant is the probe, resolved at compile time per type.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::code::ErrorCode;

/// Written in place of a value whose type cannot render itself.
pub const VALUE_PLACEHOLDER: &str = "<value>";

/// Written for an empty container.
pub const EMPTY_MARKER: &str = "<empty>";

/// Opt-in rendering capability.
///
/// `impl Render for MyType {}` registers a type as *not* renderable. Types
/// with a `Display` implementation use [`render_with_display!`]; types with
/// a bespoke text form set `RENDERABLE = true` and override [`Render::render`].
///
/// [`render_with_display!`]: crate::render_with_display
pub trait Render {
    const RENDERABLE: bool = false;

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(VALUE_PLACEHOLDER)
    }
}

/// The probe itself.
#[must_use]
pub const fn is_renderable<T: Render + ?Sized>() -> bool {
    T::RENDERABLE
}

/// Marks one or more `Display` types as renderable.
#[macro_export]
macro_rules! render_with_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Render for $ty {
                const RENDERABLE: bool = true;

                fn render(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    ::core::fmt::Display::fmt(self, f)
                }
            }
        )+
    };
}

crate::render_with_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str,
    String, ErrorCode,
);

impl Render for Cow<'_, str> {
    const RENDERABLE: bool = true;

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl<T: Render + ?Sized> Render for &T {
    const RENDERABLE: bool = T::RENDERABLE;

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    const RENDERABLE: bool = T::RENDERABLE;

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render + ?Sized> Render for Rc<T> {
    const RENDERABLE: bool = T::RENDERABLE;

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render + ?Sized> Render for Arc<T> {
    const RENDERABLE: bool = T::RENDERABLE;

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

// Collections have no canonical text form.
impl Render for () {}
impl<T> Render for Vec<T> {}
impl<T> Render for Option<T> {}
impl<T> Render for [T] {}
impl<T, const N: usize> Render for [T; N] {}
