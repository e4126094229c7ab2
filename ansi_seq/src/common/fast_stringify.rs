// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Trait for building escape sequences into a single buffer. See [`FastStringify`]
//! and [`BufTextStorage`] for details.

use std::fmt::{Display, Formatter, Result};

/// Build the string form of a sequence in one buffer, then hand it to the formatter in
/// a single [`write_str`] call.
///
/// This trait requires [`Display`] as a supertrait. Types that implement it get their
/// [`Display`] impl from [`generate_impl_display_for_fast_stringify!`], so
/// `to_string()`, `format!` and `write!` on an [`std::io::Write`] sink all produce the
/// exact same bytes.
///
/// # How to implement
///
/// ```rust
/// use ansi_seq::{BufTextStorage, FastStringify, generate_impl_display_for_fast_stringify};
/// use std::fmt::Result;
///
/// #[derive(Debug)]
/// struct Bell;
///
/// impl FastStringify for Bell {
///     fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result {
///         acc.push('\x07');
///         Ok(())
///     }
/// }
///
/// generate_impl_display_for_fast_stringify!(Bell);
///
/// assert_eq!(Bell.to_string(), "\x07");
/// ```
///
/// Use [`push_str`] and [`push`] for literal pieces. Reach for [`write!`] only when a
/// number has to be rendered.
///
/// [`write_str`]: std::fmt::Formatter::write_str
/// [`push_str`]: String::push_str
/// [`push`]: String::push
/// [`write!`]: std::write
/// [`generate_impl_display_for_fast_stringify!`]: crate::generate_impl_display_for_fast_stringify
#[rustfmt::skip]
pub trait FastStringify: Display {
    /// Write the sequence to the buffer.
    ///
    /// # Errors
    /// Returns an error if writing to the buffer fails (formatting error).
    fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result;

    /// Write the buffer to formatter. Call from [`Display::fmt`] after
    /// [`write_to_buf`].
    ///
    /// # Errors
    /// Returns an error if writing to the formatter fails (formatting error).
    ///
    /// [`write_to_buf`]: FastStringify::write_to_buf
    fn write_buf_to_fmt(&self, acc: &BufTextStorage, f: &mut Formatter<'_>) -> Result {
        f.write_str(acc)
    }
}

/// Buffer for building sequences.
///
/// Every buffer is created fresh in a [`Display::fmt`] call and dropped right after, and
/// the output size depends on the caller's content. Plain [`String`] fits that better
/// than an inline small-string type.
pub type BufTextStorage = String;

/// Implement [`Display`] for a type that implements [`FastStringify`].
#[macro_export]
macro_rules! generate_impl_display_for_fast_stringify {
    ($type:ty) => {
        impl ::std::fmt::Display for $type {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut acc = $crate::BufTextStorage::new();
                $crate::FastStringify::write_to_buf(self, &mut acc)?;
                $crate::FastStringify::write_buf_to_fmt(self, &acc, f)
            }
        }
    };
}
