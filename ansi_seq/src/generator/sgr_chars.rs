// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Self-terminating styled spans: `ESC [ param m` + content + `ESC [ 0 m`.
//!
//! Every span resets all attributes at its end, so spans can be concatenated or nested
//! inside plain text without tracking any style state. The flip side is that nesting
//! one span inside another resets the outer style at the inner span's end.
//!
//! ```rust
//! use ansi_seq::{SgrParam, sgr_chars};
//!
//! let warning = sgr_chars::with_params("careful", [SgrParam::BOLD, SgrParam::FOREGROUND_YELLOW]);
//! assert_eq!(warning, "\x1b[1;33mcareful\x1b[0m");
//! ```

use crate::{AnsiColor, BufTextStorage, ColorSupport, FastStringify, SgrParam,
            constants::{CSI_START, SGR_RESET_CODE, SGR_SET_GRAPHICS},
            global_color_support};
use const_format::concatcp;
use std::{borrow::Borrow,
          fmt::{Display, Formatter, Result, Write}};

/// `ESC [ 0 m`, reset all attributes.
pub const RESET: &str = concatcp!(CSI_START, SGR_RESET_CODE, SGR_SET_GRAPHICS);

/// The value form of a styled span. Rendering it produces the same bytes as
/// [`with_param`], without building an intermediate [`String`] when it is written
/// straight into a formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledContent<T: Display> {
    pub param: SgrParam,
    pub content: T,
}

impl<T: Display> StyledContent<T> {
    #[must_use]
    pub fn new(content: T, param: SgrParam) -> Self { Self { param, content } }
}

impl<T: Display> FastStringify for StyledContent<T> {
    fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result {
        acc.push_str(CSI_START);
        acc.push_str(self.param.value());
        acc.push(SGR_SET_GRAPHICS);
        write!(acc, "{}", self.content)?;
        acc.push_str(RESET);
        Ok(())
    }
}

impl<T: Display> Display for StyledContent<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut acc = BufTextStorage::new();
        self.write_to_buf(&mut acc)?;
        self.write_buf_to_fmt(&acc, f)
    }
}

/// `ESC [ param m` + `content` + `ESC [ 0 m`.
#[must_use]
pub fn with_param(content: impl Display, param: &SgrParam) -> String {
    StyledContent::new(content, param.clone()).to_string()
}

/// Same as [`with_param`] with the params joined by [`SgrParam::concat`].
#[must_use]
pub fn with_params(
    content: impl Display,
    params: impl IntoIterator<Item = impl Borrow<SgrParam>>,
) -> String {
    StyledContent::new(content, SgrParam::concat(params)).to_string()
}

/// [`with_param`] unless [`global_color_support::detect()`] says the terminal has no
/// color support, in which case `content` is returned unstyled.
#[must_use]
pub fn with_param_if_supported(content: impl Display, param: &SgrParam) -> String {
    match global_color_support::detect() {
        ColorSupport::NoColor => content.to_string(),
        ColorSupport::Truecolor | ColorSupport::Ansi256 | ColorSupport::Grayscale => {
            with_param(content, param)
        }
    }
}

macro_rules! generate_basic_color_fns {
    ($($color:ident => $fg_fn:ident, $bg_fn:ident);* $(;)?) => {
        $(
            #[doc = concat!("Foreground ", stringify!($color), ", bright when `bright` is set.")]
            #[must_use]
            pub fn $fg_fn(content: impl Display, bright: bool) -> String {
                with_param(content, &SgrParam::foreground(AnsiColor::$color, bright))
            }

            #[doc = concat!("Background ", stringify!($color), ", bright when `bright` is set.")]
            #[must_use]
            pub fn $bg_fn(content: impl Display, bright: bool) -> String {
                with_param(content, &SgrParam::background(AnsiColor::$color, bright))
            }
        )*
    };
}

generate_basic_color_fns! {
    Black   => foreground_black,   background_black;
    Red     => foreground_red,     background_red;
    Green   => foreground_green,   background_green;
    Yellow  => foreground_yellow,  background_yellow;
    Blue    => foreground_blue,    background_blue;
    Magenta => foreground_magenta, background_magenta;
    Cyan    => foreground_cyan,    background_cyan;
    White   => foreground_white,   background_white;
}

#[must_use]
pub fn foreground_default(content: impl Display) -> String {
    with_param(content, &SgrParam::FOREGROUND_DEFAULT)
}

#[must_use]
pub fn background_default(content: impl Display) -> String {
    with_param(content, &SgrParam::BACKGROUND_DEFAULT)
}
