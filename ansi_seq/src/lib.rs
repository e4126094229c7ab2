// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

//! # `ansi_seq`
//!
//! Build the byte sequences that drive an ANSI / VT100 / ECMA-48 terminal, as plain
//! [`String`]s or `&'static str` constants. Nothing here writes to a terminal, parses
//! input, or keeps any terminal state. You get bytes, you decide where they go.
//!
//! The builders are layered the way the sequences themselves are:
//!
//! | layer             | module          | example                                   |
//! |-------------------|-----------------|-------------------------------------------|
//! | control chars     | [`ctl_chars`]   | [`ctl_chars::BELL`] is `"\x07"`           |
//! | ESC sequences     | [`esc_chars`]   | [`esc_chars::RESET`] is `"\x1bc"`         |
//! | CSI sequences     | [`csi_chars`]   | `csi_chars::cursor_up(3)` is `"\x1b[3A"`  |
//! | SGR styled spans  | [`sgr_chars`]   | `sgr_chars::with_param("hi", &SgrParam::BOLD)` is `"\x1b[1mhi\x1b[0m"` |
//!
//! ```rust
//! use ansi_seq::{SgrParam, csi_chars, sgr_chars};
//!
//! let mut screen = String::new();
//! screen.push_str(csi_chars::ERASE_WHOLE_DISPLAY);
//! screen.push_str(&csi_chars::cursor_move(1, 1));
//! screen.push_str(&sgr_chars::with_params(
//!     "ready",
//!     [SgrParam::BOLD, SgrParam::foreground_color_rgb(0, 200, 80)],
//! ));
//! assert_eq!(screen, "\x1b[2J\x1b[1;1H\x1b[1;38;2;0;200;80mready\x1b[0m");
//! ```
//!
//! Every builder is pure and allocates its own output, so they can be called from any
//! number of threads. Numeric parameters are never range checked, with one exception:
//! [`SgrParam::alternate_font`] returns an [`SgrParamError`] for fonts outside `1..=9`.
//!
//! Styled spans always end with `ESC [ 0 m`. If the output may go to something that is
//! not a color terminal, use [`sgr_chars::with_param_if_supported`], which consults
//! [`global_color_support::detect()`].
//!
//! More info:
//! - <https://man7.org/linux/man-pages/man4/console_codes.4.html>
//! - <https://vt100.net/docs/vt100-ug/chapter3.html>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code>

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod constants;
mod common;
mod detect_color_support;
mod generator;

// Re-export the flat public API.
pub use common::*;
pub use detect_color_support::*;
pub use generator::*;
