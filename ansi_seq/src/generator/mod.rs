// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Sequence builders, layered in the order the bytes are composed:
//!
//! - [`ctl_chars`] - single control characters and [`ctl_chars::escape()`]
//! - [`esc_chars`] - `ESC x` sequences, [`EscSequence`]
//! - [`csi_chars`] - `ESC [ params final` sequences, [`CsiSequence`]
//! - [`sgr_chars`] - styled spans built from [`SgrParam`]
//!
//! The four builder modules stay namespaced because several of their constants share
//! a name (eg `esc_chars::RESET` and `sgr_chars::RESET`). Only the types are flattened.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Public modules (namespaced constants and free functions).
pub mod ctl_chars;
pub mod csi_chars;
pub mod esc_chars;
pub mod sgr_chars;

// Private modules (hide internal structure).
mod sgr_param;

// Public re-exports (flat API).
pub use ctl_chars::ControlChar;
pub use csi_chars::CsiSequence;
pub use esc_chars::{CharsetMapping, EscSequence};
pub use sgr_chars::StyledContent;
pub use sgr_param::*;
