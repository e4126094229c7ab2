// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Raw building blocks for ANSI/VT100 escape sequences.
//!
//! ## Organization
//!
//! Constants are grouped by protocol domain:
//! - **c0**: C0 control characters (BEL, BS, ESC, ...)
//! - **esc**: bytes that follow ESC in ESC sequences, intermediates and charsets
//! - **csi**: CSI start, final bytes, default and named parameters
//! - **sgr**: extended color parameter pieces
//!
//! The ready-made sequences built from these live in [`crate::ctl_chars`],
//! [`crate::esc_chars`], [`crate::csi_chars`] and [`crate::sgr_chars`].

// Skip rustfmt for rest of file to preserve manual alignment.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod c0;
mod csi;
mod esc;
mod sgr;

// Public re-exports (flat API) for convenience.
pub use c0::*;
pub use csi::*;
pub use esc::*;
pub use sgr::*;
