// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod fast_stringify;

// Re-export.
pub use fast_stringify::*;
