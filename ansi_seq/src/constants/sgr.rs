// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition) parameter pieces used to build extended colors.

/// Code for "reset all attributes".
pub const SGR_RESET_CODE: i32 = 0;

/// Extended foreground color introducer: `38`.
pub const SGR_FG_EXTENDED: &str = "38";

/// Extended background color introducer: `48`.
pub const SGR_BG_EXTENDED: &str = "48";

/// Extended color sub-mode for a 256 color palette index: `5`.
pub const SGR_COLOR_MODE_256: &str = "5";

/// Extended color sub-mode for 24-bit RGB: `2`.
pub const SGR_COLOR_MODE_RGB: &str = "2";
