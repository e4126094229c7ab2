// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! C0 control characters (and the two 7-bit / 8-bit oddballs DEL and CSI) as they are
//! interpreted by the Linux console, see `console_codes(4)`.

/// BEL (0x07, ^G) beeps.
pub const BEL: char = '\x07';

/// BS (0x08, ^H) backspaces one column, but not past the beginning of the line.
pub const BS: char = '\x08';

/// HT (0x09, ^I) goes to the next tab stop, or to the end of the line if there is no
/// earlier tab stop.
pub const HT: char = '\x09';

/// LF (0x0A, ^J) gives a linefeed, plus a carriage return when LF/NL mode is set.
pub const LF: char = '\x0a';

/// VT (0x0B, ^K) behaves like LF.
pub const VT: char = '\x0b';

/// FF (0x0C, ^L) behaves like LF.
pub const FF: char = '\x0c';

/// CR (0x0D, ^M) gives a carriage return.
pub const CR: char = '\x0d';

/// SO (0x0E, ^N) activates the G1 character set.
pub const SO: char = '\x0e';

/// SI (0x0F, ^O) activates the G0 character set.
pub const SI: char = '\x0f';

/// CAN (0x18, ^X) interrupts an escape sequence.
pub const CAN: char = '\x18';

/// SUB (0x1A, ^Z) interrupts an escape sequence.
pub const SUB: char = '\x1a';

/// ESC (0x1B, ^[) starts an escape sequence.
pub const ESC: char = '\x1b';

/// DEL (0x7F) is ignored.
pub const DEL: char = '\x7f';

/// 8-bit CSI (0x9B), equivalent to `ESC [`.
pub const CSI_8BIT: char = '\u{9b}';
