// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bytes that follow ESC in ESC (but not CSI) sequences.
//!
//! ESC sequences are simple, mostly non-parameterized terminal control codes that
//! predate the CSI family. Some take an intermediate byte (`%`, `(`, `)`, `#`) before
//! the final byte.

// Terminal control.

/// ESC c (RIS): Reset to initial state.
pub const RIS_RESET: char = 'c';

/// ESC Z (DECID): DEC private identification. The console answers `ESC [ ? 6 c`.
pub const DECID_IDENTIFY: char = 'Z';

// Line operations.

/// ESC D (IND): Linefeed.
pub const IND_LINEFEED: char = 'D';

/// ESC E (NEL): Newline.
pub const NEL_NEWLINE: char = 'E';

/// ESC H (HTS): Set tab stop at current column.
pub const HTS_TAB_SET: char = 'H';

/// ESC M (RI): Reverse linefeed.
pub const RI_REVERSE_LINEFEED: char = 'M';

// State save/restore.

/// ESC 7 (DECSC): Save cursor coordinates, attributes and the G0/G1 character sets.
pub const DECSC_SAVE_STATE: char = '7';

/// ESC 8 (DECRC): Restore the state most recently saved by ESC 7.
pub const DECRC_RESTORE_STATE: char = '8';

// Introducers (intermediate bytes).

/// ESC [ : Control sequence introducer.
pub const CSI_INTRODUCER: char = '[';

/// ESC % : Start sequence selecting character set.
pub const CHARSET_SELECT_INTRODUCER: char = '%';

/// ESC ( : Start sequence defining G0 character set.
pub const G0_CHARSET_INTRODUCER: char = '(';

/// ESC ) : Start sequence defining G1 character set.
pub const G1_CHARSET_INTRODUCER: char = ')';

/// ESC ] : Operating system command.
pub const OSC_INTRODUCER: char = ']';

/// ESC # : Start of the DEC screen alignment test.
pub const DECALN_INTRODUCER: char = '#';

/// ESC # 8 (DECALN): Fill the screen with E's.
pub const DECALN_FILL_WITH_E: char = '8';

// Character set selection final bytes (after ESC %).

/// ESC % @ : Select default (ISO 646 / ISO 8859-1).
pub const CHARSET_DEFAULT: char = '@';

/// ESC % G : Select UTF-8.
pub const CHARSET_UTF8: char = 'G';

/// ESC % 8 : Select UTF-8 (obsolete).
pub const CHARSET_UTF8_OBSOLETE: char = '8';

// Character set mapping final bytes (after ESC ( or ESC )).

/// Default (ISO 8859-1 mapping).
pub const MAPPING_DEFAULT: char = 'B';

/// VT100 graphics mapping.
pub const MAPPING_VT100_GRAPHICS: char = '0';

/// Null mapping, straight to character ROM.
pub const MAPPING_ROM: char = 'U';

/// User mapping, the map loaded by `mapscrn(8)`.
pub const MAPPING_USER: char = 'K';

// Keypad.

/// ESC > (DECPNM): Set numeric keypad mode.
pub const DECPNM_NUMERIC_KEYPAD: char = '>';

/// ESC = (DECPAM): Set application keypad mode.
pub const DECPAM_APPLICATION_KEYPAD: char = '=';

// Operating system commands (after ESC ]).

/// ESC ] P nrrggbb : Set palette entry `n` (one hex digit) to `rrggbb`.
pub const OSC_SET_PALETTE: char = 'P';

/// ESC ] R : Reset palette.
pub const OSC_RESET_PALETTE: char = 'R';
