// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ESC- but not CSI-sequences.
//!
//! | sequence   | name     | meaning                                              |
//! |------------|----------|------------------------------------------------------|
//! | `ESC c`    | RIS      | Reset.                                               |
//! | `ESC D`    | IND      | Linefeed.                                            |
//! | `ESC E`    | NEL      | Newline.                                             |
//! | `ESC H`    | HTS      | Set tab stop at current column.                      |
//! | `ESC M`    | RI       | Reverse linefeed.                                    |
//! | `ESC Z`    | DECID    | DEC private identification.                          |
//! | `ESC 7`    | DECSC    | Save cursor coordinates, attributes, G0/G1 charsets. |
//! | `ESC 8`    | DECRC    | Restore state most recently saved by `ESC 7`.        |
//! | `ESC [`    | CSI      | Control sequence introducer, see [`crate::csi_chars`]. |
//! | `ESC %`    |          | Start sequence selecting character set.              |
//! | `ESC # 8`  | DECALN   | DEC screen alignment test, fill screen with E's.     |
//! | `ESC (`    |          | Start sequence defining G0 character set.            |
//! | `ESC )`    |          | Start sequence defining G1 character set.            |
//! | `ESC >`    | DECPNM   | Set numeric keypad mode.                             |
//! | `ESC =`    | DECPAM   | Set application keypad mode.                         |
//! | `ESC ]`    | OSC      | Operating system command.                            |
//!
//! ESC sequences are the predecessors of the parameterized CSI sequences, and both
//! coexist. For example `ESC 7` / `ESC 8` here vs `ESC [ s` / `ESC [ u` in
//! [`crate::csi_chars`].
//!
//! The builders in this module append the caller's suffix verbatim. An unknown charset
//! or command just produces a sequence the terminal ignores.

use crate::{BufTextStorage, FastStringify,
            constants::{CHARSET_DEFAULT, CHARSET_SELECT_INTRODUCER, CHARSET_UTF8,
                        CHARSET_UTF8_OBSOLETE, CSI_INTRODUCER, DECALN_FILL_WITH_E,
                        DECALN_INTRODUCER, DECID_IDENTIFY, DECPAM_APPLICATION_KEYPAD,
                        DECPNM_NUMERIC_KEYPAD, DECRC_RESTORE_STATE, DECSC_SAVE_STATE,
                        ESC, G0_CHARSET_INTRODUCER, G1_CHARSET_INTRODUCER,
                        HTS_TAB_SET, IND_LINEFEED, MAPPING_DEFAULT, MAPPING_ROM,
                        MAPPING_USER, MAPPING_VT100_GRAPHICS, NEL_NEWLINE,
                        OSC_INTRODUCER, OSC_RESET_PALETTE, OSC_SET_PALETTE,
                        RI_REVERSE_LINEFEED, RIS_RESET},
            generate_impl_display_for_fast_stringify};
use const_format::concatcp;
use std::fmt::{Result, Write};

pub const RESET: &str = concatcp!(ESC, RIS_RESET);
pub const LINEFEED: &str = concatcp!(ESC, IND_LINEFEED);
pub const NEWLINE: &str = concatcp!(ESC, NEL_NEWLINE);
pub const SET_TAB_AT_CURRENT_COLUMN: &str = concatcp!(ESC, HTS_TAB_SET);
pub const REVERSE_LINEFEED: &str = concatcp!(ESC, RI_REVERSE_LINEFEED);
pub const IDENTIFY: &str = concatcp!(ESC, DECID_IDENTIFY);
pub const SAVE_STATE: &str = concatcp!(ESC, DECSC_SAVE_STATE);
pub const RESTORE_STATE: &str = concatcp!(ESC, DECRC_RESTORE_STATE);

pub const SELECT_CHARSET_DEFAULT: &str =
    concatcp!(ESC, CHARSET_SELECT_INTRODUCER, CHARSET_DEFAULT);
pub const SELECT_CHARSET_UTF8: &str =
    concatcp!(ESC, CHARSET_SELECT_INTRODUCER, CHARSET_UTF8);
pub const SELECT_CHARSET_UTF8_OBSOLETE: &str =
    concatcp!(ESC, CHARSET_SELECT_INTRODUCER, CHARSET_UTF8_OBSOLETE);

pub const FILL_SCREEN_WITH_E: &str = concatcp!(ESC, DECALN_INTRODUCER, DECALN_FILL_WITH_E);

pub const DEFINE_CHARSET_G0_DEFAULT: &str =
    concatcp!(ESC, G0_CHARSET_INTRODUCER, MAPPING_DEFAULT);
pub const DEFINE_CHARSET_G0_VT100: &str =
    concatcp!(ESC, G0_CHARSET_INTRODUCER, MAPPING_VT100_GRAPHICS);
pub const DEFINE_CHARSET_G0_ROM: &str = concatcp!(ESC, G0_CHARSET_INTRODUCER, MAPPING_ROM);
pub const DEFINE_CHARSET_G0_USER: &str =
    concatcp!(ESC, G0_CHARSET_INTRODUCER, MAPPING_USER);

pub const DEFINE_CHARSET_G1_DEFAULT: &str =
    concatcp!(ESC, G1_CHARSET_INTRODUCER, MAPPING_DEFAULT);
pub const DEFINE_CHARSET_G1_VT100: &str =
    concatcp!(ESC, G1_CHARSET_INTRODUCER, MAPPING_VT100_GRAPHICS);
pub const DEFINE_CHARSET_G1_ROM: &str = concatcp!(ESC, G1_CHARSET_INTRODUCER, MAPPING_ROM);
pub const DEFINE_CHARSET_G1_USER: &str =
    concatcp!(ESC, G1_CHARSET_INTRODUCER, MAPPING_USER);

pub const SET_KEYPAD_MODE_NUMERIC: &str = concatcp!(ESC, DECPNM_NUMERIC_KEYPAD);
pub const SET_KEYPAD_MODE_APPLICATION: &str = concatcp!(ESC, DECPAM_APPLICATION_KEYPAD);

pub const RESET_PALETTE: &str = concatcp!(ESC, OSC_INTRODUCER, OSC_RESET_PALETTE);

/// `ESC [` followed by `content`. Entry point into CSI sequences.
#[must_use]
pub fn csi_chars(content: impl AsRef<str>) -> String {
    with_introducer(CSI_INTRODUCER, content.as_ref())
}

/// `ESC %` followed by `charset`.
#[must_use]
pub fn select_charset(charset: impl AsRef<str>) -> String {
    with_introducer(CHARSET_SELECT_INTRODUCER, charset.as_ref())
}

/// `ESC (` followed by `charset`.
#[must_use]
pub fn define_charset_g0(charset: impl AsRef<str>) -> String {
    with_introducer(G0_CHARSET_INTRODUCER, charset.as_ref())
}

/// `ESC )` followed by `charset`.
#[must_use]
pub fn define_charset_g1(charset: impl AsRef<str>) -> String {
    with_introducer(G1_CHARSET_INTRODUCER, charset.as_ref())
}

/// `ESC ]` followed by `command`.
#[must_use]
pub fn os_command(command: impl AsRef<str>) -> String {
    with_introducer(OSC_INTRODUCER, command.as_ref())
}

/// `ESC ] P nrrggbb`: set palette entry `index` (0-15) to the given color. Only the low
/// nibble of `index` is used.
#[must_use]
pub fn set_palette(index: u8, red: u8, green: u8, blue: u8) -> String {
    EscSequence::SetPalette { index, red, green, blue }.to_string()
}

fn with_introducer(introducer: char, suffix: &str) -> String {
    let mut acc = BufTextStorage::with_capacity(
        ESC.len_utf8() + introducer.len_utf8() + suffix.len(),
    );
    acc.push(ESC);
    acc.push(introducer);
    acc.push_str(suffix);
    acc
}

/// Character mapping that can be loaded into G0 or G1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharsetMapping {
    /// `B`: ISO 8859-1 mapping.
    Default,
    /// `0`: VT100 graphics mapping.
    Vt100Graphics,
    /// `U`: Null mapping, straight to character ROM.
    Rom,
    /// `K`: User mapping.
    User,
}

impl CharsetMapping {
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            CharsetMapping::Default => MAPPING_DEFAULT,
            CharsetMapping::Vt100Graphics => MAPPING_VT100_GRAPHICS,
            CharsetMapping::Rom => MAPPING_ROM,
            CharsetMapping::User => MAPPING_USER,
        }
    }
}

/// Typed form of the ESC sequences in this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EscSequence {
    /// ESC c - Reset (RIS)
    Reset,
    /// ESC D - Linefeed (IND)
    Linefeed,
    /// ESC E - Newline (NEL)
    Newline,
    /// ESC H - Set tab stop at current column (HTS)
    SetTabAtCurrentColumn,
    /// ESC M - Reverse linefeed (RI)
    ReverseLinefeed,
    /// ESC Z - Identify (DECID)
    Identify,
    /// ESC 7 - Save state (DECSC)
    SaveState,
    /// ESC 8 - Restore state (DECRC)
    RestoreState,
    /// ESC % @
    SelectCharsetDefault,
    /// ESC % G
    SelectCharsetUtf8,
    /// ESC % 8
    SelectCharsetUtf8Obsolete,
    /// ESC # 8 (DECALN)
    FillScreenWithE,
    /// ESC ( mapping
    DefineCharsetG0(CharsetMapping),
    /// ESC ) mapping
    DefineCharsetG1(CharsetMapping),
    /// ESC > (DECPNM)
    SetKeypadModeNumeric,
    /// ESC = (DECPAM)
    SetKeypadModeApplication,
    /// ESC ] R
    ResetPalette,
    /// ESC ] P nrrggbb
    SetPalette { index: u8, red: u8, green: u8, blue: u8 },
}

impl FastStringify for EscSequence {
    fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result {
        acc.push(ESC);
        match self {
            EscSequence::Reset => acc.push(RIS_RESET),
            EscSequence::Linefeed => acc.push(IND_LINEFEED),
            EscSequence::Newline => acc.push(NEL_NEWLINE),
            EscSequence::SetTabAtCurrentColumn => acc.push(HTS_TAB_SET),
            EscSequence::ReverseLinefeed => acc.push(RI_REVERSE_LINEFEED),
            EscSequence::Identify => acc.push(DECID_IDENTIFY),
            EscSequence::SaveState => acc.push(DECSC_SAVE_STATE),
            EscSequence::RestoreState => acc.push(DECRC_RESTORE_STATE),
            EscSequence::SelectCharsetDefault => {
                acc.push(CHARSET_SELECT_INTRODUCER);
                acc.push(CHARSET_DEFAULT);
            }
            EscSequence::SelectCharsetUtf8 => {
                acc.push(CHARSET_SELECT_INTRODUCER);
                acc.push(CHARSET_UTF8);
            }
            EscSequence::SelectCharsetUtf8Obsolete => {
                acc.push(CHARSET_SELECT_INTRODUCER);
                acc.push(CHARSET_UTF8_OBSOLETE);
            }
            EscSequence::FillScreenWithE => {
                acc.push(DECALN_INTRODUCER);
                acc.push(DECALN_FILL_WITH_E);
            }
            EscSequence::DefineCharsetG0(mapping) => {
                acc.push(G0_CHARSET_INTRODUCER);
                acc.push(mapping.as_char());
            }
            EscSequence::DefineCharsetG1(mapping) => {
                acc.push(G1_CHARSET_INTRODUCER);
                acc.push(mapping.as_char());
            }
            EscSequence::SetKeypadModeNumeric => acc.push(DECPNM_NUMERIC_KEYPAD),
            EscSequence::SetKeypadModeApplication => acc.push(DECPAM_APPLICATION_KEYPAD),
            EscSequence::ResetPalette => {
                acc.push(OSC_INTRODUCER);
                acc.push(OSC_RESET_PALETTE);
            }
            EscSequence::SetPalette { index, red, green, blue } => {
                acc.push(OSC_INTRODUCER);
                acc.push(OSC_SET_PALETTE);
                write!(acc, "{:x}{red:02x}{green:02x}{blue:02x}", index & 0x0f)?;
            }
        }
        Ok(())
    }
}

generate_impl_display_for_fast_stringify!(EscSequence);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(RESET, "c")]
    #[test_case(LINEFEED, "D")]
    #[test_case(NEWLINE, "E")]
    #[test_case(SET_TAB_AT_CURRENT_COLUMN, "H")]
    #[test_case(REVERSE_LINEFEED, "M")]
    #[test_case(IDENTIFY, "Z")]
    #[test_case(SAVE_STATE, "7")]
    #[test_case(RESTORE_STATE, "8")]
    #[test_case(SELECT_CHARSET_DEFAULT, "%@")]
    #[test_case(SELECT_CHARSET_UTF8, "%G")]
    #[test_case(SELECT_CHARSET_UTF8_OBSOLETE, "%8")]
    #[test_case(FILL_SCREEN_WITH_E, "#8")]
    #[test_case(DEFINE_CHARSET_G0_DEFAULT, "(B")]
    #[test_case(DEFINE_CHARSET_G0_VT100, "(0")]
    #[test_case(DEFINE_CHARSET_G0_ROM, "(U")]
    #[test_case(DEFINE_CHARSET_G0_USER, "(K")]
    #[test_case(DEFINE_CHARSET_G1_DEFAULT, ")B")]
    #[test_case(DEFINE_CHARSET_G1_VT100, ")0")]
    #[test_case(DEFINE_CHARSET_G1_ROM, ")U")]
    #[test_case(DEFINE_CHARSET_G1_USER, ")K")]
    #[test_case(SET_KEYPAD_MODE_NUMERIC, ">")]
    #[test_case(SET_KEYPAD_MODE_APPLICATION, "=")]
    #[test_case(RESET_PALETTE, "]R")]
    fn test_constant_is_esc_plus_suffix(sequence: &str, suffix: &str) {
        assert!(sequence.starts_with('\x1b'), "{sequence:?}");
        assert_eq!(&sequence[1..], suffix);
    }

    #[test]
    fn test_constants_match_builders() {
        assert_eq!(SELECT_CHARSET_DEFAULT, select_charset("@"));
        assert_eq!(SELECT_CHARSET_UTF8, select_charset("G"));
        assert_eq!(DEFINE_CHARSET_G0_VT100, define_charset_g0("0"));
        assert_eq!(DEFINE_CHARSET_G1_USER, define_charset_g1("K"));
        assert_eq!(RESET_PALETTE, os_command("R"));
        assert_eq!(RESET, crate::ctl_chars::escape("c"));
    }

    #[test]
    fn test_builders() {
        assert_eq!(csi_chars("2J"), "\x1b[2J");
        assert_eq!(select_charset("G"), "\x1b%G");
        assert_eq!(define_charset_g0("B"), "\x1b(B");
        assert_eq!(define_charset_g1(String::from("0")), "\x1b)0");
        assert_eq!(os_command("0;title\x07"), "\x1b]0;title\x07");
    }

    #[test]
    fn test_builders_do_not_validate() {
        assert_eq!(select_charset("???"), "\x1b%???");
        assert_eq!(define_charset_g0(""), "\x1b(");
        assert_eq!(csi_chars(""), "\x1b[");
    }

    #[test]
    fn test_set_palette() {
        assert_eq!(set_palette(1, 0xff, 0x00, 0x80), "\x1b]P1ff0080");
        assert_eq!(set_palette(15, 1, 2, 3), "\x1b]Pf010203");
        // Only 16 palette slots exist.
        assert_eq!(set_palette(0x1a, 0, 0, 0), "\x1b]Pa000000");
    }

    #[test]
    fn test_esc_sequence_matches_constants() {
        let pairs = [
            (EscSequence::Reset, RESET),
            (EscSequence::Linefeed, LINEFEED),
            (EscSequence::Newline, NEWLINE),
            (EscSequence::SetTabAtCurrentColumn, SET_TAB_AT_CURRENT_COLUMN),
            (EscSequence::ReverseLinefeed, REVERSE_LINEFEED),
            (EscSequence::Identify, IDENTIFY),
            (EscSequence::SaveState, SAVE_STATE),
            (EscSequence::RestoreState, RESTORE_STATE),
            (EscSequence::SelectCharsetDefault, SELECT_CHARSET_DEFAULT),
            (EscSequence::SelectCharsetUtf8, SELECT_CHARSET_UTF8),
            (EscSequence::SelectCharsetUtf8Obsolete, SELECT_CHARSET_UTF8_OBSOLETE),
            (EscSequence::FillScreenWithE, FILL_SCREEN_WITH_E),
            (EscSequence::DefineCharsetG0(CharsetMapping::Default), DEFINE_CHARSET_G0_DEFAULT),
            (EscSequence::DefineCharsetG0(CharsetMapping::Vt100Graphics), DEFINE_CHARSET_G0_VT100),
            (EscSequence::DefineCharsetG0(CharsetMapping::Rom), DEFINE_CHARSET_G0_ROM),
            (EscSequence::DefineCharsetG0(CharsetMapping::User), DEFINE_CHARSET_G0_USER),
            (EscSequence::DefineCharsetG1(CharsetMapping::Default), DEFINE_CHARSET_G1_DEFAULT),
            (EscSequence::DefineCharsetG1(CharsetMapping::Vt100Graphics), DEFINE_CHARSET_G1_VT100),
            (EscSequence::DefineCharsetG1(CharsetMapping::Rom), DEFINE_CHARSET_G1_ROM),
            (EscSequence::DefineCharsetG1(CharsetMapping::User), DEFINE_CHARSET_G1_USER),
            (EscSequence::SetKeypadModeNumeric, SET_KEYPAD_MODE_NUMERIC),
            (EscSequence::SetKeypadModeApplication, SET_KEYPAD_MODE_APPLICATION),
            (EscSequence::ResetPalette, RESET_PALETTE),
        ];

        for (sequence, expected) in pairs {
            assert_eq!(sequence.to_string(), expected, "{sequence:?}");
        }
    }

    #[test]
    fn test_esc_sequence_write_to_buf_appends() {
        let mut buffer = BufTextStorage::from("abc");
        EscSequence::SaveState.write_to_buf(&mut buffer).unwrap();
        EscSequence::RestoreState.write_to_buf(&mut buffer).unwrap();
        assert_eq!(buffer, "abc\x1b7\x1b8");
    }

    #[test]
    fn test_constants_are_idempotent() {
        let first = RESET.to_string();
        let second = RESET.to_string();
        assert_eq!(first, second);
        assert_eq!(csi_chars("s"), csi_chars("s"));
    }
}
