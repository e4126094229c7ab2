// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ECMA-48 CSI sequences.
//!
//! CSI (or ESC [) is followed by a sequence of parameters, at most NPAR (16), that are
//! decimal numbers separated by semicolons. An empty or absent parameter is taken to be
//! 0. The sequence of parameters may be preceded by a single question mark. The action
//! of a CSI sequence is determined by its final character.
//!
//! | final | name    | action                                                   |
//! |-------|---------|----------------------------------------------------------|
//! | `@`   | ICH     | Insert the indicated # of blank characters.              |
//! | `A`   | CUU     | Move cursor up the indicated # of rows.                  |
//! | `B`   | CUD     | Move cursor down the indicated # of rows.                |
//! | `C`   | CUF     | Move cursor right the indicated # of columns.            |
//! | `D`   | CUB     | Move cursor left the indicated # of columns.             |
//! | `E`   | CNL     | Move cursor down the indicated # of rows, to column 1.   |
//! | `F`   | CPL     | Move cursor up the indicated # of rows, to column 1.     |
//! | `G`   | CHA     | Move cursor to indicated column in current row.          |
//! | `H`   | CUP     | Move cursor to the indicated row, column (origin 1,1).   |
//! | `J`   | ED      | Erase display. 1: start to cursor, 2: whole display, 3: whole display including scroll-back. |
//! | `K`   | EL      | Erase line. 1: start of line to cursor, 2: whole line.   |
//! | `L`   | IL      | Insert the indicated # of blank lines.                   |
//! | `M`   | DL      | Delete the indicated # of lines.                         |
//! | `P`   | DCH     | Delete the indicated # of characters on current line.    |
//! | `S`   | SU      | Scroll up.                                               |
//! | `T`   | SD      | Scroll down.                                             |
//! | `X`   | ECH     | Erase the indicated # of characters on current line.     |
//! | `c`   | DA      | Answer `ESC [ ? 6 c`: "I am a VT102".                    |
//! | `d`   | VPA     | Move cursor to the indicated row, current column.        |
//! | `f`   | HVP     | Move cursor to the indicated row, column.                |
//! | `g`   | TBC     | Clear tab stop at current position, `3`: all tab stops.  |
//! | `h`   | SM      | Set mode.                                                |
//! | `l`   | RM      | Reset mode.                                              |
//! | `m`   | SGR     | Set attributes, see [`crate::sgr_chars`].                |
//! | `n`   | DSR     | Status report.                                           |
//! | `q`   | DECLL   | Set keyboard LEDs (0: clear, 1: Scroll, 2: Num, 3: Caps). |
//! | `r`   | DECSTBM | Set scrolling region; parameters are top and bottom row. |
//! | `s`   |         | Save cursor location.                                    |
//! | `u`   |         | Restore cursor location.                                 |
//!
//! Numeric parameters are never range checked. Out of range values (including
//! negative ones) are rendered verbatim and it is up to the terminal to reject them.
//!
//! Builders with a default parameter take `impl Into<Option<i32>>`, so both
//! `cursor_up(3)` and `cursor_up(None)` work.

use crate::{BufTextStorage, FastStringify,
            constants::{CHA_CURSOR_COLUMN, CNL_CURSOR_NEXT_LINE, CPL_CURSOR_PREV_LINE,
                        CSI_PARAM_SEPARATOR, CSI_PRIVATE_MODE_PREFIX, CSI_START,
                        CUB_CURSOR_BACK, CUD_CURSOR_DOWN, CUF_CURSOR_FORWARD,
                        CUP_CURSOR_POSITION, CUU_CURSOR_UP, DA_DEVICE_ATTRIBUTES,
                        DCH_DELETE_CHAR, DECLL_KEYBOARD_LEDS, DECSTBM_SET_MARGINS,
                        DEFAULT_ERASE_MODE, DEFAULT_STEP, DL_DELETE_LINE,
                        DSR_DEVICE_STATUS, DSR_REPORT_CURSOR, DSR_REPORT_STATUS,
                        ECH_ERASE_CHAR, ED_ERASE_DISPLAY, EL_ERASE_LINE,
                        ERASE_MODE_START_TO_CURSOR, ERASE_MODE_WHOLE,
                        ERASE_MODE_WHOLE_WITH_SCROLLBACK, HVP_CURSOR_POSITION,
                        ICH_INSERT_CHAR, IL_INSERT_LINE, MODE_DECCRM_DISPLAY_CONTROL_CHARS,
                        MODE_DECIM_INSERT, MODE_LNM_FOLLOW_CR,
                        PRIVATE_MODE_DECTCEM_SHOW_CURSOR, RCP_RESTORE_CURSOR,
                        RM_RESET_MODE, SCP_SAVE_CURSOR, SD_SCROLL_DOWN, SM_SET_MODE,
                        SU_SCROLL_UP, TBC_ALL, TBC_CURRENT_COLUMN, TBC_TAB_CLEAR,
                        VPA_CURSOR_ROW},
            generate_impl_display_for_fast_stringify};
use const_format::concatcp;
use std::fmt::{Result, Write};

pub const ERASE_DISPLAY_FROM_START_TO_CURSOR: &str =
    concatcp!(CSI_START, ERASE_MODE_START_TO_CURSOR, ED_ERASE_DISPLAY);
pub const ERASE_WHOLE_DISPLAY: &str =
    concatcp!(CSI_START, ERASE_MODE_WHOLE, ED_ERASE_DISPLAY);
pub const ERASE_WHOLE_DISPLAY_INCLUDING_BUFFER: &str =
    concatcp!(CSI_START, ERASE_MODE_WHOLE_WITH_SCROLLBACK, ED_ERASE_DISPLAY);
pub const ERASE_LINE_FROM_START_TO_CURSOR: &str =
    concatcp!(CSI_START, ERASE_MODE_START_TO_CURSOR, EL_ERASE_LINE);
pub const ERASE_WHOLE_LINE: &str = concatcp!(CSI_START, ERASE_MODE_WHOLE, EL_ERASE_LINE);

pub const DISPLAY_CONTROL_CHARS: &str =
    concatcp!(CSI_START, MODE_DECCRM_DISPLAY_CONTROL_CHARS, SM_SET_MODE);
pub const SET_INSERT_MODE: &str = concatcp!(CSI_START, MODE_DECIM_INSERT, SM_SET_MODE);
pub const FOLLOW_CR: &str = concatcp!(CSI_START, MODE_LNM_FOLLOW_CR, SM_SET_MODE);
pub const RESET_DISPLAY_CONTROL_CHARS: &str =
    concatcp!(CSI_START, MODE_DECCRM_DISPLAY_CONTROL_CHARS, RM_RESET_MODE);
pub const RESET_INSERT_MODE: &str = concatcp!(CSI_START, MODE_DECIM_INSERT, RM_RESET_MODE);
pub const RESET_FOLLOW_CR: &str = concatcp!(CSI_START, MODE_LNM_FOLLOW_CR, RM_RESET_MODE);

pub const SAVE_CURSOR: &str = concatcp!(CSI_START, SCP_SAVE_CURSOR);
pub const RESTORE_CURSOR: &str = concatcp!(CSI_START, RCP_RESTORE_CURSOR);
pub const REPORT_STATUS: &str = concatcp!(CSI_START, DSR_REPORT_STATUS, DSR_DEVICE_STATUS);
pub const REPORT_CURSOR: &str = concatcp!(CSI_START, DSR_REPORT_CURSOR, DSR_DEVICE_STATUS);
pub const REPORT_DEVICE_ATTRIBUTES: &str = concatcp!(CSI_START, DA_DEVICE_ATTRIBUTES);

pub const CLEAR_TAB_STOP: &str = concatcp!(CSI_START, TBC_CURRENT_COLUMN, TBC_TAB_CLEAR);
pub const CLEAR_ALL_TAB_STOPS: &str = concatcp!(CSI_START, TBC_ALL, TBC_TAB_CLEAR);

pub const SHOW_CURSOR: &str = concatcp!(
    CSI_START,
    CSI_PRIVATE_MODE_PREFIX,
    PRIVATE_MODE_DECTCEM_SHOW_CURSOR,
    SM_SET_MODE
);
pub const HIDE_CURSOR: &str = concatcp!(
    CSI_START,
    CSI_PRIVATE_MODE_PREFIX,
    PRIVATE_MODE_DECTCEM_SHOW_CURSOR,
    RM_RESET_MODE
);

/// Typed form of every CSI sequence this module builds. The free functions are thin
/// wrappers that render one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CsiSequence {
    /// Cursor Up (CUU) - ESC [ n A
    CursorUp(i32),
    /// Cursor Down (CUD) - ESC [ n B
    CursorDown(i32),
    /// Cursor Forward (CUF) - ESC [ n C
    CursorForward(i32),
    /// Cursor Back (CUB) - ESC [ n D
    CursorBack(i32),
    /// Cursor Next Line (CNL) - ESC [ n E
    CursorNextLine(i32),
    /// Cursor Previous Line (CPL) - ESC [ n F
    CursorPreviousLine(i32),
    /// Cursor Horizontal Absolute (CHA) - ESC [ n G
    CursorColumn(i32),
    /// Cursor Position (CUP) - ESC [ row ; col H
    CursorMove { row: i32, col: i32 },
    /// Cursor Position alternate form (HVP) - ESC [ row ; col f
    CursorMoveAlt { row: i32, col: i32 },
    /// Vertical Position Absolute (VPA) - ESC [ n d
    CursorRow(i32),
    /// Scroll Up (SU) - ESC [ n S
    ScrollUp(i32),
    /// Scroll Down (SD) - ESC [ n T
    ScrollDown(i32),
    /// Erase Display (ED) - ESC [ n J
    EraseDisplay(i32),
    /// Erase Line (EL) - ESC [ n K
    EraseLine(i32),
    /// Insert Character (ICH) - ESC [ n @
    InsertBlankChars(i32),
    /// Insert Line (IL) - ESC [ n L
    InsertLines(i32),
    /// Delete Line (DL) - ESC [ n M
    DeleteLines(i32),
    /// Delete Character (DCH) - ESC [ n P
    DeleteChars(i32),
    /// Erase Character (ECH) - ESC [ n X
    EraseChars(i32),
    /// Set Mode (SM) - ESC [ n h
    SetMode(i32),
    /// Reset Mode (RM) - ESC [ n l
    ResetMode(i32),
    /// Set DEC private mode - ESC [ ? n h
    SetPrivateMode(i32),
    /// Reset DEC private mode - ESC [ ? n l
    ResetPrivateMode(i32),
    /// Set Top and Bottom Margins (DECSTBM) - ESC [ top ; bottom r
    SetScrollingRegion { top: i32, bottom: i32 },
    /// Set keyboard LEDs (DECLL) - ESC [ n q
    SetKeyboardLeds(i32),
    /// Tab Clear (TBC) - ESC [ n g
    TabClear(i32),
    /// Device Status Report (DSR) - ESC [ n n
    DeviceStatusReport(i32),
    /// Device Attributes (DA) - ESC [ c
    DeviceAttributes,
    /// Save cursor location - ESC [ s
    SaveCursor,
    /// Restore cursor location - ESC [ u
    RestoreCursor,
}

impl FastStringify for CsiSequence {
    #[allow(clippy::too_many_lines)]
    fn write_to_buf(&self, acc: &mut BufTextStorage) -> Result {
        acc.push_str(CSI_START);
        match *self {
            CsiSequence::CursorUp(n) => push_param_and_final(acc, n, CUU_CURSOR_UP),
            CsiSequence::CursorDown(n) => push_param_and_final(acc, n, CUD_CURSOR_DOWN),
            CsiSequence::CursorForward(n) => {
                push_param_and_final(acc, n, CUF_CURSOR_FORWARD)
            }
            CsiSequence::CursorBack(n) => push_param_and_final(acc, n, CUB_CURSOR_BACK),
            CsiSequence::CursorNextLine(n) => {
                push_param_and_final(acc, n, CNL_CURSOR_NEXT_LINE)
            }
            CsiSequence::CursorPreviousLine(n) => {
                push_param_and_final(acc, n, CPL_CURSOR_PREV_LINE)
            }
            CsiSequence::CursorColumn(n) => {
                push_param_and_final(acc, n, CHA_CURSOR_COLUMN)
            }
            CsiSequence::CursorMove { row, col } => {
                push_pair_and_final(acc, row, col, CUP_CURSOR_POSITION)
            }
            CsiSequence::CursorMoveAlt { row, col } => {
                push_pair_and_final(acc, row, col, HVP_CURSOR_POSITION)
            }
            CsiSequence::CursorRow(n) => push_param_and_final(acc, n, VPA_CURSOR_ROW),
            CsiSequence::ScrollUp(n) => push_param_and_final(acc, n, SU_SCROLL_UP),
            CsiSequence::ScrollDown(n) => push_param_and_final(acc, n, SD_SCROLL_DOWN),
            CsiSequence::EraseDisplay(n) => {
                push_param_and_final(acc, n, ED_ERASE_DISPLAY)
            }
            CsiSequence::EraseLine(n) => push_param_and_final(acc, n, EL_ERASE_LINE),
            CsiSequence::InsertBlankChars(n) => {
                push_param_and_final(acc, n, ICH_INSERT_CHAR)
            }
            CsiSequence::InsertLines(n) => push_param_and_final(acc, n, IL_INSERT_LINE),
            CsiSequence::DeleteLines(n) => push_param_and_final(acc, n, DL_DELETE_LINE),
            CsiSequence::DeleteChars(n) => push_param_and_final(acc, n, DCH_DELETE_CHAR),
            CsiSequence::EraseChars(n) => push_param_and_final(acc, n, ECH_ERASE_CHAR),
            CsiSequence::SetMode(n) => push_param_and_final(acc, n, SM_SET_MODE),
            CsiSequence::ResetMode(n) => push_param_and_final(acc, n, RM_RESET_MODE),
            CsiSequence::SetPrivateMode(n) => {
                acc.push(CSI_PRIVATE_MODE_PREFIX);
                push_param_and_final(acc, n, SM_SET_MODE)
            }
            CsiSequence::ResetPrivateMode(n) => {
                acc.push(CSI_PRIVATE_MODE_PREFIX);
                push_param_and_final(acc, n, RM_RESET_MODE)
            }
            CsiSequence::SetScrollingRegion { top, bottom } => {
                push_pair_and_final(acc, top, bottom, DECSTBM_SET_MARGINS)
            }
            CsiSequence::SetKeyboardLeds(n) => {
                push_param_and_final(acc, n, DECLL_KEYBOARD_LEDS)
            }
            CsiSequence::TabClear(n) => push_param_and_final(acc, n, TBC_TAB_CLEAR),
            CsiSequence::DeviceStatusReport(n) => {
                push_param_and_final(acc, n, DSR_DEVICE_STATUS)
            }
            CsiSequence::DeviceAttributes => {
                acc.push(DA_DEVICE_ATTRIBUTES);
                Ok(())
            }
            CsiSequence::SaveCursor => {
                acc.push(SCP_SAVE_CURSOR);
                Ok(())
            }
            CsiSequence::RestoreCursor => {
                acc.push(RCP_RESTORE_CURSOR);
                Ok(())
            }
        }
    }
}

generate_impl_display_for_fast_stringify!(CsiSequence);

fn push_param_and_final(acc: &mut BufTextStorage, n: i32, final_byte: char) -> Result {
    write!(acc, "{n}")?;
    acc.push(final_byte);
    Ok(())
}

fn push_pair_and_final(
    acc: &mut BufTextStorage,
    first: i32,
    second: i32,
    final_byte: char,
) -> Result {
    write!(acc, "{first}")?;
    acc.push(CSI_PARAM_SEPARATOR);
    write!(acc, "{second}")?;
    acc.push(final_byte);
    Ok(())
}

fn step_or_default(n: impl Into<Option<i32>>) -> i32 { n.into().unwrap_or(DEFAULT_STEP) }

#[must_use]
pub fn cursor_up(n: impl Into<Option<i32>>) -> String {
    CsiSequence::CursorUp(step_or_default(n)).to_string()
}

#[must_use]
pub fn cursor_down(n: impl Into<Option<i32>>) -> String {
    CsiSequence::CursorDown(step_or_default(n)).to_string()
}

#[must_use]
pub fn cursor_forward(n: impl Into<Option<i32>>) -> String {
    CsiSequence::CursorForward(step_or_default(n)).to_string()
}

#[must_use]
pub fn cursor_back(n: impl Into<Option<i32>>) -> String {
    CsiSequence::CursorBack(step_or_default(n)).to_string()
}

#[must_use]
pub fn cursor_next_line(n: impl Into<Option<i32>>) -> String {
    CsiSequence::CursorNextLine(step_or_default(n)).to_string()
}

#[must_use]
pub fn cursor_previous_line(n: impl Into<Option<i32>>) -> String {
    CsiSequence::CursorPreviousLine(step_or_default(n)).to_string()
}

#[must_use]
pub fn cursor_column(n: impl Into<Option<i32>>) -> String {
    CsiSequence::CursorColumn(step_or_default(n)).to_string()
}

/// `ESC [ row ; col H`, origin at 1,1.
#[must_use]
pub fn cursor_move(row: i32, col: i32) -> String {
    CsiSequence::CursorMove { row, col }.to_string()
}

/// `ESC [ row ; col f`, same effect as [`cursor_move`].
#[must_use]
pub fn cursor_move_alt(row: i32, col: i32) -> String {
    CsiSequence::CursorMoveAlt { row, col }.to_string()
}

#[must_use]
pub fn cursor_row(n: impl Into<Option<i32>>) -> String {
    CsiSequence::CursorRow(step_or_default(n)).to_string()
}

#[must_use]
pub fn scroll_up(n: impl Into<Option<i32>>) -> String {
    CsiSequence::ScrollUp(step_or_default(n)).to_string()
}

#[must_use]
pub fn scroll_down(n: impl Into<Option<i32>>) -> String {
    CsiSequence::ScrollDown(step_or_default(n)).to_string()
}

/// Erase display. `n` defaults to 2.
/// - 1: erase from start to cursor
/// - 2: erase whole display
/// - 3: erase whole display including scroll-back buffer
#[must_use]
pub fn erase_display(n: impl Into<Option<i32>>) -> String {
    CsiSequence::EraseDisplay(n.into().unwrap_or(DEFAULT_ERASE_MODE)).to_string()
}

/// Erase line. `n` defaults to 2.
/// - 1: erase from start of line to cursor
/// - 2: erase whole line
#[must_use]
pub fn erase_line(n: impl Into<Option<i32>>) -> String {
    CsiSequence::EraseLine(n.into().unwrap_or(DEFAULT_ERASE_MODE)).to_string()
}

#[must_use]
pub fn insert_blank_chars(n: impl Into<Option<i32>>) -> String {
    CsiSequence::InsertBlankChars(step_or_default(n)).to_string()
}

#[must_use]
pub fn insert_lines(n: impl Into<Option<i32>>) -> String {
    CsiSequence::InsertLines(step_or_default(n)).to_string()
}

#[must_use]
pub fn delete_lines(n: impl Into<Option<i32>>) -> String {
    CsiSequence::DeleteLines(step_or_default(n)).to_string()
}

#[must_use]
pub fn delete_chars(n: impl Into<Option<i32>>) -> String {
    CsiSequence::DeleteChars(step_or_default(n)).to_string()
}

#[must_use]
pub fn erase_chars(n: impl Into<Option<i32>>) -> String {
    CsiSequence::EraseChars(step_or_default(n)).to_string()
}

/// Set mode `h`.
/// - 3: DECCRM (default off): Display control chars.
/// - 4: DECIM (default off): Set insert mode.
/// - 20: LF/NL (default off): Automatically follow echo of LF, VT or FF with CR.
#[must_use]
pub fn set_mode(h: i32) -> String { CsiSequence::SetMode(h).to_string() }

/// Reset mode `l`. Same mode numbers as [`set_mode`].
#[must_use]
pub fn reset_mode(l: i32) -> String { CsiSequence::ResetMode(l).to_string() }

/// `ESC [ ? n h`, e.g. 25 shows the cursor, 1049 switches to the alternate screen.
#[must_use]
pub fn set_private_mode(n: i32) -> String { CsiSequence::SetPrivateMode(n).to_string() }

/// `ESC [ ? n l`.
#[must_use]
pub fn reset_private_mode(n: i32) -> String {
    CsiSequence::ResetPrivateMode(n).to_string()
}

#[must_use]
pub fn set_scrolling_region(top: i32, bottom: i32) -> String {
    CsiSequence::SetScrollingRegion { top, bottom }.to_string()
}

/// - 0: clear all LEDs
/// - 1: set Scroll Lock LED
/// - 2: set Num Lock LED
/// - 3: set Caps Lock LED
#[must_use]
pub fn set_keyboard_leds(n: i32) -> String { CsiSequence::SetKeyboardLeds(n).to_string() }

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(cursor_up(None), "\x1b[1A")]
    #[test_case(cursor_down(None), "\x1b[1B")]
    #[test_case(cursor_forward(None), "\x1b[1C")]
    #[test_case(cursor_back(None), "\x1b[1D")]
    #[test_case(cursor_next_line(None), "\x1b[1E")]
    #[test_case(cursor_previous_line(None), "\x1b[1F")]
    #[test_case(cursor_column(None), "\x1b[1G")]
    #[test_case(cursor_row(None), "\x1b[1d")]
    #[test_case(scroll_up(None), "\x1b[1S")]
    #[test_case(scroll_down(None), "\x1b[1T")]
    #[test_case(insert_blank_chars(None), "\x1b[1@")]
    #[test_case(insert_lines(None), "\x1b[1L")]
    #[test_case(delete_lines(None), "\x1b[1M")]
    #[test_case(delete_chars(None), "\x1b[1P")]
    #[test_case(erase_chars(None), "\x1b[1X")]
    #[test_case(erase_display(None), "\x1b[2J")]
    #[test_case(erase_line(None), "\x1b[2K")]
    fn test_default_parameter(actual: String, expected: &str) {
        assert_eq!(actual, expected);
    }

    #[test_case(cursor_up(7), "\x1b[7A")]
    #[test_case(cursor_down(12), "\x1b[12B")]
    #[test_case(cursor_forward(3), "\x1b[3C")]
    #[test_case(cursor_back(40), "\x1b[40D")]
    #[test_case(cursor_next_line(2), "\x1b[2E")]
    #[test_case(cursor_previous_line(5), "\x1b[5F")]
    #[test_case(cursor_column(80), "\x1b[80G")]
    #[test_case(cursor_row(24), "\x1b[24d")]
    #[test_case(scroll_up(4), "\x1b[4S")]
    #[test_case(scroll_down(9), "\x1b[9T")]
    #[test_case(insert_blank_chars(6), "\x1b[6@")]
    #[test_case(insert_lines(2), "\x1b[2L")]
    #[test_case(delete_lines(3), "\x1b[3M")]
    #[test_case(delete_chars(10), "\x1b[10P")]
    #[test_case(erase_chars(11), "\x1b[11X")]
    #[test_case(cursor_move(3, 14), "\x1b[3;14H")]
    #[test_case(cursor_move_alt(3, 14), "\x1b[3;14f")]
    #[test_case(set_scrolling_region(2, 20), "\x1b[2;20r")]
    #[test_case(set_mode(4), "\x1b[4h")]
    #[test_case(reset_mode(4), "\x1b[4l")]
    #[test_case(set_private_mode(1049), "\x1b[?1049h")]
    #[test_case(reset_private_mode(1049), "\x1b[?1049l")]
    #[test_case(set_keyboard_leds(3), "\x1b[3q")]
    fn test_explicit_parameter(actual: String, expected: &str) {
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_default_equals_explicit() {
        assert_eq!(cursor_up(None), cursor_up(1));
        assert_eq!(erase_display(None), erase_display(2));
        assert_eq!(erase_display(2), "\x1b[2J");
        assert_eq!(erase_line(None), erase_line(2));
    }

    #[test]
    fn test_cursor_up_any_positive() {
        for n in [1, 2, 9, 10, 99, 100, 12_345, i32::MAX] {
            assert_eq!(cursor_up(n), format!("\x1b[{n}A"));
        }
    }

    #[test]
    fn test_out_of_range_values_pass_through() {
        assert_eq!(erase_display(0), "\x1b[0J");
        assert_eq!(erase_display(7), "\x1b[7J");
        assert_eq!(erase_line(3), "\x1b[3K");
        assert_eq!(cursor_up(0), "\x1b[0A");
        assert_eq!(cursor_up(-3), "\x1b[-3A");
        assert_eq!(cursor_move(-1, i32::MIN), "\x1b[-1;-2147483648H");
    }

    #[test_case(ERASE_DISPLAY_FROM_START_TO_CURSOR, erase_display(1))]
    #[test_case(ERASE_WHOLE_DISPLAY, erase_display(2))]
    #[test_case(ERASE_WHOLE_DISPLAY_INCLUDING_BUFFER, erase_display(3))]
    #[test_case(ERASE_LINE_FROM_START_TO_CURSOR, erase_line(1))]
    #[test_case(ERASE_WHOLE_LINE, erase_line(2))]
    #[test_case(DISPLAY_CONTROL_CHARS, set_mode(3))]
    #[test_case(SET_INSERT_MODE, set_mode(4))]
    #[test_case(FOLLOW_CR, set_mode(20))]
    #[test_case(RESET_DISPLAY_CONTROL_CHARS, reset_mode(3))]
    #[test_case(RESET_INSERT_MODE, reset_mode(4))]
    #[test_case(RESET_FOLLOW_CR, reset_mode(20))]
    #[test_case(SHOW_CURSOR, set_private_mode(25))]
    #[test_case(HIDE_CURSOR, reset_private_mode(25))]
    #[test_case(SAVE_CURSOR, CsiSequence::SaveCursor.to_string())]
    #[test_case(RESTORE_CURSOR, CsiSequence::RestoreCursor.to_string())]
    #[test_case(REPORT_STATUS, CsiSequence::DeviceStatusReport(5).to_string())]
    #[test_case(REPORT_CURSOR, CsiSequence::DeviceStatusReport(6).to_string())]
    #[test_case(REPORT_DEVICE_ATTRIBUTES, CsiSequence::DeviceAttributes.to_string())]
    #[test_case(CLEAR_TAB_STOP, CsiSequence::TabClear(0).to_string())]
    #[test_case(CLEAR_ALL_TAB_STOPS, CsiSequence::TabClear(3).to_string())]
    fn test_constant_matches_builder(constant: &str, built: String) {
        assert_eq!(constant, built);
    }

    #[test]
    fn test_constant_literals() {
        assert_eq!(SAVE_CURSOR, "\x1b[s");
        assert_eq!(RESTORE_CURSOR, "\x1b[u");
        assert_eq!(REPORT_STATUS, "\x1b[5n");
        assert_eq!(REPORT_CURSOR, "\x1b[6n");
        assert_eq!(ERASE_WHOLE_DISPLAY_INCLUDING_BUFFER, "\x1b[3J");
        assert_eq!(HIDE_CURSOR, "\x1b[?25l");
    }

    #[test]
    fn test_every_sequence_starts_with_csi() {
        let sequences = [
            CsiSequence::CursorUp(1),
            CsiSequence::CursorMove { row: 1, col: 1 },
            CsiSequence::EraseDisplay(2),
            CsiSequence::SetPrivateMode(25),
            CsiSequence::SetScrollingRegion { top: 1, bottom: 2 },
            CsiSequence::DeviceAttributes,
            CsiSequence::SaveCursor,
        ];
        for sequence in &sequences {
            let output = sequence.to_string();
            assert!(output.starts_with("\x1b["), "{sequence:?} -> {output:?}");
            assert_eq!(output, crate::esc_chars::csi_chars(&output[2..]));
        }
    }

    #[test]
    fn test_write_to_buf_appends() {
        let mut buffer = BufTextStorage::new();
        CsiSequence::SaveCursor.write_to_buf(&mut buffer).unwrap();
        CsiSequence::CursorMove { row: 1, col: 1 }
            .write_to_buf(&mut buffer)
            .unwrap();
        CsiSequence::RestoreCursor.write_to_buf(&mut buffer).unwrap();
        assert_eq!(buffer, "\x1b[s\x1b[1;1H\x1b[u");
    }
}
