// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CSI (Control Sequence Introducer) constants.
//!
//! `CSI` (or `ESC [`) is followed by decimal parameters separated by semicolons, which
//! may be preceded by a single question mark. The action is picked by the final byte.

use super::{c0::ESC, esc::CSI_INTRODUCER};
use const_format::concatcp;

/// CSI sequence start: ESC [
pub const CSI_START: &str = concatcp!(ESC, CSI_INTRODUCER);

/// Parameter separator.
pub const CSI_PARAM_SEPARATOR: char = ';';

/// Prefix for DEC private mode parameters: ESC [ ?
pub const CSI_PRIVATE_MODE_PREFIX: char = '?';

// Final bytes: cursor movement.

/// ICH: Insert the indicated # of blank characters.
pub const ICH_INSERT_CHAR: char = '@';
/// CUU: Move cursor up the indicated # of rows.
pub const CUU_CURSOR_UP: char = 'A';
/// CUD: Move cursor down the indicated # of rows.
pub const CUD_CURSOR_DOWN: char = 'B';
/// CUF: Move cursor right the indicated # of columns.
pub const CUF_CURSOR_FORWARD: char = 'C';
/// CUB: Move cursor left the indicated # of columns.
pub const CUB_CURSOR_BACK: char = 'D';
/// CNL: Move cursor down the indicated # of rows, to column 1.
pub const CNL_CURSOR_NEXT_LINE: char = 'E';
/// CPL: Move cursor up the indicated # of rows, to column 1.
pub const CPL_CURSOR_PREV_LINE: char = 'F';
/// CHA: Move cursor to indicated column in current row.
pub const CHA_CURSOR_COLUMN: char = 'G';
/// CUP: Move cursor to the indicated row, column (origin at 1,1).
pub const CUP_CURSOR_POSITION: char = 'H';
/// VPA: Move cursor to the indicated row, current column.
pub const VPA_CURSOR_ROW: char = 'd';
/// HVP: Move cursor to the indicated row, column.
pub const HVP_CURSOR_POSITION: char = 'f';

// Final bytes: erase, insert, delete, scroll.

/// ED: Erase display.
pub const ED_ERASE_DISPLAY: char = 'J';
/// EL: Erase line.
pub const EL_ERASE_LINE: char = 'K';
/// IL: Insert the indicated # of blank lines.
pub const IL_INSERT_LINE: char = 'L';
/// DL: Delete the indicated # of lines.
pub const DL_DELETE_LINE: char = 'M';
/// DCH: Delete the indicated # of characters on current line.
pub const DCH_DELETE_CHAR: char = 'P';
/// SU: Scroll up.
pub const SU_SCROLL_UP: char = 'S';
/// SD: Scroll down.
pub const SD_SCROLL_DOWN: char = 'T';
/// ECH: Erase the indicated # of characters on current line.
pub const ECH_ERASE_CHAR: char = 'X';

// Final bytes: modes, reports, misc.

/// DA: Device attributes. The console answers `ESC [ ? 6 c`.
pub const DA_DEVICE_ATTRIBUTES: char = 'c';
/// TBC: Clear tab stop(s).
pub const TBC_TAB_CLEAR: char = 'g';
/// SM: Set mode.
pub const SM_SET_MODE: char = 'h';
/// RM: Reset mode.
pub const RM_RESET_MODE: char = 'l';
/// SGR: Set graphics rendition.
pub const SGR_SET_GRAPHICS: char = 'm';
/// DSR: Device status report.
pub const DSR_DEVICE_STATUS: char = 'n';
/// DECLL: Set keyboard LEDs.
pub const DECLL_KEYBOARD_LEDS: char = 'q';
/// DECSTBM: Set scrolling region; parameters are top and bottom row.
pub const DECSTBM_SET_MARGINS: char = 'r';
/// Save cursor location.
pub const SCP_SAVE_CURSOR: char = 's';
/// Restore cursor location.
pub const RCP_RESTORE_CURSOR: char = 'u';

// Default parameters.

/// Default step for cursor movement, scroll, insert and delete commands.
pub const DEFAULT_STEP: i32 = 1;

/// Default mode for erase display / erase line: the whole display or line.
pub const DEFAULT_ERASE_MODE: i32 = ERASE_MODE_WHOLE;

// ED / EL parameters.

/// Erase from start (of display or line) to cursor.
pub const ERASE_MODE_START_TO_CURSOR: i32 = 1;
/// Erase the whole display or line.
pub const ERASE_MODE_WHOLE: i32 = 2;
/// Erase the whole display including the scroll-back buffer (ED only).
pub const ERASE_MODE_WHOLE_WITH_SCROLLBACK: i32 = 3;

// SM / RM parameters.

/// DECCRM (default off): Display control chars.
pub const MODE_DECCRM_DISPLAY_CONTROL_CHARS: i32 = 3;
/// DECIM (default off): Set insert mode.
pub const MODE_DECIM_INSERT: i32 = 4;
/// LF/NL (default off): Automatically follow echo of LF, VT or FF with CR.
pub const MODE_LNM_FOLLOW_CR: i32 = 20;

/// DECTCEM (DEC private mode 25): Cursor visible.
pub const PRIVATE_MODE_DECTCEM_SHOW_CURSOR: i32 = 25;

// DSR parameters.

/// Ask for device status. Answer is `ESC [ 0 n` (terminal OK).
pub const DSR_REPORT_STATUS: i32 = 5;
/// Ask for cursor position. Answer is `ESC [ y ; x R`.
pub const DSR_REPORT_CURSOR: i32 = 6;

// TBC parameters.

/// Clear tab stop at current position.
pub const TBC_CURRENT_COLUMN: i32 = 0;
/// Delete all tab stops.
pub const TBC_ALL: i32 = 3;
