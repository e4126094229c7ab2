// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Control characters, and [`escape()`] which prefixes ESC to anything.
//!
//! - BEL (0x07, ^G) beeps;
//! - BS (0x08, ^H) backspaces one column (but not past the beginning of the line);
//! - HT (0x09, ^I) goes to the next tab stop or to the end of the line if there is no
//!   earlier tab stop;
//! - LF (0x0A, ^J), VT (0x0B, ^K) and FF (0x0C, ^L) all give a linefeed, and if LF/NL
//!   (new-line mode) is set also a carriage return;
//! - CR (0x0D, ^M) gives a carriage return;
//! - SO (0x0E, ^N) activates the G1 character set;
//! - SI (0x0F, ^O) activates the G0 character set;
//! - CAN (0x18, ^X) and SUB (0x1A, ^Z) interrupt escape sequences;
//! - ESC (0x1B, ^[) starts an escape sequence;
//! - DEL (0x7F) is ignored;
//! - CSI (0x9B) is equivalent to ESC [.

use crate::{BufTextStorage,
            constants::{BEL, BS, CAN, CR, CSI_8BIT, DEL, ESC as ESC_CHAR, FF, HT, LF,
                        SI, SO, SUB, VT}};
use const_format::concatcp;
use std::fmt::{Display, Formatter, Result};
use strum_macros::{EnumCount, EnumIter};

pub const BELL: &str = concatcp!(BEL);
pub const BACKSPACE: &str = concatcp!(BS);
pub const TAB: &str = concatcp!(HT);
pub const LINEFEED: &str = concatcp!(LF);
pub const VERTICAL_TAB: &str = concatcp!(VT);
pub const FORM_FEED: &str = concatcp!(FF);
pub const CARRIAGE_RETURN: &str = concatcp!(CR);
pub const ACTIVATE_CHARSET_G1: &str = concatcp!(SO);
pub const ACTIVATE_CHARSET_G0: &str = concatcp!(SI);
pub const INTERRUPT_ESCAPE: &str = concatcp!(CAN);
pub const SUBSTITUTE: &str = concatcp!(SUB);
pub const ESC: &str = concatcp!(ESC_CHAR);
pub const DELETE: &str = concatcp!(DEL);
pub const CSI_C1: &str = concatcp!(CSI_8BIT);

/// Returns ESC followed by `value`. The value is copied verbatim.
///
/// ```rust
/// use ansi_seq::ctl_chars::escape;
///
/// assert_eq!(escape("c"), "\x1bc");
/// ```
#[must_use]
pub fn escape(value: impl AsRef<str>) -> String {
    let value = value.as_ref();
    let mut acc = BufTextStorage::with_capacity(ESC_CHAR.len_utf8() + value.len());
    acc.push(ESC_CHAR);
    acc.push_str(value);
    acc
}

/// Every named control character, for callers that need to enumerate or match on
/// them instead of using the string constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum ControlChar {
    Bell,
    Backspace,
    Tab,
    Linefeed,
    VerticalTab,
    FormFeed,
    CarriageReturn,
    ActivateCharsetG1,
    ActivateCharsetG0,
    InterruptEscape,
    Substitute,
    Escape,
    Delete,
    CsiC1,
}

impl ControlChar {
    #[must_use]
    #[rustfmt::skip]
    pub const fn as_char(self) -> char {
        match self {
            ControlChar::Bell              => BEL,
            ControlChar::Backspace         => BS,
            ControlChar::Tab               => HT,
            ControlChar::Linefeed          => LF,
            ControlChar::VerticalTab       => VT,
            ControlChar::FormFeed          => FF,
            ControlChar::CarriageReturn    => CR,
            ControlChar::ActivateCharsetG1 => SO,
            ControlChar::ActivateCharsetG0 => SI,
            ControlChar::InterruptEscape   => CAN,
            ControlChar::Substitute        => SUB,
            ControlChar::Escape            => ESC_CHAR,
            ControlChar::Delete            => DEL,
            ControlChar::CsiC1             => CSI_8BIT,
        }
    }

    /// The matching string constant from this module.
    #[must_use]
    #[rustfmt::skip]
    pub const fn as_str(self) -> &'static str {
        match self {
            ControlChar::Bell              => BELL,
            ControlChar::Backspace         => BACKSPACE,
            ControlChar::Tab               => TAB,
            ControlChar::Linefeed          => LINEFEED,
            ControlChar::VerticalTab       => VERTICAL_TAB,
            ControlChar::FormFeed          => FORM_FEED,
            ControlChar::CarriageReturn    => CARRIAGE_RETURN,
            ControlChar::ActivateCharsetG1 => ACTIVATE_CHARSET_G1,
            ControlChar::ActivateCharsetG0 => ACTIVATE_CHARSET_G0,
            ControlChar::InterruptEscape   => INTERRUPT_ESCAPE,
            ControlChar::Substitute        => SUBSTITUTE,
            ControlChar::Escape            => ESC,
            ControlChar::Delete            => DELETE,
            ControlChar::CsiC1             => CSI_C1,
        }
    }

    #[must_use]
    pub fn code_point(self) -> u32 { u32::from(self.as_char()) }
}

impl Display for ControlChar {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { f.write_str(self.as_str()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::{EnumCount, IntoEnumIterator};
    use test_case::test_case;

    #[test_case(BELL, 0x07)]
    #[test_case(BACKSPACE, 0x08)]
    #[test_case(TAB, 0x09)]
    #[test_case(LINEFEED, 0x0A)]
    #[test_case(VERTICAL_TAB, 0x0B)]
    #[test_case(FORM_FEED, 0x0C)]
    #[test_case(CARRIAGE_RETURN, 0x0D)]
    #[test_case(ACTIVATE_CHARSET_G1, 0x0E)]
    #[test_case(ACTIVATE_CHARSET_G0, 0x0F)]
    #[test_case(INTERRUPT_ESCAPE, 0x18)]
    #[test_case(SUBSTITUTE, 0x1A)]
    #[test_case(ESC, 0x1B)]
    #[test_case(DELETE, 0x7F)]
    #[test_case(CSI_C1, 0x9B)]
    fn test_control_code_point(code: &str, expected: u32) {
        let mut chars = code.chars();
        assert_eq!(chars.next().map(u32::from), Some(expected));
        assert_eq!(chars.next(), None);
    }

    #[test]
    fn test_enum_matches_constants() {
        assert_eq!(ControlChar::iter().count(), ControlChar::COUNT);
        for it in ControlChar::iter() {
            assert_eq!(it.as_str(), it.as_char().to_string());
            assert_eq!(it.to_string(), it.as_str());
            assert_eq!(u32::from(it.as_char()), it.code_point());
        }
    }

    #[test]
    fn test_enum_values_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for it in ControlChar::iter() {
            assert!(seen.insert(it.code_point()), "duplicate: {it:?}");
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("c"), "\x1bc");
        assert_eq!(escape(""), "\x1b");
        assert_eq!(escape(String::from("[2J")), "\x1b[2J");
    }

    #[test]
    fn test_escape_does_not_validate() {
        assert_eq!(escape("not a real sequence"), "\x1bnot a real sequence");
        assert_eq!(escape(ESC), "\x1b\x1b");
    }
}
