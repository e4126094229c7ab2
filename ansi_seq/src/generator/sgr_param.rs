// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition) parameters, the `param` in `ESC [ param m`.
//!
//! An [`SgrParam`] is just the numeric code string, eg `"1"`, `"1;31"` or
//! `"38;2;255;0;0"`. The registry codes are compile time constants that borrow
//! `'static` strings; parameters built at runtime own their string.
//!
//! More info:
//! - <https://man7.org/linux/man-pages/man4/console_codes.4.html>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR>

use crate::constants::{CSI_PARAM_SEPARATOR, SGR_BG_EXTENDED, SGR_COLOR_MODE_256,
                       SGR_COLOR_MODE_RGB, SGR_FG_EXTENDED};
use std::{borrow::{Borrow, Cow},
          fmt::{Display, Formatter, Result}};
use strum_macros::{EnumCount, EnumIter};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SgrParam {
    value: Cow<'static, str>,
}

#[rustfmt::skip]
impl SgrParam {
    pub const RESET: SgrParam                   = SgrParam::from_static("0");
    pub const BOLD: SgrParam                    = SgrParam::from_static("1");
    pub const HALF_BRIGHT: SgrParam             = SgrParam::from_static("2");
    pub const ITALIC: SgrParam                  = SgrParam::from_static("3");
    pub const UNDERSCORE: SgrParam              = SgrParam::from_static("4");
    pub const BLINK: SgrParam                   = SgrParam::from_static("5");
    pub const FAST_BLINK: SgrParam              = SgrParam::from_static("6");
    pub const INVERSE: SgrParam                 = SgrParam::from_static("7");
    pub const INVISIBLE: SgrParam               = SgrParam::from_static("8");
    pub const STRIKETHROUGH: SgrParam           = SgrParam::from_static("9");
    pub const PRIMARY_FONT: SgrParam            = SgrParam::from_static("10");
    pub const ALTERNATE_FONT_1: SgrParam        = SgrParam::from_static("11");
    pub const ALTERNATE_FONT_2: SgrParam        = SgrParam::from_static("12");
    pub const ALTERNATE_FONT_3: SgrParam        = SgrParam::from_static("13");
    pub const ALTERNATE_FONT_4: SgrParam        = SgrParam::from_static("14");
    pub const ALTERNATE_FONT_5: SgrParam        = SgrParam::from_static("15");
    pub const ALTERNATE_FONT_6: SgrParam        = SgrParam::from_static("16");
    pub const ALTERNATE_FONT_7: SgrParam        = SgrParam::from_static("17");
    pub const ALTERNATE_FONT_8: SgrParam        = SgrParam::from_static("18");
    pub const ALTERNATE_FONT_9: SgrParam        = SgrParam::from_static("19");
    pub const BOLD_OFF: SgrParam                = SgrParam::from_static("21");
    pub const HALF_BRIGHT_OFF: SgrParam         = SgrParam::from_static("22");
    pub const ITALIC_OFF: SgrParam              = SgrParam::from_static("23");
    pub const UNDERSCORE_OFF: SgrParam          = SgrParam::from_static("24");
    pub const BLINK_OFF: SgrParam               = SgrParam::from_static("25");
    pub const FAST_BLINK_OFF: SgrParam          = SgrParam::from_static("26");
    pub const INVERSE_OFF: SgrParam             = SgrParam::from_static("27");
    pub const INVISIBLE_OFF: SgrParam           = SgrParam::from_static("28");
    pub const STRIKETHROUGH_OFF: SgrParam       = SgrParam::from_static("29");

    pub const FOREGROUND_BLACK: SgrParam        = SgrParam::from_static("30");
    pub const FOREGROUND_RED: SgrParam          = SgrParam::from_static("31");
    pub const FOREGROUND_GREEN: SgrParam        = SgrParam::from_static("32");
    pub const FOREGROUND_YELLOW: SgrParam       = SgrParam::from_static("33");
    pub const FOREGROUND_BLUE: SgrParam         = SgrParam::from_static("34");
    pub const FOREGROUND_MAGENTA: SgrParam      = SgrParam::from_static("35");
    pub const FOREGROUND_CYAN: SgrParam         = SgrParam::from_static("36");
    pub const FOREGROUND_WHITE: SgrParam        = SgrParam::from_static("37");
    pub const FOREGROUND_DEFAULT: SgrParam      = SgrParam::from_static("39");

    pub const BACKGROUND_BLACK: SgrParam        = SgrParam::from_static("40");
    pub const BACKGROUND_RED: SgrParam          = SgrParam::from_static("41");
    pub const BACKGROUND_GREEN: SgrParam        = SgrParam::from_static("42");
    pub const BACKGROUND_YELLOW: SgrParam       = SgrParam::from_static("43");
    pub const BACKGROUND_BLUE: SgrParam         = SgrParam::from_static("44");
    pub const BACKGROUND_MAGENTA: SgrParam      = SgrParam::from_static("45");
    pub const BACKGROUND_CYAN: SgrParam         = SgrParam::from_static("46");
    pub const BACKGROUND_WHITE: SgrParam        = SgrParam::from_static("47");
    pub const BACKGROUND_DEFAULT: SgrParam      = SgrParam::from_static("49");

    pub const FRAMED: SgrParam                  = SgrParam::from_static("51");
    pub const ENCIRCLED: SgrParam               = SgrParam::from_static("52");
    pub const OVERLINE: SgrParam                = SgrParam::from_static("53");
    pub const FRAMED_ENCIRCLED_OFF: SgrParam    = SgrParam::from_static("54");
    pub const OVERLINE_OFF: SgrParam            = SgrParam::from_static("55");

    pub const FOREGROUND_BRIGHT_BLACK: SgrParam   = SgrParam::from_static("90");
    pub const FOREGROUND_BRIGHT_RED: SgrParam     = SgrParam::from_static("91");
    pub const FOREGROUND_BRIGHT_GREEN: SgrParam   = SgrParam::from_static("92");
    pub const FOREGROUND_BRIGHT_YELLOW: SgrParam  = SgrParam::from_static("93");
    pub const FOREGROUND_BRIGHT_BLUE: SgrParam    = SgrParam::from_static("94");
    pub const FOREGROUND_BRIGHT_MAGENTA: SgrParam = SgrParam::from_static("95");
    pub const FOREGROUND_BRIGHT_CYAN: SgrParam    = SgrParam::from_static("96");
    pub const FOREGROUND_BRIGHT_WHITE: SgrParam   = SgrParam::from_static("97");

    pub const BACKGROUND_BRIGHT_BLACK: SgrParam   = SgrParam::from_static("100");
    pub const BACKGROUND_BRIGHT_RED: SgrParam     = SgrParam::from_static("101");
    pub const BACKGROUND_BRIGHT_GREEN: SgrParam   = SgrParam::from_static("102");
    pub const BACKGROUND_BRIGHT_YELLOW: SgrParam  = SgrParam::from_static("103");
    pub const BACKGROUND_BRIGHT_BLUE: SgrParam    = SgrParam::from_static("104");
    pub const BACKGROUND_BRIGHT_MAGENTA: SgrParam = SgrParam::from_static("105");
    pub const BACKGROUND_BRIGHT_CYAN: SgrParam    = SgrParam::from_static("106");
    pub const BACKGROUND_BRIGHT_WHITE: SgrParam   = SgrParam::from_static("107");
}

static ALTERNATE_FONTS: [SgrParam; 9] = [
    SgrParam::ALTERNATE_FONT_1,
    SgrParam::ALTERNATE_FONT_2,
    SgrParam::ALTERNATE_FONT_3,
    SgrParam::ALTERNATE_FONT_4,
    SgrParam::ALTERNATE_FONT_5,
    SgrParam::ALTERNATE_FONT_6,
    SgrParam::ALTERNATE_FONT_7,
    SgrParam::ALTERNATE_FONT_8,
    SgrParam::ALTERNATE_FONT_9,
];

impl SgrParam {
    const fn from_static(value: &'static str) -> Self {
        Self {
            value: Cow::Borrowed(value),
        }
    }

    /// Wraps any code. Nothing is checked, so `of("not a number")` is accepted and
    /// rendered as is.
    #[must_use]
    pub fn of(value: impl Into<Cow<'static, str>>) -> Self {
        Self {
            value: value.into(),
        }
    }

    #[must_use]
    pub fn value(&self) -> &str { &self.value }

    /// Joins the codes with `;` in the given order. An empty input yields an empty
    /// parameter, which terminals treat as reset.
    ///
    /// ```rust
    /// use ansi_seq::SgrParam;
    ///
    /// let param = SgrParam::concat([SgrParam::BOLD, SgrParam::FOREGROUND_RED]);
    /// assert_eq!(param.value(), "1;31");
    /// ```
    #[must_use]
    pub fn concat(params: impl IntoIterator<Item = impl Borrow<SgrParam>>) -> Self {
        let mut acc = String::new();
        for (index, param) in params.into_iter().enumerate() {
            if index > 0 {
                acc.push(CSI_PARAM_SEPARATOR);
            }
            acc.push_str(param.borrow().value());
        }
        Self::of(acc)
    }

    /// 256 color palette foreground: `38;5;n`.
    #[must_use]
    pub fn foreground_color(n: i32) -> Self {
        Self::of(format!(
            "{SGR_FG_EXTENDED}{CSI_PARAM_SEPARATOR}{SGR_COLOR_MODE_256}{CSI_PARAM_SEPARATOR}{n}"
        ))
    }

    /// 24-bit foreground: `38;2;r;g;b`.
    #[must_use]
    pub fn foreground_color_rgb(r: i32, g: i32, b: i32) -> Self {
        Self::of(rgb(SGR_FG_EXTENDED, r, g, b))
    }

    /// 256 color palette background: `48;5;n`.
    #[must_use]
    pub fn background_color(n: i32) -> Self {
        Self::of(format!(
            "{SGR_BG_EXTENDED}{CSI_PARAM_SEPARATOR}{SGR_COLOR_MODE_256}{CSI_PARAM_SEPARATOR}{n}"
        ))
    }

    /// 24-bit background: `48;2;r;g;b`.
    #[must_use]
    pub fn background_color_rgb(r: i32, g: i32, b: i32) -> Self {
        Self::of(rgb(SGR_BG_EXTENDED, r, g, b))
    }

    /// Selects alternate font `n`, which must be in `1..=9`.
    ///
    /// # Errors
    ///
    /// Returns [`SgrParamError::AlternateFontOutOfRange`] for any other `n`.
    pub fn alternate_font(n: i32) -> std::result::Result<Self, SgrParamError> {
        usize::try_from(n)
            .ok()
            .and_then(|font| font.checked_sub(1))
            .and_then(|index| ALTERNATE_FONTS.get(index))
            .cloned()
            .ok_or(SgrParamError::AlternateFontOutOfRange { n })
    }

    /// One of the 16 basic foreground colors (30..37, or 90..97 when `bright`).
    #[must_use]
    #[rustfmt::skip]
    pub const fn foreground(color: AnsiColor, bright: bool) -> Self {
        match (color, bright) {
            (AnsiColor::Black, false)   => Self::FOREGROUND_BLACK,
            (AnsiColor::Red, false)     => Self::FOREGROUND_RED,
            (AnsiColor::Green, false)   => Self::FOREGROUND_GREEN,
            (AnsiColor::Yellow, false)  => Self::FOREGROUND_YELLOW,
            (AnsiColor::Blue, false)    => Self::FOREGROUND_BLUE,
            (AnsiColor::Magenta, false) => Self::FOREGROUND_MAGENTA,
            (AnsiColor::Cyan, false)    => Self::FOREGROUND_CYAN,
            (AnsiColor::White, false)   => Self::FOREGROUND_WHITE,
            (AnsiColor::Black, true)    => Self::FOREGROUND_BRIGHT_BLACK,
            (AnsiColor::Red, true)      => Self::FOREGROUND_BRIGHT_RED,
            (AnsiColor::Green, true)    => Self::FOREGROUND_BRIGHT_GREEN,
            (AnsiColor::Yellow, true)   => Self::FOREGROUND_BRIGHT_YELLOW,
            (AnsiColor::Blue, true)     => Self::FOREGROUND_BRIGHT_BLUE,
            (AnsiColor::Magenta, true)  => Self::FOREGROUND_BRIGHT_MAGENTA,
            (AnsiColor::Cyan, true)     => Self::FOREGROUND_BRIGHT_CYAN,
            (AnsiColor::White, true)    => Self::FOREGROUND_BRIGHT_WHITE,
        }
    }

    /// One of the 16 basic background colors (40..47, or 100..107 when `bright`).
    #[must_use]
    #[rustfmt::skip]
    pub const fn background(color: AnsiColor, bright: bool) -> Self {
        match (color, bright) {
            (AnsiColor::Black, false)   => Self::BACKGROUND_BLACK,
            (AnsiColor::Red, false)     => Self::BACKGROUND_RED,
            (AnsiColor::Green, false)   => Self::BACKGROUND_GREEN,
            (AnsiColor::Yellow, false)  => Self::BACKGROUND_YELLOW,
            (AnsiColor::Blue, false)    => Self::BACKGROUND_BLUE,
            (AnsiColor::Magenta, false) => Self::BACKGROUND_MAGENTA,
            (AnsiColor::Cyan, false)    => Self::BACKGROUND_CYAN,
            (AnsiColor::White, false)   => Self::BACKGROUND_WHITE,
            (AnsiColor::Black, true)    => Self::BACKGROUND_BRIGHT_BLACK,
            (AnsiColor::Red, true)      => Self::BACKGROUND_BRIGHT_RED,
            (AnsiColor::Green, true)    => Self::BACKGROUND_BRIGHT_GREEN,
            (AnsiColor::Yellow, true)   => Self::BACKGROUND_BRIGHT_YELLOW,
            (AnsiColor::Blue, true)     => Self::BACKGROUND_BRIGHT_BLUE,
            (AnsiColor::Magenta, true)  => Self::BACKGROUND_BRIGHT_MAGENTA,
            (AnsiColor::Cyan, true)     => Self::BACKGROUND_BRIGHT_CYAN,
            (AnsiColor::White, true)    => Self::BACKGROUND_BRIGHT_WHITE,
        }
    }
}

fn rgb(introducer: &str, r: i32, g: i32, b: i32) -> String {
    format!(
        "{introducer}{CSI_PARAM_SEPARATOR}{SGR_COLOR_MODE_RGB}{CSI_PARAM_SEPARATOR}{r}{CSI_PARAM_SEPARATOR}{g}{CSI_PARAM_SEPARATOR}{b}"
    )
}

impl Display for SgrParam {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { f.write_str(&self.value) }
}

impl AsRef<str> for SgrParam {
    fn as_ref(&self) -> &str { &self.value }
}

/// The 8 basic terminal colors, in SGR order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, miette::Diagnostic)]
pub enum SgrParamError {
    #[error("🔤 Alternate font must be in range 1..=9, got: {n}")]
    #[diagnostic(
        code(ansi_seq::sgr::alternate_font_out_of_range),
        help("Use 1 through 9, or SgrParam::PRIMARY_FONT to go back to the default font")
    )]
    AlternateFontOutOfRange { n: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::{EnumCount, IntoEnumIterator};
    use test_case::test_case;

    #[test_case(SgrParam::RESET, "0")]
    #[test_case(SgrParam::BOLD, "1")]
    #[test_case(SgrParam::HALF_BRIGHT, "2")]
    #[test_case(SgrParam::ITALIC, "3")]
    #[test_case(SgrParam::UNDERSCORE, "4")]
    #[test_case(SgrParam::BLINK, "5")]
    #[test_case(SgrParam::FAST_BLINK, "6")]
    #[test_case(SgrParam::INVERSE, "7")]
    #[test_case(SgrParam::INVISIBLE, "8")]
    #[test_case(SgrParam::STRIKETHROUGH, "9")]
    #[test_case(SgrParam::PRIMARY_FONT, "10")]
    #[test_case(SgrParam::ALTERNATE_FONT_1, "11")]
    #[test_case(SgrParam::ALTERNATE_FONT_9, "19")]
    #[test_case(SgrParam::BOLD_OFF, "21")]
    #[test_case(SgrParam::HALF_BRIGHT_OFF, "22")]
    #[test_case(SgrParam::ITALIC_OFF, "23")]
    #[test_case(SgrParam::UNDERSCORE_OFF, "24")]
    #[test_case(SgrParam::BLINK_OFF, "25")]
    #[test_case(SgrParam::FAST_BLINK_OFF, "26")]
    #[test_case(SgrParam::INVERSE_OFF, "27")]
    #[test_case(SgrParam::INVISIBLE_OFF, "28")]
    #[test_case(SgrParam::STRIKETHROUGH_OFF, "29")]
    #[test_case(SgrParam::FOREGROUND_BLACK, "30")]
    #[test_case(SgrParam::FOREGROUND_WHITE, "37")]
    #[test_case(SgrParam::FOREGROUND_DEFAULT, "39")]
    #[test_case(SgrParam::BACKGROUND_BLACK, "40")]
    #[test_case(SgrParam::BACKGROUND_WHITE, "47")]
    #[test_case(SgrParam::BACKGROUND_DEFAULT, "49")]
    #[test_case(SgrParam::FRAMED, "51")]
    #[test_case(SgrParam::ENCIRCLED, "52")]
    #[test_case(SgrParam::OVERLINE, "53")]
    #[test_case(SgrParam::FRAMED_ENCIRCLED_OFF, "54")]
    #[test_case(SgrParam::OVERLINE_OFF, "55")]
    #[test_case(SgrParam::FOREGROUND_BRIGHT_BLACK, "90")]
    #[test_case(SgrParam::FOREGROUND_BRIGHT_WHITE, "97")]
    #[test_case(SgrParam::BACKGROUND_BRIGHT_BLACK, "100")]
    #[test_case(SgrParam::BACKGROUND_BRIGHT_WHITE, "107")]
    fn test_registry_value(param: SgrParam, expected: &str) {
        assert_eq!(param.value(), expected);
        assert_eq!(param.to_string(), expected);
    }

    #[test]
    fn test_basic_colors_follow_sgr_order() {
        assert_eq!(AnsiColor::iter().count(), AnsiColor::COUNT);
        for (offset, color) in (0..).zip(AnsiColor::iter()) {
            assert_eq!(
                SgrParam::foreground(color, false).value(),
                (30 + offset).to_string()
            );
            assert_eq!(
                SgrParam::foreground(color, true).value(),
                (90 + offset).to_string()
            );
            assert_eq!(
                SgrParam::background(color, false).value(),
                (40 + offset).to_string()
            );
            assert_eq!(
                SgrParam::background(color, true).value(),
                (100 + offset).to_string()
            );
        }
    }

    #[test]
    fn test_of_is_verbatim() {
        assert_eq!(SgrParam::of("31").value(), "31");
        assert_eq!(SgrParam::of(String::from("1;4")).value(), "1;4");
        assert_eq!(SgrParam::of("").value(), "");
        assert_eq!(SgrParam::of("31"), SgrParam::FOREGROUND_RED);
    }

    #[test]
    fn test_concat() {
        assert_eq!(
            SgrParam::concat([SgrParam::BOLD, SgrParam::FOREGROUND_RED]).value(),
            "1;31"
        );
        assert_eq!(SgrParam::concat([SgrParam::BOLD]).value(), "1");
        assert_eq!(SgrParam::concat(Vec::<SgrParam>::new()).value(), "");
        assert_eq!(
            SgrParam::concat(&[SgrParam::ITALIC, SgrParam::foreground_color(200)]).value(),
            "3;38;5;200"
        );
    }

    #[test]
    fn test_concat_is_order_preserving_and_associative() {
        let a = SgrParam::BOLD;
        let b = SgrParam::UNDERSCORE;
        let c = SgrParam::BACKGROUND_BLUE;

        let left = SgrParam::concat([SgrParam::concat([&a, &b]), c.clone()]);
        let right = SgrParam::concat([a.clone(), SgrParam::concat([&b, &c])]);
        let flat = SgrParam::concat([&a, &b, &c]);

        assert_eq!(left, flat);
        assert_eq!(right, flat);
        assert_eq!(flat.value(), "1;4;44");
        assert_eq!(SgrParam::concat([&c, &b, &a]).value(), "44;4;1");
    }

    #[test]
    fn test_extended_colors() {
        assert_eq!(SgrParam::foreground_color(200).value(), "38;5;200");
        assert_eq!(SgrParam::background_color(17).value(), "48;5;17");
        assert_eq!(
            SgrParam::foreground_color_rgb(255, 128, 0).value(),
            "38;2;255;128;0"
        );
        assert_eq!(
            SgrParam::background_color_rgb(0, 0, 0).value(),
            "48;2;0;0;0"
        );
    }

    #[test]
    fn test_extended_colors_are_not_validated() {
        assert_eq!(SgrParam::foreground_color(300).value(), "38;5;300");
        assert_eq!(SgrParam::foreground_color(-1).value(), "38;5;-1");
        assert_eq!(
            SgrParam::foreground_color_rgb(256, -1, 1000).value(),
            "38;2;256;-1;1000"
        );
    }

    #[test]
    fn test_alternate_font_in_range() {
        for n in 1..=9 {
            let param = SgrParam::alternate_font(n).unwrap();
            assert_eq!(param.value(), (10 + n).to_string());
        }
        assert_eq!(
            SgrParam::alternate_font(1).unwrap(),
            SgrParam::ALTERNATE_FONT_1
        );
    }

    #[test_case(0)]
    #[test_case(10)]
    #[test_case(-1)]
    #[test_case(i32::MIN)]
    #[test_case(i32::MAX)]
    fn test_alternate_font_out_of_range(n: i32) {
        let result = SgrParam::alternate_font(n);
        assert_eq!(result, Err(SgrParamError::AlternateFontOutOfRange { n }));
    }

    #[test]
    fn test_alternate_font_error_diagnostic() {
        use miette::Diagnostic;

        let Err(error) = SgrParam::alternate_font(10) else {
            panic!("10 must be rejected");
        };
        assert!(error.to_string().contains("got: 10"));
        assert_eq!(
            error.code().map(|it| it.to_string()).as_deref(),
            Some("ansi_seq::sgr::alternate_font_out_of_range")
        );
        assert!(error.help().is_some());
    }
}
