// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Prints a sample of every builder layer to stdout.
//!
//! Run with `cargo run --example demo`. Set `ANSI_SEQ_DEMO_VERBOSE=1` to see the color
//! support detection logs on stderr.

use ansi_seq::{AnsiColor, ColorSupport, EscSequence, SgrParam, StyledContent,
               csi_chars, ctl_chars, esc_chars, global_color_support, sgr_chars};
use miette::IntoDiagnostic;
use std::io::{Write, stdout};
use strum::IntoEnumIterator;
use tracing_subscriber::filter::LevelFilter;

const VERBOSE_ENV_VAR: &str = "ANSI_SEQ_DEMO_VERBOSE";

fn main() -> miette::Result<()> {
    let level_filter = if std::env::var_os(VERBOSE_ENV_VAR).is_some() {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level_filter)
        .with_writer(std::io::stderr)
        .init();

    let color_support = global_color_support::detect();
    tracing::info!(?color_support, "starting demo");
    if color_support == ColorSupport::NoColor {
        tracing::info!("no color support detected, forcing truecolor for the demo");
        global_color_support::set_override(ColorSupport::Truecolor);
    }

    let mut out = stdout().lock();

    // Attributes.
    for (label, param) in [
        ("bold", SgrParam::BOLD),
        ("half bright", SgrParam::HALF_BRIGHT),
        ("italic", SgrParam::ITALIC),
        ("underscore", SgrParam::UNDERSCORE),
        ("inverse", SgrParam::INVERSE),
        ("strikethrough", SgrParam::STRIKETHROUGH),
        ("overline", SgrParam::OVERLINE),
    ] {
        write!(out, "{} ", sgr_chars::with_param_if_supported(label, &param))
            .into_diagnostic()?;
    }
    writeln!(out).into_diagnostic()?;

    // Basic and bright colors.
    for bright in [false, true] {
        for color in AnsiColor::iter() {
            write!(
                out,
                "{}{}",
                StyledContent::new(format!(" {color:?} "), SgrParam::background(color, bright)),
                ctl_chars::TAB,
            )
            .into_diagnostic()?;
        }
        writeln!(out).into_diagnostic()?;
    }

    // 256 color palette ramp and a truecolor gradient.
    for n in 232..=255 {
        write!(out, "{}", sgr_chars::with_param("█", &SgrParam::foreground_color(n)))
            .into_diagnostic()?;
    }
    writeln!(out).into_diagnostic()?;
    for step in 0..32 {
        let red = step * 8;
        let param = SgrParam::foreground_color_rgb(red, 255 - red, 128);
        write!(out, "{}", sgr_chars::with_param("█", &param))
            .into_diagnostic()?;
    }
    writeln!(out).into_diagnostic()?;

    // Compound parameters.
    writeln!(
        out,
        "{}",
        sgr_chars::with_params(
            "bold + underscore on blue",
            [SgrParam::BOLD, SgrParam::UNDERSCORE, SgrParam::BACKGROUND_BLUE],
        )
    )
    .into_diagnostic()?;

    // Alternate fonts. Out of range is reported, then the demo carries on.
    let written = match SgrParam::alternate_font(12) {
        Ok(param) => writeln!(out, "{}", sgr_chars::with_param("font 12", &param)),
        Err(error) => writeln!(out, "{:?}", miette::Report::new(error)),
    };
    written.into_diagnostic()?;
    let font = SgrParam::alternate_font(1)?;
    writeln!(out, "{}", sgr_chars::with_param("alternate font 1", &font))
        .into_diagnostic()?;

    // Cursor movement: save, draw a marker to the right, come back.
    write!(
        out,
        "{}{}{}{}",
        EscSequence::SaveState,
        csi_chars::cursor_forward(40),
        sgr_chars::foreground_magenta("<- moved 40 columns", true),
        esc_chars::RESTORE_STATE,
    )
    .into_diagnostic()?;
    writeln!(out, "{}", sgr_chars::foreground_default("back at column 1"))
        .into_diagnostic()?;

    out.flush().into_diagnostic()?;
    tracing::info!("done");
    Ok(())
}
