// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decide whether the sequences built by this crate should be emitted at all.
//!
//! The builders never consult this module; they always return the full sequence. It
//! exists for callers that print to a real terminal and want to honor `NO_COLOR`, a
//! dumb `TERM` or a redirected stdout. See
//! [`crate::sgr_chars::with_param_if_supported`].
//!
//! Resolution order in [`global_color_support::detect()`]:
//! 1. An explicit override set with [`global_color_support::set_override()`].
//! 2. The memoized result of a previous detection.
//! 3. [`examine_env_vars_to_determine_color_support()`], whose result is then memoized.

use std::{env,
          sync::atomic::{AtomicI8, Ordering}};

pub mod global_color_support {
    use super::{AtomicI8, ColorSupport, Ordering, Stream,
                examine_env_vars_to_determine_color_support};

    /// Explicit override. Highest priority.
    static COLOR_SUPPORT_OVERRIDE: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);

    /// Memoized result of [`examine_env_vars_to_determine_color_support()`].
    static COLOR_SUPPORT_CACHED: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);

    const NOT_SET_VALUE: i8 = -1;

    /// Returns the override if one is set, else the cached detection result, else runs
    /// detection against [`Stream::Stdout`] and caches it. The environment is only
    /// examined once per process unless [`clear_cache()`] is called.
    #[must_use]
    pub fn detect() -> ColorSupport {
        if let Ok(it) = try_get_override() {
            return it;
        }

        if let Ok(cached) = try_get_cached() {
            return cached;
        }

        let detected = examine_env_vars_to_determine_color_support(Stream::Stdout);
        set_cached(detected);
        tracing::debug!(color_support = ?detected, "detected terminal color support");
        detected
    }

    /// Regardless of the environment, [`detect()`] returns `value` until
    /// [`clear_override()`] is called.
    ///
    /// # Testing support
    ///
    /// This is process wide state. Any test that calls this function must be annotated
    /// with `#[serial]` from the [serial_test](https://crates.io/crates/serial_test)
    /// crate, since tests run in parallel on many threads.
    pub fn set_override(value: ColorSupport) {
        COLOR_SUPPORT_OVERRIDE.store(i8::from(value), Ordering::Release);
        tracing::debug!(color_support = ?value, "color support override set");
    }

    pub fn clear_override() {
        COLOR_SUPPORT_OVERRIDE.store(NOT_SET_VALUE, Ordering::Release);
        tracing::debug!("color support override cleared");
    }

    /// Forces the next [`detect()`] without an override to examine the environment
    /// again.
    pub fn clear_cache() { COLOR_SUPPORT_CACHED.store(NOT_SET_VALUE, Ordering::Release); }

    /// # Errors
    ///
    /// Returns `Err(())` if no override is set.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_override() -> Result<ColorSupport, ()> {
        ColorSupport::try_from(COLOR_SUPPORT_OVERRIDE.load(Ordering::Acquire))
    }

    /// # Errors
    ///
    /// Returns `Err(())` if detection has not run since the last [`clear_cache()`].
    #[allow(clippy::result_unit_err)]
    pub fn try_get_cached() -> Result<ColorSupport, ()> {
        ColorSupport::try_from(COLOR_SUPPORT_CACHED.load(Ordering::Acquire))
    }

    fn set_cached(value: ColorSupport) {
        COLOR_SUPPORT_CACHED.store(i8::from(value), Ordering::Release);
    }
}

/// Determine whether color is supported heuristically, from these environment
/// variables:
///
/// - `NO_COLOR` (any value except `0`) and `TERM=dumb` disable color.
/// - Output that is not a terminal disables color, unless `IGNORE_IS_TERMINAL` is set
///   to anything except `0`.
/// - `TERM_PROGRAM` and `COLORTERM` are checked per platform.
/// - `COLORTERM`, a known `TERM` family, `CLICOLOR` or running in CI enable color.
///
/// ## Caching
///
/// Every call reads the environment and may query the tty. Callers that style many
/// spans, such as [`crate::sgr_chars::with_param_if_supported`], go through
/// [`global_color_support::detect()`], which memoizes the result so this runs once per
/// process.
///
/// ## Detection order
///
/// 1. Explicit disabling (`NO_COLOR`, `TERM=dumb`).
/// 2. Tty check, unless `IGNORE_IS_TERMINAL` overrides it.
/// 3. Platform specific checks for macOS, Linux and Windows.
/// 4. Generic fallbacks.
#[must_use]
pub fn examine_env_vars_to_determine_color_support(stream: Stream) -> ColorSupport {
    if env_no_color()
        || env::var("TERM").is_ok_and(|v| v == "dumb")
        || !(is_a_tty(stream) || env::var("IGNORE_IS_TERMINAL").is_ok_and(|v| v != "0"))
    {
        return ColorSupport::NoColor;
    }

    if env::consts::OS == "macos" {
        if env::var("TERM_PROGRAM").is_ok_and(|v| v == "Apple_Terminal")
            && env::var("TERM").is_ok_and(|term| check_256_color(&term))
        {
            return ColorSupport::Ansi256;
        }

        if env::var("TERM_PROGRAM").is_ok_and(|v| v == "iTerm.app")
            || env::var("COLORTERM").is_ok_and(|v| v == "truecolor")
        {
            return ColorSupport::Truecolor;
        }
    }

    if env::consts::OS == "linux" && env::var("COLORTERM").is_ok_and(|v| v == "truecolor")
    {
        return ColorSupport::Truecolor;
    }

    if env::consts::OS == "windows" {
        return ColorSupport::Truecolor;
    }

    if env::var("COLORTERM").is_ok()
        || env::var("TERM").is_ok_and(|term| check_ansi_color(&term))
        || env::var("CLICOLOR").is_ok_and(|v| v != "0")
        || is_ci::uncached()
    {
        return ColorSupport::Truecolor;
    }

    ColorSupport::NoColor
}

/// The stream to check for color support.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSupport {
    Truecolor,
    Ansi256,
    Grayscale,
    NoColor,
}

mod convert_between_color_and_i8 {
    use super::ColorSupport;

    impl TryFrom<i8> for ColorSupport {
        type Error = ();

        fn try_from(value: i8) -> Result<Self, Self::Error> {
            match value {
                1 => Ok(ColorSupport::Ansi256),
                2 => Ok(ColorSupport::Truecolor),
                3 => Ok(ColorSupport::NoColor),
                4 => Ok(ColorSupport::Grayscale),
                _ => Err(()),
            }
        }
    }

    impl From<ColorSupport> for i8 {
        #[rustfmt::skip]
        fn from(value: ColorSupport) -> Self {
            match value {
                ColorSupport::Ansi256   => 1,
                ColorSupport::Truecolor => 2,
                ColorSupport::NoColor   => 3,
                ColorSupport::Grayscale => 4,
            }
        }
    }
}

fn is_a_tty(stream: Stream) -> bool {
    use std::io::IsTerminal;
    match stream {
        Stream::Stdout => std::io::stdout().is_terminal(),
        Stream::Stderr => std::io::stderr().is_terminal(),
    }
}

fn check_256_color(term: &str) -> bool {
    term.ends_with("256") || term.ends_with("256color")
}

fn check_ansi_color(term: &str) -> bool {
    term.starts_with("screen")
        || term.starts_with("vscode")
        || term.starts_with("xterm")
        || term.starts_with("vt100")
        || term.starts_with("vt220")
        || term.starts_with("rxvt")
        || term.contains("color")
        || term.contains("ansi")
        || term.contains("cygwin")
        || term.contains("linux")
}

fn env_no_color() -> bool { env::var("NO_COLOR").is_ok_and(|v| v != "0") }
