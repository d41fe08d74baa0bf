extern crate termcolor;

use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

macro_rules! get_version {
    ($file:expr) => {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " ",
            include_str!(concat!(env!("OUT_DIR"), "/", $file))
        )
    };
}

/// Bold foreground for labels, `None` goes back to the terminal default.
pub fn paint(stdout: &mut StandardStream, color: Option<Color>) {
    stdout
        .set_color(ColorSpec::new().set_fg(color).set_bold(color.is_some()))
        .expect("Error: can't set output color");
}

macro_rules! write_color {
    ($dest:expr, $color:expr, $label:expr, $($arg:tt)*) => {{
        $crate::color::paint($dest, Some($color));
        write!($dest, "{:>8} ", $label);
        $crate::color::paint($dest, None);
        writeln!($dest, $($arg)*).expect("Failed to write output");
    }};
}

macro_rules! write_error {
    ($dest:expr, $label:expr, $($arg:tt)*) => {
        write_color!($dest, Color::Red, $label, $($arg)*)
    };
}

macro_rules! write_info {
    ($dest:expr, $label:expr, $($arg:tt)*) => {
        write_color!($dest, Color::Blue, $label, $($arg)*)
    };
}

macro_rules! write_ok {
    ($dest:expr, $label:expr, $($arg:tt)*) => {
        write_color!($dest, Color::Green, $label, $($arg)*)
    };
}

macro_rules! write_progress {
    ($dest:expr, $label:expr, $($arg:tt)*) => {
        write_color!($dest, Color::Cyan, $label, $($arg)*)
    };
}

macro_rules! write_skip {
    ($dest:expr, $label:expr, $($arg:tt)*) => {
        write_color!($dest, Color::Yellow, $label, $($arg)*)
    };
}
