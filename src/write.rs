extern crate termcolor;

use std::{error::Error, io::Write};
use termcolor::{Color, StandardStream};

/// Prints the outcome of a whole run, returns whether it succeeded.
#[allow(unused_must_use)]
pub fn write_result<T, E, F>(stdout: &mut StandardStream, result: Result<T, E>, success: F) -> bool
where
    E: Error,
    F: FnOnce(T) -> String,
{
    match result {
        Ok(v) => {
            write_ok!(stdout, "Finished", "{}", success(v));
            true
        }
        Err(e) => {
            write_error!(stdout, "Error", "{}", e);
            false
        }
    }
}
