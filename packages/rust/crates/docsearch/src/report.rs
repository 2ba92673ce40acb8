//! `--env` report of the `DOCSEARCH_*` variables in effect.

use std::io::{self, Write};

use crate::config::{COLORED_VAR, MCOLORED_VAR, PATH_VAR, SearchConfig};
use crate::render::Message;

/// Write one block per recognized variable, in the order the variables
/// were captured, followed by a blank line.
///
/// # Errors
///
/// Propagates write failures on `out`.
pub fn write_env_report<W: Write>(out: &mut W, config: &SearchConfig) -> io::Result<()> {
    for (key, _) in config.env_vars.iter() {
        match key {
            COLORED_VAR => {
                write_key(out, key, config.colored)?;
                writeln!(out, "color mode {}", config.color_mode())?;
            }
            MCOLORED_VAR => {
                write_key(out, key, config.colored)?;
                writeln!(out, "color mode {}", config.matched_mode())?;
            }
            PATH_VAR => {
                write_key(out, key, config.colored)?;
                for root in &config.roots {
                    writeln!(out, "{}", root.display())?;
                }
            }
            _ => {}
        }
    }
    writeln!(out)
}

fn write_key<W: Write>(out: &mut W, key: &str, colored: bool) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", Message::info(key, colored))
}
