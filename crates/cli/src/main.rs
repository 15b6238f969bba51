use std::{env::args_os, process::ExitCode};

use env_logger::init;
use gfont_cli::cli::dispatch;

fn main() -> ExitCode {
    init();
    dispatch(args_os())
}
