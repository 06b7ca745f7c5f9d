use std::io::{stderr, stdout};
use std::process::exit;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let code = parlor_cli::run(args, &mut stdout(), &mut stderr());
    exit(code);
}
