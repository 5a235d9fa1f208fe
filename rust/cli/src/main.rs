use std::io;

fn main() {
    handreader_cli::logging::init_logging();
    let code = handreader_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
