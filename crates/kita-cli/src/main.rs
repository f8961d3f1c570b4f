use kita_core::logging;

mod cli;
mod portal;

fn main() {
    let args = cli::Cli::parse_args();
    logging::init_logging(args.verbosity());
    std::process::exit(cli::run(args));
}
