use miette::Result;
use templater::cli::chop::{self, normalize_flags, ChopArgs};
use templater::cli::parse_or_usage;
use templater::output::Printer;

fn main() -> Result<()> {
    let argv = normalize_flags(std::env::args_os());
    let Some(args) = parse_or_usage::<ChopArgs, _, _>(argv, chop::USAGE) else {
        return Ok(());
    };

    let printer = Printer::new().with_verbose(args.verbose);
    chop::run(&args, &printer)?;

    Ok(())
}
