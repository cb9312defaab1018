use miette::Result;
use templater::cli::{parse_or_usage, run, Cli, Context, USAGE};
use templater::output::Printer;
use templater::store::{default_config_path, AliasStore};
use templater::EnvironmentError;

fn main() -> Result<()> {
    let Some(cli) = parse_or_usage::<Cli, _, _>(std::env::args_os(), USAGE) else {
        return Ok(());
    };

    let printer = Printer::new().with_verbose(cli.verbose);
    let config = cli.config;

    run(
        cli.command,
        || {
            let config_path = match config {
                Some(path) => path,
                None => default_config_path()?,
            };
            let cwd = std::env::current_dir().map_err(EnvironmentError::CurrentDir)?;
            printer.verbose("Config", &config_path.display().to_string());
            Ok(Context::new(AliasStore::new(config_path), cwd))
        },
        &printer,
    )?;

    Ok(())
}
