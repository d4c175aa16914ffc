use clap::Parser;
use neon_glow::cli::Args;

fn main() -> Result<(), anyhow::Error> {
    let args: Args = Args::parse();

    let default_level = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let params = args.into_params()?;
    neon_glow::render_to_file(&params)?;
    Ok(())
}
