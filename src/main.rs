use clap::Parser;
use roomkit::cli::{self, CliArgs};
use roomkit::{init_json_logging, init_logging, BUILD_DATE, VERSION};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    if args.json_logs {
        init_json_logging()?;
    } else {
        init_logging()?;
    }
    tracing::debug!("roomkit {} built {}", VERSION, BUILD_DATE);

    let report = cli::run(&args)?;
    print!("{report}");

    Ok(())
}
