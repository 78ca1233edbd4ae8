use clap::Parser as _;
use color_eyre::eyre;
use tracing::level_filters::LevelFilter;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::subcommand::Subcommand;

mod subcommand;

/// Print the clamped neighborhood of an element within a sequence
#[derive(clap::Parser, Debug)]
struct Args {
    #[clap(flatten)]
    log_args: LogArgs,
    #[command(subcommand)]
    subcommand: Subcommand,
}

#[derive(clap::Parser, Debug)]
struct LogArgs {
    /// Log filter in `RUST_LOG` syntax [default: `RUST_LOG`, then `info`]
    #[clap(long, value_parser = parse_filter_arg)]
    log_filter: Option<String>,
    /// Log closed spans with their timings
    #[clap(long, default_value = "false")]
    log_spans: bool,
}

impl LogArgs {
    fn filter(&self) -> EnvFilter {
        let builder = EnvFilter::builder().with_default_directive(LevelFilter::INFO.into());
        match &self.log_filter {
            Some(directives) => builder.parse_lossy(directives),
            None => builder.from_env_lossy(),
        }
    }

    fn span_events(&self) -> FmtSpan {
        if self.log_spans {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    fn init(&self) {
        let console_layer = fmt::layer()
            .with_timer(fmt::time::Uptime::default())
            .with_target(false)
            .with_span_events(self.span_events())
            .with_writer(std::io::stderr)
            .with_filter(self.filter());

        tracing_subscriber::registry()
            .with(console_layer)
            .with(ErrorLayer::default())
            .init();
    }
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let Args {
        log_args,
        subcommand,
    } = Args::parse();

    log_args.init();
    subcommand.run()?;

    Ok(())
}

fn parse_filter_arg(s: &str) -> eyre::Result<String> {
    EnvFilter::try_new(s)?;
    Ok(s.to_owned())
}
