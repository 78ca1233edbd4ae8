use color_eyre::eyre;

mod items;
mod sweep;
mod text;

#[derive(Debug, clap::Subcommand)]
pub enum Subcommand {
    Items(items::Args),
    Text(text::Args),
    Sweep(sweep::Args),
}

impl Subcommand {
    pub fn run(&self) -> eyre::Result<()> {
        match self {
            Subcommand::Items(args) => args.run()?,
            Subcommand::Text(args) => args.run()?,
            Subcommand::Sweep(args) => args.run()?,
        }

        Ok(())
    }
}
