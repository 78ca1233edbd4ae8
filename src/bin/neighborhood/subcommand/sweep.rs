use color_eyre::eyre;
use neighborhood::NeighborhoodExt as _;
use tracing::debug;

/// Print every item together with its neighborhood
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Maximum number of items on either side
    #[clap(long, short)]
    n: usize,
    /// The sequence
    items: Vec<String>,
}

impl Args {
    #[tracing::instrument(name = "sweep", skip_all, fields(len = self.items.len()))]
    pub(crate) fn run(&self) -> eyre::Result<()> {
        for (index, window) in self.items.neighborhoods(self.n) {
            debug!(index, len = window.len());
            println!("{}\t{}", self.items[index], window.join(" "));
        }
        Ok(())
    }
}
