use color_eyre::eyre;
use tracing::info;

/// Print the neighborhood of one item
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Index of the element
    #[clap(long)]
    index: usize,
    /// Maximum number of items on either side
    #[clap(long, short)]
    n: usize,
    /// The sequence
    #[clap(required = true)]
    items: Vec<String>,
}

impl Args {
    #[tracing::instrument(name = "items", skip_all)]
    pub(crate) fn run(&self) -> eyre::Result<()> {
        let range = neighborhood::try_window_range(self.items.len(), self.index, self.n)?;
        info!(
            index = self.index,
            n = self.n,
            start = range.start,
            end = range.end,
            "window"
        );
        println!("{}", self.items[range].join(" "));
        Ok(())
    }
}
