use color_eyre::eyre;
use tracing::info;

/// Print the chars around a byte offset of a text
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Byte offset of the element
    #[clap(long)]
    offset: usize,
    /// Maximum number of chars on either side
    #[clap(long, short)]
    n: usize,
    /// The text
    text: String,
}

impl Args {
    #[tracing::instrument(name = "text", skip_all)]
    pub(crate) fn run(&self) -> eyre::Result<()> {
        let window = neighborhood::char_neighborhood(&self.text, self.offset, self.n)?;
        info!(offset = self.offset, n = self.n, bytes = window.len(), "window");
        println!("{window}");
        Ok(())
    }
}
