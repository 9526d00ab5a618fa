//! CLI argument definitions

use clap::Parser;

#[derive(Parser)]
#[command(name = "newpost")]
#[command(about = "Scaffold a new blog article draft with its prompt history", version)]
pub(crate) struct Cli {
    /// File name stem for the new article (no extension)
    #[arg(value_name = "FILENAME")]
    pub(crate) file_name: Option<String>,
}
