mod cli;
mod consts;
mod error;
mod scaffold;
mod templates;

use std::path::Path;

use chrono::Local;
use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let Some(stem) = cli.file_name else {
        eprintln!("Error: no file name given");
        eprintln!("Usage: newpost FILENAME");
        std::process::exit(1);
    };

    let today = Local::now().date_naive();
    match scaffold::create_article(Path::new(""), &stem, today) {
        Ok(created) => {
            println!("Created article draft: {}", created.post_path.display());
            println!("Created prompt history: {}", created.prompt_path.display());
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
