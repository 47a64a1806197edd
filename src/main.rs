use std::io::BufRead;

use faceprint::identicons::{describe_identicon, IdenticonOptions};
use faceprint_adapters::init::initialize_app;

// Reads one input per line and prints the identicon generated for it
fn main() -> std::io::Result<()> {
    let config = initialize_app(None);
    let options = IdenticonOptions::from(&config.identicon);
    for line in std::io::stdin().lock().lines() {
        let text = line?;
        match describe_identicon(&text, &options) {
            Ok(description) => println!("{text}: {description}"),
            Err(error) => log::error!("{text}: {error}"),
        };
    };
    Ok(())
}
