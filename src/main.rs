use log::error;
use std::env;

use cookbook_import::url_to_cooklang;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get the URL from command-line arguments
    let args: Vec<String> = env::args().collect();
    let url = args.get(1).ok_or("Please provide a URL as an argument")?;

    match url_to_cooklang(url).await {
        Ok(document) => {
            print!("{}", document);
            Ok(())
        }
        Err(e) => {
            error!("Unable to import the recipe from this webpage: {}", e);
            Err(e.into())
        }
    }
}
