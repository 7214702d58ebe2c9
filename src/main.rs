use book_search_client::book::QueryReply;
use book_search_client::{config, create_client};
use clap::Parser;

/// Queries the book seller API by author name and prints the reply as JSON.
#[derive(Parser)]
struct Args {
    /// Author name to search for
    author: String,

    /// Maximum number of records to return
    #[arg(long)]
    limit: Option<u32>,

    /// Wire format to request, `xml` or `json`. Overrides the configured
    /// format when given.
    #[arg(long)]
    format: Option<String>,
}

fn main() {
    let args = Args::parse();

    config::load_dotenv();
    let app_config = config::load_config()
        .unwrap_or_else(|e| panic!("Cannot load config: {}", e));
    config::log::set_global_logging_config(app_config.logger());

    let client = match create_client(&app_config, args.format.as_deref()) {
        Ok(client) => client,
        Err(details) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&QueryReply::Rejected(details)).unwrap()
            );
            std::process::exit(1);
        }
    };

    match client.get_books_by_author(&args.author, args.limit) {
        Ok(reply) => println!("{}", serde_json::to_string_pretty(&reply).unwrap()),
        Err(e) => {
            eprintln!("book search failed: {}", e);
            std::process::exit(1);
        }
    }
}
