// medibud - find hospitals, doctors and medical resources from your terminal

use medibud::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
