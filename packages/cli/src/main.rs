#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    todos_cli::run_server().await
}
