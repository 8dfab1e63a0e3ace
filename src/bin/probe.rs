use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    taiga_mcp::cli::run().await
}
