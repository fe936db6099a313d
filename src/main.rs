#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shopadvisor::run().await
}
