#[tokio::main]
async fn main() -> anyhow::Result<()> {
    deck_server::run().await
}
