#[tokio::main]
async fn main() -> anyhow::Result<()> {
    flashcards_viewer::run().await
}
