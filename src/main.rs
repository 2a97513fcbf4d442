#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pawhaven_app::run().await
}
