#[tokio::main]
async fn main() {
    studio_availability::run().await;
}
