#[tokio::main]
async fn main() {
    cinema_booking::run().await;
}
