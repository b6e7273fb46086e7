// backend/services/loms/outbox-publisher/src/main.rs

use loms::infrastructure::bootstrap::run_outbox_publisher;
use shared_kernel::errors::AppResult;

#[tokio::main]
async fn main() -> AppResult<()> {
    run_outbox_publisher().await
}
