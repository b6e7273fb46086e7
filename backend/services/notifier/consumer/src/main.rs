// backend/services/notifier/consumer/src/main.rs

use loms::infrastructure::bootstrap::run_notifier;
use shared_kernel::errors::AppResult;

#[tokio::main]
async fn main() -> AppResult<()> {
    run_notifier().await
}
