//! Async tasks with tokio. The menu loop is synchronous, so this demo
//! builds its own runtime and blocks on it; everything async stays inside.

use std::time::{Duration, Instant};

use tokio::runtime::Runtime;
use tokio::time::sleep;

async fn fetch_user_name(user_id: u64) -> Result<String, String> {
    // Stand-in for an I/O-bound call.
    sleep(Duration::from_millis(120)).await;
    if user_id == 0 {
        Err("invalid user id".to_string())
    } else {
        Ok(format!("user_{}", user_id))
    }
}

async fn fetch_order_count(user_id: u64) -> u32 {
    sleep(Duration::from_millis(80)).await;
    (user_id as u32 % 5) + 1
}

async fn demo() {
    // join! runs both futures concurrently on one task: total wait is the
    // slower of the two, not the sum.
    let started = Instant::now();
    let (name, orders) = tokio::join!(fetch_user_name(7), fetch_order_count(7));
    println!(
        "join!  -> {:?} with {} orders in {:?}",
        name, orders, started.elapsed()
    );

    // spawn moves work onto the runtime; the JoinHandle is awaited later.
    let handle = tokio::spawn(async {
        sleep(Duration::from_millis(50)).await;
        "background job done"
    });
    println!("spawned a background task, doing other work...");
    match handle.await {
        Ok(msg) => println!("spawn  -> {}", msg),
        Err(err) => println!("spawn  -> task failed: {}", err),
    }

    // Errors cross .await like any other Result.
    match fetch_user_name(0).await {
        Ok(name) => println!("fetch  -> {}", name),
        Err(reason) => println!("fetch  -> failed: {}", reason),
    }
}

pub fn run() {
    println!("Async tasks with tokio\n");

    match Runtime::new() {
        Ok(runtime) => runtime.block_on(demo()),
        Err(err) => println!("could not start the tokio runtime: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fetch_rejects_the_zero_id() {
        assert!(fetch_user_name(0).await.is_err());
        assert_eq!(fetch_user_name(3).await.unwrap(), "user_3");
    }

    #[tokio::test]
    async fn order_count_is_always_at_least_one() {
        for id in 0..7 {
            assert!(fetch_order_count(id).await >= 1);
        }
    }
}
