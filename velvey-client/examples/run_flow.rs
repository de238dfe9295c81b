// velvey-client/examples/run_flow.rs
// Drive the order-notification flow against configured endpoints

use velvey_client::{ExtensionConfig, OrderConfirmation, OrderFeed, OrderFlow, view_for};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        println!("Usage: {} <order-gid>", args[0]);
        println!(
            "  Example: {} gid://shopify/Order/6675439255728",
            args[0]
        );
        return Ok(());
    }
    let order_gid = args[1].clone();

    let worker_url = std::env::var("VELVEY_WORKER_URL")
        .unwrap_or_else(|_| "https://velvey-shopify-proxy.dawn-boat-0e1b.workers.dev".to_string());
    let backend_url = std::env::var("VELVEY_BACKEND_URL")
        .unwrap_or_else(|_| "https://velvey-backend.azurewebsites.net/api/orders".to_string());

    let config = ExtensionConfig::new(worker_url, backend_url);

    // Stand in for the host: resolve the order shortly after the view
    // subscribes
    let feed = OrderFeed::new();
    let mut handle = feed.subscribe();
    tokio::spawn(async move {
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        feed.publish(OrderConfirmation::with_order(order_gid));
    });

    let mut flow = OrderFlow::new(&config);
    let state = flow.run_until_settled(&mut handle).await;
    tracing::info!("Flow settled: {:?}", state);

    let view = view_for(flow.state(), flow.order_reference(), &config.setup_url);
    tracing::info!("View: {:?}", view);

    Ok(())
}
