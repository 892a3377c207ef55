use crate::client::NodeClient;
use crate::commands::event::describe;

pub async fn run(client: &NodeClient, timestamp: i64, message: &str) -> anyhow::Result<()> {
    let event = client.send_message(timestamp, message).await?;
    println!("{}", describe(&event));
    println!("Received: {timestamp}, New: {}", event.logical_time);
    Ok(())
}
