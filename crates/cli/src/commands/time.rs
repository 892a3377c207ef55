use crate::client::NodeClient;

pub async fn run(client: &NodeClient) -> anyhow::Result<()> {
    let reading = client.time().await?;
    println!(
        "Lamport: {}  Wall: {}",
        reading.lamport_timestamp,
        reading
            .wall_time
            .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    );
    Ok(())
}
