use lamport_kernel::Event;

use crate::client::NodeClient;

pub async fn run(client: &NodeClient, message: Option<String>) -> anyhow::Result<()> {
    let event = client.create_event(message.as_deref()).await?;
    println!("{}", describe(&event));
    Ok(())
}

/// One-line summary shared by the `event` and `message` commands.
pub fn describe(event: &Event) -> String {
    format!(
        "[Lamport {}] {} {} ({})",
        event.logical_time,
        event.id,
        event.label,
        event.wall_time.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
    )
}
