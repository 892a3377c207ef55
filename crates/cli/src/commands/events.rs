use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use lamport_kernel::LogSnapshot;

use crate::client::NodeClient;

pub async fn run(client: &NodeClient) -> anyhow::Result<()> {
    let snapshot = client.events().await?;

    // Served in append order, which is already logical-time order.
    let is_sorted = snapshot
        .events
        .windows(2)
        .all(|w| w[0].logical_time < w[1].logical_time);
    if !is_sorted {
        println!("\nWARNING: Log is not in logical-time order.\n");
    }

    println!("\nEvent Log ({} events, current Lamport time {})\n", snapshot.count, snapshot.current_time);
    println!("{}\n", table(&snapshot));
    Ok(())
}

pub fn table(snapshot: &LogSnapshot) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Lamport", "ID", "Message", "Wall time"]);

    for event in &snapshot.events {
        table.add_row(vec![
            event.logical_time.to_string(),
            event.id.clone(),
            event.label.clone(),
            event
                .wall_time
                .to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        ]);
    }

    table
}
