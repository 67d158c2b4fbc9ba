//! Applying relay client events to the activity feed.

use deskdash_common::Event;

use super::core::DeskdashApp;
use crate::activity::ConnectionStatus;
use crate::relay_client::RelayEvent;

impl DeskdashApp {
    /// Apply one relay event. Returns a notice line for the user, if any.
    pub fn apply_relay_event(&mut self, event: RelayEvent) -> Option<String> {
        match event {
            RelayEvent::Discovered(port) => {
                self.relay_port = Some(port);
                Some(format!("Relay found on port {port}.\n"))
            }
            RelayEvent::Status(status) => {
                if status == self.relay_status {
                    return None;
                }
                self.relay_status = status;
                match status {
                    ConnectionStatus::Connected => {
                        let port = self.relay_port.unwrap_or(self.default_port);
                        self.event_bus.publish(Event::RelayConnected { port });
                    }
                    ConnectionStatus::Disconnected => {
                        self.event_bus.publish(Event::RelayDisconnected);
                    }
                    ConnectionStatus::Connecting => {}
                }
                Some(format!("Relay: {status}\n"))
            }
            RelayEvent::Request(record) => {
                let line = format!("New request: {} {}\n", record.method, record.url);
                self.event_bus.publish(Event::RequestReceived {
                    request_id: record.id.clone(),
                });
                self.activity.push(record);
                Some(line)
            }
        }
    }
}
