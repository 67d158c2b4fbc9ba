//! Command dispatch: parse a line, apply it, render the result.

use deskdash_common::types::WindowAction;
use deskdash_common::Event;
use deskdash_windows::WindowCommand;

use super::core::{DeskdashApp, Outcome};
use crate::commands::{self, Command, HELP};
use crate::port_probe;
use crate::render;

impl DeskdashApp {
    /// Parse and handle one line of input.
    pub async fn handle_line(&mut self, line: &str) -> Outcome {
        match commands::parse(line) {
            Ok(command) => self.dispatch(command).await,
            Err(commands::ParseError::Empty) => Outcome::Output(String::new()),
            Err(e) => Outcome::Output(format!("error: {e}\n")),
        }
    }

    pub async fn dispatch(&mut self, command: Command) -> Outcome {
        let output = match command {
            Command::Window(cmd) => self.apply_window_command(cmd),
            Command::Show => self.render_desktop(),
            Command::Menu => render::render_menu(&self.catalog, self.manager.active_menu_item()),
            Command::Content(id) => {
                // Only catalogued ids reach the loader, so the cache stays
                // bounded by the catalog.
                let loaded = match self.catalog.entry(id.as_str()) {
                    Some(_) => self.content.get_or_load(id.as_str()).await,
                    None => None,
                };
                let entry = self.catalog.content(id.as_str());
                render::render_content(id.as_str(), &entry, loaded.as_deref())
            }
            Command::Activity => render::render_activity(&self.activity, self.relay_status),
            Command::Clear => {
                self.activity.clear();
                "Activity cleared.\n".to_string()
            }
            Command::Url => {
                let port = self.relay_port.unwrap_or(self.default_port);
                format!("{}\n", port_probe::listener_url(&self.relay_host, port))
            }
            Command::Help => format!("{HELP}\n"),
            Command::Quit => {
                self.event_bus.publish(Event::Shutdown);
                return Outcome::Quit;
            }
        };
        Outcome::Output(output)
    }

    pub fn render_desktop(&self) -> String {
        render::render_desktop(&self.manager.view(), &self.catalog)
    }

    fn apply_window_command(&mut self, cmd: WindowCommand) -> String {
        let event = match &cmd {
            WindowCommand::MenuClick(id) => {
                let was_open = self.manager.record(id.as_str()).is_some_and(|r| r.is_open);
                if was_open {
                    Event::WindowFocused(id.clone())
                } else {
                    Event::WindowOpened(id.clone())
                }
            }
            WindowCommand::Action(id, WindowAction::Minimize) => Event::WindowMinimized(id.clone()),
            WindowCommand::Action(id, WindowAction::Close) => Event::WindowClosed(id.clone()),
            WindowCommand::Action(id, WindowAction::Maximize) | WindowCommand::Restore(id) => {
                Event::WindowFocused(id.clone())
            }
        };

        if self.manager.execute(cmd) {
            self.event_bus.publish(event);
            self.render_desktop()
        } else {
            tracing::debug!(?event, "Window command matched nothing");
            format!("No such window.\n{}", self.render_desktop())
        }
    }
}
