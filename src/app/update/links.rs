// src/app/update/links.rs
//! Social link handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::links;

impl App {
    /// Handle link-related messages
    pub fn handle_links(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::OpenLink(kind) => Some(Self::open_url_task(links::social_link(*kind).url)),

            Message::HoverLink(kind) => {
                if self.core.settings.display.power_saving_mode {
                    self.ui.link_hover.set_hovered(None);
                } else {
                    self.ui.link_hover.set_hovered(*kind);
                }
                Some(Task::none())
            }

            Message::UrlOpened(result) => {
                if let Err(e) = result {
                    tracing::warn!("Failed to open link: {}", e);
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Open a URL on the blocking pool, reporting back with `UrlOpened`
    pub(super) fn open_url_task(url: &'static str) -> Task<Message> {
        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || {
                    links::open_url(url).map_err(|e| e.to_string())
                })
                .await
                .unwrap_or_else(|e| Err(format!("URL task panicked: {}", e)))
            },
            Message::UrlOpened,
        )
    }
}
