use iced::{
    widget::{button, column, row, text, text_input, Space},
    Element, Length,
};

use crate::utils::is_valid_https_link;

const PROXY_DISCLOSURE: &str = "Note: all data stays on your device and nothing is sent to a \
    server of ours. But: in order to make this app work with all URLs, your device will make a \
    request to corsproxy.io. They may log your requests.";

const REPOSITORY_URL: &str = "https://github.com/JEK58/please-download";
const IMPRESSUM_URL: &str = "https://www.stephanschoepe.de/impressum";

/// Main view state
pub struct DownloadView {
    pub url: String,
    pub is_valid_link: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for DownloadView {
    fn default() -> Self {
        Self {
            url: String::new(),
            is_valid_link: false,
            is_loading: false,
            error: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum DownloadMessage {
    UrlChanged(String),
    DownloadPressed,
    LinkClicked(&'static str),
}

impl DownloadView {
    pub fn update(&mut self, message: DownloadMessage) {
        match message {
            DownloadMessage::UrlChanged(url) => {
                // Validity is derived from the input on every keystroke and
                // is the sole gate on the download button. A stale error
                // message stays visible until the next successful download.
                self.is_valid_link = is_valid_https_link(&url);
                self.url = url;
            }
            // Handled by the app
            DownloadMessage::DownloadPressed | DownloadMessage::LinkClicked(_) => {}
        }
    }

    pub fn view(&self) -> Element<'_, DownloadMessage> {
        let can_submit = self.is_valid_link && !self.is_loading;

        column![
            text("🙏 Please Download!").size(32),
            Space::new().height(Length::Fixed(20.0)),
            text_input("File URL", &self.url)
                .on_input(DownloadMessage::UrlChanged)
                .padding(10),
            Space::new().height(Length::Fixed(10.0)),
            button(text(if self.is_loading {
                "Downloading..."
            } else {
                "Download"
            }))
            .on_press_maybe(can_submit.then_some(DownloadMessage::DownloadPressed))
            .padding([10, 20]),
            text(self.error.as_deref().unwrap_or("")).size(14),
            Space::new().height(Length::Fixed(20.0)),
            text(PROXY_DISCLOSURE).size(13),
            Space::new().height(Length::Fill),
            footer(),
        ]
        .height(Length::Fill)
        .padding(20)
        .spacing(10)
        .into()
    }
}

fn footer() -> Element<'static, DownloadMessage> {
    row![
        link_button("Made with ❤️ by Stephan Schöpe", REPOSITORY_URL),
        text("|").size(12),
        link_button("Impressum", IMPRESSUM_URL),
    ]
    .spacing(8)
    .into()
}

fn link_button(label: &'static str, target: &'static str) -> Element<'static, DownloadMessage> {
    button(text(label).size(12))
        .style(button::text)
        .padding(0)
        .on_press(DownloadMessage::LinkClicked(target))
        .into()
}
