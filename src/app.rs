use crate::api::{ProxyClient, ProxyConfig};
use crate::application::DownloadCoordinator;
use crate::domain::DownloadPlan;
use crate::ui::{DownloadMessage, DownloadView};
use bytes::Bytes;
use iced::Task;
use std::path::PathBuf;

/// The one user-facing failure string; every failure mode collapses into it.
/// The underlying detail only goes to the diagnostic log.
pub const GENERIC_ERROR_MESSAGE: &str = "Ooops, something went wrong...";

pub struct DownloadApp {
    view: DownloadView,
    coordinator: DownloadCoordinator,
}

impl Default for DownloadApp {
    fn default() -> Self {
        Self::new()
    }
}

impl DownloadApp {
    pub fn new() -> Self {
        let coordinator = DownloadCoordinator::new(ProxyClient::new(ProxyConfig::default()));
        let view = DownloadView::default();

        Self { view, coordinator }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    UiMessage(DownloadMessage),
    /// (Plan, fetched payload)
    PayloadFetched(Result<(DownloadPlan, Bytes), String>),
    /// (Selected path, fetched payload)
    SavePathSelected(Option<PathBuf>, Bytes),
    /// Final result after writing the file
    DownloadCompleted(Result<PathBuf, String>),
}

pub fn update(app: &mut DownloadApp, message: Message) -> Task<Message> {
    match message {
        Message::UiMessage(ui_msg) => {
            app.view.update(ui_msg.clone());

            match ui_msg {
                DownloadMessage::DownloadPressed => {
                    // The button withholds its press handler while invalid or
                    // loading; the guard is repeated here so a second flow can
                    // never start while one is in flight.
                    if app.view.is_valid_link && !app.view.is_loading {
                        match app.coordinator.prepare_download(&app.view.url) {
                            Ok(plan) => {
                                app.view.is_loading = true;

                                let coordinator = app.coordinator.clone();

                                // iced Task::perform runs in the background
                                // tokio executor
                                return Task::perform(
                                    async move {
                                        let payload = coordinator
                                            .fetch_payload(&plan)
                                            .await
                                            .map_err(|e| e.to_string())?;
                                        Ok((plan, payload))
                                    },
                                    Message::PayloadFetched,
                                );
                            }
                            Err(e) => {
                                // Unreachable behind the validity gate
                                log::warn!("Rejected submission: {}", e);
                            }
                        }
                    }
                }
                DownloadMessage::LinkClicked(target) => {
                    if let Err(e) = webbrowser::open(target) {
                        log::warn!("Failed to open {}: {}", target, e);
                    }
                }
                DownloadMessage::UrlChanged(_) => {}
            }
        }
        Message::PayloadFetched(result) => match result {
            Ok((plan, payload)) => {
                let coordinator = app.coordinator.clone();

                // Ask where to save, with the derived filename pre-filled
                return Task::perform(
                    async move {
                        let path = coordinator.choose_save_path(plan.file_name).await;
                        (path, payload)
                    },
                    |(path, payload)| Message::SavePathSelected(path, payload),
                );
            }
            Err(e) => {
                log::error!("Proxied fetch failed: {}", e);
                app.view.error = Some(GENERIC_ERROR_MESSAGE.to_string());
                app.view.is_loading = false;
            }
        },
        Message::SavePathSelected(path_opt, payload) => match path_opt {
            Some(path) => {
                let coordinator = app.coordinator.clone();

                return Task::perform(
                    async move {
                        coordinator
                            .save_payload(path, payload)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    Message::DownloadCompleted,
                );
            }
            None => {
                // User dismissed the dialog: not a failure, keep the URL
                app.view.is_loading = false;
            }
        },
        Message::DownloadCompleted(result) => {
            app.view.is_loading = false;
            match result {
                Ok(_) => {
                    app.view.url = String::new();
                    app.view.is_valid_link = false;
                    app.view.error = None;
                }
                Err(e) => {
                    log::error!("Saving download failed: {}", e);
                    app.view.error = Some(GENERIC_ERROR_MESSAGE.to_string());
                }
            }
        }
    }
    Task::none()
}

pub fn view(app: &DownloadApp) -> iced::Element<'_, Message> {
    app.view.view().map(Message::UiMessage)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enter_url(app: &mut DownloadApp, url: &str) {
        let _ = update(
            app,
            Message::UiMessage(DownloadMessage::UrlChanged(url.to_string())),
        );
    }

    #[test]
    fn test_submission_enters_loading_state() {
        let mut app = DownloadApp::new();
        enter_url(&mut app, "https://example.com/files/report.pdf");
        assert!(!app.view.is_loading);

        let _task = update(&mut app, Message::UiMessage(DownloadMessage::DownloadPressed));
        assert!(app.view.is_loading);
    }

    #[test]
    fn test_press_without_valid_url_is_ignored() {
        let mut app = DownloadApp::new();
        enter_url(&mut app, "http://example.com/files/report.pdf");

        let _task = update(&mut app, Message::UiMessage(DownloadMessage::DownloadPressed));
        assert!(!app.view.is_loading);
        assert!(app.view.error.is_none());
    }

    #[test]
    fn test_second_press_while_loading_is_ignored() {
        let mut app = DownloadApp::new();
        enter_url(&mut app, "https://example.com/files/report.pdf");
        let _task = update(&mut app, Message::UiMessage(DownloadMessage::DownloadPressed));
        assert!(app.view.is_loading);

        let _task = update(&mut app, Message::UiMessage(DownloadMessage::DownloadPressed));
        assert!(app.view.is_loading);
        assert!(app.view.error.is_none());
        assert_eq!(app.view.url, "https://example.com/files/report.pdf");
    }

    #[test]
    fn test_failed_fetch_sets_generic_error_and_keeps_url() {
        let mut app = DownloadApp::new();
        enter_url(&mut app, "https://example.com/files/report.pdf");
        let _task = update(&mut app, Message::UiMessage(DownloadMessage::DownloadPressed));

        let _ = update(
            &mut app,
            Message::PayloadFetched(Err("connection refused".to_string())),
        );

        assert!(!app.view.is_loading);
        assert_eq!(app.view.error.as_deref(), Some(GENERIC_ERROR_MESSAGE));
        assert_eq!(app.view.url, "https://example.com/files/report.pdf");
    }

    #[test]
    fn test_successful_download_resets_form() {
        let mut app = DownloadApp::new();
        enter_url(&mut app, "https://example.com/files/report.pdf");
        let _task = update(&mut app, Message::UiMessage(DownloadMessage::DownloadPressed));
        app.view.error = Some(GENERIC_ERROR_MESSAGE.to_string());

        let _ = update(
            &mut app,
            Message::DownloadCompleted(Ok(PathBuf::from("/tmp/report.pdf"))),
        );

        assert!(!app.view.is_loading);
        assert_eq!(app.view.url, "");
        assert!(!app.view.is_valid_link);
        assert!(app.view.error.is_none());
    }

    #[test]
    fn test_cancelled_dialog_exits_loading_without_error() {
        let mut app = DownloadApp::new();
        enter_url(&mut app, "https://example.com/files/report.pdf");
        let _task = update(&mut app, Message::UiMessage(DownloadMessage::DownloadPressed));

        let _ = update(
            &mut app,
            Message::SavePathSelected(None, Bytes::from_static(b"payload")),
        );

        assert!(!app.view.is_loading);
        assert!(app.view.error.is_none());
        assert_eq!(app.view.url, "https://example.com/files/report.pdf");
    }
}
