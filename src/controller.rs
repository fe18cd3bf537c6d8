use crate::catalog::CatalogService;
use crate::config::{AppConfig, Messages};
use crate::feedback::models::FeedbackFields;
use crate::feedback::render::render_feedback_list;
use crate::feedback::repository::{FeedbackRepository, SubmitError};
use crate::modal::ModalState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissReason {
    CloseButton,
    Overlay,
    EscapeKey,
}

/// Everything the page can be asked to do by the user.
#[derive(Clone, Debug, PartialEq)]
pub enum PageMsg {
    Submit(FeedbackFields),
    CardActivate(String),
    DetailTrigger(String),
    ModalDismiss(DismissReason),
    ClearStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    pub href: String,
    pub new_tab: bool,
}

/// Host-side work requested by a message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Effects {
    pub rerender: bool,
    pub reset_form: bool,
    pub clear_status_after: Option<u32>,
    pub navigate: Option<Navigation>,
}

pub struct PageController {
    config: AppConfig,
    messages: Messages,
    catalog: CatalogService,
    feedback: FeedbackRepository,
    modal: ModalState,
    status: Option<Status>,
    feedback_markup: String,
}

impl PageController {
    pub fn new(config: AppConfig, catalog: CatalogService, feedback: FeedbackRepository) -> Self {
        let messages = config.messages();
        let mut controller = Self {
            config,
            messages,
            catalog,
            feedback,
            modal: ModalState::default(),
            status: None,
            feedback_markup: String::new(),
        };
        controller.refresh_feedback();
        controller
    }

    pub fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn feedback_markup(&self) -> &str {
        &self.feedback_markup
    }

    fn refresh_feedback(&mut self) {
        let records = self.feedback.load();
        self.feedback_markup = render_feedback_list(&records, self.config.recent_limit, &self.messages);
    }

    fn set_status(&mut self, kind: StatusKind, text: &'static str) {
        self.status = Some(Status {
            kind,
            text: text.to_string(),
        });
    }

    pub fn handle(&mut self, msg: PageMsg) -> Effects {
        match msg {
            PageMsg::Submit(fields) => self.submit(fields),
            PageMsg::CardActivate(id) => self.activate_card(&id),
            PageMsg::DetailTrigger(id) => Effects {
                rerender: self.modal.open(&self.catalog, &id),
                ..Effects::default()
            },
            PageMsg::ModalDismiss(reason) => {
                let was_visible = self.modal.is_visible();
                self.modal.close();
                if was_visible {
                    log::debug!("Modal dismissed via {:?}", reason);
                }
                Effects {
                    rerender: was_visible,
                    ..Effects::default()
                }
            }
            PageMsg::ClearStatus => Effects {
                rerender: self.status.take().is_some(),
                ..Effects::default()
            },
        }
    }

    fn submit(&mut self, fields: FeedbackFields) -> Effects {
        match self.feedback.submit(&fields) {
            Ok(_) => {
                let text = self.messages.thanks;
                self.set_status(StatusKind::Success, text);
                self.refresh_feedback();
                Effects {
                    rerender: true,
                    reset_form: true,
                    clear_status_after: Some(self.config.status_clear_delay_ms),
                    navigate: None,
                }
            }
            Err(SubmitError::Invalid(e)) => {
                log::debug!("Feedback rejected: {}", e);
                let text = self.messages.missing_fields;
                self.set_status(StatusKind::Error, text);
                Effects {
                    rerender: true,
                    clear_status_after: Some(self.config.status_clear_delay_ms),
                    ..Effects::default()
                }
            }
            Err(SubmitError::Storage(e)) => {
                log::error!("Could not save feedback: {}", e);
                let text = self.messages.save_failed;
                self.set_status(StatusKind::Error, text);
                Effects {
                    rerender: true,
                    clear_status_after: Some(self.config.status_clear_delay_ms),
                    ..Effects::default()
                }
            }
        }
    }

    /// Card body clicks go to the trip website, or its reservation link when it has none.
    fn activate_card(&self, id: &str) -> Effects {
        let navigate = self.catalog.lookup(id).map(|entry| {
            if entry.has_website() {
                Navigation {
                    href: entry.website_url.clone(),
                    new_tab: false,
                }
            } else {
                // Reservations happen in the chat app
                Navigation {
                    href: entry.reservation_url.clone(),
                    new_tab: true,
                }
            }
        });
        Effects {
            navigate,
            ..Effects::default()
        }
    }
}
