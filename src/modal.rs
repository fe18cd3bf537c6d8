use crate::catalog::{CatalogService, TripEntry};

/// Visibility of the single trip-details modal.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Hidden,
    Visible(TripEntry),
}

impl ModalState {
    /// Shows the entry for `id`. Unknown ids leave the state untouched.
    pub fn open(&mut self, catalog: &CatalogService, id: &str) -> bool {
        match catalog.lookup(id) {
            Some(entry) => {
                *self = ModalState::Visible(entry.clone());
                true
            }
            None => {
                log::debug!("No trip with id {:?}, modal unchanged", id);
                false
            }
        }
    }

    pub fn close(&mut self) {
        *self = ModalState::Hidden;
    }

    pub fn entry(&self) -> Option<&TripEntry> {
        match self {
            ModalState::Visible(entry) => Some(entry),
            ModalState::Hidden => None,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, ModalState::Visible(_))
    }
}
