use log::Level;
use web_sys::window;

pub const FEEDBACK_STORAGE_KEY: &str = "opentrip_feedback";
pub const RECENT_FEEDBACK_LIMIT: usize = 5;
pub const STATUS_CLEAR_DELAY_MS: u32 = 4000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locale {
    Indonesian,
    English,
}

impl Locale {
    /// Maps a BCP 47 language tag to a supported locale, Indonesian otherwise.
    pub fn from_tag(tag: &str) -> Self {
        let primary = tag.split(['-', '_']).next().unwrap_or("").to_ascii_lowercase();
        match primary.as_str() {
            "en" => Locale::English,
            _ => Locale::Indonesian,
        }
    }

    pub fn detect() -> Self {
        window()
            .and_then(|w| w.navigator().language())
            .map(|tag| Locale::from_tag(&tag))
            .unwrap_or(Locale::Indonesian)
    }

    pub fn messages(self) -> Messages {
        match self {
            Locale::Indonesian => Messages {
                missing_fields: "Mohon isi nama dan pesan.",
                thanks: "Terima kasih atas feedback Anda!",
                save_failed: "Feedback gagal disimpan. Silakan coba lagi.",
                empty_list: "Belum ada feedback.",
                rating_label: "Rating",
                timestamp_format: "%d/%m/%Y, %H.%M.%S",
            },
            Locale::English => Messages {
                missing_fields: "Please fill in your name and message.",
                thanks: "Thank you for your feedback!",
                save_failed: "Your feedback could not be saved. Please try again.",
                empty_list: "No feedback yet.",
                rating_label: "Rating",
                timestamp_format: "%m/%d/%Y, %I:%M:%S %p",
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Messages {
    pub missing_fields: &'static str,
    pub thanks: &'static str,
    pub save_failed: &'static str,
    pub empty_list: &'static str,
    pub rating_label: &'static str,
    pub timestamp_format: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub storage_key: String,
    pub recent_limit: usize,
    pub status_clear_delay_ms: u32,
    pub locale: Locale,
}

impl AppConfig {
    pub fn from_browser() -> Self {
        Self {
            locale: Locale::detect(),
            ..Self::default()
        }
    }

    pub fn messages(&self) -> Messages {
        self.locale.messages()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: FEEDBACK_STORAGE_KEY.to_string(),
            recent_limit: RECENT_FEEDBACK_LIMIT,
            status_clear_delay_ms: STATUS_CLEAR_DELAY_MS,
            locale: Locale::Indonesian,
        }
    }
}
