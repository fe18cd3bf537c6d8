use yew::prelude::*;
use log::info;

mod config;
mod catalog;
mod controller;
mod modal;
mod storage;
mod feedback {
    pub mod models;
    pub mod render;
    pub mod repository;
}
mod components {
    pub mod feedback_form;
    pub mod feedback_list;
    pub mod trip_card;
    pub mod trip_modal;
}
mod pages {
    pub mod landing;
}

use config::AppConfig;
use pages::landing::Landing;


#[function_component]
fn App() -> Html {
    let config = use_memo(|_| AppConfig::from_browser(), ());

    html! {
        <Landing config={(*config).clone()} />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!("error initializing log:", e.to_string());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
