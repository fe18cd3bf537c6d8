use yew::prelude::*;
use web_sys::{window, HtmlFormElement};
use gloo_timers::callback::Timeout;
use log::{info, warn};

use crate::catalog::CatalogService;
use crate::components::{
    feedback_form::FeedbackForm,
    feedback_list::FeedbackList,
    trip_card::TripCard,
    trip_modal::TripModal,
};
use crate::config::AppConfig;
use crate::controller::{Navigation, PageController, PageMsg, StatusKind};
use crate::feedback::repository::FeedbackRepository;
use crate::storage::{self, js_error_reason};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub config: AppConfig,
}

pub struct Landing {
    controller: PageController,
    form_ref: NodeRef,
    status_timeout: Option<Timeout>,
}

fn navigate(nav: &Navigation) {
    let Some(window) = window() else {
        return;
    };
    let result = if nav.new_tab {
        window
            .open_with_url_and_target_and_features(&nav.href, "_blank", "noopener")
            .map(|_| ())
    } else {
        window.location().set_href(&nav.href)
    };
    if let Err(e) = result {
        warn!("Navigation to {} failed: {}", nav.href, js_error_reason(e));
    }
}

impl Component for Landing {
    type Message = PageMsg;
    type Properties = LandingProps;

    fn create(ctx: &Context<Self>) -> Self {
        let config = ctx.props().config.clone();
        let feedback = FeedbackRepository::new(storage::local_or_memory(), config.storage_key.clone());
        info!("Landing page ready ({:?})", config.locale);

        Self {
            controller: PageController::new(config, CatalogService::new(), feedback),
            form_ref: NodeRef::default(),
            status_timeout: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        if matches!(msg, PageMsg::Submit(_)) {
            // A new status replaces the old one, cancel its pending clear
            self.status_timeout = None;
        }

        let effects = self.controller.handle(msg);

        if effects.reset_form {
            if let Some(form) = self.form_ref.cast::<HtmlFormElement>() {
                form.reset();
            }
        }
        if let Some(delay) = effects.clear_status_after {
            let link = ctx.link().clone();
            self.status_timeout = Some(Timeout::new(delay, move || {
                link.send_message(PageMsg::ClearStatus);
            }));
        }
        if let Some(nav) = &effects.navigate {
            navigate(nav);
        }

        effects.rerender
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_activate = link.callback(PageMsg::CardActivate);
        let on_detail = link.callback(PageMsg::DetailTrigger);

        let status = match self.controller.status() {
            Some(status) => {
                let class = match status.kind {
                    StatusKind::Success => "feedback-msg success",
                    StatusKind::Error => "feedback-msg error",
                };
                html! { <p id="feedbackMsg" class={class} role="status">{&status.text}</p> }
            }
            None => html! { <p id="feedbackMsg" class="feedback-msg" role="status"></p> },
        };

        html! {
            <div class="landing-page">
                <section class="hero">
                    <h1>{"Open Trip Nusantara"}</h1>
                    <p>{"Jalan bareng teman baru ke destinasi terbaik Indonesia, tanpa ribet urus sendiri."}</p>
                    <a class="btn" href="#trips">{"Lihat Trip"}</a>
                </section>

                <section id="trips" class="trips-section">
                    <h2>{"Trip Pilihan"}</h2>
                    <div class="trip-grid">
                        { for self.controller.catalog().entries().iter().map(|entry| html! {
                            <TripCard
                                key={entry.id.clone()}
                                entry={entry.clone()}
                                on_activate={on_activate.clone()}
                                on_detail={on_detail.clone()}
                            />
                        }) }
                    </div>
                </section>

                <section id="feedback" class="feedback-section">
                    <h2>{"Ceritakan Pengalamanmu"}</h2>
                    <div class="feedback-columns">
                        <div>
                            <FeedbackForm form_ref={self.form_ref.clone()} on_submit={link.callback(PageMsg::Submit)} />
                            {status}
                        </div>
                        <FeedbackList markup={AttrValue::from(self.controller.feedback_markup().to_string())} />
                    </div>
                </section>

                <TripModal
                    entry={self.controller.modal().entry().cloned()}
                    on_dismiss={link.callback(PageMsg::ModalDismiss)}
                />

                <style>
                    {r#"
                    .landing-page {
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #1f2933;
                    }

                    .hero {
                        text-align: center;
                        padding: 6rem 2rem;
                        background: linear-gradient(135deg, #0b6e4f, #08415c);
                        color: #fff;
                    }

                    .hero h1 {
                        font-size: 3rem;
                        margin-bottom: 1rem;
                    }

                    .btn {
                        display: inline-block;
                        padding: 0.6rem 1.2rem;
                        border: none;
                        border-radius: 8px;
                        background: #f29e4c;
                        color: #fff;
                        text-decoration: none;
                        cursor: pointer;
                        transition: transform 0.1s ease;
                    }

                    .btn:active {
                        transform: scale(0.98);
                    }

                    .btn-secondary {
                        background: #08415c;
                    }

                    .trips-section, .feedback-section {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 3rem 1.5rem;
                    }

                    .trip-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                        gap: 1.5rem;
                    }

                    .trip-card {
                        cursor: pointer;
                        border-radius: 12px;
                        overflow: hidden;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.08);
                        background: #fff;
                    }

                    .trip-photo {
                        width: 100%;
                        height: 160px;
                        object-fit: cover;
                    }

                    .trip-card-body {
                        padding: 1rem;
                    }

                    .trip-actions {
                        display: flex;
                        gap: 0.5rem;
                    }

                    .feedback-columns {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                    }

                    .feedback-form {
                        display: flex;
                        flex-direction: column;
                        gap: 0.4rem;
                    }

                    .feedback-msg.success {
                        color: #0b6623;
                    }

                    .feedback-msg.error {
                        color: #b00020;
                    }

                    .feedback-list .item {
                        padding: 0.75rem 0;
                        border-bottom: 1px solid #e4e7eb;
                    }

                    .feedback-list .item-message {
                        margin-top: 6px;
                    }

                    .modal-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.6);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 1000;
                    }

                    .modal-content {
                        position: relative;
                        max-width: 560px;
                        width: 90%;
                        max-height: 90vh;
                        overflow-y: auto;
                        background: #fff;
                        border-radius: 12px;
                        padding: 1.5rem;
                    }

                    .modal-photo {
                        width: 100%;
                        border-radius: 8px;
                    }

                    .modal-close {
                        position: absolute;
                        top: 0.5rem;
                        right: 0.75rem;
                        background: none;
                        border: none;
                        font-size: 1.8rem;
                        cursor: pointer;
                    }

                    .modal-actions {
                        display: flex;
                        gap: 0.5rem;
                    }

                    @media (max-width: 768px) {
                        .hero h1 {
                            font-size: 2.2rem;
                        }

                        .feedback-columns {
                            grid-template-columns: 1fr;
                        }
                    }
                    "#}
                </style>
            </div>
        }
    }
}
