use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::{KeyboardEvent, MouseEvent};

use crate::catalog::TripEntry;
use crate::controller::DismissReason;

#[derive(Properties, PartialEq)]
pub struct TripModalProps {
    pub entry: Option<TripEntry>,
    pub on_dismiss: Callback<DismissReason>,
}

/// Overlay with the details of one trip; renders nothing while hidden.
#[function_component(TripModal)]
pub fn trip_modal(props: &TripModalProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_dismiss.emit(DismissReason::EscapeKey);
            }
        });
    }

    let dismiss_with = |reason: DismissReason| {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_dismiss.emit(reason);
        })
    };

    let Some(entry) = &props.entry else {
        return html! {};
    };

    html! {
        <div class="modal-overlay" onclick={dismiss_with(DismissReason::Overlay)}>
            <div
                class="modal-content"
                role="dialog"
                aria-modal="true"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <button class="modal-close" aria-label="Tutup" onclick={dismiss_with(DismissReason::CloseButton)}>{"×"}</button>
                <img class="modal-photo" src={entry.photo.clone()} alt={entry.title.clone()} />
                <h3 class="modal-title">{&entry.title}</h3>
                <p class="modal-description">{&entry.description}</p>
                <p class="modal-price">{&entry.price}</p>
                <p class="modal-location">
                    <a href={entry.maps_url.clone()} target="_blank" rel="noopener">{&entry.location}</a>
                </p>
                <div class="modal-actions">
                    <a class="btn modal-reservation" href={entry.reservation_url.clone()} target="_blank" rel="noopener">
                        {"Reservasi"}
                    </a>
                    if entry.has_website() {
                        <a class="btn btn-secondary modal-website" href={entry.website_url.clone()}>
                            {"Lihat Halaman Trip"}
                        </a>
                    }
                </div>
            </div>
        </div>
    }
}
