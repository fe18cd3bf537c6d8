use yew::prelude::*;
use web_sys::MouseEvent;

use crate::catalog::TripEntry;

#[derive(Properties, PartialEq)]
pub struct TripCardProps {
    pub entry: TripEntry,
    pub on_activate: Callback<String>,
    pub on_detail: Callback<String>,
}

#[function_component(TripCard)]
pub fn trip_card(props: &TripCardProps) -> Html {
    let entry = &props.entry;

    let onclick = {
        let id = entry.id.clone();
        let on_activate = props.on_activate.clone();
        Callback::from(move |_: MouseEvent| {
            on_activate.emit(id.clone());
        })
    };

    let open_detail = {
        let id = entry.id.clone();
        let on_detail = props.on_detail.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            on_detail.emit(id.clone());
        })
    };

    html! {
        <article class="trip-card" {onclick}>
            <img class="trip-photo" src={entry.photo.clone()} alt={entry.title.clone()} loading="lazy" />
            <div class="trip-card-body">
                <h3 class="trip-title">{&entry.title}</h3>
                <p class="trip-location">{&entry.location}</p>
                <p class="trip-price">{&entry.price}</p>
                <div class="trip-actions">
                    <button class="btn btn-secondary" data-detail={entry.id.clone()} onclick={open_detail}>
                        {"Detail"}
                    </button>
                    <a
                        class="btn"
                        href={entry.reservation_url.clone()}
                        target="_blank"
                        rel="noopener"
                        onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                    >
                        {"Reservasi"}
                    </a>
                </div>
            </div>
        </article>
    }
}
