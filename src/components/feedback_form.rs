use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::feedback::models::FeedbackFields;

#[derive(Properties, PartialEq)]
pub struct FeedbackFormProps {
    pub form_ref: NodeRef,
    pub on_submit: Callback<FeedbackFields>,
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(FeedbackForm)]
pub fn feedback_form(props: &FeedbackFormProps) -> Html {
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let message_ref = use_node_ref();
    let rating_ref = use_node_ref();

    let onsubmit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let message_ref = message_ref.clone();
        let rating_ref = rating_ref.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let fields = FeedbackFields {
                name: input_value(&name_ref),
                email: input_value(&email_ref),
                message: message_ref
                    .cast::<HtmlTextAreaElement>()
                    .map(|area| area.value())
                    .unwrap_or_default(),
                rating: rating_ref
                    .cast::<HtmlSelectElement>()
                    .map(|select| select.value())
                    .filter(|value| !value.is_empty()),
            };
            #[cfg(debug_assertions)]
            gloo_console::log!("Feedback submitted:", format!("{:?}", fields));
            on_submit.emit(fields);
        })
    };

    html! {
        <form id="feedbackForm" class="feedback-form" ref={props.form_ref.clone()} {onsubmit}>
            <label for="feedback-name">{"Nama"}</label>
            <input id="feedback-name" name="name" type="text" ref={name_ref} />

            <label for="feedback-email">{"Email"}</label>
            <input id="feedback-email" name="email" type="email" ref={email_ref} />

            <label for="feedback-rating">{"Rating"}</label>
            <select id="feedback-rating" name="rating" ref={rating_ref}>
                <option value="5" selected={true}>{"5 - Luar biasa"}</option>
                <option value="4">{"4 - Bagus"}</option>
                <option value="3">{"3 - Cukup"}</option>
                <option value="2">{"2 - Kurang"}</option>
                <option value="1">{"1 - Buruk"}</option>
            </select>

            <label for="feedback-message">{"Pesan"}</label>
            <textarea id="feedback-message" name="message" rows="4" ref={message_ref} />

            <button type="submit" class="btn">{"Kirim Feedback"}</button>
        </form>
    }
}
