use yew::prelude::*;
use web_sys::Element;

#[derive(Properties, PartialEq)]
pub struct FeedbackListProps {
    /// Pre-escaped markup from `render_feedback_list`.
    pub markup: AttrValue,
}

#[function_component(FeedbackList)]
pub fn feedback_list(props: &FeedbackListProps) -> Html {
    let list_ref = use_node_ref();

    {
        let list_ref = list_ref.clone();
        use_effect_with_deps(
            move |markup: &AttrValue| {
                if let Some(list) = list_ref.cast::<Element>() {
                    list.set_inner_html(markup);
                }
                || ()
            },
            props.markup.clone(),
        );
    }

    html! {
        <div id="feedbackList" class="feedback-list" ref={list_ref}></div>
    }
}
