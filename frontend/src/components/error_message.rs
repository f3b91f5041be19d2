use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    html! {
        <div
            role="alert"
            class={classes!("rounded-md", "bg-red-50", "p-4", "text-sm", "text-red-700", props.class.clone())}
        >
            { props.message.clone() }
        </div>
    }
}
