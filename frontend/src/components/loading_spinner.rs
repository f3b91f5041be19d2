use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl SpinnerSize {
    fn dimensions(self) -> &'static str {
        match self {
            SpinnerSize::Small => "h-5 w-5",
            SpinnerSize::Medium => "h-8 w-8",
            SpinnerSize::Large => "h-12 w-12",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or_default]
    pub size: SpinnerSize,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    html! {
        <div
            role="status"
            aria-label="Cargando"
            class={classes!(
                "inline-block",
                "animate-spin",
                "rounded-full",
                "border-2",
                "border-current",
                "border-t-transparent",
                props.size.dimensions(),
                props.class.clone()
            )}
        ></div>
    }
}
