use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub fullscreen: bool,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    let class = if props.fullscreen {
        "loading loading-fullscreen"
    } else {
        "loading"
    };
    html! {
        <div {class}>
            <div class="loading-text">{"Carregando..."}</div>
        </div>
    }
}
