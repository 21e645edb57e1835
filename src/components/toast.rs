use yew::prelude::*;

use crate::hooks::ToastMessage;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<ToastMessage>,
    pub on_close: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let Some(message) = &props.message else {
        return Html::default();
    };
    html! {
        <div class={message.kind.class()} role="status">
            <span>{ message.text.clone() }</span>
            <button class="toast-close" onclick={props.on_close.reform(|_: MouseEvent| ())}>{"✕"}</button>
        </div>
    }
}
