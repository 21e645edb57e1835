use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct XpBarProps {
    pub percentual: u32,
    pub aulas: u32,
}

#[function_component(XpBar)]
pub fn xp_bar(props: &XpBarProps) -> Html {
    let percentual = props.percentual.min(100);
    html! {
        <div class="xp-bar">
            <div class="xp-bar-fill" style={format!("width: {}%", percentual)}></div>
            <span class="xp-bar-label">
                { format!("{} aulas assistidas ({}%)", props.aulas, percentual) }
            </span>
        </div>
    }
}
