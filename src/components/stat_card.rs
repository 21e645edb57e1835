use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: String,
    pub value: String,
    pub icon: String,
    #[prop_or_default]
    pub sub: Option<String>,
    #[prop_or_default]
    pub color: String,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="card stat-card">
            <div class={classes!("stat-icon", props.color.clone())}>{ props.icon.clone() }</div>
            <div>
                <p class="stat-title">{ props.title.clone() }</p>
                <p class="stat-value">{ props.value.clone() }</p>
                if let Some(sub) = &props.sub {
                    <p class="stat-sub">{ sub }</p>
                }
            </div>
        </div>
    }
}
