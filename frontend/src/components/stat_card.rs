use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub label: AttrValue,
    pub value: AttrValue,
    pub icon: AttrValue,
    /// Extra classes, e.g. a colored accent border
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class={classes!("stat-card", props.class.clone())}>
            <div class="stat-card-body">
                <p class="stat-label">{props.label.clone()}</p>
                <div class="stat-value">{props.value.clone()}</div>
            </div>
            <div class="stat-icon">{props.icon.clone()}</div>
        </div>
    }
}
