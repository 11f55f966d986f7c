use salescrm_shared::{Priority, Sentiment, Stage};
use yew::prelude::*;

use crate::utils::badge_style;

#[derive(Properties, PartialEq)]
pub struct StageBadgeProps {
    pub stage: Stage,
}

#[function_component(StageBadge)]
pub fn stage_badge(props: &StageBadgeProps) -> Html {
    html! {
        <span
            class="px-2 py-0.5 rounded-full text-xs font-medium"
            style={badge_style(props.stage.color())}
        >
            {props.stage.label()}
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct PriorityBadgeProps {
    pub priority: Priority,
}

#[function_component(PriorityBadge)]
pub fn priority_badge(props: &PriorityBadgeProps) -> Html {
    html! {
        <span
            class="px-2 py-0.5 rounded text-xs font-medium"
            style={badge_style(props.priority.color())}
        >
            {props.priority.label()}
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct SentimentBadgeProps {
    pub sentiment: Sentiment,
}

#[function_component(SentimentBadge)]
pub fn sentiment_badge(props: &SentimentBadgeProps) -> Html {
    html! {
        <span
            class="px-2 py-0.5 rounded-full text-xs"
            style={badge_style(props.sentiment.color())}
        >
            {props.sentiment.label()}
        </span>
    }
}
