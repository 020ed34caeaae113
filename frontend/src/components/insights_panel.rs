use yew::prelude::*;
use web_sys::MouseEvent;
use crate::hooks::use_insights::{InsightsState, UseInsightsActions};

/// Splits insight text into bullet items, one per non-blank line
pub fn insight_items(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct InsightsPanelProps {
    pub state: InsightsState,
    pub actions: UseInsightsActions,
}

#[function_component(InsightsPanel)]
pub fn insights_panel(props: &InsightsPanelProps) -> Html {
    let on_generate = {
        let generate_insights = props.actions.generate_insights.clone();
        Callback::from(move |_: MouseEvent| generate_insights.emit(()))
    };

    let body = if props.state.generating {
        html! {
            <div class="insights-loading">
                <div class="spinner"></div>
                <span>{"Generating insights..."}</span>
            </div>
        }
    } else if let Some(text) = &props.state.insights {
        html! {
            <ul class="insights-list">
                { for insight_items(text).into_iter().enumerate().map(|(index, item)| html! {
                    <li key={index}>
                        <span class="insight-bullet">{"•"}</span>
                        <span>{item.to_string()}</span>
                    </li>
                }) }
            </ul>
        }
    } else {
        html! {
            <div class="insights-empty">
                <p>{"Get AI-powered analysis of your payroll data"}</p>
                <button class="btn btn-insights" onclick={on_generate}>
                    {"✨ Generate Insights"}
                </button>
            </div>
        }
    };

    html! {
        <div class="insights-panel">
            <div class="insights-header">
                <h2>{"✨ AI-Powered Insights"}</h2>
            </div>
            <div class="insights-body">
                {body}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_items_skip_blank_lines() {
        let text = "Net pay rose 5% over the period\n\n  Overtime drove most of the increase  \nSSS contributions are unchanged\n";
        assert_eq!(
            insight_items(text),
            vec![
                "Net pay rose 5% over the period",
                "Overtime drove most of the increase",
                "SSS contributions are unchanged",
            ]
        );
    }

    #[test]
    fn test_fallback_renders_as_single_item() {
        let items = insight_items(crate::hooks::use_insights::INSIGHTS_FALLBACK);
        assert_eq!(items.len(), 1);
    }
}
