use yew::prelude::*;

use crate::components::reveal_block::RevealBlock;

#[derive(Properties, PartialEq)]
pub struct MetricCardProps {
    pub number: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub qualifier: Option<AttrValue>,
}

#[function_component(MetricCard)]
pub fn metric_card(props: &MetricCardProps) -> Html {
    html! {
        <RevealBlock class="metric-card">
            if let Some(qualifier) = &props.qualifier {
                <div class="metric-qualifier">{qualifier.clone()}</div>
            }
            <div class="metric-number">{props.number.clone()}</div>
            <div class="metric-label">{props.label.clone()}</div>
        </RevealBlock>
    }
}

#[function_component(Metrics)]
pub fn metrics() -> Html {
    html! {
        <section class="metrics">
            <MetricCard qualifier="Up to" number="10x" label="faster team assembly" />
            <MetricCard qualifier="Increase visibility by" number="200%" label="across people and skills" />
            <MetricCard qualifier="Match at least" number="4x" label="more projects on expertise, not familiarity" />
            <style>
                {r#"
                    .metrics {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 0;
                        padding: 80px 0 40px;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .metric-card {
                        padding: 32px;
                        text-align: left;
                        position: relative;
                    }
                    .metric-card:not(:last-of-type)::after {
                        content: '';
                        position: absolute;
                        right: 0;
                        top: 50%;
                        transform: translateY(-50%);
                        height: 70%;
                        width: 1px;
                        background-color: #E5E5E5;
                    }
                    .metric-number {
                        font-size: 48px;
                        font-weight: 700;
                        color: #2D3C33;
                        margin-bottom: 8px;
                    }
                    .metric-label,
                    .metric-qualifier {
                        font-size: 20px;
                        color: #666;
                        margin-bottom: 8px;
                    }
                    @media (max-width: 768px) {
                        .metrics {
                            grid-template-columns: 1fr;
                            gap: 40px;
                        }
                        .metric-card::after {
                            display: none;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
