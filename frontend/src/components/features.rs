use yew::prelude::*;

use crate::components::reveal_block::RevealBlock;

#[derive(Properties, PartialEq)]
struct FeatureColProps {
    title: AttrValue,
    description: AttrValue,
    children: Children,
}

#[function_component(FeatureCol)]
fn feature_col(props: &FeatureColProps) -> Html {
    html! {
        <RevealBlock class="feature-col">
            <div class="feature-icon">{ for props.children.iter() }</div>
            <h3 class="feature-title">{props.title.clone()}</h3>
            <p class="feature-description">{props.description.clone()}</p>
        </RevealBlock>
    }
}

#[function_component(ValueProposition)]
pub fn value_proposition() -> Html {
    html! {
        <div class="value-proposition">
            <h2>{"Designed to connect. Built to match."}</h2>
        </div>
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section class="features" id="features">
            <div class="feature-grid">
                <FeatureCol
                    title="Staff the right people"
                    description="Find the best fit for every project. Proflr makes your team’s skills and strengths visible, so you can match people to work that truly fits."
                >
                    <svg xmlns="http://www.w3.org/2000/svg" width="40" height="40" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <path d="M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2"/>
                        <circle cx="9" cy="7" r="4"/>
                        <path d="M23 21v-2a4 4 0 0 0-3-3.87"/>
                        <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
                    </svg>
                </FeatureCol>
                <FeatureCol
                    title="Up-to-date availability"
                    description="Always know who’s available. Proflr keeps schedules in sync with live project data, ensuring accurate staffing decisions at every moment."
                >
                    <svg xmlns="http://www.w3.org/2000/svg" width="40" height="40" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <path d="M18 8a6 6 0 0 1-12 0"/>
                        <rect x="6" y="2" width="12" height="6" rx="2"/>
                        <path d="M9 18v-2"/>
                        <path d="M15 18v-2"/>
                        <path d="M8 22h8"/>
                        <path d="M12 16v6"/>
                    </svg>
                </FeatureCol>
                <FeatureCol
                    title="Grow the right skills"
                    description="Stay ahead in a changing market. Proflr identifies and nurtures the skills that drive future success, helping consultants grow, teams evolve, and organizations stay ready for what’s next."
                >
                    <svg xmlns="http://www.w3.org/2000/svg" width="40" height="40" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <path d="M22 19v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>
                        <circle cx="12" cy="7" r="4"/>
                        <path d="M16 11V7a4 4 0 0 0-8 0v4"/>
                        <rect x="8" y="15" width="8" height="6" rx="2"/>
                    </svg>
                </FeatureCol>
            </div>
            <style>
                {r#"
                    .value-proposition {
                        padding: 60px 0;
                        text-align: left;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .value-proposition h2 {
                        font-size: 48px;
                        font-weight: 600;
                        color: #2D3C33;
                    }
                    .features {
                        padding: 40px 0 80px;
                    }
                    .feature-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 48px;
                    }
                    .feature-icon {
                        color: #00CE93;
                        margin-bottom: 16px;
                    }
                    .feature-icon svg {
                        width: 32px;
                        height: 32px;
                    }
                    .feature-title {
                        font-size: 22px;
                        font-weight: 600;
                        color: #2D3C33;
                        margin-bottom: 12px;
                    }
                    .feature-description {
                        font-size: 16px;
                        color: #666;
                        line-height: 1.6;
                    }
                    @media (max-width: 768px) {
                        .value-proposition h2 {
                            font-size: 36px;
                        }
                        .feature-grid {
                            grid-template-columns: 1fr;
                            gap: 32px;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
