use yew::prelude::*;

use crate::state::feature::Feature;

#[derive(Properties, PartialEq)]
pub struct OnboardingProps {
    pub active: Feature,
    pub on_select: Callback<Feature>,
}

fn feature_icon(feature: Feature) -> Html {
    match feature {
        Feature::ConnectedOnboarding => html! {
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="#00CE93" stroke-width="2">
                <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>
                <circle cx="9" cy="7" r="4"/>
                <path d="M22 21v-2a4 4 0 0 0-3-3.87"/>
                <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
            </svg>
        },
        Feature::SmartMatching => html! {
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="#00CE93" stroke-width="2">
                <circle cx="11" cy="11" r="7"/>
                <path d="M21 21l-4.35-4.35"/>
                <path d="M8 11l2 2 4-4"/>
            </svg>
        },
        Feature::TeamIntelligence => html! {
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="#00CE93" stroke-width="2">
                <path d="M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2"/>
                <circle cx="9" cy="7" r="4"/>
                <path d="M23 21v-2a4 4 0 0 0-3-3.87"/>
                <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
                <circle cx="18" cy="12" r="3"/>
                <path d="M18 9v6"/>
                <path d="M16.5 10.5h3"/>
                <path d="M16.5 13.5h3"/>
            </svg>
        },
    }
}

#[derive(Properties, PartialEq)]
struct FeaturePanelProps {
    feature: Feature,
}

#[function_component(FeaturePanel)]
fn feature_panel(props: &FeaturePanelProps) -> Html {
    let visual = props.feature.visual();
    html! {
        <div class={classes!("onboarding-image", props.feature.slug())}>
            <div class="large-visual">
                <img alt={visual.alt} src={visual.src} style={visual.style} />
            </div>
        </div>
    }
}

/// Feature tabs with a single visual panel. Inactive panels are not kept
/// in the DOM; the panel is keyed by feature so a switch remounts it.
#[function_component(Onboarding)]
pub fn onboarding(props: &OnboardingProps) -> Html {
    let active = props.active;

    html! {
        <section class="onboarding" id="onboarding">
            <h2 class="section-title">{"The team intelligence platform for modern organisations."}</h2>
            <p class="section-subtitle">
                {"Proflr connects people, projects, and skills. From onboarding to team formation, so you always know who fits where."}
            </p>
            <div class="onboarding-content">
                <div class="onboarding-visual">
                    <FeaturePanel key={active.slug()} feature={active} />
                </div>
                <div class="onboarding-features">
                    { for Feature::ALL.into_iter().map(|feature| {
                        let onclick = {
                            let on_select = props.on_select.clone();
                            Callback::from(move |_: MouseEvent| on_select.emit(feature))
                        };
                        html! {
                            <div
                                key={feature.slug()}
                                class={classes!("onboarding-feature", (feature == active).then(|| "active"))}
                                {onclick}
                            >
                                <div class="onboarding-feature-icon">{feature_icon(feature)}</div>
                                <div class="onboarding-feature-content">
                                    <div class="onboarding-feature-title">{feature.title()}</div>
                                    <div class="onboarding-feature-text">{feature.description()}</div>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .onboarding {
                        padding: 80px 0;
                    }
                    .section-title {
                        font-size: 40px;
                        font-weight: 600;
                        color: #2D3C33;
                        margin-bottom: 16px;
                    }
                    .section-subtitle {
                        font-size: 18px;
                        color: #666;
                        max-width: 720px;
                        margin-bottom: 48px;
                        line-height: 1.6;
                    }
                    .onboarding-content {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 48px;
                        align-items: center;
                    }
                    .onboarding-visual {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        height: 540px;
                        background: #EEF2EF;
                        border-radius: 16px;
                        overflow: hidden;
                    }
                    .large-visual img {
                        object-fit: contain;
                        max-width: 100%;
                        max-height: 100%;
                    }
                    .onboarding-features {
                        display: flex;
                        flex-direction: column;
                        gap: 16px;
                    }
                    .onboarding-feature {
                        display: flex;
                        gap: 16px;
                        padding: 24px;
                        border: 1px solid #E5E5E5;
                        border-radius: 12px;
                        background: white;
                        cursor: pointer;
                        transition: border-color 0.2s, box-shadow 0.2s;
                    }
                    .onboarding-feature:hover {
                        border-color: #00CE93;
                    }
                    .onboarding-feature.active {
                        border-color: #00CE93;
                        box-shadow: 0 4px 20px rgba(0, 206, 147, 0.08);
                    }
                    .onboarding-feature-icon {
                        flex: 0 0 40px;
                        height: 40px;
                        border-radius: 10px;
                        background: #E8F7F2;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .onboarding-feature-title {
                        font-size: 18px;
                        font-weight: 600;
                        color: #2D3C33;
                        margin-bottom: 6px;
                    }
                    .onboarding-feature-text {
                        font-size: 15px;
                        color: #666;
                        line-height: 1.6;
                    }
                    @media (max-width: 992px) {
                        .onboarding-content {
                            grid-template-columns: 1fr;
                        }
                        .onboarding-visual {
                            height: 400px;
                            margin-bottom: 40px;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render(active: Feature) -> String {
        ServerRenderer::<Onboarding>::with_props(move || OnboardingProps {
            active,
            on_select: Callback::from(|_: Feature| ()),
        })
        .render()
        .await
    }

    #[tokio::test]
    async fn only_active_panel_is_mounted() {
        let html = render(Feature::SmartMatching).await;
        assert!(html.contains("Proflr Smart Project Interface"));
        assert!(!html.contains("Connected onboarding visual"));
        assert!(!html.contains("Team intelligence visual"));
    }

    #[tokio::test]
    async fn default_panel_is_connected_onboarding() {
        let html = render(Feature::default()).await;
        assert!(html.contains("Connected onboarding visual"));
        assert!(!html.contains("Proflr Smart Project Interface"));
    }

    #[tokio::test]
    async fn all_tabs_render_with_one_active() {
        let html = render(Feature::TeamIntelligence).await;
        for feature in Feature::ALL {
            assert!(html.contains(feature.title()));
        }
        assert_eq!(html.matches("onboarding-feature active").count(), 1);
    }

    #[tokio::test]
    async fn same_state_renders_same_panel() {
        assert_eq!(render(Feature::SmartMatching).await, render(Feature::SmartMatching).await);
    }
}
