use yew::prelude::*;

use crate::components::links::DemoLink;

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    html! {
        <section class="cta">
            <div class="cta-content">
                <h2 class="cta-title">{"Ready to transform your expert matching?"}</h2>
                <p class="cta-description">
                    {"Join leading companies who trust Proflr for their consultant matching needs."}
                </p>
                <div class="cta-buttons">
                    <button class="primary-button">{"Get Started"}</button>
                    <DemoLink class="secondary-button" />
                </div>
            </div>
            <style>
                {r#"
                    .cta {
                        padding: 80px 0 120px;
                        text-align: center;
                    }
                    .cta-content {
                        max-width: 640px;
                        margin: 0 auto;
                    }
                    .cta-title {
                        font-size: 40px;
                        font-weight: 700;
                        color: #2D3C33;
                        margin-bottom: 16px;
                    }
                    .cta-description {
                        font-size: 18px;
                        color: #666;
                        margin-bottom: 32px;
                    }
                    .cta-buttons {
                        display: flex;
                        gap: 16px;
                        justify-content: center;
                        flex-wrap: wrap;
                    }
                "#}
            </style>
        </section>
    }
}
