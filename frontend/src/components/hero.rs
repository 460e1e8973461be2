use yew::prelude::*;

use crate::components::links::DemoLink;
use crate::config::{HERO_REVEAL_SECS, REVEAL_OFFSET_PX};
use crate::hooks::use_mount_reveal;
use crate::state::reveal::RevealTransition;

const HERO_TRANSITION: RevealTransition = RevealTransition {
    duration_secs: HERO_REVEAL_SECS,
    offset_px: REVEAL_OFFSET_PX,
};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    /// Measured by the nav to decide when it turns solid.
    pub hero_ref: NodeRef,
}

/// Decorative artwork behind the nav and hero.
#[function_component(HeroBackground)]
pub fn hero_background() -> Html {
    html! { <div class="hero-background"></div> }
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let reveal = use_mount_reveal();

    html! {
        <section class="hero" ref={props.hero_ref.clone()}>
            <div class="hero-content">
                <div style={HERO_TRANSITION.style(reveal)}>
                    <div class="hero-tag">
                        <span class="blinking-dot"></span>
                        {"Beta release"}
                    </div>
                    <h1 class="hero-title">
                        {"The new standard"}<br/>
                        {"in expert matching"}
                    </h1>
                    <p class="hero-description">
                        {"AI-powered matching that connects your challenge with the right expert, promotes diversity, and accelerates both business and expert growth."}
                    </p>
                    <div class="hero-buttons">
                        <DemoLink class="primary-button" />
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .hero-background {
                        position: absolute;
                        top: 0;
                        left: 0;
                        right: 0;
                        width: 100%;
                        height: 700px;
                        background:
                            linear-gradient(to bottom, rgba(255,255,255,0) 90%, #F8F9FA 99%, #F8F9FA 100%),
                            url('/logos/hero_image2.svg') no-repeat center top;
                        background-size: 100% auto, 100% auto;
                        z-index: 0;
                    }
                    .hero {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        padding: 120px 0;
                        text-align: center;
                        position: relative;
                        overflow: hidden;
                    }
                    .hero::before {
                        content: '';
                        position: absolute;
                        inset: 0;
                        background-image:
                            radial-gradient(circle at 20% 20%, rgba(0, 206, 147, 0.03) 0%, transparent 50%),
                            radial-gradient(circle at 80% 80%, rgba(0, 206, 147, 0.03) 0%, transparent 50%),
                            linear-gradient(45deg, rgba(0, 206, 147, 0.02) 25%, transparent 25%),
                            linear-gradient(-45deg, rgba(0, 206, 147, 0.02) 25%, transparent 25%);
                        background-size: 100% 100%, 100% 100%, 60px 60px, 60px 60px;
                        opacity: 0.8;
                        z-index: 0;
                    }
                    .hero-content {
                        max-width: 800px;
                        margin: 220px auto 0;
                        position: relative;
                        z-index: 2;
                        text-shadow: 0 2px 16px rgba(0,0,0,0.12);
                    }
                    .hero-tag {
                        display: inline-flex;
                        align-items: center;
                        gap: 10px;
                        background: #E8F7F2;
                        color: #00CE93;
                        padding: 8px 16px;
                        border-radius: 100px;
                        font-size: 14px;
                        font-weight: 500;
                        margin-bottom: 24px;
                    }
                    .blinking-dot {
                        display: inline-block;
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        background: #00CE93;
                        margin-right: 2px;
                        animation: blink 1.5s infinite;
                    }
                    @keyframes blink {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.5; }
                    }
                    .hero-title {
                        font-size: 72px;
                        line-height: 1.1;
                        margin-bottom: 32px;
                        font-weight: 700;
                        letter-spacing: -0.02em;
                        color: #2D3C33;
                    }
                    .hero-description {
                        font-size: 24px;
                        color: #2D3C33;
                        max-width: 600px;
                        margin: 0 auto 48px;
                        line-height: 1.6;
                    }
                    .hero-buttons {
                        display: flex;
                        gap: 16px;
                        justify-content: center;
                    }
                    .primary-button {
                        background: #00CE93;
                        color: white;
                        border: none;
                        padding: 16px 32px;
                        border-radius: 8px;
                        font-size: 16px;
                        font-weight: 500;
                        cursor: pointer;
                        transition: all 0.2s ease;
                        text-decoration: none;
                    }
                    .primary-button:hover {
                        background: #00B883;
                    }
                    .secondary-button {
                        background: white;
                        color: #2D3C33;
                        border: 1px solid #E5E5E5;
                        padding: 16px 32px;
                        border-radius: 8px;
                        font-size: 16px;
                        font-weight: 500;
                        cursor: pointer;
                        transition: all 0.2s ease;
                        text-decoration: none;
                    }
                    .secondary-button:hover {
                        background: #F8F9FA;
                        border-color: #00CE93;
                    }
                    @media (max-width: 768px) {
                        .hero-background {
                            height: 400px;
                        }
                        .hero-content {
                            margin-top: 120px;
                            padding: 0 16px;
                        }
                        .hero-title {
                            font-size: 48px;
                        }
                        .hero-description {
                            font-size: 20px;
                        }
                        .hero-buttons {
                            flex-direction: column;
                            align-items: center;
                            width: 100%;
                            margin-top: 24px;
                        }
                        .hero-buttons > * {
                            width: 100%;
                            max-width: 320px;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
