use yew::prelude::*;

const LOGOS: [(&str, &str); 6] = [
    ("/nlmtd_logo.svg", "nlmtd"),
    ("/accenture_logo.svg", "accenture"),
    ("/elsevier_logo.svg", "Elsevier"),
    ("/capgemini_logo.svg", "Capgemini"),
    ("/dept_logo.svg", "Dept"),
    ("/berenschot_logo.svg", "Berenschot"),
];

/// Endless logo strip. The list is rendered twice and the track slides by
/// half its width, so the loop has no visible seam.
#[function_component(LogoBar)]
pub fn logo_bar() -> Html {
    html! {
        <section class="logo-bar">
            <div class="logo-bar-label">{"Built for businesses that lead with knowledge"}</div>
            <div class="logo-bar-window">
                <div class="logo-bar-gradient left"></div>
                <div class="logo-bar-gradient right"></div>
                <div class="logo-bar-track">
                    { for LOGOS.iter().chain(LOGOS.iter()).enumerate().map(|(i, (src, alt))| html! {
                        <img key={i} class="logo-bar-logo" src={*src} alt={*alt} />
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .logo-bar {
                        padding: 40px 0;
                        text-align: center;
                    }
                    .logo-bar-label {
                        font-size: 16px;
                        color: #666;
                        margin-bottom: 24px;
                    }
                    .logo-bar-window {
                        position: relative;
                        overflow: hidden;
                        width: 100%;
                    }
                    .logo-bar-track {
                        display: flex;
                        align-items: center;
                        gap: 64px;
                        width: max-content;
                        animation: scroll-logos 30s linear infinite;
                    }
                    @keyframes scroll-logos {
                        0% { transform: translateX(0); }
                        100% { transform: translateX(-50%); }
                    }
                    .logo-bar-gradient {
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        width: 80px;
                        z-index: 1;
                        pointer-events: none;
                    }
                    .logo-bar-gradient.left {
                        left: 0;
                        background: linear-gradient(to right, #F8F9FA 80%, rgba(248,249,250,0) 100%);
                    }
                    .logo-bar-gradient.right {
                        right: 0;
                        background: linear-gradient(to left, #F8F9FA 80%, rgba(248,249,250,0) 100%);
                    }
                    .logo-bar-logo {
                        height: 32px;
                        width: auto;
                        opacity: 0.6;
                        filter: grayscale(100%);
                        transition: opacity 0.2s;
                    }
                    .logo-bar-logo:hover {
                        opacity: 0.8;
                    }
                "#}
            </style>
        </section>
    }
}
