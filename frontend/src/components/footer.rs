use chrono::Datelike;
use yew::prelude::*;

use crate::components::links::ExternalLink;
use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();
    let mailto = config::contact_mailto();

    html! {
        <footer class="site-footer">
            <div class="footer-container">
                <div class="footer-top">
                    <div class="footer-logo">
                        <img src="/proflr.svg" alt="Proflr Logo" />
                    </div>
                    <div class="footer-links">
                        <div class="footer-link-group">
                            <h4>{"Home"}</h4>
                        </div>
                        <div class="footer-link-group">
                            <h4>{"How it works"}</h4>
                            <a class="footer-link" href="#privacy">{"Privacy policy"}</a>
                        </div>
                        <div class="footer-link-group">
                            <h4>{"Our mission"}</h4>
                            <ExternalLink href={config::VENTURE_URL} class="footer-link">{"Proflr"}</ExternalLink>
                        </div>
                    </div>
                    <div class="footer-cta">
                        <a class="footer-cta-button" href={mailto}>{"CONTACT US"}</a>
                    </div>
                </div>
                <hr class="footer-divider" />
                <div class="footer-bottom">
                    <div class="footer-copyright">
                        {format!("Copyright © {}", year)}
                        <div class="footer-tagline">{"A Pompadour.ventures initiative."}</div>
                    </div>
                    <div class="footer-social">
                        <ExternalLink href={config::LINKEDIN_URL} class="social-link" aria_label="LinkedIn">
                            <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"></path>
                                <rect x="2" y="9" width="4" height="12"></rect>
                                <circle cx="4" cy="4" r="2"></circle>
                            </svg>
                        </ExternalLink>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .site-footer {
                        background: #B4C96D;
                        color: #EAE4D3;
                        padding: 60px 0 40px;
                    }
                    .footer-container {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 24px;
                    }
                    .footer-top {
                        display: grid;
                        grid-template-columns: 1fr 2fr 1fr;
                        gap: 32px;
                        margin-bottom: 40px;
                    }
                    .footer-logo img {
                        height: 40px;
                    }
                    .footer-links {
                        display: flex;
                        justify-content: space-around;
                    }
                    .footer-link-group {
                        display: flex;
                        flex-direction: column;
                        gap: 12px;
                    }
                    .footer-link-group h4 {
                        font-size: 18px;
                        font-weight: 600;
                        margin-bottom: 8px;
                    }
                    .footer-link {
                        color: #EAE4D3;
                        text-decoration: none;
                        font-size: 15px;
                    }
                    .footer-link:hover {
                        text-decoration: underline;
                    }
                    .footer-cta {
                        display: flex;
                        justify-content: flex-end;
                        align-items: flex-start;
                    }
                    .footer-cta-button {
                        background: #FA8072;
                        color: #FFF;
                        border: none;
                        padding: 12px 24px;
                        border-radius: 8px;
                        font-weight: 600;
                        font-size: 14px;
                        cursor: pointer;
                        text-decoration: none;
                    }
                    .footer-cta-button:hover {
                        background: #F57063;
                    }
                    .footer-divider {
                        border: none;
                        height: 1px;
                        background: rgba(234, 228, 211, 0.3);
                        margin: 0 0 32px 0;
                    }
                    .footer-bottom {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .footer-copyright {
                        font-size: 15px;
                        display: flex;
                        flex-direction: column;
                        gap: 8px;
                    }
                    .footer-tagline {
                        font-size: 14px;
                    }
                    .footer-social {
                        display: flex;
                        gap: 16px;
                    }
                    .social-link {
                        color: #EAE4D3;
                        transition: opacity 0.2s;
                    }
                    .social-link:hover {
                        opacity: 0.8;
                    }
                    @media (max-width: 992px) {
                        .footer-top {
                            grid-template-columns: 1fr;
                            text-align: center;
                        }
                        .footer-cta {
                            justify-content: center;
                        }
                    }
                    @media (max-width: 768px) {
                        .footer-links,
                        .footer-bottom {
                            flex-direction: column;
                            gap: 24px;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn footer_links_and_year() {
        let html = ServerRenderer::<Footer>::new().render().await;
        assert!(html.contains("mailto:madame@pompadour.ventures?subject="));
        assert!(html.contains(config::LINKEDIN_URL));
        assert!(html.contains(&chrono::Local::now().year().to_string()));
    }
}
