use yew::prelude::*;

use crate::components::links::DemoLink;

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub on_close: Callback<()>,
}

/// Full-screen menu for narrow viewports. Only mounted while open.
#[function_component(MobileMenuOverlay)]
pub fn mobile_menu_overlay(props: &MobileMenuProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Clicks inside the panels must not reach the backdrop.
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    // Links and buttons still dismiss the menu on their own.
    let close_from_inside = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    html! {
        <div class="mobile-menu-overlay" onclick={close.clone()}>
            <button class="mobile-menu-close" aria-label="Close menu" onclick={close}>
                <span></span>
                <span></span>
            </button>
            <div class="mobile-menu-links" onclick={stop.clone()}>
                <a href="#features" onclick={close_from_inside.clone()}>{"Features"}</a>
                <a href="#onboarding" onclick={close_from_inside.clone()}>{"How it works"}</a>
            </div>
            <div class="mobile-menu-buttons" onclick={stop}>
                <button class="nav-secondary-button" onclick={close_from_inside.clone()}>
                    {"Login"}
                </button>
                <DemoLink class="nav-button" onclick={close_from_inside} />
            </div>
            <style>
                {r#"
                    .mobile-menu-overlay {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100vw;
                        height: 100vh;
                        background: rgba(255, 255, 255, 0.98);
                        z-index: 9999;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                    }
                    .mobile-menu-close {
                        position: absolute;
                        top: 32px;
                        right: 32px;
                        width: 32px;
                        height: 32px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        z-index: 10001;
                    }
                    .mobile-menu-close span {
                        display: block;
                        height: 2px;
                        background: #222;
                        border-radius: 2px;
                        position: absolute;
                        left: 5px;
                        right: 5px;
                    }
                    .mobile-menu-close span:first-child {
                        transform: rotate(45deg);
                    }
                    .mobile-menu-close span:last-child {
                        transform: rotate(-45deg);
                    }
                    .mobile-menu-links {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 32px;
                        margin-bottom: 32px;
                    }
                    .mobile-menu-links a {
                        color: #2D3C33;
                        text-decoration: none;
                        font-size: 20px;
                        font-weight: 500;
                    }
                    .mobile-menu-buttons {
                        display: flex;
                        flex-direction: column;
                        gap: 16px;
                        width: 80vw;
                        max-width: 320px;
                    }
                    .mobile-menu-buttons > * {
                        display: block;
                        width: 100%;
                        margin: 0;
                        text-align: center;
                        box-sizing: border-box;
                    }
                    @media (min-width: 769px) {
                        .mobile-menu-overlay {
                            display: none;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn overlay_carries_links_and_ctas() {
        let html = ServerRenderer::<MobileMenuOverlay>::with_props(|| MobileMenuProps {
            on_close: Callback::from(|_: ()| ()),
        })
        .render()
        .await;
        assert!(html.contains("class=\"mobile-menu-overlay\""));
        assert!(html.contains("aria-label=\"Close menu\""));
        assert!(html.contains("href=\"#features\""));
        assert!(html.contains(crate::config::DEMO_URL));
    }
}
