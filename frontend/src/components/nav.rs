use yew::prelude::*;

use crate::components::links::DemoLink;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub scrolled: bool,
    pub menu_open: bool,
    pub on_open_menu: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { scrolled, menu_open, on_open_menu } = props;

    let open_menu = {
        let on_open_menu = on_open_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_open_menu.emit(());
        })
    };

    html! {
        <nav class={classes!("top-nav", (*scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="nav-logo">
                    <img src="/proflr.svg" alt="Proflr Logo" />
                </div>
                <div class="nav-links"></div>
                <div class="nav-actions">
                    <button class="nav-secondary-button">{"Login"}</button>
                    <DemoLink class="nav-button" />
                </div>
                {
                    if !*menu_open {
                        html! {
                            <button class="burger-menu" aria-label="Open menu" onclick={open_menu}>
                                <span></span>
                                <span></span>
                                <span></span>
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <style>
                {r#"
                    .top-nav {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 24px 0;
                        position: sticky;
                        top: 0;
                        z-index: 100;
                        background: transparent;
                        box-shadow: none;
                        transition: background 0.3s, box-shadow 0.3s;
                    }
                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.05);
                        backdrop-filter: blur(5px);
                        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.03);
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        width: 100%;
                        padding: 0 30px;
                    }
                    .nav-logo {
                        flex: 0 0 auto;
                        display: flex;
                        align-items: center;
                    }
                    .nav-logo img {
                        height: 32px;
                        width: auto;
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 32px;
                        flex: 1;
                        justify-content: center;
                    }
                    .nav-actions {
                        flex: 0 0 auto;
                        margin-left: 32px;
                        display: flex;
                        align-items: center;
                    }
                    .nav-button {
                        background: #00CE93;
                        color: white;
                        border: none;
                        padding: 12px 20px;
                        border-radius: 6px;
                        font-size: 15px;
                        font-weight: 500;
                        cursor: pointer;
                        transition: all 0.2s ease;
                        text-decoration: none;
                    }
                    .nav-button:hover {
                        background: #00B883;
                    }
                    .nav-secondary-button {
                        background: white;
                        color: #2D3C33;
                        border: 1px solid #E5E5E5;
                        padding: 10px 20px;
                        border-radius: 6px;
                        font-size: 15px;
                        font-weight: 500;
                        cursor: pointer;
                        margin-right: 16px;
                        transition: all 0.2s ease;
                    }
                    .nav-secondary-button:hover {
                        background: #F8F9FA;
                        border-color: #00CE93;
                    }
                    .burger-menu {
                        display: none;
                        width: 32px;
                        height: 32px;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0;
                    }
                    .burger-menu span {
                        display: block;
                        width: 22px;
                        height: 2px;
                        background: #222;
                        margin: 4px 0;
                        border-radius: 2px;
                        transition: 0.3s;
                    }
                    @media (max-width: 768px) {
                        .nav-logo img {
                            height: 28px;
                        }
                        .nav-content {
                            justify-content: space-between;
                            padding: 12px 18px;
                        }
                        .nav-links,
                        .nav-actions {
                            display: none;
                        }
                        .burger-menu {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render(scrolled: bool, menu_open: bool) -> String {
        ServerRenderer::<Nav>::with_props(move || NavProps {
            scrolled,
            menu_open,
            on_open_menu: Callback::from(|_: ()| ()),
        })
        .render()
        .await
    }

    #[tokio::test]
    async fn scrolled_class_follows_flag() {
        assert!(render(true, false).await.contains("top-nav scrolled"));
        assert!(!render(false, false).await.contains("top-nav scrolled"));
    }

    #[tokio::test]
    async fn hamburger_hidden_while_menu_open() {
        assert!(render(false, false).await.contains("class=\"burger-menu\""));
        assert!(!render(false, true).await.contains("class=\"burger-menu\""));
    }

    #[tokio::test]
    async fn demo_link_opens_new_tab() {
        let html = render(false, false).await;
        assert!(html.contains(crate::config::DEMO_URL));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("noopener noreferrer"));
    }
}
