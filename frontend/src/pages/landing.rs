use log::info;
use yew::prelude::*;

use crate::components::{
    cta::CallToAction,
    features::{Features, ValueProposition},
    footer::Footer,
    hero::{Hero, HeroBackground},
    logo_bar::LogoBar,
    metrics::Metrics,
    mobile_menu::MobileMenuOverlay,
    nav::Nav,
    onboarding::Onboarding,
    testimonials::Testimonials,
};
use crate::hooks::{use_mobile_menu, use_nav_scrolled};
use crate::state::feature::{self, Feature};
use crate::state::menu::MenuEvent;

/// The landing page. Owns the three pieces of page state: nav scrolled,
/// mobile menu open, active feature tab.
#[function_component(Landing)]
pub fn landing() -> Html {
    let hero_ref = use_node_ref();
    let nav_scrolled = use_nav_scrolled(hero_ref.clone());
    let menu = use_mobile_menu();
    let active_feature = use_state_eq(Feature::default);

    let open_menu = {
        let dispatch = menu.dispatch.clone();
        Callback::from(move |_: ()| dispatch.emit(MenuEvent::Open))
    };
    let close_menu = {
        let dispatch = menu.dispatch.clone();
        Callback::from(move |_: ()| dispatch.emit(MenuEvent::Close))
    };

    let select_feature = {
        let active_feature = active_feature.clone();
        Callback::from(move |clicked: Feature| {
            if let Some(next) = feature::select(*active_feature, clicked) {
                info!("Feature tab -> {}", next.slug());
                active_feature.set(next);
            }
        })
    };

    html! {
        <div class="landing-page">
            <HeroBackground />
            <Nav scrolled={nav_scrolled} menu_open={menu.is_open} on_open_menu={open_menu} />
            if menu.is_open {
                <MobileMenuOverlay on_close={close_menu} />
            }
            <div class="container">
                <Hero hero_ref={hero_ref} />
                <LogoBar />
                <Metrics />
                <ValueProposition />
                <Features />
                <Onboarding active={*active_feature} on_select={select_feature} />
                <Testimonials />
                <CallToAction />
            </div>
            <Footer />
            <style>
                {r#"
                    .landing-page {
                        position: relative;
                        min-height: 100vh;
                    }
                    .container {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 24px;
                    }
                "#}
            </style>
        </div>
    }
}
