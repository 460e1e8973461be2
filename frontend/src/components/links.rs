use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct DemoLinkProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
}

/// "Schedule a Demo" link to the external booking page, opened in a new tab.
#[function_component(DemoLink)]
pub fn demo_link(props: &DemoLinkProps) -> Html {
    html! {
        <a
            href={config::DEMO_URL}
            target="_blank"
            rel="noopener noreferrer"
            class={props.class.clone()}
            style={props.style.clone()}
            onclick={props.onclick.clone()}
        >
            {"Schedule a Demo"}
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExternalLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    pub children: Children,
}

#[function_component(ExternalLink)]
pub fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            class={props.class.clone()}
            aria-label={props.aria_label.clone()}
        >
            { for props.children.iter() }
        </a>
    }
}
