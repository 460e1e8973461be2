use yew::prelude::*;

use crate::config::{BLOCK_REVEAL_SECS, REVEAL_OFFSET_PX};
use crate::hooks::use_reveal;
use crate::state::reveal::RevealTransition;

pub const BLOCK_TRANSITION: RevealTransition = RevealTransition {
    duration_secs: BLOCK_REVEAL_SECS,
    offset_px: REVEAL_OFFSET_PX,
};

#[derive(Properties, PartialEq)]
pub struct RevealBlockProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Wraps its children in a block that fades and slides in the first time
/// it enters the viewport.
#[function_component(RevealBlock)]
pub fn reveal_block(props: &RevealBlockProps) -> Html {
    let node = use_node_ref();
    let reveal = use_reveal(node.clone());

    html! {
        <div ref={node} class={classes!(props.class.clone(), reveal.is_revealed().then(|| "revealed"))}>
            <div style={BLOCK_TRANSITION.style(reveal)}>
                { for props.children.iter() }
            </div>
        </div>
    }
}
