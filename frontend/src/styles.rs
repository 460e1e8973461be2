use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(r#"
            * {
                font-family: var(--font-satoshi), sans-serif;
                box-sizing: border-box;
            }
            body {
                margin: 0;
                background-color: #F8F9FA;
                overflow-x: hidden;
            }
            button {
                font-family: var(--font-satoshi), sans-serif;
            }
        "#)} />
    }
}
