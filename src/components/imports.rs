pub use crate::components::theme::prelude::*;
pub use crate::router::Route;
pub use crate::styles::{media, px_to_rem, sheet, Media, TextSize};
pub use crate::theme::prelude::{Theme, ThemeName};

pub use gloo_console as console;
pub use stylist::yew::{styled_component, Global};
pub use stylist::css;
pub use web_sys::HtmlInputElement;
pub use yew::prelude::*;
pub use yew_router::prelude::*;

pub fn internal_problems() -> Html {
    html! {
        <>
            <Global css={ "display: flex; justify-content: center;" }/>

            <h1>{ "Ooops... internal problems" }</h1>
         </>
    }
}
