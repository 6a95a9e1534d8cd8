#![allow(non_upper_case_globals)]

use crate::components::icons::{CrossIcon, MenuIcon};
use crate::components::imports::*;
use crate::components::social::Social;

pub struct Header {
    theme_ctx: ThemeCtxSub,
    menu_open: bool,
}

#[derive(Clone, PartialEq, Properties)]
pub struct Props {}

pub enum Msg {
    ThemeContextUpdate(ThemeCtx),
    ToggleMenu,
}

impl Component for Header {
    type Message = Msg;
    type Properties = Props;

    #[allow(unused_variables)]
    fn create(ctx: &Context<Self>) -> Self {
        Self {
            theme_ctx: ThemeCtxSub::subscribe(ctx, Self::Message::ThemeContextUpdate),
            menu_open: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ThemeContextUpdate(theme_ctx) => {
                console::log!("WithTheme context updated from Header");
                self.theme_ctx.set(theme_ctx);
                true
            }
            Self::Message::ToggleMenu => {
                self.menu_open = !self.menu_open;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let theme = self.theme_ctx.as_ref();
        let nav_link_color = &theme.nav_link_color;
        let overlay15 = &theme.overlay15;

        let wrapper_style = sheet(&format!(
            "
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: var(--spacing-huge);
                position: relative;

                {desktop_wide}
            ",
            desktop_wide = media(Media::DesktopWide, "padding: var(--spacing-medium);"),
        ));

        let nav_style = sheet(&format!(
            "
                display: none;

                ul {{
                    display: flex;
                    flex-flow: row;
                    margin: 0;
                    padding: 0;
                    list-style: none;
                }}

                li + li {{ margin-left: 2em; }}
                a {{ color: {nav_link_color}; text-decoration: none; }}

                {desktop}
            ",
            desktop = media(Media::Desktop, "display: flex;"),
        ));

        let mobile_nav_style = sheet(&format!(
            "
                position: absolute;
                top: 80px; right: 0; left: 0;
                z-index: 1;
                display: flex;
                flex-flow: column;
                padding: 2em 2em 1em;
                background-color: {overlay15};

                ul {{
                    display: flex;
                    flex-flow: column;
                    padding: 0;
                    list-style: none;
                }}

                li + li {{ margin-top: 2em; }}
                a {{ color: {nav_link_color}; text-decoration: none; }}

                {desktop}
            ",
            desktop = media(Media::Desktop, "display: none;"),
        ));

        let menu_button_style = sheet(&format!(
            "
                background: none;
                border: none;
                color: inherit;
                cursor: pointer;

                {desktop}
            ",
            desktop = media(Media::Desktop, "display: none;"),
        ));

        let onclick = ctx.link().callback(|_| Self::Message::ToggleMenu);
        let item_style = sheet(&TextSize::L.css());
        let links = html! {
            <ul>
                <li class={ item_style.clone() }><Link<Route> to={ Route::Blog }>{ "Blog" }</Link<Route>></li>
                <li class={ item_style }><Link<Route> to={ Route::Cv }>{ "Résumé" }</Link<Route>></li>
            </ul>
        };

        html! {
            <header class={ wrapper_style }>
                <Link<Route> to={ Route::Home }>
                    <span class={ sheet(&TextSize::Xs.css()) }>{ "Home" }</span>
                </Link<Route>>

                <nav aria-label="Main" class={ nav_style }>
                    { links.clone() }
                </nav>

                if self.menu_open {
                    <nav aria-label="Main" class={ mobile_nav_style }>
                        { links }
                        <Social/>
                    </nav>
                }

                <Social/>
                <ThemeToggle/>

                <button aria-label="Menu" class={ menu_button_style } {onclick}>
                    if self.menu_open {
                        <CrossIcon/>
                    } else {
                        <MenuIcon/>
                    }
                </button>
            </header>
        }
    }
}
