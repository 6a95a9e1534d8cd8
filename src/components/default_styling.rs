use crate::components::imports::*;
use crate::styles::sheet;
use crate::styles::variables::root_variables;

pub struct DefaultStyling {
    theme_ctx: ThemeCtxSub,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

pub enum Msg {
    ThemeContextUpdate(ThemeCtx),
}

impl Component for DefaultStyling {
    type Message = Msg;
    type Properties = Props;

    #[allow(unused_variables)]
    fn create(ctx: &Context<Self>) -> Self {
        Self {
            theme_ctx: ThemeCtxSub::subscribe(ctx, Self::Message::ThemeContextUpdate),
        }
    }

    #[allow(unused_variables)]
    fn view(&self, ctx: &Context<Self>) -> Html {
        let theme = self.theme_ctx.as_ref();

        let background = &theme.background;
        let copy_color = &theme.copy_color;
        let link_color = &theme.link_color;
        let hover_color = &theme.hover_color;
        let active_color = &theme.active_color;

        let global_style = sheet(&format!(
            "
                :root {{ {root_variables} }}

                body {{
                    margin: 0;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    background-color: {background};
                    color: {copy_color};
                    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                    transition: background-color .2s ease-in, color .2s ease-in;
                }}

                a {{ color: {link_color}; }}
                a:hover {{ color: {hover_color}; }}
                a:active {{ color: {active_color}; }}
            ",
            root_variables = root_variables(),
        ));

        html! {
            <>
                <Global css={global_style}/>
                { for ctx.props().children.iter() }
            </>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ThemeContextUpdate(theme_ctx) => {
                console::log!("WithTheme context updated from DefaultStyling");
                self.theme_ctx.set(theme_ctx);
                true
            }
        }
    }
}
