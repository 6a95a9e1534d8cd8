use crate::components::imports::*;

pub struct Error {
    theme_ctx: ThemeCtxSub,
}

pub enum ErrorMsg {
    ThemeContextUpdate(ThemeCtx),
}

#[derive(Properties, PartialEq)]
pub struct ErrorProps {
    pub msg: AttrValue,
    pub code: u32,
}

impl Component for Error {
    type Message = ErrorMsg;
    type Properties = ErrorProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            theme_ctx: ThemeCtxSub::subscribe(ctx, Self::Message::ThemeContextUpdate),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let theme = self.theme_ctx.as_ref();
        let title_color = &theme.title_color;

        let ErrorProps { msg, code } = ctx.props();
        html! {
            <section class={css!{"font-size: 40px; padding: 40px; text-align: center;"}}>
                <div class={css!{"color: ${title_color};", title_color = title_color}}>{ code }</div>
                { msg }
            </section>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ThemeContextUpdate(theme_ctx) => {
                self.theme_ctx.set(theme_ctx);
                true
            }
        }
    }
}
