use crate::components::imports::*;

pub struct Markdown {
    theme_ctx: ThemeCtxSub,
}

pub enum Msg {
    ThemeContextUpdate(ThemeCtx),
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub file: AttrValue,
}

impl Component for Markdown {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            theme_ctx: ThemeCtxSub::subscribe(ctx, Self::Message::ThemeContextUpdate),
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

    fn view(&self, ctx: &Context<Self>) -> Html {
        let md_body = parse_md(&ctx.props().file);

        let theme = self.theme_ctx.as_ref();
        let blog_syntax_color = &theme.blog_syntax_color;
        let overlay5 = &theme.overlay5;

        let style = css!(
            "
                pre, code {
                    color: ${blog_syntax_color};
                    background-color: ${overlay5};
                    border-radius: 4px;
                }

                pre {
                    padding: var(--spacing-medium);
                    overflow-x: auto;
                }

                ul {
                    padding-left: var(--spacing-huge);
                    list-style-type: circle;
                }
            ",
            blog_syntax_color = blog_syntax_color,
            overlay5 = overlay5,
        );

        html! {
            <div class={ classes!("markdown-body", style) }>
                { md_body }
            </div>
        }
    }
}

pub fn render_md(markdown_input: &str) -> String {
    use pulldown_cmark::{html, Options, Parser};

    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(markdown_input, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

pub fn parse_md(markdown_input: &str) -> yew::virtual_dom::VNode {
    yew::virtual_dom::VNode::from_html_unchecked(render_md(markdown_input).into())
}

#[cfg(test)]
mod tests {
    use super::render_md;

    #[test]
    fn renders_lists_and_strikethrough() {
        let html = render_md("- one\n- ~~two~~\n");

        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>one</li>"));
        assert!(html.contains("<del>two</del>"));
    }
}
