use crate::components::imports::*;
use crate::components::{Error, Layout, Markdown};
use crate::content::post as find_post;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub path: AttrValue,
}

#[styled_component]
pub fn PostViewer(props: &Props) -> Html {
    let theme = use_theme();

    let Some(post) = find_post(&props.path) else {
        return html! {
            <Layout title={ AttrValue::Static("Not found") }>
                <Error code={ 404 } msg="No such post"/>
            </Layout>
        };
    };

    let header_color = &theme.theme.header_color;
    let auxiliary_color = &theme.theme.auxiliary_color;

    let article_style = sheet(&format!(
        "
            width: 100%;
            max-width: {max_width};
            margin: 0 auto;
            padding: 0 var(--spacing-medium) var(--spacing-giant);
            box-sizing: border-box;

            h1 {{ color: {header_color}; margin-bottom: 0.25em; }}
            time {{ color: {auxiliary_color}; }}
        ",
        max_width = px_to_rem(Media::Tablet.breakpoint().unwrap_or_default()),
    ));

    let date = post
        .formatted_date()
        .ok()
        .flatten()
        .map(|date| html! { <time>{ date }</time> });

    html! {
        <Layout title={ AttrValue::Static(post.title) }>
            <article class={ article_style }>
                <h1 class={ sheet(&TextSize::Xxxl.css()) }>{ post.title }</h1>
                { date }
                <Markdown file={ AttrValue::Static(post.body) }/>
            </article>
        </Layout>
    }
}
