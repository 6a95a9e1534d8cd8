use crate::components::imports::*;
use crate::components::Layout;
use crate::content::{posts, Post};
use crate::styles::Media;

#[styled_component]
pub fn BlogIndex() -> Html {
    let theme = use_theme();
    let card_header_color = &theme.theme.card_header_color;
    let card_info_color = &theme.theme.card_info_color;
    let auxiliary_color = &theme.theme.auxiliary_color;
    let border_color = &theme.theme.border_color;

    let section_style = css!(
        "
            flex: 1;
            display: flex;
            flex-direction: column;
            align-items: center;
            padding: 0 var(--spacing-huge);
        "
    );

    let list_style = sheet(&format!(
        "
            max-width: {max_width}px;
            width: 100%;
            margin: 0 auto;
            padding: 0;
            list-style: none;

            li + li {{
                position: relative;
                margin-top: 2em;
                padding-top: 2em;
                border-top: 1px solid {border_color};
            }}

            a {{ text-decoration: none; }}
            h2 {{ margin: 0; color: {card_header_color}; }}
            time {{ color: {auxiliary_color}; }}
            p {{ color: {card_info_color}; }}
        ",
        max_width = Media::Tablet.breakpoint().unwrap_or_default(),
    ));

    let items = posts()
        .into_iter()
        .map(|post| html! { <li key={ post.path }>{ post_link(post) }</li> })
        .collect::<Html>();

    html! {
        <Layout title={ AttrValue::Static("Blog") }>
            <section class={ section_style }>
                <ul class={ list_style }>{ items }</ul>
            </section>
        </Layout>
    }
}

fn post_link(post: &'static Post) -> Html {
    let date = match post.formatted_date() {
        Ok(Some(date)) => html! { <time>{ date }</time> },
        Ok(None) => html! {},
        Err(e) => {
            log::warn!("{}", e);
            html! {}
        }
    };

    html! {
        <article>
            <Link<Route> to={ Route::Post { path: post.path.to_owned() } }>
                <h2>{ post.title }</h2>
            </Link<Route>>
            { date }
            <p>{ post.excerpt() }</p>
        </article>
    }
}
