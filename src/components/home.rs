use crate::components::imports::*;
use crate::components::Layout;
use crate::content::resume;

#[styled_component]
pub fn Home() -> Html {
    let theme = use_theme();
    let resume = match resume() {
        Ok(resume) => resume,
        Err(e) => {
            log::error!("{}", e);
            return internal_problems();
        }
    };

    let contact = &resume.contact;
    let title_color = &theme.theme.title_color;
    let title_shadow = &theme.theme.title_shadow;
    let highlight_color = &theme.theme.highlight_color;

    let section_style = css!(
        "
            flex: 1;
            display: flex;
            flex-direction: column;
            justify-content: center;
            text-align: center;

            a {
                color: ${highlight_color};
            }
        ",
        highlight_color = highlight_color,
    );

    let name_style = sheet(&format!(
        "
            margin: 0;
            color: {title_color};
            text-shadow: {title_shadow};
            {size}
        ",
        size = TextSize::X5l.css(),
    ));

    let footer_style = css!(
        "
            display: flex;
            flex-direction: column;
            align-items: center;
            padding: var(--spacing-huge);

            p {
                margin: 0.25em 0;
            }
        "
    );

    let position = match resume.current_employer() {
        Some(current) => html! {
            <p class={ sheet(&TextSize::Xl.css()) }>
                { &current.position }{ " @ " }
                <a href={ current.url.clone() } aria-label={ format!("{}'s website", current.company) } target="_blank" rel="noopener noreferrer">
                    { &current.company }
                </a>
            </p>
        },
        None => html! {},
    };

    html! {
        <Layout>
            <section class={ section_style }>
                <h1 class={ name_style }>{ &contact.name }</h1>
                { position }
                <p class={ sheet(&TextSize::M.css()) }>{ &contact.location }</p>
            </section>

            <footer class={ footer_style }>
                <p class={ sheet(&TextSize::Xs.css()) }>{ "\u{a9} " }{ current_year() }</p>
            </footer>
        </Layout>
    }
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
