use crate::components::imports::*;
use crate::components::{parse_md, Layout};
use crate::content::resume::{Education, Experience, Expertise, Resume};
use crate::content::resume;

#[styled_component]
pub fn Cv() -> Html {
    let theme = use_theme();
    let resume = match resume() {
        Ok(resume) => resume,
        Err(e) => {
            log::error!("{}", e);
            return internal_problems();
        }
    };

    let Theme {
        cv_header_color,
        cv_subheader_color,
        cv_interface_color,
        cv_border_color,
        border_color,
        overlay10,
        ..
    } = &theme.theme;

    let main_style = sheet(&format!(
        "
            position: relative;
            margin: 0 auto;
            padding: 0 var(--spacing-medium);
            max-width: {max_width};
            width: 100%;
            box-sizing: border-box;

            {tablet}
            {print}
        ",
        max_width = px_to_rem(Media::DesktopWide.breakpoint().unwrap_or_default()),
        tablet = media(Media::Tablet, "padding: 0 var(--spacing-huge);"),
        print = media(Media::Print, "padding: 0; max-width: none;"),
    ));

    let container_style = sheet(&format!(
        "
            display: flex;
            flex-direction: column;
            background-color: {overlay10};
            border-radius: 4px;
            box-shadow: 0px 2px 4px rgba(0, 0, 0, 0.18);
            margin-bottom: var(--spacing-large);

            h2 {{ color: {cv_header_color}; margin-bottom: var(--spacing-large); }}
            h3 {{ color: {cv_subheader_color}; margin: 0; }}

            {tablet}
            {print}
        ",
        tablet = media(Media::Tablet, "margin-bottom: var(--spacing-massive);"),
        print = media(Media::Print, "margin-bottom: 0;"),
    ));

    let heading_style = sheet(&format!(
        "
            display: flex;
            justify-content: space-between;
            align-items: flex-end;
            padding: var(--spacing-huge) var(--spacing-medium);

            button {{
                display: none;
                min-width: 44px;
                min-height: 44px;
                background: none;
                border: none;
                color: inherit;
                cursor: pointer;
            }}

            {tablet}
            {print}
        ",
        tablet = media(
            Media::Tablet,
            "padding: var(--spacing-huge); button { display: inline-flex; align-items: center; justify-content: center; }"
        ),
        print = media(Media::Print, "button { display: none; }"),
    ));

    let wrapper_style = sheet(&format!(
        "
            display: flex;
            flex-direction: column-reverse;
            padding: 0 var(--spacing-medium);

            {tablet}
            {desktop}
            {print}
        ",
        tablet = media(
            Media::Tablet,
            &format!(
                "border-top: 5px solid {border_color}; border-bottom: 5px solid {border_color}; padding: var(--spacing-huge);"
            )
        ),
        desktop = media(Media::Desktop, "display: inline-flex; flex-direction: row;"),
        print = media(
            Media::Print,
            "display: inline-flex; flex-direction: row; border-top: 5px solid var(--color-black);"
        ),
    ));

    let sidebar_style = sheet(&format!(
        "{desktop}",
        desktop = media(
            Media::Desktop,
            &format!(
                "flex: 0 1 33%; border-right: 2px solid {cv_border_color}; padding: 0 var(--spacing-huge) 0 0;"
            )
        ),
    ));

    let experience_style = sheet(&format!(
        "padding: 0; {desktop}",
        desktop = media(Media::Desktop, "flex: 1; padding-left: var(--spacing-huge);"),
    ));

    let tag_style = sheet(&format!(
        "
            display: inline-block;
            margin: 0 var(--spacing-small) var(--spacing-small) 0;
            padding: 0.25em 0.5em;
            border: 1px solid {cv_interface_color};
            border-radius: 4px;
            {size}
        ",
        size = TextSize::Xs.css(),
    ));

    let onprint = Callback::from(|_| {
        if let Err(e) = gloo_utils::window().print() {
            log::warn!("print dialog failed: {:?}", e);
        }
    });

    let contact = &resume.contact;

    html! {
        <Layout title={ AttrValue::Static("Résumé") }>
            <main class={ main_style }>
                <div class={ container_style }>
                    <div class={ heading_style }>
                        <div>
                            <h1 class={ sheet(&TextSize::X4l.css()) }>{ &contact.name }</h1>
                            if let Some(current) = resume.current_employer() {
                                <p class={ sheet(&TextSize::M.css()) }>{ &current.position }</p>
                            }
                        </div>
                        <button aria-label="Print CV" onclick={ onprint }>{ "Print" }</button>
                    </div>

                    <div class={ wrapper_style }>
                        <aside class={ sidebar_style }>
                            { block("Contact", contact_list(&resume)) }
                            { block("Education", resume.education.iter().map(education).collect::<Html>()) }
                            { block("Expertise", expertise_tags(&resume.expertise, &tag_style)) }
                            { block("Interests", tags(&resume.interests, &tag_style)) }
                            { block("Hobbies", tags(&resume.hobbies, &tag_style)) }
                            { block("References", html! { <p>{ "Written references available on request." }</p> }) }
                        </aside>

                        <div class={ experience_style }>
                            { block("Experience", resume.experience.iter().map(experience).collect::<Html>()) }
                        </div>
                    </div>
                </div>
            </main>
        </Layout>
    }
}

/// Anchor id for a block heading, `cv-` prefixed.
pub fn format_id(heading: &str) -> String {
    let slug = heading
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");

    format!("cv-{}", slug)
}

fn block(heading: &'static str, content: Html) -> Html {
    let id = format_id(heading);

    html! {
        <section aria-labelledby={ id.clone() }>
            <h2 {id} class={ sheet(&TextSize::L.css()) }>{ heading }</h2>
            { content }
        </section>
    }
}

fn contact_list(resume: &Resume) -> Html {
    let contact = &resume.contact;
    let list_style = css!("list-style: none; padding: 0; li { margin-bottom: var(--spacing-medium); }");

    html! {
        <nav aria-label="Contact">
            <ul class={ list_style }>
                <li><a href={ format!("mailto:{}", contact.email) }>{ &contact.email }</a></li>
                <li><a href={ contact.github.clone() }>{ display_url(&contact.github) }</a></li>
                <li><a href={ contact.linkedin.clone() }>{ display_url(&contact.linkedin) }</a></li>
            </ul>
        </nav>
    }
}

fn display_url(url: &str) -> &str {
    let url = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let url = url.strip_prefix("www.").unwrap_or(url);
    url.trim_end_matches('/')
}

fn education(education: &Education) -> Html {
    html! {
        <div class={ css!("margin-bottom: var(--spacing-large);") }>
            <h3>{ &education.qualification }</h3>
            <p>{ &education.course }</p>
            <p>{ &education.institute }</p>
            <p><small>{ &education.dates }</small></p>
        </div>
    }
}

fn experience(experience: &Experience) -> Html {
    let description = experience
        .description
        .as_deref()
        .map(parse_md)
        .unwrap_or_default();

    html! {
        <div class={ css!("margin-bottom: var(--spacing-huge); ul { padding: 0 0 1em 2em; list-style-type: circle; }") }>
            <h3>{ &experience.position }</h3>
            <p>
                <a href={ experience.url.clone() } target="_blank" rel="noopener noreferrer">{ &experience.company }</a>
                { " \u{b7} " }
                <small>{ &experience.dates }</small>
            </p>
            { description }
        </div>
    }
}

fn tags(items: &[String], tag_style: &StyleSource) -> Html {
    items
        .iter()
        .map(|item| html! { <span key={ item.clone() } class={ tag_style.clone() }>{ item }</span> })
        .collect()
}

fn expertise_tags(expertise: &[Expertise], tag_style: &StyleSource) -> Html {
    expertise
        .iter()
        .map(|skill| {
            let filled = usize::from(skill.rating());
            let empty = usize::from(Expertise::MAX_RATING) - filled;
            let rating = format!("{}{}", "\u{25cf}".repeat(filled), "\u{25cb}".repeat(empty));

            html! {
                <span key={ skill.id.clone() } class={ tag_style.clone() } title={ format!("{} / {}", filled, Expertise::MAX_RATING) }>
                    { &skill.id }{ " " }{ rating }
                </span>
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_slugs() {
        assert_eq!(format_id("Education"), "cv-education");
        assert_eq!(format_id("Audio Technology & Multimedia"), "cv-audio-technology-multimedia");
    }

    #[test]
    fn urls_are_shortened_for_display() {
        assert_eq!(
            display_url("https://www.linkedin.com/in/someone/"),
            "linkedin.com/in/someone"
        );
        assert_eq!(display_url("github.com/someone"), "github.com/someone");
    }
}

use stylist::StyleSource;
