use crate::components::icons::{EnvelopeIcon, GitHubIcon, LinkedInIcon};
use crate::components::imports::*;
use crate::content::resume;

#[styled_component]
pub fn Social() -> Html {
    let contact = match resume() {
        Ok(resume) => resume.contact,
        Err(e) => {
            log::error!("{}", e);
            return html! {};
        }
    };

    let links_style = sheet(&format!(
        "
            display: none;

            a {{
                display: inline-block;
                color: inherit;
            }}

            a:not(:first-child) {{ margin-left: 0.75em; }}

            a:active {{
                transform: scale(0.9);
                transition: transform 0.2s;
            }}

            {tablet}
        ",
        tablet = media(Media::Tablet, "display: inline-block;"),
    ));

    html! {
        <div aria-label="Social" class={ links_style }>
            <a href={ contact.github } aria-label="GitHub" target="_blank" rel="noopener noreferrer">
                <GitHubIcon/>
            </a>
            <a href={ contact.linkedin } aria-label="LinkedIn" target="_blank" rel="noopener noreferrer">
                <LinkedInIcon/>
            </a>
            <a href={ format!("mailto:{}", contact.email) } aria-label="Email">
                <EnvelopeIcon/>
            </a>
        </div>
    }
}
