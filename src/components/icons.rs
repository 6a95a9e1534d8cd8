#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or(AttrValue::Static("1.5rem"))]
    pub width: AttrValue,
    #[prop_or(AttrValue::Static("1.5rem"))]
    pub height: AttrValue,
}

#[derive(Properties, PartialEq)]
pub struct LightIconProps {
    pub on: bool,
    #[prop_or(AttrValue::Static("2rem"))]
    pub width: AttrValue,
    #[prop_or(AttrValue::Static("2rem"))]
    pub height: AttrValue,
}

#[function_component]
pub fn LightIcon(props: &LightIconProps) -> Html {
    let LightIconProps { on, width, height } = props;
    let bulb = "M137.7,13.7C67.2,13.7,10,70.9,10,141.4c0,58.3,72.8,118.2,79.9,162.3h47.8h47.8\
                c7.1-44,79.9-103.9,79.9-162.3C265.3,70.9,208.2,13.7,137.7,13.7z";

    html! {
        <svg role="img" aria-labelledby="icon-bulb" viewBox="0 0 275.3 413.3" width={ width.clone() } height={ height.clone() }>
            <title id="icon-bulb">{ "Bulb" }</title>
            <g id="bulb--off">
                <path fill="#E2ECF1" d={ bulb }/>
            </g>
            if *on {
                <g id="bulb--on">
                    <path fill="#FFDB55" d={ bulb }/>
                </g>
            }
            <g id="outline" stroke="#38434A" stroke-width="19.1022" stroke-miterlimit="10">
                <path fill="#F1F2F2" d="M168.5,375.5h-61.7c-8.9,0-16-7.2-16-16v-55.8h93.8v55.8C184.6,368.3,177.4,375.5,168.5,375.5z"/>
                <path fill="#F1F2F2" d="M151.2,401.5h-27.1c-3.9,0-7-3.2-7-7v-19h41.1v19C158.2,398.4,155.1,401.5,151.2,401.5z"/>
                <line fill="none" x1="184.6" y1="339.6" x2="90.8" y2="339.6"/>
                <path fill="none" d={ bulb }/>
            </g>
            <g id="highlight" fill="#FFDB55" stroke="#FFFFFF" stroke-width="21.0124" stroke-linecap="round" stroke-miterlimit="10">
                <path d="M207.1,89.5c-12.3-16.1-28.4-29.1-46.9-37.8"/>
                <path d="M225,121.4c-0.8-2.2-1.8-4.4-2.7-6.5"/>
            </g>
        </svg>
    }
}

fn stroked(props: &IconProps, children: Html) -> Html {
    html! {
        <svg
            viewBox="0 0 24 24"
            width={ props.width.clone() }
            height={ props.height.clone() }
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            { children }
        </svg>
    }
}

#[function_component]
pub fn CrossIcon(props: &IconProps) -> Html {
    stroked(
        props,
        html! {
            <>
                <line x1="18" y1="6" x2="6" y2="18"/>
                <line x1="6" y1="6" x2="18" y2="18"/>
            </>
        },
    )
}

#[function_component]
pub fn MenuIcon(props: &IconProps) -> Html {
    stroked(
        props,
        html! {
            <>
                <line x1="3" y1="6" x2="21" y2="6"/>
                <line x1="3" y1="12" x2="21" y2="12"/>
                <line x1="3" y1="18" x2="21" y2="18"/>
            </>
        },
    )
}

#[function_component]
pub fn GitHubIcon(props: &IconProps) -> Html {
    stroked(
        props,
        html! {
            <path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"/>
        },
    )
}

#[function_component]
pub fn LinkedInIcon(props: &IconProps) -> Html {
    stroked(
        props,
        html! {
            <>
                <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/>
                <rect x="2" y="9" width="4" height="12"/>
                <circle cx="4" cy="4" r="2"/>
            </>
        },
    )
}

#[function_component]
pub fn EnvelopeIcon(props: &IconProps) -> Html {
    stroked(
        props,
        html! {
            <>
                <path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"/>
                <polyline points="22,6 12,13 2,6"/>
            </>
        },
    )
}

use crate::components::imports::*;
