use crate::components::imports::*;
use crate::components::{DefaultStyling, Header, PageTitle};

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[styled_component]
pub fn Layout(props: &Props) -> Html {
    let wrapper_style = css!(
        "
            flex: 1;
            display: flex;
            flex-direction: column;
            position: relative;
            overflow: hidden;
        "
    );

    html! {
        <DefaultStyling>
            <PageTitle title={ props.title.clone() }/>
            <div class={ wrapper_style }>
                <Header/>
                { for props.children.iter() }
            </div>
        </DefaultStyling>
    }
}
