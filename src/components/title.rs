use crate::components::imports::*;

pub const SITE_TITLE: &str = "Andrew James";

// set title only from page components, children render after their parents
pub struct PageTitle;

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub title: Option<AttrValue>,
}

impl Component for PageTitle {
    type Message = ();
    type Properties = Props;

    #[allow(unused_variables)]
    fn create(ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let title = document_title(ctx.props().title.as_deref());
        console::log!(format!("setting title: {:?}", &title));
        gloo_utils::document().set_title(&title);
        html! {}
    }
}

pub fn document_title(page: Option<&str>) -> String {
    match page {
        Some(page) => format!("{} | {}", page, SITE_TITLE),
        None => SITE_TITLE.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_name_goes_first() {
        assert_eq!(document_title(Some("Blog")), "Blog | Andrew James");
        assert_eq!(document_title(None), "Andrew James");
    }
}
