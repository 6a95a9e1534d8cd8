use crate::router::Route;

use yew::prelude::*;

pub fn switch(routes: Route) -> Html {
    use crate::components::*;

    match routes {
        Route::Home => html! { <Home/> },
        Route::Blog => html! { <BlogIndex/> },
        Route::Post { path } => html! { <PostViewer {path}/> },
        Route::Cv => html! { <Cv/> },
        Route::NotFound => html! {
            <Layout title={ AttrValue::Static("Not found") }>
                <Error code={ 404 } msg="not found"/>
            </Layout>
        },
    }
}
