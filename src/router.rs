use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/blog")]
    Blog,
    #[at("/blog/:path")]
    Post { path: String },
    #[at("/cv")]
    Cv,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[cfg(test)]
mod tests {
    use yew_router::Routable;

    use super::Route;

    #[test]
    fn test_routes_map_to_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Blog.to_path(), "/blog");
        assert_eq!(Route::Cv.to_path(), "/cv");
        assert_eq!(
            Route::Post {
                path: "responsive-type-scale".into()
            }
            .to_path(),
            "/blog/responsive-type-scale"
        );
    }

    #[test]
    fn test_post_paths_are_recognized() {
        assert_eq!(
            Route::recognize("/blog/theming-with-css-variables"),
            Some(Route::Post {
                path: "theming-with-css-variables".into()
            })
        );
    }
}
