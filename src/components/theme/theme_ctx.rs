// The provider owns the store; everything below reads the palette from the
// context and sends requested theme names back up through the callback.

#[derive(derivative::Derivative)]
#[derivative(Debug, PartialEq)]
pub struct ThemeState {
    pub theme: Theme,

    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    upstream_cb: Callback<String>,
}

impl ThemeState {
    /// Unknown names are ignored by the store.
    pub fn request(&self, requested: impl Into<String>) {
        self.upstream_cb.emit(requested.into());
    }
}

pub type ThemeCtx = Rc<ThemeState>;

pub struct WithTheme {
    store: ThemePreferenceStore<LocalPreferences>,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

pub enum Msg {
    Requested(String),
}

impl Component for WithTheme {
    type Message = Msg;
    type Properties = Props;

    #[allow(unused_variables)]
    fn create(ctx: &Context<Self>) -> Self {
        let store = ThemePreferenceStore::initialized(LocalPreferences::probe());
        console::log!(format!("starting with {} theme", store.current()));

        Self { store }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = Rc::new(ThemeState {
            theme: Theme::from(self.store.current()),
            upstream_cb: ctx.link().callback(Msg::Requested),
        });

        html! {
            <ContextProvider<ThemeCtx> context={state}>
                { ctx.props().children.clone() }
            </ContextProvider<ThemeCtx>>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::Requested(requested) => {
                let before = self.store.current();
                self.store.update(&requested);
                before != self.store.current()
            }
        }
    }
}

pub struct ThemeCtxSub {
    ctx: ThemeCtx,
    // keep handle for component rerender after the theme changes
    _ctx_handle: ContextHandle<ThemeCtx>,
}

impl AsRef<Theme> for ThemeCtxSub {
    fn as_ref(&self) -> &Theme {
        &self.ctx.theme
    }
}

impl ThemeCtxSub {
    pub fn subscribe<COMP, F, M>(ctx: &Context<COMP>, f: F) -> Self
    where
        COMP: Component,
        M: Into<COMP::Message>,
        F: Fn(ThemeCtx) -> M + 'static,
    {
        let (ctx, _ctx_handle) = ctx
            .link()
            .context(ctx.link().callback(f))
            .expect("Theme context does not exist");

        Self { ctx, _ctx_handle }
    }

    pub fn set(&mut self, ctx: ThemeCtx) {
        self.ctx = ctx;
    }

    pub fn set_theme<COMP: Component>(&self, theme: ThemeName) {
        console::log!(format!(
            "{} requested {} theme",
            std::any::type_name::<COMP>(),
            theme
        ));
        self.ctx.request(theme.as_str());
    }
}

#[hook]
pub fn use_theme() -> ThemeCtx {
    use_context::<ThemeCtx>().expect("Theme context does not exist")
}

use crate::components::imports::*;
use crate::theme::prelude::{LocalPreferences, ThemePreferenceStore};
use std::rc::Rc;
