// Checked means light. The bulb is lit while the page is dark.
pub struct ThemeToggle {
    theme_ctx: ThemeCtxSub,
}

pub enum ThemeToggleMsg {
    ThemeContextUpdate(ThemeCtx),
    Toggled(bool),
}

impl Component for ThemeToggle {
    type Message = ThemeToggleMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            theme_ctx: ThemeCtxSub::subscribe(ctx, Self::Message::ThemeContextUpdate),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let checked = self.theme_ctx.as_ref().id.is_light();
        let onchange = ctx.link().callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Self::Message::Toggled(input.checked())
        });

        let container_style = css!(
            "
                position: relative;
                margin: 0;
                width: 44px;
                height: 44px;

                :focus-within {
                    outline: 2px solid var(--color-blue-700);
                    outline-offset: 4px;
                }

                :active {
                    opacity: 0.8;
                    transform: scale(0.9);
                    transition: transform 0.2s, opacity 0.2s;
                }

                label {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 100%;
                    height: 100%;
                }

                input {
                    position: absolute;
                    inset: 0;
                    margin: 0;
                    opacity: 0;
                    cursor: pointer;
                }
            "
        );

        html! {
            <div class={ container_style }>
                <label for="toggle">
                    <LightIcon on={ !checked } width="2rem" height="2rem"/>
                    <input id="toggle" type="checkbox" aria-label="Theme toggle" {checked} {onchange}/>
                </label>
            </div>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ThemeContextUpdate(theme_ctx) => {
                self.theme_ctx.set(theme_ctx);
                true
            }
            Self::Message::Toggled(checked) => {
                self.theme_ctx.set_theme::<Self>(toggled(checked));
                false
            }
        }
    }
}

fn toggled(checked: bool) -> ThemeName {
    if checked {
        ThemeName::Light
    } else {
        ThemeName::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkbox_state_maps_to_theme() {
        assert_eq!(toggled(true), ThemeName::Light);
        assert_eq!(toggled(false), ThemeName::Dark);
        assert!(toggled(true).is_light());
    }
}

use super::theme_ctx::{ThemeCtx, ThemeCtxSub};
use crate::components::icons::LightIcon;
use crate::components::imports::*;
