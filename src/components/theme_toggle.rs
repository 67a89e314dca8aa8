use yew::prelude::*;

use crate::state::Theme;

#[derive(Properties, PartialEq, Clone)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let toggle_cb = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let title = if props.theme.is_dark() {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    };
    html! {
        <button id="dark-mode-toggle" class="theme-toggle" {title} onclick={toggle_cb}>
            { props.theme.toggle_icon() }
        </button>
    }
}
