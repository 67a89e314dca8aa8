use yew::prelude::*;

use crate::config::NavLink;

#[derive(Properties, PartialEq, Clone)]
pub struct SidebarProps {
    pub open: bool,
    pub links: Vec<NavLink>,
    pub on_close: Callback<()>,
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <nav class={classes!("sidebar", props.open.then_some("open"))}>
            <button id="close-menu" class="close-menu" onclick={close_cb.clone()}>{"×"}</button>
            <ul>
                { for props.links.iter().map(|link| html! {
                    // Following a link also collapses the menu on small screens
                    <li><a href={link.href.clone()} onclick={close_cb.clone()}>{ link.label.clone() }</a></li>
                }) }
            </ul>
        </nav>
    }
}
