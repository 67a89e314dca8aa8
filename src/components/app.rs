use super::{
    image_modal::ImageModal, photo_collage::PhotoCollage, sidebar::Sidebar, slideshow::Slideshow,
    theme_toggle::ThemeToggle,
};
use crate::config::SiteConfig;
use crate::model::{ImageRef, ModalAction, ModalState};
use crate::state::{SidebarAction, SidebarState, Theme, theme};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| SiteConfig::load());
    let theme_state = use_state(theme::load);
    let sidebar = use_reducer(SidebarState::default);
    let modal = {
        let limits = config.zoom;
        use_reducer(move || ModalState::new(limits))
    };

    // Reflect the theme on <body>
    {
        let current: Theme = *theme_state;
        use_effect_with(current, move |t| {
            theme::apply(*t);
            || ()
        });
    }

    let toggle_theme = {
        let theme_state = theme_state.clone();
        Callback::from(move |_| {
            let next = theme_state.toggled();
            theme::persist(next);
            theme_state.set(next);
        })
    };
    let toggle_menu = {
        let sidebar = sidebar.clone();
        Callback::from(move |_| sidebar.dispatch(SidebarAction::Toggle))
    };
    let close_menu = {
        let sidebar = sidebar.clone();
        Callback::from(move |_| sidebar.dispatch(SidebarAction::Close))
    };
    let open_image = {
        let modal = modal.clone();
        Callback::from(move |image: ImageRef| {
            log::debug!("opening {}", image.src);
            modal.dispatch(ModalAction::Open(image));
        })
    };

    html! {
        <>
            <header id="top-bar" class="top-bar">
                <button id="menu-toggle" class="menu-toggle" onclick={toggle_menu}>{"☰"}</button>
                <h1>{ config.title.clone() }</h1>
                <ThemeToggle theme={*theme_state} on_toggle={toggle_theme} />
            </header>
            <Sidebar open={sidebar.open} links={config.nav.clone()} on_close={close_menu} />
            <main class="content">
                <Slideshow slides={config.slides.clone()} interval_ms={config.slide_interval_ms} />
                <PhotoCollage photos={config.photos.clone()} on_open={open_image} />
            </main>
            <ImageModal modal={modal} />
        </>
    }
}
