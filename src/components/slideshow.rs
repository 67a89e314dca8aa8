use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use crate::model::ImageRef;
use crate::state::{SlideAction, Slideshow as SlideshowState};

#[derive(Properties, PartialEq, Clone)]
pub struct SlideshowProps {
    pub slides: Vec<ImageRef>,
    pub interval_ms: u32,
}

#[function_component(Slideshow)]
pub fn slideshow(props: &SlideshowProps) -> Html {
    let len = props.slides.len();
    let show = use_reducer(|| SlideshowState::new(len));

    {
        let show = show.clone();
        use_effect_with(len, move |len| {
            show.dispatch(SlideAction::Resize(*len));
            || ()
        });
    }
    // Auto-advance
    {
        let show = show.clone();
        let interval_ms = props.interval_ms;
        use_effect_with((len, interval_ms), move |&(len, interval_ms)| {
            let window = web_sys::window();
            let tick = Closure::wrap(Box::new(move || {
                show.dispatch(SlideAction::Next);
            }) as Box<dyn FnMut()>);
            let interval_id = if len > 1 {
                window.as_ref().and_then(|w| {
                    w.set_interval_with_callback_and_timeout_and_arguments_0(
                        tick.as_ref().unchecked_ref(),
                        interval_ms.min(i32::MAX as u32) as i32,
                    )
                    .map_err(|_| log::warn!("failed to start slideshow timer"))
                    .ok()
                })
            } else {
                None
            };
            move || {
                if let (Some(w), Some(id)) = (window, interval_id) {
                    w.clear_interval_with_handle(id);
                }
                drop(tick);
            }
        });
    }

    if len == 0 {
        return html! {};
    }
    html! {
        <section class="slideshow">
            { for props.slides.iter().enumerate().map(|(i, slide)| html! {
                <div class={classes!("slide", show.is_active(i).then_some("active"))}>
                    <img src={slide.src.clone()} alt={slide.alt.clone()} />
                </div>
            }) }
        </section>
    }
}
