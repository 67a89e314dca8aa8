use yew::prelude::*;

use crate::model::ImageRef;

#[derive(Properties, PartialEq, Clone)]
pub struct PhotoCollageProps {
    pub photos: Vec<ImageRef>,
    pub on_open: Callback<ImageRef>,
}

#[function_component(PhotoCollage)]
pub fn photo_collage(props: &PhotoCollageProps) -> Html {
    if props.photos.is_empty() {
        return html! {};
    }
    html! {
        <section class="photo-collage">
            { for props.photos.iter().map(|photo| {
                let open_cb = {
                    let cb = props.on_open.clone();
                    let photo = photo.clone();
                    Callback::from(move |_| cb.emit(photo.clone()))
                };
                html! {
                    <img src={photo.src.clone()} alt={photo.alt.clone()} loading="lazy"
                        style="cursor:zoom-in;" onclick={open_cb} />
                }
            }) }
        </section>
    }
}
