//! Recipe Image Component
//!
//! Remote thumbnails load directly; local pictures go through the
//! backend's `recipe-image` protocol.

use leptos::prelude::*;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::models::RecipeImage;

const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}');

/// Custom protocols are served from `http://<scheme>.localhost` on Windows
fn is_windows() -> bool {
    web_sys::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .map(|ua| ua.contains("Windows"))
        .unwrap_or(false)
}

/// URL for a local file under the image protocol
pub fn local_image_url(path: &str, windows: bool) -> String {
    let normalized = path.replace('\\', "/");
    let encoded = utf8_percent_encode(normalized.trim_start_matches('/'), PATH_ENCODE_SET);
    if windows {
        format!("http://recipe-image.localhost/{}", encoded)
    } else {
        format!("recipe-image://localhost/{}", encoded)
    }
}

pub fn image_src(image: &RecipeImage) -> String {
    match image {
        RecipeImage::Remote(url) => url.clone(),
        RecipeImage::Local(path) => local_image_url(path, is_windows()),
    }
}

/// Square picture, or nothing when the recipe has none
#[component]
pub fn RecipeThumb(
    image: Option<RecipeImage>,
    #[prop(into, default = "recipe-thumb".to_string())] class: String,
) -> impl IntoView {
    image.map(|image| {
        view! { <img class=class src=image_src(&image) alt="" loading="lazy" /> }
    })
}
