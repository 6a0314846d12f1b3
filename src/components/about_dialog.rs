//! About Dialog Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::models::AppInfo;

#[component]
pub fn AboutDialog() -> impl IntoView {
    let ctx = use_app_context();
    let info = RwSignal::new(None::<AppInfo>);

    Effect::new(move |_| {
        if !ctx.about_open.get() || info.with_untracked(Option::is_some) {
            return;
        }
        spawn_local(async move {
            match commands::app_info().await {
                Ok(loaded) => info.set(Some(loaded)),
                Err(e) => ctx.toast(format!("Could not read app info: {}", e)),
            }
        });
    });

    let open_website = move |_| {
        spawn_local(async move {
            if let Err(e) = commands::open_website().await {
                ctx.toast(format!("Could not open website: {}", e));
            }
        });
    };

    view! {
        <Show when=move || ctx.about_open.get()>
            <div class="dialog-backdrop" on:click=move |_| ctx.about_open.set(false)>
                <div class="dialog about-dialog" on:click=|ev| ev.stop_propagation()>
                    <img src="public/icon.png" class="about-icon" alt="" />
                    {move || {
                        info.get()
                            .map(|info| {
                                view! {
                                    <h2>{info.name}</h2>
                                    <p class="dim">{format!("Version {}", info.version)}</p>
                                    <p>{info.description}</p>
                                    <p class="dim">{format!("License: {}", info.license)}</p>
                                }
                            })
                    }}
                    <div class="dialog-actions">
                        <button class="pill-btn" on:click=open_website>"Website"</button>
                        <button class="suggested-btn" on:click=move |_| ctx.about_open.set(false)>
                            "Close"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
