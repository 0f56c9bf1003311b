use log::{info, Level};
use yew::prelude::*;
use yew_hooks::prelude::*;

mod config;
mod navigation;
mod api {
    pub mod emailjs;
}
mod booking {
    pub mod form;
    pub mod state;
}
mod components {
    pub mod back_button;
    pub mod talent_select;
}
mod pages {
    pub mod booking;
    pub mod home;
    pub mod stories;
}

use api::emailjs::GatewayHandle;
use navigation::{Navigator, Page, WindowViewport};
use pages::{booking::Booking, home::Home, stories::Stories};

fn switch(page: Page, go_to: &dyn Fn(Page) -> Callback<()>) -> Html {
    match page {
        Page::Home => {
            info!("Rendering Home page");
            html! {
                <Home
                    on_show_booking={go_to(Page::Booking)}
                    on_show_stories={go_to(Page::Stories)}
                />
            }
        }
        Page::Booking => {
            info!("Rendering Booking page");
            html! { <Booking on_back={go_to(Page::Home)} /> }
        }
        Page::Stories => {
            info!("Rendering Stories page");
            html! {
                <Stories
                    on_back={go_to(Page::Home)}
                    on_show_booking={go_to(Page::Booking)}
                />
            }
        }
    }
}

#[function_component]
fn App() -> Html {
    let navigator = use_mut_ref(Navigator::default);
    let update = use_update();
    let gateway = use_state(GatewayHandle::from_build_env);

    // Runs after every render; the navigator only scrolls when the page changed.
    {
        let navigator = navigator.clone();
        use_effect(move || {
            navigator.borrow_mut().sync_viewport(&WindowViewport);
            || ()
        });
    }

    let go_to = |page: Page| {
        let navigator = navigator.clone();
        let update = update.clone();
        Callback::from(move |_: ()| {
            navigator.borrow_mut().go_to(page);
            update();
        })
    };

    let current = navigator.borrow().current();

    html! {
        <ContextProvider<GatewayHandle> context={(*gateway).clone()}>
            { switch(current, &go_to) }
        </ContextProvider<GatewayHandle>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
