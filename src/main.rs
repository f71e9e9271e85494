use dioxus::prelude::*;

mod api;
mod components;
mod config;

use components::SiteRoute;

const SITE_CSS: Asset = asset!("/assets/styling/site.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = config::site_config();

    rsx! {
        document::Title { "{config.owner}" }
        document::Meta { name: "description", content: "{config.tagline}" }
        document::Meta { name: "theme-color", content: "#09090b" }

        document::Stylesheet { href: SITE_CSS }

        Router::<SiteRoute> {}
    }
}
