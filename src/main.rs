use dioxus::prelude::*;

mod components;
mod library;
mod player;
mod settings;
mod utils;

use components::AppShell;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Playdeck" }
        document::Meta { name: "theme-color", content: "#121212" }
        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
