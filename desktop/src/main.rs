use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(ui::compat::log_level()).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
