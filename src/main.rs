use portfolio::app::App;

fn main() {
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        gloo_console::error!(format!("failed to set up logging: {}", e));
    }

    yew::Renderer::<App>::new().render();
}
