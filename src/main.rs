mod components;
mod util;

use components::app::App;

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    }
    yew::Renderer::<App>::new().render();
}
