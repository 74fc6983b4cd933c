use prediction_page::components::App;

fn main() {
    prediction_page::page::log_banner();
    yew::Renderer::<App>::new().render();
}
