mod app;
mod components;
mod pages;
mod session;
mod soil;
mod storage;
mod theme;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
