mod app;
mod browser;
mod commands;
mod components;
mod pages;
mod state;
mod theme;

use app::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
