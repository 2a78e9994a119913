#[cfg(feature = "csr")]
fn main() {
    use divine_yoga::app::App;
    use divine_yoga::config::{AppConfig, BACKEND_URL_ENV};
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);

    let config = AppConfig::from_build_env();
    if config.is_same_origin() {
        log::info!("{BACKEND_URL_ENV} not set at build time; using same-origin /api");
    } else {
        log::info!("backend: {}", config.backend_url);
    }

    leptos::mount::mount_to_body(move || view! { <App config=config.clone()/> });
}

#[cfg(not(feature = "csr"))]
fn main() {
    eprintln!("divine-yoga runs in the browser; build it with `trunk serve --features csr`");
}
