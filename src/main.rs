#[macro_use]
extern crate rocket;

use std::sync::Arc;

use rocket::fs::FileServer;
use rocket::response::content::RawHtml;

mod boot;
mod config;
mod gallery;
mod render;
mod routes;


use gallery::source::GallerySource;

/// Gallery source chosen at startup from the site config.
/// Shared via Rocket managed state so route handlers can reach it.
pub struct SharedSource(pub Arc<dyn GallerySource>);

#[catch(404)]
fn not_found() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>404</h1><p>Không tìm thấy trang.</p><a href='/'>← Trang chủ</a></body></html>".to_string())
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>500</h1><p>Lỗi máy chủ.</p><a href='/'>← Trang chủ</a></body></html>".to_string())
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let config = config::load(config::CONFIG_PATH);

    // Boot check — verify/create directories, validate critical files
    boot::run(&config);

    let source = gallery::source::from_config(&config);

    log::info!("🍊 {} 🍊", config.site.name);
    log::info!("{}", config.site.tagline);
    log::info!("Gallery source: {}", source.describe());

    rocket::build()
        .manage(config)
        .manage(SharedSource(source))
        .mount("/static", FileServer::from("website/static"))
        .mount("/", routes::public::routes())
        .register("/", catchers![not_found, server_error])
}
