use rocket::response::content::RawHtml;
use rocket::State;

use crate::config::SiteConfig;
use crate::gallery;
use crate::render;
use crate::SharedSource;

// ── Brochure page ──────────────────────────────────────

#[get("/?<zoom>")]
pub fn homepage(
    config: &State<SiteConfig>,
    source: &State<SharedSource>,
    zoom: Option<usize>,
) -> RawHtml<String> {
    // The collection is fetched per invocation and discarded after
    // render; nothing is cached between loads.
    let grid = gallery::load(source.0.as_ref());
    RawHtml(render::render_page(config, &grid, zoom))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![homepage]
}
