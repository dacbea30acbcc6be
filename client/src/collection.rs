use glassmap_shared::Brand;

/// Collection index produced by the site build.
pub const INDEX_PATH: &str = "/brands-index.json";

pub async fn fetch_brands() -> Result<Vec<Brand>, String> {
    let resp = gloo_net::http::Request::get(INDEX_PATH)
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.json::<Vec<Brand>>()
        .await
        .map_err(|e| format!("parse error: {e}"))
}
