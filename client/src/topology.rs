use std::sync::atomic::{AtomicBool, Ordering};

use glassmap_shared::GeoFeature;
use glassmap_shared::topology::{COUNTRIES_OBJECT, decode_features};
use leptos::prelude::*;

use crate::mount_guard::MountGuard;

pub const TOPOLOGY_PATH: &str = "/data/world-atlas-countries-110m.json";

static TOPOLOGY_WARNED: AtomicBool = AtomicBool::new(false);

fn warn_topology_once(message: &str) {
    if TOPOLOGY_WARNED
        .compare_exchange(false, true, Ordering::Relaxed, Ordering::Relaxed)
        .is_ok()
    {
        web_sys::console::warn_1(&message.into());
    }
}

pub async fn fetch_features(url: &str) -> Result<Vec<GeoFeature>, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let body = resp
        .text()
        .await
        .map_err(|e| format!("read error: {e}"))?;
    decode_features(&body, COUNTRIES_OBJECT)
}

/// Fetch the world topology once and publish it into `features`.
///
/// On failure the signal stays `None`, so the map keeps showing its
/// loading placeholder. Nothing is written after `guard` is released.
pub fn load(features: RwSignal<Option<Vec<GeoFeature>>>, guard: MountGuard) {
    wasm_bindgen_futures::spawn_local(async move {
        match fetch_features(TOPOLOGY_PATH).await {
            Ok(loaded) => {
                if guard.is_mounted() {
                    features.set(Some(loaded));
                }
            }
            Err(err) => {
                warn_topology_once(&format!("Failed to load world topology: {err}"));
            }
        }
    });
}
