use gloo_storage::Storage;
use leptos::prelude::*;

use glassmap_shared::stats::aggregate;
use glassmap_shared::{Brand, CollectionStats, NavigationRequest, ViewMode};

use crate::collection;
use crate::top_countries::TopCountries;
use crate::world_map::WorldMap;

const SETTINGS_KEY: &str = "glassmap_settings";

/// Preferences that survive a reload. Map pan/zoom is never stored.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    pub view_mode: ViewMode,
}

#[derive(Debug, Clone, PartialEq)]
enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Thousands-separated count, e.g. `12,345`.
pub(crate) fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn navigate(request: NavigationRequest) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let path = request.query_path(|value| {
        js_sys::encode_uri_component(value)
            .as_string()
            .unwrap_or_default()
    });
    if let Err(err) = window.location().set_href(&path) {
        web_sys::console::warn_1(&format!("Navigation failed: {err:?}").into());
    }
}

/// Statistics page: view toggle, summary cards, world map and top countries.
#[component]
pub fn App() -> impl IntoView {
    let saved: Settings = gloo_storage::LocalStorage::get(SETTINGS_KEY).unwrap_or_default();
    let view_mode: RwSignal<ViewMode> = RwSignal::new(saved.view_mode);
    let brands: RwSignal<Vec<Brand>> = RwSignal::new(Vec::new());
    let status: RwSignal<LoadStatus> = RwSignal::new(LoadStatus::Loading);

    Effect::new(move || {
        let settings = Settings {
            view_mode: view_mode.get(),
        };
        let _ = gloo_storage::LocalStorage::set(SETTINGS_KEY, &settings);
    });

    wasm_bindgen_futures::spawn_local(async move {
        match collection::fetch_brands().await {
            Ok(loaded) => {
                brands.set(loaded);
                status.set(LoadStatus::Ready);
            }
            Err(err) => {
                web_sys::console::warn_1(&format!("Failed to load collection index: {err}").into());
                status.set(LoadStatus::Failed(err));
            }
        }
    });

    let stats: Memo<CollectionStats> =
        Memo::new(move |_| brands.with(|all| aggregate(all, view_mode.get())));
    let country_data = Memo::new(move |_| stats.with(|s| s.country_data.clone()));
    let on_navigate = Callback::new(navigate);

    let content = move || match status.get() {
        LoadStatus::Loading => view! {
            <div style="display: flex; justify-content: center; align-items: center; min-height: 60vh; font-size: 1.5rem; color: #64748b;">
                "Loading statistics..."
            </div>
        }
        .into_any(),
        LoadStatus::Failed(err) => view! {
            <div style="display: flex; flex-direction: column; justify-content: center; align-items: center; min-height: 60vh; color: #ef4444;">
                <p style="margin: 0; font-size: 1.5rem;">"Error loading statistics"</p>
                <p style="margin: 8px 0 0; font-size: 0.8rem; color: #94a3b8;">{err}</p>
            </div>
        }
        .into_any(),
        LoadStatus::Ready => view! {
            <div style="display: flex; justify-content: center; margin-bottom: 32px;">
                <ViewModeToggle view_mode=view_mode />
            </div>
            <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 24px; margin-bottom: 32px;">
                <StatsCard
                    title=Signal::derive(|| "Total Glasses".to_string())
                    value=Signal::derive(move || stats.with(|s| s.total_glasses))
                    icon="\u{1F37A}"
                    description=Signal::derive(|| "In your collection".to_string())
                />
                <StatsCard
                    title=Signal::derive(move || match view_mode.get() {
                        ViewMode::Purchase => "Countries Visited".to_string(),
                        ViewMode::Origin => "Brewery Countries".to_string(),
                    })
                    value=Signal::derive(move || stats.with(|s| s.unique_countries))
                    icon="\u{1F30D}"
                    description=Signal::derive(move || match view_mode.get() {
                        ViewMode::Purchase => "Where you bought glasses".to_string(),
                        ViewMode::Origin => "Origin of breweries".to_string(),
                    })
                />
                <StatsCard
                    title=Signal::derive(|| "Beer Brands".to_string())
                    value=Signal::derive(move || stats.with(|s| s.total_brands))
                    icon="\u{1F3ED}"
                    description=Signal::derive(|| "Different breweries".to_string())
                />
            </div>
            <div style=PANEL_STYLE>
                <h2 style="margin: 0 0 8px; text-align: center; font-size: 1.75rem; font-weight: 700; color: #1d4ed8;">
                    {move || match view_mode.get() {
                        ViewMode::Purchase => "\u{1F5FA}\u{FE0F} Where I Bought My Glasses",
                        ViewMode::Origin => "\u{1F3ED} Brewery Origins",
                    }}
                </h2>
                <p style="margin: 0 0 24px; text-align: center; color: #475569;">
                    "Click on a country to filter the gallery"
                </p>
                <WorldMap country_data=country_data view_mode=view_mode on_navigate=on_navigate />
            </div>
            <TopCountries country_data=country_data view_mode=view_mode on_navigate=on_navigate />
        }
        .into_any(),
    };

    view! {
        <div style="max-width: 1400px; margin: 0 auto; padding: 32px 16px; font-family: 'Inter', system-ui, sans-serif;">
            <header style="text-align: center; margin-bottom: 48px; padding: 32px; background: rgba(255,255,255,0.85); border-radius: 12px; box-shadow: 0 4px 16px rgba(15,23,42,0.12);">
                <h1 style="margin: 0 0 8px; font-size: 2.5rem; font-weight: 700; color: #1d4ed8;">
                    "\u{1F4CA} Collection Statistics"
                </h1>
                <p style="margin: 0; font-size: 1.15rem; color: #475569;">
                    "Explore your beer glass collection through interactive visualizations"
                </p>
            </header>
            {content}
        </div>
    }
}

const PANEL_STYLE: &str = "margin-bottom: 32px; padding: 24px; background: rgba(255,255,255,0.85); border-radius: 12px; box-shadow: 0 4px 16px rgba(15,23,42,0.12);";

#[component]
fn ViewModeToggle(view_mode: RwSignal<ViewMode>) -> impl IntoView {
    let button = move |mode: ViewMode, label: &'static str| {
        let active = move || view_mode.get() == mode;
        view! {
            <button
                aria-pressed=move || if active() { "true" } else { "false" }
                style="padding: 12px 24px; border: none; border-radius: 8px; font-weight: 600; cursor: pointer; transition: background 0.2s, color 0.2s;"
                style:background=move || if active() { "#1d4ed8" } else { "transparent" }
                style:color=move || if active() { "#ffffff" } else { "#475569" }
                on:click=move |_| view_mode.set(mode)
            >
                {label}
            </button>
        }
    };

    view! {
        <div style="display: inline-flex; gap: 8px; padding: 8px; background: rgba(255,255,255,0.85); border-radius: 12px; box-shadow: 0 4px 16px rgba(15,23,42,0.12);">
            {button(ViewMode::Purchase, "\u{1F6CD}\u{FE0F} Where I Bought")}
            {button(ViewMode::Origin, "\u{1F3ED} Brewery Origin")}
        </div>
    }
}

#[component]
fn StatsCard(
    title: Signal<String>,
    value: Signal<usize>,
    icon: &'static str,
    description: Signal<String>,
) -> impl IntoView {
    view! {
        <div style="display: flex; align-items: flex-start; justify-content: space-between; padding: 24px; background: rgba(255,255,255,0.85); border-radius: 12px; box-shadow: 0 4px 16px rgba(15,23,42,0.12);">
            <div style="flex: 1;">
                <p style="margin: 0 0 4px; font-size: 0.85rem; font-weight: 600; color: #475569; text-transform: uppercase; letter-spacing: 0.05em;">
                    {move || title.get()}
                </p>
                <p style="margin: 0 0 8px; font-size: 2.25rem; font-weight: 700; color: #1d4ed8;">
                    {move || format_count(value.get())}
                </p>
                <p style="margin: 0; font-size: 0.75rem; color: #64748b;">{move || description.get()}</p>
            </div>
            <div style="font-size: 3rem; opacity: 0.2; margin-left: 16px;">{icon}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_default_to_purchase_view() {
        assert_eq!(Settings::default().view_mode, ViewMode::Purchase);
    }

    #[test]
    fn settings_tolerate_missing_and_unknown_fields() {
        let settings: Settings = serde_json::from_str(r#"{"show_names": true}"#).expect("settings");
        assert_eq!(settings, Settings::default());
        let settings: Settings =
            serde_json::from_str(r#"{"view_mode": "origin"}"#).expect("settings");
        assert_eq!(settings.view_mode, ViewMode::Origin);
    }

    #[test]
    fn counts_are_grouped_by_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
