use leptos::prelude::*;

pub fn advisory_intro(count: usize) -> String {
    let noun = if count == 1 { "country" } else { "countries" };
    format!("The following {noun} from your collection could not be matched to the world map:")
}

/// Advisory listing collection countries with no shape on the map.
/// Renders nothing when every country matched.
#[component]
pub fn UnmappedCountries(#[prop(into)] countries: Signal<Vec<String>>) -> impl IntoView {
    move || {
        let list = countries.get();
        if list.is_empty() {
            return ().into_any();
        }
        let intro = advisory_intro(list.len());
        view! {
            <div
                role="status"
                style="margin-top: 16px; padding: 14px 16px; background: rgba(255,251,235,0.92); border: 1px solid #fde68a; border-radius: 10px; display: flex; gap: 8px; align-items: flex-start;"
            >
                <span role="img" aria-label="Warning" style="color: #d97706; font-size: 1.1rem;">"\u{26A0}\u{FE0F}"</span>
                <div style="flex: 1;">
                    <h3 style="margin: 0 0 4px; font-size: 0.85rem; font-weight: 600; color: #92400e;">
                        "Countries Not Found on Map"
                    </h3>
                    <p style="margin: 0 0 8px; font-size: 0.75rem; color: #b45309;">{intro}</p>
                    <ul style="margin: 0; padding-left: 18px; font-size: 0.75rem; color: #92400e; font-weight: 500;">
                        {list.into_iter().map(|country| view! { <li>{country}</li> }).collect_view()}
                    </ul>
                    <p style="margin: 8px 0 0; font-size: 0.75rem; color: #d97706; font-style: italic;">
                        "These countries won't appear on the map. Consider adding an alias for them."
                    </p>
                </div>
            </div>
        }
        .into_any()
    }
}
