use glassmap_shared::country;
use glassmap_shared::{CountryStatistic, FilterParam, NavigationRequest, ViewMode};
use leptos::prelude::*;

pub const TOP_COUNTRIES: usize = 12;

/// Medal for the podium, `#N` for everyone else. Ranks start at 1.
pub fn rank_badge(rank: usize) -> (String, Option<&'static str>) {
    match rank {
        1 => ("\u{1F947}".to_string(), Some("Gold Medal")),
        2 => ("\u{1F948}".to_string(), Some("Silver Medal")),
        3 => ("\u{1F949}".to_string(), Some("Bronze Medal")),
        _ => (format!("#{rank}"), None),
    }
}

/// Ranked grid of the countries with the most glasses; each entry filters the gallery.
#[component]
pub fn TopCountries(
    #[prop(into)] country_data: Signal<Vec<CountryStatistic>>,
    #[prop(into)] view_mode: Signal<ViewMode>,
    on_navigate: Callback<NavigationRequest>,
) -> impl IntoView {
    let rows = move || {
        country_data.with(|data| {
            data.iter()
                .take(TOP_COUNTRIES)
                .enumerate()
                .map(|(i, stat)| {
                    let (badge, medal) = rank_badge(i + 1);
                    let flag = country::flag_for(&stat.country);
                    let flag_label = format!("{} flag", stat.country);
                    let name = stat.country.clone();
                    let count = stat.count;
                    view! {
                        <button
                            style="display: flex; justify-content: space-between; align-items: center; width: 100%; padding: 12px; background: rgba(248,250,252,0.6); border: none; border-radius: 8px; text-align: left; cursor: pointer;"
                            on:click=move |_| {
                                let param = FilterParam::for_mode(view_mode.get_untracked());
                                on_navigate.run(NavigationRequest::new(param, name.clone()));
                            }
                        >
                            <span style="display: flex; align-items: center; gap: 12px;">
                                <span
                                    role=medal.map(|_| "img")
                                    aria-label=medal
                                    style="width: 32px; text-align: center; font-size: 1.4rem; color: #94a3b8; font-family: monospace; font-weight: 700;"
                                >
                                    {badge}
                                </span>
                                {(!flag.is_empty()).then(|| view! {
                                    <span role="img" aria-label=flag_label style="font-size: 1.4rem;">{flag}</span>
                                })}
                                <span style="font-weight: 600; color: #334155;">{stat.country.clone()}</span>
                            </span>
                            <span style="font-weight: 700; color: #1d4ed8; background: rgba(255,255,255,0.5); padding: 2px 8px; border-radius: 6px;">
                                {count}
                            </span>
                        </button>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div style="background: rgba(255,255,255,0.85); border-radius: 12px; padding: 24px; box-shadow: 0 4px 16px rgba(15,23,42,0.12);">
            <h3 style="margin: 0 0 16px; font-size: 1.4rem; font-weight: 700; color: #1d4ed8;">
                "\u{1F3C6} Top Countries"
            </h3>
            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 16px;">
                {rows}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn podium_gets_medals() {
        assert_eq!(rank_badge(1), ("\u{1F947}".to_string(), Some("Gold Medal")));
        assert_eq!(rank_badge(2).1, Some("Silver Medal"));
        assert_eq!(rank_badge(3).1, Some("Bronze Medal"));
    }

    #[test]
    fn later_ranks_are_numbered() {
        assert_eq!(rank_badge(4), ("#4".to_string(), None));
        assert_eq!(rank_badge(12), ("#12".to_string(), None));
    }
}
