use leptos::prelude::*;
use leptos::task::spawn_local;

use super::StatsStore;

/// "1234" reads better as "1.2K" on a stat tile.
pub fn format_count(value: u64) -> String {
    if value >= 1000 {
        let thousands = value as f64 / 1000.0;
        format!("{:.1}K", (thousands * 10.0).floor() / 10.0)
    } else {
        value.to_string()
    }
}

/// Landing-page section with the platform counters.
#[component]
pub fn StatsSection() -> impl IntoView {
    let store = expect_context::<StatsStore>();

    {
        let store = store.clone();
        spawn_local(async move {
            store.fetch_stats().await;
        });
    }

    let retry = {
        let store = store.clone();
        move |_| {
            let store = store.clone();
            spawn_local(async move {
                store.fetch_stats().await;
            });
        }
    };

    let stats = store.stats;
    let error = store.error;

    view! {
        <section class="stats-section">
            <Show
                when=move || error.get().is_none()
                fallback=move || {
                    view! {
                        <div class="stats-error">
                            <p class="error-banner">{move || error.get().unwrap_or_default()}</p>
                            <button class="button" on:click=retry.clone()>"Retry"</button>
                        </div>
                    }
                }
            >
                <div class="stats-grid">
                    <div class="stat-card">
                        <span class="stat-value">
                            {move || stats.get().map(|s| format_count(s.total_events)).unwrap_or_else(|| "0".into())}
                        </span>
                        <span class="stat-label">"Events created"</span>
                        <span class="stat-detail">"And growing every day"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-value">
                            {move || stats.get().map(|s| format_count(s.total_users)).unwrap_or_else(|| "0".into())}
                        </span>
                        <span class="stat-label">"Registered users"</span>
                        <span class="stat-detail">"An active community"</span>
                    </div>
                </div>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1.0K");
        assert_eq!(format_count(1250), "1.2K");
        assert_eq!(format_count(12800), "12.8K");
    }
}
