use calendar_domain::ClientConfig;

/// Selector of the optional `<meta name="calendar-config" content='{...}'>` tag
const CONFIG_META_SELECTOR: &str = "meta[name=\"calendar-config\"]";

/// Read the client config embedded in the host page, or the defaults
pub fn load() -> ClientConfig {
    let content = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.query_selector(CONFIG_META_SELECTOR).ok().flatten())
        .and_then(|meta| meta.get_attribute("content"));

    let config = ClientConfig::from_embedded(content.as_deref());
    log::info!(
        target: "config",
        "API base: {:?}, holiday countries: {:?}",
        config.api_base_url,
        config.holiday_countries
    );
    config
}
