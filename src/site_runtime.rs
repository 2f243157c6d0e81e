use std::cell::RefCell;
use std::rc::Rc;

use arukoto_core::SiteConfig;

thread_local! {
    static SITE_CONFIG: RefCell<Option<Rc<SiteConfig>>> = RefCell::new(None);
}

/// Returns the page configuration, parsing the embedded `site.toml` on first use.
pub(crate) fn site_config() -> Rc<SiteConfig> {
    if let Some(config) = SITE_CONFIG.with(|slot| slot.borrow().clone()) {
        return config;
    }
    let config = Rc::new(load_embedded());
    set_site_config(config.clone());
    config
}

fn set_site_config(config: Rc<SiteConfig>) {
    SITE_CONFIG.with(|slot| {
        *slot.borrow_mut() = Some(config);
    });
}

fn load_embedded() -> SiteConfig {
    match SiteConfig::embedded() {
        Ok(config) => config,
        Err(err) => {
            gloo::console::error!("site config rejected, using defaults", err.to_string());
            SiteConfig::default()
        }
    }
}
