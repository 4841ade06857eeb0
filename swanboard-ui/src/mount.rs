/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Browser entry points: bind the poller to the page and keep it alive.
//!
//! On load the start hook installs console logging and, when the page asks
//! for it, mounts the status view. Pages may also mount by hand:
//!
//! ```js
//! import init, { mountStatusView } from "./swanboard_ui.js";
//! await init();
//! const status = mountStatusView({ preset: "compact", refreshIntervalMs: 10000 });
//! // later, when the panel is torn down
//! status.unmount();
//! ```

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use log::{debug, error, info, warn};
use swanboard_client::{ApiError, AuthMode, StatusApiClient};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::auto_refresh::{schedule_auto_refresh, AutoRefreshHandle};
use crate::config::{ConfigError, PollerConfig, RuntimeOverrides};
use crate::dom::DomStatusView;
use crate::platform::{self, PlatformTimer};
use crate::poller::StatusPoller;

/// Global the page sets before loading the module.
const RUNTIME_CONFIG_KEY: &str = "__SWANBOARD_CONFIG";

pub type DomPoller = StatusPoller<StatusApiClient, DomStatusView, PlatformTimer>;

#[derive(Debug, Error)]
pub enum MountError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] ApiError),

    #[error("no browser document available")]
    NoDocument,

    #[error("cannot resolve page origin: {0}")]
    Origin(String),
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// A mounted status view. Dropping it or calling `unmount()` stops the
/// auto-refresh loop and detaches the click listener.
#[wasm_bindgen]
pub struct StatusMount {
    poller: Rc<DomPoller>,
    auto_refresh: Option<AutoRefreshHandle>,
    click: Option<(Element, Closure<dyn FnMut(Event)>)>,
}

#[wasm_bindgen]
impl StatusMount {
    /// Same as clicking the refresh trigger.
    pub fn refresh(&self) {
        spawn_manual_refresh(self.poller.clone());
    }

    pub fn unmount(&mut self) {
        if let Some(handle) = self.auto_refresh.take() {
            handle.cancel();
        }
        if let Some((trigger, listener)) = self.click.take() {
            if let Err(e) = trigger
                .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            {
                warn!("failed to detach refresh listener: {e:?}");
            }
        }
    }

    #[wasm_bindgen(getter, js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.auto_refresh.is_some()
    }
}

impl Drop for StatusMount {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn spawn_manual_refresh(poller: Rc<DomPoller>) {
    platform::spawn(async move {
        poller.trigger_manual_refresh().await;
    });
}

/// Bind to the page described by `config` and start auto-refresh.
///
/// Missing elements are not an error: without a trigger there is no manual
/// refresh, and without a container every tick is skipped.
pub fn mount(config: PollerConfig) -> Result<StatusMount, MountError> {
    config.validate()?;
    let window = web_sys::window().ok_or(MountError::NoDocument)?;
    let document = window.document().ok_or(MountError::NoDocument)?;

    let base_url = if config.api_base_url.is_empty() {
        window
            .location()
            .origin()
            .map_err(|e| MountError::Origin(format!("{e:?}")))?
    } else {
        config.api_base_url.clone()
    };
    let client = StatusApiClient::new(&base_url, AuthMode::Browser)?;
    let view = DomStatusView::new(document, &config);
    let poller = Rc::new(StatusPoller::new(
        client,
        view,
        PlatformTimer,
        Duration::from_millis(config.min_busy_ms),
    ));

    let click = match poller.view().trigger() {
        Some(trigger) => {
            let target = poller.clone();
            let listener = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                spawn_manual_refresh(target.clone());
            });
            if let Err(e) = trigger
                .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            {
                warn!("failed to attach refresh listener: {e:?}");
            }
            Some((trigger, listener))
        }
        None => {
            debug!("no #{} element, manual refresh disabled", config.trigger_id);
            None
        }
    };

    let (task, handle) = schedule_auto_refresh(
        poller.clone(),
        Duration::from_millis(config.refresh_interval_ms),
    );
    platform::spawn(task);

    info!(
        "status view mounted on #{} (every {} ms, api {})",
        config.container_id,
        config.refresh_interval_ms,
        poller.source().base_url()
    );
    Ok(StatusMount {
        poller,
        auto_refresh: Some(handle),
        click,
    })
}

/// Mount from JS. `options` takes the same keys as `window.__SWANBOARD_CONFIG`.
#[wasm_bindgen(js_name = mountStatusView)]
pub fn mount_status_view(options: JsValue) -> Result<StatusMount, JsValue> {
    let overrides = if options.is_undefined() || options.is_null() {
        RuntimeOverrides::default()
    } else {
        parse_overrides(options)?
    };
    Ok(mount(overrides.apply().map_err(MountError::from)?)?)
}

fn parse_overrides(value: JsValue) -> Result<RuntimeOverrides, MountError> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| MountError::Config(ConfigError::Parse(e.to_string())))
}

/// `window.__SWANBOARD_CONFIG`, if the page defined it.
pub fn runtime_overrides() -> Result<Option<RuntimeOverrides>, MountError> {
    let window = web_sys::window().ok_or(MountError::NoDocument)?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(RUNTIME_CONFIG_KEY))
        .unwrap_or(JsValue::UNDEFINED);
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    parse_overrides(value).map(Some)
}

/// Config for the start hook, or `None` when nothing should be mounted.
///
/// A page with an explicit config mounts unless it sets `autoMount: false`.
/// A page without one mounts the dashboard preset only if it carries the
/// status container or trigger.
fn auto_mount_config() -> Result<Option<PollerConfig>, MountError> {
    let config = match runtime_overrides()? {
        Some(overrides) => overrides.apply()?,
        None => {
            let config = PollerConfig::dashboard();
            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or(MountError::NoDocument)?;
            let has_elements = document.get_element_by_id(&config.container_id).is_some()
                || document.get_element_by_id(&config.trigger_id).is_some();
            if !has_elements {
                return Ok(None);
            }
            config
        }
    };
    Ok(config.auto_mount.then_some(config))
}

thread_local! {
    static AUTO_MOUNT: RefCell<Option<StatusMount>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(feature = "debugAssertions") {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);

    match auto_mount_config().and_then(|config| config.map(mount).transpose()) {
        Ok(Some(status)) => AUTO_MOUNT.with(|slot| *slot.borrow_mut() = Some(status)),
        Ok(None) => debug!("nothing to auto-mount"),
        Err(e) => error!("failed to mount status view: {e}"),
    }
}

/// Tear down the view mounted by the start hook, if any.
#[wasm_bindgen(js_name = unmountAutoStatusView)]
pub fn unmount_auto_status_view() {
    AUTO_MOUNT.with(|slot| {
        if let Some(mut status) = slot.borrow_mut().take() {
            status.unmount();
        }
    });
}
