use std::path::PathBuf;
use std::sync::Arc;

use snafu::{prelude::*, Whatever};
use stay_focused::config;
use stay_focused::driver::{self, DriverConfig, DriverHandle};
use stay_focused::notify::DesktopNotifier;
use stay_focused::storage::JsonSnapshotStore;
use stay_focused::utils::xdg::{Xdg, XdgBaseKind};

use crate::cli::Arguments;

const APP_NAME: &str = "stay-focused";

pub async fn bootstrap(arg: &Arguments) -> Result<DriverHandle, Whatever> {
    let config = driver_config(arg)?;
    let store = Arc::new(JsonSnapshotStore::new(snapshot_path(arg)?));
    let notifier = Arc::new(DesktopNotifier::new(APP_NAME.to_owned()));

    let handle = driver::spawn(config, store, notifier)
        .await
        .whatever_context("Could not spawn the timer driver")?;

    Ok(handle)
}

fn driver_config(arg: &Arguments) -> Result<DriverConfig, Whatever> {
    let res = match &arg.config {
        Some(path) => config::load_with_path(path.clone()),
        None => config::load_with_xdg(APP_NAME.to_owned()),
    };

    let configuration = res.whatever_context("Could not load configuration")?;
    configuration
        .try_into_driver_config()
        .whatever_context("Could not validate configuration")
}

fn snapshot_path(arg: &Arguments) -> Result<PathBuf, Whatever> {
    match &arg.state {
        Some(path) => Ok(path.clone()),
        None => Xdg::new(APP_NAME)
            .and_then(|xdg| xdg.resolve_create(XdgBaseKind::State, "snapshot.json"))
            .whatever_context("Could not use XDG base directories"),
    }
}
