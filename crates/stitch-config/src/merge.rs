//! Fragment merging.
//!
//! The merge is written out per field instead of going through a generic
//! deep-merge so the conflict rules stay explicit:
//!
//! - list-valued keys concatenate, base entries first;
//! - scalars take the overlay's value only when the overlay sets one;
//! - nested objects merge recursively;
//! - `entry` merges per key, the overlay winning on a shared key.

use crate::fragment::{
    ClientOptions, ConfigFragment, DevServerOptions, ModuleOptions, Optimization, OutputOptions,
};

/// In-place merge of an overlay onto `self`.
pub trait Merge {
    fn merge(&mut self, overlay: Self);
}

impl<T: Merge> Merge for Option<T> {
    fn merge(&mut self, overlay: Self) {
        let Some(overlay) = overlay else {
            return;
        };

        match self {
            Some(base) => base.merge(overlay),
            None => *self = Some(overlay),
        }
    }
}

/// Scalar rule: a set overlay value replaces the base, an unset one keeps it.
fn override_with<T>(slot: &mut Option<T>, overlay: Option<T>) {
    if overlay.is_some() {
        *slot = overlay;
    }
}

impl Merge for ConfigFragment {
    fn merge(&mut self, overlay: Self) {
        override_with(&mut self.mode, overlay.mode);
        for (name, path) in overlay.entry {
            self.entry.insert(name, path);
        }
        self.output.merge(overlay.output);
        override_with(&mut self.devtool, overlay.devtool);
        self.module.merge(overlay.module);
        self.plugins.extend(overlay.plugins);
        self.optimization.merge(overlay.optimization);
        self.dev_server.merge(overlay.dev_server);
    }
}

impl Merge for OutputOptions {
    fn merge(&mut self, overlay: Self) {
        override_with(&mut self.filename, overlay.filename);
        override_with(&mut self.path, overlay.path);
        override_with(&mut self.public_path, overlay.public_path);
    }
}

impl Merge for ModuleOptions {
    fn merge(&mut self, overlay: Self) {
        self.rules.extend(overlay.rules);
    }
}

impl Merge for Optimization {
    fn merge(&mut self, overlay: Self) {
        override_with(&mut self.minimize, overlay.minimize);
        self.minimizer.extend(overlay.minimizer);
    }
}

impl Merge for DevServerOptions {
    fn merge(&mut self, overlay: Self) {
        override_with(&mut self.host, overlay.host);
        override_with(&mut self.port, overlay.port);
        override_with(&mut self.history_api_fallback, overlay.history_api_fallback);
        override_with(&mut self.live_reload, overlay.live_reload);
        self.client.merge(overlay.client);
        override_with(&mut self.hot, overlay.hot);
    }
}

impl Merge for ClientOptions {
    fn merge(&mut self, overlay: Self) {
        override_with(&mut self.overlay, overlay.overlay);
    }
}

impl ConfigFragment {
    /// Consuming form of [`Merge::merge`].
    pub fn merged(mut self, overlay: ConfigFragment) -> Self {
        self.merge(overlay);
        self
    }
}

/// Merge fragments left to right; later fragments win on scalar conflicts.
pub fn merge_fragments(fragments: impl IntoIterator<Item = ConfigFragment>) -> ConfigFragment {
    fragments
        .into_iter()
        .fold(ConfigFragment::default(), ConfigFragment::merged)
}
