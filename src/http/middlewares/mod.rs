pub mod put_handler;

use std::{fmt, sync::Arc};

use anyhow::bail;
use tracing::trace;

use crate::http::req::Request;

pub use put_handler::PutHandler;

/// 分发生命周期插件，所有钩子默认为空操作
pub trait Plugin: Send + Sync {
    fn name(&self) -> &str;

    fn route_startup(&self, _request: &mut dyn Request) {}

    fn pre_dispatch(&self, _request: &mut dyn Request) {}

    fn post_dispatch(&self, _request: &mut dyn Request) {}
}

/// 按注册顺序依次调用插件
#[derive(Default)]
pub struct PluginBroker {
    plugins: Vec<Arc<dyn Plugin>>,
}

impl PluginBroker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同名插件只能注册一次
    pub fn register(&mut self, plugin: Arc<dyn Plugin>) -> anyhow::Result<()> {
        if self.has(plugin.name()) {
            bail!("Plugin {} already registered", plugin.name());
        }
        self.plugins.push(plugin);
        Ok(())
    }

    pub fn unregister(&mut self, name: &str) -> bool {
        let before = self.plugins.len();
        self.plugins.retain(|p| p.name() != name);
        self.plugins.len() != before
    }

    pub fn has(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| p.name() == name)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    pub fn route_startup(&self, request: &mut dyn Request) {
        for plugin in &self.plugins {
            trace!(plugin = plugin.name(), "route_startup");
            plugin.route_startup(request);
        }
    }

    pub fn pre_dispatch(&self, request: &mut dyn Request) {
        for plugin in &self.plugins {
            trace!(plugin = plugin.name(), "pre_dispatch");
            plugin.pre_dispatch(request);
        }
    }

    pub fn post_dispatch(&self, request: &mut dyn Request) {
        for plugin in &self.plugins {
            trace!(plugin = plugin.name(), "post_dispatch");
            plugin.post_dispatch(request);
        }
    }
}

impl fmt::Debug for PluginBroker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.plugins.iter().map(|p| p.name()))
            .finish()
    }
}
