use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use parking_lot::{Mutex, MutexGuard};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::http::{
    middlewares::{Plugin, PluginBroker},
    req::Request,
    router::Router,
};

/// 模块目录下存放控制器的子目录名
pub const CONTROLLER_DIRECTORY: &str = "controllers";

/// 前端控制器配置，可从 JSON 加载
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontConfig {
    pub base_url: String,
    pub default_module: String,
    pub default_controller: String,
    pub default_action: String,
    pub module_directories: Vec<PathBuf>,
}

impl Default for FrontConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            default_module: "default".to_string(),
            default_controller: "index".to_string(),
            default_action: "index".to_string(),
            module_directories: Vec::new(),
        }
    }
}

impl FrontConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Invalid front controller config")
    }
}

static INSTANCE: Lazy<Mutex<FrontController>> = Lazy::new(|| Mutex::new(FrontController::new()));

/// 前端控制器：持有请求、路由表、基础 URL、模块目录和插件
#[derive(Debug, Default)]
pub struct FrontController {
    config: FrontConfig,
    request: Option<Box<dyn Request>>,
    router: Router,
    plugins: PluginBroker,
    // 模块名 -> 控制器目录
    controller_directories: IndexMap<String, PathBuf>,
}

impl FrontController {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按配置创建，配置中的模块目录会立即扫描
    pub fn with_config(config: FrontConfig) -> anyhow::Result<Self> {
        let dirs = config.module_directories.clone();
        let base_url = config.base_url.clone();
        let mut front = Self {
            config,
            ..Self::default()
        };
        front.set_base_url(&base_url);
        for dir in dirs {
            front.add_module_directory(dir)?;
        }
        Ok(front)
    }

    /// 进程级单例
    pub fn instance() -> MutexGuard<'static, FrontController> {
        INSTANCE.lock()
    }

    /// 把单例恢复为全新状态
    ///
    /// 内部会获取单例锁：已持有 `instance()` 的 guard 时调用会死锁，
    /// 此时应直接调用 `guard.reset()`。
    pub fn reset_instance() {
        Self::instance().reset();
    }

    /// 清空请求、路由、插件和模块目录，配置回到默认值
    pub fn reset(&mut self) {
        *self = Self::default();
        debug!("front controller reset");
    }

    pub fn config(&self) -> &FrontConfig {
        &self.config
    }

    // ---------- request ----------

    pub fn set_request<R: Request + 'static>(&mut self, request: R) -> &mut Self {
        self.request = Some(Box::new(request));
        self
    }

    pub fn request(&self) -> Option<&dyn Request> {
        self.request.as_deref()
    }

    pub fn request_mut(&mut self) -> Option<&mut (dyn Request + 'static)> {
        self.request.as_deref_mut()
    }

    pub fn take_request(&mut self) -> Option<Box<dyn Request>> {
        self.request.take()
    }

    // ---------- router ----------

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut Router {
        &mut self.router
    }

    /// 注册 `default` 模块路由，使用本控制器的默认模块/控制器/动作
    pub fn add_default_routes(&mut self) -> &mut Self {
        self.router.add_default_routes(&self.config);
        self
    }

    // ---------- base url ----------

    /// 去掉末尾 `/`，非空时保证以 `/` 开头
    pub fn set_base_url(&mut self, base_url: &str) -> &mut Self {
        let trimmed = base_url.trim_end_matches('/');
        self.config.base_url = if trimmed.is_empty() || trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };
        self
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // ---------- modules ----------

    /// 扫描目录：每个含有 `controllers` 子目录的子目录注册为一个模块
    pub fn add_module_directory<P: AsRef<Path>>(&mut self, path: P) -> anyhow::Result<&mut Self> {
        let path = path.as_ref();
        let entries = fs::read_dir(path)
            .with_context(|| format!("Cannot read module directory {}", path.display()))?;

        for entry in entries {
            let entry = entry?;
            let module_path = entry.path();
            if !module_path.is_dir() {
                continue;
            }
            let Some(module) = entry.file_name().to_str().map(str::to_string) else {
                warn!(path = %module_path.display(), "skipping non UTF-8 module name");
                continue;
            };
            if module.starts_with('.') {
                continue;
            }
            let controllers = module_path.join(CONTROLLER_DIRECTORY);
            if controllers.is_dir() {
                debug!(%module, dir = %controllers.display(), "register module");
                self.controller_directories.insert(module, controllers);
            }
        }

        if !self.config.module_directories.iter().any(|d| d == path) {
            self.config.module_directories.push(path.to_path_buf());
        }
        Ok(self)
    }

    /// 已注册模块名，按注册顺序
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.controller_directories.keys().map(String::as_str)
    }

    pub fn controller_directory(&self, module: &str) -> Option<&Path> {
        self.controller_directories.get(module).map(PathBuf::as_path)
    }

    // ---------- plugins ----------

    pub fn register_plugin(&mut self, plugin: Arc<dyn Plugin>) -> anyhow::Result<&mut Self> {
        self.plugins.register(plugin)?;
        Ok(self)
    }

    pub fn plugins(&self) -> &PluginBroker {
        &self.plugins
    }

    pub fn plugins_mut(&mut self) -> &mut PluginBroker {
        &mut self.plugins
    }

    // 以下钩子对当前请求执行插件，没有请求时什么也不做

    pub fn route_startup(&mut self) {
        match self.request.as_deref_mut() {
            Some(request) => self.plugins.route_startup(request),
            None => debug!("route_startup without request"),
        }
    }

    pub fn pre_dispatch(&mut self) {
        match self.request.as_deref_mut() {
            Some(request) => self.plugins.pre_dispatch(request),
            None => debug!("pre_dispatch without request"),
        }
    }

    pub fn post_dispatch(&mut self) {
        match self.request.as_deref_mut() {
            Some(request) => self.plugins.post_dispatch(request),
            None => debug!("post_dispatch without request"),
        }
    }
}
