pub mod module;
pub mod route;

use std::fmt::Debug;

use indexmap::IndexMap;
use thiserror::Error;
use tracing::debug;

use crate::http::{front::FrontConfig, params::ParamMap};

pub use module::ModuleRoute;
pub use route::{Segment, TemplateRoute};

/// 未指定路由名时使用的路由
pub const DEFAULT_ROUTE: &str = "default";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("{0} is not specified")]
    MissingParameter(String),
    #[error("route {0} is not defined")]
    RouteNotFound(String),
    #[error("invalid route template: {0}")]
    InvalidTemplate(String),
}

/// 可以由参数表反向生成路径的路由
pub trait Route: Send + Sync + Debug {
    /// 生成不带首尾 `/` 的路径
    fn assemble(&self, data: &ParamMap, encode: bool) -> Result<String, RouteError>;

    fn defaults(&self) -> &ParamMap;
}

/// 命名路由表
#[derive(Debug, Default)]
pub struct Router {
    routes: IndexMap<String, Box<dyn Route>>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// 同名路由会被替换
    pub fn add_route<R: Route + 'static>(&mut self, name: &str, route: R) -> &mut Self {
        debug!(name, ?route, "add route");
        self.routes.insert(name.to_string(), Box::new(route));
        self
    }

    /// 注册 `default` 模块路由（已存在时不覆盖）
    pub fn add_default_routes(&mut self, config: &FrontConfig) -> &mut Self {
        if !self.has_route(DEFAULT_ROUTE) {
            self.add_route(DEFAULT_ROUTE, ModuleRoute::from_config(config));
        }
        self
    }

    pub fn has_route(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    pub fn route(&self, name: &str) -> Option<&dyn Route> {
        self.routes.get(name).map(|r| r.as_ref())
    }

    pub fn remove_route(&mut self, name: &str) -> Option<Box<dyn Route>> {
        self.routes.shift_remove(name)
    }

    pub fn routes(&self) -> impl Iterator<Item = (&str, &dyn Route)> {
        self.routes.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// 用命名路由生成路径，name 为空时使用 `default`
    pub fn assemble(
        &self,
        data: &ParamMap,
        name: Option<&str>,
        encode: bool,
    ) -> Result<String, RouteError> {
        let name = name.unwrap_or(DEFAULT_ROUTE);
        let route = self
            .route(name)
            .ok_or_else(|| RouteError::RouteNotFound(name.to_string()))?;
        let path = route.assemble(data, encode)?;
        debug!(name, %path, "assembled");
        Ok(path)
    }
}
