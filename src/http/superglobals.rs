use std::sync::Arc;

use dashmap::DashMap;
use tracing::trace;

use crate::http::params::ParamMap;

/// 需要镜像的参数组
///
/// 请求体参数（post）不在其中：它们从不写入镜像。
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    Query,
    Cookie,
}

/// 请求对象的写穿（write-through）接收端
///
/// 每次 query / cookie 变更后，请求对象都会把变更后的完整表写过来。
pub trait Mirror: Send + Sync {
    fn write(&self, scope: Scope, values: &ParamMap);
}

/// 进程级测试上下文：显式注入，取代隐式的全局变量
///
/// clone 出来的句柄共享同一份数据。
#[derive(Debug, Clone, Default)]
pub struct Superglobals {
    scopes: Arc<DashMap<Scope, ParamMap>>,
}

impl Superglobals {
    pub fn new() -> Self {
        Self::default()
    }

    /// 某个作用域的快照，从未写入时为空表
    pub fn get(&self, scope: Scope) -> ParamMap {
        self.scopes
            .get(&scope)
            .map(|r| r.value().clone())
            .unwrap_or_default()
    }

    pub fn value(&self, scope: Scope, key: &str) -> Option<String> {
        self.scopes
            .get(&scope)
            .and_then(|r| r.value().get(key).cloned())
    }

    /// 清空所有作用域，测试之间调用
    pub fn reset(&self) {
        self.scopes.clear();
    }
}

impl Mirror for Superglobals {
    fn write(&self, scope: Scope, values: &ParamMap) {
        trace!(?scope, len = values.len(), "mirror write-through");
        self.scopes.insert(scope, values.clone());
    }
}
