use std::fmt;

macro_rules! define_methods {
    ($($name:ident),* $(,)?) => {
        #[repr(u8)]
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum HttpMethod {
            $($name,)*
        }

        pub const HTTP_METHODS: &[&str] = &[$(stringify!($name),)*];

        impl HttpMethod {
            /// 大小写不敏感的解析，未知方法返回 None
            pub fn from_str(s: &str) -> Option<Self> {
                match s.trim().to_ascii_uppercase().as_str() {
                    $(
                        stringify!($name) => Some(HttpMethod::$name),
                    )*
                    _ => None,
                }
            }

            pub fn to_str(&self) -> &'static str {
                match self {
                    $(
                        HttpMethod::$name => stringify!($name),
                    )*
                }
            }
        }
    };
}

define_methods! {
    GET,
    HEAD,
    POST,
    PUT,
    DELETE,
    CONNECT,
    OPTIONS,
    TRACE,
    PATCH,
}

impl HttpMethod {
    /// 与原始字符串逐字节比较（区分大小写）
    ///
    /// 请求对象按原样保存 method，谓词 `is_get()` 等依赖这里的精确比较。
    #[inline]
    pub fn matches(&self, raw: &str) -> bool {
        self.to_str() == raw
    }
}

impl Default for HttpMethod {
    fn default() -> Self {
        HttpMethod::GET
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}
